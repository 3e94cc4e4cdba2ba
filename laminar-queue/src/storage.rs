//! Backing-storage strategies for the queue.
//!
//! [`QueueStorage`] captures what [`Queue`](crate::Queue) needs from a
//! backing store: insertion at the back, removal and inspection at the
//! front, plus enough visibility for iteration. Implementations must keep
//! elements in insertion order.
//!
//! # Implementations
//!
//! - [`RingStorage`] - growable double-ended ring buffer, the default
//! - [`VecStorage`] - dynamic contiguous array, O(n) front removal

use std::collections::VecDeque;

/// Backing store with back insertion and front removal.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Insertion order**: elements stay in the order pushed
/// - **Opposite-end access**: `pop_front` and `front` address the oldest
///   element still stored
///
/// The observable behavior of every implementation is identical; cost
/// profiles differ, and unlike the stack case the difference here is
/// asymptotic, not just constant-factor.
pub trait QueueStorage<T> {
    /// Creates storage with room for at least `capacity` elements before
    /// the first reallocation.
    fn with_capacity(capacity: usize) -> Self;

    /// Appends a value at the back end.
    fn push_back(&mut self, value: T);

    /// Removes and returns the value at the front end, if any.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns a reference to the value at the front end, if any.
    fn front(&self) -> Option<&T>;

    /// Returns a mutable reference to the value at the front end, if any.
    fn front_mut(&mut self) -> Option<&mut T>;

    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns the number of elements the storage can hold without
    /// reallocating.
    fn capacity(&self) -> usize;

    /// Drops all stored elements.
    fn clear(&mut self);

    /// Returns the contents front-to-back as up to two contiguous runs.
    ///
    /// Contiguous backings return everything in the first slice and leave
    /// the second empty; ring backings may wrap around their allocation
    /// and split the contents in two.
    fn as_slices(&self) -> (&[T], &[T]);

    /// Returns `true` if no elements are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// RingStorage - growable double-ended ring buffer
// =============================================================================

/// Ring-buffer storage backed by [`VecDeque`].
///
/// Enqueue appends at one end of the ring, dequeue removes from the other;
/// neither shifts interior elements, so both are O(1) (enqueue amortized
/// across growth). This is the structurally correct queue backing.
#[derive(Debug, Clone)]
pub struct RingStorage<T> {
    entries: VecDeque<T>,
}

impl<T> QueueStorage<T> for RingStorage<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.entries.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.entries.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.entries.front_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn as_slices(&self) -> (&[T], &[T]) {
        self.entries.as_slices()
    }
}

impl<T> Default for RingStorage<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

// =============================================================================
// VecStorage - contiguous array, O(n) front removal
// =============================================================================

/// Contiguous array storage backed by [`Vec`].
///
/// Enqueue appends at the array's end (amortized O(1)), but dequeue removes
/// index 0 and shifts every remaining element down — O(n) per call. Kept as
/// a measurable baseline for what front-removal costs on a contiguous
/// array; prefer [`RingStorage`] for real workloads.
#[derive(Debug, Clone)]
pub struct VecStorage<T> {
    entries: Vec<T>,
}

impl<T> QueueStorage<T> for VecStorage<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.entries.push(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        // Shifts the remainder left; this is the O(n) the ring avoids.
        Some(self.entries.remove(0))
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.entries.first()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.entries.first_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn as_slices(&self) -> (&[T], &[T]) {
        (&self.entries, &[])
    }
}

impl<T> Default for VecStorage<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}


#[cfg(test)]
mod bench_dequeue_cost {
    use super::*;
    use hdrhistogram::Histogram;

    #[inline]
    fn rdtscp() -> u64 {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            core::arch::x86_64::__rdtscp(&mut 0)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            std::time::Instant::now().elapsed().as_nanos() as u64
        }
    }

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const DEPTH: usize = 10_000;
    const ITERATIONS: usize = 10_000;

    // Dequeue from a deep queue. The Vec backing shifts DEPTH elements per
    // call; the ring backing is flat regardless of depth.
    fn bench_dequeue<S: QueueStorage<u64>>(name: &str) {
        let mut storage = S::with_capacity(DEPTH + ITERATIONS);
        for i in 0..DEPTH + ITERATIONS {
            storage.push_back(i as u64);
        }

        let mut hist = Histogram::<u64>::new(3).unwrap();

        for _ in 0..ITERATIONS {
            let start = rdtscp();
            let value = storage.pop_front();
            let elapsed = rdtscp() - start;
            assert!(value.is_some());
            hist.record(elapsed.max(1)).unwrap();
        }

        print_histogram(name, &hist);
    }

    #[test]
    #[ignore]
    fn bench_ring_dequeue() {
        bench_dequeue::<RingStorage<u64>>("ring dequeue");
    }

    #[test]
    #[ignore]
    fn bench_vec_dequeue() {
        bench_dequeue::<VecStorage<u64>>("vec dequeue");
    }
}
