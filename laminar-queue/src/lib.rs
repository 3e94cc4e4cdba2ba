//! # laminar-queue
//!
//! First-in first-out containers with pluggable backing storage.
//!
//! A queue is defined by its contract — elements leave in exactly the order
//! they arrived — not by its memory layout. This crate separates the two:
//! [`Queue`] carries the FIFO contract, and a [`QueueStorage`]
//! implementation decides how elements actually live in memory.
//!
//! ## Storage Options
//!
//! | Storage | Layout | enqueue | dequeue | Use Case |
//! |---------|--------|---------|---------|----------|
//! | [`RingStorage`] | double-ended ring buffer | amortized O(1) | O(1) | Default choice |
//! | [`VecStorage`] | contiguous array | amortized O(1) | **O(n)** | Comparison baseline |
//!
//! Both backings produce identical observable behavior for every operation.
//! The difference is structural: removing from the front of a contiguous
//! array shifts every remaining element, so `VecStorage` pays O(n) per
//! dequeue. The ring buffer operates at both ends without touching interior
//! elements. `VecStorage` is kept because the contrast is worth measuring
//! (see the crate benches), not because it is ever the right production
//! choice.
//!
//! ## Quick Start
//!
//! ```
//! use laminar_queue::Queue;
//!
//! let mut queue: Queue<&str> = Queue::new();
//!
//! queue.enqueue("a");
//! queue.enqueue("b");
//! queue.enqueue("c");
//!
//! assert_eq!(queue.peek(), Ok(&"a"));
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.dequeue(), Ok("b"));
//! ```
//!
//! ## Errors
//!
//! `dequeue`, `peek`, and `peek_mut` on an empty queue return [`Empty`].
//! That is the crate's only failure mode: a contract violation surfaced to
//! the caller, who is expected to check [`Queue::is_empty`] first or handle
//! the error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod queue;
pub mod storage;

pub use queue::{Empty, Iter, Queue, RingQueue, VecQueue};
pub use storage::{QueueStorage, RingStorage, VecStorage};
