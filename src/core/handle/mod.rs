//! Operations on a queue that may be absent.
//!
//! A handle is `Option<Queue>`: `None` stands for a queue that was never
//! created or has been destroyed. Every operation is defined for it, so a
//! caller never has to check first.

use tracing::trace;

use crate::core::error::Result;
use crate::core::queue::Queue;

pub trait QueueHandle {
    /// New handle holding an empty queue.
    fn create() -> Self;

    /// `Ok(false)` if the queue is absent.
    fn push_front(&mut self, value: &str) -> Result<bool>;

    /// `Ok(false)` if the queue is absent.
    fn push_back(&mut self, value: &str) -> Result<bool>;

    /// `false` if the queue is absent or empty; `out` is not touched then.
    fn pop_front_into(&mut self, out: Option<&mut [u8]>) -> bool;

    /// 0 for an absent queue.
    fn size(&self) -> usize;

    fn reverse(&mut self);

    fn sort(&mut self);

    /// Releases the queue and every element. No-op once absent.
    fn destroy(&mut self);
}

impl QueueHandle for Option<Queue> {
    fn create() -> Self {
        Some(Queue::new())
    }

    fn push_front(&mut self, value: &str) -> Result<bool> {
        match self {
            Some(queue) => queue.push_front(value).map(|()| true),
            None => Ok(false),
        }
    }

    fn push_back(&mut self, value: &str) -> Result<bool> {
        match self {
            Some(queue) => queue.push_back(value).map(|()| true),
            None => Ok(false),
        }
    }

    fn pop_front_into(&mut self, out: Option<&mut [u8]>) -> bool {
        self.as_mut().is_some_and(|queue| queue.pop_front_into(out))
    }

    fn size(&self) -> usize {
        self.as_ref().map_or(0, Queue::size)
    }

    fn reverse(&mut self) {
        if let Some(queue) = self {
            queue.reverse();
        }
    }

    fn sort(&mut self) {
        if let Some(queue) = self {
            queue.sort();
        }
    }

    fn destroy(&mut self) {
        if let Some(queue) = self.take() {
            trace!(size = queue.size(), "destroying queue");
        }
    }
}
