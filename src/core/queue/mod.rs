use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::core::error::Result;
use crate::core::node::{copy_terminated, Link, Node};
use crate::core::sort::sort_chain;

/// core queue structure: a singly-linked chain of owned text values
///
/// `head` owns the chain; `tail` aliases its last node so that both ends
/// can be pushed in O(1).
pub struct Queue {
    head: Link,
    tail: Link,
    size: usize,
    _marker: PhantomData<Box<Node>>,
}

// The queue uniquely owns every node reachable from `head`.
unsafe impl Send for Queue {}

impl Queue {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    /// Builds a queue holding `values` in iteration order.
    pub fn try_from_iter<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut queue = Self::new();
        queue.try_extend(values)?;
        Ok(queue)
    }

    /// Pushes every value to the back. Stops at the first allocation failure;
    /// values pushed before it stay in the queue.
    pub fn try_extend<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.push_back(value.as_ref())?;
        }
        Ok(())
    }

    /// Copies `value` into a new node linked ahead of the current head.
    /// On failure the queue is left unchanged.
    pub fn push_front(&mut self, value: &str) -> Result<()> {
        let mut node = Node::alloc(value).inspect_err(|e| warn!("push_front failed: {}", e))?;

        unsafe { node.as_mut().next = self.head };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.size += 1;

        trace!(size = self.size, "push_front");
        self.assert_ends();
        Ok(())
    }

    /// Copies `value` into a new node linked after the current tail.
    /// On failure the queue is left unchanged.
    pub fn push_back(&mut self, value: &str) -> Result<()> {
        let node = Node::alloc(value).inspect_err(|e| warn!("push_back failed: {}", e))?;

        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;

        trace!(size = self.size, "push_back");
        self.assert_ends();
        Ok(())
    }

    /// Removes the front element and hands its value back.
    pub fn pop_front(&mut self) -> Option<String> {
        let head = self.head?;

        self.head = unsafe { head.as_ref().next };
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        let value = unsafe { Node::consume(head) };

        trace!(size = self.size, "pop_front");
        self.assert_ends();
        Some(value)
    }

    /// Removes the front element, copying its value into `out` if given.
    ///
    /// At most `out.len() - 1` bytes are copied and a 0 terminator follows
    /// them; longer values are truncated silently. Returns `false` without
    /// touching `out` when the queue is empty.
    pub fn pop_front_into(&mut self, out: Option<&mut [u8]>) -> bool {
        let Some(value) = self.pop_front() else {
            return false;
        };
        if let Some(out) = out {
            copy_terminated(&value, out);
        }
        true
    }

    /// Get the current number of elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn peek_front(&self) -> Option<&str> {
        self.head.map(|node| unsafe { (*node.as_ptr()).value.as_str() })
    }

    pub fn peek_back(&self) -> Option<&str> {
        self.tail.map(|node| unsafe { (*node.as_ptr()).value.as_str() })
    }

    /// Reverses the chain in place in a single pass without allocating.
    pub fn reverse(&mut self) {
        if self.size < 2 {
            return;
        }

        let mut prev: Link = None;
        let mut cur = self.head;
        while let Some(mut node) = cur {
            unsafe {
                cur = node.as_ref().next;
                node.as_mut().next = prev;
            }
            prev = Some(node);
        }
        // The old head now links to `None`.
        std::mem::swap(&mut self.head, &mut self.tail);

        debug!(size = self.size, "reversed");
        self.assert_ends();
    }

    /// Sorts ascending by byte-wise comparison of the values. Stable, and
    /// performed by relinking the existing nodes.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }
        let Some(head) = self.head else {
            return;
        };

        let mut chain = unsafe { sort_chain(head, self.size) };
        unsafe { chain.tail.as_mut().next = None };
        self.head = Some(chain.head);
        self.tail = Some(chain.tail);

        debug!(size = self.size, "sorted");
        self.assert_ends();
    }

    /// Releases every node and its value.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        self.tail = None;
        self.size = 0;
        while let Some(node) = cur {
            cur = unsafe { node.as_ref().next };
            drop(unsafe { Node::consume(node) });
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.size,
            _marker: PhantomData,
        }
    }

    /// Walks the whole chain and checks it against `size` and `tail`:
    /// exactly `size` nodes, the last of which is `tail` and ends the chain.
    pub fn is_well_formed(&self) -> bool {
        let mut count = 0;
        let mut last: Link = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            count += 1;
            if count > self.size {
                // Longer than recorded, or cyclic.
                return false;
            }
            last = Some(node);
            cur = unsafe { node.as_ref().next };
        }
        count == self.size && last == self.tail
    }

    // --- post-operation assertion: head, tail and size agree ---
    fn assert_ends(&self) {
        debug_assert_eq!(self.size == 0, self.head.is_none(), "size/head mismatch");
        debug_assert_eq!(self.size == 0, self.tail.is_none(), "size/tail mismatch");
        if self.size == 1 {
            debug_assert!(self.head == self.tail, "single node must be head and tail");
        }
        if let Some(tail) = self.tail {
            debug_assert!(unsafe { tail.as_ref().next.is_none() }, "tail must end the chain");
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over the values of a [`Queue`].
pub struct Iter<'a> {
    next: Link,
    remaining: usize,
    _marker: PhantomData<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.next?;
        self.remaining -= 1;
        unsafe {
            self.next = node.as_ref().next;
            Some((*node.as_ptr()).value.as_str())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
