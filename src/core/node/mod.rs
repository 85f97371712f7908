use std::ptr::NonNull;

use crate::core::error::{QueueError, Result};

pub(crate) type Link = Option<NonNull<Node>>;

/// One owned text value and the link to its successor.
pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Link,
}

impl Node {
    /// Copies `value` into freshly reserved storage and boxes it into a
    /// detached node. Nothing is allocated for the node if the value
    /// storage cannot be reserved.
    pub(crate) fn alloc(value: &str) -> Result<NonNull<Node>> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|source| QueueError::Allocation {
                requested: value.len(),
                source,
            })?;
        owned.push_str(value);

        let node = Box::new(Node {
            value: owned,
            next: None,
        });
        Ok(NonNull::from(Box::leak(node)))
    }

    // cond: ptr came from `alloc` and no chain links to it anymore
    pub(crate) unsafe fn consume(ptr: NonNull<Self>) -> String {
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        node.value
    }
}

/// Writes at most `out.len() - 1` bytes of `value` into `out` followed by a
/// 0 terminator. Longer values are truncated silently. A zero-capacity
/// buffer is left untouched.
pub(crate) fn copy_terminated(value: &str, out: &mut [u8]) {
    let Some(limit) = out.len().checked_sub(1) else {
        return;
    };
    let bytes = value.as_bytes();
    let n = limit.min(bytes.len());
    out[..n].copy_from_slice(&bytes[..n]);
    out[n] = 0;
}
