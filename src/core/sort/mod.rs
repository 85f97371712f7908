//! Linked merge sort.
//!
//! Nodes are reordered by rewiring their `next` links only: no node or value
//! is allocated, copied or dropped. Recursion depth is `O(log n)`.

use std::ptr::NonNull;

use crate::core::node::{Link, Node};

/// First and last node of a non-empty, `None`-terminated chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Chain {
    pub(crate) head: NonNull<Node>,
    pub(crate) tail: NonNull<Node>,
}

/// Sorts the first `len` nodes reachable from `head` in ascending byte-wise
/// order of their values. Equal values keep their input order.
///
/// The returned chain's tail is terminated with `None`.
// cond: len >= 1 and at least `len` nodes are reachable from `head`
pub(crate) unsafe fn sort_chain(head: NonNull<Node>, len: usize) -> Chain {
    debug_assert!(len >= 1, "cannot sort an empty chain");
    let mut head = head;

    if len == 1 {
        unsafe { head.as_mut().next = None };
        return Chain { head, tail: head };
    }

    // Find the right half before the left half is rewired.
    let left_len = len / 2;
    let right_head = unsafe { advance(head, left_len) };

    let left = unsafe { sort_chain(head, left_len) };
    let right = unsafe { sort_chain(right_head, len - left_len) };
    unsafe { merge(left, right) }
}

// cond: at least `steps + 1` nodes are reachable from `node`
unsafe fn advance(mut node: NonNull<Node>, steps: usize) -> NonNull<Node> {
    for _ in 0..steps {
        let next = unsafe { node.as_ref().next };
        debug_assert!(next.is_some(), "chain shorter than its length");
        node = unsafe { next.unwrap_unchecked() };
    }
    node
}

/// Detaches the smaller of the two fronts, preferring `left` on ties.
/// Returns `None` once either side is exhausted.
unsafe fn take_smaller(left: &mut Link, right: &mut Link) -> Link {
    let (l, r) = match (*left, *right) {
        (Some(l), Some(r)) => (l, r),
        _ => return None,
    };
    let taken = if unsafe { r.as_ref().value < l.as_ref().value } {
        *right = unsafe { r.as_ref().next };
        r
    } else {
        *left = unsafe { l.as_ref().next };
        l
    };
    Some(taken)
}

// cond: both chains are sorted, disjoint and `None`-terminated
unsafe fn merge(left: Chain, right: Chain) -> Chain {
    let mut rest_left = Some(left.head);
    let mut rest_right = Some(right.head);

    // Both sides are non-empty, so the first pick always succeeds.
    let Some(head) = (unsafe { take_smaller(&mut rest_left, &mut rest_right) }) else {
        return left;
    };

    let mut tail = head;
    while let Some(node) = unsafe { take_smaller(&mut rest_left, &mut rest_right) } {
        unsafe { tail.as_mut().next = Some(node) };
        tail = node;
    }

    // Exactly one side still has nodes; splice it on whole.
    let (rest, rest_tail) = match (rest_left, rest_right) {
        (Some(rest), _) => (Some(rest), left.tail),
        (None, Some(rest)) => (Some(rest), right.tail),
        (None, None) => (None, tail),
    };
    unsafe { tail.as_mut().next = rest };

    Chain {
        head,
        tail: rest_tail,
    }
}
