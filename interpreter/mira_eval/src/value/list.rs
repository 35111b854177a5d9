//! Immutable cons-cell list with structural sharing.

use std::fmt;

use super::heap::Heap;
use super::Value;

/// A cons cell: one element plus the rest of the list.
#[derive(Clone, Debug)]
struct ConsCell {
    head: Value,
    tail: ListValue,
}

/// Immutable singly-linked list.
///
/// The empty list is the shared `None` sentinel; every non-empty list is a
/// chain of `Arc`-shared cons cells. Prepending is O(1) and never mutates
/// the existing list, so tails are structurally shared between lists.
#[derive(Clone)]
pub struct ListValue(Option<Heap<ConsCell>>);

impl ListValue {
    /// The empty list.
    pub fn empty() -> Self {
        ListValue(None)
    }

    /// Prepend an element, leaving `self` untouched.
    pub fn prepend(&self, head: Value) -> Self {
        ListValue(Some(Heap::new(ConsCell {
            head,
            tail: self.clone(),
        })))
    }

    /// Build a list whose head-to-tail order matches `elements`.
    pub fn from_elements(elements: Vec<Value>) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(ListValue::empty(), |tail, head| tail.prepend(head))
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// First element, if non-empty.
    pub fn head(&self) -> Option<&Value> {
        self.0.as_deref().map(|cell| &cell.head)
    }

    /// Rest of the list, if non-empty.
    pub fn tail(&self) -> Option<ListValue> {
        self.0.as_deref().map(|cell| cell.tail.clone())
    }

    /// Iterate over the elements head-to-tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.0.as_deref(),
        }
    }

    /// Number of elements. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the tails of two lists are the same allocation.
    pub fn shares_cell_with(&self, other: &ListValue) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for ListValue {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => {}
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over a [`ListValue`].
pub struct Iter<'a> {
    next: Option<&'a ConsCell>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        let cell = self.next?;
        self.next = cell.tail.0.as_deref();
        Some(&cell.head)
    }
}
