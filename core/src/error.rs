//! Error types returned by [`Array`](crate::Array) operations.

use crate::Box;
use crate::item::Item;
use thiserror::Error;

/// Why an array operation could not be carried out.
///
/// Every failure leaves the array exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The allocator refused to provide a buffer of `requested` slots.
    #[error("unable to grow array to {requested} slots")]
    AllocationFailed { requested: usize },

    /// Doubling the capacity to reach `minimum` slots overflowed `usize`.
    #[error("capacity overflow while growing array to hold {minimum} slots")]
    CapacityOverflow { minimum: usize },

    #[error("index {index} is out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("the given item could not be found in the array")]
    NotFound,
}

/// An item the array refused to store, handed back to the caller.
///
/// The array never takes ownership of an item it failed to store, so the
/// caller decides whether to retry, keep, or drop it.
#[derive(Debug, Error)]
#[error("item was not stored in the array")]
pub struct InsertError {
    item: Box<dyn Item>,
    #[source]
    error: ArrayError,
}

impl InsertError {
    pub(crate) fn new(item: Box<dyn Item>, error: ArrayError) -> Self {
        Self { item, error }
    }

    /// The reason the item was rejected.
    pub fn error(&self) -> ArrayError {
        self.error
    }

    pub fn item(&self) -> &dyn Item {
        &*self.item
    }

    /// Takes back ownership of the rejected item.
    pub fn into_item(self) -> Box<dyn Item> {
        self.item
    }
}
