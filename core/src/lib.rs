#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core containers for holdall.
//!
//! The main type is [`Array`], a growable container that owns a sequence of
//! `Box<dyn Item>` slots. See the [`array`] module for its growth and
//! sparse-fill rules.

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod array;
pub mod error;
pub mod item;

pub use array::{Array, DEFAULT_CAPACITY};
pub use error::{ArrayError, InsertError};
pub use item::Item;
