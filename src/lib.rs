//! Holdall - ownership-carrying containers for polymorphic items
//!
//! # Overview
//!
//! The central type is [`Array`]: a growable buffer of slots, each either
//! empty or owning one `Box<dyn Item>`. It supports indexed access, ordered
//! insertion and removal with shifting, sparse writes past the end, and
//! lookup by value through the [`Item`] equality capability.
//!
//! # Quick Start
//!
//! ```
//! use holdall::Array;
//!
//! let mut array = Array::new();
//! array.append(Box::new("x1")).unwrap();
//! array.append(Box::new("x2")).unwrap();
//! array.insert(1, Box::new("x3")).unwrap();
//!
//! assert_eq!(array.index_of(&"x3"), Some(1));
//! array.remove_by_index(0).unwrap();
//! array.remove_by_value(&"x2").unwrap();
//! assert_eq!(array.len(), 1);
//! assert_eq!(array.get_as::<&str>(0), Some(&"x3"));
//! ```
//!
//! # Ownership
//!
//! The array owns every item it holds and drops each exactly once. Items
//! leave the array only through [`Array::set`] / [`Array::take`], which hand
//! them back to the caller, or when a failed insert returns them inside an
//! [`InsertError`].
//!
//! # Logging
//!
//! Failures are also reported as `tracing` warnings. Call
//! [`logging::init`] to print them (to stderr, or to the writer set in
//! [`logging::LogConfig`]) when the host application has no subscriber of
//! its own.

pub mod logging;

// Re-export public API from holdall_core
pub use holdall_core::{Array, ArrayError, DEFAULT_CAPACITY, InsertError, Item};
pub use holdall_core::{array, error, item};
