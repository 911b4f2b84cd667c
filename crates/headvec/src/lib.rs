// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Header-prefixed growable vector and linear set.
//!
//! `HeadVec<T>` keeps its length, its capacity and its elements in a single
//! allocation: a small header immediately followed by the element slots. Any
//! growth may relocate the whole block, so every mutating operation takes
//! `&mut self` and stale aliases cannot exist.
//!
//! # Core Guarantees
//!
//! - **Amortized growth**: `append_slot()`/`insert_slot()` double the capacity
//!   when the block is full (`0 → 1 → 2 → 4 → 8 ...`).
//! - **Exact reservation**: `reserve(n)` grows to exactly `n` slots and never
//!   shrinks.
//! - **Exact copies**: `copy()` allocates a block whose capacity equals the
//!   source length.
//! - **Fallible allocation**: the only recoverable error is
//!   [`HeadVecError::OutOfMemory`]; a failed reallocation leaves the vector
//!   untouched.
//! - **Checked contracts**: out-of-range positions and popping an empty vector
//!   panic.
//!
//! `HeadSet<T>` is the same engine with an add-if-absent guard: membership is a
//! linear scan over whole elements.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use headvec::{HeadVec, HeadVecError};
//!
//! fn example() -> Result<(), HeadVecError> {
//!     let mut vec = HeadVec::<u32>::new();
//!     assert_eq!(vec.capacity(), 0);
//!
//!     for value in 1..=3 {
//!         vec.push(value)?;
//!     }
//!
//!     assert_eq!(vec.len(), 3);
//!     assert_eq!(vec.capacity(), 4);
//!
//!     vec.insert(0, 0)?;
//!     assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
//!
//!     vec.remove(0);
//!     vec.erase(0, 2);
//!     assert_eq!(vec.as_slice(), &[3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Writing Through a Slot
//!
//! ```rust
//! use headvec::{HeadVec, HeadVecError};
//!
//! fn example() -> Result<(), HeadVecError> {
//!     let mut vec = HeadVec::new();
//!
//!     let slot = vec.append_slot()?;
//!     *slot.write([0u8; 4]) = [1, 2, 3, 4];
//!
//!     assert_eq!(vec[0], [1, 2, 3, 4]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Set
//!
//! ```rust
//! use headvec::{HeadSet, HeadVecError};
//!
//! fn example() -> Result<(), HeadVecError> {
//!     let mut set = HeadSet::new();
//!     set.add("a")?;
//!     set.add("a")?;
//!     set.add("b")?;
//!
//!     assert_eq!(set.len(), 2);
//!     assert_eq!(set.as_slice(), &["a", "b"]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! headvec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`HeadVecBehaviour`] (see its documentation) to drive the
//! `OutOfMemory` paths of your code.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod head_set;
mod head_vec;
mod header;
mod traits;
mod vacant_slot;

#[cfg(test)]
mod tests;

pub use error::HeadVecError;
pub use head_set::HeadSet;
pub use head_vec::HeadVec;
pub use traits::{Global, RawAlloc};
pub use vacant_slot::VacantSlot;

#[cfg(any(test, feature = "test_utils"))]
pub use head_vec::HeadVecBehaviour;
