// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for headvec.
//!
//! - [`CountingAlloc`]: a [`RawAlloc`](headvec::RawAlloc) that counts the
//!   requests it serves, shared between clones.
//! - [`LimitAlloc`]: a [`RawAlloc`](headvec::RawAlloc) that refuses blocks
//!   above an adjustable byte limit.
//! - [`index_permutations`] / [`permuted`]: exhaustive ordering helpers.
//!
//! ## License
//!
//! GPL-3.0-only

mod counting;
mod limit;
mod permutations;

pub use counting::{AllocStats, CountingAlloc};
pub use limit::LimitAlloc;
pub use permutations::{index_permutations, permuted};
