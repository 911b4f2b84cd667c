// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for headvec.
use thiserror::Error;

/// Errors that can occur when growing or duplicating a [`HeadVec`](crate::HeadVec).
///
/// Contract violations (out-of-range positions, popping an empty vector) are
/// programming errors and panic instead.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HeadVecError {
    /// The allocator could not provide a block for the requested capacity.
    ///
    /// Also reported when the byte size of `capacity` slots cannot be
    /// represented at all. The buffer that triggered the request is left
    /// unchanged.
    #[error("out of memory: cannot allocate {capacity} slots")]
    OutOfMemory {
        /// Number of element slots that were requested.
        capacity: usize,
    },
}
