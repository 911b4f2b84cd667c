// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block layout: a `Header` immediately followed by the element slots.
//!
//! ```text
//! +-----+----------+---------+---------+-----+---------------+
//! | len | capacity | padding | slot 0  | ... | slot cap - 1  |
//! +-----+----------+---------+---------+-----+---------------+
//! ^ block                    ^ block + data_offset::<T>()
//! ```

use core::alloc::Layout;
use core::mem::{align_of, size_of};
use core::ptr::NonNull;

use crate::error::HeadVecError;

/// Metadata stored at the start of every block.
#[repr(C)]
#[derive(Debug)]
pub(crate) struct Header {
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

/// Byte offset from the start of the block to slot 0.
#[inline(always)]
pub(crate) const fn data_offset<T>() -> usize {
    size_of::<Header>().next_multiple_of(align_of::<T>())
}

#[inline(always)]
pub(crate) const fn block_align<T>() -> usize {
    if align_of::<T>() > align_of::<Header>() {
        align_of::<T>()
    } else {
        align_of::<Header>()
    }
}

/// Layout of a block with room for `capacity` slots.
pub(crate) fn block_layout<T>(capacity: usize) -> Result<Layout, HeadVecError> {
    let oom = HeadVecError::OutOfMemory { capacity };

    let size = size_of::<T>()
        .checked_mul(capacity)
        .and_then(|data| data.checked_add(data_offset::<T>()))
        .ok_or(oom)?;

    Layout::from_size_align(size, block_align::<T>()).map_err(|_| oom)
}

/// Layout of a block that was already allocated with `capacity` slots.
///
/// # Safety
///
/// `block_layout::<T>(capacity)` must have succeeded before.
#[inline(always)]
pub(crate) unsafe fn block_layout_unchecked<T>(capacity: usize) -> Layout {
    let size = data_offset::<T>() + size_of::<T>() * capacity;

    // SAFETY (PRECONDITIONS ARE MET): the same size/align pair was validated by block_layout
    unsafe { Layout::from_size_align_unchecked(size, block_align::<T>()) }
}

/// Pointer to slot 0 of the block starting at `header`.
///
/// # Safety
///
/// `header` must point to a live block laid out for `T`.
#[inline(always)]
pub(crate) unsafe fn data_ptr<T>(header: NonNull<Header>) -> *mut T {
    // SAFETY: data_offset is within (or one past the end of) the block
    unsafe { header.as_ptr().cast::<u8>().add(data_offset::<T>()).cast::<T>() }
}
