// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

/// Memory provider behind a [`HeadVec`](crate::HeadVec).
///
/// Every block requested by this crate holds a header followed by the element
/// slots, so layouts passed to these methods are never zero-sized.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of
/// `layout.size()` bytes and aligned to `layout.align()`. A failed
/// `reallocate` must leave the original block valid and untouched.
pub unsafe trait RawAlloc {
    /// Allocates a block for `layout`, or returns `None` on failure.
    ///
    /// # Safety
    ///
    /// `layout` must have a non-zero size.
    unsafe fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes `ptr` to `new_size` bytes, keeping `old.align()`.
    ///
    /// The first `min(old.size(), new_size)` bytes are preserved. On success the
    /// old pointer must no longer be used; on failure it remains valid.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator with layout `old`, and
    /// `new_size` must be non-zero and not overflow `isize::MAX` once rounded
    /// up to `old.align()`.
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new_size: usize)
    -> Option<NonNull<u8>>;

    /// Releases a block.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator with `layout` and must
    /// not be used afterwards.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global allocator.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    unsafe fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        // SAFETY: caller guarantees a non-zero size
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: caller guarantees ptr/old come from `allocate` and new_size is valid
        NonNull::new(unsafe { alloc::alloc::realloc(ptr.as_ptr(), old, new_size) })
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: caller guarantees ptr/layout come from `allocate`
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}
