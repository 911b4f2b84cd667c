// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator that simulates memory exhaustion.

use core::alloc::Layout;
use core::ptr::NonNull;
use std::cell::Cell;
use std::rc::Rc;

use headvec::{Global, RawAlloc};

/// Delegates to [`Global`] but refuses any block larger than `limit` bytes.
///
/// The limit is shared between clones and can be changed while a vector is
/// using the allocator.
#[derive(Debug, Clone)]
pub struct LimitAlloc {
    limit: Rc<Cell<usize>>,
}

impl LimitAlloc {
    /// Creates an allocator that serves blocks of at most `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: Rc::new(Cell::new(limit)),
        }
    }

    /// Returns the current limit in bytes.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Changes the limit for subsequent requests.
    pub fn set_limit(&self, limit: usize) {
        self.limit.set(limit);
    }
}

unsafe impl RawAlloc for LimitAlloc {
    unsafe fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() > self.limit.get() {
            return None;
        }

        // SAFETY: forwarded contract
        unsafe { Global.allocate(layout) }
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if new_size > self.limit.get() {
            return None;
        }

        // SAFETY: forwarded contract
        unsafe { Global.reallocate(ptr, old, new_size) }
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded contract
        unsafe { Global.release(ptr, layout) }
    }
}
