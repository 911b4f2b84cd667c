// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Allocator that records every request it serves.

use core::alloc::Layout;
use core::ptr::NonNull;
use std::cell::Cell;
use std::rc::Rc;

use headvec::{Global, RawAlloc};

/// Snapshot of the counters of a [`CountingAlloc`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct AllocStats {
    /// Successful `allocate` calls.
    pub allocations: usize,
    /// Successful `reallocate` calls.
    pub reallocations: usize,
    /// `release` calls.
    pub releases: usize,
    /// Bytes currently held.
    pub live_bytes: usize,
}

/// Delegates to [`Global`] and counts calls.
///
/// Clones share the same counters, so a clone handed to a vector can be
/// inspected from the test.
///
/// # Example
///
/// ```
/// use headvec::HeadVec;
/// use headvec_test_utils::CountingAlloc;
///
/// let alloc = CountingAlloc::new();
/// {
///     let mut vec = HeadVec::new_in(alloc.clone());
///     vec.push(1u8).unwrap();
/// }
///
/// let stats = alloc.stats();
/// assert_eq!(stats.allocations, 1);
/// assert_eq!(stats.reallocations, 1);
/// assert_eq!(stats.releases, 1);
/// assert_eq!(stats.live_bytes, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingAlloc {
    stats: Rc<Cell<AllocStats>>,
}

impl CountingAlloc {
    /// Creates an allocator with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counters.
    pub fn stats(&self) -> AllocStats {
        self.stats.get()
    }

    /// Resets every counter except `live_bytes`.
    pub fn reset(&self) {
        let live_bytes = self.stats.get().live_bytes;
        self.stats.set(AllocStats {
            live_bytes,
            ..AllocStats::default()
        });
    }

    fn update(&self, f: impl FnOnce(&mut AllocStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

unsafe impl RawAlloc for CountingAlloc {
    unsafe fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        // SAFETY: forwarded contract
        let block = unsafe { Global.allocate(layout) }?;

        self.update(|stats| {
            stats.allocations += 1;
            stats.live_bytes += layout.size();
        });

        Some(block)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded contract
        let block = unsafe { Global.reallocate(ptr, old, new_size) }?;

        self.update(|stats| {
            stats.reallocations += 1;
            stats.live_bytes = stats.live_bytes - old.size() + new_size;
        });

        Some(block)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded contract
        unsafe { Global.release(ptr, layout) };

        self.update(|stats| {
            stats.releases += 1;
            stats.live_bytes -= layout.size();
        });
    }
}
