// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! VacantSlot - a reserved, not yet initialized position inside a HeadVec.

use core::mem::ManuallyDrop;
use core::ptr;

use crate::head_vec::HeadVec;
use crate::traits::{Global, RawAlloc};

/// A slot opened by [`HeadVec::append_slot`] or [`HeadVec::insert_slot`].
///
/// While the slot is alive the vector reports `len() == index()`: the gap and
/// the shifted tail are hidden. [`write`](Self::write) fills the gap and
/// commits the new length. Dropping the slot unwritten closes the gap again.
///
/// # Example
///
/// ```rust
/// use headvec::{HeadVec, HeadVecError};
///
/// fn example() -> Result<(), HeadVecError> {
///     let mut vec = HeadVec::new();
///     vec.push('a')?;
///     vec.push('c')?;
///
///     let slot = vec.insert_slot(1)?;
///     assert_eq!(slot.index(), 1);
///     slot.write('b');
///
///     assert_eq!(vec.as_slice(), &['a', 'b', 'c']);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[must_use = "an unwritten slot is closed again when dropped"]
pub struct VacantSlot<'a, T, A: RawAlloc = Global> {
    vec: &'a mut HeadVec<T, A>,
    index: usize,
    tail: usize,
}

impl<'a, T, A: RawAlloc> VacantSlot<'a, T, A> {
    /// `vec.len()` must already equal `index`, with `tail` live elements stored
    /// at `[index + 1, index + 1 + tail)` and capacity for all of them.
    pub(crate) fn new(vec: &'a mut HeadVec<T, A>, index: usize, tail: usize) -> Self {
        debug_assert_eq!(vec.len(), index);
        debug_assert!(index + tail < vec.capacity());

        Self { vec, index, tail }
    }

    /// Position of the slot inside the vector.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Initializes the slot with `value` and returns a reference to it.
    pub fn write(self, value: T) -> &'a mut T {
        let this = ManuallyDrop::new(self);

        // SAFETY (PRECONDITIONS ARE MET): `this` is never dropped, so the exclusive borrow
        // is moved out exactly once. The slot is in bounds and currently uninitialized.
        unsafe {
            let vec: &'a mut HeadVec<T, A> = ptr::read(&this.vec);
            let slot = vec.data_ptr().add(this.index);
            slot.write(value);
            vec.set_len(this.index + 1 + this.tail);

            &mut *slot
        }
    }
}

impl<T, A: RawAlloc> Drop for VacantSlot<'_, T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): the tail lives right after the gap and moves back
        // into place, restoring the pre-slot length.
        unsafe {
            let slot = self.vec.data_ptr().add(self.index);
            ptr::copy(slot.add(1), slot, self.tail);
            self.vec.set_len(self.index + self.tail);
        }
    }
}

impl<T, A: RawAlloc> core::fmt::Debug for VacantSlot<'_, T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VacantSlot")
            .field("index", &self.index)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}
