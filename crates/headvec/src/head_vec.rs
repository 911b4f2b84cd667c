// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::HeadVecError;
use crate::header::{self, Header};
use crate::traits::{Global, RawAlloc};
use crate::vacant_slot::VacantSlot;

/// Test behaviour for injecting allocation failures in `HeadVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test their `OutOfMemory` handling without exhausting real memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use headvec::{HeadVec, HeadVecBehaviour};
///
///     #[test]
///     fn test_handles_out_of_memory() {
///         let mut vec = HeadVec::<u32>::new();
///         vec.change_behaviour(HeadVecBehaviour::FailAtGrow);
///
///         assert!(vec.push(1).is_err());
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeadVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every growth triggered by `append_slot()`/`insert_slot()` fails.
    FailAtGrow,
    /// Every `reserve()` that would reallocate fails.
    FailAtReserve,
    /// Every `copy()` fails.
    FailAtCopy,
}

/// A growable array stored as one header-prefixed allocation.
///
/// The block starts with the length and capacity, immediately followed by
/// `capacity` slots of `T`. Any growth may move the whole block, which is why
/// every mutating operation takes `&mut self`.
///
/// Growth on append/insert doubles the capacity (`0 → 1 → 2 → 4 → ...`);
/// [`reserve`](Self::reserve) grows to exactly the requested capacity.
///
/// # Example
///
/// ```rust
/// use headvec::{HeadVec, HeadVecError};
///
/// fn example() -> Result<(), HeadVecError> {
///     let mut vec = HeadVec::new();
///     vec.push(1u32)?;
///     vec.push(2)?;
///     vec.push(3)?;
///
///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
///     assert_eq!(vec.capacity(), 4);
///
///     vec.erase(0, 2);
///     assert_eq!(vec.as_slice(), &[3]);
///     assert_eq!(vec.capacity(), 4);
///
///     let copy = vec.copy()?;
///     assert_eq!(copy.as_slice(), &[3]);
///     assert_eq!(copy.capacity(), 1);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct HeadVec<T, A: RawAlloc = Global> {
    header: NonNull<Header>,
    alloc: A,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: HeadVecBehaviour,
    _marker: PhantomData<T>,
}

#[cold]
fn alloc_failure<T>(capacity: usize) -> ! {
    match header::block_layout::<T>(capacity) {
        Ok(layout) => alloc::alloc::handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow: {capacity} slots"),
    }
}

impl<T> HeadVec<T> {
    /// Creates an empty `HeadVec` (length 0, capacity 0).
    ///
    /// Aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error)
    /// if the header cannot be allocated.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty `HeadVec`, reporting allocation failure.
    pub fn try_new() -> Result<Self, HeadVecError> {
        Self::try_new_in(Global)
    }

    /// Creates an empty `HeadVec` with exactly `capacity` slots.
    ///
    /// Aborts if the block cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity_in(capacity, Global) {
            Ok(vec) => vec,
            Err(_) => alloc_failure::<T>(capacity),
        }
    }
}

impl<T, A: RawAlloc> HeadVec<T, A> {
    /// Creates an empty `HeadVec` backed by `alloc`.
    ///
    /// Aborts if the header cannot be allocated.
    pub fn new_in(alloc: A) -> Self {
        match Self::try_new_in(alloc) {
            Ok(vec) => vec,
            Err(_) => alloc_failure::<T>(0),
        }
    }

    /// Creates an empty `HeadVec` backed by `alloc`, reporting allocation failure.
    pub fn try_new_in(alloc: A) -> Result<Self, HeadVecError> {
        Self::try_with_capacity_in(0, alloc)
    }

    /// Creates an empty `HeadVec` with exactly `capacity` slots, backed by `alloc`.
    ///
    /// The header and the slots are requested in a single allocation.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, HeadVecError> {
        let layout = header::block_layout::<T>(capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): the layout holds at least a Header, so it is not zero-sized
        let block =
            unsafe { alloc.allocate(layout) }.ok_or(HeadVecError::OutOfMemory { capacity })?;
        let header = block.cast::<Header>();

        // SAFETY (PRECONDITIONS ARE MET): block is fresh, aligned for Header and large enough
        unsafe {
            header.as_ptr().write(Header { len: 0, capacity });
        }

        Ok(Self {
            header,
            alloc,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: HeadVecBehaviour::default(),
            _marker: PhantomData,
        })
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: HeadVecBehaviour) {
        self.behaviour = behaviour;
    }

    #[inline(always)]
    fn header(&self) -> &Header {
        // SAFETY: self.header always points to a live, initialized block
        unsafe { self.header.as_ref() }
    }

    #[inline(always)]
    fn header_mut(&mut self) -> &mut Header {
        // SAFETY: self.header always points to a live, initialized block owned by self
        unsafe { self.header.as_mut() }
    }

    #[inline(always)]
    pub(crate) fn data_ptr(&self) -> *mut T {
        // SAFETY: self.header always points to a live block laid out for T
        unsafe { header::data_ptr::<T>(self.header) }
    }

    /// Sets the live length.
    ///
    /// # Safety
    ///
    /// `len <= capacity` and slots `[0, len)` must be initialized.
    #[inline(always)]
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.header_mut().len = len;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.header().len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.header().capacity
    }

    /// Returns the allocator backing this vector.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Moves the block to one with room for exactly `new_capacity` slots.
    ///
    /// On failure the current block, its contents and capacity are unchanged.
    #[cold]
    #[inline(never)]
    fn realloc_to(&mut self, new_capacity: usize) -> Result<(), HeadVecError> {
        let new_layout = header::block_layout::<T>(new_capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): the current capacity was validated when it was allocated
        let old_layout = unsafe { header::block_layout_unchecked::<T>(self.capacity()) };

        // SAFETY (PRECONDITIONS ARE MET): self.header was allocated by self.alloc with old_layout,
        // new_layout validated size and alignment
        let block = unsafe {
            self.alloc
                .reallocate(self.header.cast(), old_layout, new_layout.size())
        }
        .ok_or(HeadVecError::OutOfMemory {
            capacity: new_capacity,
        })?;

        self.header = block.cast();
        self.header_mut().capacity = new_capacity;

        Ok(())
    }

    /// Ensures room for one more element using the doubling policy.
    #[inline(always)]
    fn grow_for_one(&mut self) -> Result<(), HeadVecError> {
        let capacity = self.capacity();

        if capacity - self.len() > 0 {
            return Ok(());
        }

        let new_capacity = if capacity == 0 {
            1
        } else {
            capacity
                .checked_mul(2)
                .ok_or(HeadVecError::OutOfMemory {
                    capacity: usize::MAX,
                })?
        };

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, HeadVecBehaviour::FailAtGrow) {
            return Err(HeadVecError::OutOfMemory {
                capacity: new_capacity,
            });
        }

        self.realloc_to(new_capacity)
    }

    /// Ensures `capacity() >= min_capacity`.
    ///
    /// Grows to exactly `min_capacity` slots (no doubling). Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if the block cannot be
    /// reallocated; the vector is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use headvec::{HeadVec, HeadVecError};
    ///
    /// fn example() -> Result<(), HeadVecError> {
    ///     let mut vec = HeadVec::<u64>::new();
    ///     vec.reserve(10)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///
    ///     vec.reserve(3)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), HeadVecError> {
        if self.capacity() >= min_capacity {
            return Ok(());
        }

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, HeadVecBehaviour::FailAtReserve) {
            return Err(HeadVecError::OutOfMemory {
                capacity: min_capacity,
            });
        }

        self.realloc_to(min_capacity)
    }

    /// Opens a new slot at the end of the vector.
    ///
    /// Grows the block if it is full. The slot counts towards `len()` once
    /// [`VacantSlot::write`] is called; dropping it unwritten leaves the
    /// vector as it was (apart from a possible capacity increase).
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if growth fails.
    pub fn append_slot(&mut self) -> Result<VacantSlot<'_, T, A>, HeadVecError> {
        self.grow_for_one()?;

        let index = self.len();

        Ok(VacantSlot::new(self, index, 0))
    }

    /// Opens a new slot at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if growth fails; nothing is shifted.
    pub fn insert_slot(&mut self, pos: usize) -> Result<VacantSlot<'_, T, A>, HeadVecError> {
        let len = self.len();
        assert!(
            pos <= len,
            "insertion index (is {pos}) should be <= len (is {len})"
        );

        self.grow_for_one()?;

        let tail = len - pos;

        // SAFETY (PRECONDITIONS ARE MET): grow_for_one guarantees capacity > len, so
        // [pos + 1, len + 1) is in bounds. Lowering len to pos hides the gap.
        unsafe {
            let slot = self.data_ptr().add(pos);
            ptr::copy(slot, slot.add(1), tail);
            self.set_len(pos);
        }

        Ok(VacantSlot::new(self, pos, tail))
    }

    /// Appends `value`, returning a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if growth fails; `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<&mut T, HeadVecError> {
        Ok(self.append_slot()?.write(value))
    }

    /// Inserts `value` at `pos`, shifting later elements to the right.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, HeadVecError> {
        Ok(self.insert_slot(pos)?.write(value))
    }

    /// Removes `count` elements starting at `pos`, shifting the tail left.
    ///
    /// Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos + count > len()`.
    pub fn erase(&mut self, pos: usize, count: usize) {
        let len = self.len();
        assert!(
            pos <= len && count <= len - pos,
            "erase range (pos {pos}, count {count}) out of bounds of len {len}"
        );

        // SAFETY (PRECONDITIONS ARE MET): [pos, pos + count) and [pos + count, len) are live.
        // len is lowered first so a panicking Drop leaks the tail instead of double-dropping.
        unsafe {
            let base = self.data_ptr();
            self.set_len(pos);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(pos), count));
            ptr::copy(base.add(pos + count), base.add(pos), len - pos - count);
            self.set_len(len - count);
        }
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> T {
        let len = self.len();
        assert!(pos < len, "removal index (is {pos}) should be < len (is {len})");

        // SAFETY (PRECONDITIONS ARE MET): pos < len, the read slot is overwritten by the shift
        unsafe {
            let slot = self.data_ptr().add(pos);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, len - pos - 1);
            self.set_len(len - 1);
            value
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop(&mut self) -> T {
        let len = self.len();
        assert!(len > 0, "pop on empty HeadVec");

        // SAFETY (PRECONDITIONS ARE MET): slot len - 1 is live and no longer counted after set_len
        unsafe {
            self.set_len(len - 1);
            ptr::read(self.data_ptr().add(len - 1))
        }
    }

    /// Drops every element past `len`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        let current = self.len();

        if len >= current {
            return;
        }

        // SAFETY (PRECONDITIONS ARE MET): [len, current) is live; len is lowered before dropping
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.data_ptr().add(len), current - len);
            self.set_len(len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends clones of every element of `src`, growing with the doubling policy.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] on the first failed growth; the
    /// elements appended before it are kept.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), HeadVecError>
    where
        T: Clone,
    {
        for value in src {
            self.push(value.clone())?;
        }

        Ok(())
    }

    /// Allocates an independent copy whose capacity equals `len()`.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if the copy cannot be allocated.
    pub fn copy(&self) -> Result<Self, HeadVecError>
    where
        T: Clone,
        A: Clone,
    {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, HeadVecBehaviour::FailAtCopy) {
            return Err(HeadVecError::OutOfMemory {
                capacity: self.len(),
            });
        }

        let mut copy = Self::try_with_capacity_in(self.len(), self.alloc.clone())?;

        for value in self.iter() {
            // SAFETY (PRECONDITIONS ARE MET): copy has exactly self.len() slots and receives
            // one value per element; len is bumped per write so a panicking clone drops only
            // the initialized prefix.
            unsafe {
                let len = copy.len();
                copy.data_ptr().add(len).write(value.clone());
                copy.set_len(len + 1);
            }
        }

        Ok(copy)
    }

    /// Returns `true` if some element equals `value` (linear scan).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live and the block outlives the borrow of self
        unsafe { slice::from_raw_parts(self.data_ptr(), self.len()) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is live and self is exclusively borrowed
        unsafe { slice::from_raw_parts_mut(self.data_ptr(), self.len()) }
    }
}

impl<T, A: RawAlloc> Drop for HeadVec<T, A> {
    fn drop(&mut self) {
        // SAFETY (PRECONDITIONS ARE MET): live elements are dropped once, then the whole block
        // (header + slots) is released with the layout it was allocated with.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
            let layout = header::block_layout_unchecked::<T>(self.capacity());
            self.alloc.release(self.header.cast(), layout);
        }
    }
}

// Safety: HeadVec uniquely owns its block and elements
unsafe impl<T: Send, A: RawAlloc + Send> Send for HeadVec<T, A> {}
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for HeadVec<T, A> {}

impl<T: core::fmt::Debug, A: RawAlloc> core::fmt::Debug for HeadVec<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadVec")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Default for HeadVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for HeadVec<T, A> {
    fn clone(&self) -> Self {
        match self.copy() {
            Ok(copy) => copy,
            Err(_) => alloc_failure::<T>(self.len()),
        }
    }
}

impl<T: PartialEq, A: RawAlloc, B: RawAlloc> PartialEq<HeadVec<T, B>> for HeadVec<T, A> {
    fn eq(&self, other: &HeadVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for HeadVec<T, A> {}

impl<T: PartialEq, A: RawAlloc> PartialEq<[T]> for HeadVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: RawAlloc, const N: usize> PartialEq<[T; N]> for HeadVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A: RawAlloc> Deref for HeadVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for HeadVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for HeadVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for HeadVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a HeadVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut HeadVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
