// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Deref;
use core::slice;

use crate::error::HeadVecError;
use crate::head_vec::HeadVec;
use crate::traits::{Global, RawAlloc};

#[cfg(any(test, feature = "test_utils"))]
use crate::head_vec::HeadVecBehaviour;

/// A [`HeadVec`] that only accepts values it does not already contain.
///
/// Membership is a linear scan comparing whole elements with `PartialEq`.
/// Elements keep their insertion order. The set hands out shared views only,
/// so the uniqueness guard cannot be bypassed through it.
///
/// # Example
///
/// ```rust
/// use headvec::{HeadSet, HeadVecError};
///
/// fn example() -> Result<(), HeadVecError> {
///     let mut set = HeadSet::new();
///
///     assert!(set.add(0x0000_0001u32)?);
///     assert!(set.add(0x0000_0101)?);
///     assert!(!set.add(0x0000_0001)?);
///
///     assert_eq!(set.as_slice(), &[0x0000_0001, 0x0000_0101]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct HeadSet<T, A: RawAlloc = Global> {
    inner: HeadVec<T, A>,
}

impl<T> HeadSet<T> {
    /// Creates an empty set. Aborts if the header cannot be allocated.
    pub fn new() -> Self {
        Self {
            inner: HeadVec::new(),
        }
    }

    /// Creates an empty set, reporting allocation failure.
    pub fn try_new() -> Result<Self, HeadVecError> {
        Ok(Self {
            inner: HeadVec::try_new()?,
        })
    }

    /// Creates an empty set with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HeadVec::with_capacity(capacity),
        }
    }
}

impl<T, A: RawAlloc> HeadSet<T, A> {
    /// Creates an empty set backed by `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            inner: HeadVec::new_in(alloc),
        }
    }

    /// Creates an empty set backed by `alloc`, reporting allocation failure.
    pub fn try_new_in(alloc: A) -> Result<Self, HeadVecError> {
        Ok(Self {
            inner: HeadVec::try_new_in(alloc)?,
        })
    }

    /// Changes the failure-injection behaviour of the underlying vector.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: HeadVecBehaviour) {
        self.inner.change_behaviour(behaviour);
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Ensures `capacity() >= min_capacity`, growing to exactly that amount.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), HeadVecError> {
        self.inner.reserve(min_capacity)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.contains(value)
    }

    /// Appends `value` unless it is already present.
    ///
    /// Returns `Ok(true)` if the value was appended and `Ok(false)` if an equal
    /// element already existed (the set is not touched and `value` is dropped).
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if growth fails.
    pub fn add(&mut self, value: T) -> Result<bool, HeadVecError>
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            return Ok(false);
        }

        self.inner.push(value)?;
        Ok(true)
    }

    /// Inserts `value` at `pos` unless it is already present.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent and `pos > len()`.
    ///
    /// # Errors
    ///
    /// Returns [`HeadVecError::OutOfMemory`] if growth fails.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<bool, HeadVecError>
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            return Ok(false);
        }

        self.inner.insert(pos, value)?;
        Ok(true)
    }

    /// Removes `count` elements starting at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos + count > len()`.
    pub fn erase(&mut self, pos: usize, count: usize) {
        self.inner.erase(pos, count);
    }

    /// Removes and returns the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`.
    pub fn remove(&mut self, pos: usize) -> T {
        self.inner.remove(pos)
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn pop(&mut self) -> T {
        self.inner.pop()
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Allocates an independent copy whose capacity equals `len()`.
    pub fn copy(&self) -> Result<Self, HeadVecError>
    where
        T: Clone,
        A: Clone,
    {
        Ok(Self {
            inner: self.inner.copy()?,
        })
    }

    /// Returns the elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the underlying vector.
    pub fn as_vec(&self) -> &HeadVec<T, A> {
        &self.inner
    }

    /// Consumes the set, returning the underlying vector.
    pub fn into_vec(self) -> HeadVec<T, A> {
        self.inner
    }
}

impl<T: core::fmt::Debug, A: RawAlloc> core::fmt::Debug for HeadSet<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadSet")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Default for HeadSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for HeadSet<T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, A: RawAlloc, B: RawAlloc> PartialEq<HeadSet<T, B>> for HeadSet<T, A> {
    fn eq(&self, other: &HeadSet<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for HeadSet<T, A> {}

impl<T, A: RawAlloc> Deref for HeadSet<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for HeadSet<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a HeadSet<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
