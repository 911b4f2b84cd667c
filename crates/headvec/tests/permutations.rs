// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use headvec::{HeadSet, HeadVec};
use headvec_test_utils::{index_permutations, permuted};

const VALUES: [u32; 5] = [10, 20, 30, 40, 50];

/// Inserts each value at its sorted position among the values already present.
fn insert_sorted(vec: &mut HeadVec<u32>, value: u32) {
    let pos = vec.iter().take_while(|present| **present < value).count();
    vec.insert(pos, value).expect("Failed to insert(..)");
}

#[test]
fn test_sorted_insertion_in_every_order() {
    index_permutations(VALUES.len(), |perm| {
        let mut vec = HeadVec::new();

        for value in permuted(&VALUES, perm) {
            insert_sorted(&mut vec, value);
        }

        assert_eq!(vec.as_slice(), &VALUES, "order {perm:?}");
        assert_eq!(vec.capacity(), 8);
    });
}

#[test]
fn test_slot_writes_in_every_order() {
    index_permutations(VALUES.len(), |perm| {
        let mut vec = HeadVec::new();

        for value in permuted(&VALUES, perm) {
            let pos = vec.iter().take_while(|present| **present < value).count();
            let slot = vec.insert_slot(pos).expect("Failed to insert_slot(..)");
            assert_eq!(slot.index(), pos);
            slot.write(value);
        }

        assert_eq!(vec.as_slice(), &VALUES, "order {perm:?}");
    });
}

#[test]
fn test_removal_in_every_order() {
    index_permutations(VALUES.len(), |perm| {
        let mut vec = HeadVec::new();
        vec.extend_from_slice(&VALUES)
            .expect("Failed to extend_from_slice(..)");

        for value in permuted(&VALUES, perm) {
            let pos = vec
                .iter()
                .position(|present| *present == value)
                .expect("value should still be present");
            assert_eq!(vec.remove(pos), value);
        }

        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 8);
    });
}

#[test]
fn test_set_keeps_first_occurrence_order() {
    index_permutations(VALUES.len(), |perm| {
        let order = permuted(&VALUES, perm);
        let mut set = HeadSet::new();

        for value in order.iter().chain(VALUES.iter()) {
            set.add(*value).expect("Failed to add(..)");
        }

        assert_eq!(set.as_slice(), order.as_slice(), "order {perm:?}");
    });
}
