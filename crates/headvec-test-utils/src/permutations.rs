// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive ordering tests.

/// Heap's algorithm, recursing on the first `k` indices.
fn heap_permute<F>(indices: &mut [usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k <= 1 {
        callback(indices);
        return;
    }

    for i in 0..k - 1 {
        heap_permute(indices, k - 1, callback);
        let swap_with = if k % 2 == 0 { i } else { 0 };
        indices.swap(swap_with, k - 1);
    }

    heap_permute(indices, k - 1, callback);
}

/// Calls `callback` once for every ordering of `[0, 1, ..., len - 1]`.
///
/// `len == 0` yields no orderings.
///
/// # Example
/// ```
/// use headvec_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(4, |_perm| count += 1);
/// assert_eq!(count, 24);
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut indices: Vec<usize> = (0..len).collect();
    heap_permute(&mut indices, len, &mut callback);
}

/// Returns `values` reordered so that position `i` holds `values[perm[i]]`.
///
/// # Example
/// ```
/// use headvec_test_utils::permuted;
///
/// assert_eq!(permuted(&['a', 'b', 'c'], &[2, 0, 1]), vec!['c', 'a', 'b']);
/// ```
pub fn permuted<T: Clone>(values: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(values.len(), perm.len(), "permutation length mismatch");

    perm.iter().map(|&index| values[index].clone()).collect()
}
