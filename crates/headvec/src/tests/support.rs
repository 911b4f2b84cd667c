// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop-tracking element used to detect leaks and double drops.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub(crate) fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

pub(crate) fn ids<'a>(values: impl IntoIterator<Item = &'a Tracked>) -> Vec<u32> {
    values.into_iter().map(|t| t.id).collect()
}
