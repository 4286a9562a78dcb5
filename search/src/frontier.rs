//! Open list: a binary min-heap over [`FrontierKey`].
//!
//! There is no decrease-key. A cell may be pushed several times with
//! different scores; the search discards stale entries on pop because its
//! g-score table is authoritative.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fogpath_kernel::grid::Cell;

use crate::node::FrontierKey;
use crate::policy::TieBreak;

/// A popped frontier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub cell: Cell,
    /// f-score the cell was pushed with.
    pub f: u32,
    /// g-score the cell was pushed with (may be stale by the time it pops).
    pub g: u32,
}

/// Best-first open list with a fixed tie-break policy.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest key first. Push and pop are O(log n).
#[derive(Debug)]
pub struct OpenList {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    tie_break: TieBreak,
    high_water: u64,
}

impl OpenList {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            high_water: 0,
        }
    }

    pub fn push(&mut self, f: u32, g: u32, cell: Cell) {
        self.heap.push(Reverse(FrontierKey {
            f,
            g,
            cell,
            tie_break: self.tie_break,
        }));
        let size = u64::try_from(self.heap.len()).unwrap_or(u64::MAX);
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the minimum-key entry. `None` when empty; callers
    /// check [`OpenList::is_empty`] first and treat `None` as an invariant
    /// violation.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(key)| FrontierEntry {
            cell: key.cell,
            f: key.f,
            g: key.g,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Largest size the heap has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
