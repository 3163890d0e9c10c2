//! Selection bookkeeping for a data manager.
//!
//! This module provides [`SelectionSet`], the sparse set of selected item
//! positions, and [`SelectionCapabilities`], the selection features a host
//! advertises.
//!
//! Positions in a [`SelectionSet`] are only meaningful against the item
//! snapshot they were recorded for. The data manager rebuilds the set
//! whenever its snapshot is replaced.

use std::collections::BTreeSet;

use crate::error::SelectionKind;

/// Selection features supported by a host.
///
/// Read once, when a [`DataManager`](super::DataManager) is constructed. A
/// manager whose host lacks a capability rejects the corresponding
/// selection-mutating call with
/// [`Error::UnsupportedSelection`](crate::Error::UnsupportedSelection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCapabilities {
    /// `set_selected_item` is allowed.
    pub single: bool,
    /// `set_selected_items` is allowed.
    pub multiple: bool,
}

impl SelectionCapabilities {
    /// No selection support.
    pub const NONE: Self = Self {
        single: false,
        multiple: false,
    };

    /// Single selection only.
    pub const SINGLE: Self = Self {
        single: true,
        multiple: false,
    };

    /// Multiple selection only.
    pub const MULTIPLE: Self = Self {
        single: false,
        multiple: true,
    };

    /// Both selection kinds.
    pub const ALL: Self = Self {
        single: true,
        multiple: true,
    };

    /// Returns `true` if the given selection kind is supported.
    pub fn supports(&self, kind: SelectionKind) -> bool {
        match kind {
            SelectionKind::Single => self.single,
            SelectionKind::Multiple => self.multiple,
        }
    }

    /// Returns `true` if no selection kind is supported.
    pub fn is_none(&self) -> bool {
        !self.single && !self.multiple
    }
}

/// Sparse set of selected positions.
///
/// A position absent from the set is not selected. Iteration is in
/// ascending position order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<usize>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a position is selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selected.contains(&position)
    }

    /// Sets the flag for a position.
    ///
    /// Returns `true` if the flag changed.
    pub fn set(&mut self, position: usize, selected: bool) -> bool {
        if selected {
            self.selected.insert(position)
        } else {
            self.selected.remove(&position)
        }
    }

    /// Returns the lowest selected position.
    pub fn first(&self) -> Option<usize> {
        self.selected.first().copied()
    }

    /// Returns the number of selected positions.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterates selected positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns the positions whose flag differs between `self` and `other`,
    /// in ascending order.
    pub fn flipped(&self, other: &SelectionSet) -> Vec<usize> {
        self.selected
            .symmetric_difference(&other.selected)
            .copied()
            .collect()
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
