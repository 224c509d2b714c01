// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change draining.
//!
//! Between rebuilds, property mutations accumulate in the store's dirty
//! channels. [`LayerStore::drain_changes`] empties every channel and surfaces
//! the results as a [`ListChanges`] value:
//!
//! 1. **ORDER** — Drained with affected-set expansion, so a mutated
//!    sub-layer also surfaces every group whose derived order it feeds.
//! 2. **VISIBILITY** / **RANGE** — Drained directly; only explicitly marked
//!    layers appear.
//! 3. **TOPOLOGY** — Drained and collapsed to a single flag; structural
//!    changes always force a full rebuild.
//!
//! `ListChanges` uses raw slot indices (`u32`) rather than
//! [`LayerId`](super::LayerId) handles: presenters look rows up by index and
//! a drained slot may legitimately belong to an already-destroyed layer.

use alloc::vec::Vec;

use super::store::LayerStore;
use crate::dirty;

/// The set of changes produced by a single [`LayerStore::drain_changes`]
/// call.
///
/// Each field contains the raw slot indices of layers that changed in the
/// corresponding category. Presenters use these to patch rows incrementally;
/// the controller uses them to decide whether the list must be rebuilt.
#[derive(Clone, Debug, Default)]
pub struct ListChanges {
    /// Layers (and containing groups) whose effective order may have changed.
    pub order: Vec<u32>,
    /// Layers whose on-map membership changed.
    pub visibility: Vec<u32>,
    /// Layers whose zoom range changed.
    pub range: Vec<u32>,
    /// Whether the layer set or a group's composition changed.
    pub topology_changed: bool,
}

impl ListChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.order.clear();
        self.visibility.clear();
        self.range.clear();
        self.topology_changed = false;
    }

    /// Returns whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
            && self.visibility.is_empty()
            && self.range.is_empty()
            && !self.topology_changed
    }
}

impl LayerStore {
    /// Drains all dirty channels, returning the set of changes since the
    /// previous drain.
    pub fn drain_changes(&mut self) -> ListChanges {
        let mut changes = ListChanges::default();
        self.drain_changes_into(&mut changes);
        changes
    }

    /// Like [`drain_changes`](Self::drain_changes), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn drain_changes_into(&mut self, changes: &mut ListChanges) {
        changes.clear();

        // Drain ORDER with affected-set expansion (containing groups).
        changes.order = self
            .dirty
            .drain(dirty::ORDER)
            .affected()
            .deterministic()
            .run()
            .collect();

        // Drain VISIBILITY.
        changes.visibility = self
            .dirty
            .drain(dirty::VISIBILITY)
            .deterministic()
            .run()
            .collect();

        // Drain RANGE.
        changes.range = self
            .dirty
            .drain(dirty::RANGE)
            .deterministic()
            .run()
            .collect();

        // Drain TOPOLOGY down to a single rebuild flag.
        let topology: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();
        changes.topology_changed = !topology.is_empty();
    }
}
