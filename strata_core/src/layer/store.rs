// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with allocation, grouping, and property
//! management.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{INVALID, LayerId};
use super::traverse::SubLayers;
use crate::dirty;

/// What a layer is: a single host layer or a group of sub-layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// A single layer; may carry an explicit stacking order.
    Single,
    /// A composite layer; its order is derived from its sub-layers.
    Group,
}

/// The zoom interval in which a layer is usable.
///
/// `None` bounds are unbounded. The default range accepts every zoom level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomRange {
    /// Minimum zoom (inclusive), if any.
    pub min: Option<f64>,
    /// Maximum zoom (inclusive), if any.
    pub max: Option<f64>,
}

impl ZoomRange {
    /// Returns whether `zoom` falls inside the range.
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        self.min.is_none_or(|min| zoom >= min) && self.max.is_none_or(|max| zoom <= max)
    }
}

/// Struct-of-arrays storage for all layers known to the control.
///
/// Layers are addressed by [`LayerId`] handles. Internally, each layer
/// occupies a slot in parallel arrays. Destroyed layers are recycled via a
/// free list, and generation counters prevent stale handle access.
#[derive(Debug)]
pub struct LayerStore {
    // -- Kind --
    pub(crate) kind: Vec<LayerKind>,

    // -- Group topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Local properties (set by callers) --
    pub(crate) order: Vec<Option<i64>>,
    pub(crate) on_map: Vec<bool>,
    pub(crate) zoom_range: Vec<ZoomRange>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    /// Creates an empty layer store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: Vec::new(),
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            order: Vec::new(),
            on_map: Vec::new(),
            zoom_range: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
        }
    }

    // -- Allocation API --

    /// Creates a new single layer and returns its handle.
    ///
    /// The layer starts with no explicit order, off the map, an unbounded
    /// zoom range, and no containing group.
    pub fn create_layer(&mut self) -> LayerId {
        self.alloc(LayerKind::Single)
    }

    /// Creates a new (empty) group layer and returns its handle.
    pub fn create_group(&mut self) -> LayerId {
        self.alloc(LayerKind::Group)
    }

    fn alloc(&mut self, kind: LayerKind) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.kind[idx as usize] = kind;
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            self.order[idx as usize] = None;
            self.on_map[idx as usize] = false;
            self.zoom_range[idx as usize] = ZoomRange::default();
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.kind.push(kind);
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.order.push(None);
            self.on_map.push(false);
            self.zoom_range.push(ZoomRange::default());
            self.generation.push(0);
            idx
        };

        self.dirty.mark(idx, dirty::TOPOLOGY);

        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a layer, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the layer is a group that still has sub-layers (remove them
    /// first) or if the handle is stale.
    pub fn destroy_layer(&mut self, id: LayerId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy a group with sub-layers"
        );

        // Detach from a containing group, which changes that group's
        // derived order.
        if self.parent[idx as usize] != INVALID {
            let group = self.parent[idx as usize];
            self.unlink_from_parent(idx);
            self.dirty.remove_dependency(group, idx, dirty::ORDER);
            self.dirty.mark_with(group, dirty::ORDER, &EagerPolicy);
        }

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        self.free_list.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
    }

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Group topology API --

    /// Adds `child` as the last sub-layer of `group`.
    ///
    /// The group's derived order may change, so the ORDER channel is marked
    /// for the child's new ancestry.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, if `group` is not a group, or if
    /// `child` already belongs to a group.
    pub fn add_sublayer(&mut self, group: LayerId, child: LayerId) {
        self.validate(group);
        self.validate(child);
        let g = group.idx;
        let c = child.idx;
        assert!(
            self.kind[g as usize] == LayerKind::Group,
            "add_sublayer target is not a group"
        );
        assert!(
            self.parent[c as usize] == INVALID,
            "sub-layer already belongs to a group"
        );

        self.parent[c as usize] = g;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[g as usize] == INVALID {
            self.first_child[g as usize] = c;
        } else {
            // Walk to last sub-layer.
            let mut last = self.first_child[g as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        // Dirty dependency edge: the group's derived order depends on the
        // child's order.
        let _ = self.dirty.add_dependency(g, c, dirty::ORDER);

        self.dirty.mark_with(c, dirty::ORDER, &EagerPolicy);
        self.dirty.mark(g, dirty::TOPOLOGY);
    }

    /// Removes `child` from its containing group.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the layer belongs to no group.
    pub fn remove_sublayer(&mut self, child: LayerId) {
        self.validate(child);
        let c = child.idx;
        assert!(
            self.parent[c as usize] != INVALID,
            "layer belongs to no group"
        );

        let g = self.parent[c as usize];
        self.unlink_from_parent(c);

        self.dirty.remove_dependency(g, c, dirty::ORDER);

        // The group lost a member; its derived order may have changed.
        self.dirty.mark_with(g, dirty::ORDER, &EagerPolicy);
        self.dirty.mark(g, dirty::TOPOLOGY);
    }

    /// Returns the group containing this layer, if any.
    #[must_use]
    pub fn containing_group(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        let g = self.parent[id.idx as usize];
        if g == INVALID {
            None
        } else {
            Some(LayerId {
                idx: g,
                generation: self.generation[g as usize],
            })
        }
    }

    /// Returns an iterator over the direct sub-layers of a group.
    ///
    /// Yields nothing for a single layer.
    #[must_use]
    pub fn sub_layers(&self, id: LayerId) -> SubLayers<'_> {
        self.validate(id);
        SubLayers::new(self, self.first_child[id.idx as usize])
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the kind of a layer.
    #[must_use]
    pub fn kind(&self, id: LayerId) -> LayerKind {
        self.validate(id);
        self.kind[id.idx as usize]
    }

    /// Returns the explicit order slot of a layer.
    ///
    /// Groups have no slot of their own and always return `None`; use
    /// [`effective_order`](Self::effective_order) for the derived value.
    #[must_use]
    pub fn order(&self, id: LayerId) -> Option<i64> {
        self.validate(id);
        self.order[id.idx as usize]
    }

    /// Returns whether the host map currently shows the layer.
    #[must_use]
    pub fn on_map(&self, id: LayerId) -> bool {
        self.validate(id);
        self.on_map[id.idx as usize]
    }

    /// Returns the zoom range of a layer.
    #[must_use]
    pub fn zoom_range(&self, id: LayerId) -> ZoomRange {
        self.validate(id);
        self.zoom_range[id.idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets (or clears) the explicit order of a layer.
    ///
    /// Writing to a group distributes the value to every sub-layer, the way
    /// host map groups forward z-index writes to their members; the group
    /// itself keeps no slot. Marks the ORDER channel with eager upward
    /// propagation to containing groups.
    pub fn set_order(&mut self, id: LayerId, order: Option<i64>) {
        self.validate(id);
        self.set_order_at(id.idx, order);
    }

    fn set_order_at(&mut self, idx: u32, order: Option<i64>) {
        match self.kind[idx as usize] {
            LayerKind::Single => {
                self.order[idx as usize] = order;
                self.dirty.mark_with(idx, dirty::ORDER, &EagerPolicy);
            }
            LayerKind::Group => {
                let mut child = self.first_child[idx as usize];
                while child != INVALID {
                    let next = self.next_sibling[child as usize];
                    self.set_order_at(child, order);
                    child = next;
                }
            }
        }
    }

    /// Records whether the host map currently shows the layer.
    ///
    /// Marks the VISIBILITY channel; the corresponding row's checked state is
    /// refreshed on the next rebuild.
    pub fn set_on_map(&mut self, id: LayerId, on_map: bool) {
        self.validate(id);
        self.on_map[id.idx as usize] = on_map;
        self.dirty.mark(id.idx, dirty::VISIBILITY);
    }

    /// Sets the zoom range of a layer.
    pub fn set_zoom_range(&mut self, id: LayerId, range: ZoomRange) {
        self.validate(id);
        self.zoom_range[id.idx as usize] = range;
        self.dirty.mark(id.idx, dirty::RANGE);
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: LayerId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale LayerId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Removes `idx` from its group's sub-layer list without touching dirty
    /// state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let g = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first sub-layer.
            self.first_child[g as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }
}
