// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list view model.
//!
//! [`ListView::build`] is the single place display order is computed. It is a
//! pure function of the store and the registry — no caching, no incremental
//! patching — so calling it twice without an intervening mutation yields an
//! identical view, and the rendered list can never disagree with the registry
//! after a dispatch returns.
//!
//! Overlay rows are bucketed by effective order and emitted from the highest
//! bucket down: the highest order value renders first, at the top of the
//! list, representing the top of the map. Entries sharing an order value all
//! render, in registration order. Base rows follow registry order and never
//! reorder.
//!
//! Element construction is the presenter's job; a [`Row`] carries everything
//! a presenter needs to build one: the layer handle for hit-testing back, the
//! label, the control kind (checkbox vs radio), and the checked/enabled
//! state.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::layer::{LayerId, LayerStore, StackOrder};
use crate::registry::{Category, Entry, Registry};

/// Which interactive control a row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowControl {
    /// Independent toggle (overlay rows).
    Checkbox,
    /// Mutually exclusive selector (base rows).
    Radio,
}

/// One rendered list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// The layer this row represents; the key for routing gestures back.
    pub layer: LayerId,
    /// Display label.
    pub name: String,
    /// Control kind.
    pub control: RowControl,
    /// Whether the control is checked (the layer is on the map).
    pub checked: bool,
    /// Whether the control is interactive at the current zoom.
    pub enabled: bool,
    /// Whether the row carries up/down reorder buttons.
    pub reorder: bool,
}

/// The rebuilt list: a base section and an overlay section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    /// Base rows in registry order.
    pub base: Vec<Row>,
    /// Overlay rows, highest effective order first.
    pub overlays: Vec<Row>,
    /// Whether the base section is shown at all.
    pub base_section_visible: bool,
    /// Whether the separator between the sections is shown.
    pub separator_visible: bool,
    /// Whether rows are drag targets instead of carrying buttons.
    pub drag_enabled: bool,
}

impl ListView {
    /// Rebuilds the view from the registry and the order resolver.
    ///
    /// Entries whose layer has been destroyed are skipped.
    #[must_use]
    pub fn build(
        store: &LayerStore,
        registry: &Registry,
        dragging: bool,
        hide_single_base: bool,
        zoom: f64,
    ) -> Self {
        let mut base = Vec::new();
        let mut buckets: BTreeMap<StackOrder, Vec<&Entry>> = BTreeMap::new();

        for entry in registry {
            if !store.is_alive(entry.layer) {
                continue;
            }
            match entry.category {
                Category::Base => base.push(make_row(store, entry, RowControl::Radio, false, zoom)),
                Category::Overlay => buckets
                    .entry(store.effective_order(entry.layer))
                    .or_default()
                    .push(entry),
            }
        }

        let mut overlays = Vec::new();
        for bucket in buckets.values().rev() {
            for entry in bucket {
                overlays.push(make_row(store, entry, RowControl::Checkbox, !dragging, zoom));
            }
        }

        let mut base_present = !base.is_empty();
        if hide_single_base {
            // Hide the base section outright when there is nothing to choose
            // between.
            base_present = base_present && base.len() > 1;
        }
        let base_section_visible = !hide_single_base || base_present;
        let separator_visible = base_present && !overlays.is_empty();

        Self {
            base,
            overlays,
            base_section_visible,
            separator_visible,
            drag_enabled: dragging,
        }
    }

    /// Recomputes only the `enabled` flags for a new zoom level, returning
    /// the layers whose flag flipped.
    ///
    /// Row order is untouched; this is the zoom-change fast path.
    pub fn refresh_enabled(&mut self, store: &LayerStore, zoom: f64) -> Vec<LayerId> {
        let mut flipped = Vec::new();
        for row in self.base.iter_mut().chain(self.overlays.iter_mut()) {
            if !store.is_alive(row.layer) {
                continue;
            }
            let enabled = store.zoom_range(row.layer).contains(zoom);
            if enabled != row.enabled {
                row.enabled = enabled;
                flipped.push(row.layer);
            }
        }
        flipped
    }

    /// Looks up a rendered row by layer.
    #[must_use]
    pub fn row(&self, layer: LayerId) -> Option<&Row> {
        self.base
            .iter()
            .chain(self.overlays.iter())
            .find(|r| r.layer == layer)
    }
}

fn make_row(
    store: &LayerStore,
    entry: &Entry,
    control: RowControl,
    reorder: bool,
    zoom: f64,
) -> Row {
    Row {
        layer: entry.layer,
        name: entry.name.clone(),
        control,
        checked: store.on_map(entry.layer),
        enabled: store.zoom_range(entry.layer).contains(zoom),
        reorder,
    }
}
