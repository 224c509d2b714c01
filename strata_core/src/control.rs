// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller.
//!
//! [`StackControl`] owns the layer store, the registry, and the current
//! [`ListView`], and dispatches [`Command`]s synchronously. Within one
//! dispatch, mutation strictly precedes the rebuild and the rebuild strictly
//! precedes the [`Update`] reaching the caller, so observers always see a
//! consistent, already-rebuilt list.
//!
//! Host-driven changes — the map adding or removing a layer, out-of-band
//! order writes — go through [`store_mut`](StackControl::store_mut) followed
//! by [`update`](StackControl::update): the list rebuilds, but the
//! layers-changed notification stays down, since the host already knows.
//!
//! The `layers_changed` flag on the returned [`Update`] is the host map's
//! cue to fire its payload-free change notification: it is raised exactly
//! once per successful visibility toggle, per successful (or materializing)
//! adjacent move, and per drag gesture — at its end, never on the
//! intermediate swaps.

use alloc::vec::Vec;

use crate::command::Command;
use crate::layer::{LayerId, LayerKind, LayerStore, ListChanges};
use crate::registry::{self, Category, Entry, Registry, SortFn};
use crate::reorder;
use crate::view::ListView;

/// Behavior switches, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct ControlOptions {
    /// Reorder by drag-and-drop instead of up/down buttons.
    pub dragging: bool,
    /// Hide the base section when fewer than two base entries exist.
    pub hide_single_base: bool,
    /// Assign increasing order values to layers as they are registered.
    pub auto_order: bool,
    /// Re-sort the registry on every registration.
    pub sort_layers: bool,
    /// Comparator used when `sort_layers` is set.
    pub sort_fn: SortFn,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            dragging: false,
            hide_single_base: false,
            auto_order: true,
            sort_layers: false,
            sort_fn: registry::by_name,
        }
    }
}

/// What a dispatch or update did.
#[derive(Clone, Debug, Default)]
pub struct Update {
    /// The stacking order or layer visibility changed; the host map should
    /// fire its layers-changed notification.
    pub layers_changed: bool,
    /// The view was rebuilt; presenters should re-apply it.
    pub rebuilt: bool,
    /// Drained per-layer change sets for incremental presenters.
    pub changes: ListChanges,
}

/// The layers-control state: store, registry, options, and the current view.
#[derive(Debug)]
pub struct StackControl {
    store: LayerStore,
    registry: Registry,
    options: ControlOptions,
    zoom: f64,
    next_order: i64,
    list_dirty: bool,
    view: ListView,
}

impl StackControl {
    /// Creates a control over the given store.
    ///
    /// The view starts empty; the first [`update`](Self::update) builds it.
    #[must_use]
    pub fn new(store: LayerStore, options: ControlOptions) -> Self {
        Self {
            store,
            registry: Registry::new(),
            options,
            zoom: 0.0,
            next_order: 0,
            list_dirty: true,
            view: ListView::default(),
        }
    }

    /// Registers a base layer under the given display name.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn add_base(&mut self, layer: LayerId, name: &str) {
        self.add(layer, name, Category::Base);
    }

    /// Registers an overlay under the given display name.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn add_overlay(&mut self, layer: LayerId, name: &str) {
        self.add(layer, name, Category::Overlay);
    }

    fn add(&mut self, layer: LayerId, name: &str, category: Category) {
        self.store.validate(layer);
        self.registry.add(Entry {
            layer,
            name: name.into(),
            category,
        });

        if self.options.sort_layers {
            self.registry.sort(&self.store, self.options.sort_fn);
        }

        // Groups keep their derived ordering; everything else gets stacked
        // above what came before.
        if self.options.auto_order && self.store.kind(layer) == LayerKind::Single {
            self.next_order += 1;
            self.store.set_order(layer, Some(self.next_order));
        }

        self.list_dirty = true;
    }

    /// Dispatches one user gesture.
    pub fn apply(&mut self, command: Command) -> Update {
        match command {
            Command::SetVisible { layer, visible } => self.set_visible(layer, visible),
            Command::MoveAdjacent { layer, direction } => {
                let outcome =
                    reorder::move_adjacent(&mut self.store, &self.registry, layer, direction);
                if outcome.changed() {
                    self.notify_after_update()
                } else {
                    Update::default()
                }
            }
            Command::DragSwap { dragged, related } => {
                // Live exchange; dirty marks accumulate until the gesture
                // ends.
                reorder::swap_orders(&mut self.store, dragged, related);
                Update::default()
            }
            Command::DragEnd => {
                self.list_dirty = true;
                self.notify_after_update()
            }
            Command::ZoomChanged { zoom } => {
                self.zoom = zoom;
                let flipped = self.view.refresh_enabled(&self.store, zoom);
                Update {
                    layers_changed: false,
                    rebuilt: false,
                    changes: ListChanges {
                        range: flipped.into_iter().map(LayerId::index).collect(),
                        ..ListChanges::default()
                    },
                }
            }
        }
    }

    /// Drains pending changes and rebuilds the view if anything calls for
    /// it.
    ///
    /// Safe to call repeatedly; with no pending change it does nothing.
    pub fn update(&mut self) -> Update {
        let mut changes = ListChanges::default();
        self.store.drain_changes_into(&mut changes);

        let rebuilt = self.list_dirty || !changes.is_empty();
        if rebuilt {
            self.view = ListView::build(
                &self.store,
                &self.registry,
                self.options.dragging,
                self.options.hide_single_base,
                self.zoom,
            );
            self.list_dirty = false;
        }

        Update {
            layers_changed: false,
            rebuilt,
            changes,
        }
    }

    fn notify_after_update(&mut self) -> Update {
        let mut update = self.update();
        update.layers_changed = true;
        update
    }

    fn set_visible(&mut self, layer: LayerId, visible: bool) -> Update {
        if !self.store.is_alive(layer) {
            return Update::default();
        }
        let Some(category) = self.registry.category_of(layer) else {
            return Update::default();
        };

        let mut changed = false;
        if self.store.on_map(layer) != visible {
            self.store.set_on_map(layer, visible);
            changed = true;
        }

        // Radio semantics: selecting a base layer deselects the rest.
        if category == Category::Base && visible {
            let others: Vec<LayerId> = self
                .registry
                .bases()
                .filter(|e| e.layer != layer)
                .filter(|e| self.store.is_alive(e.layer) && self.store.on_map(e.layer))
                .map(|e| e.layer)
                .collect();
            for other in others {
                self.store.set_on_map(other, false);
                changed = true;
            }
        }

        if changed {
            self.notify_after_update()
        } else {
            Update::default()
        }
    }

    // -- Accessors --

    /// The current view, as of the last rebuild.
    #[must_use]
    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Read access to the layer store.
    #[must_use]
    pub fn store(&self) -> &LayerStore {
        &self.store
    }

    /// Write access to the layer store, for host-driven changes.
    ///
    /// Follow writes with [`update`](Self::update) so the view catches up.
    pub fn store_mut(&mut self) -> &mut LayerStore {
        &mut self.store
    }

    /// The registration list.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The options the control was built with.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// The current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::layer::ZoomRange;
    use crate::reorder::Direction;

    fn control() -> StackControl {
        // Explicit orders in tests; auto-assignment would overwrite them.
        StackControl::new(
            LayerStore::new(),
            ControlOptions {
                auto_order: false,
                ..ControlOptions::default()
            },
        )
    }

    fn add_overlay(control: &mut StackControl, name: &str, order: Option<i64>) -> LayerId {
        let layer = control.store_mut().create_layer();
        control.store_mut().set_order(layer, order);
        control.add_overlay(layer, name);
        layer
    }

    fn add_base(control: &mut StackControl, name: &str) -> LayerId {
        let layer = control.store_mut().create_layer();
        control.add_base(layer, name);
        layer
    }

    fn overlay_names(control: &StackControl) -> Vec<&str> {
        control
            .view()
            .overlays
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn registration_shows_up_after_update() {
        let mut control = control();
        add_overlay(&mut control, "roads", Some(2));
        add_overlay(&mut control, "labels", Some(1));

        let update = control.update();
        assert!(update.rebuilt);
        assert!(!update.layers_changed);
        assert_eq!(overlay_names(&control), ["roads", "labels"]);
    }

    #[test]
    fn update_without_changes_is_a_noop() {
        let mut control = control();
        add_overlay(&mut control, "roads", Some(1));
        let _ = control.update();

        let update = control.update();
        assert!(!update.rebuilt);
        assert!(update.changes.is_empty());
    }

    #[test]
    fn toggle_notifies_once_and_rebuilds() {
        let mut control = control();
        let roads = add_overlay(&mut control, "roads", Some(1));
        let _ = control.update();

        let update = control.apply(Command::SetVisible {
            layer: roads,
            visible: true,
        });
        assert!(update.layers_changed);
        assert!(update.rebuilt);
        assert_eq!(control.view().row(roads).map(|r| r.checked), Some(true));

        // Same state again: nothing to do, no notification.
        let update = control.apply(Command::SetVisible {
            layer: roads,
            visible: true,
        });
        assert!(!update.layers_changed);
        assert!(!update.rebuilt);
    }

    #[test]
    fn base_selection_is_exclusive() {
        let mut control = control();
        let osm = add_base(&mut control, "osm");
        let satellite = add_base(&mut control, "satellite");
        let _ = control.update();

        let _ = control.apply(Command::SetVisible {
            layer: osm,
            visible: true,
        });
        let update = control.apply(Command::SetVisible {
            layer: satellite,
            visible: true,
        });

        assert!(update.layers_changed);
        assert!(!control.store().on_map(osm));
        assert!(control.store().on_map(satellite));
    }

    #[test]
    fn move_rebuilds_and_notifies() {
        let mut control = control();
        let roads = add_overlay(&mut control, "roads", Some(2));
        add_overlay(&mut control, "labels", Some(1));
        let _ = control.update();

        let update = control.apply(Command::MoveAdjacent {
            layer: roads,
            direction: Direction::Down,
        });

        assert!(update.layers_changed);
        assert!(update.rebuilt);
        assert_eq!(overlay_names(&control), ["labels", "roads"]);
    }

    #[test]
    fn boundary_move_does_nothing() {
        let mut control = control();
        let roads = add_overlay(&mut control, "roads", Some(2));
        add_overlay(&mut control, "labels", Some(1));
        let _ = control.update();

        let update = control.apply(Command::MoveAdjacent {
            layer: roads,
            direction: Direction::Up,
        });

        assert!(!update.layers_changed);
        assert!(!update.rebuilt);
        assert_eq!(overlay_names(&control), ["roads", "labels"]);
    }

    #[test]
    fn drag_swaps_stay_silent_until_drag_end() {
        let mut control = control();
        let roads = add_overlay(&mut control, "roads", Some(2));
        let labels = add_overlay(&mut control, "labels", Some(1));
        let _ = control.update();

        let update = control.apply(Command::DragSwap {
            dragged: roads,
            related: labels,
        });
        assert!(!update.layers_changed);
        assert!(!update.rebuilt);
        // The value mutation is live even though the view is not.
        assert_eq!(control.store().order(roads), Some(1));
        assert_eq!(overlay_names(&control), ["roads", "labels"]);

        let update = control.apply(Command::DragEnd);
        assert!(update.layers_changed);
        assert!(update.rebuilt);
        assert!(update.changes.order.contains(&roads.index()));
        assert!(update.changes.order.contains(&labels.index()));
        assert_eq!(overlay_names(&control), ["labels", "roads"]);
    }

    #[test]
    fn drag_end_without_swaps_still_notifies() {
        let mut control = control();
        add_overlay(&mut control, "roads", Some(1));
        let _ = control.update();

        let update = control.apply(Command::DragEnd);
        assert!(update.layers_changed);
        assert!(update.rebuilt);
    }

    #[test]
    fn zoom_change_refreshes_enabled_only() {
        let mut control = control();
        let detail = add_overlay(&mut control, "detail", Some(1));
        control.store_mut().set_zoom_range(
            detail,
            ZoomRange {
                min: Some(10.0),
                max: None,
            },
        );
        let _ = control.update();
        assert!(!control.view().overlays[0].enabled);

        let update = control.apply(Command::ZoomChanged { zoom: 12.0 });
        assert!(!update.layers_changed);
        assert!(!update.rebuilt);
        assert_eq!(update.changes.range, [detail.index()]);
        assert!(control.view().overlays[0].enabled);
    }

    #[test]
    fn host_membership_write_rebuilds_without_notification() {
        let mut control = control();
        let roads = add_overlay(&mut control, "roads", Some(1));
        let _ = control.update();

        control.store_mut().set_on_map(roads, true);
        let update = control.update();

        assert!(!update.layers_changed);
        assert!(update.rebuilt);
        assert!(update.changes.visibility.contains(&roads.index()));
        assert_eq!(control.view().row(roads).map(|r| r.checked), Some(true));
    }

    #[test]
    fn auto_order_assigns_increasing_values() {
        let mut control = StackControl::new(LayerStore::new(), ControlOptions::default());
        let first = control.store_mut().create_layer();
        let second = control.store_mut().create_layer();
        let group = control.store_mut().create_group();
        control.add_overlay(first, "first");
        control.add_overlay(second, "second");
        control.add_overlay(group, "group");

        assert_eq!(control.store().order(first), Some(1));
        assert_eq!(control.store().order(second), Some(2));
        // Groups keep their derived ordering.
        assert_eq!(control.store().order(group), None);
    }

    #[test]
    fn sort_layers_resorts_on_registration() {
        let mut control = StackControl::new(
            LayerStore::new(),
            ControlOptions {
                auto_order: false,
                sort_layers: true,
                ..ControlOptions::default()
            },
        );
        add_overlay(&mut control, "citymap", Some(1));
        add_overlay(&mut control, "aerial", Some(2));

        let names: Vec<_> = control.registry().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["aerial", "citymap"]);
    }

    #[test]
    fn unknown_layer_commands_are_noops() {
        let mut control = control();
        add_overlay(&mut control, "roads", Some(1));
        let stranger = control.store_mut().create_layer();
        let _ = control.update();

        let update = control.apply(Command::SetVisible {
            layer: stranger,
            visible: true,
        });
        assert!(!update.layers_changed);

        let update = control.apply(Command::MoveAdjacent {
            layer: stranger,
            direction: Direction::Up,
        });
        assert!(!update.layers_changed);
    }
}
