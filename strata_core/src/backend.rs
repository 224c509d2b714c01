// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for UI integrations.
//!
//! Strata splits host-specific work out of the core. A host integration
//! provides the following pieces:
//!
//! - **Gesture source** — Translates raw input (control clicks, up/down
//!   button clicks, drag-library callbacks, viewport events) into
//!   [`Command`](crate::command::Command) values. This is host-specific and
//!   not abstracted by a trait because event wiring differs fundamentally
//!   across hosts. The drag library in particular stays opaque: the core
//!   only consumes its *results* — a `DragSwap` per row passed and one
//!   `DragEnd` per gesture.
//!
//! - **Presenter** — Implements the [`ListPresenter`] trait to materialize
//!   the rebuilt [`ListView`] as host elements (DOM rows, TUI lines, native
//!   widgets) and to hide/show the section containers and separator.
//!
//! - **Map effects** — Reads each dispatched
//!   [`Update`](crate::control::Update): applies row checked-state to the
//!   actual map (add/remove the layer) and fires the map's payload-free
//!   layers-changed notification when `layers_changed` is set. Host-driven
//!   map events flow back in through
//!   [`store_mut`](crate::control::StackControl::store_mut) +
//!   [`update`](crate::control::StackControl::update).
//!
//! # Crate boundaries
//!
//! `strata_core` owns the data model, the reorder algorithms, the view
//! rebuild, and this contract module. Host crates depend on `strata_core`
//! and provide platform glue. Application code depends on both and wires
//! them together in a dispatch loop.
//!
//! # Dispatch loop pseudocode
//!
//! A typical gesture callback wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_gesture(command: Command) {
//!     let update = control.apply(command);
//!
//!     if update.rebuilt {
//!         presenter.apply(control.store(), control.view(), &update.changes);
//!     }
//!     if update.layers_changed {
//!         map.fire_layers_changed();
//!     }
//! }
//! ```

use crate::layer::{LayerStore, ListChanges};
use crate::view::ListView;

/// Applies a rebuilt list view to a host list UI.
///
/// Both DOM-based and test-double presenters implement this trait, enabling
/// generic dispatch loops. `changes` carries the drained per-layer change
/// sets so presenters that keep per-row elements can patch instead of
/// recreating; simple presenters may ignore it and re-render `view`
/// wholesale.
pub trait ListPresenter {
    /// Materializes the given view, reading current property values from
    /// `store` as needed.
    fn apply(&mut self, store: &LayerStore, view: &ListView, changes: &ListChanges);
}
