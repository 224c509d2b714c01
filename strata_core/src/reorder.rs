// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder engine.
//!
//! Two mutation paths feed it:
//!
//! - **Buttons** — [`move_adjacent`] handles a discrete up/down click. It
//!   finds the overlay entry adjacent in order value and performs an exact
//!   exchange of the two scalar order values; intermediate entries never
//!   shift. No neighbor means the entry is already at the stacking boundary
//!   and the move is a no-op, not an error.
//! - **Drag** — [`swap_orders`] exchanges two entries' effective orders
//!   unconditionally. The drag gesture library reports each pass of one row
//!   over another; adjacency is its problem, not ours.
//!
//! The overlay list renders descending by order value, so *up* means a
//! *higher* order value (nearer the top of the map) and *down* a lower one.
//!
//! An entry whose layer exposes no order value would never find a neighbor;
//! [`move_adjacent`] first materializes a real order for it — one past the
//! current maximum, which keeps the entry at the top where the unordered
//! sentinel already rendered it — and then moves normally.

use crate::layer::{LayerId, LayerStore, StackOrder};
use crate::registry::{Category, Registry};

/// Which way a discrete move goes, in list terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top of the list (higher order value).
    Up,
    /// Toward the bottom of the list (lower order value).
    Down,
}

/// What a [`move_adjacent`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// An order exchange with the adjacent entry took place.
    pub swapped: bool,
    /// The mover had no order value and one was assigned first.
    pub materialized: bool,
}

impl MoveOutcome {
    const NONE: Self = Self {
        swapped: false,
        materialized: false,
    };

    /// Returns whether any order value was written.
    #[must_use]
    pub const fn changed(self) -> bool {
        self.swapped || self.materialized
    }
}

/// Moves an overlay entry one step up or down the stack by exchanging order
/// values with the adjacent entry.
///
/// No-ops (returning [`MoveOutcome::NONE`](MoveOutcome)) for base entries,
/// unregistered or stale layers, and moves at the stacking boundary.
pub fn move_adjacent(
    store: &mut LayerStore,
    registry: &Registry,
    layer: LayerId,
    direction: Direction,
) -> MoveOutcome {
    if !store.is_alive(layer) || registry.category_of(layer) != Some(Category::Overlay) {
        return MoveOutcome::NONE;
    }

    let mut materialized = false;
    let idx = match store.effective_order(layer) {
        StackOrder::Explicit(v) => v,
        StackOrder::Unordered => {
            let v = next_top_order(store, registry);
            store.set_order(layer, Some(v));
            if store.effective_order(layer) != StackOrder::Explicit(v) {
                // An empty group accepts no order value; nothing to move.
                return MoveOutcome::NONE;
            }
            materialized = true;
            v
        }
    };

    let target = match direction {
        Direction::Up => idx + 1,
        Direction::Down => idx - 1,
    };

    let neighbor = registry
        .overlays()
        .filter(|e| store.is_alive(e.layer))
        .find(|e| store.effective_order(e.layer) == StackOrder::Explicit(target))
        .map(|e| e.layer);

    match neighbor {
        Some(neighbor) => {
            store.set_order(layer, Some(target));
            store.set_order(neighbor, Some(idx));
            MoveOutcome {
                swapped: true,
                materialized,
            }
        }
        // Already at the boundary.
        None => MoveOutcome {
            swapped: false,
            materialized,
        },
    }
}

/// Exchanges the effective orders of two entries (the drag path).
///
/// Writing an unordered side clears the other side's explicit slot, so a
/// double swap restores the original state exactly. No-ops on stale handles
/// and self-swaps.
pub fn swap_orders(store: &mut LayerStore, a: LayerId, b: LayerId) {
    if a == b || !store.is_alive(a) || !store.is_alive(b) {
        return;
    }
    let order_a = store.effective_order(a);
    let order_b = store.effective_order(b);
    store.set_order(a, order_b.value());
    store.set_order(b, order_a.value());
}

/// Returns one past the highest explicit effective order among registered
/// overlays.
fn next_top_order(store: &LayerStore, registry: &Registry) -> i64 {
    registry
        .overlays()
        .filter(|e| store.is_alive(e.layer))
        .filter_map(|e| store.effective_order(e.layer).value())
        .max()
        .unwrap_or(0)
        + 1
}
