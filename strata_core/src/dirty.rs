// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Strata uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! record which layers changed between list rebuilds. Each channel represents
//! an independent category of change.
//!
//! # Propagation semantics
//!
//! - **Propagating** — [`ORDER`] uses
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and has dependency edges
//!   from each group to its sub-layers. Marking a sub-layer's order dirty
//!   automatically marks every group that contains it, because a group's
//!   effective order is derived from its members. Propagation runs *upward*
//!   through nested groups.
//!
//! - **Local-only** — [`VISIBILITY`] (on-map membership) and [`RANGE`]
//!   (zoom bounds) are marked with the default policy. Only the explicitly
//!   marked layer appears in the drain output.
//!
//! - **Structural** — [`TOPOLOGY`] is marked on structural mutations
//!   (create/destroy layer, add/remove sub-layer). It triggers a full list
//!   rebuild but does not propagate.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`LayerStore::drain_changes`](crate::layer::LayerStore::drain_changes)
//! call drains all channels and surfaces the results as
//! [`ListChanges`](crate::layer::ListChanges), which the controller uses to
//! decide whether the list view must be rebuilt and which presenters
//! [consume](crate::backend::ListPresenter::apply) to patch rows
//! incrementally.

use understory_dirty::Channel;

/// Stacking order changed — affects the layer and every group containing it.
pub const ORDER: Channel = Channel::new(0);

/// On-map membership changed — the row's checked state must be refreshed.
pub const VISIBILITY: Channel = Channel::new(1);

/// Zoom range changed — the row's enabled state must be refreshed.
pub const RANGE: Channel = Channel::new(2);

/// Layer set or group composition changed — triggers a list rebuild.
pub const TOPOLOGY: Channel = Channel::new(3);
