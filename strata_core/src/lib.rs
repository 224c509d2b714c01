// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state model for an ordered map-layers control.
//!
//! `strata_core` provides the data structures and mutation algorithms behind a
//! map "layers" widget: a radio list of base layers, a checkbox list of
//! overlays, and reordering of overlapping overlays so that each overlay's
//! stacking order (z-order) stays consistent with its position in the list.
//! It is `no_std` compatible (with `alloc`) and owns no UI: element
//! construction, styling, and gesture recognition live in host code behind
//! the [`backend`] contract.
//!
//! # Architecture
//!
//! The crate is organized around a dispatch loop that turns user gestures
//! into an updated list view:
//!
//! ```text
//!   Host UI (gesture source)
//!       │
//!       ▼
//!   Command ──► StackControl::apply() ──► reorder / LayerStore mutation
//!                                              │ (marks dirty channels)
//!                 ┌────────────────────────────┘
//!                 ▼
//!   StackControl::update() ──► ListChanges + rebuilt ListView
//!                 │
//!                 ▼
//!   ListPresenter::apply() ──► host list UI
//!                 │
//!                 ▼
//!   Update::layers_changed ──► host map "layers changed" notification
//! ```
//!
//! **[`layer`]** — Struct-of-arrays layer storage with generational handles.
//! Each layer is either a single layer (optionally carrying an explicit
//! stacking order) or a group of sub-layers; groups derive their effective
//! order from their members.
//!
//! **[`dirty`]** — Multi-channel dirty tracking via `understory_dirty`.
//! Order mutations propagate upward to containing groups; membership and
//! zoom-range changes are local; topology changes trigger a list rebuild.
//!
//! **[`registry`]** — The ordered list of registered entries (layer, display
//! name, base/overlay category) with optional comparator sorting.
//!
//! **[`reorder`]** — The reorder engine: discrete up/down moves that exchange
//! order values with the adjacent entry, and unconditional swaps for
//! drag-and-drop.
//!
//! **[`view`]** — The pure list view model, rebuilt deterministically from
//! the registry and the order resolver after every mutation.
//!
//! **[`command`]** / **[`control`]** — Discrete gesture messages and the
//! controller that dispatches them, drains dirty channels, and decides when
//! the host's change notification fires.
//!
//! **[`backend`]** — The [`ListPresenter`](backend::ListPresenter) trait that
//! host UIs implement to materialize the rebuilt view.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! dispatch-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod command;
pub mod control;
pub mod dirty;
pub mod layer;
pub mod registry;
pub mod reorder;
pub mod trace;
pub mod view;
