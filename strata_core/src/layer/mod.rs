// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer storage and order resolution.
//!
//! A *layer* here is the control's view of one host map layer. Each layer
//! has:
//!
//! - An identity ([`LayerId`]) — a generational handle that becomes stale
//!   when the layer is destroyed, preventing use-after-free bugs at the API
//!   level.
//! - A kind ([`LayerKind`]) — a **single** layer that may carry an explicit
//!   stacking order, or a **group** whose order is derived from its
//!   sub-layers.
//! - **Local properties** set by the caller:
//!   [`order`](LayerStore::set_order) (explicit stacking order),
//!   [`on_map`](LayerStore::set_on_map) (whether the host map currently shows
//!   the layer), and [`zoom_range`](LayerStore::set_zoom_range).
//! - A **derived property** computed on demand:
//!   [`effective_order`](LayerStore::effective_order), the value that
//!   determines where the layer stacks. It is never cached — host code may
//!   rewrite order values between reads.
//!
//! Layers are stored in struct-of-arrays layout with index-based handles.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the corresponding dirty channel
//! (see [`dirty`](crate::dirty)):
//!
//! - **ORDER** — propagates upward to every group containing the layer,
//!   since group order is derived from members.
//! - **VISIBILITY** / **RANGE** — local-only; only the modified layer is
//!   marked.
//! - **TOPOLOGY** — structural changes (create/destroy layer, add/remove
//!   sub-layer) that force a list rebuild.

mod changes;
mod id;
mod order;
mod store;
mod traverse;

pub use changes::ListChanges;
pub use id::{INVALID, LayerId};
pub use order::StackOrder;
pub use store::{LayerKind, LayerStore, ZoomRange};
pub use traverse::SubLayers;
