// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete user-gesture messages.
//!
//! Host UI wiring translates raw input events — control clicks, button
//! clicks, drag callbacks, viewport changes — into [`Command`] values and
//! hands them to [`StackControl::apply`](crate::control::StackControl::apply)
//! synchronously. Keeping the gestures as plain data keeps the reorder engine
//! and the controller testable without any UI in the loop.

use crate::layer::LayerId;
use crate::reorder::Direction;

/// One user gesture, ready for dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// A row's control was clicked: show or hide the layer.
    ///
    /// Selecting a base layer hides every other base layer (radio
    /// semantics); overlays toggle independently.
    SetVisible {
        /// The clicked row's layer.
        layer: LayerId,
        /// The control's new checked state.
        visible: bool,
    },
    /// A row's up or down button was clicked.
    MoveAdjacent {
        /// The clicked row's layer.
        layer: LayerId,
        /// Which way to move.
        direction: Direction,
    },
    /// A drag gesture carried one row past another; fired continuously
    /// during the drag.
    DragSwap {
        /// The row being dragged.
        dragged: LayerId,
        /// The row it just passed.
        related: LayerId,
    },
    /// The drag gesture ended (drop).
    DragEnd,
    /// The viewport zoom changed.
    ZoomChanged {
        /// The new zoom level.
        zoom: f64,
    },
}

/// The discriminant of a [`Command`], for instrumentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// [`Command::SetVisible`].
    SetVisible,
    /// [`Command::MoveAdjacent`].
    MoveAdjacent,
    /// [`Command::DragSwap`].
    DragSwap,
    /// [`Command::DragEnd`].
    DragEnd,
    /// [`Command::ZoomChanged`].
    ZoomChanged,
}

impl Command {
    /// Returns the command's discriminant.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::SetVisible { .. } => CommandKind::SetVisible,
            Self::MoveAdjacent { .. } => CommandKind::MoveAdjacent,
            Self::DragSwap { .. } => CommandKind::DragSwap,
            Self::DragEnd => CommandKind::DragEnd,
            Self::ZoomChanged { .. } => CommandKind::ZoomChanged,
        }
    }
}
