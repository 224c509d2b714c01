// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the dispatch loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! dispatch-loop instrumentation calls at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! Tracing is the wiring's job, not the controller's: the glue that owns the
//! dispatch loop reports each command and the resulting update, keeping the
//! core paths free of instrumentation state.

use crate::command::CommandKind;
use crate::control::Update;
use crate::view::ListView;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a command enters the dispatch loop.
#[derive(Clone, Copy, Debug)]
pub struct CommandEvent {
    /// Which command was dispatched.
    pub kind: CommandKind,
}

/// Emitted after a dispatch or update returns.
#[derive(Clone, Copy, Debug)]
pub struct UpdateEvent {
    /// Whether the view was rebuilt.
    pub rebuilt: bool,
    /// Whether the layers-changed notification fires.
    pub layers_changed: bool,
    /// Number of drained order changes.
    pub order_changes: usize,
    /// Number of drained visibility changes.
    pub visibility_changes: usize,
    /// Number of drained zoom-range changes.
    pub range_changes: usize,
}

impl From<&Update> for UpdateEvent {
    fn from(update: &Update) -> Self {
        Self {
            rebuilt: update.rebuilt,
            layers_changed: update.layers_changed,
            order_changes: update.changes.order.len(),
            visibility_changes: update.changes.visibility.len(),
            range_changes: update.changes.range.len(),
        }
    }
}

/// Emitted after a view rebuild, summarizing the list shape.
#[derive(Clone, Copy, Debug)]
pub struct RebuildEvent {
    /// Rows in the base section.
    pub base_rows: usize,
    /// Rows in the overlay section.
    pub overlay_rows: usize,
    /// Whether the base section is shown.
    pub base_section_visible: bool,
    /// Whether the separator is shown.
    pub separator_visible: bool,
}

impl From<&ListView> for RebuildEvent {
    fn from(view: &ListView) -> Self {
        Self {
            base_rows: view.base.len(),
            overlay_rows: view.overlays.len(),
            base_section_visible: view.base_section_visible,
            separator_visible: view.separator_visible,
        }
    }
}

// ---------------------------------------------------------------------------
// Sink trait
// ---------------------------------------------------------------------------

/// Receives dispatch-loop events. All methods default to no-ops.
pub trait TraceSink {
    /// A command entered the dispatch loop.
    fn on_command(&mut self, event: &CommandEvent) {
        let _ = event;
    }

    /// A dispatch or update returned.
    fn on_update(&mut self, event: &UpdateEvent) {
        let _ = event;
    }

    /// The view was rebuilt.
    fn on_rebuild(&mut self, event: &RebuildEvent) {
        let _ = event;
    }

    /// The layers-changed notification fired.
    fn on_notify(&mut self) {}
}

// ---------------------------------------------------------------------------
// Tracer
// ---------------------------------------------------------------------------

/// Zero-overhead wrapper over an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _sink: core::marker::PhantomData<&'a mut ()>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer<'_> {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that drops every event.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            #[cfg(feature = "trace")]
            sink: None,
            #[cfg(not(feature = "trace"))]
            _sink: core::marker::PhantomData,
        }
    }

    /// Creates a tracer that forwards events to `sink`.
    #[cfg(feature = "trace")]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self { sink: Some(sink) }
    }

    /// Reports a dispatched command.
    pub fn command(&mut self, event: &CommandEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.on_command(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Reports a returned update.
    pub fn update(&mut self, event: &UpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.on_update(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Reports a view rebuild.
    pub fn rebuild(&mut self, event: &RebuildEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.on_rebuild(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Reports a fired layers-changed notification.
    pub fn notify(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_mut() {
            sink.on_notify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ListChanges;

    #[test]
    fn update_event_summarizes_counts() {
        let update = Update {
            layers_changed: true,
            rebuilt: true,
            changes: ListChanges {
                order: alloc::vec![0, 1],
                visibility: alloc::vec![2],
                range: alloc::vec![],
                topology_changed: false,
            },
        };
        let event = UpdateEvent::from(&update);
        assert!(event.layers_changed);
        assert_eq!(event.order_changes, 2);
        assert_eq!(event.visibility_changes, 1);
        assert_eq!(event.range_changes, 0);
    }

    #[test]
    fn disabled_tracer_is_inert() {
        let mut tracer = Tracer::disabled();
        tracer.command(&CommandEvent {
            kind: crate::command::CommandKind::DragEnd,
        });
        tracer.notify();
    }

    #[cfg(feature = "trace")]
    mod with_sink {
        use super::*;

        #[derive(Default)]
        struct CountingSink {
            commands: usize,
            notifies: usize,
        }

        impl TraceSink for CountingSink {
            fn on_command(&mut self, _event: &CommandEvent) {
                self.commands += 1;
            }

            fn on_notify(&mut self) {
                self.notifies += 1;
            }
        }

        #[test]
        fn events_reach_the_sink() {
            let mut sink = CountingSink::default();
            {
                let mut tracer = Tracer::new(&mut sink);
                tracer.command(&CommandEvent {
                    kind: crate::command::CommandKind::DragEnd,
                });
                tracer.notify();
                tracer.notify();
            }
            assert_eq!(sink.commands, 1);
            assert_eq!(sink.notifies, 2);
        }
    }
}
