// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::command::CommandKind;
use strata_core::trace::{CommandEvent, RebuildEvent, TraceSink, UpdateEvent};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn command_name(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::SetVisible => "set-visible",
        CommandKind::MoveAdjacent => "move-adjacent",
        CommandKind::DragSwap => "drag-swap",
        CommandKind::DragEnd => "drag-end",
        CommandKind::ZoomChanged => "zoom-changed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_command(&mut self, e: &CommandEvent) {
        let _ = writeln!(self.writer, "[cmd] {}", command_name(e.kind));
    }

    fn on_update(&mut self, e: &UpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[update] rebuilt={} notify={} order={} visibility={} range={}",
            e.rebuilt, e.layers_changed, e.order_changes, e.visibility_changes, e.range_changes,
        );
    }

    fn on_rebuild(&mut self, e: &RebuildEvent) {
        let _ = writeln!(
            self.writer,
            "[rebuild] base={} overlays={} base_visible={} separator={}",
            e.base_rows, e.overlay_rows, e.base_section_visible, e.separator_visible,
        );
    }

    fn on_notify(&mut self) {
        let _ = writeln!(self.writer, "[notify] layers changed");
    }
}
