// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable test doubles and dispatch wiring for strata.
//!
//! Hosts wire `strata_core` into their own event loops; this crate provides
//! the same wiring in miniature for tests and demos: a [`dispatch`] /
//! [`refresh`] pair mirroring the documented loop, a
//! [`RecordingPresenter`] that snapshots every applied view, and a
//! [`NotifyCounter`] that counts layers-changed notifications.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use strata_core::backend::ListPresenter;
use strata_core::command::Command;
use strata_core::control::{StackControl, Update};
use strata_core::layer::{LayerStore, ListChanges};
use strata_core::trace::{CommandEvent, RebuildEvent, Tracer, UpdateEvent};
use strata_core::view::ListView;

/// A flattened snapshot of one applied view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSnapshot {
    /// Base row labels, top to bottom.
    pub base: Vec<String>,
    /// Overlay row labels, top to bottom.
    pub overlays: Vec<String>,
    /// Whether the base section was shown.
    pub base_section_visible: bool,
    /// Whether the separator was shown.
    pub separator_visible: bool,
}

impl From<&ListView> for ListSnapshot {
    fn from(view: &ListView) -> Self {
        Self {
            base: base_names(view),
            overlays: overlay_names(view),
            base_section_visible: view.base_section_visible,
            separator_visible: view.separator_visible,
        }
    }
}

/// Returns the overlay row labels, top to bottom.
#[must_use]
pub fn overlay_names(view: &ListView) -> Vec<String> {
    view.overlays.iter().map(|r| r.name.clone()).collect()
}

/// Returns the base row labels, top to bottom.
#[must_use]
pub fn base_names(view: &ListView) -> Vec<String> {
    view.base.iter().map(|r| r.name.clone()).collect()
}

/// A presenter that records every view it is asked to apply.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Snapshots, oldest first.
    pub applied: Vec<ListSnapshot>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&ListSnapshot> {
        self.applied.last()
    }
}

impl ListPresenter for RecordingPresenter {
    fn apply(&mut self, _store: &LayerStore, view: &ListView, _changes: &ListChanges) {
        self.applied.push(ListSnapshot::from(view));
    }
}

/// Counts layers-changed notifications across dispatches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotifyCounter {
    /// Notifications observed so far.
    pub fired: u64,
}

impl NotifyCounter {
    /// Creates a zeroed counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one dispatch result.
    pub fn observe(&mut self, update: &Update) {
        if update.layers_changed {
            self.fired += 1;
        }
    }
}

/// Runs one command through the documented dispatch loop.
///
/// Applies the command, re-presents the view if it was rebuilt, and reports
/// each stage to the tracer.
pub fn dispatch(
    control: &mut StackControl,
    command: Command,
    presenter: &mut dyn ListPresenter,
    tracer: &mut Tracer<'_>,
) -> Update {
    tracer.command(&CommandEvent {
        kind: command.kind(),
    });
    let update = control.apply(command);
    if update.rebuilt {
        presenter.apply(control.store(), control.view(), &update.changes);
        tracer.rebuild(&RebuildEvent::from(control.view()));
    }
    if update.layers_changed {
        tracer.notify();
    }
    tracer.update(&UpdateEvent::from(&update));
    update
}

/// Drains pending host-driven changes and re-presents the view if needed.
pub fn refresh(control: &mut StackControl, presenter: &mut dyn ListPresenter) -> Update {
    let update = control.update();
    if update.rebuilt {
        presenter.apply(control.store(), control.view(), &update.changes);
    }
    update
}
