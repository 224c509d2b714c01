// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing diagnostics for strata dispatch loops.
//!
//! This crate provides a [`TraceSink`](strata_core::trace::TraceSink)
//! implementation for development use:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.

pub mod pretty;
