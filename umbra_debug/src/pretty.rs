// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use umbra_core::host::RenderMode;
use umbra_core::level::LevelSelection;
use umbra_core::trace::{
    DrawPassEvent, GeometryUpdateEvent, ModeSwitchEvent, ShadowUpdateEvent, SlotSnapshot,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
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

fn mode_name(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Compat => "compat",
        RenderMode::Native => "native",
    }
}

fn selection_text(selection: Option<LevelSelection>) -> String {
    match selection {
        Some(s) => format!("{}..{}@{:.2}", s.lower, s.upper, s.fraction),
        None => "-".to_owned(),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_shadow_update(&mut self, e: &ShadowUpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[shadow] mode={} spot={} ambient={} swapped={} nothing={} redraw={} native={}",
            mode_name(e.mode),
            selection_text(e.spot),
            selection_text(e.ambient),
            e.slots_swapped,
            e.nothing_to_draw,
            e.redraw_requested,
            e.native_applied,
        );
    }

    fn on_geometry_update(&mut self, e: &GeometryUpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[geometry] bounds={} offset=({:.1},{:.1}) native={}",
            e.bounds_updated, e.spot_offset.x, e.spot_offset.y, e.native_reapplied,
        );
    }

    fn on_draw_pass(&mut self, e: &DrawPassEvent) {
        let _ = writeln!(
            self.writer,
            "[draw] ambient={} spot={} translated={} offset=({:.1},{:.1})",
            e.ambient_layers, e.spot_layers, e.translated, e.offset.x, e.offset.y,
        );
    }

    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        let _ = writeln!(
            self.writer,
            "[mode] {} -> {}",
            mode_name(e.from),
            mode_name(e.to),
        );
    }

    fn on_slot_snapshots(&mut self, slots: &[SlotSnapshot]) {
        let resolved = slots.iter().filter(|s| s.slot.is_some()).count();
        let _ = writeln!(
            self.writer,
            "[slots] tracked={} resolved={resolved}",
            slots.len(),
        );
    }
}
