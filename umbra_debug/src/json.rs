// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded traces.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array of
//! event objects to the given writer, for offline inspection or piping into
//! `jq`.

use std::io::{self, Write};

use serde_json::{Value, json};

use umbra_core::host::RenderMode;
use umbra_core::level::LevelSelection;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a JSON array of event objects.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::ShadowUpdate(e) => {
                events.push(json!({
                    "event": "shadow_update",
                    "mode": mode_name(e.mode),
                    "spot": selection_value(e.spot),
                    "ambient": selection_value(e.ambient),
                    "slots_swapped": e.slots_swapped,
                    "nothing_to_draw": e.nothing_to_draw,
                    "redraw_requested": e.redraw_requested,
                    "native_applied": e.native_applied,
                }));
            }
            RecordedEvent::GeometryUpdate(e) => {
                events.push(json!({
                    "event": "geometry_update",
                    "bounds_updated": e.bounds_updated,
                    "spot_offset": [e.spot_offset.x, e.spot_offset.y],
                    "native_reapplied": e.native_reapplied,
                }));
            }
            RecordedEvent::DrawPass(e) => {
                events.push(json!({
                    "event": "draw_pass",
                    "ambient_layers": e.ambient_layers,
                    "spot_layers": e.spot_layers,
                    "translated": e.translated,
                    "offset": [e.offset.x, e.offset.y],
                }));
            }
            RecordedEvent::ModeSwitch(e) => {
                events.push(json!({
                    "event": "mode_switch",
                    "from": mode_name(e.from),
                    "to": mode_name(e.to),
                }));
            }
            RecordedEvent::SlotSnapshotsCount { tracked, resolved } => {
                events.push(json!({
                    "event": "slot_snapshots",
                    "tracked": tracked,
                    "resolved": resolved,
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn mode_name(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Compat => "compat",
        RenderMode::Native => "native",
    }
}

fn selection_value(selection: Option<LevelSelection>) -> Value {
    match selection {
        Some(s) => json!({
            "lower": s.lower,
            "upper": s.upper,
            "fraction": s.fraction,
        }),
        None => Value::Null,
    }
}
