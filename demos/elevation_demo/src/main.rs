// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated elevation ramp that exercises the tracing and diagnostics
//! pipeline.
//!
//! Builds a shadow container over a scripted mock host, flips it from native
//! to compat rendering, then ramps the elevation while drawing every step.
//! Events go to both a
//! [`PrettyPrintSink`](umbra_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](umbra_debug::recorder::RecorderSink); the recording is
//! exported as JSON at the end.

use std::fs::File;
use std::io::BufWriter;

use kurbo::{Point, Rect, Vec2};

use umbra_core::config::ShadowConfig;
use umbra_core::container::{DrawSummary, GeometryUpdate, ShadowContainer, ShadowUpdate};
use umbra_core::density::Density;
use umbra_core::geometry::GeometrySnapshot;
use umbra_core::ladder::LadderId;
use umbra_core::trace::{
    DrawPassEvent, GeometryUpdateEvent, LadderKind, ModeSwitchEvent, ShadowUpdateEvent,
    SlotRole, SlotSnapshot, TraceSink, Tracer,
};

use umbra_debug::pretty::PrettyPrintSink;
use umbra_debug::recorder::RecorderSink;
use umbra_host_harness::{MockHost, RecordingCanvas, ScriptedAssets, uniform_ladder};

const STEPS: u32 = 16;
/// Elevation gained per step, in device pixels.
const STEP_ELEVATION: f32 = 0.5;

const SPOT_LADDER: LadderId = LadderId(0);
const AMBIENT_LADDER: LadderId = LadderId(1);

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- host and container ------------------------------------------------
    let assets = ScriptedAssets::new()
        .with_ladder(SPOT_LADDER, uniform_ladder(6, 100, 1.5))
        .with_ladder(AMBIENT_LADDER, uniform_ladder(6, 200, 2.0));
    let mut host = MockHost::new(assets);

    let config = ShadowConfig {
        spot_ladder: SPOT_LADDER,
        ambient_ladder: AMBIENT_LADDER,
        ..ShadowConfig::default()
    };
    let density = Density::new(2.0);
    let (mut container, update) = ShadowContainer::new(config, density, true, &mut host);
    emit_shadow(&mut pretty, &mut recorder, &update);

    let geometry = GeometrySnapshot {
        child: Rect::new(0.0, 0.0, 240.0, 120.0),
        window_origin: Point::new(120.0, 200.0),
        translation: Vec2::ZERO,
        visible_frame_width: 1080.0,
        child_visible: true,
    };
    let layout = container.on_layout(geometry, &mut host);
    emit_geometry(&mut pretty, &mut recorder, &layout);

    // -- native → compat switch --------------------------------------------
    let from = container.render_mode();
    if let Some(update) = container.set_force_compat_shadow(true, &mut host) {
        let switch = ModeSwitchEvent {
            from,
            to: container.render_mode(),
        };
        pretty.on_mode_switch(&switch);
        recorder.on_mode_switch(&switch);
        emit_shadow(&mut pretty, &mut recorder, &update);
    }

    // -- elevation ramp ----------------------------------------------------
    for step in 1..=STEPS {
        let elevation = step as f32 * STEP_ELEVATION;
        if let Some(update) = container.set_elevation(elevation, &mut host) {
            emit_shadow(&mut pretty, &mut recorder, &update);
        }
        emit_slots(&mut pretty, &mut recorder, &container);

        let mut canvas = RecordingCanvas::new();
        let summary = container.on_draw(&mut canvas);
        emit_draw(&mut pretty, &mut recorder, &summary);

        // Exercise the Tracer wrapper once (one branch per call when the
        // trace feature is on).
        if step == 1 {
            let mut tracer = Tracer::new(&mut pretty);
            tracer.draw_pass(&DrawPassEvent::from(&summary));
        }
    }

    println!(
        "ramped to {:.1}px over {STEPS} steps, {} redraws, {} loads",
        container.elevation(),
        host.redraw_requests(),
        host.assets.loads(),
    );

    // -- export ------------------------------------------------------------
    let path = "elevation_trace.json";
    let file = File::create(path).expect("failed to create elevation_trace.json");
    let mut writer = BufWriter::new(file);
    umbra_debug::json::export(recorder.as_bytes(), &mut writer)
        .expect("failed to write JSON trace");

    println!("Wrote {path}");
}

fn emit_shadow(pretty: &mut PrettyPrintSink, recorder: &mut RecorderSink, update: &ShadowUpdate) {
    let e = ShadowUpdateEvent::from(update);
    pretty.on_shadow_update(&e);
    recorder.on_shadow_update(&e);
}

fn emit_geometry(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    update: &GeometryUpdate,
) {
    let e = GeometryUpdateEvent::from(update);
    pretty.on_geometry_update(&e);
    recorder.on_geometry_update(&e);
}

fn emit_draw(pretty: &mut PrettyPrintSink, recorder: &mut RecorderSink, summary: &DrawSummary) {
    let e = DrawPassEvent::from(summary);
    pretty.on_draw_pass(&e);
    recorder.on_draw_pass(&e);
}

fn emit_slots(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    container: &ShadowContainer,
) {
    let slots = [
        SlotSnapshot {
            ladder: LadderKind::Spot,
            role: SlotRole::Primary,
            slot: container.spot_pair().primary,
        },
        SlotSnapshot {
            ladder: LadderKind::Spot,
            role: SlotRole::Secondary,
            slot: container.spot_pair().secondary,
        },
        SlotSnapshot {
            ladder: LadderKind::Ambient,
            role: SlotRole::Primary,
            slot: container.ambient_pair().primary,
        },
        SlotSnapshot {
            ladder: LadderKind::Ambient,
            role: SlotRole::Secondary,
            slot: container.ambient_pair().secondary,
        },
    ];
    pretty.on_slot_snapshots(&slots);
    recorder.on_slot_snapshots(&slots);
}
