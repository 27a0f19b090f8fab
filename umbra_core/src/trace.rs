// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the shadow update cycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! host wiring calls after each container operation. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine. The container itself never holds a sink; its operations return
//! change summaries ([`ShadowUpdate`], [`GeometryUpdate`], [`DrawSummary`])
//! and the events here convert from those, keeping the hot path free of
//! instrumentation when tracing is off.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates per-slot [`SlotSnapshot`]
//!   events and the corresponding `TraceSink` method.

use kurbo::Vec2;

use crate::container::{DrawSummary, GeometryUpdate, ShadowUpdate};
use crate::host::RenderMode;
use crate::level::LevelSelection;
#[cfg(feature = "trace-rich")]
use crate::sprite::SpriteSlot;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a shadow-level recompute (setter or mode switch).
#[derive(Clone, Copy, Debug)]
pub struct ShadowUpdateEvent {
    /// Render mode after the recompute.
    pub mode: RenderMode,
    /// Spot-ladder selection, if compat mode ran.
    pub spot: Option<LevelSelection>,
    /// Ambient-ladder selection, if compat mode ran.
    pub ambient: Option<LevelSelection>,
    /// Sprite slots replaced.
    pub slots_swapped: u32,
    /// Whether the container ended with nothing to draw.
    pub nothing_to_draw: bool,
    /// Whether a repaint was requested.
    pub redraw_requested: bool,
    /// Whether the native primitive received values.
    pub native_applied: bool,
}

impl From<&ShadowUpdate> for ShadowUpdateEvent {
    fn from(update: &ShadowUpdate) -> Self {
        Self {
            mode: update.mode,
            spot: update.spot,
            ambient: update.ambient,
            slots_swapped: update.slots_swapped,
            nothing_to_draw: update.nothing_to_draw,
            redraw_requested: update.redraw_requested,
            native_applied: update.native_applied,
        }
    }
}

/// Emitted after a layout or size-change geometry refresh.
#[derive(Clone, Copy, Debug)]
pub struct GeometryUpdateEvent {
    /// Sprite slots whose bounds were recomputed.
    pub bounds_updated: u32,
    /// Spot translation after the refresh.
    pub spot_offset: Vec2,
    /// Whether native mode re-applied the shadow.
    pub native_reapplied: bool,
}

impl From<&GeometryUpdate> for GeometryUpdateEvent {
    fn from(update: &GeometryUpdate) -> Self {
        Self {
            bounds_updated: update.bounds_updated,
            spot_offset: update.spot_offset,
            native_reapplied: update.native_reapplied,
        }
    }
}

/// Emitted after a draw pass.
#[derive(Clone, Copy, Debug)]
pub struct DrawPassEvent {
    /// Ambient layers drawn.
    pub ambient_layers: u32,
    /// Spot layers drawn.
    pub spot_layers: u32,
    /// Whether the spot layers were drawn inside a canvas translation.
    pub translated: bool,
    /// The spot translation in effect.
    pub offset: Vec2,
}

impl From<&DrawSummary> for DrawPassEvent {
    fn from(summary: &DrawSummary) -> Self {
        Self {
            ambient_layers: summary.ambient_layers,
            spot_layers: summary.spot_layers,
            translated: summary.translated,
            offset: summary.offset,
        }
    }
}

/// Emitted when the effective render mode flips.
#[derive(Clone, Copy, Debug)]
pub struct ModeSwitchEvent {
    /// Mode before the switch.
    pub from: RenderMode,
    /// Mode after the switch.
    pub to: RenderMode,
}

/// A per-slot state record (requires `trace-rich`).
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct SlotSnapshot {
    /// Which ladder the slot belongs to.
    pub ladder: LadderKind,
    /// Which role the slot plays in its pair.
    pub role: SlotRole,
    /// The resolved slot state, or `None` for an empty slot.
    pub slot: Option<SpriteSlot>,
}

/// Which of the two ladders a slot belongs to.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LadderKind {
    /// The directional, light-offset ladder.
    Spot,
    /// The soft, centered ladder.
    Ambient,
}

/// A slot's role within its resolved pair.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// The fading-out layer.
    Primary,
    /// The fading-in layer.
    Secondary,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from host wiring around the shadow container.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a shadow-level recompute.
    fn on_shadow_update(&mut self, e: &ShadowUpdateEvent) {
        _ = e;
    }

    /// Called after a geometry refresh.
    fn on_geometry_update(&mut self, e: &GeometryUpdateEvent) {
        _ = e;
    }

    /// Called after a draw pass.
    fn on_draw_pass(&mut self, e: &DrawPassEvent) {
        _ = e;
    }

    /// Called when the render mode flips.
    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        _ = e;
    }

    /// Called with per-slot state (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_slot_snapshots(&mut self, slots: &[SlotSnapshot]) {
        _ = slots;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ShadowUpdateEvent`].
    #[inline]
    pub fn shadow_update(&mut self, e: &ShadowUpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_shadow_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GeometryUpdateEvent`].
    #[inline]
    pub fn geometry_update(&mut self, e: &GeometryUpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DrawPassEvent`].
    #[inline]
    pub fn draw_pass(&mut self, e: &DrawPassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_draw_pass(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ModeSwitchEvent`].
    #[inline]
    pub fn mode_switch(&mut self, e: &ModeSwitchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mode_switch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits per-slot snapshots (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn slot_snapshots(&mut self, slots: &[SlotSnapshot]) {
        if let Some(s) = &mut self.sink {
            s.on_slot_snapshots(slots);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_every_event() {
        let mut sink = NoopSink;
        sink.on_shadow_update(&ShadowUpdateEvent {
            mode: RenderMode::Compat,
            spot: None,
            ambient: None,
            slots_swapped: 0,
            nothing_to_draw: true,
            redraw_requested: false,
            native_applied: false,
        });
        sink.on_mode_switch(&ModeSwitchEvent {
            from: RenderMode::Native,
            to: RenderMode::Compat,
        });
    }

    #[test]
    fn disabled_tracer_is_inert() {
        let mut tracer = Tracer::none();
        tracer.draw_pass(&DrawPassEvent {
            ambient_layers: 0,
            spot_layers: 0,
            translated: false,
            offset: Vec2::ZERO,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        #[derive(Default)]
        struct CountingSink {
            draw_passes: u32,
        }

        impl TraceSink for CountingSink {
            fn on_draw_pass(&mut self, _e: &DrawPassEvent) {
                self.draw_passes += 1;
            }
        }

        let mut sink = CountingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.draw_pass(&DrawPassEvent {
            ambient_layers: 2,
            spot_layers: 2,
            translated: true,
            offset: Vec2::new(0.0, 1.0),
        });
        drop(tracer);
        assert_eq!(sink.draw_passes, 1);
    }
}
