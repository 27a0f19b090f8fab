// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! The rich event ([`on_slot_snapshots`](TraceSink::on_slot_snapshots))
//! stores only the resolved count.

use kurbo::Vec2;

use umbra_core::host::RenderMode;
use umbra_core::level::LevelSelection;
use umbra_core::trace::{
    DrawPassEvent, GeometryUpdateEvent, ModeSwitchEvent, ShadowUpdateEvent, SlotSnapshot,
    TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SHADOW_UPDATE: u8 = 1;
const TAG_GEOMETRY_UPDATE: u8 = 2;
const TAG_DRAW_PASS: u8 = 3;
const TAG_MODE_SWITCH: u8 = 4;
const TAG_SLOT_SNAPSHOTS_COUNT: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_mode(&mut self, mode: RenderMode) {
        self.write_u8(match mode {
            RenderMode::Compat => 0,
            RenderMode::Native => 1,
        });
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ladder indices capped at u32::MAX for recording"
    )]
    fn write_option_selection(&mut self, selection: Option<LevelSelection>) {
        match selection {
            Some(s) => {
                self.write_u8(1);
                self.write_u32(s.lower.min(u32::MAX as usize) as u32);
                self.write_u32(s.upper.min(u32::MAX as usize) as u32);
                self.write_f32(s.fraction);
            }
            None => {
                self.write_u8(0);
                self.write_u32(0);
                self.write_u32(0);
                self.write_f32(0.0);
            }
        }
    }
}

impl TraceSink for RecorderSink {
    fn on_shadow_update(&mut self, e: &ShadowUpdateEvent) {
        self.write_u8(TAG_SHADOW_UPDATE);
        self.write_mode(e.mode);
        self.write_option_selection(e.spot);
        self.write_option_selection(e.ambient);
        self.write_u32(e.slots_swapped);
        self.write_bool(e.nothing_to_draw);
        self.write_bool(e.redraw_requested);
        self.write_bool(e.native_applied);
    }

    fn on_geometry_update(&mut self, e: &GeometryUpdateEvent) {
        self.write_u8(TAG_GEOMETRY_UPDATE);
        self.write_u32(e.bounds_updated);
        self.write_f64(e.spot_offset.x);
        self.write_f64(e.spot_offset.y);
        self.write_bool(e.native_reapplied);
    }

    fn on_draw_pass(&mut self, e: &DrawPassEvent) {
        self.write_u8(TAG_DRAW_PASS);
        self.write_u32(e.ambient_layers);
        self.write_u32(e.spot_layers);
        self.write_bool(e.translated);
        self.write_f64(e.offset.x);
        self.write_f64(e.offset.y);
    }

    fn on_mode_switch(&mut self, e: &ModeSwitchEvent) {
        self.write_u8(TAG_MODE_SWITCH);
        self.write_mode(e.from);
        self.write_mode(e.to);
    }

    fn on_slot_snapshots(&mut self, slots: &[SlotSnapshot]) {
        self.write_u8(TAG_SLOT_SNAPSHOTS_COUNT);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slot counts capped at u32::MAX for recording"
        )]
        let tracked = slots.len().min(u32::MAX as usize) as u32;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "slot counts capped at u32::MAX for recording"
        )]
        let resolved = slots
            .iter()
            .filter(|s| s.slot.is_some())
            .count()
            .min(u32::MAX as usize) as u32;
        self.write_u32(tracked);
        self.write_u32(resolved);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`ShadowUpdateEvent`].
    ShadowUpdate(ShadowUpdateEvent),
    /// A [`GeometryUpdateEvent`].
    GeometryUpdate(GeometryUpdateEvent),
    /// A [`DrawPassEvent`].
    DrawPass(DrawPassEvent),
    /// A [`ModeSwitchEvent`].
    ModeSwitch(ModeSwitchEvent),
    /// Slot counts from a rich snapshot event.
    SlotSnapshotsCount {
        /// Slots reported, resolved or not.
        tracked: u32,
        /// Slots holding an asset.
        resolved: u32,
    },
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_f32(&mut self) -> Option<f32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = f32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = f64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_mode(&mut self) -> Option<RenderMode> {
        Some(match self.read_u8()? {
            0 => RenderMode::Compat,
            _ => RenderMode::Native,
        })
    }

    fn read_option_selection(&mut self) -> Option<Option<LevelSelection>> {
        let present = self.read_u8()?;
        let lower = usize::try_from(self.read_u32()?).ok()?;
        let upper = usize::try_from(self.read_u32()?).ok()?;
        let fraction = self.read_f32()?;
        Some((present != 0).then_some(LevelSelection {
            lower,
            upper,
            fraction,
        }))
    }

    fn decode_shadow_update(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ShadowUpdate(ShadowUpdateEvent {
            mode: self.read_mode()?,
            spot: self.read_option_selection()?,
            ambient: self.read_option_selection()?,
            slots_swapped: self.read_u32()?,
            nothing_to_draw: self.read_bool()?,
            redraw_requested: self.read_bool()?,
            native_applied: self.read_bool()?,
        }))
    }

    fn decode_geometry_update(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::GeometryUpdate(GeometryUpdateEvent {
            bounds_updated: self.read_u32()?,
            spot_offset: Vec2::new(self.read_f64()?, self.read_f64()?),
            native_reapplied: self.read_bool()?,
        }))
    }

    fn decode_draw_pass(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::DrawPass(DrawPassEvent {
            ambient_layers: self.read_u32()?,
            spot_layers: self.read_u32()?,
            translated: self.read_bool()?,
            offset: Vec2::new(self.read_f64()?, self.read_f64()?),
        }))
    }

    fn decode_mode_switch(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ModeSwitch(ModeSwitchEvent {
            from: self.read_mode()?,
            to: self.read_mode()?,
        }))
    }

    fn decode_slot_snapshots_count(&mut self) -> Option<RecordedEvent> {
        let tracked = self.read_u32()?;
        let resolved = self.read_u32()?;
        Some(RecordedEvent::SlotSnapshotsCount { tracked, resolved })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_SHADOW_UPDATE => self.decode_shadow_update(),
            TAG_GEOMETRY_UPDATE => self.decode_geometry_update(),
            TAG_DRAW_PASS => self.decode_draw_pass(),
            TAG_MODE_SWITCH => self.decode_mode_switch(),
            TAG_SLOT_SNAPSHOTS_COUNT => self.decode_slot_snapshots_count(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
