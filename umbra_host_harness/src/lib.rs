// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scriptable mock host and recording canvas for demos and tests.
//!
//! [`MockHost`] implements the full host contract against in-memory ladders
//! ([`ScriptedAssets`]), recording every native-shadow call and counting
//! redraw requests. [`RecordingCanvas`] captures the draw pass as a
//! [`CanvasOp`] sequence so tests can assert exact layer ordering.

#![no_std]

extern crate alloc;

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use kurbo::{Insets, Rect, Vec2};

use umbra_core::host::{Canvas, HostDecorations, NativeShadow, RedrawScheduler};
use umbra_core::ladder::{AssetSource, LadderId, PatchAsset, PatchHandle};
use umbra_core::sprite::SpriteSlot;

// ---------------------------------------------------------------------------
// ScriptedAssets
// ---------------------------------------------------------------------------

/// An in-memory asset source with per-index failure injection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAssets {
    ladders: BTreeMap<u32, Vec<PatchAsset>>,
    failing: BTreeSet<(u32, usize)>,
    loads: u32,
}

impl ScriptedAssets {
    /// Creates an empty asset source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ladder of assets.
    #[must_use]
    pub fn with_ladder(mut self, ladder: LadderId, assets: Vec<PatchAsset>) -> Self {
        self.ladders.insert(ladder.0, assets);
        self
    }

    /// Makes one ladder index fail to load.
    #[must_use]
    pub fn with_failing_index(mut self, ladder: LadderId, index: usize) -> Self {
        self.failing.insert((ladder.0, index));
        self
    }

    /// Returns the number of successful loads so far.
    #[must_use]
    pub const fn loads(&self) -> u32 {
        self.loads
    }
}

impl AssetSource for ScriptedAssets {
    fn ladder_len(&self, ladder: LadderId) -> usize {
        self.ladders.get(&ladder.0).map_or(0, Vec::len)
    }

    fn load_patch(&mut self, ladder: LadderId, index: usize) -> Option<PatchAsset> {
        if self.failing.contains(&(ladder.0, index)) {
            return None;
        }
        let asset = self.ladders.get(&ladder.0)?.get(index).copied()?;
        self.loads += 1;
        Some(asset)
    }
}

/// Builds a ladder of `levels` assets with consecutive handles starting at
/// `first_handle` and padding growing by `padding_step` per level.
#[must_use]
pub fn uniform_ladder(levels: usize, first_handle: u32, padding_step: f64) -> Vec<PatchAsset> {
    (0..levels)
        .map(|i| PatchAsset {
            handle: PatchHandle(first_handle + u32::try_from(i).unwrap_or(u32::MAX)),
            padding: Insets::uniform(padding_step * (i + 1) as f64),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// MockHost
// ---------------------------------------------------------------------------

/// One recorded native-shadow call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NativeOp {
    /// `set_native_translation_z` with the given value.
    TranslationZ(f32),
    /// `set_native_elevation` with the given value.
    Elevation(f32),
}

/// A full host implementation backed by [`ScriptedAssets`].
///
/// Native-shadow calls are recorded in order; redraw requests are counted,
/// not coalesced, so tests can see every request.
#[derive(Clone, Debug, Default)]
pub struct MockHost {
    /// The scripted asset source.
    pub assets: ScriptedAssets,
    native_ops: Vec<NativeOp>,
    redraw_requests: u32,
    background: bool,
    foreground: bool,
}

impl MockHost {
    /// Creates a host over the given assets.
    #[must_use]
    pub fn new(assets: ScriptedAssets) -> Self {
        Self {
            assets,
            ..Self::default()
        }
    }

    /// Marks the container as having a background decoration.
    #[must_use]
    pub const fn with_background(mut self) -> Self {
        self.background = true;
        self
    }

    /// Marks the container as having a foreground decoration.
    #[must_use]
    pub const fn with_foreground(mut self) -> Self {
        self.foreground = true;
        self
    }

    /// Returns the recorded native-shadow calls in order.
    #[must_use]
    pub fn native_ops(&self) -> &[NativeOp] {
        &self.native_ops
    }

    /// Forgets the recorded native-shadow calls.
    pub fn clear_native_ops(&mut self) {
        self.native_ops.clear();
    }

    /// Returns how many redraws were requested.
    #[must_use]
    pub const fn redraw_requests(&self) -> u32 {
        self.redraw_requests
    }
}

impl AssetSource for MockHost {
    fn ladder_len(&self, ladder: LadderId) -> usize {
        self.assets.ladder_len(ladder)
    }

    fn load_patch(&mut self, ladder: LadderId, index: usize) -> Option<PatchAsset> {
        self.assets.load_patch(ladder, index)
    }
}

impl NativeShadow for MockHost {
    fn set_native_translation_z(&mut self, translation_z: f32) {
        self.native_ops.push(NativeOp::TranslationZ(translation_z));
    }

    fn set_native_elevation(&mut self, elevation: f32) {
        self.native_ops.push(NativeOp::Elevation(elevation));
    }
}

impl RedrawScheduler for MockHost {
    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}

impl HostDecorations for MockHost {
    fn has_background(&self) -> bool {
        self.background
    }

    fn has_foreground(&self) -> bool {
        self.foreground
    }
}

// ---------------------------------------------------------------------------
// RecordingCanvas
// ---------------------------------------------------------------------------

/// One recorded draw-pass call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasOp {
    /// Transform saved.
    Save,
    /// Subsequent draws translated by the offset.
    Translate(Vec2),
    /// Transform restored.
    Restore,
    /// One shadow layer drawn.
    DrawPatch {
        /// Asset drawn.
        handle: PatchHandle,
        /// Alpha it was drawn at.
        alpha: u8,
        /// Bounds it was stretched to.
        bounds: Rect,
    },
}

/// A [`Canvas`] that records every call for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls in order.
    #[must_use]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Consumes the canvas and returns the recorded calls.
    #[must_use]
    pub fn into_ops(self) -> Vec<CanvasOp> {
        self.ops
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(CanvasOp::Translate(offset));
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }

    fn draw_patch(&mut self, slot: &SpriteSlot) {
        self.ops.push(CanvasOp::DrawPatch {
            handle: slot.handle,
            alpha: slot.alpha,
            bounds: slot.bounds,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use umbra_core::config::ShadowConfig;
    use umbra_core::container::ShadowContainer;
    use umbra_core::density::Density;
    use umbra_core::geometry::GeometrySnapshot;

    fn two_ladders() -> ScriptedAssets {
        ScriptedAssets::new()
            .with_ladder(LadderId(0), uniform_ladder(4, 10, 2.0))
            .with_ladder(LadderId(1), uniform_ladder(4, 20, 2.0))
    }

    fn centered_geometry() -> GeometrySnapshot {
        // Child center lands exactly under the light at (540, 0).
        GeometrySnapshot {
            child: Rect::new(0.0, 0.0, 200.0, 100.0),
            window_origin: Point::new(440.0, -50.0),
            translation: Vec2::ZERO,
            visible_frame_width: 1080.0,
            child_visible: true,
        }
    }

    #[test]
    fn cross_fade_draw_sequence() {
        let mut host = MockHost::new(two_ladders());
        let config = ShadowConfig {
            elevation: 1.5,
            ..ShadowConfig::default()
        };
        let (mut container, update) =
            ShadowContainer::new(config, Density::IDENTITY, false, &mut host);
        assert_eq!(update.slots_swapped, 4);
        container.on_layout(centered_geometry(), &mut host);

        let mut canvas = RecordingCanvas::new();
        let summary = container.on_draw(&mut canvas);
        assert_eq!(summary.ambient_layers, 2);
        assert_eq!(summary.spot_layers, 2);

        // Ambient first (handles 21, 22), then spot bracketed in a
        // save/translate/restore (handles 11, 12).
        let ops = canvas.ops();
        assert_eq!(ops.len(), 7);
        assert!(
            matches!(ops[0], CanvasOp::DrawPatch { handle: PatchHandle(21), alpha: 127, .. }),
            "got: {:?}",
            ops[0]
        );
        assert!(
            matches!(ops[1], CanvasOp::DrawPatch { handle: PatchHandle(22), alpha: 128, .. }),
            "got: {:?}",
            ops[1]
        );
        assert_eq!(ops[2], CanvasOp::Save);
        assert_eq!(ops[3], CanvasOp::Translate(container.spot_translation()));
        assert!(matches!(
            ops[4],
            CanvasOp::DrawPatch { handle: PatchHandle(11), alpha: 127, .. }
        ));
        assert!(matches!(
            ops[5],
            CanvasOp::DrawPatch { handle: PatchHandle(12), alpha: 128, .. }
        ));
        assert_eq!(ops[6], CanvasOp::Restore);
    }

    #[test]
    fn native_zeroed_before_compat_takes_over() {
        let mut host = MockHost::new(two_ladders());
        let config = ShadowConfig {
            translation_z: 2.0,
            elevation: 6.0,
            ..ShadowConfig::default()
        };
        let (mut container, _) = ShadowContainer::new(config, Density::IDENTITY, true, &mut host);
        container.on_layout(centered_geometry(), &mut host);
        host.clear_native_ops();
        let loads_before = host.assets.loads();

        let update = container.set_force_compat_shadow(true, &mut host);
        assert!(update.is_some());
        assert_eq!(
            host.native_ops(),
            [NativeOp::TranslationZ(0.0), NativeOp::Elevation(0.0)]
        );
        assert!(host.assets.loads() > loads_before, "compat sprites resolved");
    }

    #[test]
    fn redraws_counted_per_effective_change() {
        let mut host = MockHost::new(two_ladders());
        let (mut container, _) =
            ShadowContainer::new(ShadowConfig::default(), Density::IDENTITY, false, &mut host);
        assert_eq!(host.redraw_requests(), 1);

        assert!(container.set_elevation(0.0, &mut host).is_none());
        assert_eq!(host.redraw_requests(), 1);

        assert!(container.set_elevation(2.0, &mut host).is_some());
        assert_eq!(host.redraw_requests(), 2);
    }

    #[test]
    fn failed_secondary_leaves_primary_opaque() {
        let assets = two_ladders()
            .with_failing_index(LadderId(0), 2)
            .with_failing_index(LadderId(1), 2);
        let mut host = MockHost::new(assets);
        let config = ShadowConfig {
            elevation: 1.5,
            ..ShadowConfig::default()
        };
        let (mut container, _) = ShadowContainer::new(config, Density::IDENTITY, false, &mut host);
        container.on_layout(centered_geometry(), &mut host);

        let mut canvas = RecordingCanvas::new();
        let summary = container.on_draw(&mut canvas);
        assert_eq!(summary.ambient_layers, 1);
        assert_eq!(summary.spot_layers, 1);
        assert!(matches!(
            canvas.ops()[0],
            CanvasOp::DrawPatch { handle: PatchHandle(21), alpha: 255, .. }
        ));
    }
}
