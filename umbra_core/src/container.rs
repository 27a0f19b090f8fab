// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shadow container: renderer, positioner, and mode state machine.
//!
//! [`ShadowContainer`] owns all mutable shadow state for one container
//! element with one shadowed child. It is single-threaded and synchronous:
//! every operation is a fast recomputation performed on the host's UI
//! thread, in response to a property setter or a layout/geometry callback,
//! and repaints are deferred through the host's [`RedrawScheduler`].
//!
//! # Mode state machine
//!
//! The render mode is decided once at construction from the platform
//! capability and the force-compat override, and thereafter flips between
//! `Compat` and `Native` only on override changes — the capability is
//! immutable for the life of the instance. Entering compat from native
//! first zeroes the native primitive so the child cannot cast two shadows.
//!
//! # Change summaries
//!
//! Mutating operations return summary values ([`ShadowUpdate`],
//! [`GeometryUpdate`], [`DrawSummary`]) describing what was recomputed.
//! Hosts feed these to [`trace`](crate::trace) sinks or ignore them; the
//! setters additionally return `None` when the new value equals the current
//! one and nothing was done.

use kurbo::{Size, Vec2};

use crate::config::ShadowConfig;
use crate::density::Density;
use crate::geometry::GeometrySnapshot;
use crate::host::{Canvas, RenderMode, ShadowHost, render_mode};
use crate::ladder::{self, LadderId};
use crate::level::{self, LevelSelection};
use crate::light::LightSource;
use crate::sprite::ResolvedPair;

/// Summary of one shadow-level recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowUpdate {
    /// Render mode after the recompute.
    pub mode: RenderMode,
    /// Spot-ladder level selection (compat mode only).
    pub spot: Option<LevelSelection>,
    /// Ambient-ladder level selection (compat mode only).
    pub ambient: Option<LevelSelection>,
    /// Number of sprite slots replaced.
    pub slots_swapped: u32,
    /// Whether the container now has nothing to draw.
    pub nothing_to_draw: bool,
    /// Whether a repaint was requested.
    pub redraw_requested: bool,
    /// Whether the native primitive received new values.
    pub native_applied: bool,
}

/// Summary of one geometry refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryUpdate {
    /// Number of sprite slots whose bounds were recomputed.
    pub bounds_updated: u32,
    /// Spot-shadow translation after the refresh, in device pixels.
    pub spot_offset: Vec2,
    /// Whether native mode re-applied the shadow to the child.
    pub native_reapplied: bool,
}

/// Summary of one draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSummary {
    /// Ambient layers drawn.
    pub ambient_layers: u32,
    /// Spot layers drawn.
    pub spot_layers: u32,
    /// Whether the spot layers were bracketed in a canvas translation.
    pub translated: bool,
    /// The spot translation in effect.
    pub offset: Vec2,
}

impl DrawSummary {
    const fn empty(offset: Vec2) -> Self {
        Self {
            ambient_layers: 0,
            spot_layers: 0,
            translated: false,
            offset,
        }
    }
}

/// Shadow renderer and positioner for one container element.
#[derive(Debug)]
pub struct ShadowContainer {
    translation_z: f32,
    elevation: f32,
    force_compat: bool,
    native_supported: bool,
    density: Density,

    spot_ladder: LadderId,
    ambient_ladder: LadderId,
    spot_len: usize,
    ambient_len: usize,

    spot: ResolvedPair,
    ambient: ResolvedPair,
    spot_translation: Vec2,
    geometry: Option<GeometrySnapshot>,
    container_size: Option<Size>,
    nothing_to_draw: bool,
}

impl ShadowContainer {
    /// Creates a container and performs the initial forced recompute.
    ///
    /// Ladder lengths are resolved once here; the ladders themselves are
    /// expected to be immutable for the life of the instance.
    pub fn new(
        config: ShadowConfig,
        density: Density,
        native_supported: bool,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> (Self, ShadowUpdate) {
        let mut container = Self {
            translation_z: config.translation_z,
            elevation: config.elevation,
            force_compat: config.force_compat_shadow,
            native_supported,
            density,
            spot_ladder: config.spot_ladder,
            ambient_ladder: config.ambient_ladder,
            spot_len: host.ladder_len(config.spot_ladder),
            ambient_len: host.ladder_len(config.ambient_ladder),
            spot: ResolvedPair::default(),
            ambient: ResolvedPair::default(),
            spot_translation: Vec2::ZERO,
            geometry: None,
            container_size: None,
            nothing_to_draw: true,
        };
        let update = container.update_shadow_level(true, host);
        (container, update)
    }

    // -- Property setters --

    /// Sets the transient lift. No-op (returns `None`) when unchanged.
    pub fn set_translation_z(
        &mut self,
        translation_z: f32,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> Option<ShadowUpdate> {
        if self.translation_z == translation_z {
            return None;
        }
        self.translation_z = translation_z;
        Some(self.update_shadow_level(false, host))
    }

    /// Returns the transient lift.
    #[must_use]
    pub const fn translation_z(&self) -> f32 {
        self.translation_z
    }

    /// Sets the resting elevation. No-op (returns `None`) when unchanged.
    pub fn set_elevation(
        &mut self,
        elevation: f32,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> Option<ShadowUpdate> {
        if self.elevation == elevation {
            return None;
        }
        self.elevation = elevation;
        Some(self.update_shadow_level(false, host))
    }

    /// Returns the resting elevation.
    #[must_use]
    pub const fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Sets the force-compat override.
    ///
    /// Returns `None` when the flag is unchanged, or when flipping it does
    /// not change the effective mode (no native support means compat either
    /// way). On a native→compat transition the native primitive is zeroed
    /// *before* compat sprites are applied, so the child never casts a
    /// native and a compat shadow at once.
    pub fn set_force_compat_shadow(
        &mut self,
        force_compat: bool,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> Option<ShadowUpdate> {
        if self.force_compat == force_compat {
            return None;
        }
        let prev_compat = self.use_compat_shadow();
        self.force_compat = force_compat;
        if self.use_compat_shadow() == prev_compat {
            return None;
        }
        if self.use_compat_shadow() && self.native_supported {
            // Disable the native shadow before any compat sprite applies.
            self.apply_native(0.0, 0.0, true, host);
        }
        Some(self.update_shadow_level(true, host))
    }

    /// Returns the force-compat override flag.
    #[must_use]
    pub const fn force_compat_shadow(&self) -> bool {
        self.force_compat
    }

    /// Returns whether compat rendering is active.
    #[must_use]
    pub const fn use_compat_shadow(&self) -> bool {
        !self.native_supported || self.force_compat
    }

    /// Returns the current render mode.
    #[must_use]
    pub const fn render_mode(&self) -> RenderMode {
        render_mode(self.native_supported, self.force_compat)
    }

    /// Returns whether there is nothing to draw (no resolved sprite in
    /// either ladder and no host decoration).
    #[must_use]
    pub const fn nothing_to_draw(&self) -> bool {
        self.nothing_to_draw
    }

    /// Returns the current spot-shadow translation in device pixels.
    #[must_use]
    pub const fn spot_translation(&self) -> Vec2 {
        self.spot_translation
    }

    /// Returns the most recent geometry snapshot, if any layout happened.
    #[must_use]
    pub const fn geometry(&self) -> Option<GeometrySnapshot> {
        self.geometry
    }

    /// Returns the container size reported by the last size change.
    #[must_use]
    pub const fn container_size(&self) -> Option<Size> {
        self.container_size
    }

    /// Returns the resolved spot sprite pair.
    #[must_use]
    pub const fn spot_pair(&self) -> &ResolvedPair {
        &self.spot
    }

    /// Returns the resolved ambient sprite pair.
    #[must_use]
    pub const fn ambient_pair(&self) -> &ResolvedPair {
        &self.ambient
    }

    // -- Host lifecycle hooks --

    /// Layout hook: captures the child's fresh geometry, refreshes sprite
    /// bounds and the spot translation, and in native mode re-applies the
    /// native shadow (forced, as the child instance may have been replaced
    /// by the host's layout pass).
    pub fn on_layout(
        &mut self,
        geometry: GeometrySnapshot,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> GeometryUpdate {
        self.geometry = Some(geometry);
        let bounds_updated = self.refresh_bounds();
        self.refresh_spot_position();
        let native_reapplied = if self.use_compat_shadow() {
            false
        } else {
            self.apply_native(self.translation_z, self.elevation, true, host)
                .native_applied
        };
        GeometryUpdate {
            bounds_updated,
            spot_offset: self.spot_translation,
            native_reapplied,
        }
    }

    /// Size-change hook. The dimensions themselves enter no computation —
    /// bounds derive from the child rectangle and the light from the
    /// visible frame — but the refresh must still run against the stored
    /// geometry.
    pub fn on_size_changed(&mut self, new_size: Size) -> GeometryUpdate {
        self.container_size = Some(new_size);
        let bounds_updated = self.refresh_bounds();
        self.refresh_spot_position();
        GeometryUpdate {
            bounds_updated,
            spot_offset: self.spot_translation,
            native_reapplied: false,
        }
    }

    /// Draw hook: issues the compat draw calls in back-to-front order.
    ///
    /// Ambient layers draw first, centered under the child; spot layers
    /// draw bracketed in a save/translate/restore carrying the light-derived
    /// offset. The pass is skipped when there is nothing to draw, no layout
    /// has happened, or the child is not visible. Never fails: a layer that
    /// resolved to nothing is simply not drawn.
    pub fn on_draw(&self, canvas: &mut (impl Canvas + ?Sized)) -> DrawSummary {
        let mut summary = DrawSummary::empty(self.spot_translation);
        if self.nothing_to_draw {
            return summary;
        }
        let Some(geometry) = self.geometry else {
            return summary;
        };
        if !geometry.child_visible {
            return summary;
        }

        if let Some(slot) = &self.ambient.primary {
            canvas.draw_patch(slot);
            summary.ambient_layers += 1;
        }
        if let Some(slot) = &self.ambient.secondary {
            canvas.draw_patch(slot);
            summary.ambient_layers += 1;
        }

        if !self.spot.is_empty() {
            canvas.save();
            canvas.translate(self.spot_translation);
            summary.translated = true;
            if let Some(slot) = &self.spot.primary {
                canvas.draw_patch(slot);
                summary.spot_layers += 1;
            }
            if let Some(slot) = &self.spot.secondary {
                canvas.draw_patch(slot);
                summary.spot_layers += 1;
            }
            canvas.restore();
        }
        summary
    }

    // -- Recomputation --

    fn update_shadow_level(
        &mut self,
        force: bool,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> ShadowUpdate {
        if self.use_compat_shadow() {
            self.update_compat(force, host)
        } else {
            self.apply_native(self.translation_z, self.elevation, force, host)
        }
    }

    /// Compat recompute: select levels, swap changed sprite slots, refresh
    /// dependent state, assign cross-fade alphas, and schedule a repaint.
    fn update_compat(
        &mut self,
        force: bool,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> ShadowUpdate {
        let z = self.translation_z + self.elevation;
        let spot_sel = level::select(z, self.density, ladder::max_level(self.spot_len));
        let ambient_sel = level::select(z, self.density, ladder::max_level(self.ambient_len));

        let mut swapped = self
            .spot
            .resolve(host, self.spot_ladder, self.spot_len, &spot_sel);
        swapped += self
            .ambient
            .resolve(host, self.ambient_ladder, self.ambient_len, &ambient_sel);

        // An asset swap invalidates padding-derived bounds and the
        // nothing-to-draw flag; alpha alone does not.
        if force || swapped > 0 {
            self.refresh_bounds();
            self.refresh_spot_position();
            self.refresh_nothing_to_draw(host);
        }

        self.spot.set_alphas(&spot_sel);
        self.ambient.set_alphas(&ambient_sel);

        let redraw_requested = !self.nothing_to_draw;
        if redraw_requested {
            host.request_redraw();
        }

        ShadowUpdate {
            mode: RenderMode::Compat,
            spot: Some(spot_sel),
            ambient: Some(ambient_sel),
            slots_swapped: swapped,
            nothing_to_draw: self.nothing_to_draw,
            redraw_requested,
            native_applied: false,
        }
    }

    /// Native apply: pushes lift and elevation to the platform primitive.
    /// A forced apply additionally drops any lingering compat sprites.
    fn apply_native(
        &mut self,
        translation_z: f32,
        elevation: f32,
        force: bool,
        host: &mut (impl ShadowHost + ?Sized),
    ) -> ShadowUpdate {
        if force {
            self.spot.clear();
            self.ambient.clear();
            self.refresh_nothing_to_draw(host);
        }

        // Nothing to target before the first layout pass attaches a child.
        let native_applied = self.geometry.is_some();
        if native_applied {
            host.set_native_translation_z(translation_z);
            host.set_native_elevation(elevation);
        }

        ShadowUpdate {
            mode: RenderMode::Native,
            spot: None,
            ambient: None,
            slots_swapped: 0,
            nothing_to_draw: self.nothing_to_draw,
            redraw_requested: false,
            native_applied,
        }
    }

    fn refresh_bounds(&mut self) -> u32 {
        let Some(geometry) = self.geometry else {
            return 0;
        };
        self.spot.update_bounds(geometry.child) + self.ambient.update_bounds(geometry.child)
    }

    fn refresh_spot_position(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        let light = LightSource::over_visible_frame(geometry.visible_frame_width);
        self.spot_translation = light.spot_offset(
            geometry.screen_center(),
            geometry.translation,
            self.translation_z + self.elevation,
            self.density,
        );
    }

    fn refresh_nothing_to_draw(&mut self, host: &(impl ShadowHost + ?Sized)) {
        self.nothing_to_draw = self.spot.is_empty()
            && self.ambient.is_empty()
            && !host.has_background()
            && !host.has_foreground();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Insets, Point, Rect};

    use super::*;
    use crate::ladder::{AssetSource, PatchAsset, PatchHandle};
    use crate::sprite::SpriteSlot;

    /// One recorded host interaction, in call order.
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum HostOp {
        LoadPatch(u32, usize),
        NativeTranslationZ(f32),
        NativeElevation(f32),
        Redraw,
    }

    struct TestHost {
        spot_len: usize,
        ambient_len: usize,
        background: bool,
        ops: Vec<HostOp>,
    }

    impl TestHost {
        fn new(spot_len: usize, ambient_len: usize) -> Self {
            Self {
                spot_len,
                ambient_len,
                background: false,
                ops: Vec::new(),
            }
        }

        fn redraws(&self) -> usize {
            self.ops.iter().filter(|op| **op == HostOp::Redraw).count()
        }
    }

    impl AssetSource for TestHost {
        fn ladder_len(&self, ladder: LadderId) -> usize {
            match ladder.0 {
                0 => self.spot_len,
                _ => self.ambient_len,
            }
        }

        #[expect(clippy::cast_possible_truncation, reason = "test indices are tiny")]
        fn load_patch(&mut self, ladder: LadderId, index: usize) -> Option<PatchAsset> {
            if index >= self.ladder_len(ladder) {
                return None;
            }
            self.ops.push(HostOp::LoadPatch(ladder.0, index));
            Some(PatchAsset {
                handle: PatchHandle(ladder.0 * 100 + index as u32),
                padding: Insets::uniform((index + 1) as f64),
            })
        }
    }

    impl crate::host::NativeShadow for TestHost {
        fn set_native_translation_z(&mut self, translation_z: f32) {
            self.ops.push(HostOp::NativeTranslationZ(translation_z));
        }

        fn set_native_elevation(&mut self, elevation: f32) {
            self.ops.push(HostOp::NativeElevation(elevation));
        }
    }

    impl crate::host::RedrawScheduler for TestHost {
        fn request_redraw(&mut self) {
            self.ops.push(HostOp::Redraw);
        }
    }

    impl crate::host::HostDecorations for TestHost {
        fn has_background(&self) -> bool {
            self.background
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum CanvasOp {
        Save,
        Translate(Vec2),
        Draw(PatchHandle, u8),
        Restore,
    }

    #[derive(Default)]
    struct TestCanvas {
        ops: Vec<CanvasOp>,
    }

    impl Canvas for TestCanvas {
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
            self.ops.push(CanvasOp::Draw(slot.handle, slot.alpha));
        }
    }

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot {
            child: Rect::new(100.0, 100.0, 300.0, 200.0),
            window_origin: Point::new(100.0, 100.0),
            translation: Vec2::ZERO,
            visible_frame_width: 1080.0,
            child_visible: true,
        }
    }

    fn compat_container(host: &mut TestHost) -> ShadowContainer {
        let (container, _) =
            ShadowContainer::new(ShadowConfig::default(), Density::IDENTITY, false, host);
        container
    }

    #[test]
    fn construction_forces_initial_recompute() {
        let mut host = TestHost::new(5, 5);
        let (_, update) = ShadowContainer::new(
            ShadowConfig {
                elevation: 2.5,
                ..ShadowConfig::default()
            },
            Density::IDENTITY,
            false,
            &mut host,
        );
        assert_eq!(update.mode, RenderMode::Compat);
        assert_eq!(update.slots_swapped, 4);
        assert!(update.redraw_requested);
        assert!(!update.nothing_to_draw);
    }

    #[test]
    fn equal_value_setter_is_a_no_op() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        let redraws_after_new = host.redraws();

        assert!(container.set_elevation(4.0, &mut host).is_some());
        assert_eq!(host.redraws(), redraws_after_new + 1);

        assert!(container.set_elevation(4.0, &mut host).is_none());
        assert_eq!(host.redraws(), redraws_after_new + 1, "no second recompute");

        assert!(container.set_translation_z(0.0, &mut host).is_none());
        assert_eq!(container.elevation(), 4.0);
    }

    #[test]
    fn alpha_only_change_swaps_no_slots() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        container.set_elevation(1.25, &mut host);

        let update = container.set_elevation(1.75, &mut host).unwrap();
        assert_eq!(update.slots_swapped, 0);
        assert!(update.redraw_requested, "alpha change still repaints");
    }

    #[test]
    fn empty_ladders_leave_nothing_to_draw() {
        let mut host = TestHost::new(0, 0);
        let (container, update) =
            ShadowContainer::new(ShadowConfig::default(), Density::IDENTITY, false, &mut host);
        assert!(container.nothing_to_draw());
        assert!(!update.redraw_requested);
        assert_eq!(host.redraws(), 0);
    }

    #[test]
    fn host_background_keeps_draw_pass_alive() {
        let mut host = TestHost::new(0, 0);
        host.background = true;
        let (container, update) =
            ShadowContainer::new(ShadowConfig::default(), Density::IDENTITY, false, &mut host);
        assert!(!container.nothing_to_draw());
        assert!(update.redraw_requested);
    }

    #[test]
    fn native_mode_applies_on_layout_not_before() {
        let mut host = TestHost::new(5, 5);
        let (mut container, update) = ShadowContainer::new(
            ShadowConfig {
                translation_z: 1.0,
                elevation: 3.0,
                ..ShadowConfig::default()
            },
            Density::IDENTITY,
            true,
            &mut host,
        );
        assert_eq!(update.mode, RenderMode::Native);
        assert!(!update.native_applied, "no child before the first layout");
        assert!(host.ops.is_empty());

        let geo_update = container.on_layout(geometry(), &mut host);
        assert!(geo_update.native_reapplied);
        assert_eq!(
            host.ops,
            alloc::vec![
                HostOp::NativeTranslationZ(1.0),
                HostOp::NativeElevation(3.0),
            ]
        );
    }

    #[test]
    fn native_to_compat_switch_zeroes_native_first() {
        let mut host = TestHost::new(3, 3);
        let (mut container, _) =
            ShadowContainer::new(ShadowConfig::default(), Density::IDENTITY, true, &mut host);
        container.on_layout(geometry(), &mut host);
        host.ops.clear();

        let update = container.set_force_compat_shadow(true, &mut host).unwrap();
        assert_eq!(update.mode, RenderMode::Compat);

        let first_load = host
            .ops
            .iter()
            .position(|op| matches!(op, HostOp::LoadPatch(..)))
            .expect("compat sprites must load after the switch");
        let zero_z = host
            .ops
            .iter()
            .position(|op| *op == HostOp::NativeTranslationZ(0.0))
            .expect("native lift must be cleared");
        let zero_elevation = host
            .ops
            .iter()
            .position(|op| *op == HostOp::NativeElevation(0.0))
            .expect("native elevation must be cleared");
        assert!(zero_z < first_load, "clear native before compat applies");
        assert!(zero_elevation < first_load, "clear native before compat applies");
    }

    #[test]
    fn compat_to_native_switch_drops_sprites() {
        let mut host = TestHost::new(3, 3);
        let (mut container, _) = ShadowContainer::new(
            ShadowConfig {
                force_compat_shadow: true,
                elevation: 1.5,
                ..ShadowConfig::default()
            },
            Density::IDENTITY,
            true,
            &mut host,
        );
        container.on_layout(geometry(), &mut host);
        assert!(!container.spot_pair().is_empty());

        let update = container.set_force_compat_shadow(false, &mut host).unwrap();
        assert_eq!(update.mode, RenderMode::Native);
        assert!(container.spot_pair().is_empty());
        assert!(container.ambient_pair().is_empty());
        assert!(container.nothing_to_draw());
    }

    #[test]
    fn override_without_capability_changes_nothing() {
        let mut host = TestHost::new(3, 3);
        let mut container = compat_container(&mut host);
        host.ops.clear();

        assert!(container.set_force_compat_shadow(true, &mut host).is_none());
        assert!(container.force_compat_shadow());
        assert!(container.use_compat_shadow());
        assert!(host.ops.is_empty(), "no recompute without a mode change");
    }

    #[test]
    fn draw_order_is_ambient_then_translated_spot() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        container.set_elevation(1.5, &mut host);
        // Off-center child so the spot translation is non-zero.
        container.on_layout(
            GeometrySnapshot {
                child: Rect::new(700.0, 300.0, 900.0, 400.0),
                window_origin: Point::new(700.0, 300.0),
                translation: Vec2::ZERO,
                visible_frame_width: 1080.0,
                ..geometry()
            },
            &mut host,
        );

        let mut canvas = TestCanvas::default();
        let summary = container.on_draw(&mut canvas);
        assert_eq!(summary.ambient_layers, 2);
        assert_eq!(summary.spot_layers, 2);
        assert!(summary.translated);

        let offset = container.spot_translation();
        assert_eq!(
            canvas.ops,
            alloc::vec![
                CanvasOp::Draw(PatchHandle(101), 127),
                CanvasOp::Draw(PatchHandle(102), 128),
                CanvasOp::Save,
                CanvasOp::Translate(offset),
                CanvasOp::Draw(PatchHandle(1), 127),
                CanvasOp::Draw(PatchHandle(2), 128),
                CanvasOp::Restore,
            ]
        );
    }

    #[test]
    fn hidden_child_draws_nothing() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        container.set_elevation(2.0, &mut host);
        container.on_layout(
            GeometrySnapshot {
                child_visible: false,
                ..geometry()
            },
            &mut host,
        );

        let mut canvas = TestCanvas::default();
        let summary = container.on_draw(&mut canvas);
        assert!(canvas.ops.is_empty());
        assert_eq!(summary.ambient_layers, 0);
        assert_eq!(summary.spot_layers, 0);
    }

    #[test]
    fn spot_translation_is_zero_under_the_light() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        container.set_elevation(6.0, &mut host);
        // Child centered at (540, 0): exactly the simulated light position.
        container.on_layout(
            GeometrySnapshot {
                child: Rect::new(440.0, -50.0, 640.0, 50.0),
                window_origin: Point::new(440.0, -50.0),
                translation: Vec2::ZERO,
                visible_frame_width: 1080.0,
                child_visible: true,
            },
            &mut host,
        );
        assert_eq!(container.spot_translation(), Vec2::ZERO);
    }

    #[test]
    fn size_change_refreshes_bounds_against_stored_geometry() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        container.set_elevation(1.5, &mut host);
        container.on_layout(geometry(), &mut host);

        let update = container.on_size_changed(Size::new(400.0, 300.0));
        assert_eq!(update.bounds_updated, 4);
        assert_eq!(container.container_size(), Some(Size::new(400.0, 300.0)));

        // Level 1 asset pads by 2px around the 100..300 x 100..200 child.
        let primary = container.spot_pair().primary.unwrap();
        assert_eq!(primary.bounds, Rect::new(98.0, 98.0, 302.0, 202.0));
    }

    #[test]
    fn negative_elevation_clamps_to_level_zero() {
        let mut host = TestHost::new(5, 5);
        let mut container = compat_container(&mut host);
        let update = container.set_elevation(-4.0, &mut host).unwrap();
        let spot = update.spot.unwrap();
        assert_eq!(spot.primary(), 0);
        assert_eq!(spot.secondary(), None);
    }
}
