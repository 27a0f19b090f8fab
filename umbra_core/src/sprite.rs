// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer drawable wrappers and the two-slot resolution arena.
//!
//! Each ladder resolves to at most two layers: a *primary* asset fading out
//! and a *secondary* asset fading in. [`SpriteSlot`] is the per-instance
//! mutable wrapper around one resolved asset — handle, intrinsic padding,
//! draw bounds, and alpha. Slots are owned exclusively by one container;
//! hosts caching assets across containers must still hand out distinct
//! wrapper state per instance, since bounds and alpha are mutated in place.
//!
//! [`ResolvedPair`] is the arena of two slots for one ladder. Change
//! detection is explicit index diffing: a slot is replaced (and its padding
//! re-queried) only when the ladder index it was resolved from changes.

use kurbo::Rect;

use crate::ladder::{AssetSource, LadderId, PatchAsset, PatchHandle};
use crate::level::LevelSelection;

/// One resolved shadow layer with its per-instance draw parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSlot {
    /// Ladder index this slot was resolved from.
    pub index: usize,
    /// Handle to the stretchable bitmap asset.
    pub handle: PatchHandle,
    /// The asset's intrinsic content padding.
    pub padding: kurbo::Insets,
    /// Draw bounds: the child rectangle outset by `padding`.
    pub bounds: Rect,
    /// Draw alpha in `[0, 255]`.
    pub alpha: u8,
}

impl SpriteSlot {
    fn from_asset(index: usize, asset: PatchAsset) -> Self {
        Self {
            index,
            handle: asset.handle,
            padding: asset.padding,
            bounds: Rect::ZERO,
            alpha: 0,
        }
    }

    /// Recomputes the draw bounds from the child rectangle.
    ///
    /// The bounds bleed beyond the child by the asset's own padding, so a
    /// larger shadow asset extends further without the child moving.
    pub fn update_bounds(&mut self, child: Rect) {
        self.bounds = child + self.padding;
    }
}

/// The primary/secondary slot pair resolved for one ladder.
///
/// The ladder indices the slots were resolved from are cached separately
/// from the slots themselves, so an index whose asset failed to load is
/// resolved once and not retried on every recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedPair {
    /// The primary (fading-out) layer, if any asset resolved.
    pub primary: Option<SpriteSlot>,
    /// The secondary (fading-in) layer, if distinct from the primary.
    pub secondary: Option<SpriteSlot>,
    primary_index: Option<usize>,
    secondary_index: Option<usize>,
}

impl ResolvedPair {
    /// Returns whether neither slot holds an asset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Drops both slots and their cached indices.
    pub const fn clear(&mut self) {
        self.primary = None;
        self.secondary = None;
        self.primary_index = None;
        self.secondary_index = None;
    }

    /// Re-resolves the pair against a level selection, replacing only slots
    /// whose ladder index changed. Returns the number of slots replaced.
    ///
    /// A replaced slot starts with zero bounds and alpha; the caller
    /// refreshes both afterwards. An index that fails to load leaves the
    /// slot empty — fewer layers draw, nothing faults.
    pub fn resolve(
        &mut self,
        assets: &mut (impl AssetSource + ?Sized),
        ladder: LadderId,
        ladder_len: usize,
        selection: &LevelSelection,
    ) -> u32 {
        let want_primary = (ladder_len > 0).then_some(selection.primary());
        let want_secondary = if ladder_len > 0 {
            selection.secondary()
        } else {
            None
        };

        let mut swapped = 0;
        if self.primary_index != want_primary {
            self.primary = want_primary
                .and_then(|i| assets.load_patch(ladder, i).map(|a| SpriteSlot::from_asset(i, a)));
            self.primary_index = want_primary;
            swapped += 1;
        }
        if self.secondary_index != want_secondary {
            self.secondary = want_secondary
                .and_then(|i| assets.load_patch(ladder, i).map(|a| SpriteSlot::from_asset(i, a)));
            self.secondary_index = want_secondary;
            swapped += 1;
        }
        swapped
    }

    /// Assigns cross-fade alphas to the present slots.
    ///
    /// With a secondary slot present the two alphas sum to full opacity;
    /// a lone primary is forced fully opaque.
    pub fn set_alphas(&mut self, selection: &LevelSelection) {
        let (primary_alpha, secondary_alpha) = selection.alphas();
        match (&mut self.primary, &mut self.secondary) {
            (Some(primary), Some(secondary)) => {
                primary.alpha = primary_alpha;
                secondary.alpha = secondary_alpha;
            }
            (Some(primary), None) => primary.alpha = crate::level::OPAQUE,
            (None, Some(secondary)) => secondary.alpha = secondary_alpha,
            (None, None) => {}
        }
    }

    /// Recomputes both slots' draw bounds from the child rectangle.
    /// Returns the number of slots updated.
    pub fn update_bounds(&mut self, child: Rect) -> u32 {
        let mut updated = 0;
        if let Some(slot) = &mut self.primary {
            slot.update_bounds(child);
            updated += 1;
        }
        if let Some(slot) = &mut self.secondary {
            slot.update_bounds(child);
            updated += 1;
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::*;
    use crate::density::Density;
    use crate::level::select;

    /// Four-level ladder with padding growing by 2px per level.
    struct FakeAssets {
        len: usize,
        loads: u32,
        fail_index: Option<usize>,
    }

    impl FakeAssets {
        fn new(len: usize) -> Self {
            Self {
                len,
                loads: 0,
                fail_index: None,
            }
        }
    }

    impl AssetSource for FakeAssets {
        fn ladder_len(&self, _ladder: LadderId) -> usize {
            self.len
        }

        #[expect(clippy::cast_possible_truncation, reason = "test indices are tiny")]
        fn load_patch(&mut self, _ladder: LadderId, index: usize) -> Option<PatchAsset> {
            if index >= self.len || self.fail_index == Some(index) {
                return None;
            }
            self.loads += 1;
            Some(PatchAsset {
                handle: PatchHandle(index as u32),
                padding: Insets::uniform(2.0 * (index + 1) as f64),
            })
        }
    }

    fn resolve_at(pair: &mut ResolvedPair, assets: &mut FakeAssets, z: f32) -> u32 {
        let selection = select(z, Density::IDENTITY, assets.len.saturating_sub(1));
        let swapped = pair.resolve(assets, LadderId(0), assets.len, &selection);
        pair.set_alphas(&selection);
        swapped
    }

    #[test]
    fn resolves_both_slots_mid_fade() {
        let mut assets = FakeAssets::new(4);
        let mut pair = ResolvedPair::default();
        let swapped = resolve_at(&mut pair, &mut assets, 1.5);
        assert_eq!(swapped, 2);
        assert_eq!(pair.primary.unwrap().index, 1);
        assert_eq!(pair.secondary.unwrap().index, 2);
        let total = pair.primary.unwrap().alpha as u16 + pair.secondary.unwrap().alpha as u16;
        assert_eq!(total, 255);
    }

    #[test]
    fn unchanged_indices_do_not_reload() {
        let mut assets = FakeAssets::new(4);
        let mut pair = ResolvedPair::default();
        resolve_at(&mut pair, &mut assets, 1.5);
        let loads_before = assets.loads;
        // Same bracketing levels, different fraction: alpha-only change.
        let swapped = resolve_at(&mut pair, &mut assets, 1.75);
        assert_eq!(swapped, 0);
        assert_eq!(assets.loads, loads_before);
    }

    #[test]
    fn empty_ladder_resolves_nothing() {
        let mut assets = FakeAssets::new(0);
        let mut pair = ResolvedPair::default();
        resolve_at(&mut pair, &mut assets, 3.0);
        assert!(pair.is_empty());
        assert_eq!(assets.loads, 0);
    }

    #[test]
    fn boundary_drops_secondary_slot() {
        let mut assets = FakeAssets::new(4);
        let mut pair = ResolvedPair::default();
        resolve_at(&mut pair, &mut assets, 1.5);
        assert!(pair.secondary.is_some());
        resolve_at(&mut pair, &mut assets, 1.0);
        assert!(pair.secondary.is_none());
        assert_eq!(pair.primary.unwrap().alpha, 255);
    }

    #[test]
    fn failed_load_is_not_retried_for_the_same_index() {
        let mut assets = FakeAssets::new(4);
        assets.fail_index = Some(2);
        let mut pair = ResolvedPair::default();
        assert_eq!(resolve_at(&mut pair, &mut assets, 1.5), 2);
        assert!(pair.secondary.is_none(), "failed load leaves the slot empty");
        // Same bracketing levels: the failed index is cached, not retried.
        assert_eq!(resolve_at(&mut pair, &mut assets, 1.75), 0);
    }

    #[test]
    fn bounds_outset_by_per_asset_padding() {
        let mut assets = FakeAssets::new(4);
        let mut pair = ResolvedPair::default();
        resolve_at(&mut pair, &mut assets, 1.5);
        let child = Rect::new(10.0, 10.0, 50.0, 30.0);
        assert_eq!(pair.update_bounds(child), 2);
        // Level 1 pads by 4px, level 2 by 6px.
        assert_eq!(pair.primary.unwrap().bounds, Rect::new(6.0, 6.0, 54.0, 34.0));
        assert_eq!(
            pair.secondary.unwrap().bounds,
            Rect::new(4.0, 4.0, 56.0, 36.0)
        );
    }
}
