// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shadow asset ladders and the asset resolution contract.
//!
//! A *ladder* is an ordered sequence of stretchable shadow bitmap assets,
//! one per discrete elevation level. Index 0 corresponds to elevation 0 and
//! the last index to the highest representable level. A ladder may be empty,
//! in which case no shadow is ever drawn for it.
//!
//! Two independent ladders exist per container: *spot* (directional, offset
//! toward the simulated light) and *ambient* (soft, centered).
//!
//! The core never loads or decodes bitmaps. It addresses ladders through
//! opaque [`LadderId`]s and receives [`PatchAsset`]s — an opaque
//! [`PatchHandle`] plus the asset's intrinsic content padding — from the
//! host's [`AssetSource`].

use core::fmt;

use kurbo::Insets;

/// Identifies an asset ladder in the host's resource system.
///
/// Hosts assign ladder IDs; core passes them through without interpreting
/// the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LadderId(pub u32);

impl fmt::Debug for LadderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LadderId({})", self.0)
    }
}

/// Identifies one loaded stretchable bitmap asset.
///
/// Handles are non-owning references into the host's resource cache. Core
/// never touches pixel data through them; it only attaches per-instance
/// draw parameters (bounds, alpha) in its own wrappers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PatchHandle(pub u32);

impl fmt::Debug for PatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatchHandle({})", self.0)
    }
}

/// A resolved ladder asset: the bitmap handle and its intrinsic padding.
///
/// The padding is the asset's built-in content inset — the distance the
/// shadow artwork bleeds beyond the edges of the element it is drawn under.
/// Draw bounds are the child rectangle outset by exactly this padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchAsset {
    /// Opaque handle to the bitmap in the host's resource cache.
    pub handle: PatchHandle,
    /// Intrinsic content padding of the asset.
    pub padding: Insets,
}

/// Resolves ladder assets on behalf of the core.
///
/// Implemented by the embedding toolkit over its resource system. Both
/// methods are infallible: an unknown ladder reports length 0 and
/// an unresolvable index loads as `None`, which the core treats as "no
/// asset for this layer", never as an error.
pub trait AssetSource {
    /// Returns the number of levels in the given ladder (0 if unknown).
    fn ladder_len(&self, ladder: LadderId) -> usize;

    /// Loads the asset at `index` in `ladder`, or `None` if the index is
    /// out of range or the asset cannot be resolved.
    fn load_patch(&mut self, ladder: LadderId, index: usize) -> Option<PatchAsset>;
}

/// Returns the maximum level index for a ladder of the given length.
///
/// An empty ladder still reports 0 so clamping always has a target; the
/// asset load for index 0 then resolves to nothing.
#[inline]
#[must_use]
pub const fn max_level(ladder_len: usize) -> usize {
    ladder_len.saturating_sub(1)
}
