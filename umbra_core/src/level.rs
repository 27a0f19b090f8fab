// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shadow level selection and cross-fade weights.
//!
//! A ladder holds assets at discrete elevation levels, but elevation itself
//! is continuous. The selector maps an elevation (in device pixels) to the
//! two adjacent ladder levels bracketing it plus a fade fraction, so the
//! renderer can cross-fade between the bracketing assets: as elevation
//! rises past an integer level boundary, the next asset fades in while the
//! current one fades out.
//!
//! All math here is pure; clamping makes every input valid. Negative
//! elevations select level 0, and elevations beyond the top of the ladder
//! collapse both levels onto the last index (full opacity, no fade).

use crate::density::Density;

/// Full opacity for a single-layer selection.
pub const OPAQUE: u8 = 255;

/// The two ladder levels bracketing a continuous elevation, plus the fade
/// fraction between them.
///
/// Produced by [`select`]. `lower <= upper <= max_level` and
/// `upper - lower <= 1` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSelection {
    /// Ladder index of the primary (fading-out) layer.
    pub lower: usize,
    /// Ladder index of the secondary (fading-in) layer.
    pub upper: usize,
    /// Fractional distance from `lower` toward the next level, in `[0, 1)`.
    pub fraction: f32,
}

impl LevelSelection {
    /// Returns the ladder index of the primary layer.
    #[inline]
    #[must_use]
    pub const fn primary(&self) -> usize {
        self.lower
    }

    /// Returns the ladder index of the secondary layer, or `None` when the
    /// selection needs only one layer.
    ///
    /// The secondary layer is omitted when both levels clamp to the same
    /// index (ladder boundary) and when its cross-fade alpha rounds to
    /// zero — a layer drawn fully transparent is not a layer.
    #[must_use]
    pub fn secondary(&self) -> Option<usize> {
        if self.upper == self.lower || self.secondary_alpha() == 0 {
            None
        } else {
            Some(self.upper)
        }
    }

    /// Returns `(primary_alpha, secondary_alpha)`.
    ///
    /// When both layers exist the alphas sum to 255. When only the primary
    /// exists it is forced fully opaque.
    #[must_use]
    pub fn alphas(&self) -> (u8, u8) {
        match self.secondary() {
            Some(_) => {
                let secondary = self.secondary_alpha();
                (OPAQUE - secondary, secondary)
            }
            None => (OPAQUE, 0),
        }
    }

    /// Cross-fade alpha of the secondary layer, rounded to the nearest
    /// integer in `[0, 255]`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fraction is in [0, 1) so the scaled value fits in i32"
    )]
    #[must_use]
    fn secondary_alpha(&self) -> u8 {
        let rounded = (self.fraction * 255.0 + 0.5) as i32;
        rounded.clamp(0, 255) as u8
    }
}

/// Selects the ladder levels for an elevation of `z_px` device pixels on a
/// ladder whose highest index is `max_level`.
///
/// Negative elevations are clamped to zero before selection.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float level is non-negative; the integer part is all that is kept"
)]
#[must_use]
pub fn select(z_px: f32, density: Density, max_level: usize) -> LevelSelection {
    let float_level = (z_px * density.inv()).max(0.0);
    let int_level = float_level as usize;
    LevelSelection {
        lower: int_level.min(max_level),
        upper: int_level.saturating_add(1).min(max_level),
        fraction: float_level - int_level as f32,
    }
}
