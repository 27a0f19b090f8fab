// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated light source and spot-shadow displacement.
//!
//! Compat mode models a single overhead light at the horizontal center of
//! the visible display frame, at the top edge (y = 0). The spot shadow
//! translates away from the light as the child moves off-center, with a
//! square-root falloff so the offset grows sub-linearly with lateral
//! displacement, scaled by the combined lift (`translation_z + elevation`).
//! The child's own transient translation is added on top so the shadow
//! follows interaction feedback, and the result is rounded to whole device
//! pixels.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::density::Density;

/// Horizontal falloff coefficient for the spot-shadow displacement.
pub const SPOT_X_COEFF: f64 = 0.0002;

/// Vertical falloff coefficient for the spot-shadow displacement.
pub const SPOT_Y_COEFF: f64 = 0.002;

/// The simulated overhead light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    /// Light position in window/screen coordinates.
    pub position: Point,
}

impl LightSource {
    /// Places the light at the horizontal center and top edge of a visible
    /// display frame of the given width.
    #[must_use]
    pub fn over_visible_frame(width: f64) -> Self {
        Self {
            position: Point::new(width / 2.0, 0.0),
        }
    }

    /// Computes the spot-shadow translation for a child whose screen center
    /// is `child_center`, carrying transient translation `transient`, lifted
    /// by `z_px` device pixels.
    ///
    /// A child centered exactly under the light with zero transient
    /// translation yields a zero offset. Displacement *toward* the light on
    /// an axis contributes nothing on that axis (the falloff is one-sided).
    #[must_use]
    pub fn spot_offset(
        &self,
        child_center: Point,
        transient: Vec2,
        z_px: f32,
        density: Density,
    ) -> Vec2 {
        let z = f64::from(z_px);
        let inv = f64::from(density.inv());
        let dx = sqrt_or_zero((child_center.x - self.position.x) * inv * SPOT_X_COEFF) * z;
        let dy = sqrt_or_zero((child_center.y - self.position.y) * inv * SPOT_Y_COEFF) * z;
        Vec2::new(round_px(dx + transient.x), round_px(dy + transient.y))
    }
}

/// Square root clamped at zero for negative inputs.
fn sqrt_or_zero(v: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.sqrt() }
}

/// Rounds to a whole device pixel: add half, truncate toward zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets are tiny relative to i64 range; truncation is the rounding mode"
)]
fn round_px(v: f64) -> f64 {
    (v + 0.5) as i64 as f64
}
