// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display density scale.
//!
//! Shadow assets in a ladder are authored one per density-independent
//! elevation step, so the level selector divides device-pixel elevations by
//! the display density. [`Density`] caches the reciprocal once so every
//! recompute pays a multiply instead of a divide, and guarantees the scale
//! is strictly positive.

use core::fmt;

/// Smallest accepted density scale. Anything at or below zero is clamped
/// here rather than rejected.
const MIN_SCALE: f32 = 1.0e-3;

/// A display density scale factor with its cached reciprocal.
#[derive(Clone, Copy, PartialEq)]
pub struct Density {
    scale: f32,
    inv: f32,
}

impl Density {
    /// A 1:1 density (device pixels equal density-independent pixels).
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        inv: 1.0,
    };

    /// Creates a density from a scale factor, clamping non-positive or
    /// non-finite inputs to a small positive minimum.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > MIN_SCALE {
            scale
        } else {
            MIN_SCALE
        };
        Self {
            scale,
            inv: 1.0 / scale,
        }
    }

    /// Returns the scale factor (device pixels per density-independent pixel).
    #[inline]
    #[must_use]
    pub const fn scale(self) -> f32 {
        self.scale
    }

    /// Returns the cached reciprocal of the scale factor.
    #[inline]
    #[must_use]
    pub const fn inv(self) -> f32 {
        self.inv
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Density({})", self.scale)
    }
}
