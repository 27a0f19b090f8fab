// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.
//!
//! The host's declarative resource system (style attributes, themes, …)
//! parses whatever it parses and hands the core one [`ShadowConfig`] at
//! construction. Nothing here is re-read afterwards; runtime changes go
//! through the container's setters.

use crate::ladder::LadderId;

/// Initial parameters for a shadow container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    /// Initial transient lift in device pixels.
    pub translation_z: f32,
    /// Initial resting elevation in device pixels.
    pub elevation: f32,
    /// Ladder of spot-shadow assets.
    pub spot_ladder: LadderId,
    /// Ladder of ambient-shadow assets.
    pub ambient_ladder: LadderId,
    /// Forces compat rendering even when the platform supports native
    /// shadows.
    pub force_compat_shadow: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            translation_z: 0.0,
            elevation: 0.0,
            spot_ladder: LadderId(0),
            ambient_ladder: LadderId(1),
            force_compat_shadow: false,
        }
    }
}
