// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child geometry as captured on each layout pass.
//!
//! The host's layout system owns measurement and placement; the shadow core
//! only consumes the result. [`GeometrySnapshot`] is a plain value captured
//! fresh every time the host lays out or repositions the shadowed child —
//! nothing in it is retained across passes except as the container's
//! "most recent" copy.

use kurbo::{Point, Rect, Vec2};

/// The shadowed child's geometry at one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Child rectangle in container-local coordinates.
    pub child: Rect,
    /// Top-left corner of the child in window/screen coordinates.
    pub window_origin: Point,
    /// The child's transient translation (animation/interaction offset).
    pub translation: Vec2,
    /// Width of the visible display frame the window occupies.
    ///
    /// This is deliberately the *display* frame, not the container: the
    /// simulated light sits at the horizontal center of the visible frame
    /// so that all containers on screen share one light source.
    pub visible_frame_width: f64,
    /// Whether the child is currently visible.
    pub child_visible: bool,
}

impl GeometrySnapshot {
    /// Returns the child's center in window/screen coordinates.
    #[must_use]
    pub fn screen_center(&self) -> Point {
        Point::new(
            self.window_origin.x + self.child.width() / 2.0,
            self.window_origin.y + self.child.height() / 2.0,
        )
    }
}
