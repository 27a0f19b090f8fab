// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for embedding toolkits.
//!
//! Umbra splits platform-specific work across a small set of traits that the
//! embedding UI toolkit implements. Each piece covers one responsibility:
//!
//! - **[`AssetSource`]** — resolves ladder assets (lives in
//!   [`ladder`](crate::ladder), re-exported from the crate root).
//!
//! - **[`Canvas`]** — receives the draw pass. Stretching the nine-patch
//!   bitmap to the slot bounds and applying its alpha is the host drawing
//!   primitive's job; the core only issues ordered draw calls and brackets
//!   the spot layers in a save/translate/restore.
//!
//! - **[`NativeShadow`]** — the platform's real-time shadow primitive,
//!   applied to the shadowed child when native mode is active.
//!
//! - **[`RedrawScheduler`]** — defers a repaint to the next
//!   animation-synchronized frame. Coalescing multiple requests into one
//!   outstanding repaint is the host's concern, not the core's.
//!
//! - **[`HostDecorations`]** — reports whether the container carries its own
//!   background/foreground decoration, which keeps the draw pass alive even
//!   when every shadow layer resolved to nothing.
//!
//! [`ShadowHost`] bundles everything except [`Canvas`] (which only the draw
//! pass needs) so container operations take a single host parameter. It is
//! blanket-implemented; a mock host for tests implements the four component
//! traits and gets `ShadowHost` for free.
//!
//! [`AssetSource`]: crate::ladder::AssetSource

use kurbo::Vec2;

use crate::ladder::AssetSource;
use crate::sprite::SpriteSlot;

/// How the container renders its shadow.
///
/// Derived, never stored independently: always a pure function of the
/// platform capability and the force-compat override — see [`render_mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Pre-rendered stretchable bitmap pair per ladder, drawn by the core.
    Compat,
    /// Platform shadow primitive, driven through [`NativeShadow`].
    Native,
}

/// Derives the render mode from the platform capability and override flag.
///
/// Without native support compat is the only option; with it, the override
/// still forces compat when set.
#[inline]
#[must_use]
pub const fn render_mode(native_supported: bool, force_compat: bool) -> RenderMode {
    if !native_supported || force_compat {
        RenderMode::Compat
    } else {
        RenderMode::Native
    }
}

/// Receives the compat-mode draw pass.
///
/// Calls arrive in back-to-front order. `save`/`restore` bracket only the
/// translated spot layers; ambient layers draw in untranslated container
/// coordinates.
pub trait Canvas {
    /// Saves the current transform.
    fn save(&mut self);

    /// Translates subsequent draws by `offset` device pixels.
    fn translate(&mut self, offset: Vec2);

    /// Restores the transform saved by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Draws one shadow layer: the slot's asset stretched to `slot.bounds`
    /// at `slot.alpha`.
    fn draw_patch(&mut self, slot: &SpriteSlot);
}

/// The platform's native shadow-casting primitive, targeting the shadowed
/// child element.
pub trait NativeShadow {
    /// Sets the child's transient lift.
    fn set_native_translation_z(&mut self, translation_z: f32);

    /// Sets the child's resting elevation.
    fn set_native_elevation(&mut self, elevation: f32);
}

/// Schedules a repaint on the next animation-synchronized frame.
pub trait RedrawScheduler {
    /// Requests one repaint. Safe to call redundantly; the host coalesces.
    fn request_redraw(&mut self);
}

/// Container decorations owned by the host.
///
/// Both default to `false` for hosts without decoration support.
pub trait HostDecorations {
    /// Whether the container has a background decoration.
    fn has_background(&self) -> bool {
        false
    }

    /// Whether the container has a foreground decoration.
    fn has_foreground(&self) -> bool {
        false
    }
}

/// Everything a container operation may need from its host, short of the
/// draw-pass [`Canvas`].
pub trait ShadowHost: AssetSource + NativeShadow + RedrawScheduler + HostDecorations {}

impl<T> ShadowHost for T where
    T: AssetSource + NativeShadow + RedrawScheduler + HostDecorations + ?Sized
{
}
