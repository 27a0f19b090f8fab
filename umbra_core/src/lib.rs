// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-rendered drop-shadow rendering core for material-style surfaces.
//!
//! `umbra_core` selects, cross-fades and positions stretchable shadow
//! bitmaps around a child element so that platforms without a real-time
//! shadow primitive still render elevation convincingly. Where the platform
//! does have one, the same container drives it directly instead. The crate
//! is `no_std` compatible (with `alloc`) and free of platform types; the
//! embedding toolkit supplies assets, drawing, and scheduling through the
//! traits in [`host`] and [`ladder`].
//!
//! # Architecture
//!
//! The crate is organized around a container that turns elevation changes
//! and layout callbacks into incremental shadow updates:
//!
//! ```text
//!   setter / layout callback
//!       │
//!       ▼
//!   level::select() ──► ResolvedPair::resolve() ──► ShadowUpdate
//!                             │
//!        ┌────────────────────┘
//!        ▼
//!   light::spot_offset() + bounds refresh
//!        │
//!        ▼
//!   ShadowContainer::on_draw() ──► Canvas calls ──► DrawSummary
//! ```
//!
//! **[`container`]** — [`ShadowContainer`](container::ShadowContainer), the
//! per-element state machine. Setters, layout callbacks and the draw pass
//! each return a change summary describing what happened.
//!
//! **[`level`]** — Elevation-to-level selection: the bracketing ladder
//! levels and the cross-fade fraction between them.
//!
//! **[`sprite`]** — The two-slot resolution arena per ladder. Change
//! detection is explicit index diffing; failed loads are cached and not
//! retried.
//!
//! **[`light`]** — Spot-shadow displacement under a fixed overhead light,
//! with square-root falloff by distance from the light axis.
//!
//! **[`ladder`]** — Asset addressing: ladder and patch handles plus the
//! [`AssetSource`](ladder::AssetSource) trait hosts implement.
//!
//! **[`host`]** — The remaining host traits (canvas, native shadow
//! primitive, redraw scheduling, decorations) and the derived render mode.
//!
//! **[`geometry`]** — The per-layout geometry snapshot the host captures.
//!
//! **[`density`]** — Display density with a precomputed reciprocal.
//!
//! **[`config`]** — Construction-time configuration.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for update-cycle instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-slot
//!   snapshot events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod container;
pub mod density;
pub mod geometry;
pub mod host;
pub mod ladder;
pub mod level;
pub mod light;
pub mod sprite;
pub mod trace;
