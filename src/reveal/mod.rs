// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal animation core.
//!
//! This module decouples "when is this element relevant" (scroll position)
//! from "how does it animate" (tweens and timelines). It is deliberately free
//! of any Iced types so the scheduling logic can be tested without a real
//! viewport:
//!
//! - [`tween`] - Interpolated visual states, easing curves, and single tweens
//! - [`timeline`] - Ordered sequences with relative start offsets, sibling
//!   staggers, and the infinite yoyo loop used for the scroll hint
//! - [`trigger`] - Fire-once viewport-intersection conditions
//! - [`registry`] - Per-region trigger bookkeeping with deterministic teardown
//!
//! All sampling is driven by an explicit clock (`Instant` or elapsed seconds)
//! passed in by the caller, never by an internal timer.

pub mod registry;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use registry::Registry;
pub use timeline::{LoopTween, Playback, Step, Timeline};
pub use trigger::{TargetId, Trigger};
pub use tween::{Easing, Tween, VisualState};
