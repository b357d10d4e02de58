// SPDX-License-Identifier: MPL-2.0
//! Interpolated visual states and easing curves.
//!
//! A [`Tween`] maps elapsed time onto a [`VisualState`] between a declared
//! *from* and *to* state, through an [`Easing`] curve. Durations are plain
//! seconds; nothing here reads a clock.

/// The visual properties a reveal animation interpolates.
///
/// Offsets are in logical pixels relative to the element's resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl VisualState {
    /// The resting state: fully opaque, unshifted, unscaled.
    pub const FINAL: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    /// A fully transparent state shifted down by `y` pixels.
    #[must_use]
    pub const fn hidden_below(y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x: 0.0,
            offset_y: y,
            scale: 1.0,
        }
    }

    /// A fully transparent state shifted sideways by `x` pixels.
    #[must_use]
    pub const fn hidden_beside(x: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x: x,
            offset_y: 0.0,
            scale: 1.0,
        }
    }

    /// Linear interpolation between two states.
    ///
    /// `t` is not clamped: easing curves with overshoot (see
    /// [`Easing::BackOut`]) intentionally pass values above 1.0 so scale and
    /// offset swing past their target before settling.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            // Opacity must stay displayable even when the curve overshoots.
            opacity: mix(self.opacity, other.opacity).clamp(0.0, 1.0),
            offset_x: mix(self.offset_x, other.offset_x),
            offset_y: mix(self.offset_y, other.offset_y),
            scale: mix(self.scale, other.scale),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::FINAL
    }
}

/// Easing curves used by the entrance animations.
///
/// The set mirrors what the page actually uses: decelerating power curves for
/// slides and fades, a symmetric power curve for the scroll-hint bobbing, and
/// an overshooting "back" curve for buttons popping in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Decelerating: `1 - (1 - t)^n`.
    PowerOut(u8),
    /// Symmetric acceleration/deceleration of degree `n`.
    PowerInOut(u8),
    /// Decelerating with overshoot; the parameter controls how far past the
    /// target the curve swings (1.7 matches the classic "back" feel).
    BackOut(f32),
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto eased progress.
    ///
    /// `BackOut` may return values above 1.0; all curves hit exactly 0 at
    /// `t = 0` and 1 at `t = 1`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(i32::from(n)),
            Easing::PowerInOut(n) => {
                let n = i32::from(n);
                if t < 0.5 {
                    2f32.powi(n - 1) * t.powi(n)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(n) / 2f32.powi(n)
                }
            }
            Easing::BackOut(s) => {
                let c3 = s + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + s * (t - 1.0).powi(2)
            }
        }
    }
}

/// A one-shot interpolation from one visual state to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    /// Duration in seconds. Zero-duration tweens sample straight to `to`.
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(from: VisualState, to: VisualState, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Samples the tween `elapsed` seconds after its start.
    ///
    /// Negative elapsed times return `from`; anything at or past the duration
    /// returns `to`.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> VisualState {
        if elapsed <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let t = self.easing.apply(elapsed / self.duration);
        self.from.lerp(&self.to, t)
    }

    /// Whether the tween has reached its final state.
    #[must_use]
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::PowerOut(3),
            Easing::PowerInOut(2),
            Easing::BackOut(1.7),
        ] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn power_out_decelerates() {
        let e = Easing::PowerOut(3);
        // Past half progress well before half time.
        assert!(e.apply(0.3) > 0.6);
        assert!(e.apply(0.5) > e.apply(0.3));
    }

    #[test]
    fn power_in_out_is_symmetric() {
        let e = Easing::PowerInOut(2);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-5);
        assert!((e.apply(0.25) - (1.0 - e.apply(0.75))).abs() < 1e-5);
    }

    #[test]
    fn back_out_overshoots() {
        let e = Easing::BackOut(1.7);
        let max = (0..100)
            .map(|i| e.apply(i as f32 / 100.0))
            .fold(0.0, f32::max);
        assert!(max > 1.0, "back.out should swing past 1.0, got {max}");
    }

    #[test]
    fn tween_clamps_at_both_ends() {
        let tween = Tween::new(
            VisualState::hidden_below(50.0),
            VisualState::FINAL,
            1.0,
            Easing::PowerOut(3),
        );
        assert_eq!(tween.sample(-1.0), tween.from);
        assert_eq!(tween.sample(0.0), tween.from);
        assert_eq!(tween.sample(1.0), tween.to);
        assert_eq!(tween.sample(42.0), tween.to);
    }

    #[test]
    fn tween_midpoint_is_between_states() {
        let tween = Tween::new(
            VisualState::hidden_below(50.0),
            VisualState::FINAL,
            1.0,
            Easing::Linear,
        );
        let mid = tween.sample(0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-5);
        assert!((mid.offset_y - 25.0).abs() < 1e-5);
    }

    #[test]
    fn zero_duration_tween_samples_to_final() {
        let tween = Tween::new(
            VisualState::hidden_below(30.0),
            VisualState::FINAL,
            0.0,
            Easing::PowerOut(3),
        );
        assert_eq!(tween.sample(0.001), tween.to);
        assert!(tween.is_finished(0.0));
    }

    #[test]
    fn overshoot_never_produces_invalid_opacity() {
        let tween = Tween::new(
            VisualState {
                opacity: 0.0,
                offset_x: 0.0,
                offset_y: 0.0,
                scale: 0.0,
            },
            VisualState::FINAL,
            1.0,
            Easing::BackOut(1.7),
        );
        for i in 0..=100 {
            let state = tween.sample(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&state.opacity));
        }
    }
}
