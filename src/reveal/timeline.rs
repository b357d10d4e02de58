// SPDX-License-Identifier: MPL-2.0
//! Ordered animation timelines with relative start offsets.
//!
//! A [`Timeline`] is a declared sequence of steps. Each step starts relative
//! to the *scheduled end* of the previous step; a negative offset makes
//! reveals overlap. Absolute start times are computed once, deterministically,
//! so playback does not depend on any animation engine's own sequencing.
//!
//! The [`LoopTween`] covers the one animation on the page that never ends:
//! the scroll-hint bobbing, which alternates forward and reverse playback
//! until its region is torn down.

use std::time::Instant;

use super::trigger::TargetId;
use super::tween::{Easing, Tween, VisualState};

/// One entry in a timeline: a tween, an optional sibling group, and a start
/// offset in seconds relative to the previous step's scheduled end.
///
/// For the first step the offset is relative to the timeline origin, which
/// makes a positive value an initial delay.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub target: TargetId,
    pub tween: Tween,
    pub offset: f32,
    /// Number of sibling elements covered by this step. Each member starts
    /// `stagger` seconds after the previous one; all share the same tween.
    pub members: usize,
    pub stagger: f32,
}

impl Step {
    #[must_use]
    pub const fn single(target: TargetId, tween: Tween, offset: f32) -> Self {
        Self {
            target,
            tween,
            offset,
            members: 1,
            stagger: 0.0,
        }
    }

    #[must_use]
    pub const fn group(
        target: TargetId,
        tween: Tween,
        offset: f32,
        members: usize,
        stagger: f32,
    ) -> Self {
        Self {
            target,
            tween,
            offset,
            members,
            stagger,
        }
    }

    /// Total running time of the step including member staggers.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.tween.duration + self.stagger * self.members.saturating_sub(1) as f32
    }
}

/// An ordered sequence of steps with precomputed absolute start times.
#[derive(Debug, Clone)]
pub struct Timeline {
    steps: Vec<Step>,
    starts: Vec<f32>,
}

impl Timeline {
    /// Builds a timeline and resolves every step's absolute start time:
    /// `start[i] = end[i-1] + offset[i]`, clamped at zero so an aggressive
    /// negative offset cannot schedule a step before the origin. Declared
    /// order is preserved regardless of how the durations overlap.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        let mut starts = Vec::with_capacity(steps.len());
        let mut previous_end = 0.0f32;
        for step in &steps {
            let start = (previous_end + step.offset).max(0.0);
            previous_end = start + step.span();
            starts.push(start);
        }
        Self { steps, starts }
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Absolute start time of the step animating `target`, in seconds from
    /// the timeline origin.
    #[must_use]
    pub fn start_of(&self, target: TargetId) -> Option<f32> {
        self.index_of(target).map(|i| self.starts[i])
    }

    /// Time at which every step (including staggered members) has finished.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.steps
            .iter()
            .zip(&self.starts)
            .map(|(step, start)| start + step.span())
            .fold(0.0, f32::max)
    }

    fn index_of(&self, target: TargetId) -> Option<usize> {
        self.steps.iter().position(|s| s.target == target)
    }
}

/// A timeline bound to a wall-clock start instant.
#[derive(Debug, Clone)]
pub struct Playback {
    timeline: Timeline,
    started_at: Instant,
}

impl Playback {
    #[must_use]
    pub fn start(timeline: Timeline, now: Instant) -> Self {
        Self {
            timeline,
            started_at: now,
        }
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Samples the state of one member of a target's sibling group.
    ///
    /// Unknown targets return `None` so a caller whose element disappeared
    /// can skip it silently. Members past the declared count clamp to the
    /// last member's schedule.
    #[must_use]
    pub fn sample(&self, target: TargetId, member: usize, now: Instant) -> Option<VisualState> {
        let index = self.timeline.index_of(target)?;
        let step = &self.timeline.steps[index];
        let member = member.min(step.members.saturating_sub(1));
        let start = self.timeline.starts[index] + step.stagger * member as f32;
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        Some(step.tween.sample(elapsed - start))
    }

    /// Convenience for callers that want the resting state when the target
    /// is not part of this timeline.
    #[must_use]
    pub fn sample_or_final(&self, target: TargetId, member: usize, now: Instant) -> VisualState {
        self.sample(target, member, now)
            .unwrap_or(VisualState::FINAL)
    }

    /// Whether every step has reached its final state.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        elapsed >= self.timeline.total_duration()
    }
}

/// An infinite alternating (yoyo) tween. It has no terminal state: sampling
/// is defined for every future instant, and the only way to stop it is to
/// drop it when the owning region unmounts.
#[derive(Debug, Clone, Copy)]
pub struct LoopTween {
    pub from: VisualState,
    pub to: VisualState,
    /// One-way travel time in seconds; a full forward-and-back cycle takes
    /// twice this.
    pub period: f32,
    pub easing: Easing,
}

impl LoopTween {
    /// Samples the loop `elapsed` seconds after it started. Even cycles play
    /// forward, odd cycles play in reverse.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> VisualState {
        if self.period <= 0.0 {
            return self.to;
        }
        let cycles = (elapsed / self.period).max(0.0);
        let phase = cycles.fract();
        let forward = (cycles as u64) % 2 == 0;
        let t = self.easing.apply(if forward { phase } else { 1.0 - phase });
        self.from.lerp(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const A: TargetId = TargetId("a");
    const B: TargetId = TargetId("b");
    const C: TargetId = TargetId("c");

    fn fade(duration: f32) -> Tween {
        Tween::new(
            VisualState::hidden_below(30.0),
            VisualState::FINAL,
            duration,
            Easing::Linear,
        )
    }

    #[test]
    fn schedule_accumulates_from_previous_end() {
        // delay 0.2, then 1.0s; next overlaps by 0.5; then a 2-member group.
        let timeline = Timeline::new(vec![
            Step::single(A, fade(1.0), 0.2),
            Step::single(B, fade(0.8), -0.5),
            Step::group(C, fade(0.6), -0.3, 2, 0.1),
        ]);

        assert!((timeline.start_of(A).unwrap() - 0.2).abs() < 1e-5);
        // A ends at 1.2, minus 0.5 overlap.
        assert!((timeline.start_of(B).unwrap() - 0.7).abs() < 1e-5);
        // B ends at 1.5, minus 0.3.
        assert!((timeline.start_of(C).unwrap() - 1.2).abs() < 1e-5);
        // C's last member starts at 1.3 and runs 0.6.
        assert!((timeline.total_duration() - 1.9).abs() < 1e-5);
    }

    #[test]
    fn negative_offset_cannot_schedule_before_origin() {
        let timeline = Timeline::new(vec![Step::single(A, fade(1.0), -5.0)]);
        assert_eq!(timeline.start_of(A), Some(0.0));
    }

    #[test]
    fn declared_order_survives_overlap() {
        // The second step fully overlaps the first; order of `steps()` must
        // still be the declared one.
        let timeline = Timeline::new(vec![
            Step::single(A, fade(1.0), 0.0),
            Step::single(B, fade(0.1), -1.0),
        ]);
        let order: Vec<TargetId> = timeline.steps().iter().map(|s| s.target).collect();
        assert_eq!(order, vec![A, B]);
    }

    #[test]
    fn stagger_offsets_member_starts() {
        let timeline = Timeline::new(vec![Step::group(A, fade(1.0), 0.0, 3, 0.1)]);
        let start = Instant::now();
        let playback = Playback::start(timeline, start);

        // At t = 0.15 member 0 is 0.15 in, member 1 is 0.05 in, member 2 has
        // not started.
        let now = start + Duration::from_millis(150);
        let m0 = playback.sample(A, 0, now).unwrap();
        let m1 = playback.sample(A, 1, now).unwrap();
        let m2 = playback.sample(A, 2, now).unwrap();
        assert!(m0.opacity > m1.opacity);
        assert_eq!(m2.opacity, 0.0);
    }

    #[test]
    fn sample_before_start_is_from_state() {
        let timeline = Timeline::new(vec![Step::single(A, fade(1.0), 0.5)]);
        let start = Instant::now();
        let playback = Playback::start(timeline, start);
        let state = playback
            .sample(A, 0, start + Duration::from_millis(100))
            .unwrap();
        assert_eq!(state.opacity, 0.0);
        assert_eq!(state.offset_y, 30.0);
    }

    #[test]
    fn unknown_target_samples_to_none() {
        let timeline = Timeline::new(vec![Step::single(A, fade(1.0), 0.0)]);
        let playback = Playback::start(timeline, Instant::now());
        assert!(playback.sample(B, 0, Instant::now()).is_none());
        assert_eq!(
            playback.sample_or_final(B, 0, Instant::now()),
            VisualState::FINAL
        );
    }

    #[test]
    fn playback_finishes_after_total_duration() {
        let timeline = Timeline::new(vec![
            Step::single(A, fade(1.0), 0.0),
            Step::single(B, fade(0.5), -0.2),
        ]);
        let start = Instant::now();
        let playback = Playback::start(timeline, start);
        assert!(!playback.is_finished(start + Duration::from_millis(500)));
        assert!(playback.is_finished(start + Duration::from_millis(1400)));
    }

    #[test]
    fn loop_tween_alternates_and_never_finishes() {
        let bob = LoopTween {
            from: VisualState::FINAL,
            to: VisualState {
                offset_y: 10.0,
                ..VisualState::FINAL
            },
            period: 1.5,
            easing: Easing::Linear,
        };

        // Forward half-way through the first cycle.
        assert!((bob.sample(0.75).offset_y - 5.0).abs() < 1e-4);
        // Fully extended at the period boundary, back at rest after two.
        assert!((bob.sample(1.5).offset_y - 10.0).abs() < 1e-3);
        assert!(bob.sample(3.0).offset_y.abs() < 1e-3);
        // Still alternating far in the future.
        let late = bob.sample(1000.5 * 3.0 + 0.75);
        assert!(late.offset_y > 0.0 && late.offset_y < 10.0);
    }

    #[test]
    fn loop_tween_is_symmetric_around_half_cycle() {
        let bob = LoopTween {
            from: VisualState::FINAL,
            to: VisualState {
                offset_y: 10.0,
                ..VisualState::FINAL
            },
            period: 1.5,
            easing: Easing::PowerInOut(2),
        };
        // t and 2*period - t land on the same displacement.
        let a = bob.sample(0.4).offset_y;
        let b = bob.sample(3.0 - 0.4).offset_y;
        assert!((a - b).abs() < 1e-3);
    }
}
