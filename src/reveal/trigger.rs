// SPDX-License-Identifier: MPL-2.0
//! Fire-once viewport-intersection conditions.

/// Identifies one animatable target (an element or a sibling group) within a
/// page region. Ids are static strings so they stay `Copy` and cheap to hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub &'static str);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Fraction of the viewport height an element's top must cross before its
/// reveal fires. Matches the page's "top 80%" convention.
pub const DEFAULT_THRESHOLD: f32 = 0.8;

/// Binds a target to a scroll-position condition.
///
/// The condition is satisfied once the target's top edge (in page
/// coordinates) rises above `threshold` of the viewport height, i.e. when
/// `scroll_offset + viewport_height * threshold >= top`. Targets already
/// above the fold are satisfied immediately on the first evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub target: TargetId,
    /// The target's top edge in page space (pixels from the top of the
    /// scrollable content).
    pub top: f32,
    pub threshold: f32,
}

impl Trigger {
    #[must_use]
    pub const fn new(target: TargetId, top: f32) -> Self {
        Self {
            target,
            top,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Evaluates the intersection condition against the current scroll
    /// position and viewport height.
    #[must_use]
    pub fn is_satisfied(&self, scroll_offset: f32, viewport_height: f32) -> bool {
        scroll_offset + viewport_height * self.threshold >= self.top
    }
}
