// SPDX-License-Identifier: MPL-2.0
//! Per-region trigger bookkeeping.
//!
//! Each page region owns one [`Registry`]. The registry holds the region's
//! pending triggers, evaluates them in registration order on every scroll
//! tick, and guarantees the fire-once invariant: a target that has fired is
//! permanently inert for the rest of the page's lifetime, even if it is
//! re-registered or scrolls back out of view.

use std::collections::HashSet;

use super::trigger::{TargetId, Trigger};

/// Trigger state for one page region, owned by that region's lifecycle.
#[derive(Debug, Default)]
pub struct Registry {
    pending: Vec<Trigger>,
    fired: HashSet<TargetId>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a trigger for a target.
    ///
    /// Idempotent per target: re-registering before the target has fired
    /// replaces the pending entry in place (keeping its original evaluation
    /// position); registering a target that has already fired does nothing,
    /// so layout changes after a reveal cannot re-arm it.
    pub fn register(&mut self, trigger: Trigger) {
        if self.fired.contains(&trigger.target) {
            return;
        }
        if let Some(existing) = self.pending.iter_mut().find(|t| t.target == trigger.target) {
            *existing = trigger;
        } else {
            self.pending.push(trigger);
        }
    }

    /// Evaluates every pending trigger against the current scroll position,
    /// in registration order, and returns the targets that fired this tick.
    ///
    /// Fired targets leave the pending set and are never evaluated again.
    /// Calling this on a torn-down (empty) registry is a no-op.
    pub fn evaluate(&mut self, scroll_offset: f32, viewport_height: f32) -> Vec<TargetId> {
        let mut fired_now = Vec::new();
        self.pending.retain(|trigger| {
            if trigger.is_satisfied(scroll_offset, viewport_height) {
                fired_now.push(trigger.target);
                false
            } else {
                true
            }
        });
        for target in &fired_now {
            self.fired.insert(*target);
        }
        fired_now
    }

    /// Synchronous teardown: drops every pending trigger so nothing can fire
    /// after the region unmounts. The fired set is kept, preserving the
    /// fire-once guarantee across a remount of the same region.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn has_fired(&self, target: TargetId) -> bool {
        self.fired.contains(&target)
    }
}
