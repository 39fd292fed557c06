//! Reveal-on-scroll staggering and the one-way visibility latch.

use crate::constants::{STAGGER_PROJECT_SECS, STAGGER_SKILL_SECS, STAGGER_TIMELINE_SECS};

/// Groups of elements that cascade in with their own stagger step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealGroup {
    Timeline,
    ProjectCard,
    SkillCategory,
}

impl RevealGroup {
    pub const ALL: [Self; 3] = [Self::Timeline, Self::ProjectCard, Self::SkillCategory];

    /// Built-in stagger step in seconds.
    #[must_use]
    pub const fn step_secs(self) -> f64 {
        match self {
            Self::Timeline => STAGGER_TIMELINE_SECS,
            Self::ProjectCard => STAGGER_PROJECT_SECS,
            Self::SkillCategory => STAGGER_SKILL_SECS,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::ProjectCard => "project-card",
            Self::SkillCategory => "skill-category",
        }
    }
}

/// Delay for the element at `index` within `group`, using the built-in step.
#[must_use]
pub fn stagger_delay(group: RevealGroup, index: usize) -> f64 {
    stagger_delay_with(group.step_secs(), index)
}

/// Delay for the element at `index` with an explicit step.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delay_with(step_secs: f64, index: usize) -> f64 {
    step_secs * index as f64
}

/// Render a delay as a CSS time value, rounded to the millisecond.
#[must_use]
pub fn format_delay(secs: f64) -> String {
    let millis = (secs * 1_000.0).round() / 1_000.0;
    format!("{millis}s")
}

/// What the web layer should do with one reveal observer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing.
    Reveal,
    /// Already visible (e.g. forced by reduced motion); stop observing only.
    Release,
    Ignore,
}

impl RevealAction {
    #[must_use]
    pub const fn unobserve(self) -> bool {
        matches!(self, Self::Reveal | Self::Release)
    }
}

/// Tracks which observed elements are still waiting to be revealed.
///
/// Elements are addressed by their position in the observed list. Only the
/// first qualifying entry for an element counts; later entries for the same
/// element (a second entry in one batch, or a late one before `unobserve`
/// takes effect) are ignored. Once nothing remains the observer can be
/// disconnected.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    pending: Vec<bool>,
    remaining: usize,
    revealed: usize,
}

impl RevealLatch {
    #[must_use]
    pub fn new(observed: usize) -> Self {
        Self {
            pending: vec![true; observed],
            remaining: observed,
            revealed: 0,
        }
    }

    /// Feed one observer entry for the element at `index`.
    pub fn on_intersection(
        &mut self,
        index: usize,
        already_visible: bool,
        is_intersecting: bool,
    ) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        let Some(slot) = self.pending.get_mut(index).filter(|pending| **pending) else {
            return RevealAction::Ignore;
        };
        *slot = false;
        self.remaining -= 1;
        if already_visible {
            RevealAction::Release
        } else {
            self.revealed += 1;
            RevealAction::Reveal
        }
    }

    #[must_use]
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Elements this latch turned visible (excludes ones already visible).
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
