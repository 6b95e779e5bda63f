// SPDX-License-Identifier: MPL-2.0
//! Core flash banner data structures.

use crate::ui::message_box::Kind;
use std::time::{Duration, Instant};

/// Unique identifier for a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashId(u64);

impl FlashId {
    /// Creates a new unique banner ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for FlashId {
    fn default() -> Self {
        Self::new()
    }
}

/// When a scheduled banner starts fading and when it goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    pub fade_at: Instant,
    pub remove_at: Instant,
}

impl Dismissal {
    #[must_use]
    pub fn starting_at(now: Instant, fade_delay: Duration, removal_delay: Duration) -> Self {
        let fade_at = now + fade_delay;
        Self {
            fade_at,
            remove_at: fade_at + removal_delay,
        }
    }
}

/// A notification banner on the page.
#[derive(Debug, Clone)]
pub struct FlashMessage {
    id: FlashId,
    kind: Kind,
    text: String,
    dismissal: Option<Dismissal>,
}

impl FlashMessage {
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            id: FlashId::new(),
            kind,
            text: text.into(),
            dismissal: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> FlashId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The dismissal schedule, if the banner has one.
    #[must_use]
    pub fn dismissal(&self) -> Option<Dismissal> {
        self.dismissal
    }

    /// Sets the schedule once; later calls keep the first schedule.
    pub(super) fn schedule(&mut self, dismissal: Dismissal) -> bool {
        if self.dismissal.is_some() {
            return false;
        }
        self.dismissal = Some(dismissal);
        true
    }

    /// Whether the fade has started at `now`.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.dismissal.is_some_and(|d| now >= d.fade_at)
    }

    /// Whether the banner is due for removal at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.dismissal.is_some_and(|d| now >= d.remove_at)
    }

    /// Visual opacity at `now`: 1.0 until the fade starts, then a linear ramp
    /// down to 0.0 at the removal time.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(dismissal) = self.dismissal else {
            return 1.0;
        };
        if now < dismissal.fade_at {
            return 1.0;
        }
        let span = dismissal.remove_at.duration_since(dismissal.fade_at);
        if span.is_zero() {
            return 0.0;
        }
        let elapsed = now.duration_since(dismissal.fade_at);
        (1.0 - elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
    }
}
