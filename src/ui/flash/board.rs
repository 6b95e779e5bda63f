// SPDX-License-Identifier: MPL-2.0
//! Flash banner lifecycle management.
//!
//! The `Board` holds the banners on the page in insertion order. When the
//! page becomes ready it schedules every banner present at that moment; each
//! one then fades and is removed on its own timer. Banners added later are
//! left alone unless the code that adds them calls [`Board::schedule`].

use super::banner::{Dismissal, FlashId, FlashMessage};
use super::timing::FlashTiming;
use crate::ui::message_box::Kind;
use std::time::Instant;

/// The banners on the page.
#[derive(Debug, Default)]
pub struct Board {
    banners: Vec<FlashMessage>,
    timing: FlashTiming,
    ready: bool,
}

impl Board {
    /// Creates an empty board using `timing` for every dismissal.
    #[must_use]
    pub fn new(timing: FlashTiming) -> Self {
        Self {
            banners: Vec::new(),
            timing,
            ready: false,
        }
    }

    /// Adds a banner at the end of the board without scheduling it.
    pub fn render(&mut self, kind: Kind, text: impl Into<String>) -> FlashId {
        let banner = FlashMessage::new(kind, text);
        let id = banner.id();
        self.banners.push(banner);
        id
    }

    /// Schedules every banner currently on the board. Runs once; later calls
    /// do nothing and return 0.
    ///
    /// Returns the number of banners scheduled.
    pub fn page_ready(&mut self, now: Instant) -> usize {
        if self.ready {
            return 0;
        }
        self.ready = true;

        let dismissal = self.dismissal_from(now);
        let scheduled = self
            .banners
            .iter_mut()
            .map(|banner| banner.schedule(dismissal))
            .filter(|&scheduled| scheduled)
            .count();
        log::debug!("Page ready: scheduled {scheduled} flash banner(s) for dismissal");
        scheduled
    }

    /// Schedules one banner, typically one added after the page became ready.
    ///
    /// Returns `false` if the banner is gone or already scheduled.
    pub fn schedule(&mut self, id: FlashId, now: Instant) -> bool {
        let dismissal = self.dismissal_from(now);
        self.banners
            .iter_mut()
            .find(|banner| banner.id() == id)
            .is_some_and(|banner| banner.schedule(dismissal))
    }

    /// Removes every banner whose removal time has passed.
    ///
    /// Returns the number of banners removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.banners.len();
        self.banners.retain(|banner| !banner.is_expired(now));
        before - self.banners.len()
    }

    /// Removes a banner immediately. Removing a missing banner is a no-op.
    pub fn remove(&mut self, id: FlashId) -> bool {
        match self.banners.iter().position(|banner| banner.id() == id) {
            Some(pos) => {
                self.banners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns the banners in document order.
    pub fn iter(&self) -> impl Iterator<Item = &FlashMessage> {
        self.banners.iter()
    }

    #[must_use]
    pub fn get(&self, id: FlashId) -> Option<&FlashMessage> {
        self.banners.iter().find(|banner| banner.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// Whether the one-shot page-ready scan has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether any scheduled banner is still waiting to be removed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.banners.iter().any(|banner| banner.dismissal().is_some())
    }

    #[must_use]
    pub fn timing(&self) -> FlashTiming {
        self.timing
    }

    fn dismissal_from(&self, now: Instant) -> Dismissal {
        Dismissal::starting_at(now, self.timing.fade_delay(), self.timing.removal_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn board() -> Board {
        Board::new(FlashTiming::default())
    }

    const FADE: Duration = Duration::from_millis(3000);
    const REMOVE: Duration = Duration::from_millis(300);

    #[test]
    fn new_board_is_empty() {
        let board = board();
        assert!(board.is_empty());
        assert!(!board.is_ready());
        assert!(!board.has_pending());
    }

    #[test]
    fn page_ready_with_no_banners_is_fine() {
        let mut board = board();
        assert_eq!(board.page_ready(Instant::now()), 0);
        assert!(board.is_ready());
    }

    #[test]
    fn page_ready_schedules_all_present_banners() {
        let mut board = board();
        for text in ["Logged in", "Drawer opened", "Printer offline"] {
            board.render(Kind::Info, text);
        }
        let now = Instant::now();

        assert_eq!(board.page_ready(now), 3);
        assert!(board.has_pending());

        assert!(board.iter().all(|b| !b.is_fading(now + FADE - Duration::from_millis(1))));
        assert!(board.iter().all(|b| b.is_fading(now + FADE)));
        assert_eq!(board.tick(now + FADE), 0);
        assert_eq!(board.tick(now + FADE + REMOVE), 3);
        assert!(board.is_empty());
    }

    #[test]
    fn page_ready_runs_once() {
        let mut board = board();
        board.render(Kind::Success, "Saved");
        let now = Instant::now();
        assert_eq!(board.page_ready(now), 1);

        board.render(Kind::Success, "Saved again");
        assert_eq!(board.page_ready(now), 0);
    }

    #[test]
    fn banners_added_after_ready_are_untouched() {
        let mut board = board();
        board.render(Kind::Success, "Logged in");
        let now = Instant::now();
        board.page_ready(now);

        let late = board.render(Kind::Warning, "Stock low");
        board.tick(now + FADE + REMOVE + Duration::from_secs(60));

        assert_eq!(board.len(), 1);
        assert_eq!(board.get(late).map(FlashMessage::text), Some("Stock low"));
        assert!(!board.has_pending());
    }

    #[test]
    fn explicit_schedule_dismisses_late_banner() {
        let mut board = board();
        board.page_ready(Instant::now());

        let later = Instant::now() + Duration::from_secs(10);
        let id = board.render(Kind::Info, "Item added");
        assert!(board.schedule(id, later));
        assert!(!board.schedule(id, later + FADE), "first schedule wins");

        assert_eq!(board.tick(later + FADE + REMOVE), 1);
        assert!(board.is_empty());
    }

    #[test]
    fn removed_banner_timer_is_harmless() {
        let mut board = board();
        let gone = board.render(Kind::Info, "One");
        board.render(Kind::Info, "Two");
        let now = Instant::now();
        board.page_ready(now);

        assert!(board.remove(gone));
        assert!(!board.remove(gone));
        assert!(!board.schedule(gone, now));

        assert_eq!(board.tick(now + FADE + REMOVE), 1);
        assert!(board.is_empty());
    }

    #[test]
    fn banners_keep_document_order() {
        let mut board = board();
        board.render(Kind::Success, "first");
        board.render(Kind::Error, "second");
        let texts: Vec<_> = board.iter().map(FlashMessage::text).collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
