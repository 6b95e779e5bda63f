// SPDX-License-Identifier: MPL-2.0
//! Flash banner dismissal driven through the board with explicit clocks.

use lastkings_ui::config::{Config, FlashConfig};
use lastkings_ui::ui::context::UiContext;
use lastkings_ui::ui::flash::{Board, FlashTiming};
use lastkings_ui::ui::message_box::Kind;
use std::time::{Duration, Instant};

const FADE: Duration = Duration::from_millis(3000);
const REMOVAL: Duration = Duration::from_millis(300);

fn board_with(count: usize) -> Board {
    let mut board = Board::new(FlashTiming::default());
    for i in 0..count {
        board.render(Kind::Info, format!("Banner {i}"));
    }
    board
}

#[test]
fn every_pre_rendered_banner_fades_then_disappears() {
    for count in [0, 1, 2, 7] {
        let mut board = board_with(count);
        let start = Instant::now();
        assert_eq!(board.page_ready(start), count);

        let fading = start + FADE;
        assert!(board.iter().all(|b| b.is_fading(fading)));
        assert!(board.iter().all(|b| b.opacity(fading) == 1.0));
        assert_eq!(board.tick(fading), 0);

        let gone = fading + REMOVAL;
        assert_eq!(board.tick(gone), count);
        assert!(board.is_empty());
        assert!(!board.has_pending());
    }
}

#[test]
fn banners_added_after_page_ready_are_left_alone() {
    let mut board = board_with(2);
    let start = Instant::now();
    board.page_ready(start);
    let late = board.render(Kind::Success, "Drawer opened");

    assert_eq!(board.page_ready(start), 0);
    assert_eq!(board.tick(start + FADE + REMOVAL), 2);

    let remaining: Vec<_> = board.iter().map(|b| b.id()).collect();
    assert_eq!(remaining, vec![late]);
    assert!(board.get(late).is_some_and(|b| b.dismissal().is_none()));
}

#[test]
fn explicit_schedule_dismisses_a_late_banner() {
    let mut board = board_with(0);
    let start = Instant::now();
    board.page_ready(start);

    let later = start + Duration::from_secs(10);
    let id = board.render(Kind::Warning, "Low paper");
    assert!(board.schedule(id, later));
    assert!(board.has_pending());

    assert_eq!(board.tick(later + FADE), 0);
    assert_eq!(board.tick(later + FADE + REMOVAL), 1);
}

#[test]
fn manually_removed_banner_is_not_counted_again() {
    let mut board = board_with(3);
    let start = Instant::now();
    board.page_ready(start);

    let first = board.iter().map(|b| b.id()).next();
    assert!(first.is_some_and(|id| board.remove(id)));
    assert_eq!(board.tick(start + FADE + REMOVAL), 2);
}

#[test]
fn configured_timing_reaches_the_context_board() {
    let config = Config {
        flash: FlashConfig {
            fade_delay_ms: Some(1000),
            removal_delay_ms: Some(0),
        },
        ..Config::default()
    };
    let mut ui: UiContext<()> = UiContext::new(&config);
    ui.flash.render(Kind::Error, "Card declined");

    let start = Instant::now();
    ui.flash.page_ready(start);

    let at_fade = start + Duration::from_millis(1000);
    assert!(ui.flash.iter().all(|b| b.opacity(at_fade) == 0.0));
    assert_eq!(ui.flash.tick(at_fade), 1);
}
