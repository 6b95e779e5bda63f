// SPDX-License-Identifier: MPL-2.0
//! Flash banners that dismiss themselves.
//!
//! Banners present when the page becomes ready fade out after a fixed delay
//! and are removed shortly after. Each banner runs on its own schedule; a
//! banner removed early simply has nothing left to fade.
//!
//! # Components
//!
//! - [`banner`] - `FlashMessage` and its dismissal schedule
//! - [`board`] - `Board` holding the banners and running the timers
//! - [`timing`] - `FlashTiming` fade and removal delays
//! - [`view`] - Banner rendering
//!
//! # Limitation
//!
//! The page-ready scan is one-shot. Code that adds a banner afterwards must
//! call [`Board::schedule`] itself if the banner should go away.

pub mod banner;
pub mod board;
pub mod timing;
mod view;

pub use banner::{Dismissal, FlashId, FlashMessage};
pub use board::Board;
pub use timing::FlashTiming;
pub use view::view;
