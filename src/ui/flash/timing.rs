// SPDX-License-Identifier: MPL-2.0
//! Fade and removal delays for flash banners.

use crate::config::{
    FlashConfig, DEFAULT_FLASH_FADE_DELAY_MS, DEFAULT_FLASH_REMOVAL_DELAY_MS,
    MAX_FLASH_FADE_DELAY_MS, MAX_FLASH_REMOVAL_DELAY_MS, MIN_FLASH_FADE_DELAY_MS,
    MIN_FLASH_REMOVAL_DELAY_MS,
};
use std::time::Duration;

/// Delays applied to every scheduled banner.
///
/// Values are clamped to the supported ranges on construction.
///
/// # Example
///
/// ```
/// use lastkings_ui::ui::flash::FlashTiming;
/// use std::time::Duration;
///
/// let timing = FlashTiming::new(5_000, 300);
/// assert_eq!(timing.fade_delay(), Duration::from_secs(5));
///
/// // Values outside range are clamped
/// let too_long = FlashTiming::new(600_000, 300);
/// assert_eq!(too_long.fade_delay(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTiming {
    fade_delay_ms: u64,
    removal_delay_ms: u64,
}

impl FlashTiming {
    #[must_use]
    pub fn new(fade_delay_ms: u64, removal_delay_ms: u64) -> Self {
        Self {
            fade_delay_ms: fade_delay_ms.clamp(MIN_FLASH_FADE_DELAY_MS, MAX_FLASH_FADE_DELAY_MS),
            removal_delay_ms: removal_delay_ms
                .clamp(MIN_FLASH_REMOVAL_DELAY_MS, MAX_FLASH_REMOVAL_DELAY_MS),
        }
    }

    /// Builds the timing from the `[flash]` config section, filling gaps
    /// with defaults.
    #[must_use]
    pub fn from_config(config: &FlashConfig) -> Self {
        Self::new(
            config.fade_delay_ms.unwrap_or(DEFAULT_FLASH_FADE_DELAY_MS),
            config
                .removal_delay_ms
                .unwrap_or(DEFAULT_FLASH_REMOVAL_DELAY_MS),
        )
    }

    /// Time from scheduling until the fade starts.
    #[must_use]
    pub fn fade_delay(self) -> Duration {
        Duration::from_millis(self.fade_delay_ms)
    }

    /// Time from the start of the fade until removal.
    #[must_use]
    pub fn removal_delay(self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }
}

impl Default for FlashTiming {
    fn default() -> Self {
        Self {
            fade_delay_ms: DEFAULT_FLASH_FADE_DELAY_MS,
            removal_delay_ms: DEFAULT_FLASH_REMOVAL_DELAY_MS,
        }
    }
}
