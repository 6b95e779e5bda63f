// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Flash**: Banner fade and removal delays
//! - **Message box**: Deferred focus of the first dialog button

// ==========================================================================
// Flash Defaults
// ==========================================================================

/// Delay between page-ready and the start of a banner's fade (in milliseconds).
pub const DEFAULT_FLASH_FADE_DELAY_MS: u64 = 3000;

/// Minimum fade delay (in milliseconds).
pub const MIN_FLASH_FADE_DELAY_MS: u64 = 500;

/// Maximum fade delay (in milliseconds).
pub const MAX_FLASH_FADE_DELAY_MS: u64 = 60_000;

/// Delay between the start of the fade and the banner's removal (in milliseconds).
pub const DEFAULT_FLASH_REMOVAL_DELAY_MS: u64 = 300;

/// Minimum removal delay (in milliseconds).
pub const MIN_FLASH_REMOVAL_DELAY_MS: u64 = 0;

/// Maximum removal delay (in milliseconds).
pub const MAX_FLASH_REMOVAL_DELAY_MS: u64 = 5_000;

/// Interval of the tick driving pending banner timers (in milliseconds).
pub const FLASH_TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Message Box Defaults
// ==========================================================================

/// Delay before the first dialog button receives focus (in milliseconds).
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 100;

/// Maximum focus delay (in milliseconds).
pub const MAX_FOCUS_DELAY_MS: u64 = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Flash validation
    assert!(MIN_FLASH_FADE_DELAY_MS > 0);
    assert!(MAX_FLASH_FADE_DELAY_MS >= MIN_FLASH_FADE_DELAY_MS);
    assert!(DEFAULT_FLASH_FADE_DELAY_MS >= MIN_FLASH_FADE_DELAY_MS);
    assert!(DEFAULT_FLASH_FADE_DELAY_MS <= MAX_FLASH_FADE_DELAY_MS);
    assert!(MAX_FLASH_REMOVAL_DELAY_MS >= MIN_FLASH_REMOVAL_DELAY_MS);
    assert!(DEFAULT_FLASH_REMOVAL_DELAY_MS <= MAX_FLASH_REMOVAL_DELAY_MS);
    assert!(FLASH_TICK_INTERVAL_MS < DEFAULT_FLASH_REMOVAL_DELAY_MS);

    // Focus validation
    assert!(DEFAULT_FOCUS_DELAY_MS <= MAX_FOCUS_DELAY_MS);
};
