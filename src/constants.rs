//! Decision thresholds and scoring weights.
//!
//! The `KEEP_*` bounds are exclusive lower bounds (`value > bound`), the
//! `CLOSE_*` bounds are exclusive upper bounds (`value < bound`).

/// Clicks strictly above this keep the tab.
pub const KEEP_CLICK_THRESHOLD: i64 = 50;

/// Key presses strictly above this keep the tab.
pub const KEEP_KEY_PRESS_THRESHOLD: i64 = 50;

/// Scroll depth (percent) strictly above this keeps the tab.
pub const KEEP_SCROLL_THRESHOLD: f64 = 80.0;

/// Clicks strictly below this are a close candidate.
pub const CLOSE_CLICK_THRESHOLD: i64 = 5;

/// Key presses strictly below this are a close candidate.
pub const CLOSE_KEY_PRESS_THRESHOLD: i64 = 5;

/// Scroll depth (percent) strictly below this is a close candidate.
pub const CLOSE_SCROLL_THRESHOLD: f64 = 10.0;

// ── Activity scoring ────────────────────────────────────────────────

pub const ACTIVE_TIME_WEIGHT: f64 = 0.5;
pub const CLICK_WEIGHT: f64 = 0.3;
pub const KEY_PRESS_WEIGHT: f64 = 0.2;
pub const SCROLL_WEIGHT: f64 = 0.1;
/// Subtracted per idle second.
pub const IDLE_TIME_PENALTY: f64 = 0.5;

/// Score at or above which a tab is kept.
pub const SCORE_KEEP_MIN: f64 = 20.0;

/// Score at or above which a tab is worth considering.
pub const SCORE_CONSIDER_MIN: f64 = 10.0;

/// Tabs younger than this (seconds) have not reported enough to judge.
pub const MIN_TAB_AGE_SECS: f64 = 5.0;

/// Idle seconds after which an untouched tab is closed.
pub const UNTOUCHED_IDLE_CLOSE_SECS: f64 = 30.0;
