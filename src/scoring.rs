//! Weighted engagement score for a tab and the verdict derived from it.
//!
//! score = 0.5·active + 0.3·clicks + 0.2·keys + 0.1·scroll − 0.5·idle,
//! clamped at zero. Times are seconds.

use serde::Serialize;

use crate::constants::*;
use crate::types::{ActivityReport, ScoreVerdict};

/// Response body of `POST /score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub recommendation: ScoreVerdict,
    pub score: f64,
}

pub fn activity_score(report: &ActivityReport) -> f64 {
    let score = report.active_time * ACTIVE_TIME_WEIGHT
        + report.click_count * CLICK_WEIGHT
        + report.key_presses * KEY_PRESS_WEIGHT
        + report.max_scroll_depth * SCROLL_WEIGHT
        - report.idle_time * IDLE_TIME_PENALTY;
    // Kept finite so the JSON response never carries `null`.
    score.max(0.0).min(f64::MAX)
}

/// Seconds since the tab was first seen. A report without `first_seen`, or
/// with a zero timestamp, is treated as brand new.
fn tab_age_secs(report: &ActivityReport, now_ms: f64) -> f64 {
    let first_seen = report
        .first_seen
        .filter(|&t| t != 0.0)
        .unwrap_or(now_ms);
    (now_ms - first_seen) / 1000.0
}

fn is_untouched(report: &ActivityReport) -> bool {
    report.active_time == 0.0
        && report.click_count == 0.0
        && report.key_presses == 0.0
        && report.max_scroll_depth == 0.0
}

/// Map a score to a verdict. `now_ms` is the current wall clock in
/// milliseconds since the Unix epoch.
pub fn verdict(score: f64, report: &ActivityReport, now_ms: f64) -> ScoreVerdict {
    if tab_age_secs(report, now_ms) < MIN_TAB_AGE_SECS {
        return ScoreVerdict::NoData;
    }

    if is_untouched(report) {
        return if report.idle_time > UNTOUCHED_IDLE_CLOSE_SECS {
            ScoreVerdict::Close
        } else {
            ScoreVerdict::NoData
        };
    }

    if score >= SCORE_KEEP_MIN {
        ScoreVerdict::Keep
    } else if score >= SCORE_CONSIDER_MIN {
        ScoreVerdict::Consider
    } else {
        ScoreVerdict::Close
    }
}

pub fn evaluate(report: &ActivityReport, now_ms: f64) -> ScoreResult {
    let score = activity_score(report);
    ScoreResult {
        recommendation: verdict(score, report, now_ms),
        score,
    }
}
