//! The keep/close/archive decision rule.
//!
//! Conditions are checked in order and the first match wins, so a tab with
//! heavy scrolling but no clicks is kept, never closed.

use crate::constants::*;
use crate::types::{InteractionSample, Recommendation};

/// Classify one tab from its interaction counters.
pub fn recommend(click_count: i64, key_press_count: i64, max_scroll_depth: f64) -> Recommendation {
    if click_count > KEEP_CLICK_THRESHOLD
        || key_press_count > KEEP_KEY_PRESS_THRESHOLD
        || max_scroll_depth > KEEP_SCROLL_THRESHOLD
    {
        Recommendation::Keep
    } else if click_count < CLOSE_CLICK_THRESHOLD
        && key_press_count < CLOSE_KEY_PRESS_THRESHOLD
        && max_scroll_depth < CLOSE_SCROLL_THRESHOLD
    {
        Recommendation::Close
    } else {
        Recommendation::Archive
    }
}

/// [`recommend`] over a decoded request body.
pub fn recommend_sample(sample: &InteractionSample) -> Recommendation {
    recommend(
        sample.click_count,
        sample.key_press_count,
        sample.max_scroll_depth,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_boundaries() {
        assert_eq!(recommend(50, 0, 0.0), Recommendation::Archive);
        assert_eq!(recommend(51, 0, 0.0), Recommendation::Keep);
        assert_eq!(recommend(0, 50, 0.0), Recommendation::Archive);
        assert_eq!(recommend(0, 51, 0.0), Recommendation::Keep);
        assert_eq!(recommend(0, 0, 80.0), Recommendation::Archive);
        assert_eq!(recommend(0, 0, 80.1), Recommendation::Keep);
    }

    #[test]
    fn test_close_boundaries() {
        assert_eq!(recommend(4, 4, 9.9), Recommendation::Close);
        assert_eq!(recommend(5, 0, 0.0), Recommendation::Archive);
        assert_eq!(recommend(0, 5, 0.0), Recommendation::Archive);
        assert_eq!(recommend(0, 0, 10.0), Recommendation::Archive);
        assert_eq!(recommend(0, 0, 0.0), Recommendation::Close);
    }

    #[test]
    fn test_keep_wins_over_close() {
        // Low clicks and keys would close, but deep scroll keeps.
        assert_eq!(recommend(0, 0, 95.0), Recommendation::Keep);
        assert_eq!(recommend(1, 100, 0.0), Recommendation::Keep);
    }

    #[test]
    fn test_middle_ground_archives() {
        assert_eq!(recommend(20, 20, 50.0), Recommendation::Archive);
        assert_eq!(recommend(0, 0, 45.0), Recommendation::Archive);
    }

    #[test]
    fn test_negative_counts() {
        assert_eq!(recommend(-1, -1, -5.0), Recommendation::Close);
    }

    #[test]
    fn test_recommend_sample() {
        let s = InteractionSample::new(60, 0, 0.0);
        assert_eq!(recommend_sample(&s), Recommendation::Keep);
        assert_eq!(
            recommend_sample(&InteractionSample::default()),
            Recommendation::Close
        );
    }
}
