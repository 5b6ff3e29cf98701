//! The daily check-in record and its simulated submission.

use std::future::Future;

use serde::Serialize;

use crate::config::{RATING_DEFAULT, RATING_MAX, RATING_MIN, SUBMIT_DELAY_MS};

/// Clamp any slider reading into the 1..=10 rating range.
pub fn clamp_rating(value: i32) -> u8 {
    value.clamp(i32::from(RATING_MIN), i32::from(RATING_MAX)) as u8
}

/// Parse the raw value of a range input. Garbage falls back to the default.
pub fn parse_rating(raw: &str) -> u8 {
    raw.trim()
        .parse::<i32>()
        .map(clamp_rating)
        .unwrap_or(RATING_DEFAULT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBand {
    Low,
    Neutral,
    High,
}

impl MoodBand {
    pub fn from_rating(mood: u8) -> Self {
        match mood {
            0..=3 => MoodBand::Low,
            4..=7 => MoodBand::Neutral,
            _ => MoodBand::High,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MoodBand::Low => "\u{2639}",
            MoodBand::Neutral => "\u{1F610}",
            MoodBand::High => "\u{263A}",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MoodBand::Low => "mood-icon mood-low",
            MoodBand::Neutral => "mood-icon mood-neutral",
            MoodBand::High => "mood-icon mood-high",
        }
    }
}

/// One check-in. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIn {
    pub mood: u8,
    pub stress: u8,
    pub feelings: String,
}

impl Default for CheckIn {
    fn default() -> Self {
        Self {
            mood: RATING_DEFAULT,
            stress: RATING_DEFAULT,
            feelings: String::new(),
        }
    }
}

impl CheckIn {
    pub fn new(mood: i32, stress: i32, feelings: impl Into<String>) -> Self {
        Self {
            mood: clamp_rating(mood),
            stress: clamp_rating(stress),
            feelings: feelings.into(),
        }
    }

    /// "Submit" the check-in: wait out the fixed delay, then log it.
    /// There is no server behind this.
    pub async fn submit(self) -> CheckIn {
        self.submit_after(gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS))
            .await
    }

    /// Await `delay`, then log the record and hand it back.
    pub async fn submit_after(self, delay: impl Future<Output = ()>) -> CheckIn {
        delay.await;
        match serde_json::to_string(&self) {
            Ok(json) => log::info!("Check-in recorded: {}", json),
            Err(_) => log::info!("Check-in recorded: {:?}", self),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_default_ratings_are_midpoint() {
        let record = CheckIn::default();
        assert_eq!(record.mood, 5);
        assert_eq!(record.stress, 5);
        assert!(record.feelings.is_empty());
    }

    #[test]
    fn test_ratings_are_clamped() {
        let record = CheckIn::new(0, 42, "tired");
        assert_eq!(record.mood, 1);
        assert_eq!(record.stress, 10);
        assert_eq!(record.feelings, "tired");
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("7"), 7);
        assert_eq!(parse_rating(" 10 "), 10);
        assert_eq!(parse_rating("11"), 10);
        assert_eq!(parse_rating("-3"), 1);
        assert_eq!(parse_rating("abc"), 5);
    }

    #[test]
    fn test_mood_band_thresholds() {
        assert_eq!(MoodBand::from_rating(1), MoodBand::Low);
        assert_eq!(MoodBand::from_rating(3), MoodBand::Low);
        assert_eq!(MoodBand::from_rating(4), MoodBand::Neutral);
        assert_eq!(MoodBand::from_rating(7), MoodBand::Neutral);
        assert_eq!(MoodBand::from_rating(8), MoodBand::High);
        assert_eq!(MoodBand::from_rating(10), MoodBand::High);
    }

    #[test]
    fn test_submit_waits_for_delay_before_returning_record() {
        let waited = Cell::new(false);
        let record = CheckIn::new(2, 9, "rough week");

        let returned = block_on(record.clone().submit_after(async {
            waited.set(true);
        }));

        assert!(waited.get());
        assert_eq!(returned, record);
        assert_eq!(MoodBand::from_rating(returned.mood), MoodBand::Low);
    }

    #[test]
    fn test_record_serializes_all_fields() {
        let json = serde_json::to_value(CheckIn::new(8, 2, "good day")).unwrap();
        assert_eq!(json, serde_json::json!({"mood": 8, "stress": 2, "feelings": "good day"}));
    }
}
