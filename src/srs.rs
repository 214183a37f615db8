use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::models::{Quality, ReviewState};

/// Ease factor assigned to a card on first exposure.
pub const INITIAL_EASE: f64 = 2.5;

/// SM-2 floor; ease never drops below this no matter how many failures.
pub const MIN_EASE: f64 = 1.3;

#[derive(Debug, Clone, PartialEq)]
pub struct SrsResult {
    pub ease_factor: f64,
    pub interval_days: i64,
    pub repetitions: i64,
    pub next_review_at: DateTime<Utc>,
}

/// Calculates the next review schedule from the current state and a grade.
///
/// SuperMemo-2: a pass (grade >= 3) walks the interval through 1 day, 6 days,
/// then `round(interval * ease)`; a fail resets repetitions and interval but
/// still erodes the ease factor.
///
/// Pure given (state, quality, now); callers validate the grade by
/// constructing a `Quality` first.
pub fn schedule(state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> SrsResult {
    let interval_days;
    let mut repetitions = state.repetitions;

    if quality.is_pass() {
        interval_days = match repetitions {
            0 => 1,
            1 => 6,
            _ => (state.interval_days as f64 * state.ease_factor).round() as i64,
        };
        repetitions += 1;
    } else {
        repetitions = 0;
        interval_days = 1;
    }

    // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3.
    let q = quality.value() as f64;
    let ease = state.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    let ease = ease.max(MIN_EASE);

    SrsResult {
        ease_factor: round2(ease),
        interval_days,
        repetitions,
        next_review_at: next_review_date(now, interval_days),
    }
}

/// Due dates are calendar-day granular: the card comes due at midnight UTC
/// `interval_days` after the review, not at the hour it was reviewed.
fn next_review_date(now: DateTime<Utc>, interval_days: i64) -> DateTime<Utc> {
    (now.date_naive() + Duration::days(interval_days))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
