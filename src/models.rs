use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::srs;

/// A 0-5 review grade, SM-2 scale.
///
/// 5 - Perfect response
/// 4 - Correct response after a hesitation
/// 3 - Correct response recalled with serious difficulty
/// 2 - Incorrect response; where the correct one seemed easy to recall
/// 1 - Incorrect response; the correct one remembered
/// 0 - Complete blackout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(raw: i64) -> Result<Self, AppError> {
        if !(0..=5).contains(&raw) {
            return Err(AppError::InvalidQuality(raw));
        }
        Ok(Quality(raw as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// 3 and above counts as a recall.
    pub fn is_pass(self) -> bool {
        self.0 >= 3
    }
}

/// Catalog entry for one vocabulary word. Read-mostly; the scheduler never
/// mutates cards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Card {
    pub id: String,
    pub word_hebrew: String,
    pub word_english: String,
    pub transliteration: String,
    pub difficulty_level: i64,
    pub category: String,
    pub gematria_value: Option<i64>,
    pub audio_url: Option<String>,
}

/// Payload for creating a catalog card.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCard {
    pub word_hebrew: String,
    pub word_english: String,
    pub transliteration: String,
    pub difficulty_level: i64,
    pub category: String,
    pub gematria_value: Option<i64>,
    pub audio_url: Option<String>,
}

/// Per-(user, card) scheduling state. One row per pair, created lazily and
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReviewState {
    pub ease_factor: f64,
    pub interval_days: i64,
    pub repetitions: i64,
    pub next_review_at: DateTime<Utc>,
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// State for a card the user has never seen: due immediately.
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            ease_factor: srs::INITIAL_EASE,
            interval_days: 1,
            repetitions: 0,
            next_review_at: now,
            last_reviewed_at: None,
        }
    }
}

/// A card joined with its scheduling state, as served to clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReviewCard {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub card: Card,
    pub ease_factor: f64,
    pub interval_days: i64,
    pub repetitions: i64,
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewCard {
    pub fn fresh(card: Card) -> Self {
        Self {
            card,
            ease_factor: srs::INITIAL_EASE,
            interval_days: 1,
            repetitions: 0,
            last_reviewed_at: None,
        }
    }
}

/// What a submitted review earned the user.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutcome {
    pub coins_earned: f64,
    pub next_review: DateTime<Utc>,
    pub new_streak: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyStats {
    pub total_cards: i64,
    pub due_count: i64,
    pub reviewed_today: i64,
    pub streak_days: i64,
    pub next_level_progress: f64,
}
