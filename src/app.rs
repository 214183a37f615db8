use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::db::Db;
use crate::error::AppError;
use crate::models::{Card, NewCard, Quality, ReviewCard, ReviewOutcome, ReviewState, StudyStats};
use crate::ports::{ReminderPayload, ReminderScheduler, RewardLedger};
use crate::{rewards, srs, streak};

/// Every 50 studied cards advances the user's Hebrew level.
const CARDS_PER_LEVEL: i64 = 50;

/// Orchestrates the review flow over the store and the external capability
/// ports. Ledger and reminder calls are best-effort; the store calls are not.
pub struct App {
    pub db: Db,
    ledger: Arc<dyn RewardLedger>,
    reminders: Arc<dyn ReminderScheduler>,
}

impl App {
    pub fn new(db: Db, ledger: Arc<dyn RewardLedger>, reminders: Arc<dyn ReminderScheduler>) -> Self {
        Self { db, ledger, reminders }
    }

    pub async fn list_due_cards(&self, user_id: &str, limit: i64) -> Result<Vec<ReviewCard>, AppError> {
        Ok(self.db.list_due_cards(user_id, Utc::now(), limit).await?)
    }

    /// Picks catalog cards the user has never studied, easiest first, and
    /// materializes a review state for each one returned. Listing commits
    /// the user to the cards, so callers must only ask for cards they will
    /// actually show.
    pub async fn list_new_cards(&self, user_id: &str, limit: i64) -> Result<Vec<ReviewCard>, AppError> {
        let now = Utc::now();
        let cards = self.db.list_unseen_cards(user_id, limit).await?;

        for card in &cards {
            self.db.insert_initial_review_state(user_id, &card.id, now).await?;
        }

        Ok(cards.into_iter().map(ReviewCard::fresh).collect())
    }

    /// Grades one card and advances everything that hangs off a review:
    /// scheduling state, coin tally, the append-only event log, the daily
    /// streak, external settlement, and the next-review reminder.
    ///
    /// The sub-steps are ordered deliberately. The streak checks read the
    /// event history *before* this review's event is appended, which is what
    /// keeps the streak increment idempotent within a day. Settlement and
    /// reminder failures are logged and swallowed; by then the review is
    /// already durable.
    pub async fn submit_review(
        &self,
        user_id: &str,
        card_id: &str,
        quality: i64,
    ) -> Result<ReviewOutcome, AppError> {
        let quality = Quality::new(quality)?;

        // Missing card fails the whole call before anything is persisted.
        let card = self
            .db
            .get_card(card_id)
            .await?
            .ok_or_else(|| AppError::CardNotFound(card_id.to_string()))?;

        let now = Utc::now();
        let state = self
            .db
            .get_review_state(user_id, card_id)
            .await?
            .unwrap_or_else(|| ReviewState::fresh(now));

        let result = srs::schedule(&state, quality, now);
        let coins_earned = rewards::coins_earned(quality, card.difficulty_level);

        let today = midnight(now);
        let yesterday = today - Duration::days(1);
        let reviewed_earlier_today = self.db.has_event_in_range(user_id, today, now).await?;
        let reviewed_yesterday = self.db.has_event_in_range(user_id, yesterday, today).await?;

        self.db
            .record_review(user_id, card_id, &result, quality.value(), coins_earned, now)
            .await?;

        let streak_days = self.db.get_streak(user_id).await?;
        let new_streak = streak::advance(streak_days, reviewed_earlier_today, reviewed_yesterday);
        if new_streak != streak_days {
            self.db.set_streak(user_id, new_streak).await?;
        }

        if coins_earned > 0.0 {
            if let Err(err) = self
                .ledger
                .credit_reward(user_id, coins_earned, "hebrew_review")
                .await
            {
                log::warn!("reward settlement failed for user {user_id}: {err}");
            }
        }

        let payload = ReminderPayload {
            user_id: user_id.to_string(),
            card_id: card_id.to_string(),
        };
        if let Err(err) = self.reminders.schedule_at(result.next_review_at, payload).await {
            log::warn!("could not schedule review reminder for user {user_id}: {err}");
        }

        Ok(ReviewOutcome {
            coins_earned,
            next_review: result.next_review_at,
            new_streak,
        })
    }

    pub async fn get_stats(&self, user_id: &str) -> Result<StudyStats, AppError> {
        let now = Utc::now();
        let total_cards = self.db.count_review_states(user_id).await?;
        let due_count = self.db.count_due(user_id, now).await?;
        let reviewed_today = self.db.count_events_since(user_id, midnight(now)).await?;
        let streak_days = self.db.get_streak(user_id).await?;

        Ok(StudyStats {
            total_cards,
            due_count,
            reviewed_today,
            streak_days,
            next_level_progress: level_progress(total_cards),
        })
    }

    pub async fn list_cards(&self, category: Option<&str>) -> Result<Vec<Card>, AppError> {
        Ok(self.db.list_cards(category).await?)
    }

    pub async fn create_card(&self, new: NewCard) -> Result<Card, AppError> {
        Ok(self.db.create_card(new).await?)
    }
}

fn midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn level_progress(total_cards: i64) -> f64 {
    (total_cards % CARDS_PER_LEVEL) as f64 / CARDS_PER_LEVEL as f64 * 100.0
}
