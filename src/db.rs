use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, Pool, Sqlite};
use std::str::FromStr;
use uuid::Uuid;

use crate::data::SEED_CARDS;
use crate::models::{Card, NewCard, ReviewCard, ReviewState};
use crate::srs::SrsResult;

#[derive(Clone)]
pub struct Db {
    pub(crate) pool: Pool<Sqlite>,
}

impl Db {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .log_statements(log::LevelFilter::Trace);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let db = Db { pool };
        db.migrate().await?;
        db.seed_catalog_if_empty().await?;

        Ok(db)
    }

    /// Single-connection in-memory store for tests; every connection would
    /// otherwise get its own empty database.
    #[cfg(test)]
    pub async fn open_in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Db { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> anyhow::Result<()> {
        // One statement per query; sqlx prepares each.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cards (
                id TEXT PRIMARY KEY,
                word_hebrew TEXT NOT NULL,
                word_english TEXT NOT NULL,
                transliteration TEXT NOT NULL,
                difficulty_level INTEGER NOT NULL DEFAULT 1,
                category TEXT NOT NULL,
                gematria_value INTEGER,
                audio_url TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS review_states (
                user_id TEXT NOT NULL,
                card_id TEXT NOT NULL,
                ease_factor REAL NOT NULL DEFAULT 2.5,
                interval_days INTEGER NOT NULL DEFAULT 1,
                repetitions INTEGER NOT NULL DEFAULT 0,
                next_review_at DATETIME NOT NULL,
                last_reviewed_at DATETIME,
                PRIMARY KEY (user_id, card_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS review_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                card_id TEXT NOT NULL,
                quality INTEGER NOT NULL,
                coins_earned REAL NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                streak_days INTEGER NOT NULL DEFAULT 0,
                total_coins REAL NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_review_states_due \
             ON review_states (user_id, next_review_at)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_review_events_user_time \
             ON review_events (user_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn seed_catalog_if_empty(&self) -> anyhow::Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT count(*) FROM cards")
            .fetch_one(&self.pool)
            .await?;

        if count == 0 {
            for seed in SEED_CARDS {
                sqlx::query(
                    "INSERT INTO cards (id, word_hebrew, word_english, transliteration, difficulty_level, category, gematria_value) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(Uuid::new_v4().to_string())
                .bind(seed.word_hebrew)
                .bind(seed.word_english)
                .bind(seed.transliteration)
                .bind(seed.difficulty_level)
                .bind(seed.category)
                .bind(seed.gematria_value)
                .execute(&self.pool)
                .await?;
            }
            log::info!("seeded {} catalog cards", SEED_CARDS.len());
        }
        Ok(())
    }

    pub async fn get_card(&self, card_id: &str) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>("SELECT * FROM cards WHERE id = ?")
            .bind(card_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_cards(&self, category: Option<&str>) -> Result<Vec<Card>, sqlx::Error> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Card>(
                    "SELECT * FROM cards WHERE category = ? ORDER BY difficulty_level ASC",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Card>("SELECT * FROM cards ORDER BY difficulty_level ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    pub async fn create_card(&self, new: NewCard) -> Result<Card, sqlx::Error> {
        let card = Card {
            id: Uuid::new_v4().to_string(),
            word_hebrew: new.word_hebrew,
            word_english: new.word_english,
            transliteration: new.transliteration,
            difficulty_level: new.difficulty_level,
            category: new.category,
            gematria_value: new.gematria_value,
            audio_url: new.audio_url,
        };

        sqlx::query(
            "INSERT INTO cards (id, word_hebrew, word_english, transliteration, difficulty_level, category, gematria_value, audio_url) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&card.id)
        .bind(&card.word_hebrew)
        .bind(&card.word_english)
        .bind(&card.transliteration)
        .bind(card.difficulty_level)
        .bind(&card.category)
        .bind(card.gematria_value)
        .bind(&card.audio_url)
        .execute(&self.pool)
        .await?;

        Ok(card)
    }

    pub async fn get_review_state(
        &self,
        user_id: &str,
        card_id: &str,
    ) -> Result<Option<ReviewState>, sqlx::Error> {
        sqlx::query_as::<_, ReviewState>(
            "SELECT ease_factor, interval_days, repetitions, next_review_at, last_reviewed_at \
             FROM review_states WHERE user_id = ? AND card_id = ?",
        )
        .bind(user_id)
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Cards whose next review has passed, most overdue first. Pure read.
    pub async fn list_due_cards(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ReviewCard>, sqlx::Error> {
        sqlx::query_as::<_, ReviewCard>(
            r#"
            SELECT c.*, rs.ease_factor, rs.interval_days, rs.repetitions, rs.last_reviewed_at
            FROM review_states rs
            JOIN cards c ON c.id = rs.card_id
            WHERE rs.user_id = ? AND rs.next_review_at <= ?
            ORDER BY rs.next_review_at ASC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Catalog cards the user has never had a review state for, easiest first.
    pub async fn list_unseen_cards(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT c.*
            FROM cards c
            LEFT JOIN review_states rs ON rs.card_id = c.id AND rs.user_id = ?
            WHERE rs.card_id IS NULL
            ORDER BY c.difficulty_level ASC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_initial_review_state(
        &self,
        user_id: &str,
        card_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO review_states (user_id, card_id, ease_factor, interval_days, repetitions, next_review_at) \
             VALUES (?, ?, 2.5, 1, 0, ?) \
             ON CONFLICT (user_id, card_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(card_id)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Persists one submitted review atomically: the scheduling upsert, the
    /// user's coin tally, and the append-only event land in one transaction,
    /// so a racing submission for the same (user, card) serializes at the
    /// store instead of both winning from stale state.
    pub async fn record_review(
        &self,
        user_id: &str,
        card_id: &str,
        srs: &SrsResult,
        quality: u8,
        coins_earned: f64,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO review_states
                (user_id, card_id, ease_factor, interval_days, repetitions, next_review_at, last_reviewed_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, card_id) DO UPDATE SET
                ease_factor = excluded.ease_factor,
                interval_days = excluded.interval_days,
                repetitions = excluded.repetitions,
                next_review_at = excluded.next_review_at,
                last_reviewed_at = excluded.last_reviewed_at
            "#,
        )
        .bind(user_id)
        .bind(card_id)
        .bind(srs.ease_factor)
        .bind(srs.interval_days)
        .bind(srs.repetitions)
        .bind(srs.next_review_at)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO users (id) VALUES (?) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE users SET total_coins = total_coins + ? WHERE id = ?")
            .bind(coins_earned)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO review_events (user_id, card_id, quality, coins_earned, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(card_id)
        .bind(quality as i64)
        .bind(coins_earned)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn has_event_in_range(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM review_events WHERE user_id = ? AND created_at >= ? AND created_at < ?)",
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn count_review_states(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT count(*) FROM review_states WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn count_due(&self, user_id: &str, now: DateTime<Utc>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT count(*) FROM review_states WHERE user_id = ? AND next_review_at <= ?",
        )
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn count_events_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT count(*) FROM review_events WHERE user_id = ? AND created_at >= ?",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get_streak(&self, user_id: &str) -> Result<i64, sqlx::Error> {
        let streak: Option<i64> = sqlx::query_scalar("SELECT streak_days FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(streak.unwrap_or(0))
    }

    pub async fn set_streak(&self, user_id: &str, streak_days: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, streak_days) VALUES (?, ?) \
             ON CONFLICT (id) DO UPDATE SET streak_days = excluded.streak_days",
        )
        .bind(user_id)
        .bind(streak_days)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
