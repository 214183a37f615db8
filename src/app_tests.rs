use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::app::App;
use crate::db::Db;
use crate::error::AppError;
use crate::models::NewCard;
use crate::ports::{NoopLedger, TokioReminderScheduler};

async fn test_app() -> App {
    let db = Db::open_in_memory().await.unwrap();
    App::new(db, Arc::new(NoopLedger), Arc::new(TokioReminderScheduler))
}

async fn add_card(app: &App, word: &str, difficulty: i64) -> String {
    app.create_card(NewCard {
        word_hebrew: word.to_string(),
        word_english: word.to_string(),
        transliteration: word.to_string(),
        difficulty_level: difficulty,
        category: "vocabulary".to_string(),
        gematria_value: None,
        audio_url: None,
    })
    .await
    .unwrap()
    .id
}

fn midnight_after(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    (now.date_naive() + Duration::days(days))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[tokio::test]
async fn fresh_card_first_pass_end_to_end() {
    let app = test_app().await;
    let card_id = add_card(&app, "שלום", 1).await;

    let outcome = app.submit_review("noam", &card_id, 4).await.unwrap();

    assert_eq!(outcome.coins_earned, 0.4);
    assert_eq!(outcome.new_streak, 1);
    assert_eq!(outcome.next_review, midnight_after(Utc::now(), 1));

    let state = app.db.get_review_state("noam", &card_id).await.unwrap().unwrap();
    assert_eq!(state.interval_days, 1);
    assert_eq!(state.repetitions, 1);
    assert_eq!(state.ease_factor, 2.5);
    assert!(state.last_reviewed_at.is_some());
}

#[tokio::test]
async fn second_review_same_day_does_not_double_count_streak() {
    let app = test_app().await;
    let first = add_card(&app, "אבא", 1).await;
    let second = add_card(&app, "אמא", 1).await;

    let outcome = app.submit_review("noam", &first, 5).await.unwrap();
    assert_eq!(outcome.new_streak, 1);

    let outcome = app.submit_review("noam", &second, 5).await.unwrap();
    assert_eq!(outcome.new_streak, 1);
}

#[tokio::test]
async fn missed_day_resets_streak_then_counts_today() {
    let app = test_app().await;
    let first = add_card(&app, "מים", 1).await;
    let second = add_card(&app, "לחם", 1).await;

    app.submit_review("noam", &first, 4).await.unwrap();
    app.db.set_streak("noam", 5).await.unwrap();

    // Push the only event back two days: last activity is now before
    // yesterday, so the streak is broken.
    let two_days_ago = Utc::now() - Duration::days(2);
    sqlx::query("UPDATE review_events SET created_at = ?")
        .bind(two_days_ago)
        .execute(&app.db.pool)
        .await
        .unwrap();

    let outcome = app.submit_review("noam", &second, 1).await.unwrap();
    assert_eq!(outcome.new_streak, 1);

    // Quality 1 is a fail: scheduling resets too.
    let state = app.db.get_review_state("noam", &second).await.unwrap().unwrap();
    assert_eq!(state.interval_days, 1);
    assert_eq!(state.repetitions, 0);
}

#[tokio::test]
async fn due_selector_skips_future_cards_and_orders_by_overdue() {
    let app = test_app().await;
    let scheduled = add_card(&app, "יום", 1).await;
    let overdue_old = add_card(&app, "לילה", 1).await;
    let overdue_new = add_card(&app, "אור", 1).await;

    // Passing a card schedules it for tomorrow, off today's due list.
    app.submit_review("noam", &scheduled, 5).await.unwrap();

    let now = Utc::now();
    for (card_id, days_overdue) in [(&overdue_old, 3), (&overdue_new, 1)] {
        app.db
            .insert_initial_review_state("noam", card_id, now)
            .await
            .unwrap();
        sqlx::query("UPDATE review_states SET next_review_at = ? WHERE user_id = ? AND card_id = ?")
            .bind(now - Duration::days(days_overdue))
            .bind("noam")
            .bind(card_id)
            .execute(&app.db.pool)
            .await
            .unwrap();
    }

    let due = app.list_due_cards("noam", 20).await.unwrap();
    let ids: Vec<&str> = due.iter().map(|c| c.card.id.as_str()).collect();
    assert_eq!(ids, vec![overdue_old.as_str(), overdue_new.as_str()]);
}

#[tokio::test]
async fn new_card_selector_orders_by_difficulty_and_materializes_state() {
    let app = test_app().await;
    add_card(&app, "תורה", 5).await;
    add_card(&app, "שלום", 1).await;
    add_card(&app, "שבת", 3).await;

    let first_batch = app.list_new_cards("noam", 2).await.unwrap();
    let difficulties: Vec<i64> = first_batch.iter().map(|c| c.card.difficulty_level).collect();
    assert_eq!(difficulties, vec![1, 3]);
    assert_eq!(app.db.count_review_states("noam").await.unwrap(), 2);

    // Already-seen cards never come back.
    let second_batch = app.list_new_cards("noam", 10).await.unwrap();
    assert_eq!(second_batch.len(), 1);
    assert_eq!(second_batch[0].card.difficulty_level, 5);

    assert!(app.list_new_cards("noam", 10).await.unwrap().is_empty());
    assert_eq!(app.db.count_review_states("noam").await.unwrap(), 3);
}

#[tokio::test]
async fn unknown_card_fails_with_no_side_effects() {
    let app = test_app().await;

    let err = app.submit_review("noam", "no-such-card", 4).await.unwrap_err();
    assert!(matches!(err, AppError::CardNotFound(_)));

    assert_eq!(app.db.count_review_states("noam").await.unwrap(), 0);
    let long_ago = Utc::now() - Duration::days(365);
    let any_event = app
        .db
        .has_event_in_range("noam", long_ago, Utc::now())
        .await
        .unwrap();
    assert!(!any_event);
}

#[tokio::test]
async fn out_of_range_quality_is_rejected() {
    let app = test_app().await;
    let card_id = add_card(&app, "ברוך", 4).await;

    for quality in [-1, 6, 42] {
        let err = app.submit_review("noam", &card_id, quality).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidQuality(_)));
    }

    // Rejected before any state lands.
    assert!(app.db.get_review_state("noam", &card_id).await.unwrap().is_none());
}

#[tokio::test]
async fn stats_reflect_a_day_of_study() {
    let app = test_app().await;
    let card_id = add_card(&app, "חיים", 4).await;

    app.submit_review("noam", &card_id, 5).await.unwrap();

    let stats = app.get_stats("noam").await.unwrap();
    assert_eq!(stats.total_cards, 1);
    assert_eq!(stats.due_count, 0); // rescheduled to tomorrow
    assert_eq!(stats.reviewed_today, 1);
    assert_eq!(stats.streak_days, 1);
    assert_eq!(stats.next_level_progress, 2.0);
}

#[tokio::test]
async fn harder_words_pay_more() {
    let app = test_app().await;
    let easy = add_card(&app, "שלום", 1).await;
    let hard = add_card(&app, "צדקה", 5).await;

    let easy_outcome = app.submit_review("noam", &easy, 5).await.unwrap();
    let hard_outcome = app.submit_review("noam", &hard, 5).await.unwrap();

    assert_eq!(easy_outcome.coins_earned, 0.5);
    assert_eq!(hard_outcome.coins_earned, 0.9);
}
