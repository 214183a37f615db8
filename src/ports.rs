use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// External settlement of earned coins (e.g. an on-chain mint). Best-effort:
/// the orchestrator logs a failure and moves on, so an implementation may
/// freely be a no-op.
#[async_trait]
pub trait RewardLedger: Send + Sync {
    async fn credit_reward(&self, user_id: &str, amount: f64, reason: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderPayload {
    pub user_id: String,
    pub card_id: String,
}

/// Delayed "your card is due" nudge. Also best-effort; delivery, retry and
/// durability belong to whatever sits behind the trait.
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    async fn schedule_at(&self, at: DateTime<Utc>, payload: ReminderPayload) -> anyhow::Result<()>;
}

/// Settlement stand-in for deployments without an external ledger.
pub struct NoopLedger;

#[async_trait]
impl RewardLedger for NoopLedger {
    async fn credit_reward(&self, user_id: &str, amount: f64, reason: &str) -> anyhow::Result<()> {
        log::debug!("no ledger configured; skipping credit of {amount} to {user_id} ({reason})");
        Ok(())
    }
}

/// In-process timer: sleeps until the due time on a detached task, then logs
/// the nudge. Reminders scheduled this way do not survive a restart; a
/// durable queue can replace this behind the same trait.
pub struct TokioReminderScheduler;

#[async_trait]
impl ReminderScheduler for TokioReminderScheduler {
    async fn schedule_at(&self, at: DateTime<Utc>, payload: ReminderPayload) -> anyhow::Result<()> {
        let delay = (at - Utc::now()).to_std().unwrap_or_default();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            log::info!(
                "review reminder: user={} card={}",
                payload.user_id,
                payload.card_id
            );
        });
        Ok(())
    }
}
