mod api;
mod app;
mod data;
mod db;
mod error;
mod models;
mod ports;
mod rewards;
mod srs;
mod streak;

#[cfg(test)]
mod app_tests;

use std::net::SocketAddr;
use std::sync::Arc;

use app::App;
use ports::{NoopLedger, TokioReminderScheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://hebrew_tutor.db?mode=rwc".to_string());
    let db = db::Db::new(&database_url).await?;

    let app = App::new(db, Arc::new(NoopLedger), Arc::new(TokioReminderScheduler));
    let router = api::app_router(api::ApiState { app: Arc::new(app) });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
