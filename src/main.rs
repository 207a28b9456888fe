mod app;
mod config;
mod db;
mod extractors;
mod password;
mod posts;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "photopost=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Connect, ping or migration failure ends the process here.
    let app_state = AppState::init(AppConfig::from_env()?).await?;
    let addr = app_state.config.bind_addr()?;
    let db = app_state.db.clone();

    let served = app::serve(app::build_app(app_state), addr).await;
    db.close().await;
    served
}
