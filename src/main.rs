use std::env;

use teloxide::prelude::*;
use tracing::info;

use mlb_stats_bot::handlers;
use mlb_stats_bot::statsapi::StatsApi;

#[tokio::main]
async fn main() {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_current_span(false)
        .with_target(false)
        .try_init();

    // The only configuration: missing token is a fatal startup condition.
    let token =
        env::var("TELEGRAM_BOT_AUTH_TOKEN").expect("TELEGRAM_BOT_AUTH_TOKEN must be set");

    let bot = Bot::new(token);
    let api = StatsApi::new();

    info!("Starting MLB statistics bot");

    Dispatcher::builder(bot, handlers::build_handler_tree())
        .dependencies(dptree::deps![api])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("MLB statistics bot stopped");
}
