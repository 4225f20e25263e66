//! Binary entry point: wires the dispatcher to a terminal session.
//!
//! Each stdin line is treated as a direct-chat message from one console
//! user, so the whole flow can be exercised without a chat network. Point
//! `VAGABOT__BACKEND__BASE_URL` at a running search backend first.

use std::sync::Arc;

use futures::stream;
use tokio::io::AsyncBufReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vagabot::adapters::{ConsoleTransport, HttpSearchConfig, HttpSearchGateway, InMemoryConversationStore};
use vagabot::application::{Dispatcher, DispatcherSettings, TriggerDetector};
use vagabot::config::AppConfig;
use vagabot::domain::SiteCatalog;
use vagabot::ports::IncomingMessage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vagabot=debug")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let gateway = HttpSearchGateway::new(
        HttpSearchConfig::new(config.backend.base_url.clone())
            .with_timeout(config.backend.timeout()),
    );

    let dispatcher = Arc::new(Dispatcher::new(
        SiteCatalog::builtin().clone(),
        TriggerDetector::new(
            config.bot.trigger_keyword.clone(),
            config.bot.bot_id.clone(),
        ),
        DispatcherSettings {
            cancel_keyword: config.bot.cancel_keyword.clone(),
            trigger_keyword: config.bot.trigger_keyword.clone(),
            max_results: config.backend.max_results,
        },
        Arc::new(InMemoryConversationStore::new()),
        Arc::new(gateway),
        Arc::new(ConsoleTransport::new()),
    ));

    info!(
        trigger = %config.bot.trigger_keyword,
        backend = %config.backend.base_url,
        "vagabot online; digite {} para começar",
        config.bot.trigger_keyword
    );

    let lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let events = stream::unfold(lines, |mut lines| async {
        match lines.next_line().await {
            Ok(Some(line)) => Some((IncomingMessage::direct("console", line), lines)),
            _ => None,
        }
    });
    futures::pin_mut!(events);

    dispatcher.run(events).await;
    Ok(())
}
