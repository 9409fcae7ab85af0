use anyhow::Result;
use signal_engine::backtest::BacktestReport;
use signal_engine::lifecycle::ChannelNotifier;
use signal_engine::session::LiveSession;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod feed;

use config::Config;

// Signal runner
// Replays a recorded candle file through a live session, then backtests it

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting signal runner for {} {} ({})",
        config.symbol, config.timeframe, config.candles_path
    );

    let candles = feed::load_candles(&config.candles_path).await?;
    let seed_len = config.seed_candles.min(candles.len());
    let (seed, stream) = candles.split_at(seed_len);

    let (notifier, mut notifications) = ChannelNotifier::channel();
    let mut session = LiveSession::new(
        config.symbol.clone(),
        config.timeframe.clone(),
        config.account(),
        Box::new(notifier),
    );
    session.seed(seed.to_vec());

    let notification_task = tokio::spawn(async move {
        let mut delivered = 0usize;
        while let Some(n) = notifications.recv().await {
            info!(
                "🔔 New {} Signal: {} | {} detected. Price: {}",
                n.signal_type, n.symbol, n.strategy, n.entry_price
            );
            delivered += 1;
        }
        delivered
    });

    let mut feed = feed::spawn_replay(stream.to_vec());
    while let Some(candle) = feed.recv().await {
        session.on_candle(candle);
    }

    let performance = session.performance();
    info!(
        "Replay finished: {} active, {} completed signals",
        session.signals().active().count(),
        session.signals().completed().count()
    );
    println!("{}", serde_json::to_string_pretty(performance)?);

    let backtest_config = config.backtest();
    match session.run_backtest(&backtest_config) {
        Some(result) => {
            println!(
                "{}",
                BacktestReport::new(&result, backtest_config.initial_balance).format()
            );
        }
        None => warn!("Backtest could not be run on {} candles", session.history().len()),
    }

    // closes the notification channel
    drop(session);
    let delivered = notification_task.await?;
    info!("Delivered {} notifications", delivered);

    Ok(())
}
