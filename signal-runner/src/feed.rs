//! Recorded candle feed
//!
//! Loads candles from a JSON file and replays them over a tokio channel the
//! way a live exchange stream would deliver them.

use anyhow::Context;
use signal_engine::data::Candle;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Buffered candles between the replay task and the session
const FEED_BUFFER: usize = 1000;

/// Parse a JSON array of candles, or one candle per line.
///
/// Each candle may be an object or an exchange kline row.
pub fn parse_candles(text: &str) -> Result<Vec<Candle>, anyhow::Error> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') && serde_json::from_str::<Candle>(trimmed).is_err() {
        return serde_json::from_str(trimmed).context("failed to parse candle array");
    }

    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).with_context(|| format!("bad candle on line {}", n + 1))
        })
        .collect()
}

pub async fn load_candles(path: &str) -> Result<Vec<Candle>, anyhow::Error> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read candles from {}", path))?;
    let candles = parse_candles(&text)?;
    info!("Loaded {} candles from {}", candles.len(), path);
    Ok(candles)
}

/// Stream `candles` in order from a background task
pub fn spawn_replay(candles: Vec<Candle>) -> mpsc::Receiver<Candle> {
    let (sender, receiver) = mpsc::channel(FEED_BUFFER);
    tokio::spawn(async move {
        let total = candles.len();
        for candle in candles {
            if sender.send(candle).await.is_err() {
                debug!("Feed receiver dropped, stopping replay");
                return;
            }
        }
        debug!("Replayed {} candles", total);
    });
    receiver
}
