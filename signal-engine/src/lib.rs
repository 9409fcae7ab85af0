//! Signal Engine: candle-driven trade signal detection
//!
//! This crate turns an ordered stream of OHLCV candles for one trading pair
//! into directional trade signals, tracks those signals until their target or
//! stop is hit, and replays history through the same detection logic to
//! evaluate it offline. Indicator math is built on
//! [ta-rs](https://github.com/greyblake/ta-rs).
//!
//! # Features
//!
//! - **Data Management**: OHLCV candles and a bounded, deduplicating history
//! - **Technical Indicators**: RSI, MACD, EMA, SMA, BB, StochRSI, ATR, ADX, MFI
//! - **Strategy Classifier**: six-strategy cascade with confirmation and scoring
//! - **Signal Lifecycle**: dedup, tick evaluation, performance accounting
//! - **Backtesting**: single-position replay with equity curve and trade log
//!
//! # Example
//!
//! ```no_run
//! use signal_engine::prelude::*;
//!
//! let candles: Vec<Candle> = Vec::new(); // recorded history, oldest first
//! let mut session = LiveSession::new(
//!     "BTC/USDT",
//!     Timeframe::new("15m"),
//!     AccountConfig::default(),
//!     Box::new(TracingNotifier),
//! );
//! session.seed(candles);
//! let result = session.run_backtest(&BacktestConfig::default());
//! ```

pub mod backtest;
pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod lifecycle;
pub mod portfolio;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub mod prelude {
    pub use crate::backtest::*;
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::error::*;
    pub use crate::indicators::*;
    pub use crate::lifecycle::*;
    pub use crate::portfolio::*;
    pub use crate::session::*;
    pub use crate::strategy::*;
}

pub use error::{Error, Result};
