//! Live session for one (symbol, timeframe) pair
//!
//! Glues the candle history, indicator engine, strategy classifier and signal
//! lifecycle manager together. Feed it the initial history with
//! [`LiveSession::seed`], then every streamed candle update with
//! [`LiveSession::on_candle`].

use crate::backtest::{BacktestEngine, BacktestResult};
use crate::config::{AccountConfig, BacktestConfig, Timeframe};
use crate::data::{Candle, CandleHistory, CandleUpdate};
use crate::indicators::IndicatorEngine;
use crate::lifecycle::{SignalManager, SignalNotifier};
use crate::portfolio::PerformanceMetrics;
use crate::strategy::{Signal, StrategyClassifier};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Detection runs only once the history holds more candles than this
pub const DETECTION_MIN_HISTORY: usize = 35;

/// Latest price and its change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Wall-clock time of the update (ms since epoch)
    pub last_update: i64,
}

impl PriceData {
    fn from_move(open: f64, close: f64, now: i64) -> Self {
        let change = close - open;
        Self {
            price: close,
            change,
            change_percent: if open != 0.0 { change / open * 100.0 } else { 0.0 },
            last_update: now,
        }
    }
}

pub struct LiveSession {
    symbol: String,
    timeframe: Timeframe,
    account: AccountConfig,
    history: CandleHistory,
    classifier: StrategyClassifier,
    signals: SignalManager,
    price: Option<PriceData>,
}

impl LiveSession {
    pub fn new(
        symbol: impl Into<String>,
        timeframe: Timeframe,
        account: AccountConfig,
        notifier: Box<dyn SignalNotifier>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            account,
            history: CandleHistory::new(),
            classifier: StrategyClassifier::new(account),
            signals: SignalManager::new(account, notifier),
            price: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn timeframe(&self) -> &Timeframe {
        &self.timeframe
    }

    pub fn history(&self) -> &CandleHistory {
        &self.history
    }

    pub fn signals(&self) -> &SignalManager {
        &self.signals
    }

    pub fn performance(&self) -> &PerformanceMetrics {
        self.signals.performance()
    }

    pub fn price(&self) -> Option<&PriceData> {
        self.price.as_ref()
    }

    /// Load the initial history, replacing whatever was there
    pub fn seed(&mut self, candles: Vec<Candle>) {
        self.history.seed(candles);
        self.price = match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) => Some(PriceData::from_move(
                first.open,
                last.close,
                Utc::now().timestamp_millis(),
            )),
            _ => None,
        };
        info!(
            "Seeded {} {} with {} candles",
            self.symbol,
            self.timeframe,
            self.history.len()
        );
    }

    /// Apply a streamed candle update.
    ///
    /// A new open time closes the previous candle and runs detection on it;
    /// every update then acts as a price tick for the active signals. Returns
    /// the signal accepted on this update, if any.
    pub fn on_candle(&mut self, candle: Candle) -> Option<Signal> {
        let now = Utc::now().timestamp_millis();
        self.price = Some(PriceData::from_move(candle.open, candle.close, now));

        let accepted = match self.history.apply(candle) {
            CandleUpdate::Appended => self.detect_on_close(now),
            CandleUpdate::Replaced => None,
            CandleUpdate::Rejected => return None,
        };

        self.signals.on_tick(candle.close, now);
        accepted
    }

    /// Classify the just-closed candle (second to last in the history)
    fn detect_on_close(&mut self, now: i64) -> Option<Signal> {
        let candles = self.history.candles();
        if candles.len() <= DETECTION_MIN_HISTORY {
            return None;
        }

        let closed_index = candles.len() - 2;
        let closed = &candles[closed_index];
        let previous = &candles[closed_index - 1];
        let indicators = IndicatorEngine::snapshot(&candles[..=closed_index], &self.timeframe);

        let candidate = self
            .classifier
            .classify(closed, previous, &indicators, &self.timeframe)?;
        self.signals
            .accept(&self.symbol, &self.timeframe, candidate, now)
            .cloned()
    }

    /// Switch to another pair, dropping all per-pair state
    pub fn switch_pair(&mut self, symbol: impl Into<String>, timeframe: Timeframe) {
        self.symbol = symbol.into();
        self.timeframe = timeframe;
        self.history.clear();
        self.signals.reset();
        self.price = None;
        info!("Switched session to {} {}", self.symbol, self.timeframe);
    }

    /// Clear the candle history so it can be reloaded with [`LiveSession::seed`]
    pub fn refresh(&mut self) {
        debug!("Clearing {} {} history for reload", self.symbol, self.timeframe);
        self.history.clear();
    }

    pub fn remove_signal(&mut self, id: &str) -> Option<Signal> {
        self.signals.remove(id)
    }

    /// Backtest the current history
    pub fn run_backtest(&self, config: &BacktestConfig) -> Option<BacktestResult> {
        BacktestEngine::new(self.symbol.clone(), self.timeframe.clone(), self.account)
            .simulate(self.history.candles(), config)
    }
}
