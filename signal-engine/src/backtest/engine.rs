//! Backtesting engine
//!
//! Replays a candle history through the indicator engine and the strategy
//! classifier with at most one open position at a time.

use crate::backtest::{BacktestMetrics, MetricsCalculator};
use crate::config::{AccountConfig, BacktestConfig, Timeframe};
use crate::data::Candle;
use crate::error::BacktestError;
use crate::indicators::IndicatorSeries;
use crate::portfolio::Balance;
use crate::strategy::{Outcome, Signal, StrategyClassifier};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Fewest candles a backtest will run on
pub const MIN_BACKTEST_CANDLES: usize = 60;

/// Candles skipped at the start of the window so indicators can settle
pub const WARMUP_CANDLES: usize = 50;

/// Balance after a candle (time in unix seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub time: i64,
    pub value: f64,
}

/// Backtest result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResult {
    pub metrics: BacktestMetrics,
    /// Closed trades, most recent first
    pub trades: Vec<Signal>,
    pub equity_curve: Vec<EquityPoint>,
}

impl BacktestResult {
    /// Balance at the end of the run
    pub fn final_balance(&self) -> Option<f64> {
        self.equity_curve.last().map(|p| p.value)
    }
}

/// Backtesting engine
pub struct BacktestEngine {
    symbol: String,
    timeframe: Timeframe,
    classifier: StrategyClassifier,
}

impl BacktestEngine {
    /// Create new backtest engine
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe, account: AccountConfig) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            classifier: StrategyClassifier::new(account),
        }
    }

    /// Run backtest, returning `None` when it cannot be run.
    ///
    /// The reason is logged.
    pub fn simulate(&self, candles: &[Candle], config: &BacktestConfig) -> Option<BacktestResult> {
        match self.run(candles, config) {
            Ok(result) => Some(result),
            Err(e @ BacktestError::Indicators(_)) => {
                error!("Backtest execution error: {}", e);
                None
            }
            Err(e) => {
                info!("Backtest not run: {}", e);
                None
            }
        }
    }

    /// Run backtest
    pub fn run(
        &self,
        candles: &[Candle],
        config: &BacktestConfig,
    ) -> Result<BacktestResult, BacktestError> {
        config.validate()?;

        let len = candles.len();
        if len < MIN_BACKTEST_CANDLES {
            return Err(BacktestError::InsufficientHistory {
                available: len,
                required: MIN_BACKTEST_CANDLES,
            });
        }

        let limit = config.candle_limit.unwrap_or(len).min(len);
        let start = (len - limit).max(WARMUP_CANDLES);
        if start >= len - 2 {
            return Err(BacktestError::EmptyWindow { start, len });
        }

        let series = IndicatorSeries::compute(candles, &self.timeframe)?;
        info!(
            "Backtesting {} {} over candles {}..{} (balance {}, risk {}%)",
            self.symbol,
            self.timeframe,
            start,
            len - 1,
            config.initial_balance,
            config.risk_percentage
        );

        let mut balance = Balance::new(config.initial_balance);
        let mut trades: Vec<Signal> = Vec::new();
        let mut equity_curve = vec![EquityPoint {
            time: candles[start].time_secs(),
            value: balance.total,
        }];
        let mut open_trade: Option<Signal> = None;

        for i in start..len - 1 {
            let candle = &candles[i];

            if let Some(mut trade) = open_trade.take() {
                match trade.exit_within(candle.high, candle.low) {
                    Some(outcome) => {
                        let risk_amount = balance.total * config.risk_percentage / 100.0;
                        let amount = match outcome {
                            Outcome::Win => risk_amount * trade.risk_analysis.risk_reward_ratio,
                            Outcome::Loss => -risk_amount,
                        };
                        balance.apply(amount);
                        trade.complete(outcome, candle.time);
                        debug!(
                            "Closed {} {} as {:?} at candle {} ({:.2}%)",
                            trade.id, trade.signal_type, outcome, i, trade.pnl
                        );
                        trades.push(trade);
                    }
                    None => open_trade = Some(trade),
                }
                equity_curve.push(EquityPoint {
                    time: candle.time_secs(),
                    value: balance.total,
                });
                continue;
            }

            let Some(previous) = i.checked_sub(1).map(|p| &candles[p]) else {
                continue;
            };
            let snapshot = series.snapshot_at(i);
            let candidate = self
                .classifier
                .classify(candle, previous, &snapshot, &self.timeframe);
            if let Some(candidate) = candidate {
                open_trade = Some(Signal::from_candidate(
                    format!("bt-{}", i),
                    self.symbol.clone(),
                    self.timeframe.clone(),
                    candidate,
                    candle.time,
                ));
            }
        }

        trades.reverse();
        let metrics = MetricsCalculator::calculate(&trades, &balance);
        info!(
            "Backtest finished: {} trades, win rate {:.1}%, net {:.2}%",
            metrics.total_trades, metrics.win_rate, metrics.net_profit_percent
        );

        Ok(BacktestResult {
            metrics,
            trades,
            equity_curve,
        })
    }
}
