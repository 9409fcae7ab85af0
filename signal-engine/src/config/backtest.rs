//! Backtest configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Smallest candle window a caller may request
pub const MIN_CANDLE_LIMIT: usize = 100;

/// Upper bound for the per-trade risk percentage
pub const MAX_RISK_PERCENTAGE: f64 = 10.0;

/// Backtest run configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Starting balance in USD
    pub initial_balance: f64,
    /// Percentage of the running balance risked per trade (e.g., 1.0 = 1%)
    pub risk_percentage: f64,
    /// Number of most recent candles to replay (None = whole history)
    pub candle_limit: Option<usize>,
}

impl BacktestConfig {
    /// Create a new configuration
    pub fn new(initial_balance: f64, risk_percentage: f64, candle_limit: Option<usize>) -> Self {
        Self {
            initial_balance,
            risk_percentage,
            candle_limit,
        }
    }

    /// Set the candle limit
    pub fn with_candle_limit(mut self, candle_limit: usize) -> Self {
        self.candle_limit = Some(candle_limit);
        self
    }

    /// Validate ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_balance > 0.0) {
            return Err(ConfigError::InitialBalance(self.initial_balance));
        }
        if !(self.risk_percentage > 0.0 && self.risk_percentage <= MAX_RISK_PERCENTAGE) {
            return Err(ConfigError::RiskPercentage(self.risk_percentage));
        }
        if let Some(limit) = self.candle_limit {
            if limit < MIN_CANDLE_LIMIT {
                return Err(ConfigError::CandleLimit {
                    min: MIN_CANDLE_LIMIT,
                    got: limit,
                });
            }
        }
        Ok(())
    }
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            initial_balance: 10_000.0,
            risk_percentage: 1.0,
            candle_limit: None,
        }
    }
}
