//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building or evaluating indicators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The underlying `ta` indicator rejected its parameters
    #[error("invalid {indicator} parameters: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },

    /// Indicator evaluation produced a non-finite value
    #[error("{indicator} produced a non-finite value at index {index}")]
    NonFinite { indicator: &'static str, index: usize },

    #[error("index {index} is out of range for a series of {len} candles")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Backtest configuration rejected by validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial balance must be positive, got {0}")]
    InitialBalance(f64),

    #[error("risk percentage must be in (0, 10], got {0}")]
    RiskPercentage(f64),

    #[error("candle limit must be at least {min}, got {got}")]
    CandleLimit { min: usize, got: usize },
}

/// Reasons a backtest produces no result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktestError {
    #[error("not enough candles to backtest: have {available}, need {required}")]
    InsufficientHistory { available: usize, required: usize },

    #[error("start index {start} leaves fewer than 2 candles of {len} to simulate")]
    EmptyWindow { start: usize, len: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Indicators(#[from] IndicatorError),
}

/// Crate-level error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backtest(#[from] BacktestError),
}
