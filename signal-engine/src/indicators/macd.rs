//! MACD (Moving Average Convergence Divergence) indicator

use crate::error::IndicatorError;
use crate::indicators::{invalid_parameter, series, Indicator};
use serde::{Deserialize, Serialize};
use ta::indicators::MovingAverageConvergenceDivergence;
use ta::Next;

/// MACD result structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MACDResult {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD indicator wrapper
#[derive(Debug, Clone)]
pub struct MACD {
    inner: MovingAverageConvergenceDivergence,
    slow_period: usize,
    signal_period: usize,
    update_count: usize,
    last_output: Option<MACDResult>,
}

impl MACD {
    /// Create new MACD indicator
    pub fn new(
        fast_period: usize,
        slow_period: usize,
        signal_period: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            inner: MovingAverageConvergenceDivergence::new(fast_period, slow_period, signal_period)
                .map_err(invalid_parameter("MACD"))?,
            slow_period,
            signal_period,
            update_count: 0,
            last_output: None,
        })
    }

    fn warmup(&self) -> usize {
        // slow EMA window, then a full signal window on top of it
        self.slow_period + self.signal_period - 1
    }
}

impl Indicator<f64> for MACD {
    type Output = MACDResult;

    fn update(&mut self, value: f64) {
        let output = self.inner.next(value);
        self.update_count += 1;
        if self.update_count >= self.warmup() {
            self.last_output = Some(MACDResult {
                macd: output.macd,
                signal: output.signal,
                histogram: output.histogram,
            });
        }
    }

    fn value(&self) -> Option<MACDResult> {
        self.last_output
    }

    fn is_ready(&self) -> bool {
        self.update_count >= self.warmup()
    }
}

/// Calculate MACD from a series of values
pub fn calculate_macd(
    values: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<Vec<Option<MACDResult>>, IndicatorError> {
    Ok(series(
        MACD::new(fast_period, slow_period, signal_period)?,
        values.iter().copied(),
    ))
}
