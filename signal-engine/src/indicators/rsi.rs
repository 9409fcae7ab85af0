//! RSI (Relative Strength Index) indicator
//!
//! Wilder's RSI: average gain and loss are seeded with the mean of the first
//! `period` changes and then Wilder-smoothed. `RSI = 100 - 100 / (1 + RS)`.

use crate::error::IndicatorError;
use crate::indicators::{series, Indicator, WilderSmoother};

/// RSI indicator
#[derive(Debug, Clone)]
pub struct RSI {
    prev_close: Option<f64>,
    avg_gain: WilderSmoother,
    avg_loss: WilderSmoother,
    last_value: Option<f64>,
}

impl RSI {
    /// Create new RSI indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "RSI",
                reason: "period must be at least 1".to_string(),
            });
        }
        Ok(Self {
            prev_close: None,
            avg_gain: WilderSmoother::new(period),
            avg_loss: WilderSmoother::new(period),
            last_value: None,
        })
    }
}

impl Indicator<f64> for RSI {
    type Output = f64;

    fn update(&mut self, value: f64) {
        let Some(prev) = self.prev_close.replace(value) else {
            return;
        };
        let change = value - prev;
        let gain = self.avg_gain.next(change.max(0.0));
        let loss = self.avg_loss.next((-change).max(0.0));
        if let (Some(gain), Some(loss)) = (gain, loss) {
            self.last_value = Some(match (gain > 0.0, loss > 0.0) {
                // no movement at all
                (false, false) => 50.0,
                (_, false) => 100.0,
                _ => 100.0 - 100.0 / (1.0 + gain / loss),
            });
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.last_value.is_some()
    }
}

/// Calculate RSI from a series of values
pub fn calculate_rsi(values: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(series(RSI::new(period)?, values.iter().copied()))
}
