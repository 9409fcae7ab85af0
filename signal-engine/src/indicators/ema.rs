//! EMA (Exponential Moving Average) indicator

use crate::error::IndicatorError;
use crate::indicators::{invalid_parameter, series, Indicator};
use ta::indicators::ExponentialMovingAverage;
use ta::Next;

/// EMA indicator wrapper
#[derive(Debug, Clone)]
pub struct EMA {
    inner: ExponentialMovingAverage,
    period: usize,
    update_count: usize,
    last_value: Option<f64>,
}

impl EMA {
    /// Create new EMA indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            inner: ExponentialMovingAverage::new(period).map_err(invalid_parameter("EMA"))?,
            period,
            update_count: 0,
            last_value: None,
        })
    }
}

impl Indicator<f64> for EMA {
    type Output = f64;

    fn update(&mut self, value: f64) {
        let ema_value = self.inner.next(value);
        self.update_count += 1;
        if self.update_count >= self.period {
            self.last_value = Some(ema_value);
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.update_count >= self.period
    }
}

/// Calculate EMA from a series of values
pub fn calculate_ema(values: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(series(EMA::new(period)?, values.iter().copied()))
}
