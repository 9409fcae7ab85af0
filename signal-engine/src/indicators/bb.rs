//! Bollinger Bands indicator

use crate::error::IndicatorError;
use crate::indicators::{invalid_parameter, series, Indicator};
use serde::{Deserialize, Serialize};
use ta::indicators::BollingerBands as TaBollingerBands;
use ta::Next;

/// Bollinger Bands result structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBResult {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BBResult {
    /// Relative band width: (upper - lower) / middle
    pub fn bandwidth(&self) -> f64 {
        if self.middle != 0.0 {
            (self.upper - self.lower) / self.middle
        } else {
            0.0
        }
    }
}

/// Bollinger Bands indicator wrapper
#[derive(Debug, Clone)]
pub struct BollingerBands {
    inner: TaBollingerBands,
    period: usize,
    update_count: usize,
    last_output: Option<BBResult>,
}

impl BollingerBands {
    /// Create new Bollinger Bands indicator
    pub fn new(period: usize, std_dev: f64) -> Result<Self, IndicatorError> {
        Ok(Self {
            inner: TaBollingerBands::new(period, std_dev)
                .map_err(invalid_parameter("BollingerBands"))?,
            period,
            update_count: 0,
            last_output: None,
        })
    }

}

impl Indicator<f64> for BollingerBands {
    type Output = BBResult;

    fn update(&mut self, value: f64) {
        let output = self.inner.next(value);
        self.update_count += 1;
        if self.update_count >= self.period {
            self.last_output = Some(BBResult {
                upper: output.upper,
                middle: output.average,
                lower: output.lower,
            });
        }
    }

    fn value(&self) -> Option<BBResult> {
        self.last_output
    }

    fn is_ready(&self) -> bool {
        self.update_count >= self.period
    }
}

/// Calculate Bollinger Bands from a series of values
pub fn calculate_bollinger(
    values: &[f64],
    period: usize,
    std_dev: f64,
) -> Result<Vec<Option<BBResult>>, IndicatorError> {
    Ok(series(BollingerBands::new(period, std_dev)?, values.iter().copied()))
}
