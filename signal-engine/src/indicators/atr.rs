//! ATR (Average True Range) indicator

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{series, Indicator, WilderSmoother};
use ta::indicators::TrueRange;
use ta::Next;

/// ATR indicator: Wilder-smoothed true range
#[derive(Debug, Clone)]
pub struct ATR {
    true_range: TrueRange,
    smoother: WilderSmoother,
    primed: bool,
}

impl ATR {
    /// Create new ATR indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "ATR",
                reason: "period must be at least 1".to_string(),
            });
        }
        Ok(Self {
            true_range: TrueRange::new(),
            smoother: WilderSmoother::new(period),
            primed: false,
        })
    }
}

impl<'a> Indicator<&'a Candle> for ATR {
    type Output = f64;

    fn update(&mut self, candle: &'a Candle) {
        let tr = self.true_range.next(candle);
        // first true range has no previous close
        if !self.primed {
            self.primed = true;
            return;
        }
        self.smoother.next(tr);
    }

    fn value(&self) -> Option<f64> {
        self.smoother.value()
    }

    fn is_ready(&self) -> bool {
        self.smoother.value().is_some()
    }
}

/// Calculate ATR from a candle series
pub fn calculate_atr(candles: &[Candle], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(series(ATR::new(period)?, candles.iter()))
}
