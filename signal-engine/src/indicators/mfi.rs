//! MFI (Money Flow Index) indicator

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{invalid_parameter, series, Indicator};
use ta::indicators::MoneyFlowIndex;
use ta::Next;

/// MFI indicator wrapper
#[derive(Debug, Clone)]
pub struct MFI {
    inner: MoneyFlowIndex,
    period: usize,
    update_count: usize,
    last_value: Option<f64>,
}

impl MFI {
    /// Create new MFI indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            inner: MoneyFlowIndex::new(period).map_err(invalid_parameter("MFI"))?,
            period,
            update_count: 0,
            last_value: None,
        })
    }
}

impl<'a> Indicator<&'a Candle> for MFI {
    type Output = f64;

    fn update(&mut self, candle: &'a Candle) {
        let mfi_value = self.inner.next(candle);
        self.update_count += 1;
        if self.update_count > self.period {
            self.last_value = Some(mfi_value);
        }
    }

    fn value(&self) -> Option<f64> {
        self.last_value
    }

    fn is_ready(&self) -> bool {
        self.update_count > self.period
    }
}

/// Calculate MFI from a candle series
pub fn calculate_mfi(candles: &[Candle], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(series(MFI::new(period)?, candles.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(closes: impl Iterator<Item = f64>) -> Vec<Candle> {
        closes
            .enumerate()
            .map(|(i, c)| Candle::new(i as i64, c, c + 1.0, c - 1.0, c, 100.0 + (i % 5) as f64 * 20.0))
            .collect()
    }

    #[test]
    fn test_mfi_warmup() {
        let out = calculate_mfi(&candles((0..20).map(|i| 100.0 + i as f64)), 14).unwrap();
        assert!(out[13].is_none());
        assert!(out[14].is_some());
    }

    #[test]
    fn test_mfi_bounds_and_direction() {
        let choppy = candles((0..40).map(|i| 100.0 + ((i * 7) % 11) as f64));
        for v in calculate_mfi(&choppy, 14).unwrap().into_iter().flatten() {
            assert!(v > -1e-9 && v < 100.0 + 1e-9, "mfi = {}", v);
        }

        let rising = calculate_mfi(&candles((0..30).map(|i| 100.0 + i as f64)), 14).unwrap();
        let falling = calculate_mfi(&candles((0..30).map(|i| 130.0 - i as f64)), 14).unwrap();
        assert!(rising[29].unwrap() > 50.0);
        assert!(falling[29].unwrap() < 50.0);
    }
}
