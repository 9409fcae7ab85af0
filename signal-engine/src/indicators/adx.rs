//! ADX (Average Directional Index, Wilder)
//!
//! 1. +DM / -DM and true range from consecutive candles
//! 2. Wilder-smooth +DM, -DM and TR over `period`
//! 3. +DI = 100 * sDM+ / sTR, -DI = 100 * sDM- / sTR
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX
//!
//! The first candle only primes the previous bar, so the first ADX value
//! appears after `2 * period` candles.

use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{series, Indicator, WilderSmoother};

/// ADX indicator
#[derive(Debug, Clone)]
pub struct ADX {
    prev: Option<(f64, f64, f64)>,
    smooth_tr: WilderSmoother,
    smooth_plus_dm: WilderSmoother,
    smooth_minus_dm: WilderSmoother,
    smooth_dx: WilderSmoother,
}

impl ADX {
    /// Create new ADX indicator
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "ADX",
                reason: "period must be at least 1".to_string(),
            });
        }
        Ok(Self {
            prev: None,
            smooth_tr: WilderSmoother::new(period),
            smooth_plus_dm: WilderSmoother::new(period),
            smooth_minus_dm: WilderSmoother::new(period),
            smooth_dx: WilderSmoother::new(period),
        })
    }
}

impl<'a> Indicator<&'a Candle> for ADX {
    type Output = f64;

    fn update(&mut self, candle: &'a Candle) {
        let Some((prev_high, prev_low, prev_close)) =
            self.prev.replace((candle.high, candle.low, candle.close))
        else {
            return;
        };

        let up_move = candle.high - prev_high;
        let down_move = prev_low - candle.low;
        let plus_dm = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        let minus_dm = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };
        let tr = (candle.high - candle.low)
            .max((candle.high - prev_close).abs())
            .max((candle.low - prev_close).abs());

        let smoothed = (
            self.smooth_tr.next(tr),
            self.smooth_plus_dm.next(plus_dm),
            self.smooth_minus_dm.next(minus_dm),
        );
        let (Some(s_tr), Some(s_plus), Some(s_minus)) = smoothed else {
            return;
        };
        if s_tr <= 0.0 {
            return;
        }

        let plus_di = 100.0 * s_plus / s_tr;
        let minus_di = 100.0 * s_minus / s_tr;
        let di_sum = plus_di + minus_di;
        let dx = if di_sum == 0.0 {
            0.0
        } else {
            100.0 * (plus_di - minus_di).abs() / di_sum
        };
        self.smooth_dx.next(dx);
    }

    fn value(&self) -> Option<f64> {
        self.smooth_dx.value()
    }

    fn is_ready(&self) -> bool {
        self.smooth_dx.value().is_some()
    }
}

/// Calculate ADX from a candle series
pub fn calculate_adx(candles: &[Candle], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(series(ADX::new(period)?, candles.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending(n: usize, step: f64) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 100.0 + i as f64 * step;
                Candle::new(i as i64, base, base + 1.0, base - 1.0, base + step * 0.5, 10.0)
            })
            .collect()
    }

    #[test]
    fn test_lookback() {
        let out = calculate_adx(&trending(40, 1.0), 14).unwrap();
        assert!(out[26].is_none());
        assert!(out[27].is_some());
    }

    #[test]
    fn test_strong_trend_reads_high() {
        let out = calculate_adx(&trending(60, 2.0), 14).unwrap();
        let adx = out[59].unwrap();
        assert!(adx > 50.0 && adx <= 100.0, "adx = {}", adx);
    }
}
