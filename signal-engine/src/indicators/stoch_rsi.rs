//! Stochastic RSI
//!
//! The stochastic oscillator applied to the RSI series rather than to price:
//! `stoch = (rsi - min) / (max - min) * 100` over `stoch_period` RSI values,
//! `%K = SMA(stoch, k)` and `%D = SMA(%K, d)`.

use crate::error::IndicatorError;
use crate::indicators::{invalid_parameter, series, Indicator, RSI, SMA};
use serde::{Deserialize, Serialize};
use ta::indicators::{Maximum, Minimum};
use ta::Next;

/// StochRSI result structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochRSIResult {
    pub k: f64,
    pub d: f64,
}

/// StochRSI indicator
#[derive(Debug, Clone)]
pub struct StochRSI {
    rsi: RSI,
    min: Minimum,
    max: Maximum,
    stoch_period: usize,
    window_count: usize,
    k: SMA,
    d: SMA,
    last_output: Option<StochRSIResult>,
}

impl StochRSI {
    /// Create new StochRSI indicator
    pub fn new(
        rsi_period: usize,
        stoch_period: usize,
        k_period: usize,
        d_period: usize,
    ) -> Result<Self, IndicatorError> {
        Ok(Self {
            rsi: RSI::new(rsi_period)?,
            min: Minimum::new(stoch_period).map_err(invalid_parameter("StochRSI"))?,
            max: Maximum::new(stoch_period).map_err(invalid_parameter("StochRSI"))?,
            stoch_period,
            window_count: 0,
            k: SMA::new(k_period)?,
            d: SMA::new(d_period)?,
            last_output: None,
        })
    }

}

impl Indicator<f64> for StochRSI {
    type Output = StochRSIResult;

    fn update(&mut self, value: f64) {
        self.rsi.update(value);
        let Some(rsi) = self.rsi.value() else {
            return;
        };

        let lowest = self.min.next(rsi);
        let highest = self.max.next(rsi);
        self.window_count += 1;
        if self.window_count < self.stoch_period {
            return;
        }

        let range = highest - lowest;
        let stoch = if range > 0.0 {
            (rsi - lowest) / range * 100.0
        } else {
            50.0
        };

        self.k.update(stoch);
        let Some(k) = self.k.value() else {
            return;
        };
        self.d.update(k);
        if let Some(d) = self.d.value() {
            self.last_output = Some(StochRSIResult { k, d });
        }
    }

    fn value(&self) -> Option<StochRSIResult> {
        self.last_output
    }

    fn is_ready(&self) -> bool {
        self.last_output.is_some()
    }
}

/// Calculate StochRSI from a series of values
pub fn calculate_stoch_rsi(
    values: &[f64],
    rsi_period: usize,
    stoch_period: usize,
    k_period: usize,
    d_period: usize,
) -> Result<Vec<Option<StochRSIResult>>, IndicatorError> {
    Ok(series(
        StochRSI::new(rsi_period, stoch_period, k_period, d_period)?,
        values.iter().copied(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_length() {
        let values: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 11) as f64).collect();
        let out = calculate_stoch_rsi(&values, 14, 14, 3, 3).unwrap();
        // 15 for RSI, 13 more to fill the window, 2 + 2 for the smoothing
        assert!(out[30].is_none());
        assert!(out[31].is_some());
    }

    #[test]
    fn test_flat_rsi_reads_midpoint() {
        let out = calculate_stoch_rsi(&[100.0; 40], 14, 14, 3, 3).unwrap();
        let last = out[39].unwrap();
        assert_eq!(last.k, 50.0);
        assert_eq!(last.d, 50.0);
    }

    #[test]
    fn test_bounds() {
        let values: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        for out in calculate_stoch_rsi(&values, 14, 14, 3, 3).unwrap().into_iter().flatten() {
            assert!((0.0..=100.0).contains(&out.k));
            assert!((0.0..=100.0).contains(&out.d));
        }
    }
}
