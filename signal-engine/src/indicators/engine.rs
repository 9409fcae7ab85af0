//! Indicator engine
//!
//! Computes every indicator once over a candle history and hands out
//! [`IndicatorSnapshot`]s at any index. The live path snapshots the last
//! closed candle; the backtester walks the same series candle by candle, so
//! both paths see identical readings.

use crate::config::{IndicatorPeriods, Timeframe};
use crate::data::Candle;
use crate::error::IndicatorError;
use crate::indicators::{
    series, BBResult, BandValues, BollingerBands, IndicatorSnapshot, MACDResult, MacdValues,
    StochRSI, StochRSIResult, StochRsiValues, ADX, ATR, EMA, MACD, MFI, RSI, SMA,
};
use tracing::{debug, warn};

/// Candles required before any indicator is reported
pub const MIN_HISTORY: usize = 30;

/// Per-candle indicator series for one history
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    periods: IndicatorPeriods,
    closes: Vec<f64>,
    volumes: Vec<f64>,
    rsi: Vec<Option<f64>>,
    macd: Vec<Option<MACDResult>>,
    bollinger: Vec<Option<BBResult>>,
    ema9: Vec<Option<f64>>,
    ema21: Vec<Option<f64>>,
    ema50: Vec<Option<f64>>,
    ema200: Vec<Option<f64>>,
    volume_sma: Vec<Option<f64>>,
    stoch_rsi: Vec<Option<StochRSIResult>>,
    adx: Vec<Option<f64>>,
    atr: Vec<Option<f64>>,
    mfi: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Compute all series with the periods for `timeframe`
    pub fn compute(candles: &[Candle], timeframe: &Timeframe) -> Result<Self, IndicatorError> {
        Self::with_periods(candles, IndicatorPeriods::for_timeframe(timeframe))
    }

    /// Compute all series with explicit periods
    pub fn with_periods(
        candles: &[Candle],
        periods: IndicatorPeriods,
    ) -> Result<Self, IndicatorError> {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
        let p = &periods;

        let result = Self {
            rsi: series(RSI::new(p.rsi)?, closes.iter().copied()),
            macd: series(
                MACD::new(p.macd_fast, p.macd_slow, p.macd_signal)?,
                closes.iter().copied(),
            ),
            bollinger: series(
                BollingerBands::new(p.bb_period, p.bb_std_dev)?,
                closes.iter().copied(),
            ),
            ema9: series(EMA::new(9)?, closes.iter().copied()),
            ema21: series(EMA::new(21)?, closes.iter().copied()),
            ema50: series(EMA::new(50)?, closes.iter().copied()),
            ema200: series(EMA::new(200)?, closes.iter().copied()),
            volume_sma: series(SMA::new(p.volume_sma)?, volumes.iter().copied()),
            stoch_rsi: series(
                StochRSI::new(p.stoch_rsi, p.stoch_period, p.stoch_k, p.stoch_d)?,
                closes.iter().copied(),
            ),
            adx: series(ADX::new(p.adx)?, candles.iter()),
            atr: series(ATR::new(p.atr)?, candles.iter()),
            mfi: series(MFI::new(p.mfi)?, candles.iter()),
            periods,
            closes,
            volumes,
        };

        debug!(
            "Computed indicator series over {} candles (rsi {}, macd {}/{}/{})",
            result.len(),
            periods.rsi,
            periods.macd_fast,
            periods.macd_slow,
            periods.macd_signal
        );
        Ok(result)
    }

    /// Number of candles covered
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn periods(&self) -> &IndicatorPeriods {
        &self.periods
    }

    /// Snapshot at `index`, treating candles after it as not yet seen
    pub fn try_snapshot_at(&self, index: usize) -> Result<IndicatorSnapshot, IndicatorError> {
        if index >= self.len() {
            return Err(IndicatorError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let close = self.closes[index];
        let volume = self.volumes[index];
        let mut snapshot = IndicatorSnapshot::neutral(close, volume);
        if index + 1 < MIN_HISTORY {
            return Ok(snapshot);
        }

        let prev = index.checked_sub(1);
        let at = |s: &Vec<Option<f64>>| s[index];
        let before = |s: &Vec<Option<f64>>| prev.and_then(|p| s[p]);

        snapshot.rsi = at(&self.rsi).unwrap_or(50.0);
        snapshot.prev_rsi = before(&self.rsi).unwrap_or(50.0);

        if let Some(macd) = self.macd[index] {
            snapshot.macd = MacdValues {
                macd: macd.macd,
                signal: macd.signal,
                histogram: macd.histogram,
                prev_histogram: prev
                    .and_then(|p| self.macd[p])
                    .map_or(0.0, |m| m.histogram),
            };
        }

        if let Some(bands) = self.bollinger[index] {
            snapshot.bollinger = BandValues {
                upper: bands.upper,
                middle: bands.middle,
                lower: bands.lower,
            };
            snapshot.bandwidth = bands.bandwidth();
        }

        snapshot.ema9 = at(&self.ema9).unwrap_or(close);
        snapshot.ema21 = at(&self.ema21).unwrap_or(close);
        snapshot.ema50 = at(&self.ema50).unwrap_or(close);
        snapshot.ema200 = at(&self.ema200).unwrap_or(0.0);
        snapshot.prev_ema9 = before(&self.ema9);
        snapshot.prev_ema21 = before(&self.ema21);

        snapshot.volume_sma = at(&self.volume_sma).unwrap_or(0.0);

        if let Some(stoch) = self.stoch_rsi[index] {
            let previous = prev.and_then(|p| self.stoch_rsi[p]);
            snapshot.stoch_rsi = StochRsiValues {
                k: stoch.k,
                d: stoch.d,
                prev_k: previous.map_or(50.0, |s| s.k),
                prev_d: previous.map_or(50.0, |s| s.d),
            };
        }

        snapshot.adx = at(&self.adx).unwrap_or(25.0);
        snapshot.atr = at(&self.atr).unwrap_or(0.0);
        snapshot.mfi = at(&self.mfi).unwrap_or(50.0);

        check_finite(&snapshot, index)?;
        Ok(snapshot)
    }

    /// Snapshot at `index`, falling back to neutral readings on error
    pub fn snapshot_at(&self, index: usize) -> IndicatorSnapshot {
        self.try_snapshot_at(index).unwrap_or_else(|e| {
            warn!("Indicator snapshot failed, using neutral values: {}", e);
            let close = self.closes.get(index).copied().unwrap_or(0.0);
            let volume = self.volumes.get(index).copied().unwrap_or(0.0);
            IndicatorSnapshot::neutral(close, volume)
        })
    }
}

fn check_finite(snapshot: &IndicatorSnapshot, index: usize) -> Result<(), IndicatorError> {
    let fields: [(&'static str, f64); 14] = [
        ("RSI", snapshot.rsi),
        ("RSI", snapshot.prev_rsi),
        ("MACD", snapshot.macd.macd),
        ("MACD", snapshot.macd.signal),
        ("MACD", snapshot.macd.prev_histogram),
        ("BollingerBands", snapshot.bollinger.upper),
        ("BollingerBands", snapshot.bollinger.lower),
        ("BollingerBands", snapshot.bandwidth),
        ("EMA", snapshot.ema9 + snapshot.ema21 + snapshot.ema50 + snapshot.ema200),
        ("SMA", snapshot.volume_sma),
        ("StochRSI", snapshot.stoch_rsi.k + snapshot.stoch_rsi.d),
        ("ADX", snapshot.adx),
        ("ATR", snapshot.atr),
        ("MFI", snapshot.mfi),
    ];
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(indicator, _)) => Err(IndicatorError::NonFinite { indicator, index }),
        None => Ok(()),
    }
}

/// Entry point for one-off snapshots of a candle history
pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Snapshot at the last candle of `candles`.
    ///
    /// Never fails: errors are logged and neutral readings returned.
    pub fn snapshot(candles: &[Candle], timeframe: &Timeframe) -> IndicatorSnapshot {
        Self::try_snapshot(candles, timeframe).unwrap_or_else(|e| {
            warn!("Indicator computation failed, using neutral values: {}", e);
            match candles.last() {
                Some(last) => IndicatorSnapshot::neutral(last.close, last.volume),
                None => IndicatorSnapshot::neutral(0.0, 0.0),
            }
        })
    }

    /// Snapshot at the last candle of `candles`, surfacing errors
    pub fn try_snapshot(
        candles: &[Candle],
        timeframe: &Timeframe,
    ) -> Result<IndicatorSnapshot, IndicatorError> {
        let Some(last) = candles.last() else {
            return Ok(IndicatorSnapshot::neutral(0.0, 0.0));
        };
        if candles.len() < MIN_HISTORY {
            return Ok(IndicatorSnapshot::neutral(last.close, last.volume));
        }
        IndicatorSeries::compute(candles, timeframe)?.try_snapshot_at(candles.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.3).sin() * 4.0 + i as f64 * 0.05;
                let volume = 50.0 + (i % 7) as f64;
                Candle::new(i as i64 * 60_000, close - 0.2, close + 0.8, close - 0.9, close, volume)
            })
            .collect()
    }

    #[test]
    fn test_short_history_is_neutral() {
        let candles = wave(29);
        let snapshot = IndicatorEngine::snapshot(&candles, &Timeframe::new("1h"));
        let last = candles[28];
        assert_eq!(snapshot, IndicatorSnapshot::neutral(last.close, last.volume));
        assert_eq!(snapshot.rsi, 50.0);
        assert_eq!(snapshot.adx, 25.0);
        assert_eq!(snapshot.ema200, 0.0);
    }

    #[test]
    fn test_empty_history() {
        let snapshot = IndicatorEngine::snapshot(&[], &Timeframe::new("1h"));
        assert_eq!(snapshot.volume, 0.0);
        assert_eq!(snapshot.bollinger.middle, 0.0);
    }

    #[test]
    fn test_ema200_needs_200_candles() {
        let tf = Timeframe::new("4h");
        assert_eq!(IndicatorEngine::snapshot(&wave(199), &tf).ema200, 0.0);
        assert!(IndicatorEngine::snapshot(&wave(200), &tf).has_ema200());
    }

    #[test]
    fn test_series_matches_one_off_snapshot() {
        let candles = wave(120);
        let tf = Timeframe::new("5m");
        let series = IndicatorSeries::compute(&candles, &tf).unwrap();
        for end in [30, 75, 120] {
            let one_off = IndicatorEngine::snapshot(&candles[..end], &tf);
            assert_eq!(series.snapshot_at(end - 1), one_off);
        }
    }

    #[test]
    fn test_populated_snapshot() {
        let snapshot = IndicatorEngine::snapshot(&wave(120), &Timeframe::new("1h"));
        assert!((0.0..=100.0).contains(&snapshot.rsi));
        assert!(snapshot.bollinger.upper > snapshot.bollinger.lower);
        assert!(snapshot.bandwidth > 0.0);
        assert!(snapshot.atr > 0.0);
        assert!(snapshot.volume_sma > 0.0);
        assert!(snapshot.prev_ema9.is_some());
    }

    #[test]
    fn test_out_of_range_index() {
        let series = IndicatorSeries::compute(&wave(40), &Timeframe::new("1h")).unwrap();
        assert_eq!(
            series.try_snapshot_at(40),
            Err(IndicatorError::IndexOutOfRange { index: 40, len: 40 })
        );
    }
}
