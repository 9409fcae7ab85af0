//! Point-in-time indicator values consumed by the strategy classifier

use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram, plus the previous histogram
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdValues {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub prev_histogram: f64,
}

/// Bollinger band levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandValues {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// StochRSI %K / %D at the current and previous candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StochRsiValues {
    pub k: f64,
    pub d: f64,
    pub prev_k: f64,
    pub prev_d: f64,
}

impl Default for StochRsiValues {
    fn default() -> Self {
        Self {
            k: 50.0,
            d: 50.0,
            prev_k: 50.0,
            prev_d: 50.0,
        }
    }
}

/// All indicator readings at one candle.
///
/// Fields that could not be computed hold neutral values: RSI, StochRSI and
/// MFI read 50, ADX reads 25, MACD reads 0, bands and short EMAs collapse onto
/// the close, and EMA200 reads 0 until 200 candles are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub prev_rsi: f64,
    pub macd: MacdValues,
    pub bollinger: BandValues,
    pub bandwidth: f64,
    pub ema9: f64,
    pub ema21: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub prev_ema9: Option<f64>,
    pub prev_ema21: Option<f64>,
    pub volume: f64,
    pub volume_sma: f64,
    pub stoch_rsi: StochRsiValues,
    pub adx: f64,
    pub atr: f64,
    pub mfi: f64,
}

impl IndicatorSnapshot {
    /// Neutral readings for a candle with the given close and volume
    pub fn neutral(close: f64, volume: f64) -> Self {
        Self {
            rsi: 50.0,
            prev_rsi: 50.0,
            macd: MacdValues::default(),
            bollinger: BandValues {
                upper: close,
                middle: close,
                lower: close,
            },
            bandwidth: 0.0,
            ema9: close,
            ema21: close,
            ema50: close,
            ema200: 0.0,
            prev_ema9: None,
            prev_ema21: None,
            volume,
            volume_sma: 0.0,
            stoch_rsi: StochRsiValues::default(),
            adx: 25.0,
            atr: 0.0,
            mfi: 50.0,
        }
    }

    pub fn has_ema200(&self) -> bool {
        self.ema200 > 0.0
    }

    /// Current volume relative to its moving average (1.0 when unknown)
    pub fn volume_ratio(&self) -> f64 {
        if self.volume_sma > 0.0 {
            self.volume / self.volume_sma
        } else {
            1.0
        }
    }
}
