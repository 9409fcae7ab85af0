//! OHLCV candle data structures

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OHLCV candle data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandleRepr")]
pub struct Candle {
    /// Candle open time (ms since epoch)
    pub time: i64,
    /// Opening price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

impl Candle {
    /// Create a new candle
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Parse an exchange kline row: `[openTime, open, high, low, close, volume, ...]`.
    ///
    /// Prices may be JSON numbers or decimal strings.
    pub fn from_kline_row(row: &[Value]) -> Option<Self> {
        if row.len() < 6 {
            return None;
        }
        let time = row[0].as_i64()?;
        let num = |v: &Value| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };
        Some(Self {
            time,
            open: num(&row[1])?,
            high: num(&row[2])?,
            low: num(&row[3])?,
            close: num(&row[4])?,
            volume: num(&row[5])?,
        })
    }

    /// Open time in whole seconds
    pub fn time_secs(&self) -> i64 {
        self.time / 1000
    }

    /// Check if candle is bullish
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if candle is bearish
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// Wire forms accepted when deserializing a candle
#[derive(Deserialize)]
#[serde(untagged)]
enum CandleRepr {
    Object {
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        #[serde(default)]
        volume: f64,
    },
    Row(Vec<Value>),
}

impl TryFrom<CandleRepr> for Candle {
    type Error = String;

    fn try_from(repr: CandleRepr) -> Result<Self, Self::Error> {
        match repr {
            CandleRepr::Object {
                time,
                open,
                high,
                low,
                close,
                volume,
            } => Ok(Candle::new(time, open, high, low, close, volume)),
            CandleRepr::Row(row) => Candle::from_kline_row(&row)
                .ok_or_else(|| format!("malformed kline row with {} fields", row.len())),
        }
    }
}

impl ta::Open for Candle {
    fn open(&self) -> f64 {
        self.open
    }
}

impl ta::High for Candle {
    fn high(&self) -> f64 {
        self.high
    }
}

impl ta::Low for Candle {
    fn low(&self) -> f64 {
        self.low
    }
}

impl ta::Close for Candle {
    fn close(&self) -> f64 {
        self.close
    }
}

impl ta::Volume for Candle {
    fn volume(&self) -> f64 {
        self.volume
    }
}
