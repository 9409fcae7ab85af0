//! Timeframe classification and adaptive indicator periods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart timeframe (e.g., "5m", "1h", "1d")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeframe(String);

/// Trading style implied by a timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeframeClass {
    /// 1m, 5m and 15m charts
    Scalp,
    /// Everything else
    Swing,
}

impl Timeframe {
    pub fn new(timeframe: impl Into<String>) -> Self {
        Self(timeframe.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify into scalp or swing
    pub fn class(&self) -> TimeframeClass {
        match self.0.as_str() {
            "1m" | "5m" | "15m" => TimeframeClass::Scalp,
            _ => TimeframeClass::Swing,
        }
    }

    pub fn is_scalp(&self) -> bool {
        self.class() == TimeframeClass::Scalp
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timeframe {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Indicator periods for a timeframe class.
///
/// Lower timeframes use faster oscillators (RSI, MACD, MFI); the remaining
/// periods are shared by both classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPeriods {
    pub rsi: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub mfi: usize,
    pub adx: usize,
    pub atr: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
    pub stoch_rsi: usize,
    pub stoch_period: usize,
    pub stoch_k: usize,
    pub stoch_d: usize,
    pub volume_sma: usize,
}

impl IndicatorPeriods {
    pub fn for_class(class: TimeframeClass) -> Self {
        let scalp = class == TimeframeClass::Scalp;
        Self {
            rsi: if scalp { 9 } else { 14 },
            macd_fast: if scalp { 8 } else { 12 },
            macd_slow: if scalp { 21 } else { 26 },
            macd_signal: if scalp { 5 } else { 9 },
            mfi: if scalp { 9 } else { 14 },
            adx: 14,
            atr: 14,
            bb_period: 20,
            bb_std_dev: 2.0,
            stoch_rsi: 14,
            stoch_period: 14,
            stoch_k: 3,
            stoch_d: 3,
            volume_sma: 20,
        }
    }

    pub fn for_timeframe(timeframe: &Timeframe) -> Self {
        Self::for_class(timeframe.class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_class() {
        for tf in ["1m", "5m", "15m"] {
            assert_eq!(Timeframe::new(tf).class(), TimeframeClass::Scalp);
        }
        for tf in ["30m", "1h", "4h", "1d", "1w", "weird"] {
            assert_eq!(Timeframe::new(tf).class(), TimeframeClass::Swing);
        }
    }

    #[test]
    fn test_adaptive_periods() {
        let scalp = IndicatorPeriods::for_class(TimeframeClass::Scalp);
        assert_eq!((scalp.rsi, scalp.macd_fast, scalp.macd_slow, scalp.macd_signal), (9, 8, 21, 5));
        assert_eq!(scalp.mfi, 9);

        let swing = IndicatorPeriods::for_class(TimeframeClass::Swing);
        assert_eq!((swing.rsi, swing.macd_fast, swing.macd_slow, swing.macd_signal), (14, 12, 26, 9));
        assert_eq!(swing.mfi, 14);
        assert_eq!(swing.stoch_rsi, scalp.stoch_rsi);
    }
}
