//! Market context handed to each strategy

use crate::config::TimeframeClass;
use crate::data::Candle;
use crate::indicators::IndicatorSnapshot;
use crate::strategy::Direction;

/// The closed candle under evaluation, its predecessor and the indicator
/// readings at the closed candle
#[derive(Debug, Clone, Copy)]
pub struct MarketContext<'a> {
    pub candle: &'a Candle,
    pub previous: &'a Candle,
    pub indicators: &'a IndicatorSnapshot,
    pub class: TimeframeClass,
}

impl<'a> MarketContext<'a> {
    pub fn new(
        candle: &'a Candle,
        previous: &'a Candle,
        indicators: &'a IndicatorSnapshot,
        class: TimeframeClass,
    ) -> Self {
        Self {
            candle,
            previous,
            indicators,
            class,
        }
    }

    pub fn close(&self) -> f64 {
        self.candle.close
    }

    pub fn is_scalp(&self) -> bool {
        self.class == TimeframeClass::Scalp
    }

    /// Trend context: fast EMAs on scalp charts, EMA50/EMA200 on swing charts
    /// (EMA50 alone while EMA200 is unavailable)
    pub fn is_bullish_trend(&self) -> bool {
        let ind = self.indicators;
        let close = self.close();
        if self.is_scalp() {
            ind.ema9 > ind.ema21 && close > ind.ema21
        } else if ind.has_ema200() {
            ind.ema50 > ind.ema200 && close > ind.ema200
        } else {
            close > ind.ema50
        }
    }

    pub fn is_bearish_trend(&self) -> bool {
        let ind = self.indicators;
        let close = self.close();
        if self.is_scalp() {
            ind.ema9 < ind.ema21 && close < ind.ema21
        } else if ind.has_ema200() {
            ind.ema50 < ind.ema200 && close < ind.ema200
        } else {
            close < ind.ema50
        }
    }

    pub fn trend_agrees(&self, direction: Direction) -> bool {
        match direction {
            Direction::Buy => self.is_bullish_trend(),
            Direction::Sell => self.is_bearish_trend(),
        }
    }
}
