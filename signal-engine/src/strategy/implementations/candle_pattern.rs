//! Engulfing candle patterns

use crate::data::Candle;
use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

pub struct CandlePattern;

/// Red candle followed by a green one whose body covers it
pub fn is_bullish_engulfing(previous: &Candle, candle: &Candle) -> bool {
    previous.is_bearish()
        && candle.is_bullish()
        && candle.open <= previous.close
        && candle.close >= previous.open
}

/// Green candle followed by a red one whose body covers it
pub fn is_bearish_engulfing(previous: &Candle, candle: &Candle) -> bool {
    previous.is_bullish()
        && candle.is_bearish()
        && candle.open >= previous.close
        && candle.close <= previous.open
}

impl Strategy for CandlePattern {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CandlePattern
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        let ind = ctx.indicators;
        let candle = ctx.candle;

        if is_bullish_engulfing(ctx.previous, candle) {
            let near_lower_band = candle.low <= ind.bollinger.lower * 1.005;
            if ctx.is_bullish_trend() || near_lower_band || ind.rsi < 40.0 {
                return Some(Trigger::buy("Bullish Engulfing Pattern."));
            }
        }

        if is_bearish_engulfing(ctx.previous, candle) {
            let near_upper_band = candle.high >= ind.bollinger.upper * 0.995;
            if ctx.is_bearish_trend() || near_upper_band || ind.rsi > 60.0 {
                return Some(Trigger::sell("Bearish Engulfing Pattern."));
            }
        }

        None
    }
}
