//! Trend pullback: StochRSI crossover in the direction of the trend

use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

pub struct TrendPullback;

impl Strategy for TrendPullback {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TrendPullback
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        let stoch = &ctx.indicators.stoch_rsi;
        let cross_up = stoch.k > stoch.d && stoch.prev_k <= stoch.prev_d;
        let cross_down = stoch.k < stoch.d && stoch.prev_k >= stoch.prev_d;

        if ctx.is_bullish_trend() && cross_up {
            // not already overbought
            (stoch.k < 80.0).then(|| Trigger::buy("Bullish Trend Pullback with StochRSI crossover."))
        } else if ctx.is_bearish_trend() && cross_down {
            (stoch.k > 20.0).then(|| Trigger::sell("Bearish Trend Pullback with StochRSI crossover."))
        } else {
            None
        }
    }
}
