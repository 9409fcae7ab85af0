//! MACD histogram zero-line cross with RSI support

use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

pub struct MomentumMacd;

impl Strategy for MomentumMacd {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MomentumMacd
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        let macd = &ctx.indicators.macd;
        let rsi = ctx.indicators.rsi;

        if macd.histogram > 0.0 && macd.prev_histogram <= 0.0 && rsi > 50.0 && rsi < 70.0 {
            Some(Trigger::buy("Bullish Momentum: MACD Crossover > 0 with RSI support."))
        } else if macd.histogram < 0.0 && macd.prev_histogram >= 0.0 && rsi < 50.0 && rsi > 30.0 {
            Some(Trigger::sell("Bearish Momentum: MACD Crossover < 0 with RSI resistance."))
        } else {
            None
        }
    }
}
