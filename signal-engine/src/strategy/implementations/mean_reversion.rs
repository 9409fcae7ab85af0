//! Mean reversion: RSI hooking back out of an extreme

use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

pub struct MeanReversion;

impl Strategy for MeanReversion {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MeanReversion
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        let (rsi, prev_rsi) = (ctx.indicators.rsi, ctx.indicators.prev_rsi);
        if prev_rsi < 30.0 && rsi >= 30.0 {
            Some(Trigger::buy("Oversold RSI Reversal (Crossing 30)."))
        } else if prev_rsi > 70.0 && rsi <= 70.0 {
            Some(Trigger::sell("Overbought RSI Reversal (Crossing 70)."))
        } else {
            None
        }
    }
}
