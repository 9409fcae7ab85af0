//! Bollinger squeeze breakout

use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

/// Bandwidth under which the bands count as squeezed
pub fn squeeze_threshold(is_scalp: bool) -> f64 {
    if is_scalp {
        0.25
    } else {
        0.15
    }
}

pub struct BreakoutVolatility;

impl Strategy for BreakoutVolatility {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BreakoutVolatility
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        let ind = ctx.indicators;
        if ind.bandwidth >= squeeze_threshold(ctx.is_scalp()) {
            return None;
        }

        let close = ctx.close();
        if close > ind.bollinger.upper {
            Some(Trigger::buy("Volatility Squeeze Breakout (Upside)."))
        } else if close < ind.bollinger.lower {
            Some(Trigger::sell("Volatility Squeeze Breakdown (Downside)."))
        } else {
            None
        }
    }
}
