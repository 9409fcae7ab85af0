//! EMA9/EMA21 cross, scalp timeframes only

use crate::strategy::{MarketContext, Strategy, StrategyKind, Trigger};

pub struct EmaCross;

impl Strategy for EmaCross {
    fn kind(&self) -> StrategyKind {
        StrategyKind::EmaCross
    }

    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger> {
        if !ctx.is_scalp() {
            return None;
        }
        let ind = ctx.indicators;
        let (prev_fast, prev_slow) = (ind.prev_ema9?, ind.prev_ema21?);

        if ind.ema9 > ind.ema21 && prev_fast <= prev_slow {
            Some(Trigger::buy("Fast EMA Golden Cross (9/21)."))
        } else if ind.ema9 < ind.ema21 && prev_fast >= prev_slow {
            Some(Trigger::sell("Fast EMA Death Cross (9/21)."))
        } else {
            None
        }
    }
}
