//! Detection strategy implementations

pub mod breakout_volatility;
pub mod candle_pattern;
pub mod ema_cross;
pub mod mean_reversion;
pub mod momentum_macd;
pub mod trend_pullback;

pub use breakout_volatility::*;
pub use candle_pattern::*;
pub use ema_cross::*;
pub use mean_reversion::*;
pub use momentum_macd::*;
pub use trend_pullback::*;

use crate::strategy::Strategy;

/// All strategies in cascade order: the first structural match wins
pub fn cascade() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(TrendPullback),
        Box::new(MeanReversion),
        Box::new(CandlePattern),
        Box::new(MomentumMacd),
        Box::new(BreakoutVolatility),
        Box::new(EmaCross),
    ]
}
