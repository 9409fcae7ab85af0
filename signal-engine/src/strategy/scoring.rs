//! Confidence scoring
//!
//! The score is the sum of four groups, clamped to `[MIN_CONFIDENCE, MAX_CONFIDENCE]`:
//!
//! - strategy base reliability (15-30)
//! - trend alignment: EMA stack and ADX regime (up to 25)
//! - confluence: RSI band, growing MACD histogram, StochRSI zone (up to 20)
//! - volume and volatility (up to 20)

use crate::strategy::{Direction, MarketContext, StrategyKind};

pub const MIN_CONFIDENCE: u8 = 10;
pub const MAX_CONFIDENCE: u8 = 99;

pub fn confidence_score(kind: StrategyKind, direction: Direction, ctx: &MarketContext<'_>) -> u8 {
    let ind = ctx.indicators;
    let close = ctx.close();
    let mut score = kind.base_score();

    // EMA stack
    let (stacked, right_side) = match direction {
        Direction::Buy => (ind.ema9 > ind.ema21 && ind.ema21 > ind.ema50, close > ind.ema50),
        Direction::Sell => (ind.ema9 < ind.ema21 && ind.ema21 < ind.ema50, close < ind.ema50),
    };
    if stacked {
        score += 15;
    } else if right_side {
        score += 5;
    }

    // ADX regime
    if ind.adx > 25.0 {
        if kind.is_trend_following() {
            score += 10;
        }
    } else if ind.adx < 20.0 && kind == StrategyKind::MeanReversion {
        score += 10;
    }

    let rsi_mid_band = match direction {
        Direction::Buy => ind.rsi > 45.0 && ind.rsi < 65.0,
        Direction::Sell => ind.rsi > 35.0 && ind.rsi < 55.0,
    };
    if rsi_mid_band {
        score += 10;
    }
    if ind.macd.histogram.abs() > ind.macd.prev_histogram.abs() {
        score += 5;
    }
    let stoch_favorable = match direction {
        Direction::Buy => ind.stoch_rsi.k < 40.0,
        Direction::Sell => ind.stoch_rsi.k > 60.0,
    };
    if stoch_favorable {
        score += 5;
    }

    let volume_ratio = ind.volume_ratio();
    if volume_ratio > 1.5 {
        score += 10;
    } else if volume_ratio > 1.1 {
        score += 5;
    }
    if kind == StrategyKind::BreakoutVolatility && ind.bandwidth < 0.15 {
        score += 5;
    }
    if ind.bandwidth > 0.05 {
        score += 5;
    }

    score.clamp(MIN_CONFIDENCE as i32, MAX_CONFIDENCE as i32) as u8
}
