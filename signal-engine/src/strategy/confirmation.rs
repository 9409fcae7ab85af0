//! Confirmation filter applied after a strategy matches

use crate::indicators::IndicatorSnapshot;
use crate::strategy::{Direction, StrategyKind};

/// MACD histogram moving in the trade's favor, or already past zero
pub fn macd_improving(direction: Direction, ind: &IndicatorSnapshot) -> bool {
    let macd = &ind.macd;
    match direction {
        Direction::Buy => macd.histogram > macd.prev_histogram || macd.histogram > 0.0,
        Direction::Sell => macd.histogram < macd.prev_histogram || macd.histogram < 0.0,
    }
}

/// RSI not already in the extreme the trade would run into
pub fn rsi_safe(direction: Direction, ind: &IndicatorSnapshot) -> bool {
    match direction {
        Direction::Buy => ind.rsi < 75.0,
        Direction::Sell => ind.rsi > 25.0,
    }
}

/// Mean reversion trades extremes and is always confirmed; everything else
/// needs both MACD momentum and a safe RSI.
pub fn is_confirmed(kind: StrategyKind, direction: Direction, ind: &IndicatorSnapshot) -> bool {
    kind == StrategyKind::MeanReversion || (macd_improving(direction, ind) && rsi_safe(direction, ind))
}
