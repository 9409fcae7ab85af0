//! Strategy trait and the shared signal vocabulary

use crate::strategy::MarketContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Buy/Long signal
    Buy,
    /// Sell/Short signal
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Detection strategies, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyKind {
    TrendPullback,
    MeanReversion,
    CandlePattern,
    MomentumMacd,
    BreakoutVolatility,
    EmaCross,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::TrendPullback => "TREND_PULLBACK",
            StrategyKind::MeanReversion => "MEAN_REVERSION",
            StrategyKind::CandlePattern => "CANDLE_PATTERN",
            StrategyKind::MomentumMacd => "MOMENTUM_MACD",
            StrategyKind::BreakoutVolatility => "BREAKOUT_VOLATILITY",
            StrategyKind::EmaCross => "EMA_CROSS",
        }
    }

    /// Reliability score the confidence total starts from
    pub fn base_score(&self) -> i32 {
        match self {
            StrategyKind::TrendPullback => 30,
            StrategyKind::BreakoutVolatility => 25,
            StrategyKind::MomentumMacd | StrategyKind::EmaCross => 20,
            StrategyKind::CandlePattern | StrategyKind::MeanReversion => 15,
        }
    }

    /// Strategies that want a trending market (high ADX)
    pub fn is_trend_following(&self) -> bool {
        matches!(
            self,
            StrategyKind::TrendPullback | StrategyKind::MomentumMacd | StrategyKind::EmaCross
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Confidence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    Strong,
    Medium,
    Weak,
    Lean,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Strength::Strong,
            65..=84 => Strength::Medium,
            50..=64 => Strength::Weak,
            _ => Strength::Lean,
        }
    }
}

/// Structural match produced by a strategy before confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub direction: Direction,
    pub reasoning: &'static str,
}

impl Trigger {
    pub fn buy(reasoning: &'static str) -> Self {
        Self {
            direction: Direction::Buy,
            reasoning,
        }
    }

    pub fn sell(reasoning: &'static str) -> Self {
        Self {
            direction: Direction::Sell,
            reasoning,
        }
    }
}

/// Base trait for all detection strategies
pub trait Strategy: Send + Sync {
    /// Get strategy kind
    fn kind(&self) -> StrategyKind;

    /// Check the trigger condition against the closed candle
    fn detect(&self, ctx: &MarketContext<'_>) -> Option<Trigger>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_bands() {
        assert_eq!(Strength::from_score(99), Strength::Strong);
        assert_eq!(Strength::from_score(85), Strength::Strong);
        assert_eq!(Strength::from_score(84), Strength::Medium);
        assert_eq!(Strength::from_score(65), Strength::Medium);
        assert_eq!(Strength::from_score(64), Strength::Weak);
        assert_eq!(Strength::from_score(50), Strength::Weak);
        assert_eq!(Strength::from_score(49), Strength::Lean);
        assert_eq!(Strength::from_score(10), Strength::Lean);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&StrategyKind::BreakoutVolatility).unwrap(),
            "\"BREAKOUT_VOLATILITY\""
        );
        assert_eq!(serde_json::to_string(&Strength::Lean).unwrap(), "\"LEAN\"");
    }
}
