//! Risk management
//!
//! ATR-based stop and target placement plus fixed-fractional position sizing.

use crate::config::{AccountConfig, TimeframeClass};
use crate::strategy::{Direction, StrategyKind};
use serde::{Deserialize, Serialize};

/// Closest a stop may sit to the entry, as a fraction of the entry price
pub const MIN_STOP_DISTANCE: f64 = 0.002;

/// ATR stand-in when no ATR is available, as a fraction of the entry price
pub const FALLBACK_ATR_FRACTION: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
}

/// Risk figures attached to a signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub risk_reward_ratio: f64,
    pub stop_loss_percent: f64,
    pub recommended_position_size_usd: f64,
    pub risk_per_trade_usd: f64,
    pub risk_level: RiskLevel,
}

/// Stop, target and risk figures for one entry
#[derive(Debug, Clone, PartialEq)]
pub struct RiskPlan {
    pub stop_loss: f64,
    pub target_price: f64,
    pub analysis: RiskAnalysis,
}

/// Risk calculator
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    account: AccountConfig,
}

impl RiskCalculator {
    /// Create new risk calculator
    pub fn new(account: AccountConfig) -> Self {
        Self { account }
    }

    /// ATR multiple for the stop distance
    pub fn stop_multiplier(kind: StrategyKind, class: TimeframeClass) -> f64 {
        match kind {
            StrategyKind::MeanReversion => 1.5,
            StrategyKind::BreakoutVolatility => 2.0,
            _ => match class {
                TimeframeClass::Scalp => 1.5,
                TimeframeClass::Swing => 2.0,
            },
        }
    }

    /// Stop-distance multiple for the target distance
    pub fn reward_multiplier(kind: StrategyKind) -> f64 {
        match kind {
            StrategyKind::MeanReversion => 2.0,
            StrategyKind::BreakoutVolatility => 3.0,
            _ => 1.5,
        }
    }

    pub fn risk_level(kind: StrategyKind) -> RiskLevel {
        match kind {
            StrategyKind::MeanReversion | StrategyKind::CandlePattern => RiskLevel::Aggressive,
            _ => RiskLevel::Moderate,
        }
    }

    /// Place stop and target around `entry` and size the position.
    ///
    /// Returns `None` when the target or stop would be non-positive.
    pub fn plan(
        &self,
        kind: StrategyKind,
        direction: Direction,
        entry: f64,
        atr: f64,
        class: TimeframeClass,
    ) -> Option<RiskPlan> {
        let atr = if atr > 0.0 {
            atr
        } else {
            entry * FALLBACK_ATR_FRACTION
        };
        let stop_distance = atr * Self::stop_multiplier(kind, class);
        let reward = Self::reward_multiplier(kind);

        let (stop_loss, target_price) = match direction {
            Direction::Buy => {
                let stop = (entry - stop_distance).min(entry * (1.0 - MIN_STOP_DISTANCE));
                (stop, entry + (entry - stop) * reward)
            }
            Direction::Sell => {
                let stop = (entry + stop_distance).max(entry * (1.0 + MIN_STOP_DISTANCE));
                (stop, entry - (stop - entry) * reward)
            }
        };
        if target_price <= 0.0 || stop_loss <= 0.0 {
            return None;
        }

        let risk_per_trade_usd = self.account.risk_per_trade_usd();
        let risk_per_unit = (entry - stop_loss).abs();
        let position_size = if risk_per_unit > 0.0 {
            (risk_per_trade_usd / risk_per_unit * entry).floor()
        } else {
            0.0
        };

        Some(RiskPlan {
            stop_loss,
            target_price,
            analysis: RiskAnalysis {
                risk_reward_ratio: round2(reward),
                stop_loss_percent: round2(risk_per_unit / entry * 100.0),
                recommended_position_size_usd: position_size,
                risk_per_trade_usd,
                risk_level: Self::risk_level(kind),
            },
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
