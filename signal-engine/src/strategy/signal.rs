//! Candidate and live trade signals

use crate::config::Timeframe;
use crate::indicators::IndicatorSnapshot;
use crate::portfolio::RiskAnalysis;
use crate::strategy::{Direction, Strength, StrategyKind};
use serde::{Deserialize, Serialize};

/// Signal status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalStatus {
    Active,
    Completed,
    /// Reserved; not produced by current policy
    Expired,
    /// Reserved; not produced by current policy
    Cancelled,
}

/// How a completed signal resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Loss,
}

/// Classifier output before it is accepted as a signal
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub direction: Direction,
    pub strategy: StrategyKind,
    pub reasoning: String,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    pub confidence: u8,
    pub strength: Strength,
    pub risk_analysis: RiskAnalysis,
    pub indicators: IndicatorSnapshot,
}

/// Trade signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub symbol: String,
    pub timeframe: Timeframe,
    #[serde(rename = "type")]
    pub signal_type: Direction,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target_price: f64,
    pub strategy: StrategyKind,
    pub confidence: u8,
    pub strength: Strength,
    pub reasoning: String,
    pub indicators: IndicatorSnapshot,
    pub risk_analysis: RiskAnalysis,
    /// Creation time (ms since epoch)
    pub created_at: i64,
    pub status: SignalStatus,
    pub current_price: f64,
    /// Profit/loss in percent of the entry price
    pub pnl: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Signal {
    /// Instantiate an ACTIVE signal from an accepted candidate
    pub fn from_candidate(
        id: impl Into<String>,
        symbol: impl Into<String>,
        timeframe: Timeframe,
        candidate: Candidate,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            timeframe,
            signal_type: candidate.direction,
            entry_price: candidate.entry_price,
            stop_loss: candidate.stop_loss,
            target_price: candidate.target_price,
            strategy: candidate.strategy,
            confidence: candidate.confidence,
            strength: candidate.strength,
            reasoning: candidate.reasoning,
            indicators: candidate.indicators,
            risk_analysis: candidate.risk_analysis,
            created_at,
            status: SignalStatus::Active,
            current_price: candidate.entry_price,
            pnl: 0.0,
            outcome: None,
            completed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SignalStatus::Active
    }

    /// Percent result if closed at `price`
    pub fn pnl_at(&self, price: f64) -> f64 {
        let change = (price - self.entry_price) / self.entry_price * 100.0;
        match self.signal_type {
            Direction::Buy => change,
            Direction::Sell => -change,
        }
    }

    /// Exit triggered by a single price, target checked before stop
    pub fn exit_at(&self, price: f64) -> Option<Outcome> {
        self.exit_within(price, price)
    }

    /// Exit triggered anywhere inside a `[low, high]` range, target checked
    /// before stop
    pub fn exit_within(&self, high: f64, low: f64) -> Option<Outcome> {
        match self.signal_type {
            Direction::Buy if high >= self.target_price => Some(Outcome::Win),
            Direction::Buy if low <= self.stop_loss => Some(Outcome::Loss),
            Direction::Sell if low <= self.target_price => Some(Outcome::Win),
            Direction::Sell if high >= self.stop_loss => Some(Outcome::Loss),
            _ => None,
        }
    }

    /// Price at which an outcome is realized
    pub fn exit_price(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win => self.target_price,
            Outcome::Loss => self.stop_loss,
        }
    }

    /// Close the signal at its target or stop.
    ///
    /// Returns `true` only on the first completion; later calls leave the
    /// outcome and completion time untouched.
    pub fn complete(&mut self, outcome: Outcome, at: i64) -> bool {
        if self.completed_at.is_some() {
            return false;
        }
        self.status = SignalStatus::Completed;
        self.outcome = Some(outcome);
        self.pnl = self.pnl_at(self.exit_price(outcome));
        self.completed_at = Some(at);
        true
    }
}
