//! Running performance totals for live signals

use crate::strategy::Outcome;
use serde::{Deserialize, Serialize};

/// Aggregate results of completed signals for one (symbol, timeframe) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub wins: u32,
    pub losses: u32,
    pub total_trades: u32,
    /// Percentage of completed trades that won
    pub win_rate: f64,
    pub realized_pnl: f64,
    /// Cumulative USD result of completed trades
    pub total_pnl: f64,
    /// Mark-to-market USD result of the signals still active
    pub unrealized_pnl: f64,
    pub avg_pnl_per_trade: f64,
}

impl PerformanceMetrics {
    /// Fold one completed trade worth `amount` USD into the totals
    pub fn record(&mut self, outcome: Outcome, amount: f64) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.total_trades = self.wins + self.losses;
        self.win_rate = self.wins as f64 / self.total_trades as f64 * 100.0;
        self.realized_pnl += amount;
        self.total_pnl += amount;
        self.avg_pnl_per_trade = self.total_pnl / self.total_trades as f64;
    }

    pub fn set_unrealized(&mut self, amount: f64) {
        self.unrealized_pnl = amount;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
