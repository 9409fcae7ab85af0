//! Backtest performance metrics

use crate::portfolio::Balance;
use crate::strategy::{Outcome, Signal};
use serde::{Deserialize, Serialize};

/// Summary statistics of one backtest run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestMetrics {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// Percentage of trades that won
    pub win_rate: f64,
    pub net_profit_percent: f64,
    pub profit_factor: f64,
    /// Largest peak-to-trough decline, in percent
    pub max_drawdown: f64,
}

/// Calculate metrics from the closed trades of a run
pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn calculate(trades: &[Signal], balance: &Balance) -> BacktestMetrics {
        let wins = trades
            .iter()
            .filter(|t| t.outcome == Some(Outcome::Win))
            .count();
        let losses = trades
            .iter()
            .filter(|t| t.outcome == Some(Outcome::Loss))
            .count();
        let win_rate = if trades.is_empty() {
            0.0
        } else {
            wins as f64 / trades.len() as f64 * 100.0
        };

        BacktestMetrics {
            total_trades: trades.len(),
            wins,
            losses,
            win_rate,
            net_profit_percent: balance.net_profit_percent(),
            profit_factor: Self::profit_factor(wins, losses),
            max_drawdown: balance.max_drawdown * 100.0,
        }
    }

    /// Win/loss count ratio weighted by an assumed 2:1 payoff
    pub fn profit_factor(wins: usize, losses: usize) -> f64 {
        if losses > 0 {
            (wins * 2) as f64 / losses as f64
        } else {
            wins as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_factor_proxy() {
        assert_eq!(MetricsCalculator::profit_factor(3, 2), 3.0);
        assert_eq!(MetricsCalculator::profit_factor(4, 0), 4.0);
        assert_eq!(MetricsCalculator::profit_factor(0, 0), 0.0);
    }
}
