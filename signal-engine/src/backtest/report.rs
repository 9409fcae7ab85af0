//! Backtest report generation

use crate::backtest::BacktestResult;

/// Number of trades listed at the end of the report
const RECENT_TRADES: usize = 10;

/// Backtest report
#[derive(Debug)]
pub struct BacktestReport<'a> {
    result: &'a BacktestResult,
    initial_balance: f64,
}

impl<'a> BacktestReport<'a> {
    /// Create new report from result
    pub fn new(result: &'a BacktestResult, initial_balance: f64) -> Self {
        Self {
            result,
            initial_balance,
        }
    }

    /// Format report as string
    pub fn format(&self) -> String {
        let m = &self.result.metrics;
        let final_balance = self.result.final_balance().unwrap_or(self.initial_balance);
        let mut report = format!(
            r#"
Backtest Results
================
Starting Balance: ${:.2}
Ending Balance: ${:.2}
Net Profit: {:.2}%
Number of Trades: {}
Winning Trades: {}
Losing Trades: {}
Win Rate: {:.2}%
Profit Factor: {:.2}
Maximum Drawdown: {:.2}%
"#,
            self.initial_balance,
            final_balance,
            m.net_profit_percent,
            m.total_trades,
            m.wins,
            m.losses,
            m.win_rate,
            m.profit_factor,
            m.max_drawdown,
        );

        if !self.result.trades.is_empty() {
            report.push_str("\nRecent Trades\n-------------\n");
            for trade in self.result.trades.iter().take(RECENT_TRADES) {
                let outcome = match trade.outcome {
                    Some(outcome) => format!("{:?}", outcome).to_uppercase(),
                    None => "OPEN".to_string(),
                };
                report.push_str(&format!(
                    "{:<8} {:<4} {:<19} entry {:.4} -> {:<4} {:+.2}%\n",
                    trade.id, trade.signal_type, trade.strategy, trade.entry_price, outcome, trade.pnl
                ));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtest::{BacktestMetrics, EquityPoint};

    #[test]
    fn test_format_without_trades() {
        let result = BacktestResult {
            metrics: BacktestMetrics {
                total_trades: 0,
                wins: 0,
                losses: 0,
                win_rate: 0.0,
                net_profit_percent: 0.0,
                profit_factor: 0.0,
                max_drawdown: 0.0,
            },
            trades: Vec::new(),
            equity_curve: vec![EquityPoint {
                time: 0,
                value: 1000.0,
            }],
        };
        let text = BacktestReport::new(&result, 1000.0).format();
        assert!(text.contains("Ending Balance: $1000.00"));
        assert!(text.contains("Number of Trades: 0"));
        assert!(!text.contains("Recent Trades"));
    }
}
