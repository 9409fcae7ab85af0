//! Simulated account balance with drawdown tracking

use serde::{Deserialize, Serialize};

/// Simulated account balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Starting balance
    pub initial: f64,
    /// Current balance
    pub total: f64,
    /// Highest balance seen so far
    pub peak: f64,
    /// Largest peak-to-trough decline, as a fraction of the peak
    pub max_drawdown: f64,
}

impl Balance {
    /// Create new balance
    pub fn new(initial: f64) -> Self {
        Self {
            initial,
            total: initial,
            peak: initial,
            max_drawdown: 0.0,
        }
    }

    /// Apply a realized profit (or loss, when negative)
    pub fn apply(&mut self, amount: f64) {
        self.total += amount;
        if self.total > self.peak {
            self.peak = self.total;
        }
        if self.peak > 0.0 {
            let drawdown = (self.peak - self.total) / self.peak;
            if drawdown > self.max_drawdown {
                self.max_drawdown = drawdown;
            }
        }
    }

    /// Net result relative to the starting balance, in percent
    pub fn net_profit_percent(&self) -> f64 {
        (self.total - self.initial) / self.initial * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawdown_from_peak() {
        let mut balance = Balance::new(1000.0);
        balance.apply(200.0);
        balance.apply(-300.0);
        balance.apply(50.0);
        assert_eq!(balance.peak, 1200.0);
        assert!((balance.max_drawdown - 0.25).abs() < 1e-12);
        assert!((balance.net_profit_percent() - (-5.0)).abs() < 1e-9);
    }
}
