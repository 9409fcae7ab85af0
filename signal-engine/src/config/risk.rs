//! Account risk configuration

use serde::{Deserialize, Serialize};

/// Hypothetical account used for position sizing and performance accounting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account balance in USD
    pub account_balance: f64,
    /// Fraction of the balance risked per trade (e.g., 0.01 = 1%)
    pub risk_per_trade: f64,
}

impl AccountConfig {
    /// Create a new account configuration
    pub fn new(account_balance: f64, risk_per_trade: f64) -> Self {
        Self {
            account_balance,
            risk_per_trade,
        }
    }

    /// USD amount risked on a single trade
    pub fn risk_per_trade_usd(&self) -> f64 {
        self.account_balance * self.risk_per_trade
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            account_balance: 10_000.0,
            risk_per_trade: 0.01, // 1% of balance
        }
    }
}
