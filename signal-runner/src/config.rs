use anyhow::Context;
use dotenv::dotenv;
use signal_engine::config::{AccountConfig, BacktestConfig, Timeframe};
use std::str::FromStr;

pub struct Config {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub candles_path: String,
    pub seed_candles: usize,
    pub account_balance: f64,
    pub risk_per_trade: f64,
    pub backtest_initial_balance: f64,
    pub backtest_risk_percentage: f64,
    pub backtest_candle_limit: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let account = AccountConfig::default();
        let backtest = BacktestConfig::default();

        Ok(Config {
            symbol: lookup("SIGNAL_SYMBOL").unwrap_or_else(|| "BTC/USDT".to_string()),
            timeframe: Timeframe::new(
                lookup("SIGNAL_TIMEFRAME").unwrap_or_else(|| "15m".to_string()),
            ),
            candles_path: lookup("CANDLES_PATH")
                .unwrap_or_else(|| "./data/candles.json".to_string()),
            seed_candles: parse_or(&lookup, "SEED_CANDLES", 500)?,
            account_balance: parse_or(&lookup, "ACCOUNT_BALANCE", account.account_balance)?,
            risk_per_trade: parse_or(&lookup, "RISK_PER_TRADE", account.risk_per_trade)?,
            backtest_initial_balance: parse_or(
                &lookup,
                "BACKTEST_INITIAL_BALANCE",
                backtest.initial_balance,
            )?,
            backtest_risk_percentage: parse_or(
                &lookup,
                "BACKTEST_RISK_PERCENTAGE",
                backtest.risk_percentage,
            )?,
            backtest_candle_limit: lookup("BACKTEST_CANDLE_LIMIT")
                .map(|v| v.parse())
                .transpose()
                .context("BACKTEST_CANDLE_LIMIT must be a whole number")?,
        })
    }

    pub fn account(&self) -> AccountConfig {
        AccountConfig::new(self.account_balance, self.risk_per_trade)
    }

    pub fn backtest(&self) -> BacktestConfig {
        BacktestConfig::new(
            self.backtest_initial_balance,
            self.backtest_risk_percentage,
            self.backtest_candle_limit,
        )
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", name, value)),
        None => Ok(default),
    }
}
