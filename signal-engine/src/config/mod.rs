//! Configuration module

pub mod backtest;
pub mod risk;
pub mod strategy;

pub use backtest::*;
pub use risk::*;
pub use strategy::*;
