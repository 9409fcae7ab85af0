//! Data management module
//!
//! OHLCV candles and the bounded per-pair candle history.

pub mod candle;
pub mod history;

pub use candle::*;
pub use history::*;
