//! Technical indicators module
//!
//! Streaming indicators built on the `ta` crate, the Wilder-smoothed RSI,
//! ATR and ADX, StochRSI, and the snapshot engine that evaluates all of them
//! over a candle history.

pub mod adx;
pub mod atr;
pub mod bb;
pub mod ema;
pub mod engine;
pub mod macd;
pub mod mfi;
pub mod rsi;
pub mod sma;
pub mod snapshot;
pub mod stoch_rsi;
pub mod wilder;

pub use adx::*;
pub use atr::*;
pub use bb::*;
pub use ema::*;
pub use engine::*;
pub use macd::*;
pub use mfi::*;
pub use rsi::*;
pub use sma::*;
pub use snapshot::*;
pub use stoch_rsi::*;
pub use wilder::*;

use crate::error::IndicatorError;

/// Indicator trait for all indicators
pub trait Indicator<I> {
    /// Value produced once the indicator is ready
    type Output: Copy;

    /// Update indicator with new input
    fn update(&mut self, input: I);

    /// Get current indicator value
    fn value(&self) -> Option<Self::Output>;

    /// Check if indicator is ready (has enough data)
    fn is_ready(&self) -> bool;
}

/// Feed every input through the indicator, collecting the value after each step
pub fn series<I, T>(mut indicator: T, inputs: impl IntoIterator<Item = I>) -> Vec<Option<T::Output>>
where
    T: Indicator<I>,
{
    inputs
        .into_iter()
        .map(|input| {
            indicator.update(input);
            indicator.value()
        })
        .collect()
}

/// Map a `ta` constructor error into an [`IndicatorError`]
pub(crate) fn invalid_parameter<E: std::fmt::Debug>(
    indicator: &'static str,
) -> impl FnOnce(E) -> IndicatorError {
    move |e| IndicatorError::InvalidParameter {
        indicator,
        reason: format!("{:?}", e),
    }
}
