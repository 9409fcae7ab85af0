//! Portfolio module
//!
//! Risk sizing for new signals, live performance totals and the simulated
//! balance used by the backtester.

pub mod balance;
pub mod performance;
pub mod risk;

pub use balance::*;
pub use performance::*;
pub use risk::*;
