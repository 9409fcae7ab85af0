//! Signal lifecycle module

pub mod manager;
pub mod notifier;

pub use manager::*;
pub use notifier::*;
