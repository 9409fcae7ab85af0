//! Strategy classifier module
//!
//! Six detection strategies evaluated as an ordered cascade, followed by the
//! confirmation filter, confidence scoring and risk construction.

pub mod base;
pub mod classifier;
pub mod confirmation;
pub mod context;
pub mod implementations;
pub mod scoring;
pub mod signal;

pub use base::*;
pub use classifier::*;
pub use confirmation::*;
pub use context::*;
pub use implementations::*;
pub use scoring::*;
pub use signal::*;
