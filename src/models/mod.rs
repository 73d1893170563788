//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod signal;

pub use indicators::{IndicatorSnapshot, PriceSeries, NEUTRAL_RSI};
pub use market::{Market, UnknownMarket};
pub use signal::Signal;
