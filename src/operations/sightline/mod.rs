//! Sightline region of a signal light toward a target, with the part hidden
//! behind an obstruction removed.

mod calculator;
mod config;
mod select_signal;

pub use calculator::{SightlineAnalysis, SightlineObstruction};
pub use config::SightlineConfig;
pub use select_signal::{SelectSignal, SignalReport};
