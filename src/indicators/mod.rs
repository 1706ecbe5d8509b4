//! Indicator engine: pure whole-series transformations over raw prices.

pub mod engine;
pub mod momentum;
pub mod registry;
pub mod trend;
pub mod volatility;

pub use engine::compute_full_set;
pub use registry::{IndicatorCategory, IndicatorKind};
