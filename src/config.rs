//! Configuration: settings file, limit tables and the baseline

pub mod baseline;
pub mod limits;
pub mod settings;

pub use baseline::Baseline;
pub use limits::Limits;
pub use settings::{BaselineConfig, Config, ScanConfig};
