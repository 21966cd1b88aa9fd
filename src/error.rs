use crate::epw::error::EpwError;
use crate::types::unit::Unit;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Epw(#[from] EpwError),

    #[error("Invalid analysis period: {reason}")]
    InvalidPeriod { reason: String },

    #[error("Invalid threshold range [{min}, {max}]: minimum must not exceed maximum")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid hour range {start}-{end}: hours must lie within 0-23")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("Invalid histogram binning (min {min}, max {max}, step {step}): {reason}")]
    InvalidBinning {
        min: f64,
        max: f64,
        step: f64,
        reason: &'static str,
    },

    #[error("Series '{name}' has no samples to summarize")]
    EmptySeries { name: String },

    #[error("Unit mismatch for '{name}': expected {expected}, found {found}")]
    UnitMismatch {
        name: String,
        expected: Unit,
        found: Unit,
    },

    #[error("Series '{name}' has {found} samples, expected {expected}")]
    SeriesLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse analysis parameters")]
    Parameters(#[from] serde_json::Error),
}
