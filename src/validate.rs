//! Opt-in cross-field checks on a parsed [`Configuration`].
//!
//! Parsing alone accepts any combination of values that are individually
//! well formed, e.g. an interval whose start lies after its end. Callers that
//! need stronger guarantees pass a [`ConfigCheck`] to [`crate::parse_with`].

use thiserror::Error;

use crate::config::Configuration;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("range start {start} is after range end {end}")]
    EmptyRange { start: u32, end: u32 },

    #[error("range end {end} exceeds 100 percent")]
    RangeOutOfBounds { end: u32 },

    #[error("output count must be at least 1")]
    NoOutputs,

    #[error("{0}")]
    Custom(String),
}

pub trait ConfigCheck {
    fn check(&self, config: &Configuration) -> Result<(), ValidationError>;
}

impl<F> ConfigCheck for F
where
    F: Fn(&Configuration) -> Result<(), ValidationError>,
{
    fn check(&self, config: &Configuration) -> Result<(), ValidationError> {
        self(config)
    }
}

/// Accepts every configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unchecked;

impl ConfigCheck for Unchecked {
    fn check(&self, _config: &Configuration) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Requires a non-empty interval within 0..=100 and at least one output file.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeCheck;

impl ConfigCheck for RangeCheck {
    fn check(&self, config: &Configuration) -> Result<(), ValidationError> {
        let (start, end) = (config.range_start(), config.range_end());
        if start > end {
            return Err(ValidationError::EmptyRange { start, end });
        }
        if end > 100 {
            return Err(ValidationError::RangeOutOfBounds { end });
        }
        if config.output_count() == 0 {
            return Err(ValidationError::NoOutputs);
        }
        Ok(())
    }
}
