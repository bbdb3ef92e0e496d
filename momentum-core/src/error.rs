//! Error types for parameter validation and preset loading.

use thiserror::Error;

/// Rejected input from a parameter source.
///
/// Every scene validates its parameters before touching the physics, so a
/// zero mass or an empty explosion never turns into NaN velocities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{name} must be a positive mass, got {value}")]
    NonPositiveMass { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("fragment count must be between 1 and {max}, got {count}")]
    FragmentCount { count: usize, max: usize },

    #[error("canvas {width}x{height} leaves no room inside a {padding} px border")]
    CanvasTooSmall {
        width: f64,
        height: f64,
        padding: f64,
    },
}

/// Failure to load a YAML preset file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read preset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed preset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid preset: {0}")]
    Param(#[from] ParamError),
}

/// Reject NaN and infinities under the given field name.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

pub(crate) fn positive_mass(name: &'static str, value: f64) -> Result<f64, ParamError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NonPositiveMass { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ParamError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NonPositive { name, value })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ParamError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParamError::Negative { name, value })
    }
}
