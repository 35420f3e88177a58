//! Launch configuration errors.

use thiserror::Error;

/// Reasons a [`LaunchConfig`](crate::resources::LaunchConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("tick rate {hz} Hz has no usable fixed timestep")]
    TickRateOutOfRange { hz: f64 },

    #[error("gravity {gravity} is lost against a launch vertical velocity of {vertical_velocity}")]
    GravityBelowPrecision { gravity: f32, vertical_velocity: f32 },

    #[error("origin inset {inset} does not fit inside a {width}x{height} canvas")]
    InsetOutsideCanvas { inset: f32, width: f32, height: f32 },
}
