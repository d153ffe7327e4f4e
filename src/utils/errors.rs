use std::io;
use thiserror::Error;

/// Errors surfaced by the validating model layer and the YAML loader.
///
/// The derivative and matrix-builder functions themselves are pure arithmetic
/// and never return errors; degenerate inputs propagate as NaN or infinity.
/// [`crate::LinearModel`] is the fail-fast gate that rejects such inputs
/// before any matrix is built.
#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("airspeed must be positive, got {0}")]
    NonPositiveAirspeed(f64),

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("moment of inertia {axis} must be positive, got {value}")]
    NonPositiveInertia { axis: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositiveGeometry { field: &'static str, value: f64 },

    #[error("normal-force feedback is singular: |1 - Z_wdot| = {0:.3e}")]
    SingularNormalFeedback(f64),

    #[error("inertia coupling is singular: |1 - i1*i2| = {0:.3e}")]
    SingularInertiaCoupling(f64),

    #[error("failed to read model file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse model YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
