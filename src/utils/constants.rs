/// Gravitational acceleration used by the gravity terms of the state matrices (m/s^2).
pub const GRAVITY: f64 = 9.8100;

/// ISA sea-level air density (kg/m^3).
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225;

/// Threshold below which the `1 - Z_wdot` and `1 - i1*i2` denominators are
/// treated as singular by the validating model layer.
pub const SINGULARITY_TOLERANCE: f64 = 1e-9;
