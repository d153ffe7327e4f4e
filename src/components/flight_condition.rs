use serde::{Deserialize, Serialize};

use crate::utils::DynamicsError;

/// Steady trim condition about which the small-perturbation equations are
/// linearized.
///
/// All angles are in radians. The dynamic pressure is carried explicitly and
/// is never re-derived from density and airspeed; callers that want the two
/// consistent by construction should use [`FlightCondition::level`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    /// Air density at the trim altitude (kg/m^3).
    pub density: f64,
    /// True airspeed u0 (m/s). Must be positive.
    pub airspeed: f64,
    /// Dynamic pressure q0 (Pa).
    pub dynamic_pressure: f64,
    /// Mach number at the trim point.
    pub mach: f64,
    /// Flight-path angle gamma0 (rad).
    pub gamma: f64,
    /// Pitch reference angle theta0 (rad).
    pub theta: f64,
}

impl FlightCondition {
    pub fn new(
        density: f64,
        airspeed: f64,
        dynamic_pressure: f64,
        mach: f64,
        gamma: f64,
        theta: f64,
    ) -> Self {
        Self {
            density,
            airspeed,
            dynamic_pressure,
            mach,
            gamma,
            theta,
        }
    }

    /// Level-flight condition with `q0 = 0.5 * rho * u0^2` and zero
    /// flight-path and pitch angles.
    pub fn level(density: f64, airspeed: f64, mach: f64) -> Self {
        Self::new(
            density,
            airspeed,
            0.5 * density * airspeed * airspeed,
            mach,
            0.0,
            0.0,
        )
    }

    /// Climbing or descending flight at flight-path angle `gamma`, with
    /// `theta0 = gamma0` (no steady angle of attack offset).
    pub fn climbing(density: f64, airspeed: f64, mach: f64, gamma: f64) -> Self {
        Self::new(
            density,
            airspeed,
            0.5 * density * airspeed * airspeed,
            mach,
            gamma,
            gamma,
        )
    }

    /// Rejects conditions the derivative formulas cannot normalize by.
    pub fn validate(&self) -> Result<(), DynamicsError> {
        if !(self.airspeed > 0.0) {
            return Err(DynamicsError::NonPositiveAirspeed(self.airspeed));
        }
        if !(self.density > 0.0) {
            return Err(DynamicsError::NonPositiveGeometry {
                field: "air density",
                value: self.density,
            });
        }
        Ok(())
    }
}
