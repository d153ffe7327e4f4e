use serde::{Deserialize, Serialize};

use crate::utils::DynamicsError;

/// Mass and body-axis inertia of the aircraft at one loading configuration.
///
/// `ixz` couples the rolling and yawing moment equations whenever the body
/// axes are not principal axes; it may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Moment of inertia about the x-axis (kg*m^2).
    pub ixx: f64,
    /// Moment of inertia about the y-axis (kg*m^2).
    pub iyy: f64,
    /// Moment of inertia about the z-axis (kg*m^2).
    pub izz: f64,
    /// Product of inertia between the x and z axes (kg*m^2).
    pub ixz: f64,
}

impl MassProperties {
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            ixz,
        }
    }

    pub fn twin_otter() -> Self {
        Self::new(4874.8, 28366.4, 32852.8, 52097.3, 1384.3)
    }

    /// Inertia-coupling ratios `(i1, i2) = (Ixz/Ixx, Ixz/Izz)` used by the
    /// primed lateral-directional derivatives.
    pub fn coupling_ratios(&self) -> (f64, f64) {
        (self.ixz / self.ixx, self.ixz / self.izz)
    }

    pub fn validate(&self) -> Result<(), DynamicsError> {
        if !(self.mass > 0.0) {
            return Err(DynamicsError::NonPositiveMass(self.mass));
        }
        for (axis, value) in [("Ixx", self.ixx), ("Iyy", self.iyy), ("Izz", self.izz)] {
            if !(value > 0.0) {
                return Err(DynamicsError::NonPositiveInertia { axis, value });
            }
        }
        Ok(())
    }
}
