use serde::{Deserialize, Serialize};

use crate::utils::DynamicsError;

/// Reference geometry of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m^2).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    pub fn twin_otter() -> Self {
        Self::new(39.0, 19.8, 1.98)
    }

    pub fn validate(&self) -> Result<(), DynamicsError> {
        for (field, value) in [
            ("wing area", self.wing_area),
            ("wing span", self.wing_span),
            ("mean aerodynamic chord", self.mac),
        ] {
            if !(value > 0.0) {
                return Err(DynamicsError::NonPositiveGeometry { field, value });
            }
        }
        Ok(())
    }
}
