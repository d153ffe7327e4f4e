use serde::{Deserialize, Serialize};

use crate::components::{
    AircraftGeometry, LateralDirectionalCoefficients, LateralDirectionalControlCoefficients,
    LongitudinalCoefficients, LongitudinalControlCoefficients, MassProperties, ThrustModel,
};
use crate::utils::DynamicsError;

/// Everything the matrix builders need to know about one aircraft at one
/// mass/CG configuration.
///
/// The flight condition is deliberately kept out of this bundle so a single
/// model can be linearized across a sweep of trim points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftModel {
    /// Aircraft identification.
    pub name: String,
    pub geometry: AircraftGeometry,
    pub mass: MassProperties,
    pub longitudinal: LongitudinalCoefficients,
    pub longitudinal_controls: LongitudinalControlCoefficients,
    pub lateral_directional: LateralDirectionalCoefficients,
    pub lateral_directional_controls: LateralDirectionalControlCoefficients,
    pub thrust: ThrustModel,
}

impl AircraftModel {
    /// DHC-6 Twin Otter reference model.
    pub fn twin_otter() -> Self {
        Self {
            name: "Twin Otter".to_string(),
            geometry: AircraftGeometry::twin_otter(),
            mass: MassProperties::twin_otter(),
            longitudinal: LongitudinalCoefficients::twin_otter(),
            longitudinal_controls: LongitudinalControlCoefficients::twin_otter(),
            lateral_directional: LateralDirectionalCoefficients::twin_otter(),
            lateral_directional_controls: LateralDirectionalControlCoefficients::twin_otter(),
            thrust: ThrustModel::twin_otter(),
        }
    }

    pub fn validate(&self) -> Result<(), DynamicsError> {
        self.geometry.validate()?;
        self.mass.validate()?;
        Ok(())
    }
}
