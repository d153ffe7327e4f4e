use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::components::{
    AircraftGeometry, AircraftModel, LateralDirectionalCoefficients,
    LateralDirectionalControlCoefficients, LongitudinalCoefficients,
    LongitudinalControlCoefficients, MassProperties, PropulsionRegime, ThrustModel,
};
use crate::utils::DynamicsError;

/// Flat on-disk layout of an aircraft dynamics model.
///
/// Keys mirror the field names of the coefficient bundles so a model file
/// reads like a derivative table.
#[derive(Debug, Deserialize)]
pub struct RawModelConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixz: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    pub mac: f64,

    /// Longitudinal coefficients
    pub c_d_0: f64,
    pub c_d_mach: f64,
    pub c_d_alpha: f64,
    pub c_l_0: f64,
    pub c_l_mach: f64,
    pub c_l_alpha: f64,
    pub c_l_alpha_dot: f64,
    pub c_l_q: f64,
    pub c_m_alpha: f64,
    pub c_m_alpha_dot: f64,
    pub c_m_mach: f64,
    pub c_m_q: f64,

    /// Longitudinal control coefficients
    #[serde(default)]
    pub c_l_delta_t: f64,
    pub c_l_delta_e: f64,
    #[serde(default)]
    pub c_m_delta_t: f64,
    pub c_m_delta_e: f64,

    /// Lateral-directional coefficients
    pub c_y_beta: f64,
    pub c_y_p: f64,
    pub c_y_r: f64,
    pub c_l_beta: f64,
    pub c_l_p: f64,
    pub c_l_r: f64,
    pub c_n_beta: f64,
    pub c_n_p: f64,
    pub c_n_r: f64,

    /// Lateral-directional control coefficients
    pub c_y_delta_a: f64,
    pub c_y_delta_r: f64,
    pub c_l_delta_a: f64,
    pub c_l_delta_r: f64,
    pub c_n_delta_a: f64,
    pub c_n_delta_r: f64,

    /// Propulsion
    #[serde(default)]
    pub regime: PropulsionRegime,
    pub ct_fix: f64,
    pub kv: f64,
}

impl TryFrom<RawModelConfig> for AircraftModel {
    type Error = DynamicsError;

    fn try_from(raw: RawModelConfig) -> Result<Self, Self::Error> {
        let model = AircraftModel {
            name: raw.name,
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.mac),
            mass: MassProperties::new(raw.mass, raw.ixx, raw.iyy, raw.izz, raw.ixz),
            longitudinal: LongitudinalCoefficients {
                c_d_0: raw.c_d_0,
                c_d_mach: raw.c_d_mach,
                c_d_alpha: raw.c_d_alpha,
                c_l_0: raw.c_l_0,
                c_l_mach: raw.c_l_mach,
                c_l_alpha: raw.c_l_alpha,
                c_l_alpha_dot: raw.c_l_alpha_dot,
                c_l_q: raw.c_l_q,
                c_m_alpha: raw.c_m_alpha,
                c_m_alpha_dot: raw.c_m_alpha_dot,
                c_m_mach: raw.c_m_mach,
                c_m_q: raw.c_m_q,
            },
            longitudinal_controls: LongitudinalControlCoefficients {
                c_l_delta_t: raw.c_l_delta_t,
                c_l_delta_e: raw.c_l_delta_e,
                c_m_delta_t: raw.c_m_delta_t,
                c_m_delta_e: raw.c_m_delta_e,
            },
            lateral_directional: LateralDirectionalCoefficients {
                c_y_beta: raw.c_y_beta,
                c_y_p: raw.c_y_p,
                c_y_r: raw.c_y_r,
                c_l_beta: raw.c_l_beta,
                c_l_p: raw.c_l_p,
                c_l_r: raw.c_l_r,
                c_n_beta: raw.c_n_beta,
                c_n_p: raw.c_n_p,
                c_n_r: raw.c_n_r,
            },
            lateral_directional_controls: LateralDirectionalControlCoefficients {
                c_y_delta_a: raw.c_y_delta_a,
                c_y_delta_r: raw.c_y_delta_r,
                c_l_delta_a: raw.c_l_delta_a,
                c_l_delta_r: raw.c_l_delta_r,
                c_n_delta_a: raw.c_n_delta_a,
                c_n_delta_r: raw.c_n_delta_r,
            },
            thrust: ThrustModel::new(raw.regime, raw.ct_fix, raw.kv),
        };

        model.validate()?;

        let (i1, i2) = model.mass.coupling_ratios();
        if (1.0 - i1 * i2).abs() < 1e-3 {
            warn!(
                "model '{}' has near-singular inertia coupling (1 - i1*i2 = {:.3e})",
                model.name,
                1.0 - i1 * i2
            );
        }

        Ok(model)
    }
}

impl AircraftModel {
    /// Parses a model from YAML text. See [`RawModelConfig`] for the layout.
    pub fn from_yaml_str(s: &str) -> Result<Self, DynamicsError> {
        let raw: RawModelConfig = serde_yaml::from_str(s)?;
        raw.try_into()
    }

    /// Reads and parses a YAML model file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, DynamicsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
