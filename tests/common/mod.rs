#![allow(dead_code)]

use dynstab::{
    AircraftGeometry, FlightCondition, LongitudinalCoefficients, MassProperties,
};

/// Trim condition used by the hand-computed longitudinal checks:
/// sea-level density, 80 m/s, q0 = 3920 Pa, level flight.
pub fn reference_condition() -> FlightCondition {
    FlightCondition::new(1.225, 80.0, 3920.0, 0.24, 0.0, 0.0)
}

pub fn reference_geometry() -> AircraftGeometry {
    AircraftGeometry::new(60.0, 18.0, 3.0)
}

pub fn reference_mass() -> MassProperties {
    MassProperties::new(15000.0, 80000.0, 120000.0, 180000.0, 0.0)
}

pub fn reference_longitudinal() -> LongitudinalCoefficients {
    LongitudinalCoefficients {
        c_d_0: 0.025,
        c_d_mach: 0.0,
        c_d_alpha: 0.1,
        c_l_0: 0.3,
        c_l_mach: 0.0,
        c_l_alpha: 5.0,
        c_l_alpha_dot: 1.5,
        c_l_q: 4.0,
        c_m_alpha: -1.0,
        c_m_alpha_dot: -5.0,
        c_m_mach: 0.0,
        c_m_q: -15.0,
    }
}
