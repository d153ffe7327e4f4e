//! Dimensional lateral-directional stability and control derivatives.
//!
//! Y derivatives are normalized by mass, L derivatives by Ixx, N derivatives
//! by Izz; the `p`/`r` rate derivatives carry the usual `b/(2*u0)` scaling.
//! The primed transform removes inertia cross-coupling through the ratios
//! `i1 = Ixz/Ixx` and `i2 = Ixz/Izz`; with `Ixz = 0` it reduces to the
//! identity through the same code path.

use crate::components::{
    AircraftGeometry, FlightCondition, LateralDirectionalCoefficients,
    LateralDirectionalControlCoefficients, MassProperties,
};

/// Side-force derivative with respect to sideslip (m/s^2).
pub fn y_beta(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * coeffs.c_y_beta / mass.mass
}

/// Side-force derivative with respect to roll rate (m/s).
pub fn y_p(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * coeffs.c_y_p
        / (2.0 * cond.airspeed * mass.mass)
}

/// Side-force derivative with respect to yaw rate (m/s).
pub fn y_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * coeffs.c_y_r
        / (2.0 * cond.airspeed * mass.mass)
}

/// Rolling-moment derivative with respect to sideslip (1/s^2).
pub fn l_beta(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * coeffs.c_l_beta / mass.ixx
}

/// Rolling-moment derivative with respect to roll rate (1/s).
pub fn l_p(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure
        * geom.wing_area
        * geom.wing_span
        * (geom.wing_span / (2.0 * cond.airspeed))
        * coeffs.c_l_p
        / mass.ixx
}

/// Rolling-moment derivative with respect to yaw rate (1/s).
pub fn l_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure
        * geom.wing_area
        * geom.wing_span
        * (geom.wing_span / (2.0 * cond.airspeed))
        * coeffs.c_l_r
        / mass.ixx
}

/// Yawing-moment derivative with respect to sideslip (1/s^2).
pub fn n_beta(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * coeffs.c_n_beta / mass.izz
}

/// Yawing-moment derivative with respect to roll rate (1/s).
pub fn n_p(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure
        * geom.wing_area
        * geom.wing_span
        * (geom.wing_span / (2.0 * cond.airspeed))
        * coeffs.c_n_p
        / mass.izz
}

/// Yawing-moment derivative with respect to yaw rate (1/s).
pub fn n_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> f64 {
    cond.dynamic_pressure
        * geom.wing_area
        * geom.wing_span
        * (geom.wing_span / (2.0 * cond.airspeed))
        * coeffs.c_n_r
        / mass.izz
}

/// Side-force control derivative with respect to aileron deflection (m/s^2).
pub fn y_delta_a(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * ctrl.c_y_delta_a / mass.mass
}

/// Side-force control derivative with respect to rudder deflection (m/s^2).
pub fn y_delta_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * ctrl.c_y_delta_r / mass.mass
}

/// Rolling-moment control derivative with respect to aileron deflection (1/s^2).
pub fn l_delta_a(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * ctrl.c_l_delta_a / mass.ixx
}

/// Rolling-moment control derivative with respect to rudder deflection (1/s^2).
pub fn l_delta_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * ctrl.c_l_delta_r / mass.ixx
}

/// Yawing-moment control derivative with respect to aileron deflection (1/s^2).
pub fn n_delta_a(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * ctrl.c_n_delta_a / mass.izz
}

/// Yawing-moment control derivative with respect to rudder deflection (1/s^2).
pub fn n_delta_r(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.wing_span * ctrl.c_n_delta_r / mass.izz
}

/// Applies the inertia-coupling transform to one rolling/yawing derivative
/// pair, returning the primed `(L', N')` values:
///
/// ```text
/// L' = (L + i1 * N) / (1 - i1 * i2)
/// N' = (i2 * L + N) / (1 - i1 * i2)
/// ```
pub fn primed_pair(l: f64, n: f64, i1: f64, i2: f64) -> (f64, f64) {
    let denom = 1.0 - i1 * i2;
    ((l + i1 * n) / denom, (i2 * l + n) / denom)
}

/// Named lateral-directional derivative, for callers that dispatch by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralDirectionalDerivative {
    YBeta,
    Yp,
    Yr,
    LBeta,
    Lp,
    Lr,
    NBeta,
    Np,
    Nr,
}

impl LateralDirectionalDerivative {
    pub fn compute(
        self,
        cond: &FlightCondition,
        geom: &AircraftGeometry,
        mass: &MassProperties,
        coeffs: &LateralDirectionalCoefficients,
    ) -> f64 {
        match self {
            LateralDirectionalDerivative::YBeta => y_beta(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Yp => y_p(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Yr => y_r(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::LBeta => l_beta(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Lp => l_p(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Lr => l_r(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::NBeta => n_beta(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Np => n_p(cond, geom, mass, coeffs),
            LateralDirectionalDerivative::Nr => n_r(cond, geom, mass, coeffs),
        }
    }
}

/// Named lateral-directional control derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralDirectionalControlDerivative {
    YDeltaA,
    YDeltaR,
    LDeltaA,
    LDeltaR,
    NDeltaA,
    NDeltaR,
}

impl LateralDirectionalControlDerivative {
    pub fn compute(
        self,
        cond: &FlightCondition,
        geom: &AircraftGeometry,
        mass: &MassProperties,
        ctrl: &LateralDirectionalControlCoefficients,
    ) -> f64 {
        match self {
            LateralDirectionalControlDerivative::YDeltaA => y_delta_a(cond, geom, mass, ctrl),
            LateralDirectionalControlDerivative::YDeltaR => y_delta_r(cond, geom, mass, ctrl),
            LateralDirectionalControlDerivative::LDeltaA => l_delta_a(cond, geom, mass, ctrl),
            LateralDirectionalControlDerivative::LDeltaR => l_delta_r(cond, geom, mass, ctrl),
            LateralDirectionalControlDerivative::NDeltaA => n_delta_a(cond, geom, mass, ctrl),
            LateralDirectionalControlDerivative::NDeltaR => n_delta_r(cond, geom, mass, ctrl),
        }
    }
}
