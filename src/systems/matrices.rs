//! Assembly of the small-perturbation state-space matrices.
//!
//! Longitudinal state order is `[u, w, q, theta]` with control columns
//! `[deltaT, deltaE]`. Lateral-directional state order is `[r, beta, p, phi]`
//! (yaw rate first) with control columns `[deltaA, deltaR]`; that ordering is
//! unusual relative to most texts but is kept exactly, since downstream mode
//! analyses index into it.

use nalgebra::{Matrix4, Matrix4x2};

use crate::components::{
    AircraftGeometry, FlightCondition, LateralDirectionalCoefficients,
    LateralDirectionalControlCoefficients, LongitudinalCoefficients,
    LongitudinalControlCoefficients, MassProperties, PropulsionRegime, ThrustModel,
};
use crate::systems::{lateral_directional as lat, longitudinal as lon};
use crate::utils::constants::GRAVITY;

/// The `1 - Z_wdot` normalization denominator and the angular-acceleration
/// feedback coefficient `k = M_wdot / (1 - Z_wdot)` shared by both
/// longitudinal builders.
pub(crate) fn normal_feedback(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> (f64, f64) {
    let one_minus_z_w_dot = 1.0 - lon::z_w_dot(cond, geom, mass, coeffs);
    let k = lon::m_w_dot(cond, geom, mass, coeffs) / one_minus_z_w_dot;
    (one_minus_z_w_dot, k)
}

/// Builds the 4x4 longitudinal state matrix `A_Lon` for states
/// `[u, w, q, theta]`.
///
/// The w-equation row is divided through by `1 - Z_wdot`; the q-equation row
/// carries the `k` feedback from the normal-force equation. The theta row is
/// purely kinematic.
pub fn build_longitudinal_state_matrix(
    regime: PropulsionRegime,
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> Matrix4<f64> {
    let (den, k) = normal_feedback(cond, geom, mass, coeffs);

    let x_u = lon::x_u(regime, cond, geom, mass, coeffs);
    let x_w = lon::x_w(cond, geom, mass, coeffs);
    let z_u = lon::z_u(cond, geom, mass, coeffs);
    let z_w = lon::z_w(cond, geom, mass, coeffs);
    let z_q = lon::z_q(cond, geom, mass, coeffs);
    let m_u = lon::m_u(cond, geom, mass, coeffs);
    let m_w = lon::m_w(cond, geom, mass, coeffs);
    let m_q = lon::m_q(cond, geom, mass, coeffs);

    let (sin_theta, cos_theta) = cond.theta.sin_cos();

    Matrix4::new(
        x_u,
        x_w,
        0.0,
        -GRAVITY * cos_theta,
        z_u / den,
        z_w / den,
        (z_q + cond.airspeed) / den,
        -GRAVITY * sin_theta / den,
        m_u + k * z_u,
        m_w + k * z_w,
        m_q + k * (z_q + cond.airspeed),
        -k * GRAVITY * sin_theta,
        0.0,
        0.0,
        1.0,
        0.0,
    )
}

/// Builds the 4x2 longitudinal control matrix `B_Lon` for controls
/// `[deltaT, deltaE]`.
pub fn build_longitudinal_control_matrix(
    thrust: &ThrustModel,
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
    ctrl: &LongitudinalControlCoefficients,
) -> Matrix4x2<f64> {
    let (den, k) = normal_feedback(cond, geom, mass, coeffs);

    let x_dt = lon::x_delta_t(thrust, cond, geom, mass);
    let z_dt = lon::z_delta_t(cond, geom, mass, ctrl);
    let z_de = lon::z_delta_e(cond, geom, mass, ctrl);
    let m_dt = lon::m_delta_t(cond, geom, mass, ctrl);
    let m_de = lon::m_delta_e(cond, geom, mass, ctrl);

    Matrix4x2::new(
        x_dt,
        0.0,
        z_dt / den,
        z_de / den,
        m_dt + k * z_dt,
        m_de + k * z_de,
        0.0,
        0.0,
    )
}

/// Builds the 4x4 lateral-directional state matrix `A_LD` for states
/// `[r, beta, p, phi]`.
///
/// Rolling and yawing derivatives enter as primed values; side-force
/// derivatives enter unprimed, scaled by `1/u0` in the beta equation.
pub fn build_lateral_directional_state_matrix(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LateralDirectionalCoefficients,
) -> Matrix4<f64> {
    let (i1, i2) = mass.coupling_ratios();

    let y_beta = lat::y_beta(cond, geom, mass, coeffs);
    let y_p = lat::y_p(cond, geom, mass, coeffs);
    let y_r = lat::y_r(cond, geom, mass, coeffs);
    let (l_beta, n_beta) = lat::primed_pair(
        lat::l_beta(cond, geom, mass, coeffs),
        lat::n_beta(cond, geom, mass, coeffs),
        i1,
        i2,
    );
    let (l_p, n_p) = lat::primed_pair(
        lat::l_p(cond, geom, mass, coeffs),
        lat::n_p(cond, geom, mass, coeffs),
        i1,
        i2,
    );
    let (l_r, n_r) = lat::primed_pair(
        lat::l_r(cond, geom, mass, coeffs),
        lat::n_r(cond, geom, mass, coeffs),
        i1,
        i2,
    );

    let u0 = cond.airspeed;

    Matrix4::new(
        n_r,
        n_beta,
        n_p,
        0.0,
        y_r / u0 - 1.0,
        y_beta / u0,
        y_p / u0,
        GRAVITY * cond.theta.cos() / u0,
        l_r,
        l_beta,
        l_p,
        0.0,
        cond.theta.tan(),
        0.0,
        1.0,
        0.0,
    )
}

/// Builds the 4x2 lateral-directional control matrix `B_LD` for controls
/// `[deltaA, deltaR]`.
pub fn build_lateral_directional_control_matrix(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LateralDirectionalControlCoefficients,
) -> Matrix4x2<f64> {
    let (i1, i2) = mass.coupling_ratios();

    let y_da = lat::y_delta_a(cond, geom, mass, ctrl);
    let y_dr = lat::y_delta_r(cond, geom, mass, ctrl);
    let (l_da, n_da) = lat::primed_pair(
        lat::l_delta_a(cond, geom, mass, ctrl),
        lat::n_delta_a(cond, geom, mass, ctrl),
        i1,
        i2,
    );
    let (l_dr, n_dr) = lat::primed_pair(
        lat::l_delta_r(cond, geom, mass, ctrl),
        lat::n_delta_r(cond, geom, mass, ctrl),
        i1,
        i2,
    );

    let u0 = cond.airspeed;

    Matrix4x2::new(
        n_da,
        n_dr,
        y_da / u0,
        y_dr / u0,
        l_da,
        l_dr,
        0.0,
        0.0,
    )
}
