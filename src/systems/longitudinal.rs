//! Dimensional longitudinal stability and control derivatives.
//!
//! Each function converts dimensionless coefficients at the trim point into a
//! dimensional derivative, normalized by the mass (X and Z force families) or
//! by the pitch moment of inertia Iyy (M family), per the standard
//! small-perturbation convention. All functions are pure; degenerate inputs
//! (zero airspeed, zero mass) propagate as NaN or infinity rather than
//! erroring — the validating layer in [`crate::systems::linear_model`] is the
//! place that rejects them.

use crate::components::{
    AircraftGeometry, FlightCondition, LongitudinalCoefficients,
    LongitudinalControlCoefficients, MassProperties, PropulsionRegime, ThrustModel,
};

/// Dimensionless vehicle-mass parameter `mu = 2m / (rho * S * cbar)`.
pub fn mass_ratio(cond: &FlightCondition, geom: &AircraftGeometry, mass: &MassProperties) -> f64 {
    2.0 * mass.mass / (cond.density * geom.wing_area * geom.mac)
}

/// X-force derivative with respect to forward speed `u` (1/s).
///
/// The propulsion regime selects the governing physical law: constant power
/// adds a `3*Cd0 + Cl0*tan(gamma0)` structure in place of the constant-thrust
/// `2*Cd0` term. The mass-flow and ramjet regimes share the constant-thrust
/// form.
pub fn x_u(
    regime: PropulsionRegime,
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    let qs = cond.dynamic_pressure * geom.wing_area;
    match regime {
        PropulsionRegime::ConstantPower => {
            -qs * (3.0 * coeffs.c_d_0
                + coeffs.c_l_0 * cond.gamma.tan()
                + cond.mach * coeffs.c_d_mach)
                / (mass.mass * cond.airspeed)
        }
        PropulsionRegime::ConstantThrust
        | PropulsionRegime::ConstantMassFlow
        | PropulsionRegime::Ramjet => {
            -qs * (2.0 * coeffs.c_d_0 + cond.mach * coeffs.c_d_mach)
                / (mass.mass * cond.airspeed)
        }
    }
}

/// X-force derivative with respect to vertical speed `w` (1/s).
pub fn x_w(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * (coeffs.c_l_0 - coeffs.c_d_alpha)
        / (mass.mass * cond.airspeed)
}

/// Z-force derivative with respect to forward speed `u` (1/s).
///
/// Carries the Prandtl-Glauert compressibility term `M^2 * ClM / (1 - M^2)`;
/// it is the caller's business to keep the Mach number subsonic.
pub fn z_u(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    let m2 = cond.mach * cond.mach;
    -cond.dynamic_pressure
        * geom.wing_area
        * (2.0 * coeffs.c_l_0 + m2 * coeffs.c_l_mach / (1.0 - m2))
        / (mass.mass * cond.airspeed)
}

/// Z-force derivative with respect to vertical speed `w` (1/s).
pub fn z_w(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    -cond.dynamic_pressure * geom.wing_area * (coeffs.c_d_0 + coeffs.c_l_alpha)
        / (mass.mass * cond.airspeed)
}

/// Z-force derivative with respect to vertical acceleration `w_dot`
/// (dimensionless).
pub fn z_w_dot(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    -coeffs.c_l_alpha_dot / (2.0 * mass_ratio(cond, geom, mass))
}

/// Z-force derivative with respect to pitch rate `q` (m/s).
pub fn z_q(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    -cond.airspeed * coeffs.c_l_q / (2.0 * mass_ratio(cond, geom, mass))
}

/// Pitching-moment derivative with respect to forward speed `u` (1/(m*s)).
pub fn m_u(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.mac * cond.mach * coeffs.c_m_mach
        / (mass.iyy * cond.airspeed)
}

/// Pitching-moment derivative with respect to vertical speed `w` (1/(m*s)).
pub fn m_w(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.mac * coeffs.c_m_alpha
        / (mass.iyy * cond.airspeed)
}

/// Pitching-moment derivative with respect to vertical acceleration `w_dot`
/// (1/m).
pub fn m_w_dot(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    cond.density * geom.wing_area * geom.mac * geom.mac * coeffs.c_m_alpha_dot / (4.0 * mass.iyy)
}

/// Pitching-moment derivative with respect to pitch rate `q` (1/s).
pub fn m_q(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    coeffs: &LongitudinalCoefficients,
) -> f64 {
    cond.density * cond.airspeed * geom.wing_area * geom.mac * geom.mac * coeffs.c_m_q
        / (4.0 * mass.iyy)
}

/// X-force control derivative with respect to throttle setting (m/s^2).
///
/// The regime scales the speed-sensitivity term `kv` by `u0^n` with
/// `n = -2, -3, -1, 0` for constant-thrust, constant-power, constant-mass-flow
/// and ramjet respectively.
pub fn x_delta_t(
    thrust: &ThrustModel,
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
) -> f64 {
    let n = thrust.regime.speed_exponent();
    -cond.dynamic_pressure
        * geom.wing_area
        * (thrust.ct_fix + thrust.kv * cond.airspeed.powi(n))
        / mass.mass
}

/// Z-force control derivative with respect to throttle setting (m/s^2).
///
/// Identically zero in this model: thrust is assumed not to produce direct
/// normal-force control power. A nonzero thrust-lift coupling (high thrust
/// line) is a known gap of the reference model, not an omission here.
pub fn z_delta_t(
    _cond: &FlightCondition,
    _geom: &AircraftGeometry,
    _mass: &MassProperties,
    _ctrl: &LongitudinalControlCoefficients,
) -> f64 {
    0.0
}

/// Z-force control derivative with respect to elevator deflection (m/s^2).
pub fn z_delta_e(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LongitudinalControlCoefficients,
) -> f64 {
    -cond.dynamic_pressure * geom.wing_area * ctrl.c_l_delta_e / mass.mass
}

/// Pitching-moment control derivative with respect to throttle setting
/// (1/s^2). Identically zero, see [`z_delta_t`].
pub fn m_delta_t(
    _cond: &FlightCondition,
    _geom: &AircraftGeometry,
    _mass: &MassProperties,
    _ctrl: &LongitudinalControlCoefficients,
) -> f64 {
    0.0
}

/// Pitching-moment control derivative with respect to elevator deflection
/// (1/s^2).
pub fn m_delta_e(
    cond: &FlightCondition,
    geom: &AircraftGeometry,
    mass: &MassProperties,
    ctrl: &LongitudinalControlCoefficients,
) -> f64 {
    cond.dynamic_pressure * geom.wing_area * geom.mac * ctrl.c_m_delta_e / mass.iyy
}

/// Named longitudinal stability derivative, for callers that dispatch by
/// name rather than calling the individual functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudinalDerivative {
    Xu,
    Xw,
    Zu,
    Zw,
    ZwDot,
    Zq,
    Mu,
    Mw,
    MwDot,
    Mq,
}

impl LongitudinalDerivative {
    pub fn compute(
        self,
        regime: PropulsionRegime,
        cond: &FlightCondition,
        geom: &AircraftGeometry,
        mass: &MassProperties,
        coeffs: &LongitudinalCoefficients,
    ) -> f64 {
        match self {
            LongitudinalDerivative::Xu => x_u(regime, cond, geom, mass, coeffs),
            LongitudinalDerivative::Xw => x_w(cond, geom, mass, coeffs),
            LongitudinalDerivative::Zu => z_u(cond, geom, mass, coeffs),
            LongitudinalDerivative::Zw => z_w(cond, geom, mass, coeffs),
            LongitudinalDerivative::ZwDot => z_w_dot(cond, geom, mass, coeffs),
            LongitudinalDerivative::Zq => z_q(cond, geom, mass, coeffs),
            LongitudinalDerivative::Mu => m_u(cond, geom, mass, coeffs),
            LongitudinalDerivative::Mw => m_w(cond, geom, mass, coeffs),
            LongitudinalDerivative::MwDot => m_w_dot(cond, geom, mass, coeffs),
            LongitudinalDerivative::Mq => m_q(cond, geom, mass, coeffs),
        }
    }
}

/// Named longitudinal control derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongitudinalControlDerivative {
    XDeltaT,
    ZDeltaT,
    ZDeltaE,
    MDeltaT,
    MDeltaE,
}

impl LongitudinalControlDerivative {
    pub fn compute(
        self,
        thrust: &ThrustModel,
        cond: &FlightCondition,
        geom: &AircraftGeometry,
        mass: &MassProperties,
        ctrl: &LongitudinalControlCoefficients,
    ) -> f64 {
        match self {
            LongitudinalControlDerivative::XDeltaT => x_delta_t(thrust, cond, geom, mass),
            LongitudinalControlDerivative::ZDeltaT => z_delta_t(cond, geom, mass, ctrl),
            LongitudinalControlDerivative::ZDeltaE => z_delta_e(cond, geom, mass, ctrl),
            LongitudinalControlDerivative::MDeltaT => m_delta_t(cond, geom, mass, ctrl),
            LongitudinalControlDerivative::MDeltaE => m_delta_e(cond, geom, mass, ctrl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn trim_condition() -> FlightCondition {
        FlightCondition::new(1.225, 80.0, 3920.0, 0.24, 0.0, 0.0)
    }

    fn trim_geometry() -> AircraftGeometry {
        AircraftGeometry::new(60.0, 18.0, 3.0)
    }

    fn trim_mass() -> MassProperties {
        MassProperties::new(15000.0, 80000.0, 120000.0, 180000.0, 0.0)
    }

    #[test]
    fn mass_ratio_matches_hand_computation() {
        let mu = mass_ratio(&trim_condition(), &trim_geometry(), &trim_mass());
        // 2 * 15000 / (1.225 * 60 * 3)
        assert_relative_eq!(mu, 30000.0 / 220.5, max_relative = 1e-12);
    }

    #[test]
    fn constant_power_x_u_adds_climb_term() {
        let cond = FlightCondition::new(1.225, 80.0, 3920.0, 0.24, 5.0_f64.to_radians(), 0.0);
        let geom = trim_geometry();
        let mass = trim_mass();
        // With cd0 = 0 the regimes differ only by the cl0 * tan(gamma0) term.
        let coeffs = LongitudinalCoefficients {
            c_l_0: 0.3,
            ..Default::default()
        };

        let ct = x_u(PropulsionRegime::ConstantThrust, &cond, &geom, &mass, &coeffs);
        let cp = x_u(PropulsionRegime::ConstantPower, &cond, &geom, &mass, &coeffs);
        let expected_gap = -cond.dynamic_pressure * geom.wing_area * 0.3
            * 5.0_f64.to_radians().tan()
            / (mass.mass * cond.airspeed);

        assert_relative_eq!(cp - ct, expected_gap, max_relative = 1e-12);
    }

    #[test]
    fn mass_flow_and_ramjet_share_constant_thrust_x_u() {
        let cond = trim_condition();
        let geom = trim_geometry();
        let mass = trim_mass();
        let coeffs = LongitudinalCoefficients {
            c_d_0: 0.025,
            c_d_mach: 0.01,
            ..Default::default()
        };

        let ct = x_u(PropulsionRegime::ConstantThrust, &cond, &geom, &mass, &coeffs);
        let cmf = x_u(PropulsionRegime::ConstantMassFlow, &cond, &geom, &mass, &coeffs);
        let rj = x_u(PropulsionRegime::Ramjet, &cond, &geom, &mass, &coeffs);

        assert_eq!(ct, cmf);
        assert_eq!(ct, rj);
    }

    #[test]
    fn x_delta_t_speed_exponents() {
        let cond = trim_condition();
        let geom = trim_geometry();
        let mass = trim_mass();
        let qs_over_m = cond.dynamic_pressure * geom.wing_area / mass.mass;

        for (regime, n) in [
            (PropulsionRegime::ConstantThrust, -2),
            (PropulsionRegime::ConstantPower, -3),
            (PropulsionRegime::ConstantMassFlow, -1),
            (PropulsionRegime::Ramjet, 0),
        ] {
            let thrust = ThrustModel::new(regime, 0.02, 1.5);
            let expected = -qs_over_m * (0.02 + 1.5 * cond.airspeed.powi(n));
            assert_relative_eq!(
                x_delta_t(&thrust, &cond, &geom, &mass),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn named_dispatch_matches_direct_calls() {
        let cond = trim_condition();
        let geom = trim_geometry();
        let mass = trim_mass();
        let coeffs = LongitudinalCoefficients::twin_otter();
        let regime = PropulsionRegime::ConstantThrust;

        for (name, direct) in [
            (LongitudinalDerivative::Xu, x_u(regime, &cond, &geom, &mass, &coeffs)),
            (LongitudinalDerivative::Zw, z_w(&cond, &geom, &mass, &coeffs)),
            (LongitudinalDerivative::MwDot, m_w_dot(&cond, &geom, &mass, &coeffs)),
            (LongitudinalDerivative::Mq, m_q(&cond, &geom, &mass, &coeffs)),
        ] {
            assert_eq!(name.compute(regime, &cond, &geom, &mass, &coeffs), direct);
        }
    }

    #[test]
    fn thrust_normal_force_coupling_is_zero() {
        let ctrl = LongitudinalControlCoefficients {
            c_l_delta_t: 0.4,
            c_m_delta_t: -0.2,
            ..Default::default()
        };
        // The coefficients are accepted but deliberately unused.
        assert_eq!(
            z_delta_t(&trim_condition(), &trim_geometry(), &trim_mass(), &ctrl),
            0.0
        );
        assert_eq!(
            m_delta_t(&trim_condition(), &trim_geometry(), &trim_mass(), &ctrl),
            0.0
        );
    }
}
