//! Validated linearization of a complete aircraft model at one or more trim
//! points.

use log::debug;
use nalgebra::{Matrix4, Matrix4x2};
use rayon::prelude::*;

use crate::components::{AircraftModel, FlightCondition};
use crate::systems::matrices::{
    build_lateral_directional_control_matrix, build_lateral_directional_state_matrix,
    build_longitudinal_control_matrix, build_longitudinal_state_matrix, normal_feedback,
};
use crate::utils::constants::SINGULARITY_TOLERANCE;
use crate::utils::DynamicsError;

/// The full linearized small-perturbation model at a single trim point.
///
/// Holds both matrix pairs of `x_dot = A x + B u`: longitudinal over
/// `[u, w, q, theta]` with `[deltaT, deltaE]`, lateral-directional over
/// `[r, beta, p, phi]` with `[deltaA, deltaR]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub condition: FlightCondition,
    pub a_lon: Matrix4<f64>,
    pub b_lon: Matrix4x2<f64>,
    pub a_lat: Matrix4<f64>,
    pub b_lat: Matrix4x2<f64>,
}

impl LinearModel {
    /// Linearizes `model` about `condition`, rejecting degenerate inputs up
    /// front.
    ///
    /// This is the fail-fast gate of the crate: the underlying derivative and
    /// builder functions never validate and would propagate NaN or infinity
    /// instead. Checks cover the data-model invariants (positive airspeed,
    /// mass, and principal inertias) plus the two normalization denominators,
    /// `1 - Z_wdot` and `1 - i1*i2`.
    pub fn new(model: &AircraftModel, condition: &FlightCondition) -> Result<Self, DynamicsError> {
        condition.validate()?;
        model.validate()?;

        let (den, _) = normal_feedback(
            condition,
            &model.geometry,
            &model.mass,
            &model.longitudinal,
        );
        if den.abs() < SINGULARITY_TOLERANCE {
            return Err(DynamicsError::SingularNormalFeedback(den.abs()));
        }

        let (i1, i2) = model.mass.coupling_ratios();
        let coupling = 1.0 - i1 * i2;
        if coupling.abs() < SINGULARITY_TOLERANCE {
            return Err(DynamicsError::SingularInertiaCoupling(coupling.abs()));
        }

        Ok(Self {
            condition: *condition,
            a_lon: build_longitudinal_state_matrix(
                model.thrust.regime,
                condition,
                &model.geometry,
                &model.mass,
                &model.longitudinal,
            ),
            b_lon: build_longitudinal_control_matrix(
                &model.thrust,
                condition,
                &model.geometry,
                &model.mass,
                &model.longitudinal,
                &model.longitudinal_controls,
            ),
            a_lat: build_lateral_directional_state_matrix(
                condition,
                &model.geometry,
                &model.mass,
                &model.lateral_directional,
            ),
            b_lat: build_lateral_directional_control_matrix(
                condition,
                &model.geometry,
                &model.mass,
                &model.lateral_directional_controls,
            ),
        })
    }
}

/// Linearizes one model across a sweep of trim points in parallel.
///
/// Conditions are independent and the builders are pure, so the sweep needs
/// no coordination; results come back in input order.
pub fn linearize_sweep(
    model: &AircraftModel,
    conditions: &[FlightCondition],
) -> Vec<Result<LinearModel, DynamicsError>> {
    conditions
        .par_iter()
        .map(|condition| {
            debug!(
                "linearizing '{}' at u0 = {:.1} m/s, mach = {:.3}",
                model.name, condition.airspeed, condition.mach
            );
            LinearModel::new(model, condition)
        })
        .collect()
}
