//! Linearized small-perturbation flight dynamics.
//!
//! Given a trim flight condition, vehicle geometry and inertia, and
//! dimensionless aerodynamic coefficients, this crate computes dimensional
//! stability and control derivatives and assembles the classical
//! longitudinal and lateral-directional state-space matrices used for
//! dynamic-stability and handling-qualities analysis. It stops there:
//! eigenvalue decomposition, time simulation, and control design belong to
//! downstream consumers.

pub mod components;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftGeometry, AircraftModel, FlightCondition, LateralDirectionalCoefficients,
    LateralDirectionalControlCoefficients, LongitudinalCoefficients,
    LongitudinalControlCoefficients, MassProperties, PropulsionRegime, ThrustModel,
};
pub use systems::{linearize_sweep, LinearModel};
pub use utils::DynamicsError;
