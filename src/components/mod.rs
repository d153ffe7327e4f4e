mod coefficients;
mod flight_condition;
mod geometry;
mod loader;
mod mass;
mod model;
mod propulsion;

pub use coefficients::{
    LateralDirectionalCoefficients, LateralDirectionalControlCoefficients,
    LongitudinalCoefficients, LongitudinalControlCoefficients,
};
pub use flight_condition::FlightCondition;
pub use geometry::AircraftGeometry;
pub use loader::RawModelConfig;
pub use mass::MassProperties;
pub use model::AircraftModel;
pub use propulsion::{PropulsionRegime, ThrustModel};
