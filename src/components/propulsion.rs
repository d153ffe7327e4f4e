use serde::{Deserialize, Serialize};

/// Assumed engine control law governing how thrust varies with flight speed.
///
/// The regime changes exactly two quantities in the linearized model: the
/// `X_u` stability derivative and the `X_deltaT` control derivative. Every
/// other matrix entry is regime-independent.
///
/// The default is [`PropulsionRegime::ConstantThrust`], which is also the
/// behavior shared by the mass-flow and ramjet regimes for `X_u`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropulsionRegime {
    /// Thrust independent of speed; jet aircraft or unpowered flight.
    #[default]
    ConstantThrust,
    /// Constant power; propeller aircraft with automatic pitch control and a
    /// constant-speed propeller.
    ConstantPower,
    /// Constant mass flow through the engine.
    ConstantMassFlow,
    /// Ramjet propulsion.
    Ramjet,
}

impl PropulsionRegime {
    /// Exponent `n` of the `kv * u0^n` speed-sensitivity term in the
    /// `X_deltaT` control derivative.
    pub fn speed_exponent(self) -> i32 {
        match self {
            PropulsionRegime::ConstantThrust => -2,
            PropulsionRegime::ConstantPower => -3,
            PropulsionRegime::ConstantMassFlow => -1,
            PropulsionRegime::Ramjet => 0,
        }
    }
}

/// Thrust response parameters of the powerplant around the trim point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustModel {
    /// Engine control-law regime.
    pub regime: PropulsionRegime,
    /// Thrust coefficient at the fixed point (u = u0, deltaT = 1).
    pub ct_fix: f64,
    /// Scale factor of the speed effect on propulsion.
    pub kv: f64,
}

impl ThrustModel {
    pub fn new(regime: PropulsionRegime, ct_fix: f64, kv: f64) -> Self {
        Self { regime, ct_fix, kv }
    }

    pub fn twin_otter() -> Self {
        Self::new(PropulsionRegime::ConstantPower, 0.031, 8.2)
    }
}
