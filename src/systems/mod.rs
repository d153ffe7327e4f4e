pub mod lateral_directional;
pub mod linear_model;
pub mod longitudinal;
pub mod matrices;

pub use lateral_directional::{LateralDirectionalControlDerivative, LateralDirectionalDerivative};
pub use linear_model::{linearize_sweep, LinearModel};
pub use longitudinal::{LongitudinalControlDerivative, LongitudinalDerivative};
pub use matrices::{
    build_lateral_directional_control_matrix, build_lateral_directional_state_matrix,
    build_longitudinal_control_matrix, build_longitudinal_state_matrix,
};
