pub mod constants;
mod errors;

pub use errors::DynamicsError;
