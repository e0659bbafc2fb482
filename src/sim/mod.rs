//! First-order step-response calculator, independent of any web layer.

pub mod engine;
/// Field-level validation errors.
pub mod error;
/// Uniform time grids.
pub mod grid;
pub mod model;
pub mod types;

pub use engine::{Simulator, simulate};
pub use error::{FieldError, ValidationErrors};
pub use types::{SimulationRequest, SimulationResult};
