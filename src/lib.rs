pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod simulation;
pub mod triangulation;

pub use error::{CrowdmeshError, Result};
