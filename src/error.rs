use thiserror::Error;

/// Top-level error type for the Crowdmesh kernel.
#[derive(Debug, Error)]
pub enum CrowdmeshError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Errors related to the mesh store and obstacle topology.
///
/// Degenerate geometry (collinear triples, tiny polygons) is never an error;
/// the predicates absorb it into sentinel values. These variants only signal
/// misuse of the index-based API.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex index {0} out of range")]
    VertexNotFound(usize),

    #[error("obstacle corner refers to missing vertex {0}")]
    CornerOutOfRange(usize),
}

/// Errors related to the simulation surface.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("occupant index {0} out of range")]
    OccupantNotFound(usize),
}

/// Convenience type alias for results using [`CrowdmeshError`].
pub type Result<T> = std::result::Result<T, CrowdmeshError>;
