use thiserror::Error;

/// Top-level error type for the Polyform geometry engine.
#[derive(Debug, Error)]
pub enum PolyformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("transform is not invertible")]
    SingularTransform,
}

/// Errors describing why a face/vertex list is not a closed 2-manifold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("mesh has no vertices or no faces")]
    Empty,

    #[error("face {face} has {len} vertices, at least 3 are required")]
    FaceTooSmall { face: usize, len: usize },

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("edge ({a}, {b}) is used by {uses} faces, expected exactly 2")]
    NonManifoldEdge { a: usize, b: usize, uses: usize },

    #[error("face {face} is not connected to face 0")]
    Disconnected { face: usize },
}

/// Errors related to construction operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("object not found in scene")]
    ObjectNotFound,

    #[error("{what} count {count} exceeds the limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        count: usize,
        limit: usize,
    },
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PolyformError`].
pub type Result<T> = std::result::Result<T, PolyformError>;
