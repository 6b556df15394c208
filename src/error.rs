use thiserror::Error;

/// Top-level error type for the polyribbon meshing kernel.
#[derive(Debug, Error)]
pub enum PolyribbonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations on flat coordinate buffers.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid coordinate buffer: {0}")]
    InvalidBuffer(String),
}

/// Errors related to mesh face construction.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid face list: {0}")]
    InvalidFaceList(String),
}

/// Convenience type alias for results using [`PolyribbonError`].
pub type Result<T> = std::result::Result<T, PolyribbonError>;
