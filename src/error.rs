use thiserror::Error;

/// Top-level error type for the Staira takeoff engine.
#[derive(Debug, Error)]
pub enum StairaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Takeoff(#[from] TakeoffError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the geometry store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised while computing a staircase's finish quantities.
///
/// Structurally missing geometry is fatal for the offending staircase
/// only; a batch reports these per staircase instead of aborting outright.
#[derive(Debug, Error)]
pub enum TakeoffError {
    #[error("staircase {staircase} has no runs")]
    NoRuns { staircase: String },

    #[error("element {element} of staircase {staircase} has no solid geometry")]
    MissingSolid { staircase: String, element: String },

    #[error("run {element} of staircase {staircase} has no walking path")]
    EmptyPath { staircase: String, element: String },

    #[error("result sink rejected batch: {0}")]
    SinkRejected(String),
}

/// Convenience type alias for results using [`StairaError`].
pub type Result<T> = std::result::Result<T, StairaError>;
