use thiserror::Error;

/// Top-level error type for sightline computations.
#[derive(Debug, Error)]
pub enum SightlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Element(#[from] ElementError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("loop is not closed")]
    LoopNotClosed,
}

/// Errors related to model elements fetched from an element store.
#[derive(Debug, Error)]
pub enum ElementError {
    #[error("invalid geometry for {element}: {reason}")]
    InvalidGeometry { element: String, reason: String },
}

/// Errors related to sightline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("no target point selected")]
    NoTargetSelected,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors related to loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`SightlineError`].
pub type Result<T> = std::result::Result<T, SightlineError>;
