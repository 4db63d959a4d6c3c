use thiserror::Error;

/// Top-level error type for the ThrowForm geometry core.
#[derive(Debug, Error)]
pub enum ThrowformError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised when a point sequence violates the wall-curve invariants.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("wall curve has no points")]
    Empty,

    #[error("non-finite coordinate at point {index}")]
    NonFinite { index: usize },

    #[error("height decreases at point {index}: {previous} -> {current}")]
    NonMonotonicHeight {
        index: usize,
        previous: f64,
        current: f64,
    },
}

/// Errors raised by profile validation.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("outer curve needs at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("foot outer radius {foot_outer} must be below the wall base radius {wall_base}")]
    FootOutsideWall { foot_outer: f64, wall_base: f64 },

    #[error("foot outer radius {outer} must exceed foot inner radius {inner}")]
    FootRingInverted { outer: f64, inner: f64 },
}

/// Errors raised while ingesting an external document.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("document has no <g id=\"{0}\"> layer")]
    MissingLayer(&'static str),

    #[error("cut layer holds no polygons")]
    NoPolygons,

    #[error("cut layer holds {0} polygons; inner/outer polygons must come in pairs")]
    UnpairedPolygon(usize),

    #[error("polygon {index}: {reason}")]
    MalformedPolygon { index: usize, reason: String },

    #[error("polygon {index}: {source}")]
    InvalidCurve {
        index: usize,
        #[source]
        source: CurveError,
    },

    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),
}

/// Errors raised by the output encoders.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Convenience type alias for results using [`ThrowformError`].
pub type Result<T> = std::result::Result<T, ThrowformError>;
