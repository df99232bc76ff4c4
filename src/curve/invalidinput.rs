use thiserror::Error;

/// 曲線管線各階段共用的結果型別
pub type CurveResult<T> = Result<T, InvalidInput>;

/// 呼叫端違反輸入約定。
///
/// 全部在建構曲線之前偵測，失敗時不會產生任何部分輸出。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("need at least {required} control points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("control point #{index} ({x}, {y}) has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("control points share x = {x}; x values must be strictly increasing")]
    DuplicateX { x: f64 },

    #[error("samples per segment must be at least {minimum}, got {actual}")]
    SampleDensityTooLow { minimum: usize, actual: usize },

    #[error("samples per segment must be at most {maximum}, got {actual}")]
    SampleDensityTooHigh { maximum: usize, actual: usize },

    #[error("band list is empty")]
    EmptyBandList,

    #[error("band '{label}' has invalid bounds [{lower}, {upper}]; need finite lower < upper")]
    InvalidBandBounds { label: String, lower: f64, upper: f64 },

    #[error("band '{label}' starts at {lower} but the previous band ends at {previous_upper}")]
    NonContiguousBands { label: String, previous_upper: f64, lower: f64 },

    #[error("band label '{label}' is used more than once")]
    DuplicateBandLabel { label: String },

    #[error("band edges need at least {required} values, got {actual}")]
    TooFewBandEdges { required: usize, actual: usize },

    #[error("boundary tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },
}
