use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("must receive stdin or provide an input filepath")]
    MissingInput,

    #[error("input filepath does not exist: {0}")]
    InputNotFound(String),

    #[error("must provide a valid API key")]
    MissingKey,

    #[error("output directory does not exist: {0}")]
    OutputDirNotFound(String),

    #[error("record {row}: invalid {field} value '{value}'")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("service returned status {status}: {message}")]
    Service { status: String, message: String },

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeoError {
    /// Internal code reported alongside argument validation failures.
    /// The process itself always exits 2 on a reported error.
    pub fn code(&self) -> i32 {
        match self {
            GeoError::MissingInput => 1,
            GeoError::InputNotFound(_) => 2,
            GeoError::MissingKey => 3,
            GeoError::OutputDirNotFound(_) => 5,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
