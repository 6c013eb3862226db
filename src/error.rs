use thiserror::Error;

pub type Result<T> = std::result::Result<T, AmedasError>;

#[derive(Error, Debug)]
pub enum AmedasError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Invalid date window: {0}")]
    InvalidWindow(String),

    #[error("Source table shape error for {period}: {message}")]
    SourceShape { period: String, message: String },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Forecast horizon exceeded: lead day {requested} is beyond day {horizon}")]
    HorizonExceeded { requested: i64, horizon: i64 },

    #[error("Fetch failed for {period}: {message}")]
    Fetch { period: String, message: String },

    #[error("Temperature validation error: {message}")]
    TemperatureValidation { message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl AmedasError {
    pub fn source_shape(period: impl Into<String>, message: impl Into<String>) -> Self {
        AmedasError::SourceShape {
            period: period.into(),
            message: message.into(),
        }
    }

    pub fn fetch(period: impl Into<String>, message: impl Into<String>) -> Self {
        AmedasError::Fetch {
            period: period.into(),
            message: message.into(),
        }
    }
}
