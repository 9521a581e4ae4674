// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised by the batch stages (normalize / rank).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing column '{column}' in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Missing sheet '{0}'")]
    MissingSheet(String),

    #[error("Criterion '{0}' is not a column of the catalog")]
    UnknownCriterion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Image cache error: {0}")]
    Cache(String),
}

/// Errors originating from the dashboard server
/// (routing, bad parameters, data loading).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Error loading data: {0}")]
    DataLoad(String),

    #[error("Image cache error: {0}")]
    CacheError(String),

    #[error("Spreadsheet error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
