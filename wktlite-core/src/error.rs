use thiserror::Error;

#[derive(Debug, Error)]
pub enum WktLiteError {
    #[error("malformed geometry: {0}")]
    MalformedGeometry(#[from] geozero::error::GeozeroError),

    #[error("{arg} must be {expected}, got {found}")]
    TypeMismatch {
        arg: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("cannot write WKT: {0}")]
    Serialization(String),

    #[error("SQLite rejected function {name}/{n_arg} (code {code})")]
    Registration {
        name: &'static str,
        n_arg: i32,
        code: i32,
    },
}

pub type Result<T> = std::result::Result<T, WktLiteError>;
