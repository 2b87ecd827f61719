use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("{0} not found")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
