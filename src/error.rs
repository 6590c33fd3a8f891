use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatcapError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlatcapError>;
