//! Application-level errors: I/O and lookup failures at the service
//! boundary. The domain core itself raises no errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("no index file specified (pass FILE or set index_file in the config)")]
    NoIndexFile,

    #[error("index file not found: {0}")]
    IndexNotFound(PathBuf),

    #[error("failed to read index file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("no item with key: {0}")]
    ItemNotFound(String),
}

pub type AppResult<T> = Result<T, ApplicationError>;
