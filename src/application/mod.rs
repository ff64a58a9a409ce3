//! Application layer: index-file loading and tree/key services on top of
//! the domain core.

pub mod error;
pub mod index;

pub use error::{AppResult, ApplicationError};
pub use index::IndexService;
