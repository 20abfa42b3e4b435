//! Shared utilities

pub mod error;
pub mod validation;

pub use error::{AppError, AppResult, ErrorResponse};
pub use validation::{parse_path_id, IdQuery, ValidatedJson};
