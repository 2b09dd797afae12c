//! Error handling for the Schnapsen rules engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, MoveError};
pub use error_code::ErrorCode;
