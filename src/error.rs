//! Library error type.
//!
//! Constructing and deriving events never fails. The variants here belong to
//! components that look events up after dispatch.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No event with the requested identifier was seen
    #[error("event not found")]
    EventNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
