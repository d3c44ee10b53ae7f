//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the travel domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{require_non_empty, DomainError, ErrorCode, ValidationError};
pub use ids::{IdSequence, RecordId, UserId};
pub use timestamp::Timestamp;
