//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors produced by `sr-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f32, lon: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
