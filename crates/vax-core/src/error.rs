//! Framework base error type.
//!
//! Sub-crates define their own error enums and convert into `CoreError` via
//! `From` impls, or keep them separate and wrap `CoreError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `vax-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `vax-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
