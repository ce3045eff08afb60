//! Loader errors

use std::path::PathBuf;

use thiserror::Error;

/// A library could not be opened, with or without the platform suffix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot load library `{}`: {reason}", .path.display())]
pub struct LoadError {
    /// The path as the caller requested it.
    pub path: PathBuf,
    pub reason: String,
}

/// A symbol is missing from an open library.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("symbol `{name}` not found: {reason}")]
pub struct SymbolError {
    pub name: String,
    pub reason: String,
}
