//! Result type alias shared across the workspace.
//!
//! Functions can simply return `Result<T>` and get `FragmentError` as the error.
use crate::error::FragmentError;

/// Workspace-wide `Result` alias with `FragmentError` as the default error.
pub type Result<T, E = FragmentError> = std::result::Result<T, E>;
