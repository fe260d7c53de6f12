//! Error types shared between the renderer library and the CLI.
//!
//! `FragmentError` covers the missing-KPI condition raised while rendering as well
//! as the I/O and JSON failures of loading a snapshot or writing the output.
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::kpi::KpiKey;

/// Unified error type shared by the library and the binary.
#[derive(Error, Debug)]
pub enum FragmentError {
    /// A KPI consumed by the template is absent or empty in the snapshot.
    #[error("Missing KPI value: {0}")]
    MissingKey(KpiKey),

    /// A KPI value in the source document has a type that cannot be displayed.
    #[error("Invalid value for KPI {key}: {reason}")]
    InvalidValue {
        /// Name of the offending entry as it appears in the document.
        key: String,
        /// Short description of what was found instead.
        reason: String,
    },

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// I/O error while reading the KPI document or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// UTF-8 conversion error when handling text content.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
