//!
//! KPI snapshot types and the live-trading fragment renderer.
//!
//! This crate aggregates:
//! - `error` — unified error type `FragmentError` used across the workspace.
//! - `result` — handy `Result<T, FragmentError>` alias.
//! - `kpi` — KPI keys and the `KpiSnapshot` map with its JSON loader.
//! - `fragment` — the static paragraph template and its renderer.
//! - `landing` — landing-page JSON document that wraps a rendered fragment.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod kpi;
pub mod fragment;
pub mod landing;

pub use error::FragmentError;
pub use result::Result;
pub use kpi::{KpiKey, KpiSnapshot};
pub use fragment::{FragmentRenderer, MissingKeyPolicy};
