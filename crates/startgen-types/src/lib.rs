//! Stable DTOs and IDs used across the startgen workspace.
//!
//! This crate is intentionally boring:
//! - the dependency coordinate value type
//! - stable logical dependency ids
//! - the platform version model (versions, qualifiers, ranges)
//! - data types for the emitted resolution report

#![forbid(unsafe_code)]

pub mod dependency;
pub mod ids;
pub mod report;
pub mod version;

pub use dependency::Dependency;
pub use report::{ResolutionReport, ToolMeta, SCHEMA_RESOLUTION_V1};
pub use version::{PlatformVersion, Qualifier, VersionParseError, VersionRange};
