use crate::Dependency;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for resolution reports.
pub const SCHEMA_RESOLUTION_V1: &str = "startgen.resolution.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The emitted resolution receipt.
///
/// `dependencies` is sorted by coordinate and contains no duplicates; the
/// engine guarantees both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolutionReport {
    /// Versioned schema identifier for the report shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub platform_version: String,
    pub requested: Vec<String>,
    pub dependencies: Vec<Dependency>,
    pub dependency_count: u32,
}
