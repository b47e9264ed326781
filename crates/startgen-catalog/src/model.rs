use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use startgen_domain::model::CatalogEntry;
use std::collections::BTreeMap;

/// Catalog file schema v1.
///
/// This is a *user-facing* model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogFileV1 {
    /// Optional schema string for tooling (`startgen.catalog.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Map of logical id -> coordinate.
    #[serde(default)]
    pub dependencies: BTreeMap<String, CatalogEntryConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntryConfig {
    pub group: String,
    pub artifact: String,

    /// Whether the entry counts as a starter (suppresses the implicit root
    /// starter when requested).
    #[serde(default)]
    pub starter: bool,
}

impl CatalogEntryConfig {
    pub fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            starter: self.starter,
        }
    }
}
