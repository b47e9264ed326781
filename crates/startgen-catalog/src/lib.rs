//! Catalog parsing and builtin preset resolution.
//!
//! This crate is intentionally IO-free: it parses catalog files provided as
//! strings and merges them over the builtin preset.

#![forbid(unsafe_code)]

mod builtin;
mod model;

pub use builtin::builtin;
pub use model::{CatalogEntryConfig, CatalogFileV1};

use startgen_domain::model::Catalog;

/// Parse a catalog TOML file into a typed model.
pub fn parse_catalog_toml(input: &str) -> anyhow::Result<CatalogFileV1> {
    let file: CatalogFileV1 = toml::from_str(input)?;
    Ok(file)
}

/// The effective catalog: builtin preset with file-provided entries merged on
/// top. File entries override builtin ones id by id.
pub fn resolve_catalog(file: Option<CatalogFileV1>) -> Catalog {
    let mut catalog = builtin();
    if let Some(file) = file {
        for (id, entry) in &file.dependencies {
            catalog.insert(id, entry.to_entry());
        }
    }
    catalog
}
