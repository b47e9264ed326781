use startgen_types::{Dependency, PlatformVersion};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown dependency id '{0}'")]
    UnknownId(String),
}

/// One resolvable catalog entry: a logical id bound to a coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub group: String,
    pub artifact: String,

    /// Starters suppress the implicit root starter when present.
    pub starter: bool,
}

impl CatalogEntry {
    pub fn starter(group: &str, artifact: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            starter: true,
        }
    }

    pub fn library(group: &str, artifact: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            starter: false,
        }
    }

    pub fn to_dependency(&self, id: &str) -> Dependency {
        Dependency::with_id(id, &self.group, &self.artifact)
    }
}

/// Map of logical id -> catalog entry.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn insert(&mut self, id: &str, entry: CatalogEntry) {
        self.entries.insert(id.to_string(), entry);
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn lookup(&self, id: &str) -> Option<Dependency> {
        self.entries.get(id).map(|e| e.to_dependency(id))
    }

    pub fn require(&self, id: &str) -> Result<Dependency, ResolveError> {
        self.lookup(id)
            .ok_or_else(|| ResolveError::UnknownId(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One resolution call's worth of input. Constructed per call, owns nothing
/// long-lived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildRequest {
    pub requested: BTreeSet<String>,
    pub platform_version: PlatformVersion,
}

impl BuildRequest {
    pub fn new<I, S>(ids: I, platform_version: PlatformVersion) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requested: ids.into_iter().map(Into::into).collect(),
            platform_version,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.requested.contains(id)
    }

    pub fn contains_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.requested.contains(*id))
    }
}

/// The mutable dependency set the engine and customizers write into.
///
/// `BTreeSet` keyed by coordinate gives deterministic ordering and rules out
/// duplicate coordinates by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedBuild {
    pub dependencies: BTreeSet<Dependency>,
}

impl ResolvedBuild {
    pub fn add(&mut self, dependency: Dependency) -> bool {
        self.dependencies.insert(dependency)
    }

    pub fn has_artifact(&self, group: &str, artifact: &str) -> bool {
        self.dependencies
            .iter()
            .any(|d| d.group == group && d.artifact == artifact)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
