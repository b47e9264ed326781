use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A build dependency identified by its coordinate (group + artifact).
///
/// The logical id records which catalog entry produced the dependency; it is
/// provenance only and does not participate in equality or ordering.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    pub id: String,
}

impl Dependency {
    pub fn with_id(id: &str, group: &str, artifact: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            id: id.to_string(),
        }
    }

    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }
}

impl Eq for Dependency {}

impl Ord for Dependency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.artifact.cmp(&other.artifact))
    }
}

impl PartialOrd for Dependency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn equality_is_by_coordinate_not_id() {
        let a = Dependency::with_id("session", "org.springframework.session", "spring-session");
        let b = Dependency::with_id("other-id", "org.springframework.session", "spring-session");
        assert_eq!(a, b);

        let mut set = BTreeSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordering_is_group_then_artifact() {
        let a = Dependency::with_id("a", "org.a", "zzz");
        let b = Dependency::with_id("b", "org.b", "aaa");
        assert!(a < b);
    }
}
