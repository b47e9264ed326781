//! Platform version model.
//!
//! Versions look like `2.0.0.M3`, `2.0.0.RC1`, `2.0.0.BUILD-SNAPSHOT` or
//! `1.5.4.RELEASE`. A missing qualifier reads as `RELEASE`. This is not
//! semver: `RELEASE` sorts above every pre-release qualifier of the same
//! numeric triple, and milestone/RC counters compare numerically.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    #[error("invalid numeric component '{0}'")]
    InvalidNumber(String),
    #[error("unrecognized qualifier '{0}'")]
    UnknownQualifier(String),
    #[error("malformed version range '{0}'")]
    MalformedRange(String),
}

/// Release qualifier, ascending: M < RC < BUILD-SNAPSHOT < RELEASE.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Qualifier {
    Milestone(u32),
    ReleaseCandidate(u32),
    Snapshot,
    Release,
}

impl FromStr for Qualifier {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "RELEASE" {
            return Ok(Qualifier::Release);
        }
        if s == "BUILD-SNAPSHOT" {
            return Ok(Qualifier::Snapshot);
        }
        if let Some(n) = s.strip_prefix("RC") {
            return n
                .parse::<u32>()
                .map(Qualifier::ReleaseCandidate)
                .map_err(|_| VersionParseError::UnknownQualifier(s.to_string()));
        }
        if let Some(n) = s.strip_prefix('M') {
            return n
                .parse::<u32>()
                .map(Qualifier::Milestone)
                .map_err(|_| VersionParseError::UnknownQualifier(s.to_string()));
        }
        Err(VersionParseError::UnknownQualifier(s.to_string()))
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Milestone(n) => write!(f, "M{n}"),
            Qualifier::ReleaseCandidate(n) => write!(f, "RC{n}"),
            Qualifier::Snapshot => write!(f, "BUILD-SNAPSHOT"),
            Qualifier::Release => write!(f, "RELEASE"),
        }
    }
}

/// A parsed platform version with a total ordering: numeric triple first,
/// then qualifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Qualifier,
}

impl PlatformVersion {
    pub fn new(major: u32, minor: u32, patch: u32, qualifier: Qualifier) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier,
        }
    }
}

impl FromStr for PlatformVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }
        let mut parts = s.splitn(4, '.');
        let major = number(parts.next().unwrap_or(""))?;
        let minor = number(parts.next().unwrap_or(""))?;
        let patch = number(parts.next().unwrap_or(""))?;
        let qualifier = match parts.next() {
            None => Qualifier::Release,
            Some(q) => q.parse()?,
        };
        Ok(Self {
            major,
            minor,
            patch,
            qualifier,
        })
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.qualifier)
    }
}

fn number(s: &str) -> Result<u32, VersionParseError> {
    s.parse::<u32>()
        .map_err(|_| VersionParseError::InvalidNumber(s.to_string()))
}

/// A version interval in bracket notation: `[2.0.0.M3,)`, `[1.0.0,2.0.0)`.
/// A bare version string means "at least that version". An empty bound is
/// unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionRange {
    lower: Option<(PlatformVersion, bool)>,
    upper: Option<(PlatformVersion, bool)>,
}

impl VersionRange {
    pub fn at_least(version: PlatformVersion) -> Self {
        Self {
            lower: Some((version, true)),
            upper: None,
        }
    }

    pub fn matches(&self, version: &PlatformVersion) -> bool {
        if let Some((lower, inclusive)) = &self.lower {
            if version < lower || (!inclusive && version == lower) {
                return false;
            }
        }
        if let Some((upper, inclusive)) = &self.upper {
            if version > upper || (!inclusive && version == upper) {
                return false;
            }
        }
        true
    }
}

impl FromStr for VersionRange {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::MalformedRange(s.to_string()));
        }
        if !s.starts_with('[') && !s.starts_with('(') {
            return Ok(Self::at_least(s.parse()?));
        }
        let lower_inclusive = s.starts_with('[');
        let upper_inclusive = match s.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(VersionParseError::MalformedRange(s.to_string())),
        };
        let inner = &s[1..s.len() - 1];
        let Some((lo, hi)) = inner.split_once(',') else {
            return Err(VersionParseError::MalformedRange(s.to_string()));
        };
        let lower = match lo.trim() {
            "" => None,
            v => Some((v.parse()?, lower_inclusive)),
        };
        let upper = match hi.trim() {
            "" => None,
            v => Some((v.parse()?, upper_inclusive)),
        };
        Ok(Self { lower, upper })
    }
}
