//! Data models for file records, matches, and results.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A candidate file, keyed by its path components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Last extension including the dot, or empty.
    pub ext: String,
    /// Base name without `ext`.
    pub name: String,
    /// `name` + `ext`.
    pub fullname: String,
    /// Path as returned by pattern resolution.
    pub path: String,
}

/// One needle occurrence in a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub line: String,
    pub needle: String,
    /// 1-based.
    pub row: usize,
    /// 0-based byte offset of the leftmost occurrence.
    pub col: usize,
}

/// Which `SourceFile` attribute is searched for and used as the removal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchKey {
    #[default]
    Name,
    Ext,
    Fullname,
    Path,
}

impl MatchKey {
    pub const ALL: [MatchKey; 4] = [MatchKey::Name, MatchKey::Ext, MatchKey::Fullname, MatchKey::Path];

    pub fn key<'a>(&self, file: &'a SourceFile) -> &'a str {
        match self {
            MatchKey::Name => &file.name,
            MatchKey::Ext => &file.ext,
            MatchKey::Fullname => &file.fullname,
            MatchKey::Path => &file.path,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKey::Name => "name",
            MatchKey::Ext => "ext",
            MatchKey::Fullname => "fullname",
            MatchKey::Path => "path",
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown match key {:?} (expected name, ext, fullname or path)", s))
    }
}

/// Options for a single search. Built once per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FufOptions {
    pub match_key: MatchKey,
}

impl FufOptions {
    pub fn with_match_key(match_key: MatchKey) -> Self {
        Self { match_key }
    }
}

/// Result of a search: source files never referenced by any target file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindResult {
    pub unused: Vec<SourceFile>,
}
