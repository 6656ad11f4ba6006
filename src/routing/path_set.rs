//! Longest-prefix path resolution.
//!
//! # Responsibilities
//! - Hold the configured entries sorted for longest-prefix-first search
//! - Resolve a request path to an entry plus its remaining subpath
//! - Reject duplicate paths at construction
//!
//! # Design Decisions
//! - Entries sorted descending by path, so the first entry passing the
//!   segment-boundary test is the longest match by construction
//! - Segment-boundary matching only: `/portmidi` never matches `/portmidia`
//! - Immutable after construction (thread-safe without locks)

use std::collections::BTreeMap;

use crate::config::schema::PathEntry;
use crate::config::ConfigError;
use crate::routing::path_config::PathConfig;

/// Ordered collection of path entries with longest-prefix lookup.
#[derive(Debug, Default)]
pub struct PathConfigSet {
    entries: Vec<PathConfig>,
}

impl PathConfigSet {
    /// Validate every raw entry and freeze the sorted set.
    pub fn from_config(paths: &BTreeMap<String, PathEntry>) -> Result<Self, ConfigError> {
        let mut entries: Vec<PathConfig> = Vec::with_capacity(paths.len());
        for (path, entry) in paths {
            let pc = PathConfig::from_entry(path, entry)?;
            if entries.iter().any(|existing| existing.path == pc.path) {
                return Err(ConfigError::DuplicatePath {
                    path: path.clone(),
                });
            }
            entries.push(pc);
        }
        entries.sort_by(|a, b| b.path.cmp(&a.path));
        Ok(Self { entries })
    }

    /// Resolve a request path to the longest matching entry.
    ///
    /// Returns the entry and the remainder of the request path after the
    /// matched prefix and its separating slash. An exact match yields an
    /// empty subpath; a query trailing slash is equivalent to none.
    pub fn find<'a>(&self, path: &'a str) -> Option<(&PathConfig, &'a str)> {
        for entry in &self.entries {
            if path == entry.path {
                return Some((entry, ""));
            }
            if let Some(rest) = path.strip_prefix(entry.path.as_str()) {
                if let Some(subpath) = rest.strip_prefix('/') {
                    return Some((entry, subpath));
                }
            }
        }
        None
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PathConfig> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
