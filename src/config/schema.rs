//! Configuration schema definitions.
//!
//! Raw serde types mirroring the configuration document. Semantic
//! validation and derivation happen in the loader and in the routing
//! subsystem; these types only carry what was written in the file.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root configuration document for the vanity host.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawConfig {
    /// Host the import paths are served under, e.g. "example.com".
    /// When absent, the handler falls back to the request's Host header.
    pub host: Option<String>,

    /// Cache-Control max-age in seconds. Signed so a negative value can be
    /// rejected with a clear error instead of a type mismatch.
    pub cache_max_age: Option<i64>,

    /// Path prefix → entry, e.g. `[paths."/portmidi"]`.
    pub paths: BTreeMap<String, PathEntry>,
}

/// One configured path prefix, as written.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PathEntry {
    /// Absolute URL of the version-control repository.
    pub repo: Option<String>,

    /// VCS kind (bzr, git, hg, svn). Inferred for GitHub repos.
    pub vcs: Option<String>,

    /// Explicit go-source templates: three space-separated URLs
    /// (home, directory, file).
    pub display: Option<String>,

    /// Version suffix for the documentation redirect, e.g. "v3".
    pub default_version: Option<String>,
}
