//! Validated path entries.
//!
//! # Responsibilities
//! - Normalize configured path prefixes (trailing slash stripped)
//! - Resolve the VCS kind (explicit value or inferred from the repo host)
//! - Derive go-source browse templates for recognized repository hosts
//!
//! # Design Decisions
//! - The root path `/` is stored as the empty string, so `host + path`
//!   always yields the module path without special cases
//! - Host recognition is a static prefix table, extended by adding a row
//! - Unrecognized hosts are not an error; the entry just has no display

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::config::schema::PathEntry;
use crate::config::ConfigError;

/// Version control systems advertised in the go-import meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vcs {
    Bzr,
    Git,
    Hg,
    Svn,
}

impl Vcs {
    pub fn as_str(self) -> &'static str {
        match self {
            Vcs::Bzr => "bzr",
            Vcs::Git => "git",
            Vcs::Hg => "hg",
            Vcs::Svn => "svn",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vcs {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bzr" => Ok(Vcs::Bzr),
            "git" => Ok(Vcs::Git),
            "hg" => Ok(Vcs::Hg),
            "svn" => Ok(Vcs::Svn),
            _ => Err(()),
        }
    }
}

const GITHUB_PREFIX: &str = "https://github.com/";
const BITBUCKET_PREFIX: &str = "https://bitbucket.org/";

/// Repository hosts with known browse-URL shapes.
///
/// Each row maps a repo URL prefix to the generator for its three-field
/// go-source display string (home, directory template, file template).
const KNOWN_HOSTS: &[(&str, fn(&str) -> String)] = &[
    (GITHUB_PREFIX, github_display),
    (BITBUCKET_PREFIX, bitbucket_display),
];

fn github_display(repo: &str) -> String {
    format!("{repo} {repo}/tree/master{{/dir}} {repo}/blob/master{{/dir}}/{{file}}#L{{line}}")
}

// Bitbucket uses the same branch segment and line anchor for git and hg.
fn bitbucket_display(repo: &str) -> String {
    format!("{repo} {repo}/src/default{{/dir}} {repo}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}")
}

/// One configured path prefix, fully resolved and validated.
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Normalized path prefix. Trailing slashes are stripped, so the
    /// catch-all root entry is the empty string.
    pub path: String,

    /// Absolute URL of the version-control repository.
    pub repo: String,

    /// Space-separated go-source templates (home, dir, file), explicit or
    /// derived from a recognized host. None means no go-source tag.
    pub display: Option<String>,

    /// VCS kind for the go-import tag.
    pub vcs: Vcs,

    /// Version suffix injected into the documentation redirect, e.g. "v3".
    pub default_version: Option<String>,
}

impl PathConfig {
    /// Resolve a raw config entry into a validated `PathConfig`.
    pub fn from_entry(path: &str, entry: &PathEntry) -> Result<Self, ConfigError> {
        if !path.starts_with('/') {
            return Err(ConfigError::MalformedPath {
                path: path.to_string(),
            });
        }

        let repo = entry
            .repo
            .clone()
            .ok_or_else(|| ConfigError::MissingRepo {
                path: path.to_string(),
            })?;
        Url::parse(&repo).map_err(|source| ConfigError::InvalidRepoUrl {
            path: path.to_string(),
            source,
        })?;

        let vcs = match &entry.vcs {
            Some(value) => value.parse().map_err(|()| ConfigError::UnknownVcs {
                path: path.to_string(),
                vcs: value.clone(),
            })?,
            // Only GitHub repos have an unambiguous default.
            None if repo.starts_with(GITHUB_PREFIX) => Vcs::Git,
            None => {
                return Err(ConfigError::CannotInferVcs {
                    path: path.to_string(),
                    repo,
                })
            }
        };

        let display = match &entry.display {
            Some(display) => Some(display.clone()),
            None => KNOWN_HOSTS
                .iter()
                .find(|(prefix, _)| repo.starts_with(prefix))
                .map(|(_, derive)| derive(&repo)),
        };

        Ok(Self {
            path: path.trim_end_matches('/').to_string(),
            repo,
            display,
            vcs,
            default_version: entry.default_version.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(repo: &str, vcs: Option<&str>, display: Option<&str>) -> PathEntry {
        PathEntry {
            repo: Some(repo.to_string()),
            vcs: vcs.map(str::to_string),
            display: display.map(str::to_string),
            default_version: None,
        }
    }

    #[test]
    fn github_vcs_inferred_as_git() {
        let pc =
            PathConfig::from_entry("/portmidi", &entry("https://github.com/rakyll/portmidi", None, None))
                .unwrap();
        assert_eq!(pc.vcs, Vcs::Git);
    }

    #[test]
    fn github_display_derived() {
        let pc =
            PathConfig::from_entry("/portmidi", &entry("https://github.com/rakyll/portmidi", None, None))
                .unwrap();
        assert_eq!(
            pc.display.as_deref(),
            Some(
                "https://github.com/rakyll/portmidi \
                 https://github.com/rakyll/portmidi/tree/master{/dir} \
                 https://github.com/rakyll/portmidi/blob/master{/dir}/{file}#L{line}"
            )
        );
    }

    #[test]
    fn derived_display_matches_explicit_templates() {
        let derived =
            PathConfig::from_entry("/portmidi", &entry("https://github.com/rakyll/portmidi", None, None))
                .unwrap();
        let explicit = PathConfig::from_entry(
            "/portmidi",
            &entry(
                "https://github.com/rakyll/portmidi",
                None,
                Some(
                    "https://github.com/rakyll/portmidi \
                     https://github.com/rakyll/portmidi/tree/master{/dir} \
                     https://github.com/rakyll/portmidi/blob/master{/dir}/{file}#L{line}",
                ),
            ),
        )
        .unwrap();
        assert_eq!(derived.display, explicit.display);
    }

    #[test]
    fn bitbucket_display_same_for_git_and_hg() {
        let hg = PathConfig::from_entry(
            "/gopdf",
            &entry("https://bitbucket.org/zombiezen/gopdf", Some("hg"), None),
        )
        .unwrap();
        let git = PathConfig::from_entry(
            "/gopdf",
            &entry("https://bitbucket.org/zombiezen/gopdf", Some("git"), None),
        )
        .unwrap();
        assert_eq!(hg.display, git.display);
        assert_eq!(
            hg.display.as_deref(),
            Some(
                "https://bitbucket.org/zombiezen/gopdf \
                 https://bitbucket.org/zombiezen/gopdf/src/default{/dir} \
                 https://bitbucket.org/zombiezen/gopdf/src/default{/dir}/{file}#{file}-{line}"
            )
        );
    }

    #[test]
    fn unrecognized_host_has_no_display() {
        let pc = PathConfig::from_entry(
            "/sdk",
            &entry("https://git.example.org/me/sdk", Some("git"), None),
        )
        .unwrap();
        assert_eq!(pc.display, None);
    }

    #[test]
    fn missing_vcs_outside_github_is_rejected() {
        let err = PathConfig::from_entry(
            "/gopdf",
            &entry("https://bitbucket.org/zombiezen/gopdf", None, None),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::CannotInferVcs { .. }));
    }

    #[test]
    fn unknown_vcs_is_rejected_by_name() {
        let err = PathConfig::from_entry(
            "/gopdf",
            &entry("https://bitbucket.org/zombiezen/gopdf", Some("xyzzy"), None),
        )
        .unwrap_err();
        match err {
            ConfigError::UnknownVcs { vcs, .. } => assert_eq!(vcs, "xyzzy"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_repo_is_rejected() {
        let entry = PathEntry {
            repo: None,
            vcs: Some("git".to_string()),
            display: None,
            default_version: None,
        };
        let err = PathConfig::from_entry("/x", &entry).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRepo { .. }));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let pc =
            PathConfig::from_entry("/portmidi/", &entry("https://github.com/rakyll/portmidi", None, None))
                .unwrap();
        assert_eq!(pc.path, "/portmidi");
    }

    #[test]
    fn root_path_is_stored_empty() {
        let pc = PathConfig::from_entry("/", &entry("https://github.com/a/b", None, None)).unwrap();
        assert_eq!(pc.path, "");
    }

    #[test]
    fn relative_path_is_rejected() {
        let err =
            PathConfig::from_entry("portmidi", &entry("https://github.com/a/b", None, None)).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPath { .. }));
    }
}
