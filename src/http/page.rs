//! HTML document construction.
//!
//! Shared by the request handler and the batch renderer. The meta tag
//! shapes are load-bearing: consuming tools match attribute order and
//! quoting literally, so they are emitted byte-for-byte.

use std::fmt::Write;

use crate::routing::{PathConfigSet, Vcs};

/// Documentation site the refresh redirect points at.
pub const DOCS_BASE_URL: &str = "https://pkg.go.dev/";

/// Everything interpolated into one vanity page.
#[derive(Debug)]
pub struct PackagePage<'a> {
    /// Module path, host plus configured prefix. Never includes the subpath.
    pub module: &'a str,
    pub vcs: Vcs,
    pub repo: &'a str,
    /// go-source templates; the tag is omitted entirely when None.
    pub display: Option<&'a str>,
    /// Absolute documentation URL for the refresh redirect.
    pub redirect: &'a str,
}

impl PackagePage<'_> {
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\n");
        let _ = writeln!(
            out,
            "<meta name=\"go-import\" content=\"{} {} {}\">",
            self.module, self.vcs, self.repo
        );
        if let Some(display) = self.display {
            let _ = writeln!(
                out,
                "<meta name=\"go-source\" content=\"{} {}\">",
                self.module, display
            );
        }
        let _ = writeln!(
            out,
            "<meta http-equiv=\"refresh\" content=\"0; url={}\">",
            self.redirect
        );
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(
            out,
            "Nothing to see here; <a href=\"{}\">see the package on pkg.go.dev</a>.",
            self.redirect
        );
        out.push_str("</body>\n</html>\n");
        out
    }
}

/// Build the documentation URL for a resolved module and request subpath.
///
/// A configured default version sits between the module and subpath unless
/// the subpath already names its own major version. An empty subpath gets a
/// trailing slash so the URL points at the package root.
pub fn doc_url(module: &str, subpath: &str, default_version: Option<&str>) -> String {
    let mut url = format!("{DOCS_BASE_URL}{module}");
    if subpath.is_empty() {
        if let Some(version) = default_version {
            url.push('/');
            url.push_str(version);
        }
        url.push('/');
        return url;
    }
    if let Some(version) = default_version {
        if !starts_with_version_segment(subpath) {
            url.push('/');
            url.push_str(version);
        }
    }
    url.push('/');
    url.push_str(subpath);
    url
}

/// True when the first path segment is a major version like "v3".
fn starts_with_version_segment(subpath: &str) -> bool {
    let first = subpath.split('/').next().unwrap_or("");
    match first.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Listing page served at `/` when no catch-all entry is configured.
pub fn index_page(host: &str, paths: &PathConfigSet) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("<!DOCTYPE html>\n<html>\n<body>\n<ul>\n");
    // Entries are stored longest-first; list them in ascending order.
    for pc in paths.iter().rev() {
        let _ = writeln!(
            out,
            "<li><a href=\"{DOCS_BASE_URL}{host}{path}\">{host}{path}</a></li>",
            path = pc.path
        );
    }
    out.push_str("</ul>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_url_adds_trailing_slash_for_empty_subpath() {
        assert_eq!(
            doc_url("example.com/portmidi", "", None),
            "https://pkg.go.dev/example.com/portmidi/"
        );
    }

    #[test]
    fn doc_url_injects_default_version() {
        assert_eq!(
            doc_url("gotest.tools", "", Some("v3")),
            "https://pkg.go.dev/gotest.tools/v3/"
        );
        assert_eq!(
            doc_url("gotest.tools", "assert", Some("v3")),
            "https://pkg.go.dev/gotest.tools/v3/assert"
        );
    }

    #[test]
    fn doc_url_respects_explicit_version_in_subpath() {
        assert_eq!(
            doc_url("gotest.tools", "v5/assert", Some("v3")),
            "https://pkg.go.dev/gotest.tools/v5/assert"
        );
        // "v" alone or a non-numeric suffix is an ordinary segment.
        assert_eq!(
            doc_url("gotest.tools", "v/assert", Some("v3")),
            "https://pkg.go.dev/gotest.tools/v3/v/assert"
        );
        assert_eq!(
            doc_url("gotest.tools", "vendor/assert", Some("v3")),
            "https://pkg.go.dev/gotest.tools/v3/vendor/assert"
        );
    }

    #[test]
    fn doc_url_without_version_keeps_subpath() {
        assert_eq!(
            doc_url("gotest.tools/gotestsum", "cmd", None),
            "https://pkg.go.dev/gotest.tools/gotestsum/cmd"
        );
    }

    #[test]
    fn page_omits_go_source_without_display() {
        let page = PackagePage {
            module: "example.com/sdk",
            vcs: crate::routing::Vcs::Git,
            repo: "https://git.example.org/me/sdk",
            display: None,
            redirect: "https://pkg.go.dev/example.com/sdk/",
        }
        .render();
        assert!(page.contains(
            "<meta name=\"go-import\" content=\"example.com/sdk git https://git.example.org/me/sdk\">"
        ));
        assert!(!page.contains("go-source"));
    }
}
