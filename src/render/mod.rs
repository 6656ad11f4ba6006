//! Batch rendering of vanity pages to static files.
//!
//! # Responsibilities
//! - Parse `{module} {import-path}` input lines
//! - Map each module back to its configured entry
//! - Write one index.html per line, reusing the server's page construction
//!
//! # Design Decisions
//! - Output location mirrors the import path with the host prefix stripped
//! - Strict input: a line without exactly two fields aborts the run,
//!   naming the line number
//! - Sequential loop; output files are independent so ordering is irrelevant

use std::collections::BTreeMap;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::VanityConfig;
use crate::http::page::{PackagePage, DOCS_BASE_URL};
use crate::routing::PathConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid input line {line}, must contain 2 fields: {text}")]
    InvalidLine { line: usize, text: String },

    #[error("input line {line}: module {module} is not configured")]
    UnknownModule { line: usize, module: String },

    #[error("config has no host; modules cannot be mapped to paths")]
    MissingHost,

    #[error("failed to read input: {0}")]
    Input(std::io::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes static vanity pages for a configured host.
#[derive(Debug)]
pub struct Renderer<'a> {
    host: &'a str,
    modules: BTreeMap<String, &'a PathConfig>,
    out_dir: &'a Path,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a VanityConfig, out_dir: &'a Path) -> Result<Self, RenderError> {
        let host = config.host.as_deref().ok_or(RenderError::MissingHost)?;
        let modules = config
            .paths
            .iter()
            .map(|pc| (format!("{host}{}", pc.path), pc))
            .collect();
        Ok(Self {
            host,
            modules,
            out_dir,
        })
    }

    /// Render one page per input line. Returns the number of pages written.
    pub fn render_all<R: BufRead>(&self, input: R) -> Result<usize, RenderError> {
        let mut count = 0;
        for (i, line) in input.lines().enumerate() {
            let line = line.map_err(RenderError::Input)?;
            self.render_line(i + 1, &line)?;
            count += 1;
        }
        Ok(count)
    }

    fn render_line(&self, lineno: usize, text: &str) -> Result<(), RenderError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let &[module, import_path] = fields.as_slice() else {
            return Err(RenderError::InvalidLine {
                line: lineno,
                text: text.to_string(),
            });
        };
        let pc = self
            .modules
            .get(module)
            .ok_or_else(|| RenderError::UnknownModule {
                line: lineno,
                module: module.to_string(),
            })?;

        let redirect = format!("{DOCS_BASE_URL}{import_path}");
        let page = PackagePage {
            module,
            vcs: pc.vcs,
            repo: &pc.repo,
            display: pc.display.as_deref(),
            redirect: &redirect,
        }
        .render();

        let out_path = self.output_path(import_path);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|source| RenderError::Write {
                path: out_path.clone(),
                source,
            })?;
        }
        fs::write(&out_path, page).map_err(|source| RenderError::Write {
            path: out_path.clone(),
            source,
        })?;

        tracing::debug!(import_path = %import_path, path = %out_path.display(), "rendered page");
        Ok(())
    }

    /// Output dir + import path with the host prefix stripped + index.html.
    fn output_path(&self, import_path: &str) -> PathBuf {
        let relative = import_path
            .strip_prefix(self.host)
            .unwrap_or(import_path)
            .trim_start_matches('/');
        if relative.is_empty() {
            self.out_dir.join("index.html")
        } else {
            self.out_dir.join(relative).join("index.html")
        }
    }
}
