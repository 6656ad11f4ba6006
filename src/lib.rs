//! Vanity import path server.
//!
//! Answers HTTP requests for package vanity import paths: given a
//! configured host and a set of URL path prefixes, it returns an HTML
//! document carrying `go-import` and `go-source` meta tags pointing at the
//! real version-control repository, and redirects browsers to the package
//! documentation. A companion batch binary renders the same documents to
//! static files.
//!
//! # Architecture Overview
//!
//! ```text
//! config file (TOML)
//!     → config   (schema, loader, validation)
//!     → routing  (PathConfig derivation, sorted PathConfigSet)
//!     → http     (axum server, longest-prefix resolution, page rendering)
//!     → render   (batch mode: same pages, written to a directory)
//! ```
//!
//! The configuration is validated once at startup and shared immutably via
//! `Arc`; request handling is pure resolution plus string formatting, so no
//! locks are needed anywhere.

pub mod config;
pub mod http;
pub mod render;
pub mod routing;

pub use config::VanityConfig;
pub use http::VanityServer;
