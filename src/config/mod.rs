//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → routing subsystem (normalize paths, derive templates)
//!     → VanityConfig (validated, immutable)
//!     → shared via Arc to every request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Validation separates syntactic (serde) from semantic checks
//! - Any semantic violation refuses startup instead of failing per-request

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, VanityConfig, DEFAULT_CACHE_MAX_AGE};
pub use schema::{PathEntry, RawConfig};
