//! Path configuration and resolution subsystem.
//!
//! # Data Flow
//! ```text
//! raw config entries (path → repo/vcs/display/default_version)
//!     → path_config.rs (normalize, validate, derive browse templates)
//!     → path_set.rs (sort descending, freeze as immutable set)
//!     → find(request path) → (PathConfig, subpath) or no match
//! ```
//!
//! # Design Decisions
//! - Entries compiled at startup, immutable at runtime
//! - No regex; segment-boundary prefix matching only
//! - Deterministic: the longest configured prefix always wins

pub mod path_config;
pub mod path_set;

pub use path_config::{PathConfig, Vcs};
pub use path_set::PathConfigSet;
