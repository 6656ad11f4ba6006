//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! GET /some/path
//!     → server.rs (axum handler)
//!     → routing::PathConfigSet::find (longest-prefix resolution)
//!     → page.rs (go-import / go-source / refresh document)
//!     → 200 + Cache-Control, or 404 on a miss
//! ```

pub mod page;
pub mod server;

pub use server::{build_router, VanityServer};
