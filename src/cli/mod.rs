//! # CLI Module
//!
//! Command implementations for the `sporlbrowse` binary. Each command wires
//! configuration, the web client and the [`crate::Browser`] together and
//! renders the result for a terminal.
//!
//! ## Commands
//!
//! - [`browse`] - Lists the entries under a `spotify:` URI as a table or JSON
//! - [`tree`] - Prints every static directory of the browse tree
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Browse Layer (routing, static tree, translation)
//!     ↓
//! Spotify Integration Layer (CatalogClient / WebClient)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Output
//!
//! User-facing messages use the crate's colored `info!`, `success!`,
//! `warning!` and `error!` macros. Diagnostic logging from the library goes
//! through `tracing` and is controlled with `RUST_LOG`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporlbrowse browse                          # Root directory
//! sporlbrowse browse spotify:top:tracks       # Your top tracks
//! sporlbrowse browse spotify:artist:<id> --json
//! sporlbrowse tree                            # Static directories
//! ```

mod browse;
mod tree;

pub use browse::browse;
pub use tree::tree;
