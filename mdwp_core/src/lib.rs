//! `mdwp_core` turns a project's markdown documentation into a WordPress
//! plugin `readme.txt` and keeps the plugin's version declarations in sync
//! with the README.
//!
//! ## Processing Pipeline
//!
//! ```text
//! README.md + CHANGELOG.md (read concurrently)
//!   → Version extraction (`Stable tag: x.y.z` in the README)
//!   → Document (markdown parsed into headings, lists, paragraphs, quotes)
//!   → Transpiler (WordPress readme dialect, changelog appended)
//!   → Style file batch (`Version: x.y.z` headers)
//!   → Source file batch (docblock `Version:` and `*_VERSION` constants)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Loading `config.json`.
//! - [`document`] — The parsed block model.
//! - [`transpiler`] — Markdown to WordPress readme rendering.
//! - [`version`] — Version extraction and the per-dialect rewrite rules.
//! - [`sync`] — Concurrent, failure-isolated file batches.
//! - [`pipeline`] — The full generate-and-sync run.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdwp_core::extract_version;
//! use mdwp_core::render;
//!
//! let readme = "# My Plugin\n\nStable tag: 1.2.0\n\nSee [the docs](https://example.com).\n";
//!
//! assert_eq!(extract_version(readme, "Stable tag"), "1.2.0");
//! assert_eq!(
//! 	render(readme).unwrap(),
//! 	"=== My Plugin ===\n\nStable tag: 1.2.0\n\nSee the docs (https://example.com)."
//! );
//! ```

pub use config::*;
pub use document::*;
pub use error::*;
pub use pipeline::*;
pub use sync::*;
pub use transpiler::*;
pub use version::*;

pub mod config;
pub mod document;
#[allow(unused_assignments)]
mod error;
pub mod pipeline;
pub mod sync;
pub mod transpiler;
pub mod version;

#[cfg(test)]
mod __fixtures;
