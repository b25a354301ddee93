//! KEGG Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, error handling and logging for the KEGG list workspace.
//!
//! # Overview
//!
//! - **Types**: one record struct per list category, the [`types::Category`]
//!   selector and [`types::GenomicLocation`]
//! - **Error Handling**: [`KeggError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup shared by the binaries
//!
//! # Example
//!
//! ```
//! use kegg_common::types::{Category, ListRecord};
//!
//! let category: Category = "ko".parse().unwrap();
//! assert_eq!(category, Category::Ortholog);
//! assert_eq!(
//!     ListRecord::tsv_header(&category),
//!     Some("id\tsymbols\tname\tenzyme_codes")
//! );
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{KeggError, Result};
