//! KEGG Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Parses the text returned by the KEGG REST `list` operation into typed
//! records.
//!
//! # Supported Categories
//!
//! - **pathway**, **brite**, **module**: identifier and name
//! - **ko**: KEGG Orthology with gene symbols and EC numbers
//! - **genes**: organism gene listings with genomic locations
//! - **vg** / **vp**: viral genes and viral peptides
//! - **ag**: addendum genes
//!
//! Fetching the text is left to the caller.
//!
//! # Example
//!
//! ```
//! use kegg_ingest::list::parse_list;
//!
//! let records = parse_list("map00010\tGlycolysis / Gluconeogenesis\n", "pathway")?;
//! assert_eq!(records[0].id(), "map00010");
//! # Ok::<(), kegg_common::KeggError>(())
//! ```

pub mod list;
pub mod output;

pub use list::{parse_list, ListParser};
pub use output::{write_records, OutputFormat};
