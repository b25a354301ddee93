//! KEGG `list` output parsing
//!
//! The KEGG REST `list` operation returns one entry per line, tab-separated,
//! with a category-specific layout inside the fields (see [`parser`]).
//! [`ListParser`] turns a complete response body into ordered
//! [`ListRecord`]s for one category.
//!
//! Parsing is all-or-nothing: the first bad line aborts the call with a
//! [`KeggError`] carrying the line number, and no records are returned.
//!
//! # Example
//!
//! ```
//! use kegg_common::types::{Category, ListRecord};
//! use kegg_ingest::list::ListParser;
//!
//! let parser = ListParser::new(Category::Ortholog)?;
//! let records = parser.parse("K00844\tHK; hexokinase [EC:2.7.1.1]\n")?;
//!
//! let ListRecord::Ortholog(ko) = &records[0] else { unreachable!() };
//! assert_eq!(ko.symbols, vec!["HK"]);
//! assert_eq!(ko.enzyme_codes, vec!["2.7.1.1"]);
//! # Ok::<(), kegg_common::KeggError>(())
//! ```

mod fields;
pub mod location;
pub mod parser;

pub use location::GenomicLocationParser;

use kegg_common::types::{Category, ListRecord};
use kegg_common::{KeggError, Result};
use tracing::{debug, instrument, warn};

/// Parser for the `list` output of one category
#[derive(Debug, Clone)]
pub struct ListParser {
    category: Category,
    locations: GenomicLocationParser,
}

impl ListParser {
    /// Create a parser for `category`
    ///
    /// Fails with [`KeggError::UnsupportedCategory`] when the category has
    /// no line parser.
    pub fn new(category: Category) -> Result<Self> {
        if let Category::Unsupported(tag) = &category {
            return Err(KeggError::UnsupportedCategory(tag.clone()));
        }

        Ok(Self {
            category,
            locations: GenomicLocationParser::new()?,
        })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Parse a complete `list` response body
    ///
    /// Blank lines are skipped and a trailing newline does not produce a
    /// record. Records are returned in line order.
    #[instrument(skip(self, content), fields(category = %self.category, bytes = content.len()))]
    pub fn parse(&self, content: &str) -> Result<Vec<ListRecord>> {
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;

            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(line_num, error = %e, "Aborting list parse");
                    return Err(e.at_line(line_num));
                },
            }
        }

        debug!(records = records.len(), "Parsed list");
        Ok(records)
    }

    /// Parse a single line with this parser's category
    pub fn parse_line(&self, line: &str) -> Result<ListRecord> {
        let record = match &self.category {
            Category::Pathway => ListRecord::Pathway(parser::parse_pathway(line)?),
            Category::Brite => ListRecord::Brite(parser::parse_brite(line)?),
            Category::Module => ListRecord::Module(parser::parse_module(line)?),
            Category::Ortholog => ListRecord::Ortholog(parser::parse_ortholog(line)?),
            Category::Gene => ListRecord::Gene(parser::parse_gene(line, &self.locations)?),
            Category::ViralGene => ListRecord::ViralGene(parser::parse_viral_gene(line)?),
            Category::ViralPeptide => ListRecord::ViralPeptide(parser::parse_viral_peptide(line)?),
            Category::AddendumGene => ListRecord::AddendumGene(parser::parse_addendum_gene(line)?),
            Category::Unsupported(tag) => {
                return Err(KeggError::UnsupportedCategory(tag.clone()));
            },
        };
        Ok(record)
    }
}

/// Parse a `list` response body for the category named by `tag`
///
/// `tag` accepts the KEGG database names (`pathway`, `brite`, `module`,
/// `ko`, `genes`, `vg`, `vp`, `ag`) and their aliases.
pub fn parse_list(content: &str, tag: &str) -> Result<Vec<ListRecord>> {
    let category = match tag.parse::<Category>() {
        Ok(category) => category,
        Err(never) => match never {},
    };
    ListParser::new(category)?.parse(content)
}
