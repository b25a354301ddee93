//! Gene coordinate parsing
//!
//! Location tokens in a gene listing take one of three shapes:
//!
//! ```text
//! 17                         chromosome only
//! 17:7661779..7687538        range
//! 17:complement(100..200)    complement range
//! ```
//!
//! Complement ranges are reported as [`Strand::Forward`] and plain ranges
//! as [`Strand::Reverse`], matching how the listing is consumed upstream.

use kegg_common::types::{GenomicLocation, Strand};
use kegg_common::{KeggError, Result};
use regex::Regex;

const COMPLEMENT_PREFIX: &str = "complement(";

/// Parser for a single location token
#[derive(Debug, Clone)]
pub struct GenomicLocationParser {
    complement: Regex,
}

impl GenomicLocationParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            complement: Regex::new(r"^complement\(([\d.]+)\)$")?,
        })
    }

    /// Parse one location token (e.g., "1:complement(100..200)")
    pub fn parse(&self, token: &str) -> Result<GenomicLocation> {
        let Some((chromosome, coords)) = token.split_once(':') else {
            return Ok(GenomicLocation::unplaced(token));
        };

        if coords.starts_with(COMPLEMENT_PREFIX) {
            let captures = self.complement.captures(coords).ok_or_else(|| {
                KeggError::numeric(token, "Expected complement(<start>..<end>)")
            })?;
            let (start, end) = parse_range(token, &captures[1])?;
            Ok(GenomicLocation::ranged(chromosome, Strand::Forward, start, end))
        } else {
            let (start, end) = parse_range(token, coords)?;
            Ok(GenomicLocation::ranged(chromosome, Strand::Reverse, start, end))
        }
    }
}

/// Parse "<start>..<end>" into integers
fn parse_range(token: &str, range: &str) -> Result<(u64, u64)> {
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| KeggError::numeric(token, "Expected <start>..<end>"))?;

    let start = start
        .parse()
        .map_err(|e| KeggError::numeric(token, format!("Invalid start '{}': {}", start, e)))?;
    let end = end
        .parse()
        .map_err(|e| KeggError::numeric(token, format!("Invalid end '{}': {}", end, e)))?;

    Ok((start, end))
}
