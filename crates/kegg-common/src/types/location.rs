//! Genomic coordinates attached to gene records

use serde::{Deserialize, Serialize};

/// Strand as reported by the KEGG gene listing.
///
/// KEGG list output reports `complement(..)` ranges as [`Strand::Forward`]
/// and plain ranges as [`Strand::Reverse`]. The polarity is kept exactly as
/// the listing reports it and is not corrected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A chromosome with an optional coordinate range.
///
/// `strand`, `start` and `end` are either all present or all absent; the
/// constructors below are the only places that build a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenomicLocation {
    /// Chromosome or contig name (e.g., "1", "MT", "Un")
    pub chromosome: String,
    pub strand: Option<Strand>,
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl GenomicLocation {
    /// A location known only by its chromosome
    pub fn unplaced(chromosome: impl Into<String>) -> Self {
        Self {
            chromosome: chromosome.into(),
            strand: None,
            start: None,
            end: None,
        }
    }

    /// A location with a full coordinate range
    pub fn ranged(chromosome: impl Into<String>, strand: Strand, start: u64, end: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            strand: Some(strand),
            start: Some(start),
            end: Some(end),
        }
    }

    /// The `(strand, start, end)` triple, when the location has a range
    pub fn range(&self) -> Option<(Strand, u64, u64)> {
        match (self.strand, self.start, self.end) {
            (Some(strand), Some(start), Some(end)) => Some((strand, start, end)),
            _ => None,
        }
    }

    /// Check that strand, start and end are jointly present or jointly absent
    pub fn is_consistent(&self) -> bool {
        let present = [
            self.strand.is_some(),
            self.start.is_some(),
            self.end.is_some(),
        ];
        present.iter().all(|p| *p) || present.iter().all(|p| !*p)
    }
}

/// Renders the location back in KEGG list notation.
impl std::fmt::Display for GenomicLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.range() {
            None => write!(f, "{}", self.chromosome),
            Some((Strand::Forward, start, end)) => {
                write!(f, "{}:complement({}..{})", self.chromosome, start, end)
            },
            Some((Strand::Reverse, start, end)) => {
                write!(f, "{}:{}..{}", self.chromosome, start, end)
            },
        }
    }
}
