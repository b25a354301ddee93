//! List categories understood by the parser

use serde::{Deserialize, Serialize};

/// A KEGG `list` category.
///
/// The eight parseable categories are closed variants. Any other tag
/// (organism, compound, glycan, reaction, enzyme, ...) is carried as
/// [`Category::Unsupported`] and rejected when parsing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pathway,
    Brite,
    Module,
    Ortholog,
    Gene,
    ViralGene,
    ViralPeptide,
    AddendumGene,
    Unsupported(String),
}

impl Category {
    /// Categories with a registered line parser, in KEGG listing order
    pub const SUPPORTED: [Category; 8] = [
        Category::Pathway,
        Category::Brite,
        Category::Module,
        Category::Ortholog,
        Category::Gene,
        Category::ViralGene,
        Category::ViralPeptide,
        Category::AddendumGene,
    ];

    /// Canonical KEGG tag (`ko`, `genes`, `vg`, ...)
    pub fn as_str(&self) -> &str {
        match self {
            Category::Pathway => "pathway",
            Category::Brite => "brite",
            Category::Module => "module",
            Category::Ortholog => "ko",
            Category::Gene => "genes",
            Category::ViralGene => "vg",
            Category::ViralPeptide => "vp",
            Category::AddendumGene => "ag",
            Category::Unsupported(tag) => tag,
        }
    }

    /// Alternative spellings accepted by [`str::parse`]
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Pathway => &["path"],
            Category::Brite => &["br"],
            Category::Module => &["md"],
            Category::Ortholog => &["orthology", "ortholog"],
            Category::Gene => &["gene"],
            Category::ViralGene => &["viral_gene"],
            Category::ViralPeptide => &["viral_peptide"],
            Category::AddendumGene => &["addendum", "addendum_gene"],
            Category::Unsupported(_) => &[],
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Category::Unsupported(_))
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim();
        let category = match tag.to_lowercase().as_str() {
            "pathway" | "path" => Category::Pathway,
            "brite" | "br" => Category::Brite,
            "module" | "md" => Category::Module,
            "ko" | "orthology" | "ortholog" => Category::Ortholog,
            "genes" | "gene" => Category::Gene,
            "vg" | "viral_gene" => Category::ViralGene,
            "vp" | "viral_peptide" => Category::ViralPeptide,
            "ag" | "addendum" | "addendum_gene" => Category::AddendumGene,
            _ => Category::Unsupported(tag.to_string()),
        };
        Ok(category)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
