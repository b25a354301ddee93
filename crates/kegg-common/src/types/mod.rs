//! Record types produced by the KEGG list parser
//!
//! One struct per list category. Records are plain values: every field is
//! owned, list fields are empty rather than absent, and optional sub-fields
//! use `Option`.

mod category;
mod location;

pub use category::Category;
pub use location::{GenomicLocation, Strand};

use serde::{Deserialize, Serialize};

/// Entry of `list/pathway`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayRecord {
    /// Pathway identifier (e.g., "map00010")
    pub id: String,
    pub name: String,
}

/// Entry of `list/brite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriteRecord {
    /// BRITE hierarchy identifier (e.g., "br08901")
    pub id: String,
    pub name: String,
}

/// Entry of `list/module`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module identifier (e.g., "M00001")
    pub id: String,
    pub name: String,
}

/// Entry of `list/ko`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrthologRecord {
    /// KO identifier (e.g., "K00844")
    pub id: String,
    /// Gene symbols (e.g., ["HK", "hxk"]), possibly empty
    pub symbols: Vec<String>,
    pub name: String,
    /// EC numbers (e.g., ["2.7.1.1"]), possibly empty
    pub enzyme_codes: Vec<String>,
}

/// Entry of an organism gene listing (`list/hsa`, `list/eco`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    /// Organism-prefixed gene identifier (e.g., "hsa:7157")
    pub id: String,
    /// Feature type (e.g., "CDS", "tRNA", "ncRNA")
    pub gene_type: String,
    /// At least one location
    pub locations: Vec<GenomicLocation>,
    pub symbols: Vec<String>,
    pub description: String,
}

/// Entry of `list/vg`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralGeneRecord {
    pub id: String,
    /// At least one symbol
    pub symbols: Vec<String>,
    pub organism: String,
    pub description: String,
}

/// Entry of `list/vp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralPeptideRecord {
    pub id: String,
    pub description: String,
}

/// Entry of `list/ag`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddendumGeneRecord {
    pub id: String,
    pub symbol: Option<String>,
    pub name: String,
    pub enzyme_codes: Vec<String>,
}

/// One parsed list line, tagged by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ListRecord {
    Pathway(PathwayRecord),
    Brite(BriteRecord),
    Module(ModuleRecord),
    Ortholog(OrthologRecord),
    Gene(GeneRecord),
    ViralGene(ViralGeneRecord),
    ViralPeptide(ViralPeptideRecord),
    AddendumGene(AddendumGeneRecord),
}

impl ListRecord {
    pub fn id(&self) -> &str {
        match self {
            ListRecord::Pathway(r) => &r.id,
            ListRecord::Brite(r) => &r.id,
            ListRecord::Module(r) => &r.id,
            ListRecord::Ortholog(r) => &r.id,
            ListRecord::Gene(r) => &r.id,
            ListRecord::ViralGene(r) => &r.id,
            ListRecord::ViralPeptide(r) => &r.id,
            ListRecord::AddendumGene(r) => &r.id,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ListRecord::Pathway(_) => Category::Pathway,
            ListRecord::Brite(_) => Category::Brite,
            ListRecord::Module(_) => Category::Module,
            ListRecord::Ortholog(_) => Category::Ortholog,
            ListRecord::Gene(_) => Category::Gene,
            ListRecord::ViralGene(_) => Category::ViralGene,
            ListRecord::ViralPeptide(_) => Category::ViralPeptide,
            ListRecord::AddendumGene(_) => Category::AddendumGene,
        }
    }

    /// Convert record to TSV format (without header)
    ///
    /// List fields are joined with the delimiter they were split on
    /// (", " for symbols and locations, " " for EC numbers).
    pub fn to_tsv(&self) -> String {
        match self {
            ListRecord::Pathway(r) => format!("{}\t{}", r.id, r.name),
            ListRecord::Brite(r) => format!("{}\t{}", r.id, r.name),
            ListRecord::Module(r) => format!("{}\t{}", r.id, r.name),
            ListRecord::Ortholog(r) => format!(
                "{}\t{}\t{}\t{}",
                r.id,
                r.symbols.join(", "),
                r.name,
                r.enzyme_codes.join(" ")
            ),
            ListRecord::Gene(r) => format!(
                "{}\t{}\t{}\t{}\t{}",
                r.id,
                r.gene_type,
                r.locations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                r.symbols.join(", "),
                r.description
            ),
            ListRecord::ViralGene(r) => format!(
                "{}\t{}\t{}\t{}",
                r.id,
                r.symbols.join(", "),
                r.organism,
                r.description
            ),
            ListRecord::ViralPeptide(r) => format!("{}\t{}", r.id, r.description),
            ListRecord::AddendumGene(r) => format!(
                "{}\t{}\t{}\t{}",
                r.id,
                r.symbol.as_deref().unwrap_or(""),
                r.name,
                r.enzyme_codes.join(" ")
            ),
        }
    }

    /// Get TSV header for a category, `None` when the category has no parser
    pub fn tsv_header(category: &Category) -> Option<&'static str> {
        let header = match category {
            Category::Pathway | Category::Brite | Category::Module => "id\tname",
            Category::Ortholog => "id\tsymbols\tname\tenzyme_codes",
            Category::Gene => "id\tgene_type\tlocations\tsymbols\tdescription",
            Category::ViralGene => "id\tsymbols\torganism\tdescription",
            Category::ViralPeptide => "id\tdescription",
            Category::AddendumGene => "id\tsymbol\tname\tenzyme_codes",
            Category::Unsupported(_) => return None,
        };
        Some(header)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_gene() -> ListRecord {
        ListRecord::Gene(GeneRecord {
            id: "hsa:7157".to_string(),
            gene_type: "CDS".to_string(),
            locations: vec![GenomicLocation::ranged("17", Strand::Forward, 7661779, 7687538)],
            symbols: vec!["TP53".to_string(), "BCC7".to_string()],
            description: "tumor protein p53".to_string(),
        })
    }

    #[test]
    fn test_record_accessors() {
        let record = sample_gene();
        assert_eq!(record.id(), "hsa:7157");
        assert_eq!(record.category(), Category::Gene);
    }

    #[test]
    fn test_gene_to_tsv() {
        assert_eq!(
            sample_gene().to_tsv(),
            "hsa:7157\tCDS\t17:complement(7661779..7687538)\tTP53, BCC7\ttumor protein p53"
        );
    }

    #[test]
    fn test_addendum_to_tsv_without_symbol() {
        let record = ListRecord::AddendumGene(AddendumGeneRecord {
            id: "ag:1".to_string(),
            symbol: None,
            name: "some protein".to_string(),
            enzyme_codes: vec!["1.1.1.1".to_string(), "1.1.1.2".to_string()],
        });
        assert_eq!(record.to_tsv(), "ag:1\t\tsome protein\t1.1.1.1 1.1.1.2");
    }

    #[test]
    fn test_tsv_header_column_count_matches_rows() {
        let record = sample_gene();
        let header = ListRecord::tsv_header(&record.category()).unwrap();
        assert_eq!(
            header.split('\t').count(),
            record.to_tsv().split('\t').count()
        );
        assert!(ListRecord::tsv_header(&Category::Unsupported("compound".into())).is_none());
    }

    #[test]
    fn test_list_record_serializes_with_category_tag() {
        let record = ListRecord::Pathway(PathwayRecord {
            id: "map00010".to_string(),
            name: "Glycolysis / Gluconeogenesis".to_string(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "pathway");
        assert_eq!(json["id"], "map00010");

        let back: ListRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
