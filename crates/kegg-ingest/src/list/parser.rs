//! Per-category line parsers
//!
//! Each function consumes one non-blank line of `list` output and builds
//! one record. The formats are:
//!
//! ```text
//! pathway / brite / module   id \t name
//! ko                         id \t [symbols; ]name[ [EC:codes]]
//! genes                      id \t type \t locations \t [symbols; ]description
//! vg                         id \t symbols; organism; description
//! vp                         id \t description
//! ag                         id \t [symbol; ]name[ (EC:codes)]
//! ```
//!
//! Symbols and locations are separated by ", ", EC numbers by " ".

use kegg_common::types::{
    AddendumGeneRecord, BriteRecord, Category, GeneRecord, ModuleRecord, OrthologRecord,
    PathwayRecord, ViralGeneRecord, ViralPeptideRecord,
};
use kegg_common::{KeggError, Result};

use super::fields::{require_id, split_enzyme_block, split_fields, split_list};
use super::location::GenomicLocationParser;

const SYMBOL_SEPARATOR: &str = "; ";
const LIST_SEPARATOR: &str = ", ";
const ORTHOLOG_EC_MARKER: &str = " [EC:";
const ADDENDUM_EC_MARKER: &str = " (EC:";

/// Parse a `list/pathway` line: `map00010\tGlycolysis / Gluconeogenesis`
pub fn parse_pathway(line: &str) -> Result<PathwayRecord> {
    let (id, name) = parse_id_name(line, &Category::Pathway)?;
    Ok(PathwayRecord { id, name })
}

/// Parse a `list/brite` line: `br08901\tKEGG pathway maps`
pub fn parse_brite(line: &str) -> Result<BriteRecord> {
    let (id, name) = parse_id_name(line, &Category::Brite)?;
    Ok(BriteRecord { id, name })
}

/// Parse a `list/module` line: `M00001\tGlycolysis (Embden-Meyerhof pathway) ...`
pub fn parse_module(line: &str) -> Result<ModuleRecord> {
    let (id, name) = parse_id_name(line, &Category::Module)?;
    Ok(ModuleRecord { id, name })
}

fn parse_id_name(line: &str, category: &Category) -> Result<(String, String)> {
    let [id, name] = split_fields::<2>(line, category)?;
    Ok((require_id(id, category)?, name.to_string()))
}

/// Parse a `list/ko` line
///
/// # Format
/// ```text
/// K00844\tHK; hexokinase [EC:2.7.1.1]
/// K99999\tsome enzyme
/// ```
pub fn parse_ortholog(line: &str) -> Result<OrthologRecord> {
    let category = Category::Ortholog;
    let [id, rest] = split_fields::<2>(line, &category)?;
    let id = require_id(id, &category)?;

    if !rest.contains(';') {
        return Ok(OrthologRecord {
            id,
            symbols: Vec::new(),
            name: rest.to_string(),
            enzyme_codes: Vec::new(),
        });
    }

    let (symbols_part, remainder) = rest
        .split_once(SYMBOL_SEPARATOR)
        .ok_or_else(|| KeggError::malformed(category.clone(), "Expected '; ' after symbols"))?;
    let (name, enzyme_codes) = split_enzyme_block(remainder, ORTHOLOG_EC_MARKER, ']', &category)?;

    Ok(OrthologRecord {
        id,
        symbols: split_list(symbols_part, LIST_SEPARATOR),
        name: name.to_string(),
        enzyme_codes,
    })
}

/// Parse an organism gene line
///
/// # Format
/// ```text
/// hsa:7157\tCDS\t17:complement(7661779..7687538)\tTP53, BCC7; tumor protein p53
/// hsa:100\tncRNA\t1, 2\tsome RNA
/// ```
pub fn parse_gene(line: &str, location_parser: &GenomicLocationParser) -> Result<GeneRecord> {
    let category = Category::Gene;
    let [id, gene_type, location_column, gene_info] = split_fields::<4>(line, &category)?;
    let id = require_id(id, &category)?;

    let (symbols, description) = match gene_info.split_once(SYMBOL_SEPARATOR) {
        Some((symbols_part, description)) => (split_list(symbols_part, LIST_SEPARATOR), description),
        None => (Vec::new(), gene_info),
    };

    if location_column.is_empty() {
        return Err(KeggError::malformed(category, "Empty location column"));
    }

    let locations = location_column
        .split(LIST_SEPARATOR)
        .map(|token| {
            if token.is_empty() {
                Err(KeggError::malformed(category.clone(), "Empty location token"))
            } else {
                location_parser.parse(token)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GeneRecord {
        id,
        gene_type: gene_type.to_string(),
        locations,
        symbols,
        description: description.to_string(),
    })
}

/// Parse a `list/vg` line
///
/// # Format
/// ```text
/// vg:155971\tE6; Human papillomavirus type 16; transforming protein E6
/// ```
pub fn parse_viral_gene(line: &str) -> Result<ViralGeneRecord> {
    let category = Category::ViralGene;
    let [id, gene_info] = split_fields::<2>(line, &category)?;
    let id = require_id(id, &category)?;

    let parts: Vec<&str> = gene_info.split(SYMBOL_SEPARATOR).collect();
    let [symbols_part, organism, description] = parts.as_slice() else {
        return Err(KeggError::malformed(
            category,
            format!("Expected symbols; organism; description, got {} parts", parts.len()),
        ));
    };

    Ok(ViralGeneRecord {
        id,
        symbols: split_list(symbols_part, LIST_SEPARATOR),
        organism: organism.to_string(),
        description: description.to_string(),
    })
}

/// Parse a `list/vp` line: `vp:155971_1\tE6 protein`
pub fn parse_viral_peptide(line: &str) -> Result<ViralPeptideRecord> {
    let category = Category::ViralPeptide;
    let [id, description] = split_fields::<2>(line, &category)?;

    Ok(ViralPeptideRecord {
        id: require_id(id, &category)?,
        description: description.to_string(),
    })
}

/// Parse a `list/ag` line
///
/// # Format
/// ```text
/// ag:CAA76703\tcya; adenylate cyclase (EC:4.6.1.1)
/// ag:1\tsome protein (EC:1.1.1.1)
/// ```
pub fn parse_addendum_gene(line: &str) -> Result<AddendumGeneRecord> {
    let category = Category::AddendumGene;
    let [id, gene_info] = split_fields::<2>(line, &category)?;
    let id = require_id(id, &category)?;

    let (symbol, rest) = match gene_info.split_once(SYMBOL_SEPARATOR) {
        Some((symbol, rest)) => (Some(symbol.to_string()), rest),
        None => (None, gene_info),
    };
    let (name, enzyme_codes) = split_enzyme_block(rest, ADDENDUM_EC_MARKER, ')', &category)?;

    Ok(AddendumGeneRecord {
        id,
        symbol,
        name: name.to_string(),
        enzyme_codes,
    })
}
