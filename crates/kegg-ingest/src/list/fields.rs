// Field-splitting helpers shared by the category parsers

use kegg_common::types::Category;
use kegg_common::{KeggError, Result};

/// Split a line on tab into exactly `N` fields
pub(crate) fn split_fields<'a, const N: usize>(
    line: &'a str,
    category: &Category,
) -> Result<[&'a str; N]> {
    let fields: Vec<&str> = line.split('\t').collect();
    let count = fields.len();

    fields.try_into().map_err(|_| {
        KeggError::malformed(
            category.clone(),
            format!("Expected {} tab-separated fields, got {}", N, count),
        )
    })
}

/// Reject empty identifiers
pub(crate) fn require_id(id: &str, category: &Category) -> Result<String> {
    if id.is_empty() {
        return Err(KeggError::malformed(category.clone(), "Empty identifier"));
    }
    Ok(id.to_string())
}

/// Split a sub-field into owned items, keeping empty items as-is
pub(crate) fn split_list(part: &str, delimiter: &str) -> Vec<String> {
    part.split(delimiter).map(str::to_string).collect()
}

/// Split `text` at an enzyme-code marker such as `" [EC:"` or `" (EC:"`.
///
/// Returns the text before the marker and the space-separated codes up to
/// the first `close` after it. Text without the marker is returned whole
/// with no codes.
pub(crate) fn split_enzyme_block<'a>(
    text: &'a str,
    marker: &str,
    close: char,
    category: &Category,
) -> Result<(&'a str, Vec<String>)> {
    let Some((name, tail)) = text.split_once(marker) else {
        return Ok((text, Vec::new()));
    };

    let (block, _) = tail.split_once(close).ok_or_else(|| {
        KeggError::malformed(
            category.clone(),
            format!("Unterminated enzyme block after '{}'", marker.trim()),
        )
    })?;

    Ok((name, split_list(block, " ")))
}
