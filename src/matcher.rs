//! Name matching - resolve free-text exercise names against the catalog
//!
//! Two passes over the catalog in declared order: exact name first, then
//! substring in either direction. Catalog order breaks ties, so the same
//! input always resolves to the same entry.

use crate::exercises::{CATALOG, CatalogEntry, Language, display_name};

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Match a name against the built-in catalog
pub fn match_exercise(name: &str, language: Language) -> Option<&'static CatalogEntry> {
    match_in(CATALOG, name, language)
}

/// Match a name against an arbitrary catalog slice
pub fn match_in<'a>(
    catalog: &'a [CatalogEntry],
    name: &str,
    language: Language,
) -> Option<&'a CatalogEntry> {
    let query = normalize(name);
    if query.is_empty() {
        return None;
    }

    let names: Vec<(&CatalogEntry, String)> = catalog
        .iter()
        .map(|e| (e, normalize(display_name(e, language))))
        .collect();

    if let Some((entry, _)) = names.iter().find(|(_, n)| *n == query) {
        return Some(*entry);
    }

    names
        .iter()
        .find(|(_, n)| n.contains(&query) || query.contains(n.as_str()))
        .map(|(entry, _)| *entry)
}
