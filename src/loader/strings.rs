//! Multilingual name collection and interning.
//!
//! Every loader first assembles the complete per-language name map for its
//! entity family across all feed snapshots, then interns each entry in a
//! single call. Keys already present in the store stay untouched.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::lang::Languages;
use crate::store::{StringRef, Tx};

/// `id -> (language tag -> text)` for one entity family
pub type NameMap = BTreeMap<i64, BTreeMap<String, String>>;

/// Collect per-language texts for one family by fetching the same document
/// from every language snapshot.
pub fn collect<F>(languages: &Languages, mut fetch: F) -> Result<NameMap>
where
    F: FnMut(&str) -> Result<Vec<(i64, String)>>,
{
    let mut names = NameMap::new();

    for tag in languages.tags() {
        for (id, text) in fetch(tag)? {
            names
                .entry(id)
                .or_default()
                .entry(tag.to_string())
                .or_insert(text);
        }
    }

    Ok(names)
}

/// Intern every collected entry, returning the references by numeric id.
pub fn intern_all(
    tx: &Tx,
    family: &str,
    names: &NameMap,
    languages: &Languages,
) -> Result<BTreeMap<i64, StringRef>> {
    let mut refs = BTreeMap::new();

    for (id, values) in names {
        refs.insert(*id, tx.intern_string(family, *id, values, languages)?);
    }

    Ok(refs)
}
