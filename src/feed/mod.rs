//! Read access to the locally fetched per-language JSON dumps.
//!
//! The fetch layer (an external collaborator) writes one subdirectory per
//! language tag, each holding one document per entity family. Naming note:
//! the raw feed nests "profiles" inside an outer army grouping and "options"
//! inside each profile; a raw profile normalizes to a `units` row and a raw
//! option to a `profiles` row.

mod records;

pub use records::{
    RawAbility, RawAttributes, RawNamed, RawOption, RawProfile, RawUnitGroup, RawWeapon,
};

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::lang::Languages;

pub struct Feed {
    root: PathBuf,
}

impl Feed {
    /// Open the dump directory, verifying one subdirectory per configured
    /// language exists. A missing directory is a fatal precondition failure.
    pub fn open(root: &Path, languages: &Languages) -> Result<Self> {
        ensure!(root.is_dir(), "input directory {:?} does not exist", root);

        for tag in languages.tags() {
            let dir = root.join(tag);
            ensure!(
                dir.is_dir(),
                "missing language directory {:?} (expected one subdirectory per configured language)",
                dir
            );
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn ammo(&self, lang: &str) -> Result<Vec<RawNamed>> {
        self.read(lang, "ammo.json")
    }

    pub fn characteristics(&self, lang: &str) -> Result<Vec<RawNamed>> {
        self.read(lang, "characteristics.json")
    }

    pub fn abilities(&self, lang: &str) -> Result<Vec<RawAbility>> {
        self.read(lang, "abilities.json")
    }

    pub fn ability_wiki(&self, lang: &str) -> Result<BTreeMap<i64, String>> {
        let raw: BTreeMap<String, String> = self.read(lang, "ability_wiki.json")?;
        parse_keyed_map(raw, "ability_wiki.json")
    }

    pub fn sectorials(&self, lang: &str) -> Result<BTreeMap<i64, String>> {
        let raw: BTreeMap<String, String> = self.read(lang, "sectorials.json")?;
        parse_keyed_map(raw, "sectorials.json")
    }

    pub fn weapons(&self, lang: &str) -> Result<Vec<RawWeapon>> {
        self.read(lang, "weapons.json")
    }

    /// The per-sectorial unit document (outer army groupings with nested
    /// profiles and options)
    pub fn units(&self, lang: &str, sectorial: i64) -> Result<Vec<RawUnitGroup>> {
        self.read(lang, &format!("units/{}.json", sectorial))
    }

    fn read<T: DeserializeOwned>(&self, lang: &str, file: &str) -> Result<T> {
        let path = self.root.join(lang).join(file);
        let handle =
            File::open(&path).with_context(|| format!("failed to open feed file {:?}", path))?;
        serde_json::from_reader(BufReader::new(handle))
            .with_context(|| format!("malformed feed document {:?}", path))
    }
}

/// Id-keyed maps arrive with string keys; a non-numeric key is a structural
/// error.
fn parse_keyed_map(raw: BTreeMap<String, String>, file: &str) -> Result<BTreeMap<i64, String>> {
    raw.into_iter()
        .map(|(key, value)| {
            let id: i64 = key
                .parse()
                .with_context(|| format!("non-numeric id {:?} in {}", key, file))?;
            Ok((id, value))
        })
        .collect()
}
