//! Single-pass loaders for the leaf entities: ammo, characteristics,
//! sectorials and abilities.

use anyhow::{Context, Result};

use crate::feed::Feed;
use crate::lang::Languages;
use crate::loader::strings;
use crate::store::Tx;

pub fn load_ammo(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        Ok(feed
            .ammo(lang)?
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect())
    })?;
    let refs = strings::intern_all(tx, "ammo", &names, languages)?;

    for (id, name) in &refs {
        tx.upsert_ammo(*id, name)?;
    }

    Ok(refs.len())
}

pub fn load_characteristics(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        Ok(feed
            .characteristics(lang)?
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect())
    })?;
    let refs = strings::intern_all(tx, "characteristic", &names, languages)?;

    for (id, name) in &refs {
        tx.upsert_characteristic(*id, name)?;
    }

    Ok(refs.len())
}

pub fn load_sectorials(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        Ok(feed.sectorials(lang)?.into_iter().collect())
    })?;
    let refs = strings::intern_all(tx, "sectorial", &names, languages)?;

    for (id, name) in &refs {
        // Top-level factions sit on the xx01 ids; everything else is a
        // sub-sectorial of its faction.
        let is_faction = id % 100 == 1;
        tx.upsert_sectorial(*id, name, is_faction)?;
    }

    Ok(refs.len())
}

pub fn load_abilities(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        Ok(feed
            .abilities(lang)?
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect())
    })?;
    let wiki_links = strings::collect(languages, |lang| {
        Ok(feed.ability_wiki(lang)?.into_iter().collect())
    })?;

    let name_refs = strings::intern_all(tx, "ability", &names, languages)?;
    let wiki_refs = strings::intern_all(tx, "ability_wiki", &wiki_links, languages)?;

    // Structural fields come from the reference snapshot only.
    let records = feed.abilities(languages.reference())?;
    let count = records.len();

    for record in records {
        let name = name_refs
            .get(&record.id)
            .with_context(|| format!("missing interned name for ability {}", record.id))?;
        tx.upsert_ability(record.id, name, record.item != 0, wiki_refs.get(&record.id))?;
    }

    Ok(count)
}
