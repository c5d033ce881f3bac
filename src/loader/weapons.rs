//! Weapon loading: properties first, then the weapons themselves in
//! dependency order over the self-referential parent graph.

use anyhow::{bail, ensure, Context, Result};
use std::collections::HashSet;

use crate::feed::Feed;
use crate::lang::Languages;
use crate::loader::strings;
use crate::parser::{decode_burst, normalize_range, parse_id_list, parse_name_list};
use crate::store::{Tx, WeaponRow};

/// Load properties and weapons. Returns `(properties, weapons)` counts.
pub fn load(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<(usize, usize)> {
    let property_count = load_properties(tx, feed, languages)?;

    let names = strings::collect(languages, |lang| {
        Ok(feed
            .weapons(lang)?
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect())
    })?;
    let name_refs = strings::intern_all(tx, "weapon", &names, languages)?;

    // Build the full row set before inserting anything; parent references
    // force a dependency-respecting insertion order.
    let mut pending = Vec::new();
    for record in feed.weapons(languages.reference())? {
        let name = name_refs
            .get(&record.id)
            .cloned()
            .with_context(|| format!("missing interned name for weapon {}", record.id))?;

        let is_melee = record.melee != 0;
        let (burst_ranged, burst_melee) = decode_burst(&record.burst, is_melee);

        let row = WeaponRow {
            id: record.id,
            name,
            ammo: (record.ammo != 0).then_some(record.ammo),
            parent: (record.parent != 0).then_some(record.parent),
            is_melee,
            short_range: normalize_range(&record.short),
            medium_range: normalize_range(&record.medium),
            long_range: normalize_range(&record.long),
            maximum_range: normalize_range(&record.maximum),
            burst_ranged,
            burst_melee,
        };
        let properties = parse_id_list(&record.properties)
            .with_context(|| format!("weapon {}: bad property list", record.id))?;

        pending.push((row, properties));
    }

    let weapon_count = insert_ordered(tx, pending)?;
    Ok((property_count, weapon_count))
}

/// Insert weapons by repeated passes: a weapon is ready once its parent is
/// absent, already inserted this run, or present from an earlier run. A pass
/// with no progress means the remaining records form a cycle (or point at
/// ids that exist nowhere), which is fatal.
fn insert_ordered(tx: &Tx, mut pending: Vec<(WeaponRow, Vec<i64>)>) -> Result<usize> {
    let mut inserted: HashSet<i64> = HashSet::new();
    let mut count = 0;

    while !pending.is_empty() {
        let before = pending.len();
        let mut remaining = Vec::with_capacity(pending.len());

        for (row, properties) in pending {
            let ready = match row.parent {
                None => true,
                Some(parent) => inserted.contains(&parent) || tx.weapon_exists(parent)?,
            };

            if ready {
                tx.upsert_weapon(&row)?;
                for property in &properties {
                    tx.link_weapon_property(row.id, *property)?;
                }
                inserted.insert(row.id);
                count += 1;
            } else {
                remaining.push((row, properties));
            }
        }

        if remaining.len() == before {
            let stuck: Vec<i64> = remaining.iter().map(|(row, _)| row.id).collect();
            bail!(
                "cyclic or unresolvable weapon parent references: {:?}",
                stuck
            );
        }

        pending = remaining;
    }

    Ok(count)
}

/// Properties have no document of their own; their ids and display names
/// ride on the weapon records as two parallel delimiter lists.
fn load_properties(tx: &Tx, feed: &Feed, languages: &Languages) -> Result<usize> {
    let mut names = strings::NameMap::new();

    for tag in languages.tags() {
        for record in feed.weapons(tag)? {
            let ids = parse_id_list(&record.properties)
                .with_context(|| format!("weapon {}: bad property list", record.id))?;
            let labels = parse_name_list(&record.property_names);
            ensure!(
                ids.len() == labels.len(),
                "weapon {}: property id and name lists differ in length ({} vs {})",
                record.id,
                ids.len(),
                labels.len()
            );

            for (id, label) in ids.into_iter().zip(labels) {
                names
                    .entry(id)
                    .or_default()
                    .entry(tag.to_string())
                    .or_insert(label);
            }
        }
    }

    let refs = strings::intern_all(tx, "property", &names, languages)?;
    for (id, name) in &refs {
        tx.upsert_property(*id, name)?;
    }

    Ok(refs.len())
}
