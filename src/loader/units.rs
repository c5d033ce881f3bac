//! Unit and profile loading: a two-level flattening of the per-sectorial
//! documents. A raw "profile" becomes a `units` row and a raw "option"
//! becomes a `profiles` row.

use anyhow::{Context, Result};

use crate::feed::Feed;
use crate::lang::Languages;
use crate::loader::strings;
use crate::parser::{parse_capacity, parse_id_list, parse_orders};
use crate::store::{ProfileRow, Tx, UnitRow};

/// Sectorial grouping 901 ships a structurally different document and is
/// excluded from iteration.
const NON_CONFORMANT_SECTORIAL: i64 = 901;

/// The sectorial ids to iterate unit documents for, from the reference
/// snapshot's sectorial map.
pub fn sectorial_ids(feed: &Feed, languages: &Languages) -> Result<Vec<i64>> {
    Ok(feed
        .sectorials(languages.reference())?
        .keys()
        .copied()
        .filter(|id| *id != NON_CONFORMANT_SECTORIAL)
        .collect())
}

pub fn load_units(
    tx: &Tx,
    feed: &Feed,
    languages: &Languages,
    sectorials: &[i64],
) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        let mut out = Vec::new();
        for &sectorial in sectorials {
            for group in feed.units(lang, sectorial)? {
                for profile in group.profiles {
                    out.push((profile.id, profile.name));
                }
            }
        }
        Ok(out)
    })?;
    let name_refs = strings::intern_all(tx, "unit", &names, languages)?;

    let mut count = 0;
    for &sectorial in sectorials {
        for group in feed.units(languages.reference(), sectorial)? {
            for profile in &group.profiles {
                let name = name_refs
                    .get(&profile.id)
                    .cloned()
                    .with_context(|| format!("missing interned name for unit {}", profile.id))?;

                let stats = &profile.attributes;
                tx.upsert_unit(&UnitRow {
                    id: profile.id,
                    name,
                    sectorial: group.faction,
                    svg_icon: svg_icon_url(group.faction, group.army),
                    mov_1: stats.mov1,
                    mov_2: stats.mov2,
                    close_combat: stats.cc,
                    ballistic_skill: stats.bs,
                    physique: stats.ph,
                    willpower: stats.wip,
                    armor: stats.arm,
                    bts: stats.bts,
                    wounds: stats.w,
                    silhouette: stats.s,
                    availability: stats.ava,
                    has_structure: stats.structure != 0,
                })?;

                for characteristic in parse_id_list(&profile.characteristics)
                    .with_context(|| format!("unit {}: bad characteristic list", profile.id))?
                {
                    tx.link_unit_characteristic(profile.id, characteristic)?;
                }
                for ability in parse_id_list(&profile.abilities)
                    .with_context(|| format!("unit {}: bad ability list", profile.id))?
                {
                    tx.link_unit_ability(profile.id, ability)?;
                }

                count += 1;
            }
        }
    }

    Ok(count)
}

pub fn load_profiles(
    tx: &Tx,
    feed: &Feed,
    languages: &Languages,
    sectorials: &[i64],
) -> Result<usize> {
    let names = strings::collect(languages, |lang| {
        let mut out = Vec::new();
        for &sectorial in sectorials {
            for group in feed.units(lang, sectorial)? {
                for profile in group.profiles {
                    for option in profile.options {
                        out.push((option.id, option.name));
                    }
                }
            }
        }
        Ok(out)
    })?;
    let name_refs = strings::intern_all(tx, "profile", &names, languages)?;

    let mut count = 0;
    for &sectorial in sectorials {
        for group in feed.units(languages.reference(), sectorial)? {
            for profile in &group.profiles {
                for option in &profile.options {
                    let name = name_refs.get(&option.id).cloned().with_context(|| {
                        format!("missing interned name for profile {}", option.id)
                    })?;

                    let orders = parse_orders(&option.orders)
                        .with_context(|| format!("profile {}: bad order string", option.id))?;
                    tx.upsert_profile(&ProfileRow {
                        id: option.id,
                        name,
                        unit: profile.id,
                        cap: parse_capacity(&option.cap)
                            .with_context(|| format!("profile {}: bad capacity", option.id))?,
                        point_cost: option.points,
                        regular_orders: orders.regular,
                        irregular_orders: orders.irregular,
                        impetuous_orders: orders.impetuous,
                    })?;

                    for weapon in parse_id_list(&option.weapons)
                        .with_context(|| format!("profile {}: bad weapon list", option.id))?
                    {
                        tx.link_profile_weapon(option.id, weapon)?;
                    }
                    for characteristic in parse_id_list(&option.characteristics).with_context(
                        || format!("profile {}: bad characteristic list", option.id),
                    )? {
                        tx.link_profile_characteristic(option.id, characteristic)?;
                    }
                    for ability in parse_id_list(&option.abilities)
                        .with_context(|| format!("profile {}: bad ability list", option.id))?
                    {
                        tx.link_profile_ability(option.id, ability)?;
                    }

                    count += 1;
                }
            }
        }
    }

    Ok(count)
}

fn svg_icon_url(faction: i64, army: i64) -> String {
    format!(
        "https://assets.infinitythegame.com/armyicons/{}/{}.svg",
        faction, army
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_icon_url() {
        assert_eq!(
            svg_icon_url(101, 7),
            "https://assets.infinitythegame.com/armyicons/101/7.svg"
        );
    }
}
