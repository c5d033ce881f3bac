//! The orchestrator: runs every loader in fixed dependency order inside a
//! single transaction, so a mid-run failure commits nothing.

use anyhow::Result;

use crate::feed::Feed;
use crate::lang::Languages;
use crate::loader::{simple, units, weapons};
use crate::store::Store;

/// Run the full load. Returns the number of entity records processed
/// (junction rows not counted).
pub fn run(store: &mut Store, feed: &Feed, languages: &Languages) -> Result<u64> {
    let tx = store.transaction()?;
    let mut total: u64 = 0;

    let count = simple::load_ammo(&tx, feed, languages)?;
    println!("ammo: {} records", count);
    total += count as u64;

    let count = simple::load_abilities(&tx, feed, languages)?;
    println!("abilities: {} records", count);
    total += count as u64;

    let count = simple::load_characteristics(&tx, feed, languages)?;
    println!("characteristics: {} records", count);
    total += count as u64;

    let count = simple::load_sectorials(&tx, feed, languages)?;
    println!("sectorials: {} records", count);
    total += count as u64;

    let (properties, weapon_count) = weapons::load(&tx, feed, languages)?;
    println!("properties: {} records", properties);
    println!("weapons: {} records", weapon_count);
    total += (properties + weapon_count) as u64;

    let sectorials = units::sectorial_ids(feed, languages)?;

    let count = units::load_units(&tx, feed, languages, &sectorials)?;
    println!("units: {} records", count);
    total += count as u64;

    let count = units::load_profiles(&tx, feed, languages, &sectorials)?;
    println!("profiles: {} records", count);
    total += count as u64;

    tx.commit()?;

    Ok(total)
}
