//! Serde shapes of the raw feed documents.
//!
//! Numeric `0` in the weapon `ammo` and `parent` fields means "absent";
//! delimiter-encoded list fields stay raw strings here and are decoded by
//! `crate::parser`.

use serde::Deserialize;

/// Shared shape of the ammo and characteristics lists
#[derive(Debug, Deserialize)]
pub struct RawNamed {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawAbility {
    pub id: i64,
    pub name: String,
    /// Numeric flag; non-zero marks the ability as an item
    pub item: i64,
}

#[derive(Debug, Deserialize)]
pub struct RawWeapon {
    pub id: i64,
    pub name: String,
    /// Numeric flag; non-zero marks a melee weapon
    pub melee: i64,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub maximum: String,
    #[serde(default)]
    pub burst: String,
    #[serde(default)]
    pub ammo: i64,
    /// `|`-delimited property ids, parallel to `property_names`
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub property_names: String,
    #[serde(default)]
    pub parent: i64,
}

/// Outer army grouping of a per-sectorial unit document
#[derive(Debug, Deserialize)]
pub struct RawUnitGroup {
    pub army: i64,
    pub faction: i64,
    pub profiles: Vec<RawProfile>,
}

/// A raw profile; becomes a `units` row
#[derive(Debug, Deserialize)]
pub struct RawProfile {
    pub id: i64,
    pub name: String,
    pub attributes: RawAttributes,
    #[serde(default)]
    pub characteristics: String,
    #[serde(default)]
    pub abilities: String,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// The fixed-key stat attribute map of a raw profile
#[derive(Debug, Deserialize)]
pub struct RawAttributes {
    pub mov1: i64,
    pub mov2: i64,
    pub cc: i64,
    pub bs: i64,
    pub ph: i64,
    pub wip: i64,
    pub arm: i64,
    pub bts: i64,
    pub w: i64,
    pub s: i64,
    pub ava: i64,
    /// Non-zero when the wounds attribute tracks structure instead
    #[serde(default, rename = "str")]
    pub structure: i64,
}

/// A raw option; becomes a `profiles` row
#[derive(Debug, Deserialize)]
pub struct RawOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cap: String,
    pub points: i64,
    #[serde(default)]
    pub orders: String,
    #[serde(default)]
    pub weapons: String,
    #[serde(default)]
    pub characteristics: String,
    #[serde(default)]
    pub abilities: String,
}
