//! Normalized table definitions for the Infinity army data model.
//!
//! `ALL_TABLES` is ordered so that every table appears after the tables its
//! foreign keys reference; the `strings` table is created separately because
//! its columns depend on the configured language list.

use super::{ColType, Column, ForeignKey, Table};

/// The interned multilingual strings table (dynamic columns, see
/// `strings_create_sql`).
pub const STRINGS_TABLE: &str = "strings";

// =============================================================================
// Leaf entities
// =============================================================================

pub static AMMO: Table = Table {
    name: "ammo",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[ForeignKey::new("name", "strings")],
};

pub static CHARACTERISTICS: Table = Table {
    name: "characteristics",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[ForeignKey::new("name", "strings")],
};

pub static SECTORIALS: Table = Table {
    name: "sectorials",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
        Column::required("is_faction", ColType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[ForeignKey::new("name", "strings")],
};

pub static ABILITIES: Table = Table {
    name: "abilities",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
        Column::required("is_item", ColType::Integer),
        Column::new("wiki", ColType::Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("name", "strings"),
        ForeignKey::new("wiki", "strings"),
    ],
};

pub static PROPERTIES: Table = Table {
    name: "properties",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[ForeignKey::new("name", "strings")],
};

// =============================================================================
// Weapons (self-referential parent chain)
// =============================================================================

pub static WEAPONS: Table = Table {
    name: "weapons",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
        Column::new("ammo_id", ColType::Integer),
        Column::new("parent_id", ColType::Integer),
        Column::required("is_melee", ColType::Integer),
        Column::new("short_range", ColType::Text),
        Column::new("medium_range", ColType::Text),
        Column::new("long_range", ColType::Text),
        Column::new("maximum_range", ColType::Text),
        Column::new("burst_ranged", ColType::Integer),
        Column::new("burst_melee", ColType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("name", "strings"),
        ForeignKey::new("ammo_id", "ammo"),
        ForeignKey::new("parent_id", "weapons"),
    ],
};

// =============================================================================
// Units and profiles (two-level flattening of the raw feed)
// =============================================================================

pub static UNITS: Table = Table {
    name: "units",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
        Column::required("sectorial_id", ColType::Integer),
        Column::required("svg_icon", ColType::Text),
        Column::required("mov_1", ColType::Integer),
        Column::required("mov_2", ColType::Integer),
        Column::required("close_combat", ColType::Integer),
        Column::required("ballistic_skill", ColType::Integer),
        Column::required("physique", ColType::Integer),
        Column::required("willpower", ColType::Integer),
        Column::required("armor", ColType::Integer),
        Column::required("bts", ColType::Integer),
        Column::required("wounds", ColType::Integer),
        Column::required("silhouette", ColType::Integer),
        Column::required("availability", ColType::Integer),
        Column::required("has_structure", ColType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("name", "strings"),
        ForeignKey::new("sectorial_id", "sectorials"),
    ],
};

pub static PROFILES: Table = Table {
    name: "profiles",
    columns: &[
        Column::required("id", ColType::Integer),
        Column::required("name", ColType::Text),
        Column::required("unit_id", ColType::Integer),
        Column::required("cap", ColType::Real),
        Column::required("point_cost", ColType::Integer),
        Column::new("regular_orders", ColType::Integer),
        Column::new("irregular_orders", ColType::Integer),
        Column::new("impetuous_orders", ColType::Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("name", "strings"),
        ForeignKey::new("unit_id", "units"),
    ],
};

// =============================================================================
// Junction tables
// =============================================================================

pub static WEAPON_PROPERTIES: Table = Table {
    name: "weapon_properties",
    columns: &[
        Column::required("weapon_id", ColType::Integer),
        Column::required("property_id", ColType::Integer),
    ],
    primary_key: &["weapon_id", "property_id"],
    foreign_keys: &[
        ForeignKey::new("weapon_id", "weapons"),
        ForeignKey::new("property_id", "properties"),
    ],
};

pub static UNIT_CHARACTERISTICS: Table = Table {
    name: "unit_characteristics",
    columns: &[
        Column::required("unit_id", ColType::Integer),
        Column::required("characteristic_id", ColType::Integer),
    ],
    primary_key: &["unit_id", "characteristic_id"],
    foreign_keys: &[
        ForeignKey::new("unit_id", "units"),
        ForeignKey::new("characteristic_id", "characteristics"),
    ],
};

pub static UNIT_ABILITIES: Table = Table {
    name: "unit_abilities",
    columns: &[
        Column::required("unit_id", ColType::Integer),
        Column::required("ability_id", ColType::Integer),
    ],
    primary_key: &["unit_id", "ability_id"],
    foreign_keys: &[
        ForeignKey::new("unit_id", "units"),
        ForeignKey::new("ability_id", "abilities"),
    ],
};

pub static PROFILE_WEAPONS: Table = Table {
    name: "profile_weapons",
    columns: &[
        Column::required("profile_id", ColType::Integer),
        Column::required("weapon_id", ColType::Integer),
    ],
    primary_key: &["profile_id", "weapon_id"],
    foreign_keys: &[
        ForeignKey::new("profile_id", "profiles"),
        ForeignKey::new("weapon_id", "weapons"),
    ],
};

pub static PROFILE_CHARACTERISTICS: Table = Table {
    name: "profile_characteristics",
    columns: &[
        Column::required("profile_id", ColType::Integer),
        Column::required("characteristic_id", ColType::Integer),
    ],
    primary_key: &["profile_id", "characteristic_id"],
    foreign_keys: &[
        ForeignKey::new("profile_id", "profiles"),
        ForeignKey::new("characteristic_id", "characteristics"),
    ],
};

pub static PROFILE_ABILITIES: Table = Table {
    name: "profile_abilities",
    columns: &[
        Column::required("profile_id", ColType::Integer),
        Column::required("ability_id", ColType::Integer),
    ],
    primary_key: &["profile_id", "ability_id"],
    foreign_keys: &[
        ForeignKey::new("profile_id", "profiles"),
        ForeignKey::new("ability_id", "abilities"),
    ],
};

/// All normalized tables in dependency order (FK parents first)
pub static ALL_TABLES: &[&Table] = &[
    &AMMO,
    &CHARACTERISTICS,
    &SECTORIALS,
    &ABILITIES,
    &PROPERTIES,
    &WEAPONS,
    &UNITS,
    &PROFILES,
    &WEAPON_PROPERTIES,
    &UNIT_CHARACTERISTICS,
    &UNIT_ABILITIES,
    &PROFILE_WEAPONS,
    &PROFILE_CHARACTERISTICS,
    &PROFILE_ABILITIES,
];

/// Names of every table in the normalized store, strings included
pub fn table_names() -> Vec<&'static str> {
    let mut names = vec![STRINGS_TABLE];
    names.extend(ALL_TABLES.iter().map(|t| t.name));
    names
}
