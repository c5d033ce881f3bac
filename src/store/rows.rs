/// Reference to an interned multilingual string (`"<family>_<id>"`).
///
/// Only `Tx::intern_string` constructs these, so holding one means the row
/// exists in the current transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRef(String);

impl StringRef {
    pub(super) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct WeaponRow {
    pub id: i64,
    pub name: StringRef,
    pub ammo: Option<i64>,
    pub parent: Option<i64>,
    pub is_melee: bool,
    pub short_range: Option<String>,
    pub medium_range: Option<String>,
    pub long_range: Option<String>,
    pub maximum_range: Option<String>,
    pub burst_ranged: Option<i64>,
    pub burst_melee: Option<i64>,
}

#[derive(Debug)]
pub struct UnitRow {
    pub id: i64,
    pub name: StringRef,
    pub sectorial: i64,
    pub svg_icon: String,
    pub mov_1: i64,
    pub mov_2: i64,
    pub close_combat: i64,
    pub ballistic_skill: i64,
    pub physique: i64,
    pub willpower: i64,
    pub armor: i64,
    pub bts: i64,
    pub wounds: i64,
    pub silhouette: i64,
    pub availability: i64,
    pub has_structure: bool,
}

#[derive(Debug)]
pub struct ProfileRow {
    pub id: i64,
    pub name: StringRef,
    pub unit: i64,
    pub cap: f64,
    pub point_cost: i64,
    pub regular_orders: Option<i64>,
    pub irregular_orders: Option<i64>,
    pub impetuous_orders: Option<i64>,
}
