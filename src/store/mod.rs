//! Repository layer over SQLite.
//!
//! Every write primitive is an idempotent `INSERT OR IGNORE` keyed on the
//! primary identity, so re-running a load against an existing database is a
//! pure no-op. Foreign keys are enforced, which turns dangling references
//! into fatal errors inside the load transaction.

mod rows;

pub use rows::{ProfileRow, StringRef, UnitRow, WeaponRow};

use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::path::Path;

use crate::lang::Languages;
use crate::schema::{self, ALL_TABLES, STRINGS_TABLE};

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database. With `init` any existing file is
    /// removed first.
    pub fn open(db_path: &Path, init: bool) -> Result<Self> {
        if init && db_path.exists() {
            std::fs::remove_file(db_path).context("failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("failed to open database")?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        Ok(Self { conn })
    }

    /// Create all tables and indexes (idempotent)
    pub fn create_schema(&self, languages: &Languages) -> Result<()> {
        self.conn
            .execute(&schema::strings_create_sql(languages), [])
            .context("failed to create strings table")?;

        for table in ALL_TABLES {
            self.conn
                .execute(&schema::create_table_sql(table), [])
                .with_context(|| format!("failed to create table: {}", table.name))?;

            for index_sql in schema::generate_indexes(table) {
                self.conn
                    .execute(&index_sql, [])
                    .with_context(|| format!("failed to create index for: {}", table.name))?;
            }
        }

        Ok(())
    }

    /// Begin the load transaction; nothing is visible until `Tx::commit`.
    pub fn transaction(&mut self) -> Result<Tx<'_>> {
        Ok(Tx {
            tx: self.conn.transaction()?,
        })
    }
}

pub struct Tx<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl Tx<'_> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit().context("failed to commit load transaction")
    }

    /// Intern a multilingual string under `"<family>_<id>"`.
    ///
    /// First write wins: if the key already exists the stored row is left
    /// untouched and a reference to it is returned. Callers assemble the
    /// complete per-language map before this single call, so all configured
    /// languages land in one shot.
    pub fn intern_string(
        &self,
        family: &str,
        id: i64,
        values: &BTreeMap<String, String>,
        languages: &Languages,
    ) -> Result<StringRef> {
        let key = format!("{}_{}", family, id);

        let mut columns = vec!["id".to_string()];
        let mut bindings = vec![Value::Text(key.clone())];
        for tag in languages.tags() {
            columns.push(format!("text_{}", tag));
            bindings.push(match values.get(tag) {
                Some(text) => Value::Text(text.clone()),
                None => Value::Null,
            });
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
            STRINGS_TABLE,
            columns.join(", "),
            placeholders
        );

        let mut stmt = self.tx.prepare_cached(&sql)?;
        stmt.execute(params_from_iter(bindings))
            .with_context(|| format!("failed to intern string {}", key))?;

        Ok(StringRef::new(key))
    }

    pub fn upsert_ammo(&self, id: i64, name: &StringRef) -> Result<()> {
        self.tx
            .prepare_cached("INSERT OR IGNORE INTO ammo (id, name) VALUES (?1, ?2)")?
            .execute(params![id, name.as_str()])?;
        Ok(())
    }

    pub fn upsert_characteristic(&self, id: i64, name: &StringRef) -> Result<()> {
        self.tx
            .prepare_cached("INSERT OR IGNORE INTO characteristics (id, name) VALUES (?1, ?2)")?
            .execute(params![id, name.as_str()])?;
        Ok(())
    }

    pub fn upsert_sectorial(&self, id: i64, name: &StringRef, is_faction: bool) -> Result<()> {
        self.tx
            .prepare_cached(
                "INSERT OR IGNORE INTO sectorials (id, name, is_faction) VALUES (?1, ?2, ?3)",
            )?
            .execute(params![id, name.as_str(), is_faction])?;
        Ok(())
    }

    pub fn upsert_ability(
        &self,
        id: i64,
        name: &StringRef,
        is_item: bool,
        wiki: Option<&StringRef>,
    ) -> Result<()> {
        self.tx
            .prepare_cached(
                "INSERT OR IGNORE INTO abilities (id, name, is_item, wiki) VALUES (?1, ?2, ?3, ?4)",
            )?
            .execute(params![id, name.as_str(), is_item, wiki.map(StringRef::as_str)])?;
        Ok(())
    }

    pub fn upsert_property(&self, id: i64, name: &StringRef) -> Result<()> {
        self.tx
            .prepare_cached("INSERT OR IGNORE INTO properties (id, name) VALUES (?1, ?2)")?
            .execute(params![id, name.as_str()])?;
        Ok(())
    }

    pub fn upsert_weapon(&self, weapon: &WeaponRow) -> Result<()> {
        self.tx
            .prepare_cached(
                "INSERT OR IGNORE INTO weapons (id, name, ammo_id, parent_id, is_melee,
                     short_range, medium_range, long_range, maximum_range,
                     burst_ranged, burst_melee)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?
            .execute(params![
                weapon.id,
                weapon.name.as_str(),
                weapon.ammo,
                weapon.parent,
                weapon.is_melee,
                weapon.short_range,
                weapon.medium_range,
                weapon.long_range,
                weapon.maximum_range,
                weapon.burst_ranged,
                weapon.burst_melee,
            ])
            .with_context(|| format!("failed to insert weapon {}", weapon.id))?;
        Ok(())
    }

    /// Whether a weapon row already exists (needed for parent resolution on
    /// re-runs, where the parent may predate this load)
    pub fn weapon_exists(&self, id: i64) -> Result<bool> {
        let found = self
            .tx
            .prepare_cached("SELECT 1 FROM weapons WHERE id = ?1")?
            .query_row(params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    pub fn upsert_unit(&self, unit: &UnitRow) -> Result<()> {
        self.tx
            .prepare_cached(
                "INSERT OR IGNORE INTO units (id, name, sectorial_id, svg_icon,
                     mov_1, mov_2, close_combat, ballistic_skill, physique, willpower,
                     armor, bts, wounds, silhouette, availability, has_structure)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            )?
            .execute(params![
                unit.id,
                unit.name.as_str(),
                unit.sectorial,
                unit.svg_icon,
                unit.mov_1,
                unit.mov_2,
                unit.close_combat,
                unit.ballistic_skill,
                unit.physique,
                unit.willpower,
                unit.armor,
                unit.bts,
                unit.wounds,
                unit.silhouette,
                unit.availability,
                unit.has_structure,
            ])
            .with_context(|| format!("failed to insert unit {}", unit.id))?;
        Ok(())
    }

    pub fn upsert_profile(&self, profile: &ProfileRow) -> Result<()> {
        self.tx
            .prepare_cached(
                "INSERT OR IGNORE INTO profiles (id, name, unit_id, cap, point_cost,
                     regular_orders, irregular_orders, impetuous_orders)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?
            .execute(params![
                profile.id,
                profile.name.as_str(),
                profile.unit,
                profile.cap,
                profile.point_cost,
                profile.regular_orders,
                profile.irregular_orders,
                profile.impetuous_orders,
            ])
            .with_context(|| format!("failed to insert profile {}", profile.id))?;
        Ok(())
    }

    pub fn link_weapon_property(&self, weapon: i64, property: i64) -> Result<()> {
        self.link("weapon_properties", "weapon_id", "property_id", weapon, property)
    }

    pub fn link_unit_characteristic(&self, unit: i64, characteristic: i64) -> Result<()> {
        self.link(
            "unit_characteristics",
            "unit_id",
            "characteristic_id",
            unit,
            characteristic,
        )
    }

    pub fn link_unit_ability(&self, unit: i64, ability: i64) -> Result<()> {
        self.link("unit_abilities", "unit_id", "ability_id", unit, ability)
    }

    pub fn link_profile_weapon(&self, profile: i64, weapon: i64) -> Result<()> {
        self.link("profile_weapons", "profile_id", "weapon_id", profile, weapon)
    }

    pub fn link_profile_characteristic(&self, profile: i64, characteristic: i64) -> Result<()> {
        self.link(
            "profile_characteristics",
            "profile_id",
            "characteristic_id",
            profile,
            characteristic,
        )
    }

    pub fn link_profile_ability(&self, profile: i64, ability: i64) -> Result<()> {
        self.link("profile_abilities", "profile_id", "ability_id", profile, ability)
    }

    /// Idempotent junction insert; both rows must already exist (enforced by
    /// the foreign keys).
    fn link(
        &self,
        junction: &str,
        left_col: &str,
        right_col: &str,
        left: i64,
        right: i64,
    ) -> Result<()> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}, {}) VALUES (?1, ?2)",
            junction, left_col, right_col
        );
        self.tx
            .prepare_cached(&sql)?
            .execute(params![left, right])
            .with_context(|| format!("failed to link {} ({}, {})", junction, left, right))?;
        Ok(())
    }
}
