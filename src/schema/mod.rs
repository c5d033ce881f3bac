pub mod tables;

pub use tables::{table_names, ALL_TABLES, STRINGS_TABLE};

use crate::lang::Languages;

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColType {
    Integer,
    Real,
    Text,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// Foreign key reference; the referenced column is always the primary id
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
        }
    }
}

/// Table definition
#[derive(Debug, Clone)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
}

/// Generate CREATE TABLE SQL for the strings table; one TEXT column per
/// configured language tag.
pub fn strings_create_sql(languages: &Languages) -> String {
    let mut columns = vec!["    id TEXT PRIMARY KEY".to_string()];
    for tag in languages.tags() {
        columns.push(format!("    text_{} TEXT", tag));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        STRINGS_TABLE,
        columns.join(",\n")
    )
}

/// Generate CREATE TABLE SQL for a normalized table
pub fn create_table_sql(table: &Table) -> String {
    let mut columns = Vec::new();

    for col in table.columns {
        let sql_type = match col.col_type {
            ColType::Integer => "INTEGER",
            ColType::Real => "REAL",
            ColType::Text => "TEXT",
        };

        let pk = if table.primary_key == [col.name] {
            " PRIMARY KEY"
        } else {
            ""
        };
        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };

        columns.push(format!(
            "    {} {}{}{}",
            col.name, sql_type, pk, null_constraint
        ));
    }

    // Junction tables get a composite primary key
    if table.primary_key.len() > 1 {
        columns.push(format!("    PRIMARY KEY ({})", table.primary_key.join(", ")));
    }

    for fk in table.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}(id)",
            fk.column, fk.references_table
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
        table.name,
        columns.join(",\n")
    )
}

/// Generate CREATE INDEX statements for foreign key columns
pub fn generate_indexes(table: &Table) -> Vec<String> {
    table
        .foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {}({})",
                table.name, fk.column, table.name, fk.column
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::tables::{PROFILE_WEAPONS, WEAPONS};
    use super::*;

    #[test]
    fn test_strings_create_sql() {
        let languages = Languages::default_set();
        let sql = strings_create_sql(&languages);
        assert!(sql.contains("id TEXT PRIMARY KEY"));
        assert!(sql.contains("text_en TEXT"));
        assert!(sql.contains("text_es TEXT"));
        assert!(sql.contains("text_fr TEXT"));
    }

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql(&WEAPONS);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS weapons"));
        assert!(sql.contains("id INTEGER PRIMARY KEY"));
        assert!(sql.contains("is_melee INTEGER NOT NULL"));
        assert!(sql.contains("FOREIGN KEY (parent_id) REFERENCES weapons(id)"));
        assert!(sql.contains("FOREIGN KEY (name) REFERENCES strings(id)"));
    }

    #[test]
    fn test_junction_composite_key() {
        let sql = create_table_sql(&PROFILE_WEAPONS);
        assert!(sql.contains("PRIMARY KEY (profile_id, weapon_id)"));
        assert!(!sql.contains("profile_id INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_generate_indexes() {
        let indexes = generate_indexes(&WEAPONS);
        assert!(indexes.iter().any(|i| i.contains("idx_weapons_ammo_id")));
        assert!(indexes.iter().any(|i| i.contains("idx_weapons_parent_id")));
    }
}
