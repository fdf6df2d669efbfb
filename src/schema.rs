//! Table definitions for the starter app and their portable DDL.
//! DDL sticks to the subset SQLite and PostgreSQL agree on.

use serde::Serialize;

/// Fixed primary key of the single clap counter row.
pub const CLAP_ID: i64 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    BigInt,
    Text,
}

impl ColumnType {
    fn sql(self) -> &'static str {
        match self {
            ColumnType::BigInt => "BIGINT",
            ColumnType::Text => "TEXT",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_: ColumnType,
    pub primary_key: bool,
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn create_sql(&self) -> String {
        let cols: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("{} {}", c.name, c.type_.sql());
                if c.primary_key {
                    def.push_str(" PRIMARY KEY");
                } else if !c.nullable {
                    def.push_str(" NOT NULL");
                }
                if let Some(d) = c.default {
                    def.push_str(" DEFAULT ");
                    def.push_str(d);
                }
                def
            })
            .collect();
        format!("CREATE TABLE IF NOT EXISTS {} ({})", self.name, cols.join(", "))
    }
}

pub const CLAPS: TableDef = TableDef {
    name: "claps",
    columns: &[
        ColumnDef {
            name: "id",
            type_: ColumnType::BigInt,
            primary_key: true,
            nullable: false,
            default: None,
        },
        ColumnDef {
            name: "count",
            type_: ColumnType::BigInt,
            primary_key: false,
            nullable: false,
            default: Some("0"),
        },
    ],
};

/// Demonstration table; nothing in the app reads or writes it.
pub const TEST: TableDef = TableDef {
    name: "test",
    columns: &[
        ColumnDef {
            name: "id",
            type_: ColumnType::BigInt,
            primary_key: true,
            nullable: false,
            default: None,
        },
        ColumnDef {
            name: "test",
            type_: ColumnType::Text,
            primary_key: false,
            nullable: true,
            default: None,
        },
    ],
};

pub const TABLES: &[TableDef] = &[CLAPS, TEST];

/// Full schema as a script, one statement per line.
pub fn schema_sql() -> String {
    TABLES
        .iter()
        .map(|t| format!("{};", t.create_sql()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Clap {
    pub id: i64,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TestRecord {
    pub id: i64,
    pub test: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claps_ddl() {
        assert_eq!(
            CLAPS.create_sql(),
            "CREATE TABLE IF NOT EXISTS claps (id BIGINT PRIMARY KEY, count BIGINT NOT NULL DEFAULT 0)"
        );
    }

    #[test]
    fn test_table_allows_null_text() {
        assert_eq!(
            TEST.create_sql(),
            "CREATE TABLE IF NOT EXISTS test (id BIGINT PRIMARY KEY, test TEXT)"
        );
    }

    #[test]
    fn schema_script_has_every_table() {
        let sql = schema_sql();
        assert_eq!(sql.lines().count(), TABLES.len());
        assert!(sql.lines().all(|l| l.ends_with(';')));
    }
}
