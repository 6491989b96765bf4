//! SQLite-backed sales table.

use crate::models::sales::SalesRecord;
use crate::{Error, Result};
use indicatif::ProgressBar;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Name of the sales table.
pub const SALES_TABLE: &str = "sales";

const CREATE_SALES_TABLE: &str = r#"
    CREATE TABLE sales (
        row_id     INTEGER PRIMARY KEY,
        store_id   TEXT NOT NULL,
        state_id   TEXT NOT NULL,
        item_id    TEXT,
        dept_id    TEXT,
        cat_id     TEXT NOT NULL,
        date       TEXT NOT NULL,
        sell_price REAL NOT NULL,
        units      INTEGER NOT NULL,
        revenue    REAL NOT NULL
    )
"#;

const CREATE_SALES_INDEXES: &[&str] = &[
    "CREATE INDEX idx_sales_cat_id ON sales (cat_id)",
    "CREATE INDEX idx_sales_store_id ON sales (store_id)",
    "CREATE INDEX idx_sales_date ON sales (date)",
];

const INSERT_SALE: &str = r#"
    INSERT INTO sales
    (store_id, state_id, item_id, dept_id, cat_id, date, sell_price, units, revenue)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

/// Relational store holding the sales table.
pub struct SalesStore {
    conn: Connection,
}

impl SalesStore {
    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Open (or create) an on-disk store.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!("Opening SQLite database {}", path.display());
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Underlying connection, for read-only queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Replace the sales table with `records` in a single transaction.
    ///
    /// Returns the number of rows in the new table, which must equal the
    /// number of records given. On any failure, including a count mismatch,
    /// the transaction rolls back and the previous table, if any, is left as
    /// it was.
    pub fn replace_all(&mut self, records: &[SalesRecord], progress: &ProgressBar) -> Result<usize> {
        progress.set_length(records.len() as u64);
        progress.set_message("Inserting records");

        let tx = self.conn.transaction()?;
        tx.execute_batch("DROP TABLE IF EXISTS sales")?;
        tx.execute_batch(CREATE_SALES_TABLE)?;
        for index in CREATE_SALES_INDEXES {
            tx.execute_batch(index)?;
        }

        {
            let mut stmt = tx.prepare_cached(INSERT_SALE)?;
            for record in records {
                stmt.execute(params![
                    record.store_id,
                    record.state_id,
                    record.item_id,
                    record.dept_id,
                    record.cat_id,
                    record.date.format("%Y-%m-%d").to_string(),
                    record.sell_price,
                    record.units,
                    record.revenue(),
                ])?;
                progress.inc(1);
            }
        }

        let stored: i64 = tx.query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
        if stored as u64 != records.len() as u64 {
            return Err(Error::other(format!(
                "Sales table holds {} rows but {} records were read",
                stored,
                records.len()
            )));
        }

        tx.commit()?;
        progress.finish_and_clear();

        tracing::debug!("Inserted {} rows into {}", stored, SALES_TABLE);
        Ok(stored as usize)
    }

    /// Whether the sales table exists.
    pub fn is_loaded(&self) -> Result<bool> {
        let found: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![SALES_TABLE],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Number of rows in the sales table.
    pub fn row_count(&self) -> Result<u64> {
        if !self.is_loaded()? {
            return Err(Error::StoreNotLoaded);
        }
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
