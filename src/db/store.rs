//! `Store` backed by the `kv` table: one JSON document per key.

use crate::core::store::Store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde_json::Value;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_migrated(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?
            .query_row([key], |row| row.get(0))
            .optional()?;

        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn update(&self, key: &str, value: Option<Value>) -> AppResult<()> {
        match value {
            Some(v) => {
                let text = serde_json::to_string(&v)?;
                self.pool.conn.execute(
                    "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                    updated_at = excluded.updated_at",
                    params![key, text, Local::now().to_rfc3339()],
                )?;
            }
            None => {
                self.pool
                    .conn
                    .execute("DELETE FROM kv WHERE key = ?1", [key])?;
            }
        }
        Ok(())
    }
}
