//! MySQL-backed key-value store
//!
//! Single `kv_entries` table, one row per key, JSON document values.

use super::KvStore;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, MySqlPool};

/// Key-value row (only the document column is read back)
#[derive(Debug, Clone, FromRow)]
struct KvEntry {
    value_json: Value,
}

/// MySQL key-value store
#[derive(Clone)]
pub struct MySqlKvStore {
    pool: MySqlPool,
}

impl MySqlKvStore {
    /// Create new store over an existing pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_entries (
                store_key VARCHAR(191) NOT NULL PRIMARY KEY,
                value_json JSON NOT NULL,
                updated_at DATETIME(3) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl KvStore for MySqlKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entry = sqlx::query_as::<_, KvEntry>(
            "SELECT value_json FROM kv_entries WHERE store_key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry.map(|e| e.value_json))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO kv_entries (store_key, value_json, updated_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE value_json = ?, updated_at = ?
            "#,
        )
        .bind(key)
        .bind(&value)
        .bind(now)
        .bind(&value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_entries WHERE store_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
