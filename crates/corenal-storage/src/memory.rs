//! In-memory `TableStore`: the test vehicle and local backend.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::TableStore;

/// A table store backed by a mutex-guarded map of row grids.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a table's rows (header included), if the table exists.
    pub async fn snapshot(&self, table: &str) -> Option<Vec<Vec<String>>> {
        self.tables.lock().await.get(table).cloned()
    }

    /// Number of rows in a table, header included.
    pub async fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.lock().await.get(table).map(|rows| rows.len())
    }
}

impl TableStore for MemoryStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        Ok(self.tables.lock().await.contains_key(table))
    }

    async fn create_table(
        &self,
        table: &str,
        row_capacity_hint: usize,
        _column_count: usize,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.contains_key(table) {
            return Err(StoreError::Backend(format!(
                "table already exists: {table}"
            )));
        }
        tables.insert(table.to_string(), Vec::with_capacity(row_capacity_hint));
        Ok(())
    }

    async fn read_key_column(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let tables = self.tables.lock().await;
        let rows = tables.get(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;
        Ok(rows
            .iter()
            .map(|row| row.first().cloned().unwrap_or_default())
            .collect())
    }

    async fn delete_row(&self, table: &str, index: usize) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.get_mut(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;
        if index >= rows.len() {
            return Err(StoreError::RowIndexOutOfBounds {
                table: table.to_string(),
                index,
            });
        }
        rows.remove(index);
        Ok(())
    }

    async fn insert_row(
        &self,
        table: &str,
        index: usize,
        row: &[String],
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.get_mut(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;
        if index > rows.len() {
            return Err(StoreError::RowIndexOutOfBounds {
                table: table.to_string(),
                index,
            });
        }
        rows.insert(index, row.to_vec());
        Ok(())
    }

    async fn append_row(&self, table: &str, row: &[String]) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        let rows = tables.get_mut(table).ok_or_else(|| StoreError::MissingTable {
            table: table.to_string(),
        })?;
        rows.push(row.to_vec());
        Ok(())
    }
}
