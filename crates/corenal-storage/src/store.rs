//! The storage collaborator boundary.
//!
//! The backing store is spreadsheet-shaped: named tables of string
//! rows, addressed positionally, with the key column read back as a
//! whole. The writer never reads full tables — only the key column
//! plus positional writes. Transport and auth live behind this trait
//! and are out of scope here.

use crate::error::StoreError;

/// Operations exposed by the table storage collaborator.
///
/// Row indices are 0-based and include the header row (index 0).
#[allow(async_fn_in_trait)]
pub trait TableStore {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError>;

    /// Create an empty table. `row_capacity_hint` and `column_count`
    /// are sizing hints for backends that preallocate grids.
    async fn create_table(
        &self,
        table: &str,
        row_capacity_hint: usize,
        column_count: usize,
    ) -> Result<(), StoreError>;

    /// The first column of every row, in row order. Position 0 is the
    /// header cell.
    async fn read_key_column(&self, table: &str) -> Result<Vec<String>, StoreError>;

    async fn delete_row(&self, table: &str, index: usize) -> Result<(), StoreError>;

    async fn insert_row(&self, table: &str, index: usize, row: &[String])
    -> Result<(), StoreError>;

    async fn append_row(&self, table: &str, row: &[String]) -> Result<(), StoreError>;
}
