//! The store writer: upsert discipline for the patient-state table,
//! pure append for the visit ledger, and lazy table provisioning.

use tracing::info;

use corenal_core::{project, tables};

use crate::error::StoreError;
use crate::store::TableStore;

/// Row-capacity hint passed to `create_table`, matching the expected
/// registry size.
const ROW_CAPACITY_HINT: usize = 2000;

/// Spare columns beyond the header, for manual annotations alongside
/// the managed ones.
const SPARE_COLUMNS: usize = 5;

/// Ensure a table exists with exactly `headers` as its first row.
///
/// Idempotent: an existing table is left untouched, header included —
/// there is no versioning or migration of already-persisted rows.
pub async fn ensure_table<S: TableStore>(
    store: &S,
    table: &str,
    headers: &[&str],
) -> Result<(), StoreError> {
    if store.table_exists(table).await? {
        return Ok(());
    }

    store
        .create_table(table, ROW_CAPACITY_HINT, headers.len() + SPARE_COLUMNS)
        .await?;

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    store.append_row(table, &header_row).await?;

    info!(table, columns = headers.len(), "table provisioned");

    Ok(())
}

/// Ensure all three registry tables exist with their header contracts.
///
/// The events table is provision-only: this system never writes rows
/// into it.
pub async fn provision_tables<S: TableStore>(store: &S) -> Result<(), StoreError> {
    ensure_table(store, tables::DOENTES, &project::patient_headers()).await?;
    ensure_table(store, tables::VISITAS, &project::visit_headers()).await?;
    ensure_table(store, tables::EVENTOS, &tables::EVENTOS_HEADERS).await?;
    Ok(())
}

/// Replace the patient's row in place, or append a new one.
///
/// Scans the key column for an exact string match on `n_processo`.
/// A match is replaced at the same position (delete then insert), so
/// row order for every other patient is preserved; otherwise the row
/// is appended. After this call the table holds exactly one row for
/// the identifier.
pub async fn upsert_patient_row<S: TableStore>(
    store: &S,
    table: &str,
    n_processo: &str,
    row: &[String],
) -> Result<(), StoreError> {
    if n_processo.trim().is_empty() {
        return Err(StoreError::EmptyIdentifier);
    }

    let keys = store.read_key_column(table).await?;

    // Position 0 is the header cell; patient rows start at 1.
    match keys.iter().skip(1).position(|k| k == n_processo) {
        Some(pos) => {
            let index = pos + 1;
            store.delete_row(table, index).await?;
            store.insert_row(table, index, row).await?;
            info!(table, n_processo, index, "patient row replaced");
        }
        None => {
            store.append_row(table, row).await?;
            info!(table, n_processo, "patient row appended");
        }
    }

    Ok(())
}

/// Append one visit row to the history ledger.
///
/// No lookup, no dedup: re-processing the same note appends a duplicate
/// row, by design — history is a ledger, not a set.
pub async fn append_visit_row<S: TableStore>(
    store: &S,
    table: &str,
    row: &[String],
) -> Result<(), StoreError> {
    store.append_row(table, row).await?;
    info!(table, "visit row appended");
    Ok(())
}
