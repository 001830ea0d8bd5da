use corenal_core::{project, tables};
use corenal_storage::error::StoreError;
use corenal_storage::memory::MemoryStore;
use corenal_storage::writer::{
    append_visit_row, ensure_table, provision_tables, upsert_patient_row,
};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn ensure_table_is_idempotent() {
    let store = MemoryStore::new();

    ensure_table(&store, "t", &["id", "v"]).await.unwrap();
    ensure_table(&store, "t", &["id", "v"]).await.unwrap();

    let rows = store.snapshot("t").await.unwrap();
    assert_eq!(rows, vec![row(&["id", "v"])]);
}

#[tokio::test]
async fn ensure_table_never_rewrites_an_existing_header() {
    let store = MemoryStore::new();

    ensure_table(&store, "t", &["id", "v"]).await.unwrap();
    // A later caller with a diverging header must not touch the table.
    ensure_table(&store, "t", &["id", "v", "extra"]).await.unwrap();

    assert_eq!(store.snapshot("t").await.unwrap(), vec![row(&["id", "v"])]);
}

#[tokio::test]
async fn provision_creates_all_three_tables_with_their_headers() {
    let store = MemoryStore::new();
    provision_tables(&store).await.unwrap();

    let doentes = store.snapshot(tables::DOENTES).await.unwrap();
    assert_eq!(doentes, vec![row(&project::patient_headers())]);

    let visitas = store.snapshot(tables::VISITAS).await.unwrap();
    assert_eq!(visitas, vec![row(&project::visit_headers())]);

    let eventos = store.snapshot(tables::EVENTOS).await.unwrap();
    assert_eq!(eventos, vec![row(&tables::EVENTOS_HEADERS)]);

    // The events table stays header-only: nothing here writes rows.
    assert_eq!(store.row_count(tables::EVENTOS).await, Some(1));
}

#[tokio::test]
async fn upsert_keeps_one_row_per_identifier_and_preserves_order() {
    let store = MemoryStore::new();
    ensure_table(&store, "t", &["id", "v"]).await.unwrap();

    upsert_patient_row(&store, "t", "111", &row(&["111", "first"])).await.unwrap();
    upsert_patient_row(&store, "t", "222", &row(&["222", "first"])).await.unwrap();
    upsert_patient_row(&store, "t", "333", &row(&["333", "first"])).await.unwrap();
    upsert_patient_row(&store, "t", "111", &row(&["111", "second"])).await.unwrap();
    upsert_patient_row(&store, "t", "222", &row(&["222", "second"])).await.unwrap();

    let rows = store.snapshot("t").await.unwrap();
    assert_eq!(
        rows,
        vec![
            row(&["id", "v"]),
            row(&["111", "second"]),
            row(&["222", "second"]),
            row(&["333", "first"]),
        ]
    );
}

#[tokio::test]
async fn upsert_rejects_an_empty_identifier() {
    let store = MemoryStore::new();
    ensure_table(&store, "t", &["id"]).await.unwrap();

    let err = upsert_patient_row(&store, "t", "  ", &row(&["  "])).await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyIdentifier));
    assert_eq!(store.row_count("t").await, Some(1));
}

#[tokio::test]
async fn upsert_never_matches_the_header_cell() {
    let store = MemoryStore::new();
    ensure_table(&store, "t", &["id", "v"]).await.unwrap();

    // An identifier colliding with the header text must append, not
    // replace the header row.
    upsert_patient_row(&store, "t", "id", &row(&["id", "x"])).await.unwrap();

    let rows = store.snapshot("t").await.unwrap();
    assert_eq!(rows, vec![row(&["id", "v"]), row(&["id", "x"])]);
}

#[tokio::test]
async fn append_grows_the_ledger_by_exactly_one_each_call() {
    let store = MemoryStore::new();
    ensure_table(&store, "t", &["id", "d"]).await.unwrap();

    for i in 0..5 {
        // Identifier repetition is irrelevant: no dedup, ever.
        append_visit_row(&store, "t", &row(&["111", &i.to_string()])).await.unwrap();
    }

    assert_eq!(store.row_count("t").await, Some(6));
}

#[tokio::test]
async fn writes_to_a_missing_table_surface_the_backend_failure() {
    let store = MemoryStore::new();

    let err = append_visit_row(&store, "nope", &row(&["x"])).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingTable { .. }));

    let err = upsert_patient_row(&store, "nope", "111", &row(&["111"])).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingTable { .. }));
}
