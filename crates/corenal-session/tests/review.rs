use jiff::civil::date;

use corenal_bedrock::error::ExtractError;
use corenal_bedrock::invoke::parse_extraction_reply;
use corenal_core::record::{ClinicalRecord, MedClass, MedicationEntry};
use corenal_core::tables;
use corenal_core::vocab::{EfCategory, Sex};
use corenal_session::error::SessionError;
use corenal_session::session::{ReviewSession, ReviewState};
use corenal_storage::error::StoreError;
use corenal_storage::memory::MemoryStore;
use corenal_storage::store::TableStore;

fn sample_record() -> ClinicalRecord {
    let mut record = ClinicalRecord::default();
    record.doente.sexo = Some(Sex::M);
    record.doente.frailty_cfs = Some(4);
    record.doente.ic.tipo_fe = Some(EfCategory::FEp);
    *record.doente.medicacao.entry_mut(MedClass::Rasi) = Some(MedicationEntry {
        presente: Some(true),
        farmaco: Some("losartan".to_string()),
        dose: Some("50mg".to_string()),
    });
    record.visita.data_consulta = Some("2024-05-17".to_string());
    record.visita.analises.creatinina = Some(1.8);
    record
}

#[test]
fn session_starts_idle() {
    let session = ReviewSession::new();
    assert_eq!(*session.state(), ReviewState::Idle);
    assert!(session.pending().is_none());
}

#[test]
fn staging_requires_an_identifier() {
    let mut session = ReviewSession::new();
    let err = session.stage("   ", sample_record()).unwrap_err();
    assert!(matches!(err, SessionError::EmptyIdentifier));
    assert_eq!(*session.state(), ReviewState::Idle);
}

#[test]
fn restaging_replaces_the_pending_record() {
    let mut session = ReviewSession::new();
    session.stage("123456", sample_record()).unwrap();

    let mut second = sample_record();
    second.doente.sexo = Some(Sex::F);
    session.stage("654321", second.clone()).unwrap();

    let pending = session.pending().unwrap();
    assert_eq!(pending.n_processo, "654321");
    assert_eq!(pending.record, second);
}

#[test]
fn discard_destroys_the_pending_record() {
    let mut session = ReviewSession::new();
    session.stage("123456", sample_record()).unwrap();
    session.discard();
    assert_eq!(*session.state(), ReviewState::Idle);
}

#[tokio::test]
async fn confirm_without_pending_is_an_error() {
    let store = MemoryStore::new();
    let mut session = ReviewSession::new();
    let err = session.confirm(&store, date(2024, 6, 1)).await.unwrap_err();
    assert!(matches!(err, SessionError::NothingPending));
}

#[tokio::test]
async fn confirm_materializes_both_rows_and_returns_to_idle() {
    let store = MemoryStore::new();
    let mut session = ReviewSession::new();
    session.stage("123456", sample_record()).unwrap();

    let saved = session.confirm(&store, date(2024, 6, 1)).await.unwrap();
    assert_eq!(saved.n_processo, "123456");
    assert_eq!(*session.state(), ReviewState::Idle);

    let doentes = store.snapshot(tables::DOENTES).await.unwrap();
    assert_eq!(doentes.len(), 2);
    assert_eq!(doentes[1][0], "123456");
    assert_eq!(doentes[1].last().unwrap(), "2024-06-01");

    let visitas = store.snapshot(tables::VISITAS).await.unwrap();
    assert_eq!(visitas.len(), 2);
    assert_eq!(visitas[1][0], "123456");
    assert_eq!(visitas[1][1], "2024-05-17");
}

#[tokio::test]
async fn reprocessing_updates_state_and_appends_history() {
    let store = MemoryStore::new();
    let mut session = ReviewSession::new();

    session.stage("123456", sample_record()).unwrap();
    session.confirm(&store, date(2024, 6, 1)).await.unwrap();

    let mut revisit = sample_record();
    revisit.visita.data_consulta = Some("2024-09-02".to_string());
    session.stage("123456", revisit).unwrap();
    session.confirm(&store, date(2024, 9, 2)).await.unwrap();

    // Latest state replaced in place, history grew by one.
    let doentes = store.snapshot(tables::DOENTES).await.unwrap();
    assert_eq!(doentes.len(), 2);
    assert_eq!(doentes[1].last().unwrap(), "2024-09-02");

    assert_eq!(store.row_count(tables::VISITAS).await, Some(3));
}

#[test]
fn malformed_reply_never_reaches_the_session() {
    let mut session = ReviewSession::new();

    let err = parse_extraction_reply("not json").unwrap_err();
    assert!(matches!(err, ExtractError::MalformedOutput(_)));

    // The failed extraction was never staged: nothing pending.
    assert_eq!(*session.state(), ReviewState::Idle);
    session.discard();
    assert_eq!(*session.state(), ReviewState::Idle);
}

/// Delegates to a `MemoryStore` but fails every visit-row append once
/// the visit table already has its header, mimicking a storage outage
/// between the two save calls.
struct VisitAppendOutage {
    inner: MemoryStore,
}

impl TableStore for VisitAppendOutage {
    async fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        self.inner.table_exists(table).await
    }

    async fn create_table(
        &self,
        table: &str,
        row_capacity_hint: usize,
        column_count: usize,
    ) -> Result<(), StoreError> {
        self.inner.create_table(table, row_capacity_hint, column_count).await
    }

    async fn read_key_column(&self, table: &str) -> Result<Vec<String>, StoreError> {
        self.inner.read_key_column(table).await
    }

    async fn delete_row(&self, table: &str, index: usize) -> Result<(), StoreError> {
        self.inner.delete_row(table, index).await
    }

    async fn insert_row(
        &self,
        table: &str,
        index: usize,
        row: &[String],
    ) -> Result<(), StoreError> {
        self.inner.insert_row(table, index, row).await
    }

    async fn append_row(&self, table: &str, row: &[String]) -> Result<(), StoreError> {
        if table == tables::VISITAS && self.inner.row_count(table).await.unwrap_or(0) >= 1 {
            return Err(StoreError::Backend("visit append outage".to_string()));
        }
        self.inner.append_row(table, row).await
    }
}

#[tokio::test]
async fn store_failure_keeps_the_record_pending_for_retry() {
    let store = VisitAppendOutage {
        inner: MemoryStore::new(),
    };
    let mut session = ReviewSession::new();
    session.stage("123456", sample_record()).unwrap();

    let err = session.confirm(&store, date(2024, 6, 1)).await.unwrap_err();
    assert!(matches!(err, SessionError::Store(StoreError::Backend(_))));

    // Still pending: the save can be retried without re-extracting.
    assert!(session.is_pending());

    // The patient upsert already landed — the documented divergence
    // window between the two tables.
    assert_eq!(store.inner.row_count(tables::DOENTES).await, Some(2));
    assert_eq!(store.inner.row_count(tables::VISITAS).await, Some(1));
}
