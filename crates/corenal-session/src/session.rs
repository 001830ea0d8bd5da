//! The review gate: a per-session two-state machine.
//!
//! `Idle` → (successful extraction staged) → `Pending` → confirm/discard
//! → `Idle`. While pending, the held record is immutable — confirm
//! persists exactly what was extracted, discard destroys it. Staging
//! over an existing pending record replaces it (last extraction wins).
//!
//! Each session owns its state exclusively; nothing here is shared
//! across sessions. The two tables are shared external resources — the
//! delete+insert pair inside the upsert relies on the backend being
//! observably sequential for concurrent writers on the same patient.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::info;

use corenal_core::record::ClinicalRecord;
use corenal_core::{project, tables};
use corenal_storage::store::TableStore;
use corenal_storage::writer;

use crate::error::SessionError;

/// An extraction held for review, with the externally supplied patient
/// identifier it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    pub n_processo: String,
    pub record: ClinicalRecord,
}

/// The review-gate state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReviewState {
    #[default]
    Idle,
    Pending(PendingRecord),
}

/// Receipt returned by a successful confirm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConsultation {
    pub n_processo: String,
    /// The projection date written into `Data_ultima_consulta`.
    pub saved_on: Date,
}

/// One clinical session's review gate.
#[derive(Debug, Default)]
pub struct ReviewSession {
    state: ReviewState,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ReviewState::Pending(_))
    }

    /// The pending record, if any.
    pub fn pending(&self) -> Option<&PendingRecord> {
        match &self.state {
            ReviewState::Pending(p) => Some(p),
            ReviewState::Idle => None,
        }
    }

    /// Hold a successful extraction for review.
    ///
    /// Replaces any record already pending — there is no stacking.
    pub fn stage(
        &mut self,
        n_processo: impl Into<String>,
        record: ClinicalRecord,
    ) -> Result<(), SessionError> {
        let n_processo = n_processo.into();
        if n_processo.trim().is_empty() {
            return Err(SessionError::EmptyIdentifier);
        }

        if self.is_pending() {
            info!(n_processo = %n_processo, "replacing pending extraction");
        }
        self.state = ReviewState::Pending(PendingRecord { n_processo, record });
        Ok(())
    }

    /// Drop the pending record unconditionally and return to `Idle`.
    pub fn discard(&mut self) {
        if self.is_pending() {
            info!("pending extraction discarded");
        }
        self.state = ReviewState::Idle;
    }

    /// Persist the pending record: provision the tables, project both
    /// rows, upsert the patient state and append the visit.
    ///
    /// `today` is the projection date — it drives the computed age and
    /// the `Data_ultima_consulta` cell. Transitions to `Idle` only on
    /// success; a store failure leaves the record pending so the save
    /// can be retried without re-extracting. A failure after the
    /// patient upsert but before the visit append leaves the two
    /// tables divergent — no reconciliation is attempted.
    pub async fn confirm<S: TableStore>(
        &mut self,
        store: &S,
        today: Date,
    ) -> Result<SavedConsultation, SessionError> {
        let pending = match &self.state {
            ReviewState::Pending(p) => p,
            ReviewState::Idle => return Err(SessionError::NothingPending),
        };

        writer::provision_tables(store).await?;

        // Both rows are built fully in memory before any write call.
        let patient_row =
            project::project_patient_row(&pending.n_processo, &pending.record.doente, today);
        let visit_row = project::project_visit_row(&pending.n_processo, &pending.record.visita);

        writer::upsert_patient_row(store, tables::DOENTES, &pending.n_processo, &patient_row)
            .await?;
        writer::append_visit_row(store, tables::VISITAS, &visit_row).await?;

        let saved = SavedConsultation {
            n_processo: pending.n_processo.clone(),
            saved_on: today,
        };

        info!(n_processo = %saved.n_processo, "consultation committed");

        self.state = ReviewState::Idle;
        Ok(saved)
    }
}
