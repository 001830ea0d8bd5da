//! Table naming conventions and fixed header contracts.
//!
//! Three tables share the spreadsheet-style store. `Doentes` holds one
//! row per patient (latest state, upserted); `Visitas_Análises` is the
//! append-only visit ledger; `Eventos` is provisioned with its header
//! but only ever populated by hand.

/// Patient-state table: one row per process number, replaced on save.
pub const DOENTES: &str = "Doentes";

/// Visit-history table: one row appended per processed consultation.
pub const VISITAS: &str = "Visitas_Análises";

/// Clinical-events table: header provisioned here, rows maintained
/// manually outside this system.
pub const EVENTOS: &str = "Eventos";

/// Header contract of the manually-maintained events table.
pub const EVENTOS_HEADERS: [&str; 5] = [
    "N_Processo",
    "Data_evento",
    "Tipo_evento",
    "Causa_descricao",
    "Data_registo",
];
