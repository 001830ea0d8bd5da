//! Row projection: flattening the canonical record into the two table
//! row shapes.
//!
//! Each entity has a single declarative column table —
//! [`patient_columns`] / [`visit_columns`] — returning `(header, cell)`
//! pairs. The header contract is obtained by running the same function
//! over a default record ([`patient_headers`] / [`visit_headers`]), so
//! header order and cell order are one artifact and cannot drift.
//!
//! Stringification is uniform across every leaf: null → empty string,
//! booleans → `"Sim"` / `"Não"`, numbers in their native decimal form
//! with no unit suffix, enum tokens and free strings verbatim.

use jiff::civil::Date;

use crate::record::{MedClass, Patient, Visit};

/// Localized affirmative cell token.
pub const CELL_TRUE: &str = "Sim";
/// Localized negative cell token.
pub const CELL_FALSE: &str = "Não";

/// Inputs of a patient-state row projection.
///
/// `today` is the projection's wall-clock date: it drives both the
/// computed age and the trailing `Data_ultima_consulta` cell.
pub struct PatientRowContext<'a> {
    pub n_processo: &'a str,
    pub patient: &'a Patient,
    pub today: Date,
}

/// Inputs of a visit-history row projection.
pub struct VisitRowContext<'a> {
    pub n_processo: &'a str,
    pub visit: &'a Visit,
}

fn text(v: Option<&str>) -> String {
    v.unwrap_or_default().to_string()
}

fn flag(v: Option<bool>) -> String {
    match v {
        Some(true) => CELL_TRUE.to_string(),
        Some(false) => CELL_FALSE.to_string(),
        None => String::new(),
    }
}

fn num(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn int(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

/// Calendar-aware age at `today` for an ISO `YYYY-MM-DD` birth date.
///
/// Decrements by one when today's (month, day) precedes the birth
/// (month, day). Fails soft: a missing or malformed birth date yields
/// `None` so projection never blocks on it.
pub fn compute_age(data_nascimento: Option<&str>, today: Date) -> Option<i16> {
    let dob: Date = data_nascimento?.parse().ok()?;
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Some(age)
}

/// The patient-state column table: every `Doentes` column, in order,
/// with its projected cell.
pub fn patient_columns(ctx: &PatientRowContext<'_>) -> Vec<(&'static str, String)> {
    let p = ctx.patient;
    let age = compute_age(p.data_nascimento.as_deref(), ctx.today);

    let mut cols: Vec<(&'static str, String)> = vec![
        ("N_Processo", ctx.n_processo.to_string()),
        ("Data_Nascimento", text(p.data_nascimento.as_deref())),
        ("Idade", age.map(|a| a.to_string()).unwrap_or_default()),
        ("Sexo", text(p.sexo.map(|s| s.as_str()))),
        ("Localidade", text(p.localidade.as_deref())),
        ("Profissao", text(p.profissao.as_deref())),
        ("Frailty_CFS", int(p.frailty_cfs)),
        ("Referenciacao", text(p.referenciacao.map(|r| r.as_str()))),
        // FRCV
        ("DM2", flag(p.frcv.dm2)),
        ("Tabagismo", flag(p.frcv.tabagismo)),
        ("HTA", flag(p.frcv.hta)),
        ("Dislipidemia", flag(p.frcv.dislipidemia)),
        ("Obesidade", flag(p.frcv.obesidade)),
        ("SAOS", flag(p.frcv.saos)),
        ("Sedentarismo", flag(p.frcv.sedentarismo)),
        ("HxFamiliar_DC", flag(p.frcv.hx_familiar_dc)),
        // Comorbilidades
        ("DAP", flag(p.comorbilidades.dap)),
        ("DPOC", flag(p.comorbilidades.dpoc)),
        ("Doenca_hepatica", flag(p.comorbilidades.doenca_hepatica)),
        ("HBP", flag(p.comorbilidades.hbp)),
        ("FA", flag(p.comorbilidades.fa)),
        ("Outras_comorbilidades", text(p.comorbilidades.outras.as_deref())),
        // IC
        ("IC_FE_tipo", text(p.ic.tipo_fe.map(|t| t.as_str()))),
        ("IC_Etiologia", text(p.ic.etiologia.as_deref())),
        ("IC_FEVE_atual_pct", num(p.ic.feve_atual)),
        ("IC_FEVE_trajetoria", text(p.ic.feve_trajetoria.as_deref())),
        // DRC
        ("DRC_Grau", text(p.drc.grau.map(|g| g.as_str()))),
        ("DRC_Albuminuria", text(p.drc.albuminuria.map(|a| a.as_str()))),
        ("DRC_Etiologia", text(p.drc.etiologia.as_deref())),
        // Congestão + POCUS
        ("Fenotipo_congestao", text(p.fenotipo_congestao.map(|f| f.as_str()))),
        ("POCUS_FE_pct", num(p.pocus.fe_pct)),
        ("POCUS_EE_ratio", num(p.pocus.ee_ratio)),
        ("POCUS_LinhasB_N", num(p.pocus.linhas_b_n)),
        ("POCUS_VCI_mm", num(p.pocus.vci_mm)),
    ];

    // Medicação: 12 classes × 3 cells, in MedClass::ALL order. A null
    // class contributes three empty cells so later columns never shift.
    for class in MedClass::ALL {
        let entry = p.medicacao.entry(class);
        let [presence, agent, dose] = class.column_headers();
        cols.push((presence, flag(entry.presente)));
        cols.push((agent, text(entry.farmaco.as_deref())));
        cols.push((dose, text(entry.dose.as_deref())));
    }

    // Always the projection date, never an extracted value.
    cols.push(("Data_ultima_consulta", ctx.today.to_string()));

    cols
}

/// The visit-history column table: every `Visitas_Análises` column, in
/// order, with its projected cell.
pub fn visit_columns(ctx: &VisitRowContext<'_>) -> Vec<(&'static str, String)> {
    let v = ctx.visit;
    let a = &v.analises;
    let s = &v.sintomas;
    let ef = &v.exame_fisico;

    vec![
        ("N_Processo", ctx.n_processo.to_string()),
        ("Data_consulta", text(v.data_consulta.as_deref())),
        // Função renal
        ("Ureia", num(a.ureia)),
        ("Creatinina", num(a.creatinina)),
        ("Cistatina_C", num(a.cistatina_c)),
        ("TFGe_CKD_EPI_CrCist", num(a.tfge_ckd_epi_crcist)),
        ("RACu_mg_g", num(a.racu)),
        ("RPC_mg_g", num(a.rpc)),
        ("Na_urinario", num(a.na_urinario)),
        // Proteínas / Hepático
        ("Albumina", num(a.albumina)),
        ("ALT", num(a.alt)),
        ("AST", num(a.ast)),
        ("GGT", num(a.ggt)),
        ("Bilirrubina_total", num(a.bilirrubina_total)),
        // Eletrólitos / Minerais
        ("Na", num(a.na)),
        ("K", num(a.k)),
        ("Cl", num(a.cl)),
        ("Ca", num(a.ca)),
        ("P", num(a.p)),
        ("Mg", num(a.mg)),
        // Endócrino
        ("PTH", num(a.pth)),
        ("Vit_D", num(a.vit_d)),
        // Biomarcadores
        ("NT_proBNP", num(a.nt_probnp)),
        ("BNP", num(a.bnp)),
        ("CA125", num(a.ca125)),
        // Hemograma
        ("Hgb", num(a.hgb)),
        ("Leucocitos", num(a.leucocitos)),
        ("Plaquetas", num(a.plaquetas)),
        // Gasimetria
        ("HCO3", num(a.hco3)),
        ("Ca_ionizado", num(a.ca_ionizado)),
        // Urina
        ("Sumario_urina", text(a.sumario_urina.as_deref())),
        // Sintomas
        ("NYHA", int(s.nyha)),
        ("CCS", int(s.ccs)),
        ("Ortopneia", flag(s.ortopneia)),
        ("Bendopneia", flag(s.bendopneia)),
        ("Edemas_MI", flag(s.edemas_mi)),
        ("Claudicacao_intermitente", flag(s.claudicacao_intermitente)),
        ("Palpitacoes", flag(s.palpitacoes)),
        // Exame físico
        ("Peso_kg", num(ef.peso_kg)),
        ("Altura_m", num(ef.altura_m)),
        ("IMC", num(ef.imc)),
        ("TA_sist", num(ef.ta_sist)),
        ("TA_diast", num(ef.ta_diast)),
        ("FC", num(ef.fc)),
        ("SpO2", num(ef.spo2)),
    ]
}

/// Header row of the `Doentes` table, derived from the column table.
pub fn patient_headers() -> Vec<&'static str> {
    let patient = Patient::default();
    let ctx = PatientRowContext {
        n_processo: "",
        patient: &patient,
        today: Date::constant(2000, 1, 1),
    };
    patient_columns(&ctx).into_iter().map(|(h, _)| h).collect()
}

/// Header row of the `Visitas_Análises` table, derived from the column
/// table.
pub fn visit_headers() -> Vec<&'static str> {
    let visit = Visit::default();
    let ctx = VisitRowContext {
        n_processo: "",
        visit: &visit,
    };
    visit_columns(&ctx).into_iter().map(|(h, _)| h).collect()
}

/// Project the patient-state row for the `Doentes` table.
pub fn project_patient_row(n_processo: &str, patient: &Patient, today: Date) -> Vec<String> {
    let ctx = PatientRowContext {
        n_processo,
        patient,
        today,
    };
    patient_columns(&ctx).into_iter().map(|(_, cell)| cell).collect()
}

/// Project the visit-history row for the `Visitas_Análises` table.
pub fn project_visit_row(n_processo: &str, visit: &Visit) -> Vec<String> {
    let ctx = VisitRowContext { n_processo, visit };
    visit_columns(&ctx).into_iter().map(|(_, cell)| cell).collect()
}
