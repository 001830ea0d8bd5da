use jiff::civil::date;

use corenal_core::project::{
    CELL_FALSE, CELL_TRUE, compute_age, patient_headers, project_patient_row, project_visit_row,
    visit_headers,
};
use corenal_core::record::{ClinicalRecord, MedClass, MedicationEntry, Patient};
use corenal_core::vocab::{EfCategory, Sex};

#[test]
fn patient_row_length_matches_header_contract() {
    let headers = patient_headers();
    let row = project_patient_row("123456", &Patient::default(), date(2024, 6, 1));
    assert_eq!(row.len(), headers.len());
    // 8 identity + 8 FRCV + 6 comorbidities + 4 IC + 3 DRC + 1 congestion
    // + 4 POCUS + 12×3 medication + 1 save date.
    assert_eq!(headers.len(), 71);
}

#[test]
fn visit_row_length_matches_header_contract() {
    let headers = visit_headers();
    let row = project_visit_row("123456", &ClinicalRecord::default().visita);
    assert_eq!(row.len(), headers.len());
    assert_eq!(headers.len(), 45);
}

#[test]
fn header_names_are_unique() {
    let mut headers = patient_headers();
    headers.extend(visit_headers().into_iter().skip(2)); // shared key columns
    let mut seen = std::collections::HashSet::new();
    for h in &headers {
        assert!(seen.insert(*h), "duplicate header {h}");
    }
}

#[test]
fn null_medication_class_projects_three_empty_cells() {
    let mut patient = Patient::default();
    *patient.medicacao.entry_mut(MedClass::Mra) = None;
    *patient.medicacao.entry_mut(MedClass::Isglt2) = Some(MedicationEntry {
        presente: Some(true),
        farmaco: Some("dapagliflozina".to_string()),
        dose: Some("10mg".to_string()),
    });

    let headers = patient_headers();
    let row = project_patient_row("1", &patient, date(2024, 6, 1));

    let mra = headers.iter().position(|h| *h == "MRA").unwrap();
    assert_eq!(&row[mra..mra + 3], ["", "", ""]);

    // The null class before it does not shift iSGLT2's cells.
    let isglt2 = headers.iter().position(|h| *h == "iSGLT2").unwrap();
    assert_eq!(isglt2, mra + 3);
    assert_eq!(&row[isglt2..isglt2 + 3], [CELL_TRUE, "dapagliflozina", "10mg"]);
}

#[test]
fn medication_classes_keep_fixed_order() {
    let headers = patient_headers();
    let first = headers.iter().position(|h| *h == "RASi").unwrap();
    let expected: Vec<&str> = MedClass::ALL
        .iter()
        .flat_map(|c| c.column_headers())
        .collect();
    assert_eq!(&headers[first..first + 36], expected.as_slice());
}

#[test]
fn booleans_project_localized_tokens() {
    let mut patient = Patient::default();
    patient.frcv.dm2 = Some(true);
    patient.frcv.hta = Some(false);

    let headers = patient_headers();
    let row = project_patient_row("1", &patient, date(2024, 6, 1));

    let dm2 = headers.iter().position(|h| *h == "DM2").unwrap();
    let hta = headers.iter().position(|h| *h == "HTA").unwrap();
    assert_eq!(row[dm2], CELL_TRUE);
    assert_eq!(row[hta], CELL_FALSE);
    assert_ne!(CELL_TRUE, CELL_FALSE);
}

#[test]
fn numbers_keep_native_decimal_form() {
    let mut patient = Patient::default();
    patient.ic.tipo_fe = Some(EfCategory::FEr);
    patient.ic.feve_atual = Some(40.0);
    patient.pocus.ee_ratio = Some(12.5);

    let headers = patient_headers();
    let row = project_patient_row("1", &patient, date(2024, 6, 1));

    let feve = headers.iter().position(|h| *h == "IC_FEVE_atual_pct").unwrap();
    let ee = headers.iter().position(|h| *h == "POCUS_EE_ratio").unwrap();
    assert_eq!(row[feve], "40");
    assert_eq!(row[ee], "12.5");
}

#[test]
fn age_decrements_before_the_birthday() {
    assert_eq!(compute_age(Some("1960-03-10"), date(2024, 3, 9)), Some(63));
    assert_eq!(compute_age(Some("1960-03-10"), date(2024, 3, 10)), Some(64));
}

#[test]
fn age_fails_soft() {
    assert_eq!(compute_age(None, date(2024, 3, 9)), None);
    assert_eq!(compute_age(Some("10/03/1960"), date(2024, 3, 9)), None);

    let mut patient = Patient::default();
    patient.data_nascimento = Some("10/03/1960".to_string());
    let headers = patient_headers();
    let row = project_patient_row("1", &patient, date(2024, 6, 1));
    let idade = headers.iter().position(|h| *h == "Idade").unwrap();
    assert_eq!(row[idade], "");
}

#[test]
fn save_date_is_the_projection_date() {
    let row = project_patient_row("1", &Patient::default(), date(2024, 6, 1));
    assert_eq!(row.last().unwrap(), "2024-06-01");
}

#[test]
fn sparse_record_fills_exactly_the_extracted_cells() {
    let mut patient = Patient::default();
    patient.sexo = Some(Sex::M);
    patient.frailty_cfs = Some(4);
    patient.ic.tipo_fe = Some(EfCategory::FEp);
    *patient.medicacao.entry_mut(MedClass::Rasi) = Some(MedicationEntry {
        presente: Some(true),
        farmaco: Some("losartan".to_string()),
        dose: Some("50mg".to_string()),
    });

    let headers = patient_headers();
    let row = project_patient_row("123456", &patient, date(2024, 6, 1));

    let expected = [
        ("N_Processo", "123456"),
        ("Sexo", "M"),
        ("Frailty_CFS", "4"),
        ("IC_FE_tipo", "FEp"),
        ("RASi", CELL_TRUE),
        ("RASi_farmaco", "losartan"),
        ("RASi_dose", "50mg"),
        ("Data_ultima_consulta", "2024-06-01"),
    ];

    for (header, cell) in headers.iter().zip(&row) {
        match expected.iter().find(|(h, _)| h == header) {
            Some((_, want)) => assert_eq!(cell, want, "column {header}"),
            None => assert_eq!(cell, "", "column {header} should be empty"),
        }
    }
}
