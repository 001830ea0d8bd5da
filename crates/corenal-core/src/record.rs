//! The canonical clinical record — the extraction collaborator's output.
//!
//! Field names are the wire names embedded in the extraction prompt, in
//! Portuguese snake_case. Every leaf is optional: the extractor emits
//! `null` for anything not mentioned in the note, and `#[serde(default)]`
//! makes a missing key indistinguishable from an explicit null.

use serde::{Deserialize, Serialize};

use crate::vocab::{Albuminuria, CkdStage, Congestion, EfCategory, Referral, Sex};

/// One extracted consultation: chronic patient state plus the visit itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    pub doente: Patient,
    pub visita: Visit,
}

/// Demographic and chronic-state attributes of the patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patient {
    /// ISO calendar date (`YYYY-MM-DD`) or null; no partial dates.
    pub data_nascimento: Option<String>,
    pub sexo: Option<Sex>,
    pub localidade: Option<String>,
    pub profissao: Option<String>,
    /// Clinical Frailty Scale, 1–9.
    pub frailty_cfs: Option<i64>,
    pub referenciacao: Option<Referral>,
    pub frcv: RiskFactors,
    pub comorbilidades: Comorbidities,
    pub ic: HeartFailure,
    pub drc: KidneyDisease,
    pub fenotipo_congestao: Option<Congestion>,
    pub pocus: Pocus,
    pub medicacao: Medication,
}

/// Cardiovascular risk factors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactors {
    pub dm2: Option<bool>,
    pub tabagismo: Option<bool>,
    pub hta: Option<bool>,
    pub dislipidemia: Option<bool>,
    pub obesidade: Option<bool>,
    pub saos: Option<bool>,
    pub sedentarismo: Option<bool>,
    pub hx_familiar_dc: Option<bool>,
}

/// Non-cardiorenal comorbidities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comorbidities {
    pub dap: Option<bool>,
    pub dpoc: Option<bool>,
    pub doenca_hepatica: Option<bool>,
    pub hbp: Option<bool>,
    pub fa: Option<bool>,
    pub outras: Option<String>,
}

/// Heart-failure profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartFailure {
    pub tipo_fe: Option<EfCategory>,
    pub etiologia: Option<String>,
    /// Current LVEF as a bare percentage number.
    pub feve_atual: Option<f64>,
    pub feve_trajetoria: Option<String>,
}

/// Chronic kidney disease profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KidneyDisease {
    pub grau: Option<CkdStage>,
    pub albuminuria: Option<Albuminuria>,
    pub etiologia: Option<String>,
}

/// Point-of-care ultrasound findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pocus {
    pub fe_pct: Option<f64>,
    pub ee_ratio: Option<f64>,
    /// Number of lung fields with B-lines ("7/8" → 7).
    pub linhas_b_n: Option<f64>,
    pub vci_mm: Option<f64>,
}

/// One medication class entry: always the full presence/agent/dose
/// triple, even when all three are null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationEntry {
    pub presente: Option<bool>,
    pub farmaco: Option<String>,
    pub dose: Option<String>,
}

/// The twelve medication classes, in the fixed order shared by the
/// extraction prompt and both table projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedClass {
    Rasi,
    Mra,
    Isglt2,
    Glp1ra,
    Estatina,
    DiureticoAnsa,
    DiureticoTiazida,
    Acetazolamida,
    BetaBloqueante,
    Antiagregante,
    Anticoagulante,
    Ivabradina,
}

impl MedClass {
    /// All classes, in projection order. Iterate this, never map keys.
    pub const ALL: [MedClass; 12] = [
        MedClass::Rasi,
        MedClass::Mra,
        MedClass::Isglt2,
        MedClass::Glp1ra,
        MedClass::Estatina,
        MedClass::DiureticoAnsa,
        MedClass::DiureticoTiazida,
        MedClass::Acetazolamida,
        MedClass::BetaBloqueante,
        MedClass::Antiagregante,
        MedClass::Anticoagulante,
        MedClass::Ivabradina,
    ];

    /// The wire key used in the extraction JSON.
    pub fn key(self) -> &'static str {
        match self {
            MedClass::Rasi => "rasi",
            MedClass::Mra => "mra",
            MedClass::Isglt2 => "isglt2",
            MedClass::Glp1ra => "glp1ra",
            MedClass::Estatina => "estatina",
            MedClass::DiureticoAnsa => "diuretico_ansa",
            MedClass::DiureticoTiazida => "diuretico_tiazida",
            MedClass::Acetazolamida => "acetazolamida",
            MedClass::BetaBloqueante => "beta_bloqueante",
            MedClass::Antiagregante => "antiagregante",
            MedClass::Anticoagulante => "anticoagulante",
            MedClass::Ivabradina => "ivabradina",
        }
    }

    /// The three column headers this class contributes to the patient
    /// table, in cell order: presence, agent, dose.
    pub fn column_headers(self) -> [&'static str; 3] {
        match self {
            MedClass::Rasi => ["RASi", "RASi_farmaco", "RASi_dose"],
            MedClass::Mra => ["MRA", "MRA_farmaco", "MRA_dose"],
            MedClass::Isglt2 => ["iSGLT2", "iSGLT2_farmaco", "iSGLT2_dose"],
            MedClass::Glp1ra => ["GLP1RA", "GLP1RA_farmaco", "GLP1RA_dose"],
            MedClass::Estatina => ["Estatina", "Estatina_farmaco", "Estatina_dose"],
            MedClass::DiureticoAnsa => {
                ["Diuretico_ansa", "Diuretico_ansa_farmaco", "Diuretico_ansa_dose"]
            }
            MedClass::DiureticoTiazida => [
                "Diuretico_tiazida",
                "Diuretico_tiazida_farmaco",
                "Diuretico_tiazida_dose",
            ],
            MedClass::Acetazolamida => {
                ["Acetazolamida", "Acetazolamida_farmaco", "Acetazolamida_dose"]
            }
            MedClass::BetaBloqueante => {
                ["BetaBloqueante", "BetaBloqueante_farmaco", "BetaBloqueante_dose"]
            }
            MedClass::Antiagregante => {
                ["Antiagregante", "Antiagregante_farmaco", "Antiagregante_dose"]
            }
            MedClass::Anticoagulante => {
                ["Anticoagulante", "Anticoagulante_farmaco", "Anticoagulante_dose"]
            }
            MedClass::Ivabradina => ["Ivabradina", "Ivabradina_farmaco", "Ivabradina_dose"],
        }
    }
}

/// The medication sub-record: one entry slot per class.
///
/// Each slot is `Option<MedicationEntry>` so that an extractor emitting
/// `"rasi": null` (instead of the full triple) still deserializes; a
/// null or missing class reads back as the all-null entry. `Default`
/// fills every slot with the all-null triple so the serialized skeleton
/// shows the full `{presente, farmaco, dose}` shape per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Medication {
    pub rasi: Option<MedicationEntry>,
    pub mra: Option<MedicationEntry>,
    pub isglt2: Option<MedicationEntry>,
    pub glp1ra: Option<MedicationEntry>,
    pub estatina: Option<MedicationEntry>,
    pub diuretico_ansa: Option<MedicationEntry>,
    pub diuretico_tiazida: Option<MedicationEntry>,
    pub acetazolamida: Option<MedicationEntry>,
    pub beta_bloqueante: Option<MedicationEntry>,
    pub antiagregante: Option<MedicationEntry>,
    pub anticoagulante: Option<MedicationEntry>,
    pub ivabradina: Option<MedicationEntry>,
}

impl Default for Medication {
    fn default() -> Self {
        let mut med = Medication {
            rasi: None,
            mra: None,
            isglt2: None,
            glp1ra: None,
            estatina: None,
            diuretico_ansa: None,
            diuretico_tiazida: None,
            acetazolamida: None,
            beta_bloqueante: None,
            antiagregante: None,
            anticoagulante: None,
            ivabradina: None,
        };
        for class in MedClass::ALL {
            *med.entry_mut(class) = Some(MedicationEntry::default());
        }
        med
    }
}

static EMPTY_ENTRY: MedicationEntry = MedicationEntry {
    presente: None,
    farmaco: None,
    dose: None,
};

impl Medication {
    /// The entry for a class, degrading a null/missing slot to the
    /// all-null entry so column positions never shift.
    pub fn entry(&self, class: MedClass) -> &MedicationEntry {
        let slot = match class {
            MedClass::Rasi => &self.rasi,
            MedClass::Mra => &self.mra,
            MedClass::Isglt2 => &self.isglt2,
            MedClass::Glp1ra => &self.glp1ra,
            MedClass::Estatina => &self.estatina,
            MedClass::DiureticoAnsa => &self.diuretico_ansa,
            MedClass::DiureticoTiazida => &self.diuretico_tiazida,
            MedClass::Acetazolamida => &self.acetazolamida,
            MedClass::BetaBloqueante => &self.beta_bloqueante,
            MedClass::Antiagregante => &self.antiagregante,
            MedClass::Anticoagulante => &self.anticoagulante,
            MedClass::Ivabradina => &self.ivabradina,
        };
        slot.as_ref().unwrap_or(&EMPTY_ENTRY)
    }

    pub fn entry_mut(&mut self, class: MedClass) -> &mut Option<MedicationEntry> {
        match class {
            MedClass::Rasi => &mut self.rasi,
            MedClass::Mra => &mut self.mra,
            MedClass::Isglt2 => &mut self.isglt2,
            MedClass::Glp1ra => &mut self.glp1ra,
            MedClass::Estatina => &mut self.estatina,
            MedClass::DiureticoAnsa => &mut self.diuretico_ansa,
            MedClass::DiureticoTiazida => &mut self.diuretico_tiazida,
            MedClass::Acetazolamida => &mut self.acetazolamida,
            MedClass::BetaBloqueante => &mut self.beta_bloqueante,
            MedClass::Antiagregante => &mut self.antiagregante,
            MedClass::Anticoagulante => &mut self.anticoagulante,
            MedClass::Ivabradina => &mut self.ivabradina,
        }
    }
}

/// Per-encounter attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visit {
    /// ISO calendar date (`YYYY-MM-DD`) or null.
    pub data_consulta: Option<String>,
    pub analises: Labs,
    pub sintomas: Symptoms,
    pub exame_fisico: PhysicalExam,
}

/// Laboratory analytes. All numeric, bare values without units, except
/// the free-text urinalysis summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labs {
    pub ureia: Option<f64>,
    pub creatinina: Option<f64>,
    pub cistatina_c: Option<f64>,
    pub tfge_ckd_epi_crcist: Option<f64>,
    pub racu: Option<f64>,
    pub rpc: Option<f64>,
    pub na_urinario: Option<f64>,
    pub albumina: Option<f64>,
    pub alt: Option<f64>,
    pub ast: Option<f64>,
    pub ggt: Option<f64>,
    pub bilirrubina_total: Option<f64>,
    pub na: Option<f64>,
    pub k: Option<f64>,
    pub cl: Option<f64>,
    pub ca: Option<f64>,
    pub p: Option<f64>,
    pub mg: Option<f64>,
    pub pth: Option<f64>,
    pub vit_d: Option<f64>,
    pub nt_probnp: Option<f64>,
    pub bnp: Option<f64>,
    pub ca125: Option<f64>,
    pub hgb: Option<f64>,
    pub leucocitos: Option<f64>,
    pub plaquetas: Option<f64>,
    pub hco3: Option<f64>,
    pub ca_ionizado: Option<f64>,
    pub sumario_urina: Option<String>,
}

/// Reported symptoms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symptoms {
    /// NYHA functional class, 1–4.
    pub nyha: Option<i64>,
    /// CCS angina class, 0–4.
    pub ccs: Option<i64>,
    pub ortopneia: Option<bool>,
    pub bendopneia: Option<bool>,
    pub edemas_mi: Option<bool>,
    pub claudicacao_intermitente: Option<bool>,
    pub palpitacoes: Option<bool>,
}

/// Physical-exam measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalExam {
    pub peso_kg: Option<f64>,
    pub altura_m: Option<f64>,
    pub imc: Option<f64>,
    pub ta_sist: Option<f64>,
    pub ta_diast: Option<f64>,
    pub fc: Option<f64>,
    pub spo2: Option<f64>,
}
