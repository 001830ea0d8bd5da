//! Controlled vocabularies of the clinical schema.
//!
//! Every enum here is a closed set whose serde representation is the
//! exact token the extraction collaborator is instructed to emit and
//! the token written to the tables. `as_str` returns that same token.

use serde::{Deserialize, Serialize};

/// Patient sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }
}

/// Referral source for the consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Referral {
    Cardio,
    Nefro,
    Outra,
    #[serde(rename = "Pós-internamento")]
    PosInternamento,
}

impl Referral {
    pub fn as_str(self) -> &'static str {
        match self {
            Referral::Cardio => "Cardio",
            Referral::Nefro => "Nefro",
            Referral::Outra => "Outra",
            Referral::PosInternamento => "Pós-internamento",
        }
    }
}

/// Heart-failure ejection-fraction category.
///
/// `FEr` < 40%, `FEmr` 40–49%, `FEp` ≥ 50%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfCategory {
    FEr,
    FEp,
    FEmr,
}

impl EfCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EfCategory::FEr => "FEr",
            EfCategory::FEp => "FEp",
            EfCategory::FEmr => "FEmr",
        }
    }
}

/// Chronic kidney disease stage (KDIGO G-stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CkdStage {
    G1,
    G2,
    G3a,
    G3b,
    G4,
    G5,
}

impl CkdStage {
    pub fn as_str(self) -> &'static str {
        match self {
            CkdStage::G1 => "G1",
            CkdStage::G2 => "G2",
            CkdStage::G3a => "G3a",
            CkdStage::G3b => "G3b",
            CkdStage::G4 => "G4",
            CkdStage::G5 => "G5",
        }
    }
}

/// Albuminuria category (KDIGO A-stage).
///
/// `A1` < 30 mg/g, `A2` 30–300 mg/g, `A3` > 300 mg/g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Albuminuria {
    A1,
    A2,
    A3,
}

impl Albuminuria {
    pub fn as_str(self) -> &'static str {
        match self {
            Albuminuria::A1 => "A1",
            Albuminuria::A2 => "A2",
            Albuminuria::A3 => "A3",
        }
    }
}

/// Congestion phenotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Congestion {
    Tecidular,
    Vascular,
    Misto,
    Ausente,
}

impl Congestion {
    pub fn as_str(self) -> &'static str {
        match self {
            Congestion::Tecidular => "Tecidular",
            Congestion::Vascular => "Vascular",
            Congestion::Misto => "Misto",
            Congestion::Ausente => "Ausente",
        }
    }
}
