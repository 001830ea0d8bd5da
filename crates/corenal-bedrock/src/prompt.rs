//! Instruction payload for the clinical extraction call.
//!
//! The payload has three parts: the normalization rules (in Portuguese,
//! matching the language of the notes), the clinical text, and the
//! all-null JSON skeleton generated from the canonical record types.
//! The model is told to answer with the filled skeleton and nothing
//! else.

use corenal_core::schema;

use crate::error::ExtractError;

/// System prompt for the extraction call.
pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
És um assistente especializado em extração de dados clínicos de \
consultas de Cardiologia-Nefrologia (síndrome cardiorrenal). Analisa o \
registo clínico em Português e devolve APENAS um objeto JSON válido \
com a estrutura indicada. Sem markdown, sem texto extra.";

/// Normalization rules embedded in every extraction request.
///
/// These mirror the controlled vocabularies in `corenal_core::vocab`
/// and the drug-name → medication-class synonym lists; a vocabulary
/// change there must be reflected here.
const EXTRACTION_RULES: &str = "\
REGRAS DE EXTRAÇÃO:
- Booleanos: true ou false (nunca \"Sim\"/\"Não\")
- Números: só o valor numérico, sem unidades
- Datas: formato \"YYYY-MM-DD\"  |  null se ausente
- Strings não encontradas: null
- Sexo: \"M\" ou \"F\"
- NYHA: inteiro 1–4  |  CCS: inteiro 0–4  |  Frailty CFS: inteiro 1–9
- IC tipo FE: \"FEr\" (<40%), \"FEp\" (≥50%), \"FEmr\" (40–49%), ou null
- DRC Grau: \"G1\"/\"G2\"/\"G3a\"/\"G3b\"/\"G4\"/\"G5\" ou null
- DRC Albuminúria: \"A1\" (<30 mg/g), \"A2\" (30–300 mg/g), \"A3\" (>300 mg/g) ou null
- Fenótipo congestão: \"Tecidular\"/\"Vascular\"/\"Misto\"/\"Ausente\" ou null
- Referenciação: \"Cardio\"/\"Nefro\"/\"Outra\"/\"Pós-internamento\" ou null
- TFGe: valor numérico (preferencialmente CKD-EPI Cr-Cist se disponível)
- RACu/RAC: valor em mg/g como número
- NT-proBNP: valor em pg/mL como número
- Linhas B: número de campos pulmonares com linhas B (ex: \"7/8\" → 7)
- VCI: diâmetro em mm como número
- FE: percentagem como número (ex: \"40%\" → 40)
- Para medicação: \"presente\" = true se o fármaco constar na medicação actual do doente
- RASi inclui: IECA (lisinopril, ramipril, enalapril, perindopril...), ARA (valsartan, losartan, olmesartan...), ARNi (sacubitril/valsartan = Entresto)
- MRA inclui: espironolactona, finerenona, eplerenona
- iSGLT2 inclui: dapagliflozina, empagliflozina, canagliflozina
- GLP-1RA inclui: semaglutido, liraglutido, dulaglutido, exenatido
- Antiagregante inclui: AAS/ácido acetilsalicílico, clopidogrel, ticagrelor, prasugrel
- Anticoagulante inclui: apixabano, rivaroxabano, dabigatrano, edoxabano, varfarina
- Beta-bloqueante inclui: carvedilol, bisoprolol, nebivolol, metoprolol, atenolol";

/// Build the user message for an extraction request.
///
/// The schema skeleton is rendered from the default record at call
/// time, so the requested shape always matches what
/// [`crate::invoke::parse_extraction_reply`] accepts.
pub fn build_extraction_prompt(clinical_text: &str) -> Result<String, ExtractError> {
    let skeleton = schema::skeleton_json()?;
    Ok(format!(
        "{EXTRACTION_RULES}\n\n\
         TEXTO CLÍNICO:\n{clinical_text}\n\n\
         Responde EXCLUSIVAMENTE com o JSON abaixo preenchido \
         (sem markdown, sem texto extra):\n\n{skeleton}"
    ))
}
