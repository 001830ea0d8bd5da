//! Combines the document collaborators' raw text into one plain-text
//! blob for the extraction prompt.

/// Section marker separating the consultation note from lab-results
/// text. The extraction rules reference this heading, so it must stay
/// stable.
pub const LABS_SECTION_MARKER: &str = "=== ANÁLISES LABORATORIAIS ===";

/// Join the consultation note with optional lab-results text.
///
/// With labs present, the two sections are separated by
/// [`LABS_SECTION_MARKER`]; without, the note text passes through
/// unchanged.
pub fn combine_note_and_labs(note: &str, labs: Option<&str>) -> String {
    match labs {
        Some(labs) => format!("{note}\n\n{LABS_SECTION_MARKER}\n{labs}"),
        None => note.to_string(),
    }
}
