//! Serialization of the edited document back to JSON text, plus the fixed
//! file-name conventions of the two download actions. Writing the bytes to
//! disk is the browser layer's job; this module only produces the payload.

use crate::model::regulation::{RegulationDocument, RegulationSection};
use crate::model::staff::StaffRecord;

/// File name used by the staff export action.
pub const STAFF_EXPORT_FILE_NAME: &str = "ead_staff.json";
/// File name used by the regulation export action.
pub const REGULATION_EXPORT_FILE_NAME: &str = "document.json";
/// Fallback for the plain download action when no file name is known.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "data.json";

/// Companion page opened in a new tab after the staff export.
pub const STAFF_COMPANION_PAGE: &str = "ead.html";
/// Companion page opened in a new tab after the regulation export.
pub const REGULATION_COMPANION_PAGE: &str = "document-download.html";

/// The full edited staff array, 2-space indented.
pub fn staff_json(records: &[StaffRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// The edited section re-wrapped as `{ "sections": [ … ] }`, 2-space
/// indented. Sections beyond the first were dropped at load and are not
/// resurrected here.
pub fn regulation_json(section: &RegulationSection) -> Result<String, serde_json::Error> {
    let document = RegulationDocument {
        sections: vec![section.clone()],
    };
    serde_json::to_string_pretty(&document)
}

/// The plain download action keeps the loaded file's name when there is one.
pub fn download_file_name(loaded: Option<&str>) -> &str {
    match loaded {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_DOWNLOAD_FILE_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::classify;
    use crate::model::Document;
    use crate::model::staff::PersonalField;
    use crate::editor::regulation::RegulationEditor;
    use crate::editor::staff::StaffEditor;
    use serde_json::Value;

    const STAFF_INPUT: &str = r#"[{"personalInfo":{"name":"A","job-title":"X","pfp-image":"","deputy":"","extension":"1","campus":"第一校區","email":"a@x"},"responsibilities":["r1"]}]"#;

    const REGULATION_INPUT: &str = r#"{"sections":[{"id":"laws","title":"法規","forms":[{"title":"申請表","odtUrl":"a.odt","pdfUrl":"a.pdf","docxUrl":"a.docx","lastUpdate":"2024-01-01","contacts":[{"name":"王","extension":"123"},{"name":"李","extension":"456"}]}]}]}"#;

    fn as_value(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn staff_load_then_export_is_json_equal() {
        let Document::Staff(records) = classify(STAFF_INPUT).unwrap() else {
            panic!("expected staff document");
        };
        let exported = staff_json(&records).unwrap();
        assert_eq!(as_value(&exported), as_value(STAFF_INPUT));
    }

    #[test]
    fn staff_export_is_two_space_indented() {
        let Document::Staff(records) = classify(STAFF_INPUT).unwrap() else {
            panic!("expected staff document");
        };
        let exported = staff_json(&records).unwrap();
        assert!(exported.contains("\n  {"));
    }

    #[test]
    fn regulation_load_then_export_is_json_equal() {
        let Document::Regulation(section) = classify(REGULATION_INPUT).unwrap() else {
            panic!("expected regulation document");
        };
        let exported = regulation_json(&section).unwrap();
        assert_eq!(as_value(&exported), as_value(REGULATION_INPUT));
    }

    #[test]
    fn edited_staff_name_shows_up_in_the_export() {
        let Document::Staff(records) = classify(STAFF_INPUT).unwrap() else {
            panic!("expected staff document");
        };
        let mut editor = StaffEditor::new(records);
        editor.edit_personal(PersonalField::Name, "B".to_string());

        let exported = as_value(&staff_json(editor.records()).unwrap());
        assert_eq!(exported[0]["personalInfo"]["name"], "B");
        // Everything else is untouched.
        assert_eq!(exported[0]["personalInfo"]["job-title"], "X");
        assert_eq!(exported[0]["personalInfo"]["campus"], "第一校區");
        assert_eq!(exported[0]["responsibilities"], as_value(r#"["r1"]"#));
    }

    #[test]
    fn contact_edit_keeps_the_second_contact_verbatim() {
        let Document::Regulation(section) = classify(REGULATION_INPUT).unwrap() else {
            panic!("expected regulation document");
        };
        let mut editor = RegulationEditor::new(section);
        editor.edit_contact(crate::model::regulation::ContactField::Extension, "789".to_string());

        let exported = as_value(&regulation_json(editor.section()).unwrap());
        let contacts = &exported["sections"][0]["forms"][0]["contacts"];
        assert_eq!(contacts[0]["extension"], "789");
        assert_eq!(contacts[1]["name"], "李");
        assert_eq!(contacts[1]["extension"], "456");
    }

    #[test]
    fn download_file_name_falls_back_to_data_json() {
        assert_eq!(download_file_name(Some("staff.json")), "staff.json");
        assert_eq!(download_file_name(Some("")), DEFAULT_DOWNLOAD_FILE_NAME);
        assert_eq!(download_file_name(None), DEFAULT_DOWNLOAD_FILE_NAME);
    }
}
