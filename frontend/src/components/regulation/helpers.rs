//! Label mappings and digest helpers for the regulation editor.

use common::export;
use common::model::regulation::{FormField, FormRecord, RegulationSection};

use crate::components::{UNNAMED_LABEL, compute_md5};

/// List label: the form title, with a placeholder for untitled forms.
pub fn form_label(form: &FormRecord) -> &str {
    if form.title.is_empty() {
        UNNAMED_LABEL
    } else {
        form.title.as_str()
    }
}

/// Display label for each scalar form field.
pub fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Title => "標題",
        FormField::OdtUrl => "ODT 下載連結",
        FormField::PdfUrl => "PDF 下載連結",
        FormField::DocxUrl => "DOCX 下載連結",
        FormField::LastUpdate => "最後更新日期",
    }
}

/// Digest of the section as it would be exported, for dirty checking.
pub fn snapshot_md5(section: &RegulationSection) -> String {
    export::regulation_json(section)
        .map(|json| compute_md5(&json))
        .unwrap_or_default()
}
