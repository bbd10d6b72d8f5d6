//! Label mappings and digest helpers for the staff editor.

use common::export;
use common::model::staff::{PersonalField, StaffRecord};

use crate::components::{UNNAMED_LABEL, compute_md5};

/// List label: `職務 - 姓名`, with a placeholder for unnamed records.
pub fn record_label(record: &StaffRecord) -> String {
    let name = if record.personal_info.name.is_empty() {
        UNNAMED_LABEL
    } else {
        record.personal_info.name.as_str()
    };
    format!("{} - {}", record.personal_info.job_title, name)
}

/// Display label for each `personalInfo` field.
pub fn field_label(field: PersonalField) -> &'static str {
    match field {
        PersonalField::Image => "圖片連結",
        PersonalField::Name => "姓名",
        PersonalField::JobTitle => "職務",
        PersonalField::Deputy => "代理人",
        PersonalField::Extension => "分機",
        PersonalField::Campus => "校區",
        PersonalField::Email => "電子郵件",
    }
}

/// Digest of the document as it would be exported, for dirty checking.
/// Serialization of these models cannot realistically fail; an error just
/// yields an empty digest, which reads as "dirty".
pub fn snapshot_md5(records: &[StaffRecord]) -> String {
    export::staff_json(records)
        .map(|json| compute_md5(&json))
        .unwrap_or_default()
}
