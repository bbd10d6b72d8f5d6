//! Document loader: parse the raw file text once, sniff which of the two
//! recognized shapes it matches, and decode it into the typed [`Document`]
//! union. Everything downstream works over the closed enum; nothing re-probes
//! the JSON at runtime.

use serde_json::Value;
use thiserror::Error;

use crate::model::Document;
use crate::model::regulation::RegulationDocument;
use crate::model::staff::StaffRecord;

/// The single user-visible failure mode: the file is not valid JSON, or it is
/// valid JSON of neither recognized shape. Callers discard any previous
/// document state on this error — a bad file never leaves a partial document
/// behind.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("JSON 解析失敗: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("格式不明")]
    UnrecognizedShape,
}

/// Classifies raw file content into one of the two document variants.
///
/// An array whose first element carries a `personalInfo` key is a staff
/// directory; otherwise an object whose `sections[0]` carries a `forms` key
/// is a regulation document (only `sections[0]` is kept — the export path
/// never writes anything else back). Anything else is unrecognized.
pub fn classify(raw: &str) -> Result<Document, LoadError> {
    let value: Value = serde_json::from_str(raw)?;

    if is_staff_shape(&value) {
        let records: Vec<StaffRecord> = serde_json::from_value(value)?;
        return Ok(Document::Staff(records));
    }

    if is_regulation_shape(&value) {
        let document: RegulationDocument = serde_json::from_value(value)?;
        let section = document
            .sections
            .into_iter()
            .next()
            .ok_or(LoadError::UnrecognizedShape)?;
        return Ok(Document::Regulation(section));
    }

    Err(LoadError::UnrecognizedShape)
}

fn is_staff_shape(value: &Value) -> bool {
    value
        .as_array()
        .and_then(|records| records.first())
        .map_or(false, |first| first.get("personalInfo").is_some())
}

fn is_regulation_shape(value: &Value) -> bool {
    value
        .get("sections")
        .and_then(|sections| sections.get(0))
        .map_or(false, |first| first.get("forms").is_some())
}
