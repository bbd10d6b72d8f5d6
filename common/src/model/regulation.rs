//! Wire model for the regulation / document-download variant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extension: String,
}

/// One downloadable document entry. Only `contacts[0]` is editable; any
/// further contacts present in the input ride along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "odtUrl", default)]
    pub odt_url: String,
    #[serde(rename = "pdfUrl", default)]
    pub pdf_url: String,
    #[serde(rename = "docxUrl", default)]
    pub docx_url: String,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl FormRecord {
    /// The form appended by the add operation: blank fields plus one empty
    /// contact so the contact row is immediately editable.
    pub fn blank() -> Self {
        Self {
            contacts: vec![Contact::default()],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulationSection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub forms: Vec<FormRecord>,
}

/// Top-level wire shape, `{ "sections": [ … ] }`. Only the first section is
/// loaded for editing and only the first section is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulationDocument {
    #[serde(default)]
    pub sections: Vec<RegulationSection>,
}

/// Typed key into the scalar fields of [`FormRecord`]. `ALL` is the field
/// panel's rendering order; `contacts` is handled by its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    OdtUrl,
    PdfUrl,
    DocxUrl,
    LastUpdate,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::OdtUrl,
        FormField::PdfUrl,
        FormField::DocxUrl,
        FormField::LastUpdate,
    ];
}

impl FormRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::OdtUrl => &self.odt_url,
            FormField::PdfUrl => &self.pdf_url,
            FormField::DocxUrl => &self.docx_url,
            FormField::LastUpdate => &self.last_update,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::OdtUrl => self.odt_url = value,
            FormField::PdfUrl => self.pdf_url = value,
            FormField::DocxUrl => self.docx_url = value,
            FormField::LastUpdate => self.last_update = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Extension,
}

impl Contact {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Extension => &self.extension,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Extension => self.extension = value,
        }
    }
}
