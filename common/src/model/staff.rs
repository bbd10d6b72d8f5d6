//! Wire model for the staff-directory document: an ordered array of records,
//! each holding a fixed-key `personalInfo` mapping plus an ordered
//! responsibility list.
//!
//! Field declaration order doubles as the rendering and serialization order,
//! so it must stay aligned with the upstream JSON files. All leaf fields are
//! `#[serde(default)]`: classification is a shape sniff, and a recognized
//! document with missing keys loads with blanks instead of failing.

use serde::{Deserialize, Serialize};

/// The fixed campus list. Order matters: the `<select>` options render in
/// this order and newly added records default to the second entry.
pub const CAMPUSES: [&str; 5] = ["第一校區", "建工校區", "楠梓校區", "燕巢校區", "旗津校區"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(rename = "pfp-image", default)]
    pub pfp_image: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "job-title", default)]
    pub job_title: String,
    #[serde(default)]
    pub deputy: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub email: String,
}

/// One editable staff entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    #[serde(rename = "personalInfo", default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl StaffRecord {
    /// The record appended by the add operation: every field blank except the
    /// image placeholder (`"none"`), the default campus (second entry of
    /// [`CAMPUSES`]), and a single empty responsibility row.
    pub fn blank() -> Self {
        Self {
            personal_info: PersonalInfo {
                pfp_image: "none".to_string(),
                campus: CAMPUSES[1].to_string(),
                ..PersonalInfo::default()
            },
            responsibilities: vec![String::new()],
        }
    }
}

/// Typed key into [`PersonalInfo`]. `ALL` matches the struct's declared
/// field order, which is also the field panel's rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Image,
    Name,
    JobTitle,
    Deputy,
    Extension,
    Campus,
    Email,
}

impl PersonalField {
    pub const ALL: [PersonalField; 7] = [
        PersonalField::Image,
        PersonalField::Name,
        PersonalField::JobTitle,
        PersonalField::Deputy,
        PersonalField::Extension,
        PersonalField::Campus,
        PersonalField::Email,
    ];
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Image => &self.pfp_image,
            PersonalField::Name => &self.name,
            PersonalField::JobTitle => &self.job_title,
            PersonalField::Deputy => &self.deputy,
            PersonalField::Extension => &self.extension,
            PersonalField::Campus => &self.campus,
            PersonalField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: String) {
        match field {
            PersonalField::Image => self.pfp_image = value,
            PersonalField::Name => self.name = value,
            PersonalField::JobTitle => self.job_title = value,
            PersonalField::Deputy => self.deputy = value,
            PersonalField::Extension => self.extension = value,
            PersonalField::Campus => self.campus = value,
            PersonalField::Email => self.email = value,
        }
    }
}
