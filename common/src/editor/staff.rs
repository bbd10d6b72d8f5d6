//! Editor state machine for the staff directory.
//!
//! Two reorderable scopes live here: the record list itself and the active
//! record's responsibility list. Revert always restores the full snapshot
//! captured at load — the staff variant has no single-delete recall.

use crate::editor::move_item;
use crate::model::staff::{PersonalField, StaffRecord};

/// Which list a drag-originated reorder applies to. A drop carrying the
/// wrong scope must never touch the other list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffScope {
    Records,
    Responsibilities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffEditor {
    records: Vec<StaffRecord>,
    /// Pristine copy taken at load time; editing never touches it.
    original: Vec<StaffRecord>,
    /// Always a valid index into `records`, or `None` when the list is empty.
    selected: Option<usize>,
}

impl StaffEditor {
    pub fn new(records: Vec<StaffRecord>) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            original: records.clone(),
            records,
            selected,
        }
    }

    pub fn records(&self) -> &[StaffRecord] {
        &self.records
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&StaffRecord> {
        self.selected.and_then(|index| self.records.get(index))
    }

    /// Makes `index` the active record. Out of range is a no-op.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Writes one `personalInfo` field of the active record.
    pub fn edit_personal(&mut self, field: PersonalField, value: String) -> bool {
        let Some(record) = self.selected_record_mut() else {
            return false;
        };
        record.personal_info.set(field, value);
        true
    }

    /// Replaces the active record's responsibility list wholesale. Field
    /// edits to individual rows route through here with the row swapped in.
    pub fn set_responsibilities(&mut self, items: Vec<String>) -> bool {
        let Some(record) = self.selected_record_mut() else {
            return false;
        };
        record.responsibilities = items;
        true
    }

    /// Appends a blank record and selects it.
    pub fn add_record(&mut self) {
        self.records.push(StaffRecord::blank());
        self.selected = Some(self.records.len() - 1);
    }

    /// Removes the active record. Selection falls back to the first record,
    /// or to none when the list empties. No recall slot for staff.
    pub fn delete_record(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        if index >= self.records.len() {
            return;
        }
        self.records.remove(index);
        self.selected = if self.records.is_empty() { None } else { Some(0) };
    }

    /// Replaces the whole document with the load snapshot and selects the
    /// first record.
    pub fn revert(&mut self) {
        self.records = self.original.clone();
        self.selected = if self.records.is_empty() { None } else { Some(0) };
    }

    /// Applies a drag-originated reorder. `dest` is `None` when the drag did
    /// not land on a valid drop target, which is a no-op. Record-list moves
    /// follow the moved record with the selection; responsibility moves
    /// leave the selection alone.
    pub fn reorder(&mut self, scope: StaffScope, source: usize, dest: Option<usize>) -> bool {
        let Some(dest) = dest else {
            return false;
        };
        match scope {
            StaffScope::Records => {
                if !move_item(&mut self.records, source, dest) {
                    return false;
                }
                self.selected = Some(dest);
                true
            }
            StaffScope::Responsibilities => {
                let Some(record) = self.selected_record_mut() else {
                    return false;
                };
                move_item(&mut record.responsibilities, source, dest)
            }
        }
    }

    /// Appends an empty responsibility row to the active record.
    pub fn add_responsibility(&mut self) -> bool {
        let Some(record) = self.selected_record_mut() else {
            return false;
        };
        record.responsibilities.push(String::new());
        true
    }

    /// Deletes responsibility row `index` of the active record.
    pub fn remove_responsibility(&mut self, index: usize) -> bool {
        let Some(record) = self.selected_record_mut() else {
            return false;
        };
        if index >= record.responsibilities.len() {
            return false;
        }
        record.responsibilities.remove(index);
        true
    }

    fn selected_record_mut(&mut self) -> Option<&mut StaffRecord> {
        self.selected.and_then(|index| self.records.get_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::staff::{CAMPUSES, PersonalInfo};

    fn record(name: &str, job_title: &str) -> StaffRecord {
        StaffRecord {
            personal_info: PersonalInfo {
                name: name.to_string(),
                job_title: job_title.to_string(),
                ..PersonalInfo::default()
            },
            responsibilities: vec!["r1".to_string(), "r2".to_string()],
        }
    }

    fn editor() -> StaffEditor {
        StaffEditor::new(vec![record("甲", "組長"), record("乙", "組員"), record("丙", "組員")])
    }

    fn names(editor: &StaffEditor) -> Vec<&str> {
        editor
            .records()
            .iter()
            .map(|r| r.personal_info.name.as_str())
            .collect()
    }

    #[test]
    fn loading_selects_the_first_record() {
        assert_eq!(editor().selected_index(), Some(0));
        assert_eq!(StaffEditor::new(Vec::new()).selected_index(), None);
    }

    #[test]
    fn select_out_of_range_is_a_noop() {
        let mut editor = editor();
        assert!(!editor.select(3));
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn editing_with_no_selection_is_a_noop() {
        let mut editor = StaffEditor::new(Vec::new());
        assert!(!editor.edit_personal(PersonalField::Name, "X".to_string()));
        assert!(!editor.set_responsibilities(vec!["r".to_string()]));
        assert!(!editor.add_responsibility());
    }

    #[test]
    fn add_appends_a_blank_record_and_selects_it() {
        let mut editor = editor();
        editor.add_record();
        assert_eq!(editor.selected_index(), Some(3));
        let added = editor.selected_record().unwrap();
        assert_eq!(added.personal_info.pfp_image, "none");
        assert_eq!(added.personal_info.campus, CAMPUSES[1]);
        assert_eq!(added.responsibilities, vec![String::new()]);
    }

    #[test]
    fn add_then_delete_restores_the_previous_list() {
        let mut editor = editor();
        let before = editor.records().to_vec();
        editor.add_record();
        editor.delete_record();
        assert_eq!(editor.records(), before.as_slice());
    }

    #[test]
    fn delete_moves_selection_to_the_first_record() {
        let mut editor = editor();
        editor.select(2);
        editor.delete_record();
        assert_eq!(names(&editor), vec!["甲", "乙"]);
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn deleting_the_last_record_clears_the_selection() {
        let mut editor = StaffEditor::new(vec![record("甲", "組長")]);
        editor.delete_record();
        assert_eq!(editor.selected_index(), None);
        editor.delete_record();
        assert!(editor.records().is_empty());
    }

    #[test]
    fn reorder_round_trip_restores_the_original_order() {
        let mut editor = editor();
        assert!(editor.reorder(StaffScope::Records, 0, Some(2)));
        assert_eq!(names(&editor), vec!["乙", "丙", "甲"]);
        assert_eq!(editor.selected_index(), Some(2));
        assert!(editor.reorder(StaffScope::Records, 2, Some(0)));
        assert_eq!(names(&editor), vec!["甲", "乙", "丙"]);
    }

    #[test]
    fn reorder_without_destination_is_a_noop() {
        let mut editor = editor();
        assert!(!editor.reorder(StaffScope::Records, 0, None));
        assert_eq!(names(&editor), vec!["甲", "乙", "丙"]);
    }

    #[test]
    fn reorder_on_an_empty_list_is_a_noop() {
        let mut editor = StaffEditor::new(Vec::new());
        assert!(!editor.reorder(StaffScope::Records, 0, Some(0)));
    }

    #[test]
    fn responsibility_reorder_only_touches_the_active_record() {
        let mut editor = editor();
        editor.select(1);
        assert!(editor.reorder(StaffScope::Responsibilities, 0, Some(1)));
        assert_eq!(editor.records()[1].responsibilities, vec!["r2", "r1"]);
        assert_eq!(editor.records()[0].responsibilities, vec!["r1", "r2"]);
        // Record order and selection are untouched by the sub-list scope.
        assert_eq!(names(&editor), vec!["甲", "乙", "丙"]);
        assert_eq!(editor.selected_index(), Some(1));
    }

    #[test]
    fn responsibility_rows_can_be_added_and_removed() {
        let mut editor = editor();
        assert!(editor.add_responsibility());
        assert_eq!(editor.selected_record().unwrap().responsibilities.len(), 3);
        assert!(editor.remove_responsibility(0));
        assert_eq!(
            editor.selected_record().unwrap().responsibilities,
            vec!["r2", ""]
        );
        assert!(!editor.remove_responsibility(9));
    }

    #[test]
    fn revert_restores_the_load_snapshot_after_arbitrary_edits() {
        let mut editor = editor();
        let snapshot = editor.records().to_vec();
        editor.edit_personal(PersonalField::Name, "改".to_string());
        editor.add_record();
        editor.select(0);
        editor.delete_record();
        editor.reorder(StaffScope::Records, 0, Some(1));
        editor.revert();
        assert_eq!(editor.records(), snapshot.as_slice());
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn field_edits_hit_only_the_active_record() {
        let mut editor = editor();
        editor.select(1);
        assert!(editor.edit_personal(PersonalField::Extension, "42".to_string()));
        assert_eq!(editor.records()[1].personal_info.extension, "42");
        assert_eq!(editor.records()[0].personal_info.extension, "");
    }
}
