//! Editor state machine for the regulation / document-download variant.
//!
//! Delete fills a single-slot recall buffer, and revert is asymmetric by
//! design: while the slot is occupied it re-inserts the deleted form next to
//! the selection (undo-last-delete), and only with an empty slot does it fall
//! back to restoring the forms list captured at load.

use crate::editor::move_item;
use crate::model::regulation::{Contact, ContactField, FormField, FormRecord, RegulationSection};

#[derive(Debug, Clone, PartialEq)]
pub struct RegulationEditor {
    section: RegulationSection,
    /// Pristine forms list taken at load time. Only the forms are
    /// snapshotted; `id` and `title` edits survive a revert.
    original_forms: Vec<FormRecord>,
    /// Always a valid index into `section.forms`, or `None` when empty.
    selected: Option<usize>,
    /// Single-slot recall buffer holding the most recently deleted form.
    last_deleted: Option<FormRecord>,
}

impl RegulationEditor {
    pub fn new(section: RegulationSection) -> Self {
        let selected = if section.forms.is_empty() { None } else { Some(0) };
        Self {
            original_forms: section.forms.clone(),
            section,
            selected,
            last_deleted: None,
        }
    }

    pub fn section(&self) -> &RegulationSection {
        &self.section
    }

    pub fn forms(&self) -> &[FormRecord] {
        &self.section.forms
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_form(&self) -> Option<&FormRecord> {
        self.selected.and_then(|index| self.section.forms.get(index))
    }

    pub fn has_pending_recall(&self) -> bool {
        self.last_deleted.is_some()
    }

    /// Makes `index` the active form. Out of range is a no-op.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.section.forms.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Writes one scalar field of the active form.
    pub fn edit_field(&mut self, field: FormField, value: String) -> bool {
        let Some(form) = self.selected_form_mut() else {
            return false;
        };
        form.set(field, value);
        true
    }

    /// Writes one field of the active form's first contact, creating it if
    /// the form arrived without contacts. Further contacts are never touched.
    pub fn edit_contact(&mut self, field: ContactField, value: String) -> bool {
        let Some(form) = self.selected_form_mut() else {
            return false;
        };
        if form.contacts.is_empty() {
            form.contacts.push(Contact::default());
        }
        if let Some(contact) = form.contacts.first_mut() {
            contact.set(field, value);
        }
        true
    }

    /// Appends a blank form and selects it.
    pub fn add_form(&mut self) {
        self.section.forms.push(FormRecord::blank());
        self.selected = Some(self.section.forms.len() - 1);
    }

    /// Removes the active form into the recall slot. Selection falls back to
    /// the first form, or to none when the list empties.
    pub fn delete_form(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        if index >= self.section.forms.len() {
            return;
        }
        let removed = self.section.forms.remove(index);
        self.last_deleted = Some(removed);
        self.selected = if self.section.forms.is_empty() { None } else { Some(0) };
    }

    /// Undo-last-delete while the recall slot is occupied: the deleted form
    /// goes back in right after the current selection (clamped into range)
    /// and becomes the selection, emptying the slot. With an empty slot this
    /// restores the forms list captured at load instead.
    pub fn revert(&mut self) {
        if let Some(form) = self.last_deleted.take() {
            let at = self
                .selected
                .map(|index| index + 1)
                .unwrap_or(0)
                .min(self.section.forms.len());
            self.section.forms.insert(at, form);
            self.selected = Some(at);
        } else {
            self.section.forms = self.original_forms.clone();
            self.selected = if self.section.forms.is_empty() { None } else { Some(0) };
        }
    }

    /// Applies a drag-originated reorder over the single form-list scope.
    /// `dest` is `None` when the drag missed every drop target (no-op); a
    /// successful move follows the moved form with the selection.
    pub fn reorder(&mut self, source: usize, dest: Option<usize>) -> bool {
        let Some(dest) = dest else {
            return false;
        };
        if !move_item(&mut self.section.forms, source, dest) {
            return false;
        }
        self.selected = Some(dest);
        true
    }

    fn selected_form_mut(&mut self) -> Option<&mut FormRecord> {
        self.selected.and_then(|index| self.section.forms.get_mut(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str) -> FormRecord {
        FormRecord {
            title: title.to_string(),
            contacts: vec![Contact {
                name: "王小明".to_string(),
                extension: "100".to_string(),
            }],
            ..FormRecord::default()
        }
    }

    fn section(forms: Vec<FormRecord>) -> RegulationSection {
        RegulationSection {
            id: "laws".to_string(),
            title: "法規".to_string(),
            forms,
        }
    }

    fn editor() -> RegulationEditor {
        RegulationEditor::new(section(vec![form("A"), form("B"), form("C")]))
    }

    fn titles(editor: &RegulationEditor) -> Vec<&str> {
        editor.forms().iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn delete_then_revert_reinserts_right_after_the_selection() {
        let mut editor = editor();
        editor.select(1);
        editor.delete_form();
        assert_eq!(titles(&editor), vec!["A", "C"]);
        assert_eq!(editor.selected_index(), Some(0));
        assert!(editor.has_pending_recall());

        editor.revert();
        assert_eq!(titles(&editor), vec!["A", "B", "C"]);
        assert_eq!(editor.selected_index(), Some(1));
        assert!(!editor.has_pending_recall());
    }

    #[test]
    fn revert_without_pending_recall_restores_the_original_forms() {
        let mut editor = editor();
        editor.edit_field(FormField::Title, "改".to_string());
        editor.add_form();
        editor.reorder(0, Some(2));
        editor.revert();
        assert_eq!(titles(&editor), vec!["A", "B", "C"]);
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn recall_is_single_shot() {
        let mut editor = editor();
        editor.edit_field(FormField::Title, "A改".to_string());
        editor.select(2);
        editor.delete_form();
        editor.revert(); // consumes the slot
        editor.revert(); // falls back to the full restore
        assert_eq!(titles(&editor), vec!["A", "B", "C"]);
    }

    #[test]
    fn deleting_the_only_form_then_reverting_recovers_it() {
        let mut editor = RegulationEditor::new(section(vec![form("唯一")]));
        editor.delete_form();
        assert_eq!(editor.selected_index(), None);
        editor.revert();
        assert_eq!(titles(&editor), vec!["唯一"]);
        assert_eq!(editor.selected_index(), Some(0));
    }

    #[test]
    fn delete_on_an_empty_list_is_a_noop() {
        let mut editor = RegulationEditor::new(section(Vec::new()));
        editor.delete_form();
        assert!(!editor.has_pending_recall());
        assert_eq!(editor.selected_index(), None);
    }

    #[test]
    fn add_then_delete_is_an_inverse_for_a_fresh_form() {
        let mut editor = editor();
        let before = editor.forms().to_vec();
        editor.add_form();
        assert_eq!(editor.selected_index(), Some(3));
        editor.delete_form();
        assert_eq!(editor.forms(), before.as_slice());
    }

    #[test]
    fn added_forms_start_with_one_empty_contact() {
        let mut editor = RegulationEditor::new(section(Vec::new()));
        editor.add_form();
        let added = editor.selected_form().unwrap();
        assert_eq!(added.contacts, vec![Contact::default()]);
        assert_eq!(added.title, "");
    }

    #[test]
    fn contact_edits_preserve_contacts_beyond_the_first() {
        let mut first = form("A");
        first.contacts.push(Contact {
            name: "備援".to_string(),
            extension: "999".to_string(),
        });
        let mut editor = RegulationEditor::new(section(vec![first]));

        assert!(editor.edit_contact(ContactField::Extension, "101".to_string()));
        let contacts = &editor.forms()[0].contacts;
        assert_eq!(contacts[0].extension, "101");
        assert_eq!(contacts[0].name, "王小明");
        assert_eq!(contacts[1].name, "備援");
        assert_eq!(contacts[1].extension, "999");
    }

    #[test]
    fn contact_edit_creates_the_first_contact_when_missing() {
        let mut bare = form("A");
        bare.contacts.clear();
        let mut editor = RegulationEditor::new(section(vec![bare]));

        assert!(editor.edit_contact(ContactField::Name, "新聯絡人".to_string()));
        assert_eq!(editor.forms()[0].contacts.len(), 1);
        assert_eq!(editor.forms()[0].contacts[0].name, "新聯絡人");
    }

    #[test]
    fn reorder_round_trip_restores_the_original_order() {
        let mut editor = editor();
        assert!(editor.reorder(2, Some(0)));
        assert_eq!(titles(&editor), vec!["C", "A", "B"]);
        assert_eq!(editor.selected_index(), Some(0));
        assert!(editor.reorder(0, Some(2)));
        assert_eq!(titles(&editor), vec!["A", "B", "C"]);
    }

    #[test]
    fn reorder_without_destination_is_a_noop() {
        let mut editor = editor();
        assert!(!editor.reorder(0, None));
        assert_eq!(titles(&editor), vec!["A", "B", "C"]);
    }

    #[test]
    fn edits_with_no_selection_are_noops() {
        let mut editor = RegulationEditor::new(section(Vec::new()));
        assert!(!editor.edit_field(FormField::Title, "x".to_string()));
        assert!(!editor.edit_contact(ContactField::Name, "x".to_string()));
    }
}
