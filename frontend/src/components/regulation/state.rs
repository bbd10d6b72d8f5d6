//! Component state for the regulation editor. The document (including the
//! recall slot) lives in `common`'s `RegulationEditor`; the rest is the
//! dirty digest and drag bookkeeping. No saved badge in this variant.

use common::editor::regulation::RegulationEditor;
use common::model::regulation::RegulationSection;

use super::helpers;

pub struct RegulationEditorComponent {
    pub editor: RegulationEditor,

    /// MD5 of the serialized document as loaded, for the unsaved-changes dot.
    pub original_md5: String,

    /// Index a form-list drag started from, cleared on drop or fizzle.
    pub drag_source: Option<usize>,
}

impl RegulationEditorComponent {
    pub fn new(section: RegulationSection) -> Self {
        let original_md5 = helpers::snapshot_md5(&section);
        Self {
            editor: RegulationEditor::new(section),
            original_md5,
            drag_source: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        helpers::snapshot_md5(self.editor.section()) != self.original_md5
    }
}
