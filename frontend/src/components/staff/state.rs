//! Component state for the staff editor.
//!
//! The document itself lives in the `StaffEditor` state machine from
//! `common`; everything else here is display-transient: the dirty-check
//! digest, the auto-clearing saved badge, and the drag bookkeeping.

use common::editor::staff::{StaffEditor, StaffScope};
use common::model::staff::StaffRecord;
use gloo_timers::callback::Timeout;

use super::helpers;

pub struct StaffEditorComponent {
    /// Working copy plus load snapshot, selection, and list operations.
    pub editor: StaffEditor,

    /// MD5 of the serialized document as loaded. Compared against the
    /// current serialization to drive the unsaved-changes dot.
    pub original_md5: String,

    /// Transient saved badge, set by edits and cleared by a timeout.
    pub saved: bool,

    /// Pending clear for the saved badge. Dropping the handle cancels it,
    /// so storing a new one reschedules instead of stacking timers.
    pub saved_timer: Option<Timeout>,

    /// Drag in progress: which list it started in and from which index.
    /// Cleared on drop or when the drag ends off-target.
    pub drag_source: Option<(StaffScope, usize)>,
}

impl StaffEditorComponent {
    pub fn new(records: Vec<StaffRecord>) -> Self {
        let original_md5 = helpers::snapshot_md5(&records);
        Self {
            editor: StaffEditor::new(records),
            original_md5,
            saved: false,
            saved_timer: None,
            drag_source: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        helpers::snapshot_md5(self.editor.records()) != self.original_md5
    }
}
