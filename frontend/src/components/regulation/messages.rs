use common::model::regulation::{ContactField, FormField};

pub enum Msg {
    Select(usize),
    EditField(FormField, String),
    EditContact(ContactField, String),
    AddForm,
    DeleteForm,
    Revert,
    DragStarted(usize),
    DroppedOn(usize),
    DragEnded,
    Download,
    ExportToDocPage,
}
