use common::editor::staff::StaffScope;
use common::model::staff::PersonalField;

pub enum Msg {
    Select(usize),
    EditPersonal(PersonalField, String),
    EditResponsibility(usize, String),
    AddResponsibility,
    RemoveResponsibility(usize),
    AddRecord,
    DeleteRecord,
    Revert,
    DragStarted(StaffScope, usize),
    DroppedOn(StaffScope, usize),
    DragEnded,
    ClearSaved,
    Download,
    ExportToEad,
}
