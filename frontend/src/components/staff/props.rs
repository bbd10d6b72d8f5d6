//! Properties for the staff editor component.

use common::model::staff::StaffRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StaffEditorProps {
    /// The freshly classified staff array. The component copies it into its
    /// own editor state on mount and again whenever a new array arrives.
    pub records: Vec<StaffRecord>,

    /// Name of the loaded file; the plain download action reuses it and
    /// falls back to `data.json` when absent.
    #[prop_or_default]
    pub file_name: Option<String>,
}
