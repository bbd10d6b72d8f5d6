//! Properties for the regulation editor component.

use common::model::regulation::RegulationSection;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegulationEditorProps {
    /// The freshly classified first section. The component copies it into
    /// its own editor state on mount and again whenever a new one arrives.
    pub section: RegulationSection,

    /// Name of the loaded file; the plain download action reuses it and
    /// falls back to `data.json` when absent.
    #[prop_or_default]
    pub file_name: Option<String>,
}
