//! Update function for the regulation editor. Same shape as the staff one,
//! minus the saved badge: mutations re-sync the page dirty flag and return
//! whether the view needs re-rendering.

use gloo_console::error;
use yew::prelude::*;

use common::editor::regulation::RegulationEditor;
use common::export;

use crate::components::set_window_dirty_flag;
use crate::exporter;

use super::messages::Msg;
use super::state::RegulationEditorComponent;

pub fn update(
    component: &mut RegulationEditorComponent,
    ctx: &Context<RegulationEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Select(index) => component.editor.select(index),
        Msg::EditField(field, value) => {
            mutate(component, |editor| editor.edit_field(field, value))
        }
        Msg::EditContact(field, value) => {
            mutate(component, |editor| editor.edit_contact(field, value))
        }
        Msg::AddForm => {
            component.editor.add_form();
            sync_dirty_flag(component);
            true
        }
        Msg::DeleteForm => {
            component.editor.delete_form();
            sync_dirty_flag(component);
            true
        }
        Msg::Revert => {
            component.editor.revert();
            sync_dirty_flag(component);
            true
        }
        Msg::DragStarted(index) => {
            component.drag_source = Some(index);
            false
        }
        Msg::DroppedOn(dest) => {
            let Some(source) = component.drag_source.take() else {
                return false;
            };
            mutate(component, |editor| editor.reorder(source, Some(dest)))
        }
        Msg::DragEnded => {
            component.drag_source = None;
            false
        }
        Msg::Download => {
            match export::regulation_json(component.editor.section()) {
                Ok(json) => {
                    let file_name = ctx.props().file_name.clone();
                    exporter::trigger_download(export::download_file_name(file_name.as_deref()), &json);
                }
                Err(err) => error!(format!("序列化失敗: {err}")),
            }
            false
        }
        Msg::ExportToDocPage => {
            match export::regulation_json(component.editor.section()) {
                Ok(json) => {
                    exporter::trigger_download(export::REGULATION_EXPORT_FILE_NAME, &json);
                    exporter::open_companion_page(export::REGULATION_COMPANION_PAGE);
                }
                Err(err) => error!(format!("序列化失敗: {err}")),
            }
            false
        }
    }
}

fn mutate(
    component: &mut RegulationEditorComponent,
    op: impl FnOnce(&mut RegulationEditor) -> bool,
) -> bool {
    if !op(&mut component.editor) {
        return false;
    }
    sync_dirty_flag(component);
    true
}

fn sync_dirty_flag(component: &RegulationEditorComponent) {
    set_window_dirty_flag(component.is_dirty());
}
