//! Update function for the staff editor, Elm-style: takes the component
//! state, the context, and a message; mutates; returns whether to re-render.
//!
//! Field edits and record adds raise the transient saved badge and
//! reschedule its clear; every mutation re-syncs the page-level dirty flag.
//! Download and export only read state, so they short-circuit re-rendering.

use gloo_console::error;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::editor::staff::StaffEditor;
use common::export;

use crate::components::set_window_dirty_flag;
use crate::exporter;

use super::messages::Msg;
use super::state::StaffEditorComponent;

/// How long the saved badge stays up after the last edit.
const SAVED_BADGE_MS: u32 = 1_500;

pub fn update(
    component: &mut StaffEditorComponent,
    ctx: &Context<StaffEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Select(index) => component.editor.select(index),
        Msg::EditPersonal(field, value) => {
            apply_edit(component, ctx, |editor| editor.edit_personal(field, value))
        }
        Msg::EditResponsibility(index, value) => {
            // The model replaces the responsibility list wholesale; swap the
            // edited row into a copy first.
            let Some(record) = component.editor.selected_record() else {
                return false;
            };
            let mut items = record.responsibilities.clone();
            let Some(slot) = items.get_mut(index) else {
                return false;
            };
            *slot = value;
            apply_edit(component, ctx, |editor| editor.set_responsibilities(items))
        }
        Msg::AddResponsibility => mutate(component, |editor| editor.add_responsibility()),
        Msg::RemoveResponsibility(index) => {
            mutate(component, |editor| editor.remove_responsibility(index))
        }
        Msg::AddRecord => {
            component.editor.add_record();
            mark_saved(component, ctx);
            sync_dirty_flag(component);
            true
        }
        Msg::DeleteRecord => {
            component.editor.delete_record();
            sync_dirty_flag(component);
            true
        }
        Msg::Revert => {
            component.editor.revert();
            sync_dirty_flag(component);
            true
        }
        Msg::DragStarted(scope, index) => {
            component.drag_source = Some((scope, index));
            false
        }
        Msg::DroppedOn(scope, dest) => {
            let Some((source_scope, source)) = component.drag_source.take() else {
                return false;
            };
            if source_scope != scope {
                return false;
            }
            mutate(component, |editor| editor.reorder(scope, source, Some(dest)))
        }
        Msg::DragEnded => {
            // The drag fizzled without hitting a drop target: no destination,
            // no reorder.
            component.drag_source = None;
            false
        }
        Msg::ClearSaved => {
            component.saved = false;
            component.saved_timer = None;
            true
        }
        Msg::Download => {
            match export::staff_json(component.editor.records()) {
                Ok(json) => {
                    let file_name = ctx.props().file_name.clone();
                    exporter::trigger_download(export::download_file_name(file_name.as_deref()), &json);
                }
                Err(err) => error!(format!("序列化失敗: {err}")),
            }
            false
        }
        Msg::ExportToEad => {
            match export::staff_json(component.editor.records()) {
                Ok(json) => {
                    exporter::trigger_download(export::STAFF_EXPORT_FILE_NAME, &json);
                    exporter::open_companion_page(export::STAFF_COMPANION_PAGE);
                }
                Err(err) => error!(format!("序列化失敗: {err}")),
            }
            false
        }
    }
}

/// Runs a field-edit operation; on change, raises the saved badge and
/// re-syncs the dirty flag.
fn apply_edit(
    component: &mut StaffEditorComponent,
    ctx: &Context<StaffEditorComponent>,
    op: impl FnOnce(&mut StaffEditor) -> bool,
) -> bool {
    if !op(&mut component.editor) {
        return false;
    }
    mark_saved(component, ctx);
    sync_dirty_flag(component);
    true
}

/// Runs a structural operation that does not raise the saved badge.
fn mutate(
    component: &mut StaffEditorComponent,
    op: impl FnOnce(&mut StaffEditor) -> bool,
) -> bool {
    if !op(&mut component.editor) {
        return false;
    }
    sync_dirty_flag(component);
    true
}

fn mark_saved(component: &mut StaffEditorComponent, ctx: &Context<StaffEditorComponent>) {
    component.saved = true;
    let link = ctx.link().clone();
    // Replacing the handle drops the previous timeout, so rapid edits push
    // the clear out instead of stacking timers.
    component.saved_timer = Some(Timeout::new(SAVED_BADGE_MS, move || {
        link.send_message(Msg::ClearSaved);
    }));
}

fn sync_dirty_flag(component: &StaffEditorComponent) {
    set_window_dirty_flag(component.is_dirty());
}
