//! View rendering for the staff editor: an action bar (download / export /
//! saved badge / unsaved-changes dot), the reorderable record list on the
//! left, and the field panel for the active record on the right.
//!
//! Every input writes straight into the document via its message — there is
//! no draft buffer and no save button; the download actions serialize
//! whatever the document holds at that moment. List rows and responsibility
//! rows are native HTML5 drag sources and drop targets, tagged with their
//! scope so a drop landing in the other list cannot reorder it.

use common::editor::staff::StaffScope;
use common::model::staff::{CAMPUSES, PersonalField, StaffRecord};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::state::StaffEditorComponent;

pub fn view(component: &StaffEditorComponent, ctx: &Context<StaffEditorComponent>) -> Html {
    let link = ctx.link();
    html! {
        <>
            { build_action_bar(component, link) }
            <div class="editor-layout">
                { build_list_panel(component, link) }
                <div class="field-panel">
                    {
                        match component.editor.selected_record() {
                            Some(record) => build_field_panel(record, link),
                            None => html! { <p class="empty-hint">{"請先從左側選擇職員進行編輯。"}</p> },
                        }
                    }
                </div>
            </div>
        </>
    }
}

fn build_action_bar(component: &StaffEditorComponent, link: &Scope<StaffEditorComponent>) -> Html {
    html! {
        <div class="action-bar">
            <button class="btn-primary" onclick={link.callback(|_| Msg::Download)}>{"下載 JSON"}</button>
            <button class="btn-secondary" onclick={link.callback(|_| Msg::ExportToEad)}>{"匯出至 EAD"}</button>
            {
                if component.saved {
                    html! { <span class="saved-badge">{"已儲存"}</span> }
                } else {
                    html! {}
                }
            }
            {
                if component.is_dirty() {
                    html! { <span class="dirty-dot" title="尚未下載的變更" /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_list_panel(component: &StaffEditorComponent, link: &Scope<StaffEditorComponent>) -> Html {
    let items = component
        .editor
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| build_list_item(component, link, index, record))
        .collect::<Html>();

    html! {
        <div class="list-panel">
            <div class="list-panel-header">
                <h2>{"職員名單"}</h2>
                <div class="list-actions">
                    <button class="chip-add" onclick={link.callback(|_| Msg::AddRecord)}>{"新增"}</button>
                    <button class="chip-delete" onclick={link.callback(|_| Msg::DeleteRecord)}>{"刪除"}</button>
                    <button class="chip-revert" onclick={link.callback(|_| Msg::Revert)}>{"復原"}</button>
                </div>
            </div>
            <ul class="record-list">{ items }</ul>
        </div>
    }
}

fn build_list_item(
    component: &StaffEditorComponent,
    link: &Scope<StaffEditorComponent>,
    index: usize,
    record: &StaffRecord,
) -> Html {
    let selected = component.editor.selected_index() == Some(index);
    let onclick = link.callback(move |_| Msg::Select(index));
    let ondragstart =
        link.callback(move |_: DragEvent| Msg::DragStarted(StaffScope::Records, index));
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DroppedOn(StaffScope::Records, index)
    });
    let ondragend = link.callback(|_: DragEvent| Msg::DragEnded);

    html! {
        <li key={index} draggable="true" {ondragstart} {ondragover} {ondrop} {ondragend}>
            <div class="record-row">
                <span class="drag-handle">{"︙"}</span>
                <button
                    class={classes!("record-label", selected.then_some("selected"))}
                    {onclick}
                >
                    { helpers::record_label(record) }
                </button>
            </div>
        </li>
    }
}

fn build_field_panel(record: &StaffRecord, link: &Scope<StaffEditorComponent>) -> Html {
    let fields = PersonalField::ALL
        .iter()
        .map(|&field| {
            let value = record.personal_info.get(field).to_string();
            html! {
                <div class="field">
                    <label>{ helpers::field_label(field) }</label>
                    {
                        if field == PersonalField::Campus {
                            build_campus_select(&value, link)
                        } else {
                            build_text_input(field, value, link)
                        }
                    }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="field-grid">
            { fields }
            { build_responsibilities(record, link) }
        </div>
    }
}

fn build_text_input(
    field: PersonalField,
    value: String,
    link: &Scope<StaffEditorComponent>,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditPersonal(field, input.value())
    });
    let kind = if field == PersonalField::Email { "email" } else { "text" };
    html! { <input type={kind} {value} {oninput} /> }
}

fn build_campus_select(current: &str, link: &Scope<StaffEditorComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditPersonal(PersonalField::Campus, select.value())
    });
    let options = CAMPUSES
        .iter()
        .map(|&campus| {
            html! { <option value={campus} selected={campus == current}>{campus}</option> }
        })
        .collect::<Html>();
    html! { <select {onchange}>{ options }</select> }
}

fn build_responsibilities(record: &StaffRecord, link: &Scope<StaffEditorComponent>) -> Html {
    let rows = record
        .responsibilities
        .iter()
        .enumerate()
        .map(|(index, item)| build_responsibility_row(link, index, item))
        .collect::<Html>();

    html! {
        <div class="field wide">
            <label>{"職責"}</label>
            <div class="responsibility-list">{ rows }</div>
            <button class="btn-add-row" onclick={link.callback(|_| Msg::AddResponsibility)}>
                {"新增職責"}
            </button>
        </div>
    }
}

fn build_responsibility_row(
    link: &Scope<StaffEditorComponent>,
    index: usize,
    item: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditResponsibility(index, input.value())
    });
    let ondragstart =
        link.callback(move |_: DragEvent| Msg::DragStarted(StaffScope::Responsibilities, index));
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DroppedOn(StaffScope::Responsibilities, index)
    });
    let ondragend = link.callback(|_: DragEvent| Msg::DragEnded);
    let onremove = link.callback(move |_| Msg::RemoveResponsibility(index));

    html! {
        <div
            class="responsibility-row"
            key={index}
            draggable="true"
            {ondragstart}
            {ondragover}
            {ondrop}
            {ondragend}
        >
            <span class="row-number">{ format!("{}.", index + 1) }</span>
            <input type="text" value={item.to_string()} {oninput} />
            <button class="link-danger" onclick={onremove}>{"刪除"}</button>
        </div>
    }
}
