//! View rendering for the regulation editor: action bar, the reorderable
//! form list, and the field panel with the dedicated contact row.
//!
//! The contact row always edits the first contact — a form that arrived
//! without contacts shows blank inputs and grows its first contact on the
//! first keystroke; any further contacts are preserved but never rendered.

use common::model::regulation::{ContactField, FormField, FormRecord};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::state::RegulationEditorComponent;

pub fn view(component: &RegulationEditorComponent, ctx: &Context<RegulationEditorComponent>) -> Html {
    let link = ctx.link();
    html! {
        <>
            { build_action_bar(component, link) }
            <div class="editor-layout">
                { build_list_panel(component, link) }
                <div class="field-panel">
                    {
                        match component.editor.selected_form() {
                            Some(form) => build_field_panel(form, link),
                            None => html! { <p class="empty-hint">{"請先從左側選擇文件進行編輯。"}</p> },
                        }
                    }
                </div>
            </div>
        </>
    }
}

fn build_action_bar(
    component: &RegulationEditorComponent,
    link: &Scope<RegulationEditorComponent>,
) -> Html {
    html! {
        <div class="action-bar">
            <button class="btn-primary" onclick={link.callback(|_| Msg::Download)}>{"下載 JSON"}</button>
            <button class="btn-secondary" onclick={link.callback(|_| Msg::ExportToDocPage)}>{"匯出文件頁"}</button>
            {
                if component.is_dirty() {
                    html! { <span class="dirty-dot" title="尚未下載的變更" /> }
                } else {
                    html! {}
                }
            }
            <div class="mode-note">{"目前模式：法規 / 文檔下載"}</div>
        </div>
    }
}

fn build_list_panel(
    component: &RegulationEditorComponent,
    link: &Scope<RegulationEditorComponent>,
) -> Html {
    let items = component
        .editor
        .forms()
        .iter()
        .enumerate()
        .map(|(index, form)| build_list_item(component, link, index, form))
        .collect::<Html>();

    html! {
        <div class="list-panel">
            <div class="list-panel-header">
                <h2>{"文件列表"}</h2>
                <div class="list-actions">
                    <button class="chip-add" onclick={link.callback(|_| Msg::AddForm)}>{"新增"}</button>
                    <button class="chip-delete" onclick={link.callback(|_| Msg::DeleteForm)}>{"刪除"}</button>
                    <button class="chip-revert" onclick={link.callback(|_| Msg::Revert)}>{"復原"}</button>
                </div>
            </div>
            <ul class="record-list">{ items }</ul>
        </div>
    }
}

fn build_list_item(
    component: &RegulationEditorComponent,
    link: &Scope<RegulationEditorComponent>,
    index: usize,
    form: &FormRecord,
) -> Html {
    let selected = component.editor.selected_index() == Some(index);
    let onclick = link.callback(move |_| Msg::Select(index));
    let ondragstart = link.callback(move |_: DragEvent| Msg::DragStarted(index));
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DroppedOn(index)
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
                    { helpers::form_label(form) }
                </button>
            </div>
        </li>
    }
}

fn build_field_panel(form: &FormRecord, link: &Scope<RegulationEditorComponent>) -> Html {
    let fields = FormField::ALL
        .iter()
        .map(|&field| build_scalar_field(form, field, link))
        .collect::<Html>();

    html! {
        <div class="field-stack">
            { fields }
            { build_contact_row(form, link) }
        </div>
    }
}

fn build_scalar_field(
    form: &FormRecord,
    field: FormField,
    link: &Scope<RegulationEditorComponent>,
) -> Html {
    let value = form.get(field).to_string();
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(field, input.value())
    });
    let is_date = field == FormField::LastUpdate;
    let kind = if is_date { "date" } else { "text" };

    html! {
        <div class={classes!("field", is_date.then_some("half"))}>
            <label>{ helpers::field_label(field) }</label>
            <input type={kind} {value} {oninput} />
        </div>
    }
}

fn build_contact_row(form: &FormRecord, link: &Scope<RegulationEditorComponent>) -> Html {
    let contact = form.contacts.first().cloned().unwrap_or_default();
    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditContact(ContactField::Name, input.value())
    });
    let on_extension = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditContact(ContactField::Extension, input.value())
    });

    html! {
        <div class="field half">
            <label>{"聯絡人清單"}</label>
            <div class="contact-row">
                <input
                    type="text"
                    placeholder="姓名"
                    value={contact.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="text"
                    class="extension"
                    placeholder="分機"
                    value={contact.extension.clone()}
                    oninput={on_extension}
                />
            </div>
        </div>
    }
}
