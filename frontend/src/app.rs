//! Root component: the drop/browse zone, document classification, and the
//! switch between the two editor modes.
//!
//! File reads are asynchronous; the chosen file's name travels with the read
//! so name and content land in state together, and the last completed read
//! wins. A failed parse or an unrecognized shape clears every trace of the
//! previous document — mode, selection, and the loaded file name — before
//! the error banner is shown.

use gloo_file::futures::read_as_text;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use common::load::classify;
use common::model::Document;

use crate::components::regulation::RegulationEditorComponent;
use crate::components::staff::StaffEditorComponent;

/// The single user-visible error message for any bad file.
pub const FORMAT_ERROR_MESSAGE: &str = "載入的 JSON 格式錯誤，請檢查檔案內容。";

pub struct App {
    document: Option<Document>,
    file_name: Option<String>,
    error: Option<String>,
    /// Bumped per successful load; keys the editor component so a new file
    /// remounts it with fresh transient state.
    load_seq: usize,
    file_input_ref: NodeRef,
}

pub enum Msg {
    OpenFilePicker,
    FileChosen(Option<web_sys::File>),
    ContentRead { file_name: String, text: String },
    ReadFailed,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            document: None,
            file_name: None,
            error: None,
            load_seq: 0,
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenFilePicker => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileChosen(Some(file)) => {
                let file_name = file.name();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match read_as_text(&gloo_file::File::from(file)).await {
                        Ok(text) => link.send_message(Msg::ContentRead { file_name, text }),
                        Err(err) => {
                            gloo_console::error!(format!("讀取檔案失敗: {err}"));
                            link.send_message(Msg::ReadFailed);
                        }
                    }
                });
                false
            }
            Msg::FileChosen(None) => false,
            Msg::ContentRead { file_name, text } => {
                match classify(&text) {
                    Ok(document) => {
                        self.document = Some(document);
                        self.file_name = Some(file_name);
                        self.error = None;
                        self.load_seq += 1;
                    }
                    Err(err) => {
                        gloo_console::error!(format!("{err}"));
                        self.clear_to_error();
                    }
                }
                true
            }
            Msg::ReadFailed => {
                self.clear_to_error();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class="app-shell">
                <h1>{"JSON 編輯器"}</h1>
                { self.build_drop_zone(ctx.link()) }
                { self.build_error_banner() }
                { self.build_mode_banner() }
                { self.build_editor() }
            </main>
        }
    }
}

impl App {
    fn clear_to_error(&mut self) {
        self.document = None;
        self.file_name = None;
        self.error = Some(FORMAT_ERROR_MESSAGE.to_string());
    }

    fn build_drop_zone(&self, link: &Scope<App>) -> Html {
        let ondrop = link.callback(|e: DragEvent| {
            e.prevent_default();
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            Msg::FileChosen(file)
        });
        let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
        let onclick = link.callback(|_| Msg::OpenFilePicker);
        let onchange = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileChosen(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <div class="drop-zone" {ondrop} {ondragover} {onclick}>
                {
                    if let Some(name) = &self.file_name {
                        html! { <p>{"📄 目前已載入："}<strong>{name.clone()}</strong>{"（點擊此區可重新載入）"}</p> }
                    } else {
                        html! { <p>{"📂 拖曳 JSON 檔案至此區，或點擊選擇檔案"}</p> }
                    }
                }
                <input
                    type="file"
                    accept="application/json"
                    ref={self.file_input_ref.clone()}
                    {onchange}
                    style="display: none;"
                />
            </div>
        }
    }

    fn build_error_banner(&self) -> Html {
        match &self.error {
            Some(message) => html! { <div class="error-banner">{message.clone()}</div> },
            None => html! {},
        }
    }

    fn build_mode_banner(&self) -> Html {
        let Some(document) = &self.document else {
            return html! {};
        };
        let mode = match document {
            Document::Staff(_) => "人員執掌",
            Document::Regulation(_) => "法規 / 文檔下載",
        };
        html! {
            <div class="mode-banner">{"🔧 目前模式："}<strong>{mode}</strong></div>
        }
    }

    fn build_editor(&self) -> Html {
        match &self.document {
            Some(Document::Staff(records)) => html! {
                <StaffEditorComponent
                    key={self.load_seq}
                    records={records.clone()}
                    file_name={self.file_name.clone()}
                />
            },
            Some(Document::Regulation(section)) => html! {
                <RegulationEditorComponent
                    key={self.load_seq}
                    section={section.clone()}
                    file_name={self.file_name.clone()}
                />
            },
            None => html! {},
        }
    }
}
