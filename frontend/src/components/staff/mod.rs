//! Staff directory editor: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! The component owns the working copy of the loaded array through
//! `common::editor::staff::StaffEditor`; the parent only supplies the
//! freshly classified records. A different file arriving through the props
//! resets everything — selection, snapshot, saved badge, drag state.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::StaffEditorProps;
pub use state::StaffEditorComponent;

impl Component for StaffEditorComponent {
    type Message = Msg;
    type Properties = StaffEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        StaffEditorComponent::new(ctx.props().records.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // A new file replaces the document wholesale; transient editor state
        // does not survive it.
        if ctx.props().records != old_props.records {
            *self = StaffEditorComponent::new(ctx.props().records.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
