//! Regulation / document-download editor: root module wiring the Yew
//! `Component` implementation with submodules for state, update logic, view
//! rendering, and helpers.
//!
//! Unlike the staff editor this variant keeps a one-slot recall of the most
//! recently deleted form, consumed by the revert action before it ever falls
//! back to the full snapshot. That asymmetry is intentional and lives in
//! `common::editor::regulation`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegulationEditorProps;
pub use state::RegulationEditorComponent;

impl Component for RegulationEditorComponent {
    type Message = Msg;
    type Properties = RegulationEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        RegulationEditorComponent::new(ctx.props().section.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().section != old_props.section {
            *self = RegulationEditorComponent::new(ctx.props().section.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
