use crate::app::App;

mod app;
mod components;
mod exporter;

fn main() {
    yew::Renderer::<App>::new().render();
}
