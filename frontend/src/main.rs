use crate::app::App;

mod app;
mod components;
mod section;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
