use crate::app::App;

mod api;
mod app;
mod browser;
mod components;
mod config;
mod logging;
mod routes;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
