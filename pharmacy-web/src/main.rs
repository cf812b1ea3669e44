mod api;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod initializer;
mod logging;
mod models;
mod pages;
mod routes;
mod services;
mod session;
mod shell;
mod storage;
mod transport;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod api_test;

use app::App;
use config::FrontendConfig;
use tracing::info;
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(StorefrontRoot)]
fn storefront_root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    logging::install_panic_hook();
    logging::init(&FrontendConfig::new().log_level);

    info!("Starting pharmacy storefront");

    Renderer::<StorefrontRoot>::new().render();
}
