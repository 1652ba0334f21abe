use log::info;
use yew::prelude::*;

mod config;
mod theme {
    pub mod controller;
    #[cfg(test)]
    pub mod fakes;
    pub mod mode;
    pub mod palette;
    pub mod provider;
    pub mod storage;
    pub mod system;

    pub use controller::ThemeController;
    pub use mode::ColorMode;
}
mod scroll {
    pub mod activator;
    pub mod dom;
    pub mod hooks;
    pub mod listener;
}
mod components {
    pub mod nav;
    pub mod scroll_top;
}
mod pages {
    pub mod content;
    pub mod home;
    pub mod sections;
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use pages::home::Home;
use theme::provider::ThemeProvider;

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <Home />
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
