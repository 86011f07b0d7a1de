use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod proposal {
    pub mod controller;
    pub mod scene;
    pub mod state;
    pub mod timer;
}
mod components {
    pub mod floating_hearts;
    pub mod gallery;
    pub mod proposal_widget;
}
mod pages {
    pub mod proposal_page;
}

use config::PageConfig;
use pages::proposal_page::ProposalPage;

#[function_component]
fn App() -> Html {
    let config = use_state(|| Rc::new(PageConfig::load_or_default()));

    html! {
        <ProposalPage config={(*config).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
