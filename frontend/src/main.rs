use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod error;
mod reveal;
mod components {
    pub mod fade_in;
    pub mod icons;
    pub mod nav;
    pub mod theme;
}
mod sections {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod metrics;
    pub mod news;
    pub mod portfolio;
    pub mod process;
    pub mod retail;
    pub mod stats;
    pub mod sustainability;
}
mod pages {
    pub mod landing;
}

use components::{nav::Navbar, theme::Theme};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Theme />
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logging is best effort, the page renders either way
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
