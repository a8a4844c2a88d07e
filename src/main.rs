use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod evasive;
mod hearts;
mod page_state;
mod pages {
    pub mod valentine;
}
mod components {
    pub mod floating_hearts;
    pub mod runaway_button;
}

use pages::valentine::ValentinePage;


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
            info!("Rendering Valentine page");
            html! { <ValentinePage /> }
        },
        Route::NotFound => {
            // Every link someone shares should still land on the card
            info!("Unknown path, rendering Valentine page");
            html! { <ValentinePage /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
