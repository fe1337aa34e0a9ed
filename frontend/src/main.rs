use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod reveal;
mod components {
    pub mod footer;
    pub mod navbar;
    pub mod reveal;
    pub mod toast;
}
mod contact {
    pub mod form;
    pub mod intake;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod features;
    pub mod hero;
    pub mod landing;
    pub mod pricing;
    pub mod testimonials;
}

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:brand")]
    Brand { brand: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering default brand {}", config::DEFAULT_BRAND);
            html! { <Landing brand={config::DEFAULT_BRAND.to_string()} /> }
        },
        Route::Brand { brand } => {
            info!("Rendering brand {}", brand);
            html! { <Landing brand={brand} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <div class="content-error" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
