mod auth;
mod billing;
mod config;
mod dashboard;
mod export;
mod landing;
mod models;
mod results;
mod router;
mod search;
mod storage;
mod utils;

use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{is_debug_mode, APP_NAME, BACKEND_URL};
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            &*APP_NAME,
            &*BACKEND_URL,
            is_debug_mode()
        )
        .into(),
    );
}
