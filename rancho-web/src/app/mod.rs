use yew::prelude::*;

pub mod state;
pub mod view;

/// Root component: one full-screen view at a time.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    view::render_app(&app_state)
}
