mod handlers;
mod screens;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = screens::render_main_view(state, &handlers);

    html! {
        <main id="main" role="main" class="app-root" data-screen={state.nav.screen().label()}>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite" role="status"></div>
            { main_view }
        </main>
    }
}
