use yew::prelude::*;

use crate::hooks::use_timeout;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub destructive: bool,
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Transient notice. Give it a fresh `key` per notice so the dismissal timer
/// restarts.
#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    use_timeout(p.on_dismiss.clone(), p.duration_ms);

    let onclick = {
        let on_dismiss = p.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let role = if p.destructive { "alert" } else { "status" };

    html! {
        <div class={classes!("toast", p.destructive.then_some("toast-destructive"))} {role} data-testid="toast">
            <div class="toast-body">
                <p class="toast-title">{ p.title.clone() }</p>
                <p class="toast-description">{ p.description.clone() }</p>
            </div>
            <button class="toast-close" aria-label={crate::i18n::t("inventory.dismiss")} {onclick}>{ "×" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn destructive_toast_is_an_alert() {
        let props = Props {
            title: AttrValue::from("Nome obrigatório"),
            description: AttrValue::from("Por favor, insira um nome para o item."),
            destructive: true,
            duration_ms: 3000,
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("toast-destructive"));
        assert!(html.contains("Nome obrigatório"));
    }
}
