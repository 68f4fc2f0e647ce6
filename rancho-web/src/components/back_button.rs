use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub on_back: Callback<()>,
}

#[function_component(BackButton)]
pub fn back_button(p: &Props) -> Html {
    let onclick = {
        let on_back = p.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let label = p
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from(crate::i18n::t("common.back")));
    html! {
        <button class="btn-ghost back-btn" data-testid="back" {onclick}>
            <span aria-hidden="true">{ "← " }</span>
            { label }
        </button>
    }
}
