use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub count: usize,
    pub current: usize,
    pub on_select: Callback<usize>,
}

/// Row of indicator dots; clicking one jumps to that index.
#[function_component(PageDots)]
pub fn page_dots(p: &Props) -> Html {
    html! {
        <div class="page-dots" role="tablist">
            { for (0..p.count).map(|index| {
                let on_select = p.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                let active = index == p.current;
                let n = (index + 1).to_string();
                let mut args = BTreeMap::new();
                args.insert("n", n.as_str());
                let label = crate::i18n::tr("common.go_to", Some(&args));
                html! {
                    <button
                        role="tab"
                        class={classes!("dot", active.then_some("dot-active"))}
                        aria-selected={active.to_string()}
                        aria-label={label}
                        data-index={index.to_string()}
                        {onclick}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn marks_only_the_current_dot() {
        let props = Props {
            count: 3,
            current: 1,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PageDots>::with_props(props).render());
        assert_eq!(html.matches("data-index=").count(), 3);
        assert_eq!(html.matches("dot-active").count(), 1);
        assert!(html.contains("aria-selected=\"true\""));
    }
}
