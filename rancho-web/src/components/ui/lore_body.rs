use rancho_core::{Paragraph, Span};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub paragraphs: Vec<Paragraph>,
}

fn render_span(span: &Span) -> Html {
    match span {
        Span::Plain(text) => html! { { text.clone() } },
        Span::Strong(text) => html! { <strong class="lore-strong">{ text.clone() }</strong> },
        Span::Emphasis(text) => html! { <em class="lore-emphasis">{ text.clone() }</em> },
        Span::LineBreak => html! { <br /> },
    }
}

#[function_component(LoreBody)]
pub fn lore_body(p: &Props) -> Html {
    html! {
        <div class="lore-body">
            { for p.paragraphs.iter().map(|para| html! {
                <p class="lore-paragraph">{ for para.spans.iter().map(render_span) }</p>
            }) }
        </div>
    }
}
