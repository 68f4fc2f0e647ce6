//! Minimal inline markup used by lore bodies.
//!
//! Paragraphs are separated by blank lines. Inside a paragraph `**text**`
//! becomes a [`Span::Strong`] and `*text*` a [`Span::Emphasis`]; anything
//! that does not close on the same line renders as literal text.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n[ \t]*\r?\n\s*").expect("valid paragraph break pattern")
});

static INLINE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^*\n]+)\*\*|\*([^*\n]+)\*").expect("valid inline span pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    Plain(String),
    /// Doubled marker; rendered emphasized/colored.
    Strong(String),
    /// Single marker; rendered de-emphasized.
    Emphasis(String),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

#[must_use]
pub fn parse_body(body: &str) -> Vec<Paragraph> {
    PARAGRAPH_BREAK
        .split(body)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_paragraph)
        .collect()
}

#[must_use]
pub fn parse_paragraph(text: &str) -> Paragraph {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for caps in INLINE_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_plain(&mut spans, &text[cursor..whole.start()]);
        if let Some(strong) = caps.get(1) {
            spans.push(Span::Strong(strong.as_str().to_string()));
        } else if let Some(emphasis) = caps.get(2) {
            spans.push(Span::Emphasis(emphasis.as_str().to_string()));
        }
        cursor = whole.end();
    }
    push_plain(&mut spans, &text[cursor..]);
    Paragraph { spans }
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            spans.push(Span::Plain(line.to_string()));
        }
        if lines.peek().is_some() {
            spans.push(Span::LineBreak);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Span {
        Span::Plain(s.to_string())
    }

    #[test]
    fn splits_on_blank_lines_and_drops_empty_paragraphs() {
        let body = "Primeiro.\n\nSegundo.\n   \n\n\nTerceiro.\n\n";
        let paragraphs = parse_body(body);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[2].spans, vec![plain("Terceiro.")]);
        assert!(parse_body("\n\n  \n").is_empty());
    }

    #[test]
    fn recognizes_strong_and_emphasis_spans() {
        let p = parse_paragraph("O **Último Rancho** não é *apenas* um nome");
        assert_eq!(
            p.spans,
            vec![
                plain("O "),
                Span::Strong(String::from("Último Rancho")),
                plain(" não é "),
                Span::Emphasis(String::from("apenas")),
                plain(" um nome"),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(
            parse_paragraph("5 * 3 = 15").spans,
            vec![plain("5 * 3 = 15")]
        );
        assert_eq!(parse_paragraph("**aberto").spans, vec![plain("**aberto")]);
        assert_eq!(parse_paragraph("****").spans, vec![plain("****")]);
    }

    #[test]
    fn single_line_breaks_are_kept_inside_a_paragraph() {
        let p = parse_paragraph("**Esta é sua última missão.**\n**Este é O Último Rancho.**");
        assert_eq!(
            p.spans,
            vec![
                Span::Strong(String::from("Esta é sua última missão.")),
                Span::LineBreak,
                Span::Strong(String::from("Este é O Último Rancho.")),
            ]
        );
    }

    #[test]
    fn spans_do_not_swallow_line_breaks() {
        assert_eq!(
            parse_paragraph("*poeira\nvento*").spans,
            vec![plain("*poeira"), Span::LineBreak, plain("vento*")]
        );
        assert_eq!(
            parse_paragraph("**xerife\nmorto**\n*viva*").spans,
            vec![
                plain("**xerife"),
                Span::LineBreak,
                plain("morto**"),
                Span::LineBreak,
                Span::Emphasis(String::from("viva")),
            ]
        );
    }

    #[test]
    fn quoted_emphasis_followed_by_attribution() {
        let body = "*\"Não corra.\"*\n\n— **Vander \"The Night Judge\" Irons**";
        let paragraphs = parse_body(body);
        assert_eq!(
            paragraphs[0].spans,
            vec![Span::Emphasis(String::from("\"Não corra.\""))]
        );
        assert_eq!(
            paragraphs[1].spans,
            vec![
                plain("— "),
                Span::Strong(String::from("Vander \"The Night Judge\" Irons")),
            ]
        );
    }
}
