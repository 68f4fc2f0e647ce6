//! Static lore pages
use serde::{Deserialize, Serialize};

use crate::ContentError;
use crate::markup::{Paragraph, parse_body};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LorePage {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl LorePage {
    /// Body split into paragraphs with inline spans resolved.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        parse_body(&self.content)
    }
}

/// Lore pages in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LoreBook(Vec<LorePage>);

impl LoreBook {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn new(pages: Vec<LorePage>) -> Self {
        Self(pages)
    }

    /// Load lore pages from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into lore pages.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let pages: Vec<LorePage> = serde_json::from_str(json)?;
        Ok(Self(pages))
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&LorePage> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LorePage> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Span;

    #[test]
    fn lore_book_parses_pages_in_order() {
        let json = r#"[
            {"id": 1, "title": "O Último Rancho", "content": "Primeiro.\n\n**Segundo**"},
            {"id": 2, "title": "A Maldição", "content": "Terceiro."}
        ]"#;
        let book = LoreBook::from_json(json).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.page(1).unwrap().title, "A Maldição");
        assert!(book.page(2).is_none());

        let paragraphs = book.page(0).unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].spans, vec![Span::Strong(String::from("Segundo"))]);
    }

    #[test]
    fn invalid_lore_json_is_an_error() {
        assert!(LoreBook::from_json(r#"{"id": 1}"#).is_err());
        assert!(LoreBook::empty().is_empty());
    }
}
