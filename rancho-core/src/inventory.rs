//! Per-character inventory list and the single-draft editor that mutates it.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::constants::DEFAULT_ITEM_QUANTITY;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random v4 UUID in its hyphen-less form.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
}

impl InventoryItem {
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("item name is required")]
    NameRequired,
    #[error("no inventory item with id {0}")]
    UnknownItem(ItemId),
}

/// Confirmation surfaced after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryNotice {
    Added(String),
    Updated(String),
    Removed(String),
}

impl InventoryNotice {
    #[must_use]
    pub fn item_name(&self) -> &str {
        match self {
            Self::Added(name) | Self::Updated(name) | Self::Removed(name) => name,
        }
    }
}

/// Ordered inventory of one character. Ids are unique within the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Inventory(Vec<InventoryItem>);

impl Inventory {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryItem> {
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

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Generate an id not already used in this list.
    #[must_use]
    pub fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append a new record built from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NameRequired`] for a blank name.
    pub fn add(&mut self, draft: &ItemDraft) -> Result<&InventoryItem, InventoryError> {
        let name = draft.validated_name()?;
        let id = self.fresh_id();
        self.0.push(InventoryItem {
            id,
            name,
            description: draft.description.clone(),
            quantity: draft.quantity.max(DEFAULT_ITEM_QUANTITY),
        });
        let index = self.0.len() - 1;
        Ok(&self.0[index])
    }

    /// Replace the fields of the record with `id`, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NameRequired`] for a blank name and
    /// [`InventoryError::UnknownItem`] when no record has that id.
    pub fn update(&mut self, id: &ItemId, draft: &ItemDraft) -> Result<&InventoryItem, InventoryError> {
        let name = draft.validated_name()?;
        let item = self
            .0
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| InventoryError::UnknownItem(id.clone()))?;
        item.name = name;
        item.description.clone_from(&draft.description);
        item.quantity = draft.quantity.max(DEFAULT_ITEM_QUANTITY);
        Ok(item)
    }

    /// Remove the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownItem`] when no record has that id.
    pub fn remove(&mut self, id: &ItemId) -> Result<InventoryItem, InventoryError> {
        let index = self
            .0
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| InventoryError::UnknownItem(id.clone()))?;
        Ok(self.0.remove(index))
    }

    pub(crate) fn push_unchecked(&mut self, item: InventoryItem) {
        self.0.push(item);
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = std::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse a quantity field. Anything that is not a positive integer becomes 1.
#[must_use]
pub fn parse_quantity(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity > 0)
        .unwrap_or(DEFAULT_ITEM_QUANTITY)
}

/// Form contents shared between add and edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            quantity: DEFAULT_ITEM_QUANTITY,
        }
    }
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            quantity,
        }
    }

    fn validated_name(&self) -> Result<String, InventoryError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            Err(InventoryError::NameRequired)
        } else {
            Ok(trimmed.to_string())
        }
    }
}

impl From<&InventoryItem> for ItemDraft {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(ItemId),
}

/// Inventory plus the open/closed form and its draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryEditor {
    items: Inventory,
    draft: ItemDraft,
    mode: FormMode,
}

impl InventoryEditor {
    #[must_use]
    pub fn new(items: Inventory) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn items(&self) -> &Inventory {
        &self.items
    }

    #[must_use]
    pub const fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    #[must_use]
    pub const fn editing(&self) -> Option<&ItemId> {
        match &self.mode {
            FormMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn open_add(&mut self) {
        self.draft = ItemDraft::default();
        self.mode = FormMode::Adding;
    }

    /// Seed the draft from an existing record and remember its id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownItem`] when no record has that id.
    pub fn start_edit(&mut self, id: &ItemId) -> Result<(), InventoryError> {
        let item = self
            .items
            .get(id)
            .ok_or_else(|| InventoryError::UnknownItem(id.clone()))?;
        self.draft = ItemDraft::from(item);
        self.mode = FormMode::Editing(id.clone());
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.draft = ItemDraft::default();
        self.mode = FormMode::Closed;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.draft.quantity = quantity.max(DEFAULT_ITEM_QUANTITY);
    }

    pub fn set_quantity_input(&mut self, input: &str) {
        self.draft.quantity = parse_quantity(input);
    }

    /// Apply the draft. Editing replaces the target record; any other mode
    /// appends a new one. On failure the form and draft are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NameRequired`] for a blank name and
    /// [`InventoryError::UnknownItem`] when the edit target has disappeared.
    pub fn submit(&mut self) -> Result<InventoryNotice, InventoryError> {
        let notice = match &self.mode {
            FormMode::Editing(id) => {
                let id = id.clone();
                InventoryNotice::Updated(self.items.update(&id, &self.draft)?.name.clone())
            }
            FormMode::Adding | FormMode::Closed => {
                InventoryNotice::Added(self.items.add(&self.draft)?.name.clone())
            }
        };
        self.cancel();
        Ok(notice)
    }

    /// Remove a record. Deleting the record being edited closes the form.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::UnknownItem`] when no record has that id.
    pub fn delete(&mut self, id: &ItemId) -> Result<InventoryNotice, InventoryError> {
        let removed = self.items.remove(id)?;
        if self.editing() == Some(id) {
            self.cancel();
        }
        Ok(InventoryNotice::Removed(removed.name))
    }

    #[must_use]
    pub fn into_items(self) -> Inventory {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(editor: &mut InventoryEditor, name: &str, quantity: &str) -> InventoryNotice {
        editor.open_add();
        editor.set_name(name);
        editor.set_quantity_input(quantity);
        editor.submit().unwrap()
    }

    #[test]
    fn quantity_input_defaults_to_one() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("-4"), 1);
    }

    #[test]
    fn blank_name_is_rejected_without_mutation() {
        let mut editor = InventoryEditor::default();
        editor.open_add();
        editor.set_name("   ");
        editor.set_description("vazio");
        assert_eq!(editor.submit(), Err(InventoryError::NameRequired));
        assert!(editor.items().is_empty());
        assert!(editor.is_form_open());
        assert_eq!(editor.draft().description, "vazio");
    }

    #[test]
    fn add_then_edit_keeps_the_id() {
        let mut editor = InventoryEditor::default();
        let notice = add(&mut editor, "  Rope ", "3");
        assert_eq!(notice, InventoryNotice::Added(String::from("Rope")));
        assert!(!editor.is_form_open());
        let id = editor.items().items()[0].id.clone();

        editor.start_edit(&id).unwrap();
        assert_eq!(editor.draft().quantity, 3);
        assert_eq!(editor.editing(), Some(&id));
        editor.set_quantity_input("5");
        let notice = editor.submit().unwrap();
        assert_eq!(notice.item_name(), "Rope");

        let items = editor.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items.items()[0].id, id);
        assert_eq!(items.items()[0].quantity, 5);
        assert_eq!(editor.draft(), &ItemDraft::default());
    }

    #[test]
    fn deleting_the_only_item_empties_the_list() {
        let mut editor = InventoryEditor::default();
        add(&mut editor, "Cantil", "1");
        let id = editor.items().items()[0].id.clone();
        editor.start_edit(&id).unwrap();
        let notice = editor.delete(&id).unwrap();
        assert_eq!(notice, InventoryNotice::Removed(String::from("Cantil")));
        assert!(editor.items().is_empty());
        assert!(!editor.is_form_open());
        assert_eq!(
            editor.delete(&id),
            Err(InventoryError::UnknownItem(id.clone()))
        );
        assert_eq!(editor.start_edit(&id), Err(InventoryError::UnknownItem(id)));
    }

    #[test]
    fn editor_hands_back_its_items() {
        let mut items = Inventory::empty();
        items.add(&ItemDraft::new("Lampião", "", 1)).unwrap();
        let mut editor = InventoryEditor::new(items);
        add(&mut editor, "Fósforos", "12");
        let items = editor.into_items();
        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Lampião", "Fósforos"]);
        assert_eq!(items.items()[1].quantity, 12);
    }

    #[test]
    fn cancel_clears_draft_and_target() {
        let mut editor = InventoryEditor::default();
        add(&mut editor, "Dinamite", "2");
        let id = editor.items().items()[0].id.clone();
        editor.start_edit(&id).unwrap();
        editor.set_name("Outro nome");
        editor.cancel();
        assert_eq!(editor.mode(), &FormMode::Closed);
        assert_eq!(editor.items().items()[0].name, "Dinamite");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut editor = InventoryEditor::default();
        for n in 0..50 {
            add(&mut editor, &format!("Bala {n}"), "1");
        }
        let mut ids: Vec<_> = editor.items().iter().map(|item| item.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert_eq!(ids[0].as_str().len(), 32);
    }
}
