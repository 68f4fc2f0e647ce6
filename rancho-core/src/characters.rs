//! Playable characters ("Os Onze Marcados")
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::ContentError;

/// Stable identifier of a character; also namespaces its storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: i32,
}

impl Attribute {
    /// Signed label as printed on the sheet (`+2`, `+0`, `-1`).
    #[must_use]
    pub fn signed_value(&self) -> String {
        format!("{:+}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: String,
}

/// Alternate form unlocked while Heroic Will is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeroicWill {
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub effects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub title: String,
    pub emoji: String,
    pub life: u32,
    pub defense: u32,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub heroic_will: HeroicWill,
}

impl Character {
    /// First word of the display name, used on the carousel select button.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Ability list for the current Heroic Will state.
    #[must_use]
    pub fn abilities_for(&self, heroic_will_active: bool) -> &[Ability] {
        if heroic_will_active {
            &self.heroic_will.abilities
        } else {
            &self.abilities
        }
    }
}

/// Ordered, immutable list of playable characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CharacterRoster(Vec<Character>);

impl CharacterRoster {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a roster, rejecting empty or duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyId`] or [`ContentError::DuplicateCharacter`].
    pub fn new(characters: Vec<Character>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for (index, character) in characters.iter().enumerate() {
            if character.id.as_str().trim().is_empty() {
                return Err(ContentError::EmptyId { index });
            }
            if !seen.insert(character.id.clone()) {
                return Err(ContentError::DuplicateCharacter(character.id.clone()));
            }
        }
        Ok(Self(characters))
    }

    /// Load the roster from a JSON array of characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or the ids are invalid.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        Self::new(characters)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.0.get(index)
    }

    #[must_use]
    pub fn get_by_id(&self, id: &CharacterId) -> Option<&Character> {
        self.0.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &CharacterId) -> Option<usize> {
        self.0.iter().position(|c| &c.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
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

impl<'a> IntoIterator for &'a CharacterRoster {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::gunslinger;
    use super::*;

    #[test]
    fn roster_json_parsing_keeps_order() {
        let json = r#"[
            {"id": "vander", "name": "Vander Irons", "title": "The Night Judge", "emoji": "⚖️",
             "life": 30, "defense": 14,
             "attributes": [{"name": "Pontaria", "value": 4}],
             "abilities": [{"name": "Sentença", "description": "Atira."}],
             "weapons": [{"name": "Colt", "type": "Revólver", "damage": "1d10"}],
             "story": "Juiz.",
             "heroic_will": {"name": "Juízo", "abilities": [], "effects": ["+10 Vida"]}},
            {"id": "ada", "name": "Ada", "title": "A Curandeira", "emoji": "🌿",
             "life": 22, "defense": 11}
        ]"#;

        let roster = CharacterRoster::from_json(json).unwrap();
        assert_eq!(roster.len(), 2);
        let ids: Vec<_> = roster.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["vander", "ada"]);

        let vander = roster.get_by_id(&CharacterId::from("vander")).unwrap();
        assert_eq!(vander.weapons[0].kind, "Revólver");
        assert_eq!(vander.heroic_will.effects.len(), 1);

        let ada = roster.get(1).unwrap();
        assert!(ada.abilities.is_empty());
        assert!(ada.heroic_will.name.is_empty());
        assert_eq!(roster.position(&CharacterId::from("ada")), Some(1));
    }

    #[test]
    fn roster_rejects_duplicate_and_empty_ids() {
        let dup = CharacterRoster::new(vec![gunslinger("a", 10, 10), gunslinger("a", 12, 10)]);
        assert!(matches!(dup, Err(ContentError::DuplicateCharacter(id)) if id.as_str() == "a"));

        let empty = CharacterRoster::new(vec![gunslinger("a", 10, 10), gunslinger(" ", 10, 10)]);
        assert!(matches!(empty, Err(ContentError::EmptyId { index: 1 })));

        assert!(matches!(
            CharacterRoster::from_json("{not json"),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn empty_roster_helpers_are_consistent() {
        let empty = CharacterRoster::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.get(0).is_none());
        assert_eq!((&empty).into_iter().count(), 0);
    }

    #[test]
    fn character_helpers_format_for_display() {
        let character = gunslinger("vander", 30, 14);
        assert_eq!(character.first_name(), "vander");
        assert_eq!(character.attributes[0].signed_value(), "+3");
        assert_eq!(character.attributes[1].signed_value(), "-1");
        let zero = Attribute {
            name: String::from("Sorte"),
            value: 0,
        };
        assert_eq!(zero.signed_value(), "+0");
        assert_eq!(character.abilities_for(false).len(), 1);
        assert_eq!(character.abilities_for(true).len(), 2);
    }
}
