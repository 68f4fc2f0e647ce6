//! Screen state machine.
//!
//! Exactly one [`Screen`] is active. Character-scoped screens carry the
//! selected [`CharacterId`], so they cannot exist without a selection.
use serde::{Deserialize, Serialize};

use crate::characters::CharacterId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    #[default]
    Loading,
    Menu,
    Characters,
    Sheet { character: CharacterId },
    Inventory { character: CharacterId },
    Lore,
    Credits,
}

/// Destinations offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuTarget {
    Characters,
    Lore,
    Credits,
}

impl MenuTarget {
    pub const ALL: [Self; 3] = [Self::Characters, Self::Lore, Self::Credits];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Lore => "lore",
            Self::Credits => "credits",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    /// Loading finished.
    Start,
    Open(MenuTarget),
    Select(CharacterId),
    OpenInventory,
    Back,
}

impl Screen {
    #[must_use]
    pub const fn selected_character(&self) -> Option<&CharacterId> {
        match self {
            Self::Sheet { character } | Self::Inventory { character } => Some(character),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Menu => "menu",
            Self::Characters => "characters",
            Self::Sheet { .. } => "sheet",
            Self::Inventory { .. } => "inventory",
            Self::Lore => "lore",
            Self::Credits => "credits",
        }
    }

    /// Context-sensitive back transition.
    #[must_use]
    pub fn back(&self) -> Self {
        match self {
            Self::Loading | Self::Menu => self.clone(),
            Self::Characters | Self::Lore | Self::Credits => Self::Menu,
            Self::Sheet { .. } => Self::Characters,
            Self::Inventory { character } => Self::Sheet {
                character: character.clone(),
            },
        }
    }

    /// Total transition function. Events the current screen does not offer
    /// leave it unchanged.
    #[must_use]
    pub fn apply(&self, event: &NavEvent) -> Self {
        let next = match (self, event) {
            (Self::Loading, NavEvent::Start) => Some(Self::Menu),
            (Self::Menu, NavEvent::Open(target)) => Some(match target {
                MenuTarget::Characters => Self::Characters,
                MenuTarget::Lore => Self::Lore,
                MenuTarget::Credits => Self::Credits,
            }),
            (Self::Characters, NavEvent::Select(character)) => Some(Self::Sheet {
                character: character.clone(),
            }),
            (Self::Sheet { character }, NavEvent::OpenInventory) => Some(Self::Inventory {
                character: character.clone(),
            }),
            (_, NavEvent::Back) => Some(self.back()),
            _ => None,
        };
        next.unwrap_or_else(|| {
            log::debug!("ignoring {event:?} on {} screen", self.label());
            self.clone()
        })
    }
}

/// Thin controller over [`Screen`] exposing the named operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationController {
    screen: Screen,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub const fn selected_character(&self) -> Option<&CharacterId> {
        self.screen.selected_character()
    }

    /// Apply an event; returns whether the screen changed.
    pub fn dispatch(&mut self, event: &NavEvent) -> bool {
        let next = self.screen.apply(event);
        let changed = next != self.screen;
        self.screen = next;
        changed
    }

    pub fn start(&mut self) -> bool {
        self.dispatch(&NavEvent::Start)
    }

    pub fn navigate(&mut self, target: MenuTarget) -> bool {
        self.dispatch(&NavEvent::Open(target))
    }

    pub fn select_character(&mut self, character: CharacterId) -> bool {
        self.dispatch(&NavEvent::Select(character))
    }

    pub fn open_inventory(&mut self) -> bool {
        self.dispatch(&NavEvent::OpenInventory)
    }

    pub fn back(&mut self) -> bool {
        self.dispatch(&NavEvent::Back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vander() -> CharacterId {
        CharacterId::from("vander")
    }

    #[test]
    fn happy_path_walks_every_screen() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.screen(), &Screen::Loading);
        assert!(nav.start());
        assert_eq!(nav.screen(), &Screen::Menu);
        assert!(nav.navigate(MenuTarget::Characters));
        assert!(nav.select_character(vander()));
        assert_eq!(nav.selected_character(), Some(&vander()));
        assert!(nav.open_inventory());
        assert_eq!(
            nav.screen(),
            &Screen::Inventory {
                character: vander()
            }
        );
        assert!(nav.back());
        assert_eq!(
            nav.screen(),
            &Screen::Sheet {
                character: vander()
            }
        );
        assert!(nav.back());
        assert_eq!(nav.screen(), &Screen::Characters);
        assert!(nav.selected_character().is_none());
        assert!(nav.back());
        assert_eq!(nav.screen(), &Screen::Menu);
    }

    #[test]
    fn lore_and_credits_return_to_menu() {
        for target in [MenuTarget::Lore, MenuTarget::Credits] {
            let screen = Screen::Menu.apply(&NavEvent::Open(target));
            assert_ne!(screen, Screen::Menu);
            assert_eq!(screen.back(), Screen::Menu);
        }
    }

    #[test]
    fn unavailable_events_are_ignored() {
        let mut nav = NavigationController::new();
        assert!(!nav.open_inventory());
        assert!(!nav.navigate(MenuTarget::Lore));
        assert!(!nav.select_character(vander()));
        assert!(!nav.back());
        assert_eq!(nav.screen(), &Screen::Loading);

        nav.start();
        assert!(!nav.start());
        assert!(!nav.open_inventory());
        assert!(!nav.back());
        assert_eq!(nav.screen(), &Screen::Menu);

        let lore = Screen::Lore;
        assert_eq!(lore.apply(&NavEvent::Select(vander())), Screen::Lore);
        let inventory = Screen::Inventory {
            character: vander(),
        };
        assert_eq!(inventory.apply(&NavEvent::OpenInventory), inventory);
    }

    #[test]
    fn only_scoped_screens_expose_a_selection() {
        let screens = [
            Screen::Loading,
            Screen::Menu,
            Screen::Characters,
            Screen::Lore,
            Screen::Credits,
        ];
        for screen in screens {
            assert!(screen.selected_character().is_none(), "{}", screen.label());
        }
        assert!(
            Screen::Sheet {
                character: vander()
            }
            .selected_character()
            .is_some()
        );
    }
}
