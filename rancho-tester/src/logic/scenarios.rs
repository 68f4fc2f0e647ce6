//! Property scenarios. Each check draws everything it needs from the
//! iteration RNG, so a failing seed replays exactly.
use anyhow::{Context, Result, bail, ensure};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rancho_core::storage::{inventory_key, quarantine_key};
use rancho_core::{
    Carousel, Character, CharacterId, CompanionStore, InventoryEditor, InventoryError, ItemDraft,
    KeyValueStore, LoadingRules, LoadingTimeline, MemoryStore, MenuTarget, NavEvent,
    NavigationController, Pager, Screen, SheetState,
};
use std::collections::HashSet;

use crate::logic::TesterAssets;

pub type Check = fn(&mut ChaCha8Rng, &TesterAssets) -> Result<()>;

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    check: Check,
}

impl Scenario {
    /// # Errors
    ///
    /// Returns the first violated expectation.
    pub fn run(&self, rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
        (self.check)(rng, assets)
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "life-bounds",
        description: "Random life steps and toggles keep 0 <= life <= max",
        check: life_bounds,
    },
    Scenario {
        key: "heroic-will-toggle",
        description: "Heroic Will adds its bonus and clamps back on deactivation",
        check: heroic_will_toggle,
    },
    Scenario {
        key: "carousel-wrap",
        description: "Carousel moves wrap modulo the roster length",
        check: carousel_wrap,
    },
    Scenario {
        key: "lore-clamp",
        description: "Lore paging clamps at both ends and every page parses",
        check: lore_clamp,
    },
    Scenario {
        key: "inventory-crud",
        description: "Inventory add/edit/delete keeps ids unique and rejects blank names",
        check: inventory_crud,
    },
    Scenario {
        key: "storage-roundtrip",
        description: "Notes and inventory survive a store round trip per character",
        check: storage_roundtrip,
    },
    Scenario {
        key: "navigation-walk",
        description: "Random navigation events only produce valid screens",
        check: navigation_walk,
    },
    Scenario {
        key: "loading-timeline",
        description: "Loading progress is monotonic and finishes exactly once",
        check: loading_timeline,
    },
];

const SMOKE: &[&str] = &["life-bounds", "inventory-crud", "navigation-walk"];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    let mut list: Vec<_> = SCENARIOS.iter().map(|s| (s.key, s.description)).collect();
    list.push(("smoke", "Quick subset: life-bounds, inventory-crud, navigation-walk"));
    list.push(("all", "Every scenario above"));
    list
}

#[must_use]
pub fn find_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

/// Expand `smoke`/`all` aliases; unknown names are kept so the caller can
/// report them.
#[must_use]
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !expanded.iter().any(|n| n == name) {
            expanded.push(name.to_string());
        }
    };
    for name in names {
        match name.as_str() {
            "all" => SCENARIOS.iter().for_each(|s| push(s.key)),
            "smoke" => SMOKE.iter().for_each(|key| push(key)),
            other => push(other),
        }
    }
    expanded
}

fn pick_character<'a>(rng: &mut ChaCha8Rng, assets: &'a TesterAssets) -> Result<&'a Character> {
    let index = rng.gen_range(0..assets.roster.len().max(1));
    assets
        .roster
        .get(index)
        .context("roster is empty; nothing to test")
}

fn random_text(rng: &mut ChaCha8Rng, max_len: usize) -> String {
    const ALPHABET: &[char] = &[
        'a', 'b', 'c', 'x', 'y', 'z', 'ã', 'é', 'ç', ' ', '-', '\'', '"', '1', '9',
    ];
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .filter_map(|_| ALPHABET.choose(rng).copied())
        .collect()
}

fn random_name(rng: &mut ChaCha8Rng) -> String {
    loop {
        let name = random_text(rng, 16);
        if !name.trim().is_empty() {
            return name;
        }
    }
}

fn check_sheet(sheet: &SheetState, character: &Character, bonus: u32, step: usize) -> Result<()> {
    let expected_max = if sheet.heroic_will_active() {
        character.life + bonus
    } else {
        character.life
    };
    ensure!(
        sheet.max_life() == expected_max,
        "step {step}: max life {} != {expected_max}",
        sheet.max_life()
    );
    ensure!(
        sheet.current_life() <= sheet.max_life(),
        "step {step}: life {} above max {}",
        sheet.current_life(),
        sheet.max_life()
    );
    ensure!(
        sheet.can_increase() == (sheet.current_life() < sheet.max_life()),
        "step {step}: increase control out of sync"
    );
    Ok(())
}

fn life_bounds(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let character = pick_character(rng, assets)?;
    let rules = assets.config.heroic_will;
    let mut sheet = SheetState::new(character, rules);
    for step in 0..rng.gen_range(50..300) {
        match rng.gen_range(0..5) {
            0 | 1 => sheet.decrease_life(),
            2 | 3 => sheet.increase_life(),
            _ => sheet.toggle_heroic_will(),
        }
        check_sheet(&sheet, character, rules.life_bonus, step)
            .with_context(|| format!("character {}", character.id))?;
    }
    Ok(())
}

fn heroic_will_toggle(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let character = pick_character(rng, assets)?;
    let rules = assets.config.heroic_will;
    let mut sheet = SheetState::new(character, rules);
    for _ in 0..rng.gen_range(0..=character.life) {
        sheet.decrease_life();
    }
    let before = sheet.current_life();

    sheet.toggle_heroic_will();
    let boosted = sheet.current_life();
    ensure!(
        boosted == (before + rules.life_bonus).min(character.life + rules.life_bonus),
        "{}: activation gave {boosted} from {before}",
        character.id
    );
    ensure!(sheet.defense() == character.defense + rules.defense_bonus);
    ensure!(character.abilities_for(true) == character.heroic_will.abilities.as_slice());

    sheet.toggle_heroic_will();
    ensure!(
        sheet.current_life() == boosted.min(character.life),
        "{}: deactivation left {} (boosted {boosted}, base {})",
        character.id,
        sheet.current_life(),
        character.life
    );
    ensure!(sheet.defense() == character.defense);
    Ok(())
}

fn carousel_wrap(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let len = rng.gen_range(1..=assets.roster.len().max(1) * 2);
    let mut carousel = Carousel::new(len);
    ensure!(carousel.previous().index() == len - 1, "previous from 0 must wrap");

    let mut expected = 0_usize;
    for _ in 0..rng.gen_range(10..100) {
        match rng.gen_range(0..3) {
            0 => {
                carousel = carousel.next();
                expected = (expected + 1) % len;
            }
            1 => {
                carousel = carousel.previous();
                expected = (expected + len - 1) % len;
            }
            _ => {
                let target = rng.gen_range(0..len * 2);
                carousel = carousel.select(target);
                if target < len {
                    expected = target;
                }
            }
        }
        ensure!(
            carousel.index() == expected,
            "len {len}: index {} != {expected}",
            carousel.index()
        );
    }

    let last = Carousel::new(len).select(len - 1);
    ensure!(last.next().index() == 0, "next from last must wrap");
    Ok(())
}

fn lore_clamp(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let len = assets.lore.len();
    let mut pager = Pager::new(len);
    let mut expected = 0_usize;
    for _ in 0..rng.gen_range(10..60) {
        if rng.gen_bool(0.5) {
            pager = pager.next();
            expected = (expected + 1).min(len.saturating_sub(1));
        } else {
            pager = pager.previous();
            expected = expected.saturating_sub(1);
        }
        ensure!(pager.page() == expected, "page {} != {expected}", pager.page());
        ensure!(pager.is_first() == (expected == 0));
    }

    for page in assets.lore.iter() {
        ensure!(
            !page.paragraphs().is_empty(),
            "lore page {} has no paragraphs",
            page.id
        );
    }
    Ok(())
}

fn inventory_crud(rng: &mut ChaCha8Rng, _assets: &TesterAssets) -> Result<()> {
    let mut editor = InventoryEditor::new(rancho_core::Inventory::empty());

    editor.open_add();
    editor.set_name(" ".repeat(rng.gen_range(0..4)));
    ensure!(
        editor.submit() == Err(InventoryError::NameRequired),
        "blank name must be rejected"
    );
    ensure!(editor.items().is_empty() && editor.is_form_open());
    editor.cancel();

    for _ in 0..rng.gen_range(1..12) {
        match rng.gen_range(0..4) {
            0 | 1 => {
                editor.open_add();
                editor.set_name(random_name(rng));
                editor.set_description(random_text(rng, 30));
                editor.set_quantity_input(&rng.gen_range(-3_i32..20).to_string());
                let before = editor.items().len();
                editor.submit().context("add with a valid name")?;
                ensure!(editor.items().len() == before + 1);
                ensure!(!editor.is_form_open(), "form must close after submit");
            }
            2 => {
                let Some(target) = editor.items().items().choose(rng).map(|i| i.id.clone()) else {
                    continue;
                };
                editor.start_edit(&target)?;
                let quantity = rng.gen_range(1..50);
                editor.set_quantity(quantity);
                editor.submit().context("edit")?;
                let item = editor.items().get(&target).context("edited id vanished")?;
                ensure!(item.quantity == quantity, "edit did not apply");
            }
            _ => {
                let Some(target) = editor.items().items().choose(rng).map(|i| i.id.clone()) else {
                    continue;
                };
                editor.delete(&target)?;
                ensure!(!editor.items().contains(&target));
            }
        }

        let ids: HashSet<_> = editor.items().iter().map(|i| i.id.clone()).collect();
        ensure!(ids.len() == editor.items().len(), "duplicate inventory ids");
        ensure!(editor.items().iter().all(|i| i.quantity >= 1));
    }

    let ids: Vec<_> = editor.items().iter().map(|i| i.id.clone()).collect();
    for id in &ids {
        editor.delete(id)?;
    }
    ensure!(editor.items().is_empty(), "delete-all must empty the list");
    Ok(())
}

fn storage_roundtrip(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let backend = MemoryStore::new();
    let store = CompanionStore::new(backend.clone());
    let a = pick_character(rng, assets)?.id.clone();
    let b = CharacterId::new(format!("{a}-other"));

    let notes = random_text(rng, 120);
    store.save_notes(&a, &notes)?;
    ensure!(store.load_notes(&a)? == notes, "notes changed on reload");
    ensure!(store.load_notes(&b)?.is_empty(), "notes leaked across characters");

    let mut editor = InventoryEditor::new(store.load_inventory(&a)?);
    for _ in 0..rng.gen_range(0..6) {
        editor.open_add();
        editor.set_name(random_name(rng));
        editor.set_quantity(rng.gen_range(1..9));
        editor.submit()?;
        store.save_inventory(&a, editor.items())?;
    }
    ensure!(
        &store.load_inventory(&a)? == editor.items(),
        "inventory changed on reload"
    );
    ensure!(store.load_inventory(&b)?.is_empty());

    let legacy = format!(
        r#"[{{"id":"1","name":"Corda","description":"","quantity":{}}}]"#,
        rng.gen_range(0..4)
    );
    backend.put(&inventory_key(&b), &legacy)?;
    let migrated = store.load_inventory(&b)?;
    ensure!(migrated.len() == 1 && migrated.iter().all(|i| i.quantity >= 1));

    backend.put(&inventory_key(&b), "{not json")?;
    ensure!(store.load_inventory_or_quarantine(&b)?.is_empty());
    let quarantined = backend.raw(&quarantine_key(&inventory_key(&b)));
    ensure!(
        quarantined.as_deref() == Some("{not json"),
        "corrupt value was not quarantined"
    );
    Ok(())
}

fn random_event(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<NavEvent> {
    Ok(match rng.gen_range(0..5) {
        0 => NavEvent::Start,
        1 => NavEvent::Open(
            *MenuTarget::ALL
                .choose(rng)
                .context("menu targets are never empty")?,
        ),
        2 => NavEvent::Select(pick_character(rng, assets)?.id.clone()),
        3 => NavEvent::OpenInventory,
        _ => NavEvent::Back,
    })
}

fn navigation_walk(rng: &mut ChaCha8Rng, assets: &TesterAssets) -> Result<()> {
    let mut nav = NavigationController::new();
    for step in 0..rng.gen_range(20..120) {
        let before = nav.screen().clone();
        let event = random_event(rng, assets)?;
        let changed = nav.dispatch(&event);
        let after = nav.screen().clone();
        ensure!(changed == (before != after), "step {step}: change flag wrong");

        match (&before, &event, &after) {
            (Screen::Sheet { character }, NavEvent::OpenInventory, Screen::Inventory { character: c2 }) => {
                ensure!(character == c2, "inventory lost the selection");
            }
            (_, NavEvent::OpenInventory, _) if changed => {
                bail!("step {step}: inventory opened from {}", before.label());
            }
            (Screen::Characters, NavEvent::Select(id), Screen::Sheet { character }) => {
                ensure!(id == character, "sheet shows the wrong character");
            }
            (_, NavEvent::Back, _) => {
                ensure!(after == before.back(), "step {step}: back from {}", before.label());
            }
            _ => {}
        }
    }
    Ok(())
}

fn loading_timeline(rng: &mut ChaCha8Rng, _assets: &TesterAssets) -> Result<()> {
    let rules = LoadingRules {
        tick_ms: rng.gen_range(10..100),
        step_pct: rng.gen_range(1..25),
        complete_delay_ms: rng.gen_range(0..1500),
        title_delay_ms: rng.gen_range(0..1000),
    };
    let timeline = LoadingTimeline::new(rules);
    let finish = timeline.finish_at_ms();
    let mut last_progress = 0;
    let mut finished_at = None;
    let mut elapsed = 0_u64;
    while elapsed <= finish + u64::from(rules.tick_ms) {
        let frame = timeline.frame_at(elapsed);
        ensure!(frame.progress >= last_progress, "{rules:?}: progress went backwards");
        ensure!(frame.progress <= 100);
        if frame.finished {
            ensure!(frame.is_full(), "{rules:?}: finished before 100%");
            finished_at.get_or_insert(elapsed);
        }
        last_progress = frame.progress;
        elapsed += u64::from(rules.tick_ms);
    }
    let Some(at) = finished_at else {
        bail!("{rules:?}: never finished");
    };
    ensure!(at >= finish, "{rules:?}: finished early at {at}");
    Ok(())
}
