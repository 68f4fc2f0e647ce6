use rancho_core::{Carousel, CharacterRoster, HeroicWillRules, SheetState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CHARACTERS: &str = include_str!("../../rancho-web/static/assets/data/characters.json");

#[test]
fn random_life_operations_stay_in_bounds() {
    let roster = CharacterRoster::from_json(CHARACTERS).unwrap();
    for seed in [1_u64, 7, 0xDEAD_BEEF] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for character in &roster {
            let mut sheet = SheetState::new(character, HeroicWillRules::default());
            for _ in 0..400 {
                match rng.gen_range(0..3) {
                    0 => sheet.decrease_life(),
                    1 => sheet.increase_life(),
                    _ => sheet.toggle_heroic_will(),
                }
                assert!(
                    sheet.current_life() <= sheet.max_life(),
                    "seed {seed} {}",
                    character.id
                );
                assert_eq!(sheet.can_increase(), sheet.current_life() < sheet.max_life());
            }
        }
    }
}

#[test]
fn random_carousel_walks_match_modular_arithmetic() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    for len in 1..=11_usize {
        let mut carousel = Carousel::new(len);
        let mut expected: i64 = 0;
        for _ in 0..200 {
            if rng.gen_bool(0.5) {
                carousel = carousel.next();
                expected += 1;
            } else {
                carousel = carousel.previous();
                expected -= 1;
            }
            let len_i = i64::try_from(len).unwrap();
            assert_eq!(
                i64::try_from(carousel.index()).unwrap(),
                expected.rem_euclid(len_i)
            );
        }
    }
}
