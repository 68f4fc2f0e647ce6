use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_s: f32,
}

/// Positions for `count` drifting dust motes, reproducible from `seed`.
#[must_use]
pub fn scatter(count: usize, seed: u64) -> Vec<Mote> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Mote {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..4.0),
        })
        .collect()
}

/// Seed that differs between mounts in the browser.
#[must_use]
pub fn mount_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x00D0_57ED
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub count: usize,
}

#[function_component(DustField)]
pub fn dust_field(p: &Props) -> Html {
    let count = p.count;
    let motes = use_memo(count, |&count| scatter(count, mount_seed()));
    html! {
        <div class="dust-field" aria-hidden="true">
            { for motes.iter().map(|m| html! {
                <div
                    class="dust-mote"
                    style={format!(
                        "left:{:.1}%;top:{:.1}%;animation-delay:{:.2}s",
                        m.left_pct, m.top_pct, m.delay_s
                    )}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic_and_in_range() {
        let a = scatter(20, 42);
        assert_eq!(a, scatter(20, 42));
        assert_eq!(a.len(), 20);
        for mote in &a {
            assert!((0.0..100.0).contains(&mote.left_pct));
            assert!((0.0..100.0).contains(&mote.top_pct));
            assert!((0.0..4.0).contains(&mote.delay_s));
        }
    }
}
