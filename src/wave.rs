/// Wave composition and enemy placement.
///
/// A wave's makeup is read straight off the wave number written in base 3:
/// four digits, one per tier, most significant digit = toughest tier.

use log::debug;
use rand::Rng;

use crate::entities::{Archetype, Entity, GameState};

const DIGITS: usize = 4;
/// Largest wave number with a distinct composition (`2222` in base 3).
pub const MAX_DISTINCT_WAVE: u32 = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyCounts {
    pub scouts: u32,
    pub weavers: u32,
    pub brutes: u32,
    pub bosses: u32,
}

impl EnemyCounts {
    pub fn total(&self) -> u32 {
        self.scouts + self.weavers + self.brutes + self.bosses
    }
}

/// `wave` in base 3, most significant digit first. Waves past
/// `MAX_DISTINCT_WAVE` saturate to all twos.
pub fn base3_digits(wave: u32) -> [u32; DIGITS] {
    let mut n = wave.min(MAX_DISTINCT_WAVE);
    let mut digits = [0; DIGITS];
    for d in digits.iter_mut().rev() {
        *d = n % 3;
        n /= 3;
    }
    digits
}

/// Each digit position is worth its place value in enemies (1, 3, 9, 27),
/// spread over that tier and the tiers below it, so the total always equals
/// the capped wave number.
pub fn enemy_counts(wave: u32) -> EnemyCounts {
    let [bosses, brutes, weavers, scouts] = base3_digits(wave);
    EnemyCounts {
        scouts: scouts + 2 * weavers + 5 * brutes + 15 * bosses,
        weavers: weavers + 3 * brutes + 8 * bosses,
        brutes: brutes + 3 * bosses,
        bosses,
    }
}

/// Place `count` copies of `archetype` at random columns in `[x_min, x_max]`,
/// clamped so the bitmap stays fully on screen.
pub fn spawn(
    archetype: Archetype,
    count: i32,
    x_min: i32,
    x_max: i32,
    term_width: i32,
    term_height: i32,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    if count <= 0 {
        return Vec::new();
    }
    let width = archetype.width();
    let lo = width;
    // A terminal narrower than two bitmaps pins everything at `lo`.
    let hi = (term_width - width).max(lo);
    let y = archetype.spawn_y(term_height);

    (0..count)
        .map(|_| {
            let x = if x_max > x_min {
                rng.gen_range(x_min..=x_max)
            } else {
                x_min
            };
            Entity::new(archetype, x.clamp(lo, hi), y)
        })
        .collect()
}

/// Replace the whole enemy collection with a fresh wave for `state.wave`.
/// Survivors of the previous wave are discarded.
pub fn new_wave(state: &mut GameState, rng: &mut impl Rng) {
    let counts = enemy_counts(state.wave);
    let w = state.width as i32;
    let h = state.height as i32;

    let mut entities = Vec::with_capacity(counts.total() as usize);
    for (archetype, count) in [
        (Archetype::Scout, counts.scouts),
        (Archetype::Weaver, counts.weavers),
        (Archetype::Brute, counts.brutes),
        (Archetype::Boss, counts.bosses),
    ] {
        let width = archetype.width();
        entities.extend(spawn(archetype, count as i32, width, w - width, w, h, rng));
    }

    debug!("wave {} spawned: {:?}", state.wave, counts);
    state.entities = entities;
    state.wave_complete = false;
}
