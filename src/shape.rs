/// Fixed bitmaps for every drawable object — pure data, no game logic.
///
/// Bitmaps are authored as integer rows (most significant bit = leftmost
/// cell) and expanded once into explicit boolean grids.

use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Expand integer bit rows into a grid with exactly `width` cells per row.
    /// Bits above `width` are ignored.
    pub fn from_bits(width: usize, rows: &[u64]) -> Self {
        let rows = rows
            .iter()
            .map(|&bits| {
                (0..width)
                    .map(|col| (bits >> (width - 1 - col)) & 1 == 1)
                    .collect()
            })
            .collect();
        Shape { width, rows }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Offsets `(col, row)` of every filled cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (col, row))
        })
    }

    /// One string per row, `filled` for set cells and `empty` otherwise.
    pub fn glyph_rows(&self, filled: char, empty: char) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|&c| if c { filled } else { empty })
                    .collect()
            })
            .collect()
    }
}

// ── Bitmaps ───────────────────────────────────────────────────────────────────

const PLAYER_BITS: [u64; 3] = [0b000010000, 0b100111001, 0b111101111];

const PLAYER_SHOT_BITS: [u64; 2] = [0b000010000, 0b100010001];

const SCOUT_BITS: [u64; 3] = [0b0001000, 0b0111110, 0b1010101];

const WEAVER_BITS: [u64; 4] = [0b0111111110, 0b1000000001, 0b1011111101, 0b0100000010];

const BRUTE_BITS: [u64; 8] = [
    0b0011111100,
    0b0110011010,
    0b1101111011,
    0b1101111011,
    0b0111111110,
    0b0011011000,
    0b0110011010,
    0b1100000011,
];

const BOSS_BITS: [u64; 7] = [
    0b000000000000000000000000000000000000000000000000000000000111,
    0b000011111110001111111000011111100011111000011111000111111000,
    0b001100000001010000001010000010100000001010000101000000000110,
    0b000011111111110111111011111110111111101111111011111111100000,
    0b000000000001010000001010000010100000001010000101000000000000,
    0b000011111110001111111000011111100011111000011111000111111000,
    0b000000000000000000000000000000000000000000000000000000000111,
];

const BOSS_TURNED_BITS: [u64; 7] = [
    0b111000000000000000000000000000000000000000000000000000000000,
    0b000111111000111110000111110001111110000111111100011111110000,
    0b011000000000101000010100000001010000010100000010100000001100,
    0b000001111111110111111101111111011111110111111011111111110000,
    0b000000000000101000010100000001010000010100000010100000000000,
    0b000111111000111110000111110001111110000111111100011111110000,
    0b111000000000000000000000000000000000000000000000000000000000,
];

/// Selector for a static bitmap. Cheap to copy into draw records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Player,
    PlayerShot,
    Scout,
    Weaver,
    Brute,
    Boss,
    /// Mirror image of `Boss`, shown while it sweeps rightward.
    BossTurned,
    Bullet,
}

impl ShapeId {
    pub fn shape(self) -> &'static Shape {
        static SHAPES: OnceLock<[Shape; 8]> = OnceLock::new();
        let shapes = SHAPES.get_or_init(|| {
            [
                Shape::from_bits(9, &PLAYER_BITS),
                Shape::from_bits(9, &PLAYER_SHOT_BITS),
                Shape::from_bits(7, &SCOUT_BITS),
                Shape::from_bits(10, &WEAVER_BITS),
                Shape::from_bits(10, &BRUTE_BITS),
                Shape::from_bits(60, &BOSS_BITS),
                Shape::from_bits(60, &BOSS_TURNED_BITS),
                Shape::from_bits(1, &[1]),
            ]
        });
        &shapes[self as usize]
    }
}
