//! Falling-glyph particle field behind the intro title.

use rand::seq::IndexedRandom;
use rand::Rng;

const GLYPHS: &[char] = &[
    '0', '1', '█', '■', '◆', '◇', '♠', '♣', '♥', '☻', '☺', '☼', '•', '○', '◙', '♂', '♀', '♪',
    '♫', '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼', '⌂',
];

/// Fewest columns the field ever has, however narrow the terminal.
const MIN_COLUMNS: u16 = 15;

/// Share of drops removed each update.
const DROP_CHANCE: f64 = 0.3;
const SPAWN_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub glyph: char,
    pub column: u16,
    /// Rows fallen from the top edge
    pub y: f32,
    pub speed: f32,
    pub opacity: f32,
    /// Updates left before the drop disappears
    pub lifetime: u32,
}

impl RainDrop {
    fn spawn<R: Rng + ?Sized>(column: u16, rng: &mut R) -> Self {
        Self {
            glyph: GLYPHS.choose(rng).copied().unwrap_or('0'),
            column,
            y: 0.0,
            speed: rng.random_range(1.0..3.0),
            opacity: rng.random_range(0.4..1.0),
            lifetime: rng.random_range(10..30),
        }
    }

    fn fall(&mut self) {
        self.y += self.speed;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.opacity = self.opacity.min(self.lifetime as f32 / 10.0);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatrixRain {
    columns: u16,
    height: u16,
    drops: Vec<RainDrop>,
}

impl MatrixRain {
    pub fn new(width: u16, height: u16) -> Self {
        let mut rain = Self::default();
        rain.resize(width, height);
        rain
    }

    /// Every drop stays where it is; new drops use the new column count.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.columns = MIN_COLUMNS.max(width / 2);
        self.height = height;
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    pub fn clear(&mut self) {
        self.drops.clear();
    }

    /// Advance the field by one frame.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.drops.retain(|_| !rng.random_bool(DROP_CHANCE));

        for column in 0..self.columns {
            if rng.random_bool(SPAWN_CHANCE) {
                self.drops.push(RainDrop::spawn(column, rng));
            }
        }

        for drop in &mut self.drops {
            drop.fall();
        }

        let height = f32::from(self.height);
        self.drops
            .retain(|drop| drop.lifetime > 0 && drop.y < height);
    }
}
