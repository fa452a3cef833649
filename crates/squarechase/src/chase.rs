//! Game rules, independent of windowing and rendering.

use rand::Rng;
use squarechase_engine::coords::{Rect, Vec2};
use squarechase_engine::paint::Color;

const MIN_SIZE: f32 = 10.0;
const MAX_SIZE: f32 = 25.0;
const SIZE_STEP: f32 = 1.0;

const MAX_TIME_PER_SQUARE: f32 = 2.75;
const MIN_TIME_PER_SQUARE: f32 = 0.75;
const TIME_STEP: f32 = 0.25;

/// Seconds without a hit before the game gets easier again.
const MAX_TIME_WITHOUT_HITS: f32 = 10.0;

/// Square color, indexed by `score % 3`.
const COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// State of one round of square chasing.
///
/// The square jumps to a random spot whenever its time runs out. Clicking it
/// scores a point, makes it smaller and shortens its time; going too long
/// without a hit undoes one step of that.
#[derive(Debug, Clone)]
pub struct Chase {
    score: u32,
    time_remaining: f32,
    time_per_square: f32,
    time_without_hits: f32,
    square: Rect,
}

impl Default for Chase {
    fn default() -> Self {
        Self::new()
    }
}

impl Chase {
    pub fn new() -> Self {
        Self {
            score: 0,
            time_remaining: 0.0,
            time_per_square: MAX_TIME_PER_SQUARE,
            time_without_hits: 0.0,
            square: Rect::new(0.0, 0.0, MAX_SIZE, MAX_SIZE),
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn square(&self) -> Rect {
        self.square
    }

    #[inline]
    pub fn time_per_square(&self) -> f32 {
        self.time_per_square
    }

    #[inline]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    #[inline]
    pub fn color(&self) -> Color {
        COLORS[self.score as usize % COLORS.len()]
    }

    pub fn title(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Advances the round by `dt` seconds.
    ///
    /// `bounds` is the playfield size; `press` is the pointer position while
    /// the primary button is held. Returns whether the square was hit.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: Vec2,
        press: Option<Vec2>,
        dt: f32,
    ) -> bool {
        if self.time_remaining <= 0.0 {
            self.square.pos = Vec2::new(random_coord(rng, bounds.x), random_coord(rng, bounds.y));
            self.time_remaining += self.time_per_square;
        }

        if press.is_some_and(|p| self.square.contains(p)) {
            self.score += 1;
            self.time_remaining = 0.0;
            self.time_without_hits = 0.0;
            if self.square.size.x > MIN_SIZE {
                self.square.size -= Vec2::splat(SIZE_STEP);
            }
            if self.time_per_square > MIN_TIME_PER_SQUARE {
                self.time_per_square -= TIME_STEP;
            }
            log::debug!(
                "hit! score {} (size {}, {}s per square)",
                self.score,
                self.square.size.x,
                self.time_per_square
            );
            return true;
        }

        self.time_without_hits += dt;
        self.time_remaining -= dt;
        if self.time_without_hits > MAX_TIME_WITHOUT_HITS {
            self.time_without_hits -= MAX_TIME_WITHOUT_HITS;
            if self.square.size.x < MAX_SIZE {
                self.square.size += Vec2::splat(SIZE_STEP);
            }
            if self.time_per_square < MAX_TIME_PER_SQUARE {
                self.time_per_square += TIME_STEP;
            }
        }
        false
    }
}

/// Whole-pixel coordinate in `[0, extent - MAX_SIZE)`, or 0 when that is empty.
fn random_coord<R: Rng>(rng: &mut R, extent: f32) -> f32 {
    let span = (extent as i32 - MAX_SIZE as i32).max(1);
    rng.gen_range(0..span) as f32
}
