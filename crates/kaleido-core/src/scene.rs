use crate::sprite::Sprite;
use crate::ticker::Ticker;
use rand::Rng;
use std::time::Instant;

/// Kind indexes of the default population, in back-to-front draw order:
/// ball, rectangle, square, ball, cross, square.
const DEFAULT_KINDS: [i32; 6] = [0, 1, 2, 0, 3, 2];

/// The ordered sprite collection plus the clock that drives it.
///
/// All user commands are broadcast to every sprite in order, and the
/// renderer reads the collection back in the same order. Mutations raise
/// the dirty flag so the host knows a repaint is due even while the clock
/// is stopped; there is exactly one observer, so a flag is all the
/// invalidation machinery the scene needs.
pub struct Scene {
    sprites: Vec<Sprite>,
    ticker: Ticker,
    dirty: bool,
}

impl Scene {
    /// Build the default six-sprite population. Initial colors are seeded
    /// by advancing the first sprite once, then offsetting each subsequent
    /// sprite from its predecessor, so neighbours are always distinct.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut sprites: Vec<Sprite> = DEFAULT_KINDS
            .iter()
            .map(|&kind| {
                let mut sprite = Sprite::new(rng);
                sprite.set_kind(kind);
                sprite
            })
            .collect();

        sprites[0].cycle_color();
        for i in 1..sprites.len() {
            let previous = sprites[i - 1].color();
            sprites[i].offset_color_by_one(previous);
        }

        Self {
            sprites,
            ticker: Ticker::new(),
            dirty: true,
        }
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Start the clock. Idempotent.
    pub fn run(&mut self, now: Instant) {
        self.ticker.run(now);
    }

    /// Stop the clock where it is; sprite state is untouched.
    pub fn pause(&mut self) {
        self.ticker.pause();
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Deliver every tick due at `now`: one step per sprite, in order.
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let ticks = self.ticker.due_ticks(now);
        for _ in 0..ticks {
            self.step_all();
        }
        ticks
    }

    /// One tick: step every sprite in scene order.
    pub fn step_all(&mut self) {
        for sprite in &mut self.sprites {
            sprite.step();
        }
        self.dirty = true;
    }

    /// Push new viewport dimensions into every sprite.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        for sprite in &mut self.sprites {
            sprite.set_limits(width, height);
        }
        self.dirty = true;
    }

    /// Randomize positions within the upper-left quadrant of the viewport.
    pub fn scatter(&mut self, rng: &mut impl Rng, width: i32, height: i32) {
        let half_width = (width / 2).max(1);
        let half_height = (height / 2).max(1);
        for sprite in &mut self.sprites {
            sprite.set_x(rng.gen_range(0..half_width));
            sprite.set_y(rng.gen_range(0..half_height));
        }
        self.dirty = true;
    }

    pub fn set_speed(&mut self, percent: i32) {
        for sprite in &mut self.sprites {
            sprite.set_speed(percent);
        }
        self.dirty = true;
    }

    pub fn cycle_colors(&mut self) {
        for sprite in &mut self.sprites {
            sprite.cycle_color();
        }
        self.dirty = true;
    }

    pub fn cycle_reflections(&mut self) {
        for sprite in &mut self.sprites {
            sprite.cycle_reflections();
        }
        self.dirty = true;
    }

    /// Discard everything and rebuild: fresh sprites with new random sizes,
    /// a fresh stopped clock, limits and scatter re-applied for the current
    /// viewport. The user must run again afterwards.
    pub fn reset(&mut self, rng: &mut impl Rng, width: i32, height: i32) {
        *self = Scene::new(rng);
        self.set_viewport(width, height);
        self.scatter(rng, width, height);
    }

    /// Read and clear the repaint flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
