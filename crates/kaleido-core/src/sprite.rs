use crate::color::Color;
use crate::geometry::{bounce_axis, reflect};
use glam::IVec2;
use rand::Rng;

/// Smallest randomized sprite size, inclusive.
pub const MIN_SIZE: i32 = 30;
/// Largest randomized sprite size, exclusive.
pub const MAX_SIZE: i32 = 60;

/// Per-axis velocity magnitude at 100% speed.
const MAX_SPEED: i32 = 20;

/// Render-time tag deciding how a sprite is drawn. The differences between
/// kinds are draw dispatch and bounding-box sizing only, so this stays a
/// flat enum; the renderer switches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Ball,
    Rectangle,
    Square,
    Cross,
}

impl ShapeKind {
    const CYCLE: [ShapeKind; 4] = [
        ShapeKind::Ball,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Cross,
    ];

    /// Kind at `index` modulo the cycle, Euclidean so negatives wrap too.
    pub fn from_index(index: i32) -> ShapeKind {
        Self::CYCLE[index.rem_euclid(Self::CYCLE.len() as i32) as usize]
    }
}

/// One animated primitive: a position bouncing inside the limits plus the
/// appearance state (size, kind, color) and the reflection count used when
/// drawing.
///
/// The limits are the viewport dimensions minus the sprite size and may be
/// negative while the viewport is unknown or smaller than the sprite; the
/// position is still clamped into `[0, max(0, limit)]` on every limit
/// update.
#[derive(Debug, Clone)]
pub struct Sprite {
    size: i32,
    kind: ShapeKind,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    x_limit: i32,
    y_limit: i32,
    color: Color,
    reflections: u32,
}

impl Sprite {
    /// New sprite with a randomized size in `[MIN_SIZE, MAX_SIZE)`. Kind,
    /// color and position are the defaults; the scene assigns the rest at
    /// build time.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_size(rng.gen_range(MIN_SIZE..MAX_SIZE))
    }

    /// New sprite with a fixed size, for deterministic setups.
    pub fn with_size(size: i32) -> Self {
        debug_assert!(size >= MIN_SIZE);
        Self {
            size,
            kind: ShapeKind::Ball,
            x: 0,
            y: 0,
            dx: 12,
            dy: 8,
            x_limit: 0,
            y_limit: 0,
            color: Color::Blue,
            reflections: 16,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn reflections(&self) -> u32 {
        self.reflections
    }

    /// Set the walls to bounce off from, given the viewport dimensions.
    /// Negative inputs are treated as 0. The position is clamped back into
    /// range so a shrinking viewport cannot strand the sprite outside it.
    pub fn set_limits(&mut self, width: i32, height: i32) {
        self.x_limit = width.max(0) - self.size;
        self.y_limit = height.max(0) - self.size;
        self.x = self.x.clamp(0, self.x_limit.max(0));
        self.y = self.y.clamp(0, self.y_limit.max(0));
    }

    /// Raw position overwrite; the caller keeps it in range.
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Set the per-axis velocity magnitude from a speed percentage,
    /// preserving each axis's direction. A stopped axis (zero delta)
    /// restarts toward positive.
    pub fn set_speed(&mut self, percent: i32) {
        let magnitude = MAX_SPEED * percent.clamp(0, 100) / 100;
        self.dx = if self.dx < 0 { -magnitude } else { magnitude };
        self.dy = if self.dy < 0 { -magnitude } else { magnitude };
    }

    /// Advance the color one step in the cycle.
    pub fn cycle_color(&mut self) {
        self.color = self.color.next();
    }

    /// Take `base` and advance one step; used when seeding a scene so
    /// neighbouring sprites get distinct colors.
    pub fn offset_color_by_one(&mut self, base: Color) {
        self.color = base.next();
    }

    pub fn set_kind(&mut self, index: i32) {
        self.kind = ShapeKind::from_index(index);
    }

    /// Advance the reflection count: 8 → 16 → 24 → 8.
    pub fn cycle_reflections(&mut self) {
        self.reflections += 8;
        if self.reflections > 24 {
            self.reflections = 8;
        }
    }

    /// One animation step: bounce independently per axis.
    pub fn step(&mut self) {
        let (x, dx) = bounce_axis(self.x, self.dx, self.x_limit);
        self.x = x;
        self.dx = dx;
        let (y, dy) = bounce_axis(self.y, self.dy, self.y_limit);
        self.y = y;
        self.dy = dy;
    }

    /// Bounding box `(x, y, w, h)` for reflection `index` about the given
    /// center. The width is always the sprite size; the height depends on
    /// the kind. The cross height is the bar thickness; the renderer
    /// issues the second bar itself.
    pub fn draw_params(&self, index: u32, center_x: i32, center_y: i32) -> (i32, i32, i32, i32) {
        let p = reflect(
            IVec2::new(self.x, self.y),
            IVec2::new(center_x, center_y),
            index,
            self.reflections,
        );
        let height = match self.kind {
            ShapeKind::Ball | ShapeKind::Square => self.size,
            ShapeKind::Rectangle => self.size / 2,
            ShapeKind::Cross => self.size / 15,
        };
        (p.x, p.y, self.size, height)
    }
}
