use glam::{DVec2, IVec2};
use std::f64::consts::TAU;

/// Advance one axis of motion by `delta` and bounce off the walls at 0 and
/// `limit`.
///
/// Touching the far wall counts as a bounce (`pos >= limit`); the near wall
/// bounces on `pos < 0`. A bounce reverses the delta and applies it a second
/// time, so the returned position is the pre-step position reflected by one
/// reversed step. Runs unchanged when `limit <= 0`; callers restore the
/// position invariant on the next limit update.
pub fn bounce_axis(pos: i32, delta: i32, limit: i32) -> (i32, i32) {
    let mut pos = pos + delta;
    let mut delta = delta;
    if pos < 0 || pos >= limit {
        delta = -delta;
        pos += delta;
    }
    (pos, delta)
}

/// Rotate the vector from `center` to `primary` by `index` steps of
/// `TAU / total` and return the resulting point.
///
/// The angle is taken as `atan(dx / dy)`: dx over dy, not the usual
/// `atan2(dy, dx)`. That collapses the sign of dy and anchors the rotation
/// to the vertical axis, which is the symmetry the kaleidoscope draws.
/// Changing this to `atan2` changes the picture. With `dy == 0` the
/// division yields ±infinity and `atan` returns ±π/2, the intended limit.
pub fn reflect(primary: IVec2, center: IVec2, index: u32, total: u32) -> IVec2 {
    let d = (primary - center).as_dvec2();
    if d == DVec2::ZERO {
        // On-center primaries collapse onto the center; avoid the 0/0 NaN.
        return center;
    }

    let angle = (d.x / d.y).atan();
    let radius = d.length();
    let phi = angle + f64::from(index) * TAU / f64::from(total);

    center + DVec2::new(radius * phi.sin(), radius * phi.cos()).round().as_ivec2()
}
