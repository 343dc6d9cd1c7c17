use crate::canvas::{Canvas, BACKGROUND};
use kaleido_core::{Scene, ShapeKind};

/// Draw one frame of the scene.
///
/// Stateless: fills the viewport with the background, then draws every
/// reflection of every sprite in scene order (back to front) about the
/// viewport center. A cross is two bars of thickness size/15 forming a "+"
/// offset from the reflected point; everything else is a single primitive.
pub fn render_scene(scene: &Scene, width: i32, height: i32, canvas: &mut dyn Canvas) {
    canvas.fill_background(width, height, BACKGROUND);

    let center_x = width / 2;
    let center_y = height / 2;

    for sprite in scene.sprites() {
        let rgb = sprite.color().rgb();
        for index in 0..sprite.reflections() {
            let (x, y, w, h) = sprite.draw_params(index, center_x, center_y);
            match sprite.kind() {
                ShapeKind::Ball => canvas.fill_oval(x, y, w, h, rgb),
                ShapeKind::Rectangle | ShapeKind::Square => canvas.fill_rect(x, y, w, h, rgb),
                ShapeKind::Cross => {
                    let half = sprite.size() / 2;
                    canvas.fill_rect(x, y, w, h, rgb);
                    canvas.fill_rect(x + half, y - half, h, w, rgb);
                }
            }
        }
    }
}
