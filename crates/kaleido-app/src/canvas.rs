use egui::epaint::EllipseShape;
use egui::{Color32, CornerRadius, Pos2, Rect, Vec2};
use kaleido_render::{Canvas, Rgb};

/// Adapts the egui painter to the renderer's draw-primitive interface.
///
/// The renderer works in viewport pixels with the origin at the top-left;
/// `origin` shifts everything into the panel's screen rect. The painter is
/// expected to be clipped to that rect by the caller.
pub struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn color(rgb: Rgb) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::from_min_size(
            self.origin + Vec2::new(x as f32, y as f32),
            Vec2::new(width as f32, height as f32),
        )
    }
}

impl Canvas for PainterCanvas<'_> {
    fn fill_background(&mut self, width: i32, height: i32, rgb: Rgb) {
        self.painter
            .rect_filled(self.rect(0, 0, width, height), CornerRadius::ZERO, Self::color(rgb));
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, rgb: Rgb) {
        let rect = self.rect(x, y, width, height);
        self.painter.add(EllipseShape::filled(
            rect.center(),
            rect.size() / 2.0,
            Self::color(rgb),
        ));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, rgb: Rgb) {
        self.painter
            .rect_filled(self.rect(x, y, width, height), CornerRadius::ZERO, Self::color(rgb));
    }
}
