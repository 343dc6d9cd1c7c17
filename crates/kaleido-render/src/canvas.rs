/// Draw color as an RGB triple.
pub type Rgb = [u8; 3];

/// Light-gray fill painted under every frame.
pub const BACKGROUND: Rgb = [192, 192, 192];

/// The draw-primitive surface the host must provide.
///
/// Coordinates are pixels with the origin at the top-left of the viewport;
/// `(x, y)` is the top-left corner of the primitive's bounding box. Widths
/// and heights are always positive for the scenes this crate renders.
pub trait Canvas {
    /// Fill the whole viewport.
    fn fill_background(&mut self, width: i32, height: i32, rgb: Rgb);

    /// Filled ellipse inscribed in the bounding box.
    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, rgb: Rgb);

    /// Filled axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, rgb: Rgb);
}
