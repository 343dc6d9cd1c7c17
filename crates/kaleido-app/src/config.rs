/// Fixed application settings.
///
/// There is deliberately no file, CLI, or environment configuration: the
/// animation keeps no state between runs, so everything an instance needs
/// is decided here.
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Slider position at startup and after a restart (percent).
    pub initial_speed: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Kaleidoscope".to_string(),
            window_width: 800.0,
            window_height: 800.0,
            initial_speed: 50,
        }
    }
}
