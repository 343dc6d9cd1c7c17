use crate::canvas::PainterCanvas;
use crate::config::AppConfig;
use kaleido_core::{Scene, TICK_PERIOD};
use kaleido_render::render_scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// The standalone application: owns the scene and the control-panel state,
/// and drives ticking and painting from the egui update loop.
pub struct KaleidoApp {
    scene: Scene,
    rng: StdRng,
    config: AppConfig,
    /// Slider position; applied to the scene only on release.
    speed: i32,
    /// Last viewport size pushed into the scene.
    viewport: (i32, i32),
    /// Whether sprites have been scattered since the last (re)build.
    placed: bool,
}

impl KaleidoApp {
    pub fn new(config: AppConfig) -> Self {
        let mut rng = StdRng::from_entropy();
        let scene = Scene::new(&mut rng);
        let speed = config.initial_speed;
        Self {
            scene,
            rng,
            config,
            speed,
            viewport: (0, 0),
            placed: false,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let running = self.scene.is_running();

            if ui.add_enabled(!running, egui::Button::new("Run")).clicked() {
                self.scene.run(Instant::now());
                log::debug!("running");
            }
            if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                self.scene.pause();
                log::debug!("paused");
            }
            if ui.button("Change Color").clicked() {
                self.scene.cycle_colors();
            }
            if ui.button("Change Reflection").clicked() {
                self.scene.cycle_reflections();
            }
            if ui.button("Clear/Restart").clicked() {
                let (width, height) = self.viewport;
                self.scene.reset(&mut self.rng, width, height);
                self.speed = self.config.initial_speed;
                log::info!("scene reset");
            }

            let response = ui.add(egui::Slider::new(&mut self.speed, 0..=100).text("Speed"));
            // Commit only on release; in-flight drag values are not applied.
            if response.drag_stopped() {
                self.scene.set_speed(self.speed);
                log::debug!("speed {}%", self.speed);
            }
        });
    }
}

impl eframe::App for KaleidoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let width = rect.width() as i32;
            let height = rect.height() as i32;

            if (width, height) != self.viewport && width > 0 && height > 0 {
                self.viewport = (width, height);
                self.scene.set_viewport(width, height);
            }
            // First frame with a real size: scatter the sprites into the
            // upper-left quadrant.
            if !self.placed && width > 0 && height > 0 {
                self.scene.scatter(&mut self.rng, width, height);
                self.placed = true;
            }

            self.scene.advance(Instant::now());

            let painter = ui.painter_at(rect);
            let mut canvas = PainterCanvas::new(&painter, rect.min);
            render_scene(&self.scene, width, height, &mut canvas);

            if self.scene.take_dirty() && !self.scene.is_running() {
                // State changed outside a tick (color, reflections, reset):
                // make sure the next frame also observes it.
                ctx.request_repaint();
            }
            if self.scene.is_running() {
                ctx.request_repaint_after(TICK_PERIOD);
            }
        });
    }
}
