use kaleido_core::{Scene, ShapeKind};
use kaleido_render::{render_scene, Canvas, Rgb, BACKGROUND};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Recording double ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum DrawCall {
    Background { width: i32, height: i32, rgb: Rgb },
    Oval { x: i32, y: i32, w: i32, h: i32, rgb: Rgb },
    Rect { x: i32, y: i32, w: i32, h: i32, rgb: Rgb },
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl Canvas for RecordingCanvas {
    fn fill_background(&mut self, width: i32, height: i32, rgb: Rgb) {
        self.calls.push(DrawCall::Background { width, height, rgb });
    }

    fn fill_oval(&mut self, x: i32, y: i32, w: i32, h: i32, rgb: Rgb) {
        self.calls.push(DrawCall::Oval { x, y, w, h, rgb });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, rgb: Rgb) {
        self.calls.push(DrawCall::Rect { x, y, w, h, rgb });
    }
}

fn rendered_scene() -> (Scene, RecordingCanvas) {
    let mut rng = StdRng::seed_from_u64(99);
    let mut scene = Scene::new(&mut rng);
    scene.set_viewport(800, 800);
    scene.scatter(&mut rng, 800, 800);

    let mut canvas = RecordingCanvas::default();
    render_scene(&scene, 800, 800, &mut canvas);
    (scene, canvas)
}

// ── Frame structure ──────────────────────────────────────────────

#[test]
fn background_is_painted_first_and_full_size() {
    let (_, canvas) = rendered_scene();
    assert_eq!(
        canvas.calls[0],
        DrawCall::Background {
            width: 800,
            height: 800,
            rgb: BACKGROUND
        }
    );
    assert_eq!(
        canvas
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Background { .. }))
            .count(),
        1
    );
}

#[test]
fn call_count_matches_reflections() {
    // Six sprites at 16 reflections each; the cross adds a second rect per
    // reflection, plus one background fill.
    let (_, canvas) = rendered_scene();
    assert_eq!(canvas.calls.len(), 1 + 6 * 16 + 16);
}

#[test]
fn kinds_dispatch_to_the_right_primitive() {
    let (scene, canvas) = rendered_scene();

    // Per-sprite chunk sizes in scene order, after the background.
    let mut offset = 1;
    for sprite in scene.sprites() {
        let reflections = sprite.reflections() as usize;
        let count = match sprite.kind() {
            ShapeKind::Cross => reflections * 2,
            _ => reflections,
        };
        let chunk = &canvas.calls[offset..offset + count];
        for call in chunk {
            match (sprite.kind(), call) {
                (ShapeKind::Ball, DrawCall::Oval { .. }) => {}
                (ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Cross, DrawCall::Rect { .. }) => {}
                _ => panic!("sprite {:?} drew {:?}", sprite.kind(), call),
            }
        }
        offset += count;
    }
    assert_eq!(offset, canvas.calls.len());
}

#[test]
fn colors_pass_through_unchanged() {
    let (scene, canvas) = rendered_scene();

    let mut offset = 1;
    for sprite in scene.sprites() {
        let reflections = sprite.reflections() as usize;
        let count = match sprite.kind() {
            ShapeKind::Cross => reflections * 2,
            _ => reflections,
        };
        for call in &canvas.calls[offset..offset + count] {
            let rgb = match call {
                DrawCall::Oval { rgb, .. } | DrawCall::Rect { rgb, .. } => *rgb,
                DrawCall::Background { .. } => panic!("background inside sprite chunk"),
            };
            assert_eq!(rgb, sprite.color().rgb());
        }
        offset += count;
    }
}

#[test]
fn cross_draws_two_offset_bars() {
    let (scene, canvas) = rendered_scene();

    // Locate the cross sprite's chunk.
    let mut offset = 1;
    for sprite in scene.sprites() {
        let reflections = sprite.reflections() as usize;
        if sprite.kind() != ShapeKind::Cross {
            offset += reflections;
            continue;
        }

        let size = sprite.size();
        let thickness = size / 15;
        for pair in canvas.calls[offset..offset + reflections * 2].chunks(2) {
            let (DrawCall::Rect { x, y, w, h, .. }, DrawCall::Rect { x: x2, y: y2, w: w2, h: h2, .. }) =
                (&pair[0], &pair[1])
            else {
                panic!("cross pair was not two rects: {pair:?}");
            };
            assert_eq!((*w, *h), (size, thickness));
            // Vertical bar: swapped extents, shifted by half the size.
            assert_eq!((*w2, *h2), (thickness, size));
            assert_eq!(*x2, x + size / 2);
            assert_eq!(*y2, y - size / 2);
        }
        return;
    }
    panic!("no cross sprite in the default scene");
}

#[test]
fn reflection_count_change_shows_up_in_the_frame() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut scene = Scene::new(&mut rng);
    scene.set_viewport(640, 480);
    scene.scatter(&mut rng, 640, 480);

    scene.cycle_reflections(); // 16 -> 24

    let mut canvas = RecordingCanvas::default();
    render_scene(&scene, 640, 480, &mut canvas);
    assert_eq!(canvas.calls.len(), 1 + 6 * 24 + 24);
}

#[test]
fn empty_viewport_still_gets_a_background() {
    let mut rng = StdRng::seed_from_u64(12);
    let scene = Scene::new(&mut rng);
    let mut canvas = RecordingCanvas::default();
    render_scene(&scene, 0, 0, &mut canvas);
    assert_eq!(
        canvas.calls[0],
        DrawCall::Background {
            width: 0,
            height: 0,
            rgb: BACKGROUND
        }
    );
}
