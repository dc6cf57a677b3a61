use anyhow::Context;
use glam::Vec2;
use instant::Instant;
use winit::{dpi::LogicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

use glyph_core::{
    normalized_from_pixels, FrameInput, GlyphInstance, MetricsTable, ProportionalMetrics, Scene,
    SceneConfig, DEFAULT_TEXT,
};

const WINDOW_TITLE: &str = "glyphfield";

// Row text with focused glyphs bracketed and a marker while the light flashes.
fn status_line<R: glyph_core::RandomSource>(scene: &Scene<R>) -> String {
    let mut focused = vec![false; scene.text().chars().count()];
    for g in scene.glyphs() {
        if g.has_focus() {
            focused[g.index] = true;
        }
    }
    let mut out = String::with_capacity(scene.text().len() + 8);
    for (ch, f) in scene.text().chars().zip(focused) {
        if f {
            out.push('[');
            out.push(ch);
            out.push(']');
        } else {
            out.push(ch);
        }
    }
    if scene.ambient_intensity() > 0.0 {
        out.push_str("  *");
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEXT.to_string());
    let mut scene = Scene::from_entropy(SceneConfig::default().with_text(text))
        .context("invalid scene configuration")?;

    // No geometry on the first frame: lay out with fallback widths, then
    // measure for real once the loop is running.
    scene.relayout(&MetricsTable::new());
    let metrics = ProportionalMetrics::default();

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)
        .context("creating window")?;
    let size = window.inner_size();
    scene.set_aspect(size.width as f32 / size.height.max(1) as f32);
    log::info!(
        "glyph-native starting: {:?}, {} glyphs",
        scene.text(),
        scene.glyphs().len()
    );

    let mut pointer = Vec2::ZERO;
    let mut last_frame = Instant::now();
    let mut title = String::new();
    let mut instances: Vec<GlyphInstance> = Vec::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    scene.set_aspect(size.width as f32 / size.height.max(1) as f32)
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let size = window.inner_size();
                    pointer = normalized_from_pixels(
                        position.x as f32,
                        position.y as f32,
                        size.width as f32,
                        size.height as f32,
                    );
                }
                WindowEvent::RedrawRequested => {
                    if !scene.is_ready() {
                        scene.relayout(&metrics);
                    }
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32();
                    last_frame = now;
                    let report = scene.tick(FrameInput { pointer, dt, now });
                    if report.flashed {
                        log::info!("flash: intensity {:.2}", report.ambient_intensity);
                    }

                    instances.clear();
                    instances.extend(scene.instances());
                    log::trace!(
                        "frame: {} instances ({} bytes), camera {:?}",
                        instances.len(),
                        bytemuck::cast_slice::<GlyphInstance, u8>(&instances).len(),
                        report.camera_position
                    );

                    let status = status_line(&scene);
                    if status != title {
                        window.set_title(&format!("{WINDOW_TITLE} - {status}"));
                        title = status;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })
        .context("event loop terminated with an error")?;
    Ok(())
}
