//! Per-frame orchestration of layout, pointer, glyph springs, camera and light.
//!
//! All state is owned by [`Scene`] and written only inside [`Scene::tick`],
//! which processes glyphs sequentially in row order.

use crate::ambient::{AmbientScheduler, LightRig, RandomSource, RngSource};
use crate::camera::{Camera, CameraFollow};
use crate::config::{ConfigError, SceneConfig};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::layout::{layout, LayoutResult};
use crate::metrics::GlyphMetrics;
use crate::pointer::{PointerProjector, PointerState};
use crate::proximity::GlyphAnimator;
use glam::{Mat4, Vec2, Vec3};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// One character of the row and its animation state.
#[derive(Clone, Debug)]
pub struct Glyph {
    pub ch: char,
    /// Position of the character in the source string.
    pub index: usize,
    pub width: f32,
    pub x: f32,
    mounted: bool,
    animator: GlyphAnimator,
}

impl Glyph {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn animator(&self) -> &GlyphAnimator {
        &self.animator
    }

    pub fn lift(&self) -> f32 {
        self.animator.lift()
    }

    pub fn color(&self) -> Vec3 {
        self.animator.color()
    }

    pub fn has_focus(&self) -> bool {
        self.animator.has_focus()
    }

    /// World position from the current transform, `None` while unmounted.
    pub fn world_position(&self, origin: Vec3) -> Option<Vec3> {
        self.mounted
            .then(|| origin + Vec3::new(self.x, self.animator.lift(), 0.0))
    }
}

/// Per-glyph data laid out for an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphInstance {
    pub translation: [f32; 3],
    pub focus: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Pointer in normalized screen space, both axes in [-1, 1], y up.
    pub pointer: Vec2,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Wall-clock time of this frame.
    pub now: Instant,
}

/// A glyph asking the camera to follow it this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusClaim {
    pub glyph: usize,
    pub world_pos: Vec3,
}

pub type FocusClaims = SmallVec<[FocusClaim; 4]>;

/// Camera focus resolution: the claim made last in row order wins.
#[inline]
pub fn last_writer_wins(claims: &[FocusClaim]) -> Option<&FocusClaim> {
    claims.last()
}

#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub pointer: Vec3,
    pub focused: SmallVec<[usize; 4]>,
    pub focus_winner: Option<usize>,
    pub flashed: bool,
    pub ambient_intensity: f32,
    pub camera_position: Vec3,
}

pub struct Scene<R: RandomSource> {
    config: SceneConfig,
    glyphs: Vec<Glyph>,
    layout: LayoutResult,
    ready: bool,
    pointer: PointerProjector,
    follow: CameraFollow,
    ambient: AmbientScheduler<R>,
    camera: Camera,
    last_winner: Option<usize>,
}

impl Scene<RngSource<StdRng>> {
    pub fn seeded(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        Scene::new(config, RngSource(StdRng::seed_from_u64(seed)))
    }

    pub fn from_entropy(config: SceneConfig) -> Result<Self, ConfigError> {
        Scene::new(config, RngSource(StdRng::from_entropy()))
    }
}

impl<R: RandomSource> Scene<R> {
    pub fn new(config: SceneConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = config.camera.clone();
        let follow = CameraFollow::new(camera.eye, config.follow);
        let ambient = AmbientScheduler::new(config.ambient, rng);
        let mut scene = Self {
            glyphs: Vec::new(),
            layout: LayoutResult::default(),
            ready: false,
            pointer: PointerProjector::default(),
            follow,
            ambient,
            camera,
            last_winner: None,
            config,
        };
        scene.rebuild_glyphs();
        Ok(scene)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.config.text
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// True once a layout with measured widths has been applied.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_follow(&self) -> &CameraFollow {
        &self.follow
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient.intensity()
    }

    pub fn lights(&self) -> LightRig {
        self.ambient.light_rig()
    }

    pub fn ambient(&self) -> &AmbientScheduler<R> {
        &self.ambient
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    /// Replace the text. Returns false (and keeps all state) if it is unchanged.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.config.text == text {
            return false;
        }
        self.config.text = text.to_string();
        self.rebuild_glyphs();
        true
    }

    fn rebuild_glyphs(&mut self) {
        let skip_blanks = self.config.layout.skip_blanks;
        let base = self.config.proximity.base_color;
        let spring = self.config.glyph_spring;
        self.glyphs = self
            .config
            .text
            .chars()
            .enumerate()
            .filter(|(_, ch)| !(skip_blanks && ch.is_whitespace()))
            .map(|(index, ch)| Glyph {
                ch,
                index,
                width: 0.0,
                x: 0.0,
                mounted: false,
                animator: GlyphAnimator::new(base, spring),
            })
            .collect();
        self.layout = LayoutResult::default();
        self.ready = false;
        self.last_winner = None;
    }

    /// Re-measure and re-position every glyph. Safe to call any number of times.
    ///
    /// Glyphs are mounted once a layout built entirely from measured widths lands.
    pub fn relayout<M: GlyphMetrics + ?Sized>(&mut self, metrics: &M) -> &LayoutResult {
        let chars: Vec<char> = self.config.text.chars().collect();
        let result = layout(&chars, metrics, &self.config.layout);
        debug_assert_eq!(result.len(), self.glyphs.len());

        let was_ready = self.ready;
        self.ready |= result.is_measured();
        for (glyph, slot) in self.glyphs.iter_mut().zip(&result.slots) {
            glyph.width = slot.width;
            glyph.x = slot.x;
            if self.ready && !was_ready {
                glyph.mounted = true;
            }
        }
        if self.ready && !was_ready {
            log::info!(
                "[layout] ready: {} glyphs, total width {:.3}",
                self.glyphs.len(),
                result.total_width
            );
        }
        self.layout = result;
        &self.layout
    }

    /// Attach or detach a glyph from the scene; detached glyphs are skipped by `tick`.
    pub fn set_glyph_mounted(&mut self, glyph: usize, mounted: bool) {
        if let Some(g) = self.glyphs.get_mut(glyph) {
            g.mounted = mounted;
        }
    }

    /// One frame: ambient light, pointer projection, glyph springs in row order, camera.
    pub fn tick(&mut self, input: FrameInput) -> FrameReport {
        let dt = if input.dt.is_finite() {
            input.dt.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };

        let flashed = self.ambient.advance(input.now);
        let pointer = self.pointer.project(input.pointer, &self.camera);

        let origin = self.config.origin;
        let proximity = self.config.proximity;
        let mut claims = FocusClaims::new();
        for (i, glyph) in self.glyphs.iter_mut().enumerate() {
            let Some(pos) = glyph.world_position(origin) else {
                continue;
            };
            let target = proximity.evaluate(pos, pointer);
            glyph.animator.update(target, dt);
            if target.has_focus {
                claims.push(FocusClaim {
                    glyph: i,
                    world_pos: pos,
                });
            }
        }

        let winner = last_writer_wins(&claims).copied();
        if let Some(claim) = winner {
            self.follow.on_focus(claim.world_pos);
            if self.last_winner != Some(claim.glyph) {
                log::debug!(
                    "[focus] glyph {} ({:?}) takes the camera",
                    claim.glyph,
                    self.glyphs[claim.glyph].ch
                );
                self.last_winner = Some(claim.glyph);
            }
        }

        let camera_position = self.follow.advance(dt);
        self.follow.apply(&mut self.camera);

        FrameReport {
            pointer,
            focused: claims.iter().map(|c| c.glyph).collect(),
            focus_winner: winner.map(|c| c.glyph),
            flashed,
            ambient_intensity: self.ambient.intensity(),
            camera_position,
        }
    }

    /// Instance data for every mounted glyph, in row order.
    pub fn instances(&self) -> Vec<GlyphInstance> {
        let origin = self.config.origin;
        self.glyphs
            .iter()
            .filter_map(|g| {
                let pos = g.world_position(origin)?;
                let c = g.color();
                Some(GlyphInstance {
                    translation: pos.to_array(),
                    focus: if g.has_focus() { 1.0 } else { 0.0 },
                    color: [c.x, c.y, c.z, 1.0],
                })
            })
            .collect()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.camera.view_projection()
    }
}
