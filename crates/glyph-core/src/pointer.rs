use crate::camera::Camera;
use glam::{Vec2, Vec3};

// Below this |dir . normal| the ray counts as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane `normal . p + offset = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

impl Plane {
    /// The z = 0 plane the glyph row lives on.
    pub const SCENE: Plane = Plane {
        normal: Vec3::Z,
        offset: 0.0,
    };
}

/// Distance along the ray to `plane`, or `None` if the ray is parallel to it or points away.
#[inline]
pub fn ray_plane(ray_origin: Vec3, ray_dir: Vec3, plane: Plane) -> Option<f32> {
    let denom = plane.normal.dot(ray_dir);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = -(plane.normal.dot(ray_origin) + plane.offset) / denom;
    (t >= 0.0 && t.is_finite()).then_some(t)
}

/// Pointer in normalized screen space and its projection onto the scene plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub normalized_screen: Vec2,
    pub world_point: Vec3,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            normalized_screen: Vec2::ZERO,
            world_point: Vec3::ZERO,
        }
    }
}

/// Projects the 2D pointer onto a fixed plane, keeping the last good hit.
#[derive(Clone, Debug)]
pub struct PointerProjector {
    plane: Plane,
    state: PointerState,
}

impl Default for PointerProjector {
    fn default() -> Self {
        Self::new(Plane::SCENE)
    }
}

impl PointerProjector {
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            state: PointerState::default(),
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn world_point(&self) -> Vec3 {
        self.state.world_point
    }

    /// Intersect the camera ray through `screen` with the plane.
    ///
    /// A degenerate ray leaves the previous world point in place.
    pub fn project(&mut self, screen: Vec2, camera: &Camera) -> Vec3 {
        let screen = if screen.is_finite() {
            screen.clamp(Vec2::NEG_ONE, Vec2::ONE)
        } else {
            self.state.normalized_screen
        };
        self.state.normalized_screen = screen;
        let hit = camera
            .ray_through(screen.x, screen.y)
            .and_then(|(origin, dir)| {
                ray_plane(origin, dir, self.plane).map(|t| origin + dir * t)
            })
            .filter(|p| p.is_finite());
        match hit {
            Some(p) => self.state.world_point = p,
            None => log::trace!("[pointer] no plane hit, keeping {:?}", self.state.world_point),
        }
        self.state.world_point
    }
}

/// Map a pixel position inside a `width` x `height` surface to normalized screen space (y up).
#[inline]
pub fn normalized_from_pixels(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(
        ((2.0 * px / w) - 1.0).clamp(-1.0, 1.0),
        (1.0 - (2.0 * py / h)).clamp(-1.0, 1.0),
    )
}
