use crate::coords::{Vec2, Viewport};

/// 2D orthographic camera: the rectangle of logical space shown on screen.
///
/// `center` and `size` are in logical pixels. The visible area is
/// `center - size / 2 .. center + size / 2`, with +Y pointing down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub center: Vec2,
    pub size: Vec2,
}

impl Camera {
    #[inline]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Camera showing exactly `viewport`, origin at its top-left corner.
    #[inline]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let size = viewport.size();
        Self::new(size * 0.5, size)
    }

    /// Column-major projection matrix mapping the camera rectangle onto clip
    /// space `[-1, 1]²` (top edge → +1).
    pub fn transform(&self) -> [[f32; 4]; 4] {
        let sx = 2.0 / self.size.x.max(f32::EPSILON);
        let sy = -2.0 / self.size.y.max(f32::EPSILON);
        [
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-self.center.x * sx, -self.center.y * sy, 0.0, 1.0],
        ]
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::splat(2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(m: &[[f32; 4]; 4], p: Vec2) -> (f32, f32) {
        (
            m[0][0] * p.x + m[1][0] * p.y + m[3][0],
            m[0][1] * p.x + m[1][1] * p.y + m[3][1],
        )
    }

    #[test]
    fn viewport_corners_map_to_clip_corners() {
        let cam = Camera::from_viewport(Viewport::new(800.0, 600.0));
        let m = cam.transform();
        assert_eq!(apply(&m, Vec2::new(0.0, 0.0)), (-1.0, 1.0));
        assert_eq!(apply(&m, Vec2::new(800.0, 600.0)), (1.0, -1.0));
        assert_eq!(apply(&m, Vec2::new(400.0, 300.0)), (0.0, 0.0));
    }

    #[test]
    fn center_maps_to_origin() {
        let cam = Camera::new(Vec2::new(-50.0, 20.0), Vec2::new(10.0, 10.0));
        assert_eq!(apply(&cam.transform(), cam.center), (0.0, 0.0));
    }

    #[test]
    fn default_camera_is_identity_like() {
        let m = Camera::default().transform();
        assert_eq!(apply(&m, Vec2::new(1.0, 1.0)), (1.0, -1.0));
    }
}
