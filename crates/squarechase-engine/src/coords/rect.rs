use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Unit-square corners in the order quad emitters use:
    /// top-left, bottom-left, top-right, bottom-right.
    ///
    /// Paired with the indices `[0, 1, 2, 1, 3, 2]` this yields two triangles.
    pub const UNIT_CORNERS: [Vec2; 4] = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
    ];

    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.pos.x && p.y >= self.pos.y && p.x < max.x && p.y < max.y
    }

    /// Corners of this rectangle in [`UNIT_CORNERS`](Self::UNIT_CORNERS) order.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        Self::UNIT_CORNERS.map(|u| u.scale(self.size) + self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(10.0, 10.0, 25.0, 25.0).contains(Vec2::new(20.0, 30.0)));
    }

    #[test]
    fn contains_min_edge_is_inclusive() {
        assert!(r(10.0, 10.0, 25.0, 25.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_max_edge_is_exclusive() {
        assert!(!r(10.0, 10.0, 25.0, 25.0).contains(Vec2::new(35.0, 20.0)));
        assert!(!r(10.0, 10.0, 25.0, 25.0).contains(Vec2::new(20.0, 35.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let e = r(5.0, 5.0, 0.0, 10.0);
        assert!(e.is_empty());
        assert!(!e.contains(Vec2::new(5.0, 6.0)));
    }

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn corners_follow_unit_order() {
        let c = r(1.0, 2.0, 10.0, 20.0).corners();
        assert_eq!(c[0], Vec2::new(1.0, 2.0));
        assert_eq!(c[1], Vec2::new(1.0, 22.0));
        assert_eq!(c[2], Vec2::new(11.0, 2.0));
        assert_eq!(c[3], Vec2::new(11.0, 22.0));
    }
}
