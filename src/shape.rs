//! Magnifying-glass geometry derived from a single icon size.

/// Geometric parameters of the magnifier icon, precomputed from `size`.
///
/// The icon is a ring (the lens) plus a diagonal handle toward the
/// bottom-right. All values are deterministic functions of `size`, so two
/// specs built from the same size test identically for every pixel.
///
/// Membership tests are hard booleans on squared distances; there is no
/// anti-aliasing and no square root in the pixel loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    center: (i64, i64),
    inner_radius_sq: i64,
    outer_radius_sq: i64,
    handle_start: (i64, i64),
    handle_delta: (i64, i64),
    handle_len_sq: i64,
    handle_half_thickness_sq: i64,
}

impl ShapeSpec {
    /// Derives the geometry for a `size x size` canvas.
    ///
    /// The lens sits slightly above center (`size / 10` up), with radius
    /// `size / 4` and stroke thickness `size / 15`, floored to 1 so tiny
    /// canvases never degenerate to a zero-width stroke. The handle runs
    /// along the (1, 1) diagonal from 0.7 to 1.4 lens radii out of center;
    /// its endpoints truncate toward zero rather than round, matching the
    /// shipped icon shape exactly.
    pub fn from_size(size: u32) -> Self {
        let size = i64::from(size);
        let center = (size / 2, size / 2 - size / 10);
        let circle_radius = size / 4;
        let thickness = (size / 15).max(1);

        let outer_radius = circle_radius + thickness / 2;
        let inner_radius = circle_radius - thickness / 2;

        let near = (circle_radius as f64 * 0.7) as i64;
        let far = (circle_radius as f64 * 1.4) as i64;
        let handle_start = (center.0 + near, center.1 + near);
        let handle_delta = (far - near, far - near);
        let handle_half_thickness = (thickness / 2).max(1);

        Self {
            center,
            inner_radius_sq: inner_radius * inner_radius,
            outer_radius_sq: outer_radius * outer_radius,
            handle_start,
            handle_delta,
            handle_len_sq: handle_delta.0 * handle_delta.0 + handle_delta.1 * handle_delta.1,
            handle_half_thickness_sq: handle_half_thickness * handle_half_thickness,
        }
    }

    /// Center of the lens.
    pub fn center(&self) -> (i64, i64) {
        self.center
    }

    /// True if `(x, y)` falls inside the lens annulus.
    pub fn contains_ring(&self, x: i64, y: i64) -> bool {
        let dx = x - self.center.0;
        let dy = y - self.center.1;
        let dist_sq = dx * dx + dy * dy;
        self.inner_radius_sq <= dist_sq && dist_sq <= self.outer_radius_sq
    }

    /// True if `(x, y)` falls within half a stroke width of the handle
    /// segment.
    ///
    /// The point is projected onto the segment with the projection parameter
    /// clamped to `[0, 1]`, so the test is against the closed segment, not
    /// the infinite line through it.
    pub fn contains_handle(&self, x: i64, y: i64) -> bool {
        if self.handle_len_sq == 0 {
            return false;
        }

        let (sx, sy) = self.handle_start;
        let (dx, dy) = self.handle_delta;
        let t = ((x - sx) * dx + (y - sy) * dy) as f64 / self.handle_len_sq as f64;
        let t = t.clamp(0.0, 1.0);

        let px = sx as f64 + t * dx as f64;
        let py = sy as f64 + t * dy as f64;
        let ex = x as f64 - px;
        let ey = y as f64 - py;
        ex * ex + ey * ey <= self.handle_half_thickness_sq as f64
    }

    /// True if `(x, y)` belongs to the icon foreground (ring or handle).
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.contains_ring(x, y) || self.contains_handle(x, y)
    }
}
