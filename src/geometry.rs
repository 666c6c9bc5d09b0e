/// Integer 2D vector used for per-tick movement deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: i32) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Axis-aligned rectangle in arena pixels. Width and height are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0);
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Same size, shifted by `delta`.
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }

    /// Half-open point test, used for mouse hits on buttons.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// True when the rectangles overlap. Touching edges count as overlap.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x <= b.right() && b.x <= a.right() && a.y <= b.bottom() && b.y <= a.bottom()
}

/// True when `inner` lies entirely within `outer` (shared edges allowed).
#[inline]
pub fn contains(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

/// Move `rect` the minimum distance needed to lie inside `bounds`.
///
/// Size is preserved. On an axis where `rect` is larger than `bounds`
/// it is centered instead.
pub fn clamp_into(rect: Rect, bounds: &Rect) -> Rect {
    fn clamp_axis(pos: i32, len: i32, min: i32, span: i32) -> i32 {
        if len >= span {
            min + (span - len) / 2
        } else {
            pos.max(min).min(min + span - len)
        }
    }

    Rect {
        x: clamp_axis(rect.x, rect.w, bounds.x, bounds.w),
        y: clamp_axis(rect.y, rect.h, bounds.y, bounds.h),
        ..rect
    }
}
