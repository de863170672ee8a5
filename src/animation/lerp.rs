use crate::foundation::core::Bounds;

/// Values that can be linearly interpolated between two endpoints.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. `t` is not clamped.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Bounds {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: <f64 as Lerp>::lerp(&a.x, &b.x, t),
            y: <f64 as Lerp>::lerp(&a.y, &b.y, t),
            width: <f64 as Lerp>::lerp(&a.width, &b.width, t),
            height: <f64 as Lerp>::lerp(&a.height, &b.height, t),
        }
    }
}
