use crate::foundation::error::{MorphError, MorphResult};

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing curve with fixed endpoints `(0,0)` and `(1,1)`.
///
/// `y` control points may leave `[0, 1]`, which produces overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Validated constructor: all points finite, `x1`/`x2` inside `[0, 1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> MorphResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(MorphError::validation(
                "cubic-bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(MorphError::validation(
                "cubic-bezier x control points must be in [0, 1]",
            ));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub(crate) const fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control points as `[x1, y1, x2, y2]`.
    pub fn points(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Eased value for input `x`. Inputs outside `(0, 1)` snap to the endpoints.
    pub fn apply(self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        sample_curve(self.y1, self.y2, self.solve_t(x))
    }

    // Newton-Raphson first, bisection when it stalls; fixed iteration counts.
    fn solve_t(self, x: f64) -> f64 {
        const EPS: f64 = 1e-9;

        let mut t = x;
        for _ in 0..8 {
            let x_t = sample_curve(self.x1, self.x2, t) - x;
            if x_t.abs() < EPS {
                return t;
            }
            let d = sample_curve_derivative(self.x1, self.x2, t);
            if d.abs() < 1e-7 {
                break;
            }
            t = (t - x_t / d).clamp(0.0, 1.0);
        }

        // Bisection continues from the Newton estimate.
        let mut lo = 0.0;
        let mut hi = 1.0;
        for _ in 0..48 {
            let x_t = sample_curve(self.x1, self.x2, t);
            if (x_t - x).abs() < EPS {
                break;
            }
            if x_t < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
}

fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
    let omt = 1.0 - t;
    3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bezier.rs"]
mod tests;
