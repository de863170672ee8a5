use crate::animation::bezier::CubicBezier;
use crate::animation::lerp::Lerp;
use crate::morph::evaluator::TransformOrigin;

/// Which side of a slide transition is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationDirection {
    /// The incoming slide.
    Entering,
    /// The outgoing slide.
    Exiting,
}

/// Whole-slide state for one side of a transition at one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationState {
    /// Slide opacity.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Always [`TransformOrigin::Center`].
    pub transform_origin: TransformOrigin,
}

/// Map a sub-range of progress onto an output range through a bezier curve.
///
/// Progress outside `input` clamps to the nearest end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Progress range the tween runs over.
    pub input: [f64; 2],
    /// Values at the start and end of `input`.
    pub output: [f64; 2],
    /// Timing curve applied to normalized input.
    pub curve: CubicBezier,
}

impl Tween {
    /// Value at `progress`.
    pub fn sample(&self, progress: f64) -> f64 {
        let [i0, i1] = self.input;
        let span = i1 - i0;
        let t = if span == 0.0 {
            if progress < i0 { 0.0 } else { 1.0 }
        } else {
            ((progress - i0) / span).clamp(0.0, 1.0)
        };
        f64::lerp(&self.output[0], &self.output[1], self.curve.apply(t))
    }
}

/// Cross-fade with a slight scale used when slides change.
///
/// The incoming slide fades in over the first 40% with a gentle overshooting scale-up. The
/// outgoing slide holds, then fades and grows slightly over the second half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePresentation {
    /// Incoming slide opacity.
    pub entering_opacity: Tween,
    /// Incoming slide scale.
    pub entering_scale: Tween,
    /// Outgoing slide opacity.
    pub exiting_opacity: Tween,
    /// Outgoing slide scale.
    pub exiting_scale: Tween,
}

impl Default for SlidePresentation {
    fn default() -> Self {
        Self {
            entering_opacity: Tween {
                input: [0.0, 0.4],
                output: [0.0, 1.0],
                curve: CubicBezier::from_points(0.25, 0.1, 0.25, 1.0),
            },
            entering_scale: Tween {
                input: [0.0, 0.5],
                output: [0.98, 1.0],
                curve: CubicBezier::from_points(0.34, 1.56, 0.64, 1.0),
            },
            exiting_opacity: Tween {
                input: [0.5, 1.0],
                output: [1.0, 0.0],
                curve: CubicBezier::from_points(0.42, 0.0, 0.58, 1.0),
            },
            exiting_scale: Tween {
                input: [0.5, 1.0],
                output: [1.0, 1.02],
                curve: CubicBezier::from_points(0.42, 0.0, 1.0, 1.0),
            },
        }
    }
}

impl SlidePresentation {
    /// State of one side of the transition at `progress` in `[0, 1]`.
    pub fn sample(&self, direction: PresentationDirection, progress: f64) -> PresentationState {
        let (opacity, scale) = match direction {
            PresentationDirection::Entering => (&self.entering_opacity, &self.entering_scale),
            PresentationDirection::Exiting => (&self.exiting_opacity, &self.exiting_scale),
        };
        PresentationState {
            opacity: opacity.sample(progress),
            scale: scale.sample(progress),
            transform_origin: TransformOrigin::Center,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/presentation.rs"]
mod tests;
