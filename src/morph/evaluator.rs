use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::core::{Bounds, FrameIndex, FrameRange};
use crate::morph::config::{ElementMorphSpec, TransitionConfig};
use crate::morph::index::ElementIndex;

/// Where a frame sits relative to a transition window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionPhase {
    /// No config was supplied.
    Unconfigured,
    /// `current < trigger`.
    Before,
    /// `trigger <= current < trigger + durationFrames`.
    Active,
    /// `current >= trigger + durationFrames`. Configs with a non-positive duration go straight
    /// from `Before` to `After`.
    After,
}

impl TransitionPhase {
    fn of(relative_frame: i64, duration_frames: i64) -> Self {
        if relative_frame < 0 {
            Self::Before
        } else if relative_frame < duration_frames {
            Self::Active
        } else {
            Self::After
        }
    }
}

/// Transform origin hint for the compositor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransformOrigin {
    /// Top-left corner of the element box.
    #[serde(rename = "top left")]
    TopLeft,
    /// Center of the element box.
    #[serde(rename = "center center")]
    Center,
}

impl TransformOrigin {
    /// CSS `transform-origin` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::TopLeft => "top left",
            Self::Center => "center center",
        }
    }
}

/// Absolute per-frame state of one morphing element.
///
/// Position and size are absolute in canvas space; the element is taken out of its in-flow
/// layout while this state applies.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Interpolated opacity.
    pub opacity: f64,
    /// Always [`TransformOrigin::TopLeft`] for morphs.
    pub transform_origin: TransformOrigin,
    /// Always `false`: the value is already final for this frame and the compositor must not
    /// layer its own transition on top.
    pub compositor_transition: bool,
    /// Always `true`: content is clipped to the morphing box.
    pub clip_overflow: bool,
}

impl RenderState {
    /// Morph state for the given geometry and opacity, with the fixed compositor hints.
    pub fn morphed(bounds: Bounds, opacity: f64) -> Self {
        Self {
            left: bounds.x,
            top: bounds.y,
            width: bounds.width,
            height: bounds.height,
            opacity,
            transform_origin: TransformOrigin::TopLeft,
            compositor_transition: false,
            clip_overflow: true,
        }
    }

    /// Geometry as [`Bounds`].
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }

    /// Geometry as a `kurbo` rectangle.
    pub fn rect(&self) -> kurbo::Rect {
        self.bounds().to_rect()
    }
}

/// Outcome of evaluating a transition at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResult<'a> {
    /// `true` only inside the half-open window.
    pub is_active: bool,
    /// Position relative to the window.
    pub phase: TransitionPhase,
    /// Linear progress in `[0, 1]`; `None` when inactive.
    pub progress: Option<f64>,
    /// Progress after easing; `None` when inactive.
    pub eased_progress: Option<f64>,
    /// Per-element state. Empty when inactive. Ids absent here render at their base
    /// appearance.
    pub render_state_by_element_id: BTreeMap<&'a str, RenderState>,
}

impl TransitionResult<'_> {
    fn inactive(phase: TransitionPhase) -> Self {
        Self {
            is_active: false,
            phase,
            progress: None,
            eased_progress: None,
            render_state_by_element_id: BTreeMap::new(),
        }
    }

    /// State for `element_id`, or `None` if inactive or unknown.
    pub fn style_for(&self, element_id: &str) -> Option<RenderState> {
        self.render_state_by_element_id.get(element_id).copied()
    }

    /// Progress while active, `0.0` otherwise.
    pub fn morph_progress(&self) -> f64 {
        self.progress.unwrap_or(0.0)
    }
}

fn window_progress(
    duration_frames: i64,
    trigger_frame: FrameIndex,
    current_frame: FrameIndex,
) -> (TransitionPhase, Option<f64>) {
    let relative = current_frame.offset_from(trigger_frame);
    let phase = TransitionPhase::of(relative, duration_frames);
    if phase != TransitionPhase::Active {
        return (phase, None);
    }
    let progress = (relative as f64 / duration_frames as f64).clamp(0.0, 1.0);
    (phase, Some(progress))
}

fn morph_element(el: &ElementMorphSpec, eased: f64) -> RenderState {
    let bounds = Bounds::lerp(&el.from_bounds, &el.to_bounds, eased);
    let opacity = f64::lerp(&el.from_opacity(), &el.to_opacity(), eased);
    RenderState::morphed(bounds, opacity)
}

/// Evaluate `config` at `current_frame` for a window starting at `trigger_frame`.
///
/// Total: a missing config, a non-positive duration, unknown ids or unknown easing names all
/// degrade to an inactive, empty or linear result. Identical inputs give identical results, so
/// frames may be evaluated in any order.
pub fn evaluate(
    config: Option<&TransitionConfig>,
    trigger_frame: FrameIndex,
    current_frame: FrameIndex,
) -> TransitionResult<'_> {
    let Some(config) = config else {
        return TransitionResult::inactive(TransitionPhase::Unconfigured);
    };

    let (phase, progress) = window_progress(config.duration_frames, trigger_frame, current_frame);
    let Some(progress) = progress else {
        return TransitionResult::inactive(phase);
    };

    let ease = config.ease();
    let eased = ease.apply(progress);

    let mut states = BTreeMap::new();
    for el in &config.elements {
        states
            .entry(el.element_id.as_str())
            .or_insert_with(|| morph_element(el, eased));
    }

    tracing::trace!(
        transition_id = %config.transition_id,
        frame = current_frame.0,
        progress,
        eased,
        "morph active"
    );

    TransitionResult {
        is_active: true,
        phase,
        progress: Some(progress),
        eased_progress: Some(eased),
        render_state_by_element_id: states,
    }
}

/// A config paired with an `elementId` index for O(1) single-element lookups.
#[derive(Clone, Debug)]
pub struct PreparedTransition {
    config: TransitionConfig,
    index: ElementIndex,
}

impl PreparedTransition {
    /// Take ownership of `config` and index its elements.
    pub fn new(config: TransitionConfig) -> Self {
        let index = ElementIndex::build(&config.transition_id, &config.elements);
        Self { config, index }
    }

    /// The wrapped config.
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// The easing curve in effect.
    pub fn ease(&self) -> Ease {
        self.config.ease()
    }

    /// Number of distinct element ids.
    pub fn element_count(&self) -> usize {
        self.index.len()
    }

    /// Frames during which the transition is active, or `None` for a non-positive duration.
    pub fn active_window(&self, trigger_frame: FrameIndex) -> Option<FrameRange> {
        if self.config.duration_frames <= 0 {
            return None;
        }
        Some(FrameRange {
            start: trigger_frame,
            end: FrameIndex(trigger_frame.0.saturating_add(self.config.duration_frames)),
        })
    }

    /// Same as [`evaluate`] on the wrapped config.
    pub fn evaluate(
        &self,
        trigger_frame: FrameIndex,
        current_frame: FrameIndex,
    ) -> TransitionResult<'_> {
        evaluate(Some(&self.config), trigger_frame, current_frame)
    }

    /// State of a single element without evaluating the rest.
    pub fn style_for(
        &self,
        element_id: &str,
        trigger_frame: FrameIndex,
        current_frame: FrameIndex,
    ) -> Option<RenderState> {
        let el = self
            .index
            .get(element_id)
            .and_then(|i| self.config.elements.get(i))?;
        let (_, progress) =
            window_progress(self.config.duration_frames, trigger_frame, current_frame);
        let eased = self.ease().apply(progress?);
        Some(morph_element(el, eased))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/evaluator.rs"]
mod tests;
