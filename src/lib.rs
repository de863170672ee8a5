//! Slidemorph computes morph transitions between slides of a programmatic video.
//!
//! Given a frame index and a declarative [`TransitionConfig`], the evaluator decides whether the
//! transition window is active and produces the interpolated position, size and opacity of each
//! named element. Evaluation is a pure function of its inputs, so renderers can seek and scrub
//! frames in any order.
//!
//! - Load or build a [`TransitionConfig`]
//! - Call [`evaluate`] per frame, or wrap the config in a [`PreparedTransition`]
//! - Hand the [`TransitionResult`] (or a [`MorphOverlay`]) to the compositor
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves and interpolation helpers.
pub mod animation;
mod foundation;
/// Morph configuration, evaluation and overlay composition.
pub mod morph;
/// Whole-slide entering/exiting presentation curves.
pub mod presentation;

pub use crate::animation::bezier::CubicBezier;
pub use crate::animation::ease::{Ease, Easing};
pub use crate::foundation::core::{Bounds, Canvas, FrameIndex, FrameRange};
pub use crate::foundation::error::{MorphError, MorphResult};
pub use crate::morph::config::{ConfigIssue, ElementMorphSpec, StyleEndpoint, TransitionConfig};
pub use crate::morph::evaluator::{
    PreparedTransition, RenderState, TransformOrigin, TransitionPhase, TransitionResult, evaluate,
};
pub use crate::morph::overlay::{MorphOverlay, OVERLAY_Z_INDEX, OverlayLayer};
pub use crate::morph::timeline::{FrameSample, SampleOpts, sample_range};
pub use crate::presentation::{
    PresentationDirection, PresentationState, SlidePresentation, Tween,
};
