use std::collections::BTreeSet;

use crate::foundation::core::Canvas;
use crate::morph::config::TransitionConfig;
use crate::morph::evaluator::{RenderState, TransitionResult};

/// Stacking order of the morph overlay; above every slide layer.
pub const OVERLAY_Z_INDEX: i32 = 999;

/// Full-canvas layer the compositor draws above both slides while a morph is active.
///
/// The layer never intercepts pointer/input events, so slide content underneath keeps its
/// interactivity in preview players.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphOverlay<'a> {
    /// Canvas the overlay covers, anchored at `(0, 0)`.
    pub canvas: Canvas,
    /// Always [`OVERLAY_Z_INDEX`].
    pub z_index: i32,
    /// Always `false`.
    pub intercepts_input: bool,
    /// Morphing elements in paint order (config order, first occurrence per id).
    pub layers: Vec<OverlayLayer<'a>>,
}

/// One element drawn by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayer<'a> {
    /// Element to draw; the caller renders its content.
    pub element_id: &'a str,
    /// Where and how to draw it this frame.
    pub state: RenderState,
}

impl<'a> MorphOverlay<'a> {
    /// Overlay for `result`, or `None` when the transition is inactive.
    pub fn build(
        config: &'a TransitionConfig,
        result: &TransitionResult<'_>,
        canvas: Canvas,
    ) -> Option<Self> {
        if !result.is_active {
            return None;
        }

        let mut seen = BTreeSet::new();
        let layers = config
            .elements
            .iter()
            .filter(|el| seen.insert(el.element_id.as_str()))
            .filter_map(|el| {
                let state = result.style_for(&el.element_id)?;
                Some(OverlayLayer {
                    element_id: el.element_id.as_str(),
                    state,
                })
            })
            .collect();

        Some(Self {
            canvas,
            z_index: OVERLAY_Z_INDEX,
            intercepts_input: false,
            layers,
        })
    }

    /// Look up the layer for `element_id`.
    pub fn layer(&self, element_id: &str) -> Option<&OverlayLayer<'a>> {
        self.layers.iter().find(|l| l.element_id == element_id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/overlay.rs"]
mod tests;
