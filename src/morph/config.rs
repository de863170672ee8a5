use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::animation::ease::{Ease, Easing};
use crate::foundation::core::Bounds;
use crate::foundation::error::{MorphError, MorphResult};

/// Morph transition between one slide pair.
///
/// Built once by the caller before the pair is rendered and never mutated afterwards. The JSON
/// form uses camelCase keys (`transitionId`, `durationFrames`, `elements`, `easing`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionConfig {
    /// Slide pair identifier, e.g. `case_overview_to_question_summary`. Only used for keying and
    /// diagnostics.
    pub transition_id: String,
    /// Length of the transition window in frames. Non-positive values never activate.
    pub duration_frames: i64,
    /// Easing curve. Absent means ease-in/out; any present value that is not a table name,
    /// `null` included, behaves as linear.
    #[serde(
        default,
        deserialize_with = "present_easing",
        skip_serializing_if = "Option::is_none"
    )]
    pub easing: Option<Easing>,
    /// Elements that morph between the two slides.
    #[serde(default)]
    pub elements: Vec<ElementMorphSpec>,
}

/// Start and end geometry/style for one named element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMorphSpec {
    /// Join key between config and the caller's element lookup.
    pub element_id: String,
    /// Position/size on the previous slide.
    pub from_bounds: Bounds,
    /// Position/size on the current slide.
    pub to_bounds: Bounds,
    /// Style at the start of the morph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_style: Option<StyleEndpoint>,
    /// Style at the end of the morph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_style: Option<StyleEndpoint>,
}

/// The subset of a style record the morph interprets.
///
/// Other keys present in JSON are ignored. Opacity is only taken from JSON numbers; anything
/// else (strings, null) counts as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleEndpoint {
    /// Endpoint opacity. Expected in `[0, 1]` but not clamped.
    #[serde(
        default,
        deserialize_with = "numeric_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<f64>,
}

fn numeric_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(v.as_f64())
}

// Only a missing key maps to `None`; `default` covers that case before this runs.
fn present_easing<'de, D>(deserializer: D) -> Result<Option<Easing>, D::Error>
where
    D: Deserializer<'de>,
{
    Easing::deserialize(deserializer).map(Some)
}

impl StyleEndpoint {
    /// Style with an explicit opacity.
    pub fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
        }
    }
}

impl ElementMorphSpec {
    /// Element with geometry only; both opacities default to 1.
    pub fn new(element_id: impl Into<String>, from_bounds: Bounds, to_bounds: Bounds) -> Self {
        Self {
            element_id: element_id.into(),
            from_bounds,
            to_bounds,
            from_style: None,
            to_style: None,
        }
    }

    /// Set both endpoint opacities.
    pub fn with_opacity(mut self, from: f64, to: f64) -> Self {
        self.from_style = Some(StyleEndpoint::with_opacity(from));
        self.to_style = Some(StyleEndpoint::with_opacity(to));
        self
    }

    /// Start opacity, defaulting to fully opaque.
    pub fn from_opacity(&self) -> f64 {
        endpoint_opacity(self.from_style.as_ref())
    }

    /// End opacity, defaulting to fully opaque.
    pub fn to_opacity(&self) -> f64 {
        endpoint_opacity(self.to_style.as_ref())
    }
}

fn endpoint_opacity(style: Option<&StyleEndpoint>) -> f64 {
    style.and_then(|s| s.opacity).unwrap_or(1.0)
}

/// Input-quality problems a config can carry.
///
/// None of these stop evaluation; they are reported by [`TransitionConfig::diagnose`] so
/// callers can catch authoring mistakes early.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigIssue {
    /// `durationFrames <= 0`; the transition never activates.
    NonPositiveDuration {
        /// The configured duration.
        duration_frames: i64,
    },
    /// An element id appears more than once; only the first occurrence is used.
    DuplicateElementId {
        /// The repeated id.
        element_id: String,
    },
    /// An element has a NaN or infinite bound.
    NonFiniteBounds {
        /// The offending element.
        element_id: String,
    },
    /// The config has no elements; an active window renders nothing.
    EmptyElements,
    /// The easing string is not in the table; it behaves as linear.
    UnrecognizedEasing {
        /// The easing string as written.
        name: String,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDuration { duration_frames } => {
                write!(f, "durationFrames must be > 0 (got {duration_frames})")
            }
            Self::DuplicateElementId { element_id } => {
                write!(f, "duplicate elementId '{element_id}'")
            }
            Self::NonFiniteBounds { element_id } => {
                write!(f, "element '{element_id}' has non-finite bounds")
            }
            Self::EmptyElements => f.write_str("no elements to morph"),
            Self::UnrecognizedEasing { name } => {
                write!(f, "unknown easing '{name}' (treated as linear)")
            }
        }
    }
}

impl TransitionConfig {
    /// Config with the default easing and no elements.
    pub fn new(transition_id: impl Into<String>, duration_frames: i64) -> Self {
        Self {
            transition_id: transition_id.into(),
            duration_frames,
            easing: None,
            elements: Vec::new(),
        }
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Append an element.
    pub fn with_element(mut self, element: ElementMorphSpec) -> Self {
        self.elements.push(element);
        self
    }

    /// The curve this config evaluates with.
    pub fn ease(&self) -> Ease {
        Easing::resolve(self.easing.as_ref())
    }

    /// First element with `element_id`, by linear scan.
    pub fn element(&self, element_id: &str) -> Option<&ElementMorphSpec> {
        self.elements.iter().find(|el| el.element_id == element_id)
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| MorphError::serde(format!("parse transition config JSON: {e}")))?;
        cfg.log_loaded();
        Ok(cfg)
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MorphResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| MorphError::serde(format!("parse transition config JSON: {e}")))?;
        cfg.log_loaded();
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MorphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MorphError::validation(format!(
                "open transition config JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> MorphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MorphError::serde(format!("serialize transition config: {e}")))
    }

    fn log_loaded(&self) {
        tracing::debug!(
            transition_id = %self.transition_id,
            duration_frames = self.duration_frames,
            elements = self.elements.len(),
            ease = self.ease().name(),
            "loaded transition config"
        );
    }

    /// Report input-quality problems without rejecting the config.
    pub fn diagnose(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.duration_frames <= 0 {
            issues.push(ConfigIssue::NonPositiveDuration {
                duration_frames: self.duration_frames,
            });
        }

        if let Some(Easing::Unrecognized(name)) = &self.easing {
            issues.push(ConfigIssue::UnrecognizedEasing { name: name.clone() });
        }

        if self.elements.is_empty() {
            issues.push(ConfigIssue::EmptyElements);
        }

        let mut seen = HashSet::with_capacity(self.elements.len());
        let mut reported = HashSet::new();
        for el in &self.elements {
            if !seen.insert(el.element_id.as_str()) && reported.insert(el.element_id.as_str()) {
                issues.push(ConfigIssue::DuplicateElementId {
                    element_id: el.element_id.clone(),
                });
            }
            if !el.from_bounds.is_finite() || !el.to_bounds.is_finite() {
                issues.push(ConfigIssue::NonFiniteBounds {
                    element_id: el.element_id.clone(),
                });
            }
        }

        issues
    }

    /// Strict check: fail on the first issue [`Self::diagnose`] reports.
    pub fn validate(&self) -> MorphResult<()> {
        match self.diagnose().into_iter().next() {
            None => Ok(()),
            Some(issue) => Err(MorphError::validation(format!(
                "transition '{}': {issue}",
                self.transition_id
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/config.rs"]
mod tests;
