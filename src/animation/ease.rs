use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Easing functions used to map normalized morph progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    EaseOut,
    /// Quadratic ease-in/out. Used when a config omits its easing.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Every easing in the table.
    pub const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }

    /// Config-facing name (`linear`, `easeIn`, `easeOut`, `easeInOut`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    /// Exact, case-sensitive name match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Table lookup by name. Unrecognised names fall back to [`Ease::Linear`].
    pub fn lookup(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::Linear)
    }
}

/// Easing as written in a transition config.
///
/// Unrecognised names are kept verbatim so diagnostics can report them. They still resolve to
/// [`Ease::Linear`]. This is a different fallback from an absent easing field, which resolves
/// to [`Ease::EaseInOut`] (see [`Easing::resolve`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// A name from the easing table.
    Known(Ease),
    /// Any other value: strings verbatim, other JSON values as their JSON text.
    Unrecognized(String),
}

impl Easing {
    /// Classify a config string.
    pub fn parse(name: &str) -> Self {
        match Ease::from_name(name) {
            Some(e) => Self::Known(e),
            None => Self::Unrecognized(name.to_owned()),
        }
    }

    /// The curve this value selects.
    pub fn ease(&self) -> Ease {
        match self {
            Self::Known(e) => *e,
            Self::Unrecognized(name) => Ease::lookup(name),
        }
    }

    /// Resolve an optional config field: absent means ease-in/out, present goes through the
    /// table lookup.
    pub fn resolve(field: Option<&Easing>) -> Ease {
        field.map_or(Ease::EaseInOut, Easing::ease)
    }

    /// The string as it appears in the config.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(e) => e.name(),
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<Ease> for Easing {
    fn from(e: Ease) -> Self {
        Self::Known(e)
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string values are kept as their JSON text and resolve to linear.
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Self::parse(&s),
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
