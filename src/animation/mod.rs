/// CSS-style cubic-bezier timing curves.
pub mod bezier;
/// The morph easing table and its config-facing name.
pub mod ease;
/// Linear interpolation between endpoint values.
pub mod lerp;
