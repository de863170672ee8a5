/// Transition and element configuration, JSON loading and diagnostics.
pub mod config;
/// Frame evaluation: activation window, progress and per-element render state.
pub mod evaluator;
pub(crate) mod index;
/// Compositor overlay description for an active morph.
pub mod overlay;
/// Sequential and parallel sampling over frame ranges.
pub mod timeline;
