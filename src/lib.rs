#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Classroom material constants and slider ranges.
pub mod constants;
/// Shared scalar and point types.
pub mod math;
/// Error type shared by every stage.
pub mod errors;
/// UI parameter records and their normalization.
pub mod params;
/// Closed-form physics evaluators.
pub mod physics;
/// Geometry mapping onto drawable primitives.
pub mod layout;
/// Layout geometry settings.
pub mod config;
/// Sampled curves for plots and exports.
pub mod sweep;
/// Frame-driven rectifier animation.
pub mod animation;
/// Normalize, evaluate and lay out in one call.
pub mod pipeline;

/// Common exports for lesson front-ends.
pub mod prelude;
