//! One-call path from UI parameters to drawable primitives.

use rand::Rng;
use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::errors::Result;
use crate::layout::{layout_with, Canvas, DrawablePrimitive};
use crate::params::{normalize, Experiment, ExperimentParameters};
use crate::physics::{evaluate, PhysicsResult};

/// Physics result together with its geometry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Evaluated physics.
    pub result: PhysicsResult,
    /// Primitives for the renderer, in drawing order.
    pub primitives: Vec<DrawablePrimitive>,
}

/// Normalizes, evaluates and lays out `raw` with the default geometry.
///
/// # Errors
///
/// Returns the first [`InvalidParameterError`](crate::errors::InvalidParameterError)
/// raised by any stage.
pub fn render<R: Rng>(raw: &ExperimentParameters, canvas: Canvas, rng: &mut R) -> Result<Rendered> {
    render_with(raw, canvas, &LayoutConfig::default(), rng)
}

/// Like [`render`] with explicit geometry.
///
/// # Errors
///
/// See [`render`].
pub fn render_with<R: Rng>(
    raw: &ExperimentParameters,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Rendered> {
    let experiment = normalize(raw)?;
    render_experiment(&experiment, canvas, config, rng)
}

/// Evaluates and lays out an already normalized experiment.
///
/// # Errors
///
/// Propagates evaluator domain errors.
pub fn render_experiment<R: Rng>(
    experiment: &Experiment,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<Rendered> {
    debug!(kind = %experiment.kind(), "rendering");
    let result = evaluate(experiment)?;
    let primitives = layout_with(&result, canvas, config, rng);
    trace!(count = primitives.len(), "primitives");
    Ok(Rendered { result, primitives })
}
