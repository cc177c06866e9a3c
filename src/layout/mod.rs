//! Geometry mapping from physics results to drawable primitives.
//!
//! Every layout is a pure function of the result, the canvas, the
//! [`LayoutConfig`] and the caller's random source. Seeding the source makes
//! the scatter of carriers reproducible between frames or test runs.

mod bands;
mod charts;
mod diode;
mod junction;
mod lattice;
pub mod primitive;
mod rectifier;
pub mod scale;

pub use primitive::{
    bar_with_fill, points_with_role, AtomKind, Canvas, DrawablePrimitive, FillRole, PointRole,
    StrokeRole,
};
pub use scale::{LinearScale, LogScale};

use rand::Rng;
use tracing::trace;

use crate::config::LayoutConfig;
use crate::math::Scalar;
use crate::physics::PhysicsResult;

/// Lays out `result` on `canvas` with the default geometry.
#[must_use]
pub fn layout<R: Rng>(result: &PhysicsResult, canvas: Canvas, rng: &mut R) -> Vec<DrawablePrimitive> {
    layout_with(result, canvas, &LayoutConfig::default(), rng)
}

/// Lays out `result` on `canvas` with explicit geometry.
///
/// Diode, rectifier and band layouts are deterministic; lattice and junction
/// layouts draw carrier positions from `rng`.
#[must_use]
pub fn layout_with<R: Rng>(
    result: &PhysicsResult,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<DrawablePrimitive> {
    let primitives = match result {
        PhysicsResult::Diode(r) => diode::diode_layout(r, canvas, config),
        PhysicsResult::Rectifier(r) => rectifier::rectifier_layout(r, canvas, config),
        PhysicsResult::Bands(r) => bands::band_layout(r, canvas),
        PhysicsResult::Doping(r) => lattice::doping_layout(r, canvas, config, rng),
        PhysicsResult::Junction(r) => junction::junction_layout(r, canvas, config, rng),
        PhysicsResult::Intrinsic(r) => lattice::intrinsic_layout(r, canvas, config, rng),
    };
    trace!(kind = %result.kind(), count = primitives.len(), "layout");
    primitives
}

/// Bar chart of the lab readouts for doping and intrinsic results.
///
/// Returns `None` for experiments without a chart view.
#[must_use]
pub fn chart(result: &PhysicsResult, canvas: Canvas, config: &LayoutConfig) -> Option<Vec<DrawablePrimitive>> {
    match result {
        PhysicsResult::Doping(r) => Some(charts::doping_chart(r, canvas, config)),
        PhysicsResult::Intrinsic(r) => Some(charts::intrinsic_chart(r, canvas, config)),
        _ => None,
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the interval is empty.
pub(crate) fn uniform<R: Rng>(rng: &mut R, lo: Scalar, hi: Scalar) -> Scalar {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::params::{BandMaterial, BandSetup, BiasMode, JunctionSetup, ThermalState};
    use crate::physics::{evaluate_bands, evaluate_junction};

    #[test]
    fn uniform_tolerates_empty_interval() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
        let x = uniform(&mut rng, 1.0, 2.0);
        assert!((1.0..2.0).contains(&x));
    }

    #[test]
    fn tiny_canvas_still_lays_out_junction() {
        let result = PhysicsResult::Junction(evaluate_junction(&JunctionSetup {
            bias_mode: BiasMode::Forward,
        }));
        let canvas = Canvas::new(10.0, 10.0).expect("canvas");
        let mut rng = StdRng::seed_from_u64(1);
        let prims = layout(&result, canvas, &mut rng);
        assert!(!prims.is_empty());
    }

    #[test]
    fn chart_only_for_lab_experiments() {
        let result = PhysicsResult::Bands(evaluate_bands(&BandSetup {
            band_material: BandMaterial::Metal,
            thermal_state: ThermalState::Low,
        }));
        let canvas = Canvas::new(300.0, 300.0).expect("canvas");
        assert!(chart(&result, canvas, &LayoutConfig::default()).is_none());
    }
}
