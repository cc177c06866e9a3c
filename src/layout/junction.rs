//! p-n junction cross-section with bias battery and carrier scatter.

use rand::Rng;

use crate::config::LayoutConfig;
use crate::math::{p2, Scalar};
use crate::physics::JunctionResult;

use super::primitive::{Canvas, DrawablePrimitive, FillRole, PointRole, StrokeRole};
use super::uniform;

const BATTERY_WIDTH: Scalar = 40.0;
const BATTERY_HEIGHT: Scalar = 20.0;
const BATTERY_OFFSET: Scalar = 80.0;
const BATTERY_GAP: Scalar = 40.0;
const BATTERY_LIFT: Scalar = 60.0;

pub(super) fn junction_layout<R: Rng>(
    result: &JunctionResult,
    canvas: Canvas,
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<DrawablePrimitive> {
    let (w, h) = (canvas.width(), canvas.height());
    let jx = canvas.center_x();
    let margin = config.junction_margin;
    let mut out = Vec::with_capacity(8 + 2 * (result.majority_carriers + result.injected_minority));

    out.push(DrawablePrimitive::bar(p2(0.0, 0.0), jx, h, FillRole::PRegion));
    out.push(DrawablePrimitive::bar(p2(jx, 0.0), w - jx, h, FillRole::NRegion));
    out.push(DrawablePrimitive::bar(
        p2(jx - result.depletion_width / 2.0, 0.0),
        result.depletion_width,
        h,
        FillRole::Depletion,
    ));
    out.push(DrawablePrimitive::segment(p2(jx, 0.0), p2(jx, h), StrokeRole::Junction));

    if result.is_biased() {
        let battery_y = h - BATTERY_LIFT;
        let wire_y = battery_y + BATTERY_HEIGHT / 2.0;
        let left = jx - BATTERY_OFFSET;
        let right = jx + BATTERY_GAP;
        out.push(DrawablePrimitive::bar(
            p2(left, battery_y),
            BATTERY_WIDTH,
            BATTERY_HEIGHT,
            FillRole::Battery,
        ));
        out.push(DrawablePrimitive::bar(
            p2(right, battery_y),
            BATTERY_WIDTH,
            BATTERY_HEIGHT,
            FillRole::Battery,
        ));
        out.push(DrawablePrimitive::path(
            vec![p2(left, wire_y), p2(margin, wire_y), p2(margin, h / 2.0)],
            StrokeRole::Wire,
        ));
        out.push(DrawablePrimitive::path(
            vec![
                p2(right + BATTERY_WIDTH, wire_y),
                p2(w - margin, wire_y),
                p2(w - margin, h / 2.0),
            ],
            StrokeRole::Wire,
        ));
    }

    let (top, bottom) = (config.junction_vertical_margin, h - config.junction_vertical_margin);
    // each region is jx wide; an inset past its middle would cross the junction
    let inset = margin.min(jx / 2.0);
    for _ in 0..result.majority_carriers {
        let x = uniform(rng, jx + inset, w - inset);
        let y = uniform(rng, top, bottom);
        out.push(DrawablePrimitive::point(p2(x, y), PointRole::Electron));
    }
    for _ in 0..result.majority_carriers {
        let x = uniform(rng, inset, jx - inset);
        let y = uniform(rng, top, bottom);
        out.push(DrawablePrimitive::point(p2(x, y), PointRole::Hole));
    }

    // injected carriers cross over and appear as minorities on the far side
    let (near, far) = (config.minority_inset, config.minority_inset + config.minority_spread);
    let on_canvas = |x: Scalar| x.clamp(0.0, w);
    for _ in 0..result.injected_minority {
        let x = uniform(rng, on_canvas(jx - far), on_canvas(jx - near));
        let y = uniform(rng, top, bottom);
        out.push(DrawablePrimitive::point(p2(x, y), PointRole::MinorityElectron));
    }
    for _ in 0..result.injected_minority {
        let x = uniform(rng, on_canvas(jx + near), on_canvas(jx + far));
        let y = uniform(rng, top, bottom);
        out.push(DrawablePrimitive::point(p2(x, y), PointRole::MinorityHole));
    }
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::layout::primitive::{bar_with_fill, points_with_role};
    use crate::params::{BiasMode, JunctionSetup};
    use crate::physics::evaluate_junction;

    fn layout_on(width: Scalar, bias_mode: BiasMode, seed: u64) -> Vec<DrawablePrimitive> {
        let result = evaluate_junction(&JunctionSetup { bias_mode });
        let canvas = Canvas::new(width, 300.0).expect("canvas");
        let mut rng = StdRng::seed_from_u64(seed);
        junction_layout(&result, canvas, &LayoutConfig::default(), &mut rng)
    }

    fn layout_for(bias_mode: BiasMode, seed: u64) -> Vec<DrawablePrimitive> {
        layout_on(600.0, bias_mode, seed)
    }

    #[test]
    fn unbiased_carriers_stay_in_their_own_regions() {
        for width in [600.0, 30.0] {
            let jx = width / 2.0;
            for seed in 0..16 {
                let prims = layout_on(width, BiasMode::None, seed);
                let holes = points_with_role(&prims, PointRole::Hole);
                let electrons = points_with_role(&prims, PointRole::Electron);
                assert_eq!(holes.len(), 8);
                assert_eq!(electrons.len(), 8);
                assert!(holes.iter().all(|p| p.x >= 0.0 && p.x < jx), "width {width}");
                assert!(electrons.iter().all(|p| p.x > jx && p.x <= width), "width {width}");
                assert!(points_with_role(&prims, PointRole::MinorityElectron).is_empty());
                assert!(prims.iter().all(|p| p.stroke() != Some(StrokeRole::Wire)));
            }
        }
    }

    #[test]
    fn narrow_canvas_keeps_minorities_on_their_side() {
        let prims = layout_on(30.0, BiasMode::Forward, 5);
        let minority_electrons = points_with_role(&prims, PointRole::MinorityElectron);
        let minority_holes = points_with_role(&prims, PointRole::MinorityHole);
        assert_eq!(minority_electrons.len(), 3);
        assert!(minority_electrons.iter().all(|p| (0.0..=15.0).contains(&p.x)));
        assert!(minority_holes.iter().all(|p| (15.0..=30.0).contains(&p.x)));
    }

    #[test]
    fn forward_bias_narrows_depletion_and_injects_minorities() {
        let prims = layout_for(BiasMode::Forward, 7);
        match bar_with_fill(&prims, FillRole::Depletion) {
            Some(DrawablePrimitive::Bar { origin, width, .. }) => {
                assert_relative_eq!(*width, 20.0);
                assert_relative_eq!(origin.x, 290.0);
            }
            other => panic!("expected depletion bar, got {other:?}"),
        }
        assert_eq!(points_with_role(&prims, PointRole::Electron).len(), 12);
        let minority_electrons = points_with_role(&prims, PointRole::MinorityElectron);
        assert_eq!(minority_electrons.len(), 3);
        assert!(minority_electrons.iter().all(|p| (160.0..=240.0).contains(&p.x)));
        let minority_holes = points_with_role(&prims, PointRole::MinorityHole);
        assert!(minority_holes.iter().all(|p| (360.0..=440.0).contains(&p.x)));
        assert_eq!(
            prims.iter().filter(|p| p.fill() == Some(FillRole::Battery)).count(),
            2
        );
    }

    #[test]
    fn reverse_bias_widens_depletion() {
        let prims = layout_for(BiasMode::Reverse, 1);
        match bar_with_fill(&prims, FillRole::Depletion) {
            Some(DrawablePrimitive::Bar { width, .. }) => assert_relative_eq!(*width, 60.0),
            other => panic!("expected depletion bar, got {other:?}"),
        }
        assert_eq!(prims.iter().filter(|p| p.stroke() == Some(StrokeRole::Wire)).count(), 2);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        assert_eq!(layout_for(BiasMode::Forward, 42), layout_for(BiasMode::Forward, 42));
    }
}
