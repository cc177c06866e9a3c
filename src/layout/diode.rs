//! Current-voltage plot with the diode's operating point.

use crate::config::LayoutConfig;
use crate::math::{p2, Scalar};
use crate::physics::{DiodeResult, KNEE_CURRENT};
use crate::sweep::diode_characteristic;

use super::primitive::{Canvas, DrawablePrimitive, PointRole, StrokeRole};
use super::scale::LinearScale;

/// Plot frame of the V-I graph.
struct IvFrame {
    origin_x: Scalar,
    origin_y: Scalar,
    top: Scalar,
    right: Scalar,
    x: LinearScale,
    y: LinearScale,
    ticks: LinearScale,
}

impl IvFrame {
    fn new(canvas: Canvas, config: &LayoutConfig) -> Self {
        let pad = config.diode_padding;
        let origin_x = pad;
        let origin_y = canvas.height() - pad;
        let right = canvas.width() - pad;
        let top = pad;
        let span = config.diode_current_span;
        Self {
            origin_x,
            origin_y,
            top,
            right,
            x: LinearScale::new(config.diode_voltage_span, (origin_x, right)).clamped(),
            // the curve sits one knee current above the axis so the reverse branch stays visible
            y: LinearScale::new((-KNEE_CURRENT, span - KNEE_CURRENT), (origin_y, top)).clamped(),
            ticks: LinearScale::new((0.0, span), (origin_y, top)),
        }
    }
}

pub(super) fn diode_layout(
    result: &DiodeResult,
    canvas: Canvas,
    config: &LayoutConfig,
) -> Vec<DrawablePrimitive> {
    let frame = IvFrame::new(canvas, config);
    let mut out = Vec::with_capacity(16);

    out.push(DrawablePrimitive::segment(
        p2(frame.origin_x, frame.top),
        p2(frame.origin_x, frame.origin_y),
        StrokeRole::Axis,
    ));
    out.push(DrawablePrimitive::segment(
        p2(frame.origin_x, frame.origin_y),
        p2(frame.right, frame.origin_y),
        StrokeRole::Axis,
    ));
    for &v in &config.diode_voltage_ticks {
        let x = frame.x.map(v);
        out.push(DrawablePrimitive::segment(
            p2(x, frame.origin_y),
            p2(x, frame.origin_y + 5.0),
            StrokeRole::Tick,
        ));
    }
    for &i in &config.diode_current_ticks {
        let y = frame.ticks.map(i);
        out.push(DrawablePrimitive::segment(
            p2(frame.origin_x - 5.0, y),
            p2(frame.origin_x, y),
            StrokeRole::Tick,
        ));
    }

    let threshold_x = frame.x.map(result.threshold);
    out.push(DrawablePrimitive::segment(
        p2(threshold_x, frame.origin_y),
        p2(threshold_x, frame.top),
        StrokeRole::Guide,
    ));

    let curve = diode_characteristic(
        result.material,
        config.diode_voltage_span,
        config.diode_sample_count(),
    )
    .into_iter()
    .map(|pt| p2(frame.x.map(pt.voltage), frame.y.map(pt.current)))
    .collect();
    out.push(DrawablePrimitive::path(curve, StrokeRole::Curve));

    let op = p2(frame.x.map(result.voltage), frame.y.map(result.current_amps));
    out.push(DrawablePrimitive::segment(p2(op.x, frame.origin_y), op, StrokeRole::Guide));
    out.push(DrawablePrimitive::segment(p2(frame.origin_x, op.y), op, StrokeRole::Guide));
    out.push(DrawablePrimitive::point(op, PointRole::OperatingPoint));
    out
}
