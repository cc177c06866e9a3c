//! Input and output waveform traces for the rectifier view.

use crate::config::LayoutConfig;
use crate::math::{p2, Scalar, P2};
use crate::physics::{RectifierResult, WaveSample};

use super::primitive::{Canvas, DrawablePrimitive, PointRole, StrokeRole};
use super::scale::LinearScale;

pub(super) fn rectifier_layout(
    result: &RectifierResult,
    canvas: Canvas,
    config: &LayoutConfig,
) -> Vec<DrawablePrimitive> {
    let left = config.wave_margin;
    let right = canvas.width() - config.wave_margin;
    let input_axis = config.wave_inset;
    let output_axis = canvas.height() - config.wave_inset;
    let last = result.window.len().saturating_sub(1).max(1) as Scalar;
    let x = LinearScale::new((0.0, last), (left, right));

    let trace = |centre: Scalar, value: fn(&WaveSample) -> Scalar| -> Vec<P2> {
        result
            .window
            .iter()
            .enumerate()
            .map(|(i, s)| p2(x.map(i as Scalar), centre - value(s) * config.wave_amplitude))
            .collect()
    };

    vec![
        DrawablePrimitive::segment(p2(left, input_axis), p2(right, input_axis), StrokeRole::Baseline),
        DrawablePrimitive::path(trace(input_axis, |s| s.input), StrokeRole::InputWave),
        DrawablePrimitive::segment(p2(left, output_axis), p2(right, output_axis), StrokeRole::Baseline),
        DrawablePrimitive::path(trace(output_axis, |s| s.output), StrokeRole::OutputWave),
        DrawablePrimitive::point(
            p2(left, input_axis - result.input * config.wave_amplitude),
            PointRole::InputMarker,
        ),
        DrawablePrimitive::point(
            p2(left, output_axis - result.output * config.wave_amplitude),
            PointRole::OutputMarker,
        ),
    ]
}
