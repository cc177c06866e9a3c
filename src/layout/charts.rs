//! Bar charts for the virtual lab readouts.

use crate::config::LayoutConfig;
use crate::constants::{DOPING_DECADE_OFFSET, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::math::{p2, Scalar};
use crate::physics::{CarrierResult, IntrinsicResult};

use super::primitive::{Canvas, DrawablePrimitive, FillRole};
use super::scale::{LinearScale, LogScale};

const COLUMNS: usize = 3;
/// Full-height reference the chart decade scales were tuned on (px).
const REFERENCE_TRACK: Scalar = 300.0;
const CONCENTRATION_PX_PER_DECADE: Scalar = 20.0;
const DENSITY_PX_PER_DECADE: Scalar = 15.0;

/// Three vertical tracks with level bars growing up from the bottom.
struct Tracks {
    canvas: Canvas,
    top: Scalar,
    length: Scalar,
}

impl Tracks {
    fn new(canvas: Canvas, margin: Scalar) -> Self {
        Self {
            canvas,
            top: margin,
            length: (canvas.height() - 2.0 * margin).max(0.0),
        }
    }

    fn decades(&self, px_per_decade: Scalar) -> LogScale {
        LogScale::new(
            DOPING_DECADE_OFFSET,
            px_per_decade * self.length / REFERENCE_TRACK,
            self.length,
        )
    }

    fn column(&self, index: usize, level: Scalar, fill: FillRole) -> [DrawablePrimitive; 2] {
        let w = self.canvas.width();
        let centre = (index as Scalar + 1.0) * w / (COLUMNS as Scalar + 1.0);
        let width = w / 6.0;
        let left = centre - width / 2.0;
        let level = level.clamp(0.0, self.length);
        let bottom = self.top + self.length;
        [
            DrawablePrimitive::bar(p2(left, self.top), width, self.length, FillRole::Track),
            DrawablePrimitive::bar(p2(left, bottom - level), width, level, fill),
        ]
    }
}

pub(super) fn intrinsic_chart(
    result: &IntrinsicResult,
    canvas: Canvas,
    config: &LayoutConfig,
) -> Vec<DrawablePrimitive> {
    let tracks = Tracks::new(canvas, config.chart_margin);
    let temperature = LinearScale::new((MIN_TEMPERATURE, MAX_TEMPERATURE), (0.0, tracks.length))
        .clamped()
        .map(result.temperature);
    let concentration = tracks
        .decades(CONCENTRATION_PX_PER_DECADE)
        .length(result.intrinsic_concentration);
    // σ is proportional to ni, so its bar follows the concentration bar
    let levels = [
        (temperature, FillRole::Temperature),
        (concentration, FillRole::Concentration),
        (concentration, FillRole::Conductivity),
    ];
    levels
        .iter()
        .enumerate()
        .flat_map(|(i, &(level, fill))| tracks.column(i, level, fill))
        .collect()
}

pub(super) fn doping_chart(
    result: &CarrierResult,
    canvas: Canvas,
    config: &LayoutConfig,
) -> Vec<DrawablePrimitive> {
    let tracks = Tracks::new(canvas, config.chart_margin);
    let dopant = LinearScale::new((0.0, 10.0), (0.0, tracks.length))
        .clamped()
        .map(result.exponent);
    let density = tracks.decades(DENSITY_PX_PER_DECADE);
    let levels = [
        (dopant, FillRole::Dopant(result.doping_type)),
        (density.length(result.electron_concentration), FillRole::ElectronDensity),
        (density.length(result.hole_concentration), FillRole::HoleDensity),
    ];
    levels
        .iter()
        .enumerate()
        .flat_map(|(i, &(level, fill))| tracks.column(i, level, fill))
        .collect()
}
