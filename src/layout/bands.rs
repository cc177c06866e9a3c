//! Conduction and valence band bars with their carriers.

use crate::math::{p2, Scalar};
use crate::physics::BandResult;

use super::primitive::{Canvas, DrawablePrimitive, FillRole, PointRole};

/// `count` x positions splitting `width` into equal intervals.
fn spread(width: Scalar, count: usize) -> impl Iterator<Item = Scalar> {
    let step = width / (count as Scalar + 1.0);
    (1..=count).map(move |i| step * i as Scalar)
}

pub(super) fn band_layout(result: &BandResult, canvas: Canvas) -> Vec<DrawablePrimitive> {
    let (w, h) = (canvas.width(), canvas.height());
    let gap = h * result.gap_fraction;
    let band_height = (h - gap) / 2.0;
    let conduction_y = band_height / 2.0;
    let valence_y = h - band_height / 2.0;

    let mut out = vec![
        DrawablePrimitive::bar(p2(0.0, 0.0), w, band_height, FillRole::ConductionBand),
        DrawablePrimitive::bar(p2(0.0, h - band_height), w, band_height, FillRole::ValenceBand),
    ];

    if result.conduction_electrons == 0 {
        // filled valence band, evenly centred in equal cells
        let cell = w / result.valence_electrons.max(1) as Scalar;
        out.extend((0..result.valence_electrons).map(|i| {
            DrawablePrimitive::point(
                p2(cell * i as Scalar + cell / 2.0, valence_y),
                PointRole::ValenceElectron,
            )
        }));
        return out;
    }

    out.extend(
        spread(w, result.conduction_electrons)
            .map(|x| DrawablePrimitive::point(p2(x, conduction_y), PointRole::Electron)),
    );
    out.extend(
        spread(w, result.holes).map(|x| DrawablePrimitive::point(p2(x, valence_y), PointRole::Hole)),
    );
    out.extend(spread(w, result.valence_electrons).map(|x| {
        DrawablePrimitive::point(p2(x, valence_y), PointRole::ValenceElectron)
    }));
    out
}
