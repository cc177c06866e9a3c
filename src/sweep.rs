//! Parameter sweeps feeding curves and exported tables.

use crate::errors::Result;
use crate::math::Scalar;
use crate::params::Material;
use crate::physics::{diode_current, intrinsic_concentration};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Applies `f` to each sample and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(samples: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    samples.into_iter().map(f).collect()
}

/// One point of a V-I characteristic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IvPoint {
    /// Applied voltage (V).
    pub voltage: Scalar,
    /// Diode current (A).
    pub current: Scalar,
}

/// Samples the diode law of `material` at `n` voltages across `span`.
#[must_use]
pub fn diode_characteristic(material: Material, span: (Scalar, Scalar), n: usize) -> Vec<IvPoint> {
    let threshold = material.threshold_voltage();
    sweep_map(linspace(span.0, span.1, n), |voltage| IvPoint {
        voltage,
        current: diode_current(voltage, threshold),
    })
}

/// Samples `(T, ni(T))` at `n` temperatures across `span`.
///
/// # Errors
///
/// Fails if any sampled temperature is at or below 0 K.
pub fn intrinsic_sweep(span: (Scalar, Scalar), n: usize) -> Result<Vec<(Scalar, Scalar)>> {
    linspace(span.0, span.1, n)
        .into_iter()
        .map(|t| Ok((t, intrinsic_concentration(t)?)))
        .collect()
}
