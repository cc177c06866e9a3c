//! Material constants and textbook reference values used by the evaluators.
//!
//! ## Accuracy
//!
//! These are the rounded classroom values the lesson diagrams are built
//! around, not CODATA-precision constants. In particular the Boltzmann
//! constant is carried in eV/K to three significant figures so that the
//! intrinsic-concentration curve matches the lesson tables.
//!
//! ## References
//!
//! - Sze, S. M. & Ng, K. K. (2007). *Physics of Semiconductor Devices*, 3rd ed., Appendix G.
//! - Streetman, B. G. & Banerjee, S. (2015). *Solid State Electronic Devices*, 7th ed., ch. 3.

use crate::math::Scalar;

/// Boltzmann constant _k_ in electron-volts per kelvin (eV/K).
pub const BOLTZMANN_EV: Scalar = 8.62e-5;
/// Reference temperature for tabulated silicon values, in kelvin.
pub const REFERENCE_TEMPERATURE: Scalar = 300.0;
/// Silicon band gap at 300 K in electron-volts.
pub const SILICON_BAND_GAP_EV: Scalar = 1.12;
/// Linear temperature coefficient of the silicon band gap (eV/K).
pub const SILICON_BAND_GAP_SLOPE: Scalar = 2.0e-4;
/// Intrinsic carrier concentration of silicon at 300 K (cm⁻³).
pub const SILICON_NI_300K: Scalar = 1.5e10;
/// Conductivity of intrinsic silicon at 300 K (S/m).
pub const SILICON_SIGMA_300K: Scalar = 5.0e-6;

/// Forward threshold voltage of a silicon diode (V).
pub const SILICON_THRESHOLD: Scalar = 0.7;
/// Forward threshold voltage of a germanium diode (V).
pub const GERMANIUM_THRESHOLD: Scalar = 0.3;

/// Lowest temperature accepted by the lesson controls (K).
pub const MIN_TEMPERATURE: Scalar = 100.0;
/// Highest temperature accepted by the lesson controls (K).
pub const MAX_TEMPERATURE: Scalar = 500.0;
/// Applied diode voltage range accepted by the lesson controls (V).
pub const DIODE_VOLTAGE_RANGE: (Scalar, Scalar) = (-5.0, 5.0);
/// Doping slider range; the dopant density is `10^(exponent + 10)` cm⁻³.
pub const DOPING_EXPONENT_RANGE: (Scalar, Scalar) = (1.0, 10.0);
/// Decade offset between the doping slider and the dopant density.
pub const DOPING_DECADE_OFFSET: Scalar = 10.0;

/// Discharge rate of the smoothing capacitor, in volts per unit phase.
pub const CAPACITOR_DISCHARGE_RATE: Scalar = 0.3;
/// Phase step used when sampling rectifier waveforms.
pub const RECTIFIER_STEP: Scalar = 0.01;

/// Returns `10^(exponent + 10)`, the dopant density in cm⁻³ for a slider value.
#[inline]
#[must_use]
pub fn dopant_density(exponent: Scalar) -> Scalar {
    10f64.powf(exponent + DOPING_DECADE_OFFSET)
}

/// Fraction of the lesson temperature range covered by `kelvin`, clamped to [0, 1].
#[inline]
#[must_use]
pub fn temperature_fraction(kelvin: Scalar) -> Scalar {
    ((kelvin - MIN_TEMPERATURE) / (MAX_TEMPERATURE - MIN_TEMPERATURE)).clamp(0.0, 1.0)
}
