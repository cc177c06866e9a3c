//! Piecewise diode law and operating-point evaluation.

use crate::constants::{GERMANIUM_THRESHOLD, SILICON_THRESHOLD};
use crate::errors::{ensure_finite, Result};
use crate::math::Scalar;
use crate::params::{DiodeSetup, Material};

/// Constant current drawn under any reverse bias (A).
pub const REVERSE_CURRENT: Scalar = -0.001;
/// Current reached at the top of the sub-threshold ramp (A).
pub const KNEE_CURRENT: Scalar = 0.01;
/// Scale of the exponential forward branch (A).
pub const FORWARD_SCALE: Scalar = 0.1;
/// Exponent slope of the forward branch (1/V).
pub const FORWARD_SLOPE: Scalar = 5.0;

impl Material {
    /// Forward threshold voltage of a diode made from this material.
    #[must_use]
    pub const fn threshold_voltage(self) -> Scalar {
        match self {
            Self::Silicon => SILICON_THRESHOLD,
            Self::Germanium => GERMANIUM_THRESHOLD,
        }
    }
}

/// Operating region of the piecewise diode law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiodeRegion {
    /// `v < 0`.
    Reverse,
    /// `0 ≤ v < Vth`.
    BelowThreshold,
    /// `v ≥ Vth`.
    Conducting,
}

impl DiodeRegion {
    /// Classifies `voltage` against `threshold`.
    #[must_use]
    pub fn classify(voltage: Scalar, threshold: Scalar) -> Self {
        if voltage < 0.0 {
            Self::Reverse
        } else if voltage < threshold {
            Self::BelowThreshold
        } else {
            Self::Conducting
        }
    }
}

/// Piecewise diode current in amperes.
///
/// This is the lesson's simplified law, not the Shockley equation:
///
/// - `v < 0`: constant [`REVERSE_CURRENT`];
/// - `0 ≤ v < Vth`: linear ramp `0.01 · v / Vth`;
/// - `v ≥ Vth`: `0.01 + 0.1 · exp(5 (v − Vth))`.
///
/// The reverse branch and the ramp do not meet at `v = 0` (−1 mA against 0).
/// That step is part of the model and is kept as is.
#[must_use]
pub fn diode_current(voltage: Scalar, threshold: Scalar) -> Scalar {
    match DiodeRegion::classify(voltage, threshold) {
        DiodeRegion::Reverse => REVERSE_CURRENT,
        DiodeRegion::BelowThreshold => KNEE_CURRENT * voltage / threshold,
        DiodeRegion::Conducting => {
            KNEE_CURRENT + (FORWARD_SLOPE * (voltage - threshold)).exp() * FORWARD_SCALE
        }
    }
}

/// Diode operating point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeResult {
    /// Applied voltage (V).
    pub voltage: Scalar,
    /// Diode material.
    pub material: Material,
    /// Threshold voltage of `material` (V).
    pub threshold: Scalar,
    /// Current through the diode (A).
    pub current_amps: Scalar,
    /// Region of the piecewise law.
    pub region: DiodeRegion,
    /// True once the applied voltage reaches the threshold.
    pub is_forward_conducting: bool,
}

impl DiodeResult {
    /// Brightness in [0, 1] of the indicator lamp in series with the diode.
    #[must_use]
    pub fn lamp_brightness(&self) -> Scalar {
        (self.current_amps * 10.0).clamp(0.0, 1.0)
    }

    /// Current in milliamperes, as printed beside the circuit.
    #[must_use]
    pub fn current_milliamps(&self) -> Scalar {
        self.current_amps * 1.0e3
    }
}

/// Evaluates the diode law at the setup's operating point.
///
/// # Errors
///
/// Fails when the voltage is not finite.
pub fn evaluate_diode(setup: &DiodeSetup) -> Result<DiodeResult> {
    let voltage = ensure_finite("voltage", setup.voltage)?;
    let threshold = setup.material.threshold_voltage();
    let region = DiodeRegion::classify(voltage, threshold);
    Ok(DiodeResult {
        voltage,
        material: setup.material,
        threshold,
        current_amps: diode_current(voltage, threshold),
        region,
        is_forward_conducting: region == DiodeRegion::Conducting,
    })
}
