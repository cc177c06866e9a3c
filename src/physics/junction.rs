//! Depletion width and carrier counts for a biased p-n junction.

use crate::math::Scalar;
use crate::params::{BiasMode, JunctionSetup};

/// Depletion width at equilibrium, in diagram units.
pub const EQUILIBRIUM_DEPLETION_WIDTH: Scalar = 40.0;

/// Depletion width for each bias mode.
///
/// Deliberately a three-entry table rather than a function of voltage.
#[must_use]
pub const fn depletion_width(bias: BiasMode) -> Scalar {
    match bias {
        BiasMode::None => EQUILIBRIUM_DEPLETION_WIDTH,
        BiasMode::Forward => 20.0,
        BiasMode::Reverse => 60.0,
    }
}

/// Majority carriers drawn on each side of the junction.
#[must_use]
pub const fn majority_carriers(bias: BiasMode) -> usize {
    match bias {
        BiasMode::Forward => 12,
        BiasMode::None | BiasMode::Reverse => 8,
    }
}

/// Minority carriers injected across the junction on each side.
#[must_use]
pub const fn injected_minority_carriers(bias: BiasMode) -> usize {
    match bias {
        BiasMode::Forward => 3,
        BiasMode::None | BiasMode::Reverse => 0,
    }
}

/// Junction response to a bias mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionResult {
    /// Applied bias.
    pub bias_mode: BiasMode,
    /// Depletion width in diagram units.
    pub depletion_width: Scalar,
    /// Barrier height relative to equilibrium.
    pub relative_barrier: Scalar,
    /// Majority carriers per side.
    pub majority_carriers: usize,
    /// Injected minority carriers per side.
    pub injected_minority: usize,
}

impl JunctionResult {
    /// True when an external source is connected.
    #[must_use]
    pub fn is_biased(&self) -> bool {
        self.bias_mode != BiasMode::None
    }
}

/// Looks up the junction response; total over its input.
#[must_use]
pub fn evaluate_junction(setup: &JunctionSetup) -> JunctionResult {
    let width = depletion_width(setup.bias_mode);
    JunctionResult {
        bias_mode: setup.bias_mode,
        depletion_width: width,
        relative_barrier: width / EQUILIBRIUM_DEPLETION_WIDTH,
        majority_carriers: majority_carriers(setup.bias_mode),
        injected_minority: injected_minority_carriers(setup.bias_mode),
    }
}
