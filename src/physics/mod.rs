//! Closed-form evaluators, one per phenomenon.

mod bands;
mod carriers;
mod diode;
mod junction;
mod rectifier;

pub use bands::{evaluate_bands, excited_electrons, gap_fraction, BandResult, BAND_STATES};
pub use carriers::{
    band_gap, conductivity, evaluate_doping, evaluate_intrinsic, intrinsic_concentration,
    thermal_pair_count, CarrierResult, IntrinsicResult, DOPED_LATTICE_PAIRS,
    INTRINSIC_LATTICE_PAIRS,
};
pub use diode::{
    diode_current, evaluate_diode, DiodeRegion, DiodeResult, FORWARD_SCALE, FORWARD_SLOPE,
    KNEE_CURRENT, REVERSE_CURRENT,
};
pub use junction::{
    depletion_width, evaluate_junction, injected_minority_carriers, majority_carriers,
    JunctionResult, EQUILIBRIUM_DEPLETION_WIDTH,
};
pub use rectifier::{
    discharge, evaluate_rectifier, input_wave, CapacitorState, Rectifier, RectifierResult,
    WaveSample, WINDOW_SAMPLES,
};

use tracing::trace;

use crate::errors::Result;
use crate::params::{Experiment, ExperimentKind};

/// Output of one evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsResult {
    /// Diode operating point.
    Diode(DiodeResult),
    /// Rectifier waveforms.
    Rectifier(RectifierResult),
    /// Band occupancy.
    Bands(BandResult),
    /// Doped carrier balance.
    Doping(CarrierResult),
    /// Junction response.
    Junction(JunctionResult),
    /// Intrinsic temperature response.
    Intrinsic(IntrinsicResult),
}

impl PhysicsResult {
    /// Experiment kind that produced this result.
    #[must_use]
    pub const fn kind(&self) -> ExperimentKind {
        match self {
            Self::Diode(_) => ExperimentKind::Diode,
            Self::Rectifier(_) => ExperimentKind::Rectifier,
            Self::Bands(_) => ExperimentKind::BandDiagram,
            Self::Doping(_) => ExperimentKind::Doping,
            Self::Junction(_) => ExperimentKind::PnJunction,
            Self::Intrinsic(_) => ExperimentKind::Intrinsic,
        }
    }
}

/// Dispatches a normalized experiment to its evaluator.
///
/// # Errors
///
/// Propagates out-of-domain errors from the evaluators.
pub fn evaluate(experiment: &Experiment) -> Result<PhysicsResult> {
    let result = match experiment {
        Experiment::Diode(setup) => PhysicsResult::Diode(evaluate_diode(setup)?),
        Experiment::Rectifier(setup) => PhysicsResult::Rectifier(evaluate_rectifier(setup)?),
        Experiment::BandDiagram(setup) => PhysicsResult::Bands(evaluate_bands(setup)),
        Experiment::Doping(setup) => PhysicsResult::Doping(evaluate_doping(setup)?),
        Experiment::PnJunction(setup) => PhysicsResult::Junction(evaluate_junction(setup)),
        Experiment::Intrinsic(setup) => PhysicsResult::Intrinsic(evaluate_intrinsic(setup)?),
    };
    trace!(kind = %result.kind(), "evaluated");
    Ok(result)
}
