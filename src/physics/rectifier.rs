//! Rectifier transfer functions and the capacitor-smoothing fold.
//!
//! The unfiltered output is a pure function of phase. Once a smoothing
//! capacitor is fitted, each output depends on the one before it, so the
//! filter is written as a step function over a caller-owned
//! [`CapacitorState`] and sampled windows are produced by scanning it.

use std::f64::consts::TAU;

use crate::constants::{CAPACITOR_DISCHARGE_RATE, RECTIFIER_STEP};
use crate::errors::{ensure_finite, InvalidParameterError, Result};
use crate::math::Scalar;
use crate::params::{wrap_phase, RectifierSetup, RectifierType};

/// Input waveform `sin(2πt)` at phase `t`.
#[inline]
#[must_use]
pub fn input_wave(phase: Scalar) -> Scalar {
    (TAU * phase).sin()
}

/// Filter state carried between steps: the previous output voltage.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CapacitorState {
    /// Previous filtered output.
    pub voltage: Scalar,
}

impl CapacitorState {
    /// State holding `voltage`.
    #[must_use]
    pub const fn holding(voltage: Scalar) -> Self {
        Self { voltage }
    }
}

/// One point of a sampled waveform window.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    /// Phase in [0, 1).
    pub phase: Scalar,
    /// Input voltage.
    pub input: Scalar,
    /// Output voltage after rectification and filtering.
    pub output: Scalar,
}

/// Rectifier circuit: topology plus optional smoothing capacitor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectifier {
    /// Topology.
    pub rectifier_type: RectifierType,
    /// Smoothing capacitor fitted.
    pub with_capacitor: bool,
}

impl Rectifier {
    /// Creates a rectifier.
    #[must_use]
    pub const fn new(rectifier_type: RectifierType, with_capacitor: bool) -> Self {
        Self {
            rectifier_type,
            with_capacitor,
        }
    }

    /// Period of the unfiltered output in units of input phase.
    #[must_use]
    pub const fn period(self) -> Scalar {
        match self.rectifier_type {
            RectifierType::HalfWave => 1.0,
            RectifierType::FullWave => 0.5,
        }
    }

    /// Unfiltered output at `phase`: `max(0, sin)` or `|sin|`.
    #[must_use]
    pub fn rectify(self, phase: Scalar) -> Scalar {
        let input = input_wave(phase);
        match self.rectifier_type {
            RectifierType::HalfWave => input.max(0.0),
            RectifierType::FullWave => input.abs(),
        }
    }

    /// Advances the filter to `phase`, `dt` after the previous state.
    ///
    /// Without a capacitor the state simply follows the rectified value.
    #[must_use]
    pub fn step(self, state: CapacitorState, phase: Scalar, dt: Scalar) -> CapacitorState {
        let rectified = self.rectify(phase);
        if self.with_capacitor {
            CapacitorState::holding(discharge(state.voltage, rectified, dt))
        } else {
            CapacitorState::holding(rectified)
        }
    }

    /// Scans the filter over `count` samples spaced `dt` apart from `start`.
    ///
    /// The first sample is already one step past `state`.
    #[must_use]
    pub fn scan(self, state: CapacitorState, start: Scalar, dt: Scalar, count: usize) -> Vec<WaveSample> {
        (0..count)
            .scan(state, |held, i| {
                let phase = wrap_phase(start + i as Scalar * dt);
                *held = self.step(*held, phase, dt);
                Some(WaveSample {
                    phase,
                    input: input_wave(phase),
                    output: held.voltage,
                })
            })
            .collect()
    }

    /// Runs the filter from rest through `periods` whole input periods.
    ///
    /// Gives a settled state for callers that have no history yet.
    #[must_use]
    pub fn warm_up(self, periods: usize, dt: Scalar) -> CapacitorState {
        if dt <= 0.0 {
            return CapacitorState::default();
        }
        let steps = (periods as Scalar / dt).round() as usize;
        (0..steps).fold(CapacitorState::default(), |held, i| {
            self.step(held, wrap_phase(i as Scalar * dt), dt)
        })
    }
}

/// Capacitor update: charge instantly to a higher input, otherwise discharge
/// linearly at [`CAPACITOR_DISCHARGE_RATE`], never below zero.
#[inline]
#[must_use]
pub fn discharge(previous: Scalar, rectified: Scalar, dt: Scalar) -> Scalar {
    if rectified > previous {
        rectified
    } else {
        (previous - CAPACITOR_DISCHARGE_RATE * dt).max(0.0)
    }
}

/// Rectifier snapshot at the current phase plus one period of samples ahead.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RectifierResult {
    /// Circuit.
    pub rectifier: Rectifier,
    /// Current phase in [0, 1).
    pub phase: Scalar,
    /// Input at `phase`.
    pub input: Scalar,
    /// Filtered output at `phase`.
    pub output: Scalar,
    /// State to hand back on the next evaluation.
    pub state: CapacitorState,
    /// One input period of samples starting at `phase`.
    pub window: Vec<WaveSample>,
}

impl RectifierResult {
    /// Unfiltered transfer function at an arbitrary phase.
    #[must_use]
    pub fn output_at(&self, phase: Scalar) -> Scalar {
        self.rectifier.rectify(phase)
    }
}

/// Samples in one evaluation window (one input period at [`RECTIFIER_STEP`]).
pub const WINDOW_SAMPLES: usize = 100;

/// Evaluates the rectifier at the setup's phase, folding from its carried state.
///
/// The carried state is advanced by the setup's time step to reach the
/// current phase; the window ahead is sampled at [`RECTIFIER_STEP`].
///
/// # Errors
///
/// Fails when the phase, carried voltage or time step is not finite, or the
/// time step is negative.
pub fn evaluate_rectifier(setup: &RectifierSetup) -> Result<RectifierResult> {
    let phase = wrap_phase(ensure_finite("phase", setup.phase)?);
    let held = CapacitorState::holding(ensure_finite("capacitor_voltage", setup.capacitor_voltage)?);
    let time_step = ensure_finite("time_step", setup.time_step)?;
    if time_step < 0.0 {
        return Err(InvalidParameterError::OutOfDomain {
            field: "time_step",
            value: time_step,
            reason: "time step must not be negative",
        });
    }
    let rectifier = Rectifier::new(setup.rectifier_type, setup.with_capacitor);
    let current = rectifier.step(held, phase, time_step);
    let output = current.voltage;
    let mut window = Vec::with_capacity(WINDOW_SAMPLES + 1);
    window.push(WaveSample {
        phase,
        input: input_wave(phase),
        output,
    });
    window.extend(rectifier.scan(current, phase + RECTIFIER_STEP, RECTIFIER_STEP, WINDOW_SAMPLES));
    Ok(RectifierResult {
        rectifier,
        phase,
        input: input_wave(phase),
        output,
        state: CapacitorState::holding(output),
        window,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    const HALF: Rectifier = Rectifier::new(RectifierType::HalfWave, false);
    const FULL: Rectifier = Rectifier::new(RectifierType::FullWave, false);

    #[test]
    fn half_wave_blocks_negative_half_cycle() {
        assert_relative_eq!(HALF.rectify(0.25), 1.0);
        assert_relative_eq!(HALF.rectify(0.75), 0.0);
    }

    #[test]
    fn full_wave_inverts_negative_half_cycle() {
        assert_relative_eq!(FULL.rectify(0.75), 1.0);
        assert_relative_eq!(FULL.period(), 0.5);
    }

    #[test]
    fn capacitor_holds_near_peak() {
        let filtered = Rectifier::new(RectifierType::HalfWave, true);
        let settled = filtered.warm_up(3, RECTIFIER_STEP);
        // half a period of discharge at 0.3 per unit phase loses at most 0.3
        assert!(settled.voltage > 0.6, "settled at {}", settled.voltage);
        assert!(settled.voltage <= 1.0);
    }

    #[test]
    fn evaluate_reports_next_state() {
        let result = evaluate_rectifier(&RectifierSetup {
            rectifier_type: RectifierType::HalfWave,
            with_capacitor: true,
            phase: 0.75,
            capacitor_voltage: 0.8,
            time_step: RECTIFIER_STEP,
        })
        .expect("finite inputs");
        assert_relative_eq!(result.output, 0.8 - CAPACITOR_DISCHARGE_RATE * RECTIFIER_STEP);
        assert_eq!(result.state, CapacitorState::holding(result.output));
        assert_eq!(result.window.len(), WINDOW_SAMPLES + 1);
        assert_relative_eq!(result.window[0].phase, 0.75);
    }

    #[test]
    fn carried_state_discharges_over_the_given_time_step() {
        let setup = RectifierSetup {
            rectifier_type: RectifierType::HalfWave,
            with_capacitor: true,
            phase: 0.75,
            capacitor_voltage: 0.8,
            time_step: 0.1,
        };
        let result = evaluate_rectifier(&setup).expect("finite inputs");
        assert_relative_eq!(result.output, 0.8 - CAPACITOR_DISCHARGE_RATE * 0.1);
        assert_relative_eq!(result.window[1].phase, 0.76, epsilon = 1.0e-12);

        let backwards = RectifierSetup {
            time_step: -0.01,
            ..setup
        };
        assert!(matches!(
            evaluate_rectifier(&backwards),
            Err(InvalidParameterError::OutOfDomain { field: "time_step", .. })
        ));
    }

    #[test]
    fn unfiltered_window_matches_transfer_function() {
        let result = evaluate_rectifier(&RectifierSetup {
            rectifier_type: RectifierType::FullWave,
            with_capacitor: false,
            phase: 0.1,
            capacitor_voltage: 0.0,
            time_step: RECTIFIER_STEP,
        })
        .expect("finite inputs");
        for sample in &result.window {
            assert_relative_eq!(sample.output, result.output_at(sample.phase), epsilon = 1.0e-12);
        }
    }

    proptest! {
        #[test]
        fn full_wave_has_half_period(t in 0.0..1.0_f64) {
            prop_assert!((FULL.rectify(t) - FULL.rectify(t + 0.5)).abs() < 1.0e-9);
        }

        #[test]
        fn half_wave_is_clipped_sine(t in 0.0..1.0_f64) {
            prop_assert!((HALF.rectify(t) - input_wave(t).max(0.0)).abs() < 1.0e-12);
        }

        #[test]
        fn capacitor_never_overshoots_or_recharges_below_held(
            held in 0.0..=1.0_f64,
            start in 0.0..1.0_f64,
            full in any::<bool>(),
        ) {
            let kind = if full { RectifierType::FullWave } else { RectifierType::HalfWave };
            let filtered = Rectifier::new(kind, true);
            let samples = filtered.scan(CapacitorState::holding(held), start, RECTIFIER_STEP, 300);
            let mut previous = held;
            for sample in samples {
                let rectified = filtered.rectify(sample.phase);
                prop_assert!(sample.output <= previous.max(rectified) + 1.0e-12);
                prop_assert!(sample.output <= 1.0 + 1.0e-12);
                if rectified <= previous {
                    prop_assert!(sample.output <= previous);
                }
                previous = sample.output;
            }
        }
    }
}
