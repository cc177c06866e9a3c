//! Frame-driven rectifier animation and waveform export.

use std::io::{self, Write};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::errors::Result;
use crate::layout::Canvas;
use crate::math::Scalar;
use crate::params::{wrap_phase, Experiment, RectifierSetup, RectifierType};
use crate::physics::{input_wave, CapacitorState, Rectifier, WaveSample};
use crate::pipeline::{render_experiment, Rendered};

/// Frame pacing for animated views.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Wall-clock time per animation frame.
    pub interval: Duration,
}

impl FrameConfig {
    /// 60 frames per second.
    #[must_use]
    pub const fn standard() -> Self {
        // rounded down so a whole second always holds every frame
        Self {
            interval: Duration::from_nanos(16_666_666),
        }
    }

    /// 30 frames per second, for constrained devices.
    #[must_use]
    pub const fn reduced() -> Self {
        Self {
            interval: Duration::from_nanos(33_333_333),
        }
    }

    /// Frames per second.
    #[must_use]
    pub fn rate_hz(&self) -> Scalar {
        1.0 / self.interval.as_secs_f64()
    }

    /// Input phase covered by one frame; the input runs at 1 Hz.
    #[must_use]
    pub fn phase_step(&self) -> Scalar {
        self.interval.as_secs_f64()
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Owns the rectifier phase and capacitor fold between frames.
///
/// The input runs at 1 Hz of wall time whatever the frame rate: each frame
/// advances the phase and discharges the capacitor by the frame interval in
/// seconds. Elapsed time shorter than a frame is carried over to the next
/// [`tick`](Self::tick).
#[derive(Debug, Clone, PartialEq)]
pub struct RectifierAnimation {
    rectifier: Rectifier,
    frames: FrameConfig,
    phase: Scalar,
    held: CapacitorState,
    pending: Duration,
    paused: bool,
}

impl RectifierAnimation {
    /// Starts at phase zero with a discharged capacitor.
    #[must_use]
    pub fn new(rectifier_type: RectifierType, with_capacitor: bool, frames: FrameConfig) -> Self {
        Self {
            rectifier: Rectifier::new(rectifier_type, with_capacitor),
            frames,
            phase: 0.0,
            held: CapacitorState::default(),
            pending: Duration::ZERO,
            paused: false,
        }
    }

    /// Circuit being animated.
    #[must_use]
    pub const fn rectifier(&self) -> Rectifier {
        self.rectifier
    }

    /// Current input phase in [0, 1).
    #[must_use]
    pub const fn phase(&self) -> Scalar {
        self.phase
    }

    /// Capacitor state carried into the current phase.
    #[must_use]
    pub const fn state(&self) -> CapacitorState {
        self.held
    }

    /// True while frozen.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Output at the current phase.
    #[must_use]
    pub fn output(&self) -> Scalar {
        self.rectifier
            .step(self.held, self.phase, self.frames.phase_step())
            .voltage
    }

    /// Freezes the phase; ticks are ignored until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        debug!(phase = self.phase, "animation paused");
        self.paused = true;
        self.pending = Duration::ZERO;
    }

    /// Unfreezes the phase.
    pub fn resume(&mut self) {
        debug!(phase = self.phase, "animation resumed");
        self.paused = false;
    }

    /// Advances by whole frames contained in `elapsed`; returns the frame count.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        if self.paused || self.frames.interval.is_zero() {
            return 0;
        }
        self.pending += elapsed;
        let mut frames = 0;
        while self.pending >= self.frames.interval {
            self.pending -= self.frames.interval;
            self.advance();
            frames += 1;
        }
        if frames > 0 {
            trace!(frames, phase = self.phase, "ticked");
        }
        frames
    }

    /// Folds the current sample into the capacitor and moves one frame on.
    ///
    /// Returns the sample that was just left behind.
    pub fn advance(&mut self) -> WaveSample {
        let dt = self.frames.phase_step();
        self.held = self.rectifier.step(self.held, self.phase, dt);
        let sample = WaveSample {
            phase: self.phase,
            input: input_wave(self.phase),
            output: self.held.voltage,
        };
        self.phase = wrap_phase(self.phase + dt);
        sample
    }

    /// Runs `count` frames regardless of pause state and collects the samples.
    pub fn record(&mut self, count: usize) -> Vec<WaveSample> {
        (0..count).map(|_| self.advance()).collect()
    }

    /// Normalized setup for the current state.
    #[must_use]
    pub fn parameters(&self) -> RectifierSetup {
        RectifierSetup {
            rectifier_type: self.rectifier.rectifier_type,
            with_capacitor: self.rectifier.with_capacitor,
            phase: self.phase,
            capacitor_voltage: self.held.voltage,
            time_step: self.frames.phase_step(),
        }
    }

    /// Primitives for the current state.
    ///
    /// # Errors
    ///
    /// Propagates evaluator errors; none occur for states built through this type.
    pub fn frame<R: Rng>(&self, canvas: Canvas, config: &LayoutConfig, rng: &mut R) -> Result<Rendered> {
        let experiment = Experiment::Rectifier(self.parameters());
        render_experiment(&experiment, canvas, config, rng)
    }
}

/// Writes sampled waveforms as CSV with a `phase,input,output` header.
pub fn write_waveform_csv<W: Write>(mut w: W, samples: &[WaveSample]) -> io::Result<()> {
    writeln!(w, "phase,input,output")?;
    for s in samples {
        writeln!(w, "{:.16e},{:.16e},{:.16e}", s.phase, s.input, s.output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::physics::PhysicsResult;

    #[test]
    fn frame_rates() {
        assert_relative_eq!(FrameConfig::standard().rate_hz(), 60.0, epsilon = 1.0e-3);
        assert_relative_eq!(FrameConfig::reduced().rate_hz(), 30.0, epsilon = 1.0e-3);
        assert_eq!(FrameConfig::default(), FrameConfig::standard());
    }

    #[test]
    fn tick_advances_whole_frames_and_carries_remainder() {
        let frames = FrameConfig {
            interval: Duration::from_millis(10),
        };
        let mut anim = RectifierAnimation::new(RectifierType::HalfWave, false, frames);
        assert_eq!(anim.tick(Duration::from_millis(25)), 2);
        assert_relative_eq!(anim.phase(), 0.02, epsilon = 1.0e-12);
        assert_eq!(anim.tick(Duration::from_millis(5)), 1);
        assert_relative_eq!(anim.phase(), 0.03, epsilon = 1.0e-12);
    }

    #[test]
    fn paused_animation_holds_its_phase() {
        let frames = FrameConfig {
            interval: Duration::from_millis(10),
        };
        let mut anim = RectifierAnimation::new(RectifierType::FullWave, true, frames);
        anim.tick(Duration::from_millis(100));
        let phase = anim.phase();
        anim.pause();
        assert_eq!(anim.tick(Duration::from_secs(1)), 0);
        assert_relative_eq!(anim.phase(), phase);
        anim.resume();
        assert_eq!(anim.tick(Duration::from_millis(10)), 1);
    }

    #[test]
    fn one_second_holds_every_standard_frame() {
        let mut anim = RectifierAnimation::new(RectifierType::HalfWave, false, FrameConfig::standard());
        assert_eq!(anim.tick(Duration::from_secs(1)), 60);
    }

    #[test]
    fn frame_rate_does_not_change_wave_speed() {
        let mut fast = RectifierAnimation::new(RectifierType::FullWave, false, FrameConfig::standard());
        let mut slow = RectifierAnimation::new(RectifierType::FullWave, false, FrameConfig::reduced());
        assert_eq!(fast.tick(Duration::from_millis(500)), 30);
        assert_eq!(slow.tick(Duration::from_millis(500)), 15);
        assert_relative_eq!(fast.phase(), 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(slow.phase(), 0.5, epsilon = 1.0e-6);
        assert_relative_eq!(fast.output(), slow.output(), epsilon = 1.0e-5);
    }

    #[test]
    fn phase_wraps_after_one_period() {
        let mut anim = RectifierAnimation::new(RectifierType::HalfWave, false, FrameConfig::default());
        anim.record(60);
        assert!(anim.phase() < 1.0e-6 || anim.phase() > 1.0 - 1.0e-6);
    }

    #[test]
    fn smoothed_full_wave_keeps_ripple_small() {
        let mut anim = RectifierAnimation::new(RectifierType::FullWave, true, FrameConfig::default());
        anim.record(60);
        let settled = anim.record(60);
        assert!(settled.iter().all(|s| s.output >= 0.8 && s.output <= 1.0 + 1.0e-12));
    }

    #[test]
    fn frame_matches_animation_output() {
        let mut anim = RectifierAnimation::new(RectifierType::FullWave, true, FrameConfig::default());
        anim.record(37);
        let canvas = Canvas::new(500.0, 400.0).expect("canvas");
        let mut rng = StdRng::seed_from_u64(0);
        let rendered = anim
            .frame(canvas, &LayoutConfig::default(), &mut rng)
            .expect("valid state");
        match rendered.result {
            PhysicsResult::Rectifier(r) => assert_relative_eq!(r.output, anim.output()),
            other => panic!("expected rectifier, got {other:?}"),
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let mut anim = RectifierAnimation::new(RectifierType::HalfWave, false, FrameConfig::default());
        let samples = anim.record(4);
        let mut buf = Vec::new();
        write_waveform_csv(&mut buf, &samples).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "phase,input,output");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("0.0000000000000000e0,"));
    }
}
