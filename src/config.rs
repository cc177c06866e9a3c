//! Geometry settings for the layout mapper.
//!
//! The defaults reproduce the lesson diagrams; pages with unusual canvases
//! may override individual fields.

use crate::math::Scalar;

/// Tunable geometry for every visualization.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Plot padding around the diode V-I graph (px).
    pub diode_padding: Scalar,
    /// Voltage span plotted on the diode x axis (V).
    pub diode_voltage_span: (Scalar, Scalar),
    /// Voltage step between curve samples (V).
    pub diode_sample_step: Scalar,
    /// Current mapped onto the full graph height (A).
    pub diode_current_span: Scalar,
    /// Voltages that get an x-axis tick.
    pub diode_voltage_ticks: Vec<Scalar>,
    /// Currents that get a y-axis tick.
    pub diode_current_ticks: Vec<Scalar>,
    /// Horizontal inset of the rectifier waveforms (px).
    pub wave_margin: Scalar,
    /// Distance of each waveform centre line from its canvas edge (px).
    pub wave_inset: Scalar,
    /// Peak waveform deflection (px).
    pub wave_amplitude: Scalar,
    /// Lattice rows and columns in the intrinsic diagram.
    pub intrinsic_grid: usize,
    /// Lattice rows and columns in the doping diagram.
    pub doping_grid: usize,
    /// Lattice site, counted from 1, that holds the dopant.
    pub dopant_site: (usize, usize),
    /// Atom radius used to trim bonds (px).
    pub atom_radius: Scalar,
    /// Jitter of the extrinsic carrier around the dopant (± px).
    pub dopant_jitter: Scalar,
    /// Vertical offset of an electron or hole from its pair centre (px).
    pub pair_offset: Scalar,
    /// Gap between carriers and region edges in the junction diagram (px).
    pub junction_margin: Scalar,
    /// Vertical band kept free of carriers at the top and bottom (px).
    pub junction_vertical_margin: Scalar,
    /// Distance of injected minority carriers from the junction (px).
    pub minority_inset: Scalar,
    /// Spread of injected minority carriers (px).
    pub minority_spread: Scalar,
    /// Top and bottom margin of chart tracks (px).
    pub chart_margin: Scalar,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            diode_padding: 40.0,
            diode_voltage_span: (-5.0, 2.0),
            diode_sample_step: 0.1,
            diode_current_span: 1.5,
            diode_voltage_ticks: vec![-4.0, -2.0, 0.0, 1.0, 2.0],
            diode_current_ticks: vec![0.0, 0.5, 1.0],
            wave_margin: 50.0,
            wave_inset: 80.0,
            wave_amplitude: 30.0,
            intrinsic_grid: 5,
            doping_grid: 6,
            dopant_site: (3, 3),
            atom_radius: 15.0,
            dopant_jitter: 15.0,
            pair_offset: 15.0,
            junction_margin: 20.0,
            junction_vertical_margin: 50.0,
            minority_inset: 60.0,
            minority_spread: 80.0,
            chart_margin: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Number of curve samples across the diode voltage span, endpoints included.
    #[must_use]
    pub fn diode_sample_count(&self) -> usize {
        let (lo, hi) = self.diode_voltage_span;
        if self.diode_sample_step <= 0.0 || hi <= lo {
            return 1;
        }
        ((hi - lo) / self.diode_sample_step).round() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_diode_sweep_has_seventy_one_samples() {
        assert_eq!(LayoutConfig::default().diode_sample_count(), 71);
    }

    #[test]
    fn degenerate_step_collapses_to_single_sample() {
        let config = LayoutConfig {
            diode_sample_step: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.diode_sample_count(), 1);
    }
}
