//! Band-gap occupancy per material and thermal state.

use crate::math::Scalar;
use crate::params::{BandMaterial, BandSetup, ThermalState};

/// Electron states drawn across the valence and conduction bands.
pub const BAND_STATES: usize = 10;

/// Energy band occupancy for a material class.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandResult {
    /// Material class.
    pub band_material: BandMaterial,
    /// Thermal toggle.
    pub thermal_state: ThermalState,
    /// Band gap as a fraction of the diagram height.
    pub gap_fraction: Scalar,
    /// Electrons promoted to the conduction band.
    pub conduction_electrons: usize,
    /// Electrons left in the valence band.
    pub valence_electrons: usize,
    /// Holes left behind in the valence band.
    pub holes: usize,
}

/// Band gap of a material class as a fraction of diagram height.
#[must_use]
pub const fn gap_fraction(material: BandMaterial) -> Scalar {
    match material {
        BandMaterial::Metal => 0.0,
        BandMaterial::Semiconductor => 0.2,
        BandMaterial::Insulator => 0.4,
    }
}

/// Electrons thermally promoted across the gap.
#[must_use]
pub const fn excited_electrons(material: BandMaterial, thermal: ThermalState) -> usize {
    match (material, thermal) {
        (_, ThermalState::Low) | (BandMaterial::Insulator, _) => 0,
        (BandMaterial::Metal, ThermalState::High) => 5,
        (BandMaterial::Semiconductor, ThermalState::High) => 2,
    }
}

/// Evaluates band occupancy; total over its input.
#[must_use]
pub fn evaluate_bands(setup: &BandSetup) -> BandResult {
    let excited = excited_electrons(setup.band_material, setup.thermal_state);
    BandResult {
        band_material: setup.band_material,
        thermal_state: setup.thermal_state,
        gap_fraction: gap_fraction(setup.band_material),
        conduction_electrons: excited,
        valence_electrons: BAND_STATES - excited,
        holes: excited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insulator_stays_empty_when_hot() {
        let result = evaluate_bands(&BandSetup {
            band_material: BandMaterial::Insulator,
            thermal_state: ThermalState::High,
        });
        assert_eq!(result.conduction_electrons, 0);
        assert_eq!(result.valence_electrons, BAND_STATES);
    }

    #[test]
    fn excitation_conserves_states() {
        for material in BandMaterial::ALL {
            for thermal in ThermalState::ALL {
                let r = evaluate_bands(&BandSetup {
                    band_material: *material,
                    thermal_state: *thermal,
                });
                assert_eq!(r.conduction_electrons + r.valence_electrons, BAND_STATES);
                assert_eq!(r.holes, r.conduction_electrons);
            }
        }
    }
}
