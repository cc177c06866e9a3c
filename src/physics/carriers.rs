//! Carrier statistics: intrinsic generation, conductivity, and the mass-action law.

use crate::constants::{
    dopant_density, temperature_fraction, BOLTZMANN_EV, REFERENCE_TEMPERATURE,
    SILICON_BAND_GAP_EV, SILICON_BAND_GAP_SLOPE, SILICON_NI_300K, SILICON_SIGMA_300K,
};
use crate::errors::{ensure_finite, ensure_positive_temperature, Result};
use crate::math::Scalar;
use crate::params::{DopingSetup, DopingType, IntrinsicSetup};

/// Most electron-hole pairs drawn in the intrinsic lattice.
pub const INTRINSIC_LATTICE_PAIRS: usize = 5;
/// Most thermally generated pairs drawn in the doped lattice.
pub const DOPED_LATTICE_PAIRS: usize = 4;

/// Intrinsic carrier concentration of silicon at `kelvin`, in cm⁻³.
///
/// `ni(T) = ni(300) · (T/300)^1.5 · exp(−Eg/(2k) · (1/T − 1/300))`
///
/// # Errors
///
/// Fails for non-finite temperatures and for `T ≤ 0`, where `1/T` diverges.
pub fn intrinsic_concentration(kelvin: Scalar) -> Result<Scalar> {
    let t = ensure_positive_temperature(kelvin)?;
    let ratio = t / REFERENCE_TEMPERATURE;
    let activation = SILICON_BAND_GAP_EV / (2.0 * BOLTZMANN_EV);
    Ok(SILICON_NI_300K
        * ratio.powf(1.5)
        * (-activation * (1.0 / t - 1.0 / REFERENCE_TEMPERATURE)).exp())
}

/// Conductivity of intrinsic silicon at `kelvin`, in S/m; proportional to `ni`.
///
/// # Errors
///
/// Same domain as [`intrinsic_concentration`].
pub fn conductivity(kelvin: Scalar) -> Result<Scalar> {
    Ok(SILICON_SIGMA_300K * intrinsic_concentration(kelvin)? / SILICON_NI_300K)
}

/// Linearized silicon band gap at `kelvin`, in eV.
#[must_use]
pub fn band_gap(kelvin: Scalar) -> Scalar {
    SILICON_BAND_GAP_EV - SILICON_BAND_GAP_SLOPE * (kelvin - REFERENCE_TEMPERATURE)
}

/// Number of thermally generated pairs to draw, out of at most `max_pairs`.
#[must_use]
pub fn thermal_pair_count(kelvin: Scalar, max_pairs: usize) -> usize {
    (temperature_fraction(kelvin) * max_pairs as Scalar).floor() as usize
}

/// Electron and hole densities of a doped sample at equilibrium.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarrierResult {
    /// Dopant class.
    pub doping_type: DopingType,
    /// Slider exponent the densities derive from.
    pub exponent: Scalar,
    /// Dopant density `10^(e + 10)` (cm⁻³).
    pub dopant_concentration: Scalar,
    /// Free electron density (cm⁻³).
    pub electron_concentration: Scalar,
    /// Free hole density (cm⁻³).
    pub hole_concentration: Scalar,
    /// Intrinsic density used for the balance (cm⁻³).
    pub intrinsic_concentration: Scalar,
    /// Lattice temperature (K).
    pub temperature: Scalar,
    /// Thermally generated pairs drawn in the lattice.
    pub thermal_pairs: usize,
}

impl CarrierResult {
    /// Density of the carrier supplied by the dopant.
    #[must_use]
    pub const fn majority(&self) -> Scalar {
        match self.doping_type {
            DopingType::NType => self.electron_concentration,
            DopingType::PType => self.hole_concentration,
        }
    }

    /// Density of the opposite carrier.
    #[must_use]
    pub const fn minority(&self) -> Scalar {
        match self.doping_type {
            DopingType::NType => self.hole_concentration,
            DopingType::PType => self.electron_concentration,
        }
    }

    /// `n · p`, equal to `ni²` at equilibrium.
    #[must_use]
    pub fn np_product(&self) -> Scalar {
        self.electron_concentration * self.hole_concentration
    }
}

/// Splits a doping level into majority and minority densities via `n · p = ni²`.
///
/// The balance is taken at the 300 K reference `ni`; the lattice temperature
/// only changes how many thermal pairs are drawn.
///
/// # Errors
///
/// Fails when the exponent or temperature is outside the evaluator's domain.
pub fn evaluate_doping(setup: &DopingSetup) -> Result<CarrierResult> {
    let exponent = ensure_finite("doping_concentration_exponent", setup.exponent)?;
    let temperature = ensure_positive_temperature(setup.temperature)?;
    let ni = SILICON_NI_300K;
    let majority = dopant_density(exponent);
    let minority = ni * ni / majority;
    let (electrons, holes) = match setup.doping_type {
        DopingType::NType => (majority, minority),
        DopingType::PType => (minority, majority),
    };
    Ok(CarrierResult {
        doping_type: setup.doping_type,
        exponent,
        dopant_concentration: majority,
        electron_concentration: electrons,
        hole_concentration: holes,
        intrinsic_concentration: ni,
        temperature,
        thermal_pairs: thermal_pair_count(temperature, DOPED_LATTICE_PAIRS),
    })
}

/// Temperature response of an undoped sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicResult {
    /// Temperature (K).
    pub temperature: Scalar,
    /// Intrinsic carrier concentration (cm⁻³).
    pub intrinsic_concentration: Scalar,
    /// Conductivity (S/m).
    pub conductivity: Scalar,
    /// Band gap (eV).
    pub band_gap_ev: Scalar,
    /// Electron-hole pairs drawn in the lattice.
    pub pair_count: usize,
}

/// Evaluates `ni`, `σ`, the band gap and the drawn pair count at a temperature.
///
/// # Errors
///
/// Fails for non-positive or non-finite temperatures.
pub fn evaluate_intrinsic(setup: &IntrinsicSetup) -> Result<IntrinsicResult> {
    let temperature = ensure_positive_temperature(setup.temperature)?;
    Ok(IntrinsicResult {
        temperature,
        intrinsic_concentration: intrinsic_concentration(temperature)?,
        conductivity: conductivity(temperature)?,
        band_gap_ev: band_gap(temperature),
        pair_count: thermal_pair_count(temperature, INTRINSIC_LATTICE_PAIRS) + 1,
    })
}
