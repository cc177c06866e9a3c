//! Raw UI parameters, their typed vocabulary, and the normalizing validator.
//!
//! Controls hand over loosely typed records: numbers from sliders and
//! enumerated strings from toggle buttons. [`normalize`] turns such a record
//! into an [`Experiment`], which carries exactly the clamped fields its kind
//! needs. Everything downstream works on `Experiment` only.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::constants::{
    DIODE_VOLTAGE_RANGE, DOPING_EXPONENT_RANGE, MAX_TEMPERATURE, MIN_TEMPERATURE,
    RECTIFIER_STEP, REFERENCE_TEMPERATURE,
};
use crate::errors::{ensure_finite, ensure_positive_temperature, InvalidParameterError, Result};
use crate::math::Scalar;

/// Declares a closed string vocabulary with `FromStr`/`Display` impls.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical string form, as sent by the UI controls.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = InvalidParameterError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(InvalidParameterError::UnknownVariant {
                        field: $field,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Visualization requested by the page.
    ExperimentKind, "kind" {
        /// Diode V-I characteristic.
        Diode => "diode",
        /// Half/full-wave rectifier waveforms.
        Rectifier => "rectifier",
        /// Energy band diagram of a metal, semiconductor or insulator.
        BandDiagram => "band-diagram",
        /// Doped lattice and mass-action carrier balance.
        Doping => "doping",
        /// P-N junction under bias.
        PnJunction => "pn-junction",
        /// Intrinsic lattice and temperature dependence.
        Intrinsic => "intrinsic",
    }
}

vocabulary! {
    /// Diode material.
    Material, "material" {
        /// Silicon (Vth = 0.7 V).
        Silicon => "silicon",
        /// Germanium (Vth = 0.3 V).
        Germanium => "germanium",
    }
}

vocabulary! {
    /// Dopant species class.
    DopingType, "doping_type" {
        /// Donor-doped; electrons are the majority carrier.
        NType => "n-type",
        /// Acceptor-doped; holes are the majority carrier.
        PType => "p-type",
    }
}

vocabulary! {
    /// External bias across a p-n junction.
    BiasMode, "bias_mode" {
        /// Equilibrium.
        None => "none",
        /// P side positive.
        Forward => "forward",
        /// N side positive.
        Reverse => "reverse",
    }
}

vocabulary! {
    /// Rectifier topology.
    RectifierType, "rectifier_type" {
        /// Single diode; negative half-cycles are blocked.
        HalfWave => "half-wave",
        /// Centre-tapped pair; negative half-cycles are inverted.
        FullWave => "full-wave",
    }
}

vocabulary! {
    /// Solid class shown by the energy band diagram.
    BandMaterial, "band_material" {
        /// Overlapping bands.
        Metal => "metal",
        /// Narrow gap.
        Semiconductor => "semiconductor",
        /// Wide gap.
        Insulator => "insulator",
    }
}

vocabulary! {
    /// Coarse temperature toggle of the band diagram.
    ThermalState, "thermal_state" {
        /// Near absolute zero; no thermal excitation.
        Low => "low",
        /// Room temperature and above.
        High => "high",
    }
}

/// Loosely typed record as produced by UI controls.
///
/// Only the fields relevant to `kind` are inspected; the rest are ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentParameters {
    /// Visualization kind, e.g. `"diode"`.
    pub kind: String,
    /// Applied voltage in volts (diode).
    pub voltage: Option<Scalar>,
    /// Temperature in kelvin.
    pub temperature_kelvin: Option<Scalar>,
    /// Doping slider value; dopant density is `10^(e + 10)` cm⁻³.
    pub doping_concentration_exponent: Option<Scalar>,
    /// `"n-type"` or `"p-type"`.
    pub doping_type: Option<String>,
    /// `"silicon"` or `"germanium"`.
    pub material: Option<String>,
    /// `"none"`, `"forward"` or `"reverse"`.
    pub bias_mode: Option<String>,
    /// `"half-wave"` or `"full-wave"`.
    pub rectifier_type: Option<String>,
    /// Whether a smoothing capacitor is fitted across the load.
    pub with_capacitor: Option<bool>,
    /// Oscillator phase of the rectifier input (any real; wrapped into [0, 1)).
    pub phase: Option<Scalar>,
    /// Previous filtered rectifier output, carried by the animation driver.
    pub capacitor_voltage: Option<Scalar>,
    /// Phase elapsed since `capacitor_voltage` was taken (defaults to one sample step).
    pub time_step: Option<Scalar>,
    /// `"metal"`, `"semiconductor"` or `"insulator"`.
    pub band_material: Option<String>,
    /// `"low"` or `"high"`.
    pub thermal_state: Option<String>,
}

impl ExperimentParameters {
    /// Creates an empty record for `kind`.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Sets the applied voltage.
    #[must_use]
    pub fn with_voltage(mut self, volts: Scalar) -> Self {
        self.voltage = Some(volts);
        self
    }

    /// Sets the temperature in kelvin.
    #[must_use]
    pub fn with_temperature(mut self, kelvin: Scalar) -> Self {
        self.temperature_kelvin = Some(kelvin);
        self
    }

    /// Sets the doping slider exponent.
    #[must_use]
    pub fn with_doping_exponent(mut self, exponent: Scalar) -> Self {
        self.doping_concentration_exponent = Some(exponent);
        self
    }

    /// Sets the doping type string.
    #[must_use]
    pub fn with_doping_type(mut self, doping_type: impl Into<String>) -> Self {
        self.doping_type = Some(doping_type.into());
        self
    }

    /// Sets the diode material string.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Sets the junction bias string.
    #[must_use]
    pub fn with_bias_mode(mut self, bias: impl Into<String>) -> Self {
        self.bias_mode = Some(bias.into());
        self
    }

    /// Sets the rectifier topology string.
    #[must_use]
    pub fn with_rectifier_type(mut self, rectifier: impl Into<String>) -> Self {
        self.rectifier_type = Some(rectifier.into());
        self
    }

    /// Enables or disables the smoothing capacitor.
    #[must_use]
    pub fn with_capacitor(mut self, fitted: bool) -> Self {
        self.with_capacitor = Some(fitted);
        self
    }

    /// Sets the oscillator phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Scalar) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Sets the carried capacitor voltage.
    #[must_use]
    pub fn with_capacitor_voltage(mut self, volts: Scalar) -> Self {
        self.capacitor_voltage = Some(volts);
        self
    }

    /// Sets the phase elapsed since the carried capacitor voltage.
    #[must_use]
    pub fn with_time_step(mut self, step: Scalar) -> Self {
        self.time_step = Some(step);
        self
    }

    /// Sets the band diagram material string.
    #[must_use]
    pub fn with_band_material(mut self, material: impl Into<String>) -> Self {
        self.band_material = Some(material.into());
        self
    }

    /// Sets the band diagram thermal toggle string.
    #[must_use]
    pub fn with_thermal_state(mut self, state: impl Into<String>) -> Self {
        self.thermal_state = Some(state.into());
        self
    }
}

/// Normalized diode inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeSetup {
    /// Applied voltage, clamped to [-5, 5] V.
    pub voltage: Scalar,
    /// Diode material.
    pub material: Material,
}

/// Normalized rectifier inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectifierSetup {
    /// Topology.
    pub rectifier_type: RectifierType,
    /// Smoothing capacitor fitted.
    pub with_capacitor: bool,
    /// Oscillator phase in [0, 1).
    pub phase: Scalar,
    /// Filter state carried from the previous step, in [0, 1].
    pub capacitor_voltage: Scalar,
    /// Phase elapsed since `capacitor_voltage`, in [0, 1].
    pub time_step: Scalar,
}

/// Normalized band diagram inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSetup {
    /// Solid class.
    pub band_material: BandMaterial,
    /// Thermal toggle.
    pub thermal_state: ThermalState,
}

/// Normalized doping inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DopingSetup {
    /// Dopant class.
    pub doping_type: DopingType,
    /// Slider exponent, clamped to [1, 10].
    pub exponent: Scalar,
    /// Lattice temperature, clamped to [100, 500] K.
    pub temperature: Scalar,
}

/// Normalized junction inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionSetup {
    /// Applied bias.
    pub bias_mode: BiasMode,
}

/// Normalized intrinsic-semiconductor inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicSetup {
    /// Temperature, clamped to [100, 500] K.
    pub temperature: Scalar,
}

/// A validated experiment: one variant per kind, holding only what it needs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Experiment {
    /// Diode V-I characteristic.
    Diode(DiodeSetup),
    /// Rectifier waveforms.
    Rectifier(RectifierSetup),
    /// Energy band diagram.
    BandDiagram(BandSetup),
    /// Doped lattice.
    Doping(DopingSetup),
    /// Biased p-n junction.
    PnJunction(JunctionSetup),
    /// Intrinsic lattice.
    Intrinsic(IntrinsicSetup),
}

impl Experiment {
    /// Kind tag of this experiment.
    #[must_use]
    pub const fn kind(&self) -> ExperimentKind {
        match self {
            Self::Diode(_) => ExperimentKind::Diode,
            Self::Rectifier(_) => ExperimentKind::Rectifier,
            Self::BandDiagram(_) => ExperimentKind::BandDiagram,
            Self::Doping(_) => ExperimentKind::Doping,
            Self::PnJunction(_) => ExperimentKind::PnJunction,
            Self::Intrinsic(_) => ExperimentKind::Intrinsic,
        }
    }
}

/// Validates and clamps a raw parameter record.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when the kind or an enumerated value is
/// unknown, a required field is missing, a number is not finite, or the
/// temperature is at or below 0 K.
pub fn normalize(raw: &ExperimentParameters) -> Result<Experiment> {
    let kind: ExperimentKind = raw
        .kind
        .parse()
        .map_err(|_| InvalidParameterError::UnknownKind(raw.kind.clone()))?;
    let tag = kind.as_str();

    let experiment = match kind {
        ExperimentKind::Diode => {
            let voltage = ensure_finite("voltage", require(tag, "voltage", raw.voltage)?)?;
            Experiment::Diode(DiodeSetup {
                voltage: clamp_logged("voltage", voltage, DIODE_VOLTAGE_RANGE),
                material: parse_required(tag, "material", raw.material.as_deref())?,
            })
        }
        ExperimentKind::Rectifier => {
            let phase = ensure_finite("phase", raw.phase.unwrap_or(0.0))?;
            let held = ensure_finite("capacitor_voltage", raw.capacitor_voltage.unwrap_or(0.0))?;
            let time_step = ensure_finite("time_step", raw.time_step.unwrap_or(RECTIFIER_STEP))?;
            Experiment::Rectifier(RectifierSetup {
                rectifier_type: parse_required(tag, "rectifier_type", raw.rectifier_type.as_deref())?,
                with_capacitor: raw.with_capacitor.unwrap_or(false),
                phase: wrap_phase(phase),
                capacitor_voltage: clamp_logged("capacitor_voltage", held, (0.0, 1.0)),
                time_step: clamp_logged("time_step", time_step, (0.0, 1.0)),
            })
        }
        ExperimentKind::BandDiagram => Experiment::BandDiagram(BandSetup {
            band_material: parse_required(tag, "band_material", raw.band_material.as_deref())?,
            thermal_state: raw
                .thermal_state
                .as_deref()
                .map(str::parse::<ThermalState>)
                .transpose()?
                .unwrap_or(ThermalState::Low),
        }),
        ExperimentKind::Doping => {
            let exponent = ensure_finite(
                "doping_concentration_exponent",
                require(tag, "doping_concentration_exponent", raw.doping_concentration_exponent)?,
            )?;
            let temperature = raw.temperature_kelvin.unwrap_or(REFERENCE_TEMPERATURE);
            Experiment::Doping(DopingSetup {
                doping_type: parse_required(tag, "doping_type", raw.doping_type.as_deref())?,
                exponent: clamp_logged("doping_concentration_exponent", exponent, DOPING_EXPONENT_RANGE),
                temperature: normalize_temperature(temperature)?,
            })
        }
        ExperimentKind::PnJunction => Experiment::PnJunction(JunctionSetup {
            bias_mode: parse_required(tag, "bias_mode", raw.bias_mode.as_deref())?,
        }),
        ExperimentKind::Intrinsic => {
            let temperature = require(tag, "temperature_kelvin", raw.temperature_kelvin)?;
            Experiment::Intrinsic(IntrinsicSetup {
                temperature: normalize_temperature(temperature)?,
            })
        }
    };

    debug!(kind = tag, ?experiment, "parameters normalized");
    Ok(experiment)
}

/// Wraps an oscillator phase into [0, 1).
#[must_use]
pub fn wrap_phase(phase: Scalar) -> Scalar {
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid of a tiny negative value rounds up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

fn normalize_temperature(kelvin: Scalar) -> Result<Scalar> {
    let kelvin = ensure_positive_temperature(kelvin)?;
    Ok(clamp_logged(
        "temperature_kelvin",
        kelvin,
        (MIN_TEMPERATURE, MAX_TEMPERATURE),
    ))
}

fn require<T>(kind: &'static str, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(InvalidParameterError::MissingField { kind, field })
}

fn parse_required<T>(kind: &'static str, field: &'static str, value: Option<&str>) -> Result<T>
where
    T: FromStr<Err = InvalidParameterError>,
{
    require(kind, field, value)?.parse()
}

fn clamp_logged(field: &'static str, value: Scalar, (lo, hi): (Scalar, Scalar)) -> Scalar {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        debug!(field, value, clamped, "parameter clamped into range");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn diode_voltage_is_clamped() {
        let raw = ExperimentParameters::new("diode")
            .with_voltage(9.0)
            .with_material("germanium");
        let Experiment::Diode(setup) = normalize(&raw).expect("valid diode") else {
            panic!("expected diode experiment");
        };
        assert_relative_eq!(setup.voltage, 5.0);
        assert_eq!(setup.material, Material::Germanium);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = normalize(&ExperimentParameters::new("oscilloscope")).unwrap_err();
        assert_eq!(err, InvalidParameterError::UnknownKind("oscilloscope".into()));
    }

    #[test]
    fn rectifier_without_type_is_rejected() {
        let err = normalize(&ExperimentParameters::new("rectifier")).unwrap_err();
        assert_eq!(
            err,
            InvalidParameterError::MissingField {
                kind: "rectifier",
                field: "rectifier_type",
            }
        );
    }

    #[test]
    fn non_positive_temperature_is_an_error_not_a_clamp() {
        for kelvin in [0.0, -40.0] {
            let raw = ExperimentParameters::new("intrinsic").with_temperature(kelvin);
            assert!(matches!(
                normalize(&raw),
                Err(InvalidParameterError::OutOfDomain { field: "temperature_kelvin", .. })
            ));
        }
        let raw = ExperimentParameters::new("intrinsic").with_temperature(20.0);
        let Ok(Experiment::Intrinsic(setup)) = normalize(&raw) else {
            panic!("low but positive temperature should clamp");
        };
        assert_relative_eq!(setup.temperature, MIN_TEMPERATURE);
    }

    #[test]
    fn unknown_enum_string_names_its_field() {
        let raw = ExperimentParameters::new("pn-junction").with_bias_mode("sideways");
        assert_eq!(
            normalize(&raw).unwrap_err(),
            InvalidParameterError::UnknownVariant {
                field: "bias_mode",
                value: "sideways".into(),
            }
        );
    }

    #[test]
    fn rectifier_defaults_and_phase_wrap() {
        let raw = ExperimentParameters::new("rectifier")
            .with_rectifier_type("full-wave")
            .with_phase(-0.25);
        let Ok(Experiment::Rectifier(setup)) = normalize(&raw) else {
            panic!("expected rectifier experiment");
        };
        assert!(!setup.with_capacitor);
        assert_relative_eq!(setup.phase, 0.75);
        assert_relative_eq!(setup.capacitor_voltage, 0.0);
        assert_relative_eq!(setup.time_step, RECTIFIER_STEP);
    }

    #[test]
    fn doping_temperature_defaults_to_reference() {
        let raw = ExperimentParameters::new("doping")
            .with_doping_type("p-type")
            .with_doping_exponent(12.0);
        let Ok(Experiment::Doping(setup)) = normalize(&raw) else {
            panic!("expected doping experiment");
        };
        assert_relative_eq!(setup.exponent, 10.0);
        assert_relative_eq!(setup.temperature, REFERENCE_TEMPERATURE);
    }

    #[test]
    fn nan_voltage_is_rejected() {
        let raw = ExperimentParameters::new("diode")
            .with_voltage(Scalar::NAN)
            .with_material("silicon");
        assert!(matches!(
            normalize(&raw),
            Err(InvalidParameterError::NonFinite { field: "voltage", .. })
        ));
    }

    #[test]
    fn vocabulary_round_trips_through_strings() {
        for kind in ExperimentKind::ALL {
            assert_eq!(kind.as_str().parse::<ExperimentKind>(), Ok(*kind));
        }
        assert_eq!(BandMaterial::Insulator.to_string(), "insulator");
    }

    #[test]
    fn irrelevant_fields_are_ignored() {
        let raw = ExperimentParameters::new("pn-junction")
            .with_bias_mode("reverse")
            .with_material("unobtainium");
        assert_eq!(
            normalize(&raw),
            Ok(Experiment::PnJunction(JunctionSetup {
                bias_mode: BiasMode::Reverse
            }))
        );
    }
}
