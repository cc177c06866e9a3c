//! The single error type shared by the validator, evaluators and layout mapper.

use thiserror::Error;

use crate::math::Scalar;

/// Raised when experiment parameters fall outside their documented domain.
///
/// Every stage of the pipeline reports failure through this type; the caller
/// abandons the current evaluation and keeps whatever it last rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    /// The `kind` string names no known visualization.
    #[error("unknown experiment kind `{0}`")]
    UnknownKind(String),
    /// An enumerated field carried a string outside its vocabulary.
    #[error("unknown {field} `{value}`")]
    UnknownVariant {
        /// Field that failed to parse.
        field: &'static str,
        /// Offending value as received.
        value: String,
    },
    /// A field required by the experiment kind was absent.
    #[error("{kind} experiment requires `{field}`")]
    MissingField {
        /// Experiment kind being normalized.
        kind: &'static str,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A numeric field was NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the numeric field.
        field: &'static str,
        /// Received value.
        value: Scalar,
    },
    /// A value lies outside the domain where the formula is defined.
    #[error("`{field}` = {value} is out of domain: {reason}")]
    OutOfDomain {
        /// Name of the quantity.
        field: &'static str,
        /// Received value.
        value: Scalar,
        /// Short description of the violated constraint.
        reason: &'static str,
    },
    /// Canvas dimensions must be finite and positive.
    #[error("invalid canvas {width}x{height}")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: Scalar,
        /// Requested height in pixels.
        height: Scalar,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InvalidParameterError>;

/// Rejects NaN and infinities for `field`.
pub(crate) fn ensure_finite(field: &'static str, value: Scalar) -> Result<Scalar> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidParameterError::NonFinite { field, value })
    }
}

/// Rejects temperatures at or below absolute zero, where `1/T` diverges.
pub(crate) fn ensure_positive_temperature(value: Scalar) -> Result<Scalar> {
    let value = ensure_finite("temperature_kelvin", value)?;
    if value <= 0.0 {
        return Err(InvalidParameterError::OutOfDomain {
            field: "temperature_kelvin",
            value,
            reason: "temperature must be above 0 K",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = InvalidParameterError::MissingField {
            kind: "rectifier",
            field: "rectifier_type",
        };
        assert_eq!(err.to_string(), "rectifier experiment requires `rectifier_type`");
    }

    #[test]
    fn zero_kelvin_is_rejected() {
        assert!(matches!(
            ensure_positive_temperature(0.0),
            Err(InvalidParameterError::OutOfDomain { .. })
        ));
        assert!(matches!(
            ensure_positive_temperature(Scalar::NAN),
            Err(InvalidParameterError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive_temperature(300.0), Ok(300.0));
    }
}
