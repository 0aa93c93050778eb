use core::fmt;

use thiserror::Error;

use crate::CorrelationKind;

/// Result alias used by every fallible operation in this crate
pub type Result<T> = core::result::Result<T, CorrelationError>;

/// Errors reported by the correlation entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// The paired sequences do not form a usable sample
    #[error(transparent)]
    InputShape(#[from] InputShape),

    /// One or both variables have zero (or negative) variance
    #[error("correlation undefined: one or both variables have zero variance")]
    DegenerateInput,

    /// Two same-signed infinities would have to be subtracted
    #[error("correlation undefined: infinite values with same sign detected in {0}")]
    SameSignInfinities(Quantity),

    /// A derived quantity is NaN or infinite
    #[error("correlation undefined: {0} is not finite")]
    Indeterminate(Quantity),

    /// A runtime-typed element is not one of the recognized numeric representations
    #[error("unsupported type at index {index}")]
    UnsupportedType {
        /// Position of the offending element
        index: usize,
    },

    /// An element carries no usable numeric value
    #[error("invalid input at index {index}: {source}")]
    InvalidInput {
        /// Position of the offending element
        index: usize,
        /// What is wrong with the element
        source: InvalidValue,
    },

    /// The requested correlation kind has no algorithm yet
    #[error("{0} correlation is not implemented")]
    NotImplemented(CorrelationKind),
}

impl CorrelationError {
    /// Returns `true` when the arbitrary-precision path could not give the
    /// subtraction of two sums a defined value
    pub const fn is_precision_undefined(&self) -> bool {
        matches!(self, Self::SameSignInfinities(_) | Self::Indeterminate(_))
    }
}

/// Shape violations of a sample pair sequence
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// Either sequence is empty
    #[error("input slices cannot be empty")]
    Empty,

    /// The sequences differ in length
    #[error("input slices must have the same length ({x_len} != {y_len})")]
    LengthMismatch {
        /// Length of `x`
        x_len: usize,
        /// Length of `y`
        y_len: usize,
    },

    /// A single pair cannot establish a relationship
    #[error("correlation requires at least 2 data points, got {0}")]
    TooFewPoints(usize),
}

/// Problems with a single element found during normalization
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValue {
    /// The element is NaN
    #[error("value is not a number")]
    NotANumber,

    /// An arbitrary-precision element was absent
    #[error("arbitrary-precision value is missing")]
    Missing,
}

/// Intermediate quantities of the coefficient derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// `Σxy - ΣxΣy / n`
    Covariance,
    /// `Σx² - (Σx)² / n`
    VarianceX,
    /// `Σy² - (Σy)² / n`
    VarianceY,
    /// `covariance / sqrt(variance_x * variance_y)`
    Coefficient,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Covariance => "the covariance term",
            Self::VarianceX => "the variance of x",
            Self::VarianceY => "the variance of y",
            Self::Coefficient => "the coefficient",
        })
    }
}

/// Reason the machine-precision path declined to produce a coefficient
///
/// Both reasons are resolved by recomputing in arbitrary precision; neither
/// says anything about the input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accumulation {
    /// Sums left the dynamic range of the working representation
    Overflow,
    /// Rounding in the sums may have consumed the variance of a variable
    Cancellation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_convert() {
        let err: CorrelationError = InputShape::TooFewPoints(1).into();
        assert_eq!(err, CorrelationError::InputShape(InputShape::TooFewPoints(1)));
        assert_eq!(
            err.to_string(),
            "correlation requires at least 2 data points, got 1"
        );
    }

    #[test]
    fn same_sign_message_names_quantity() {
        let err = CorrelationError::SameSignInfinities(Quantity::VarianceY);
        assert_eq!(
            err.to_string(),
            "correlation undefined: infinite values with same sign detected in the variance of y"
        );
        assert!(err.is_precision_undefined());
        assert!(!CorrelationError::DegenerateInput.is_precision_undefined());
    }

    #[test]
    fn invalid_input_reports_index() {
        let err = CorrelationError::InvalidInput {
            index: 3,
            source: InvalidValue::Missing,
        };
        assert_eq!(
            err.to_string(),
            "invalid input at index 3: arbitrary-precision value is missing"
        );
    }
}
