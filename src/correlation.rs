use core::{any::Any, fmt};

use rug::Float;
use tracing::{debug, instrument};

use crate::{
    BigNumeric, CorrelationConfig, CorrelationError, Primitive, Result, Strategy, ToBigFloat,
    helper::{is_constant, validate_shape},
    normalize, normalize_any, pearson,
};

/// The correlation coefficient to compute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CorrelationKind {
    /// Pearson's product-moment coefficient (linear association)
    #[default]
    Pearson,
    /// Spearman's rank coefficient (monotonic association)
    Spearman,
    /// Kendall's rank coefficient (ordinal association)
    KendallTau,
    /// Goodman and Kruskal's gamma (ordinal association ignoring ties)
    GoodmanKruskal,
}

impl fmt::Display for CorrelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pearson => "Pearson",
            Self::Spearman => "Spearman",
            Self::KendallTau => "Kendall's Tau",
            Self::GoodmanKruskal => "Goodman and Kruskal's Gamma",
        })
    }
}

/// Routes paired sequences to the algorithm of the requested correlation kind.
///
/// Every kind goes through the same validation before its algorithm runs:
/// both sequences non-empty and of equal length `n >= 2`, and neither
/// sequence constant. Only [`CorrelationKind::Pearson`] has an algorithm;
/// the rank-based kinds report [`CorrelationError::NotImplemented`].
///
/// All state lives inside a single call; a `Correlator` only carries its
/// configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Correlator {
    /// Run configuration
    config: CorrelationConfig,
}

impl Correlator {
    /// Creates a correlator with the default configuration
    ///
    /// # Returns
    ///
    /// * `Self` - The correlator
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a correlator with the given configuration
    pub const fn with_config(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration
    pub const fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Sets the working precision of the arbitrary-precision path
    ///
    /// # Arguments
    ///
    /// * `precision` - Significand width in bits
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The correlator for method chaining
    pub fn set_precision(&mut self, precision: u32) -> &mut Self {
        self.config.set_precision(precision);
        self
    }

    /// Sets how the machine and arbitrary-precision paths are chosen
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The correlator for method chaining
    pub const fn set_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.config.set_strategy(strategy);
        self
    }

    /// Correlates two sequences of the same native numeric type
    ///
    /// Accumulates in `f64` and escalates to arbitrary precision when the
    /// sums overflow.
    ///
    /// # Arguments
    ///
    /// * `x` - First variable
    /// * `y` - Second variable, paired with `x` by index
    /// * `kind` - The coefficient to compute
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The coefficient in `[-1, 1]`
    ///
    /// # Examples
    ///
    /// ```
    /// use correlation_stats::{CorrelationKind, Correlator, Strategy};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut correlator = Correlator::new();
    /// correlator.set_precision(512).set_strategy(Strategy::ArbitraryPrecision);
    ///
    /// let corr = correlator
    ///     .correlate(&[1u16, 2, 3, 4, 5], &[10, 8, 6, 4, 2], CorrelationKind::Pearson)
    ///     .unwrap();
    /// assert_approx_eq!(corr, -1.0, 1e-12);
    /// ```
    #[instrument(level = "trace", skip_all, fields(kind = %kind, n = x.len()))]
    pub fn correlate<T: Primitive>(&self, x: &[T], y: &[T], kind: CorrelationKind) -> Result<f64> {
        validate_shape(x.len(), y.len())?;
        if is_constant(x) || is_constant(y) {
            return Err(CorrelationError::DegenerateInput);
        }

        match kind {
            CorrelationKind::Pearson => pearson::pearson(x, y, &self.config),
            CorrelationKind::Spearman
            | CorrelationKind::KendallTau
            | CorrelationKind::GoodmanKruskal => not_implemented(kind),
        }
    }

    /// Correlates two sequences of arbitrary-precision values
    ///
    /// # Arguments
    ///
    /// * `x` - First variable
    /// * `y` - Second variable, paired with `x` by index
    /// * `kind` - The coefficient to compute
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The coefficient in `[-1, 1]`; same-signed infinite sums
    ///   are reported as [`CorrelationError::SameSignInfinities`]
    #[instrument(level = "trace", skip_all, fields(kind = %kind, n = x.len()))]
    pub fn correlate_big<T: BigNumeric>(
        &self,
        x: &[T],
        y: &[T],
        kind: CorrelationKind,
    ) -> Result<f64> {
        self.correlate_mixed(x, y, kind)
    }

    /// Correlates two sequences whose elements may use any supported representation
    ///
    /// Both sequences are normalized to arbitrary-precision floats first.
    ///
    /// # Arguments
    ///
    /// * `x` - First variable
    /// * `y` - Second variable, paired with `x` by index
    /// * `kind` - The coefficient to compute
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The coefficient in `[-1, 1]`
    #[instrument(level = "trace", skip_all, fields(kind = %kind, n = x.len()))]
    pub fn correlate_mixed<A: ToBigFloat, B: ToBigFloat>(
        &self,
        x: &[A],
        y: &[B],
        kind: CorrelationKind,
    ) -> Result<f64> {
        validate_shape(x.len(), y.len())?;
        let (x, y) = (normalize(x)?, normalize(y)?);
        self.correlate_normalized(&x, &y, kind)
    }

    /// Correlates two sequences whose element types are only known at runtime
    ///
    /// Elements outside the recognized representations are reported as
    /// [`CorrelationError::UnsupportedType`] with their position.
    ///
    /// # Arguments
    ///
    /// * `x` - First variable
    /// * `y` - Second variable, paired with `x` by index
    /// * `kind` - The coefficient to compute
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The coefficient in `[-1, 1]`
    #[instrument(level = "trace", skip_all, fields(kind = %kind, n = x.len()))]
    pub fn correlate_any(
        &self,
        x: &[&dyn Any],
        y: &[&dyn Any],
        kind: CorrelationKind,
    ) -> Result<f64> {
        validate_shape(x.len(), y.len())?;
        let (x, y) = (normalize_any(x)?, normalize_any(y)?);
        self.correlate_normalized(&x, &y, kind)
    }

    fn correlate_normalized(&self, x: &[Float], y: &[Float], kind: CorrelationKind) -> Result<f64> {
        if is_constant(x) || is_constant(y) {
            return Err(CorrelationError::DegenerateInput);
        }

        match kind {
            CorrelationKind::Pearson => pearson::pearson_big(x, y, &self.config),
            CorrelationKind::Spearman
            | CorrelationKind::KendallTau
            | CorrelationKind::GoodmanKruskal => not_implemented(kind),
        }
    }
}

fn not_implemented(kind: CorrelationKind) -> Result<f64> {
    debug!(kind = %kind, "correlation kind has no algorithm");
    Err(CorrelationError::NotImplemented(kind))
}

/// Computes the requested correlation coefficient of two native sequences
///
/// Returns a value between -1 and 1, where:
///
/// - 1 indicates a perfect positive relationship
/// - 0 indicates no relationship
/// - -1 indicates a perfect negative relationship
///
/// Sums that overflow `f64` are transparently recomputed in arbitrary precision.
///
/// # Arguments
///
/// * `x` - First variable
/// * `y` - Second variable, paired with `x` by index
/// * `kind` - The coefficient to compute
///
/// # Returns
///
/// * `Result<f64>` - The coefficient, or an error for empty, mismatched, too short or
///   zero-variance input
///
/// # Examples
///
/// ```
/// use correlation_stats::{correlate, CorrelationError, CorrelationKind};
/// use assert_approx_eq::assert_approx_eq;
///
/// let corr = correlate(&[43, 21, 25, 42, 57, 59], &[99, 65, 79, 75, 87, 81], CorrelationKind::Pearson);
/// assert_approx_eq!(corr.unwrap(), 0.529, 0.001);
///
/// let corr = correlate(&[3.0, 3.0, 3.0, 3.0], &[1.0, 2.0, 3.0, 4.0], CorrelationKind::Pearson);
/// assert_eq!(corr, Err(CorrelationError::DegenerateInput));
/// ```
pub fn correlate<T: Primitive>(x: &[T], y: &[T], kind: CorrelationKind) -> Result<f64> {
    Correlator::default().correlate(x, y, kind)
}

/// Computes the requested correlation coefficient of two arbitrary-precision sequences
///
/// # Examples
///
/// ```
/// use correlation_stats::{correlate_big, CorrelationKind};
/// use rug::Float;
///
/// let x: Vec<Float> = ["1e400", "2e400", "3e400", "4e400", "5e400"]
///     .iter()
///     .map(|v| Float::with_val(128, Float::parse(v).unwrap()))
///     .collect();
/// let y: Vec<Float> = x.iter().map(|v| Float::with_val(128, v * 2u32)).collect();
///
/// let corr = correlate_big(&x, &y, CorrelationKind::Pearson).unwrap();
/// assert!((corr - 1.0).abs() < 1e-12);
/// ```
pub fn correlate_big<T: BigNumeric>(x: &[T], y: &[T], kind: CorrelationKind) -> Result<f64> {
    Correlator::default().correlate_big(x, y, kind)
}

/// Computes the requested correlation coefficient of two sequences of possibly
/// different numeric representations
///
/// # Examples
///
/// ```
/// use correlation_stats::{correlate_mixed, CorrelationKind, Numeric};
/// use rug::Integer;
/// use assert_approx_eq::assert_approx_eq;
///
/// let x = [1_000_000_000_000_000i64, 2_000_000_000_000_000, 3_000_000_000_000_000];
/// let y = [Numeric::from(2e-10), Numeric::from(Integer::from(4)), Numeric::from(6u8)];
/// let corr = correlate_mixed(&x, &y, CorrelationKind::Pearson).unwrap();
/// assert_approx_eq!(corr, 0.982, 0.001);
/// ```
pub fn correlate_mixed<A: ToBigFloat, B: ToBigFloat>(
    x: &[A],
    y: &[B],
    kind: CorrelationKind,
) -> Result<f64> {
    Correlator::default().correlate_mixed(x, y, kind)
}

/// Computes the requested correlation coefficient of two runtime-typed sequences
///
/// # Examples
///
/// ```
/// use correlation_stats::{correlate_any, CorrelationError, CorrelationKind};
/// use rug::Integer;
///
/// let big = Integer::from(30);
/// let x: [&dyn std::any::Any; 3] = [&1u8, &2i64, &3.0f32];
/// let y: [&dyn std::any::Any; 3] = [&10u16, &20.0f64, &big];
/// let corr = correlate_any(&x, &y, CorrelationKind::Pearson).unwrap();
/// assert!((corr - 1.0).abs() < 1e-12);
///
/// let y: [&dyn std::any::Any; 3] = [&10u16, &"20", &big];
/// let err = correlate_any(&x, &y, CorrelationKind::Pearson).unwrap_err();
/// assert_eq!(err, CorrelationError::UnsupportedType { index: 1 });
/// ```
pub fn correlate_any(x: &[&dyn Any], y: &[&dyn Any], kind: CorrelationKind) -> Result<f64> {
    Correlator::default().correlate_any(x, y, kind)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rug::{Integer, float::Special};

    use super::*;
    use crate::{InputShape, InvalidValue, Numeric, Quantity};

    #[test]
    fn kind_names() {
        assert_eq!(CorrelationKind::default(), CorrelationKind::Pearson);
        assert_eq!(CorrelationKind::KendallTau.to_string(), "Kendall's Tau");
        assert_eq!(
            CorrelationKind::GoodmanKruskal.to_string(),
            "Goodman and Kruskal's Gamma"
        );
    }

    #[test]
    fn correlate_works() {
        let cases: [(&[f64], &[f64], f64); 4] = [
            (&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0], 1.0),
            (&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 8.0, 6.0, 4.0, 2.0], -1.0),
            (
                &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
                &[1.5, 2.2, 2.8, 4.1, 4.9, 6.2, 7.1, 7.8, 9.2, 10.1],
                0.998,
            ),
            (
                &[43.0, 21.0, 25.0, 42.0, 57.0, 59.0],
                &[99.0, 65.0, 79.0, 75.0, 87.0, 81.0],
                0.529,
            ),
        ];
        for (x, y, expected) in cases {
            let corr = correlate(x, y, CorrelationKind::Pearson).unwrap();
            assert_approx_eq!(corr, expected, 0.001);
        }
    }

    #[test]
    fn shape_errors() {
        let pearson = CorrelationKind::Pearson;
        assert_eq!(
            correlate::<f64>(&[], &[], pearson),
            Err(InputShape::Empty.into())
        );
        assert_eq!(
            correlate(&[1.0, 2.0, 3.0], &[1.0, 2.0], pearson),
            Err(InputShape::LengthMismatch { x_len: 3, y_len: 2 }.into())
        );
        assert_eq!(
            correlate(&[1], &[1], pearson),
            Err(InputShape::TooFewPoints(1).into())
        );
        assert_eq!(
            correlate_big::<Integer>(&[], &[], pearson),
            Err(InputShape::Empty.into())
        );
    }

    #[test]
    fn zero_variance_errors() {
        let pearson = CorrelationKind::Pearson;
        assert_eq!(
            correlate(&[3, 3, 3, 3], &[1, 2, 3, 4], pearson),
            Err(CorrelationError::DegenerateInput)
        );
        assert_eq!(
            correlate(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0; 5], pearson),
            Err(CorrelationError::DegenerateInput)
        );
        let x = [0.1, 0.1, 0.1];
        assert_eq!(
            correlate_mixed(&x, &[1, 2, 3], pearson),
            Err(CorrelationError::DegenerateInput)
        );
    }

    #[test]
    fn rank_kinds_are_not_implemented() {
        let x = [1, 2, 3, 4];
        let y = [2, 4, 6, 8];
        for kind in [
            CorrelationKind::Spearman,
            CorrelationKind::KendallTau,
            CorrelationKind::GoodmanKruskal,
        ] {
            assert_eq!(
                correlate(&x, &y, kind),
                Err(CorrelationError::NotImplemented(kind))
            );
            assert_eq!(
                correlate_mixed(&x, &y, kind),
                Err(CorrelationError::NotImplemented(kind))
            );
            // validation runs first
            assert_eq!(
                correlate(&x[..1], &y[..1], kind),
                Err(InputShape::TooFewPoints(1).into())
            );
        }
        assert_eq!(
            CorrelationError::NotImplemented(CorrelationKind::Spearman).to_string(),
            "Spearman correlation is not implemented"
        );
    }

    #[test]
    fn native_types() {
        let pearson = CorrelationKind::Pearson;
        assert_approx_eq!(correlate(&[1i8, 2, 3], &[2, 4, 6], pearson).unwrap(), 1.0, 1e-12);
        assert_approx_eq!(
            correlate(&[1i32, 2, 3, 4, 5], &[10, 8, 6, 4, 2], pearson).unwrap(),
            -1.0,
            1e-12
        );
        assert_approx_eq!(
            correlate(&[10u64, 20, 30, 40, 50], &[5, 10, 15, 20, 25], pearson).unwrap(),
            1.0,
            1e-12
        );
        assert_approx_eq!(
            correlate(&[1.1f32, 2.2, 3.3, 4.4, 5.5], &[2.2, 4.4, 6.6, 8.8, 11.0], pearson)
                .unwrap(),
            1.0,
            1e-6
        );
        assert_approx_eq!(
            correlate(&[usize::MAX, 1, 2], &[3usize, 1, 1], pearson).unwrap(),
            1.0,
            1e-6
        );
    }

    #[test]
    fn huge_native_values_escalate() {
        let x = [1e200, 2e200, 3e200, 4e200, 5e200];
        let y = [2e200, 4e200, 6e200, 8e200, 10e200];
        assert_approx_eq!(correlate(&x, &y, CorrelationKind::Pearson).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn big_types() {
        let pearson = CorrelationKind::Pearson;
        let x = [Integer::from(10), Integer::from(20), Integer::from(30)];
        let y = [Integer::from(5), Integer::from(10), Integer::from(15)];
        assert_eq!(correlate_big(&x, &y, pearson), Ok(1.0));

        let x = [Float::with_val(64, 1.0), Float::with_val(64, 2.0), Float::with_val(64, 3.0)];
        let y = [Float::with_val(64, 2.0), Float::with_val(64, 4.0), Float::with_val(64, 6.0)];
        assert_eq!(correlate_big(&x, &y, pearson), Ok(1.0));

        let inf = Float::with_val(53, Special::Infinity);
        let x = [Float::with_val(53, 1), Float::with_val(53, 2), inf.clone()];
        let y = [Float::with_val(53, 1), Float::with_val(53, 4), inf];
        let err = correlate_big(&x, &y, pearson).unwrap_err();
        assert_eq!(err, CorrelationError::SameSignInfinities(Quantity::Covariance));
        assert!(err.to_string().contains("infinite values with same sign"));
    }

    #[test]
    fn absent_big_values_are_reported() {
        let x = [Some(Integer::from(1)), Some(Integer::from(2)), None];
        let y = [Some(Integer::from(1)), Some(Integer::from(2)), Some(Integer::from(3))];
        assert_eq!(
            correlate_big(&x, &y, CorrelationKind::Pearson),
            Err(CorrelationError::InvalidInput {
                index: 2,
                source: InvalidValue::Missing
            })
        );
    }

    #[test]
    fn mixed_types() {
        let pearson = CorrelationKind::Pearson;
        let x = [
            1_000_000_000_000_000i64,
            2_000_000_000_000_000,
            3_000_000_000_000_000,
            4_000_000_000_000_000,
        ];
        let y = [2e-10, 4e-10, 6e-10, 8e-10];
        assert_approx_eq!(correlate_mixed(&x, &y, pearson).unwrap(), 1.0, 1e-9);

        let x = [1u8, 2, 3, 4];
        let y = [Integer::from(10), Integer::from(20), Integer::from(30), Integer::from(40)];
        assert_approx_eq!(correlate_mixed(&x, &y, pearson).unwrap(), 1.0, 1e-12);

        let x = [
            Numeric::from(1i16),
            Numeric::from(2u32),
            Numeric::from(3.0f32),
            Numeric::from(Float::with_val(80, 4)),
        ];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert_approx_eq!(correlate_mixed(&x, &y, pearson).unwrap(), -1.0, 1e-12);
    }

    #[test]
    fn offset_data_matches_across_entry_points() {
        let pearson = CorrelationKind::Pearson;
        let x = [1e9, 1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        let native = correlate(&x, &y, pearson).unwrap();
        assert_approx_eq!(native, 1.0, 1e-12);
        assert_approx_eq!(native, correlate_mixed(&x, &y, pearson).unwrap(), 1e-12);

        let x = [u64::MAX, u64::MAX - 1, u64::MAX - 2];
        let y = [3u64, 2, 1];
        let native = correlate(&x, &y, pearson).unwrap();
        assert_approx_eq!(native, 1.0, 1e-12);
        assert_approx_eq!(native, correlate_mixed(&x, &y, pearson).unwrap(), 1e-12);
    }

    #[test]
    fn runtime_typed_values() {
        let pearson = CorrelationKind::Pearson;
        let big = Integer::from(4);
        let x: [&dyn Any; 4] = [&1u8, &2i32, &3.0f64, &big];
        let y: [&dyn Any; 4] = [&8.0f32, &6i64, &4u128, &Some(Integer::from(2))];
        assert_approx_eq!(correlate_any(&x, &y, pearson).unwrap(), -1.0, 1e-12);

        let y: [&dyn Any; 4] = [&8.0f32, &6i64, &'4', &2u8];
        assert_eq!(
            correlate_any(&x, &y, pearson),
            Err(CorrelationError::UnsupportedType { index: 2 })
        );
        assert_eq!(
            correlate_any(&x[..2], &y, pearson),
            Err(InputShape::LengthMismatch { x_len: 2, y_len: 4 }.into())
        );

        let y: [&dyn Any; 4] = [&5u8, &5u8, &5u8, &5u8];
        assert_eq!(correlate_any(&x, &y, pearson), Err(CorrelationError::DegenerateInput));
        assert_eq!(
            correlate_any(&x, &x, CorrelationKind::Spearman),
            Err(CorrelationError::NotImplemented(CorrelationKind::Spearman))
        );
    }

    #[test]
    fn configured_correlator() {
        let mut correlator = Correlator::new();
        correlator.set_strategy(Strategy::ArbitraryPrecision).set_precision(64);
        assert_eq!(correlator.config().precision(), 64);

        let x = [43, 21, 25, 42, 57, 59];
        let y = [99, 65, 79, 75, 87, 81];
        let exact = correlator.correlate(&x, &y, CorrelationKind::Pearson).unwrap();
        let fast = correlate(&x, &y, CorrelationKind::Pearson).unwrap();
        assert_approx_eq!(exact, fast, 1e-10);

        let same = Correlator::with_config(*correlator.config());
        assert_eq!(same, correlator);
    }
}
