use rug::Float;
use tracing::debug;

use crate::{
    CorrelationConfig, Primitive, Result, Strategy, arbitrary_precision::BigSums,
    machine_precision::MachineSums, normalize,
};

/// Pearson's r of two native sequences, escalating to arbitrary precision when needed
///
/// Under [`Strategy::Adaptive`] the sums are first accumulated in `f64`. If
/// they leave the range of `f64`, or rounding may have consumed a variance,
/// the raw inputs (never the spoiled sums) are normalized and the
/// arbitrary-precision pass runs from scratch. Callers validate the sample
/// shape first.
pub(crate) fn pearson<T: Primitive>(x: &[T], y: &[T], config: &CorrelationConfig) -> Result<f64> {
    if config.strategy() == Strategy::Adaptive {
        let sums = MachineSums::accumulate(x, y);
        match sums.coefficient() {
            Ok(corr) => return Ok(corr),
            Err(reason) => debug!(
                n = sums.count(),
                precision = config.precision(),
                ?reason,
                "machine-precision result unusable, escalating to arbitrary precision"
            ),
        }
    }

    pearson_big(&normalize(x)?, &normalize(y)?, config)
}

/// Pearson's r of two normalized sequences
pub(crate) fn pearson_big(x: &[Float], y: &[Float], config: &CorrelationConfig) -> Result<f64> {
    let sums = BigSums::accumulate(x, y, config.precision());
    if sums.precision() > config.precision() {
        debug!(
            requested = config.precision(),
            precision = sums.precision(),
            "widened working precision to fit the inputs"
        );
    }
    sums.coefficient()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::CorrelationError;

    #[test]
    fn machine_path_handles_ordinary_input() {
        let config = CorrelationConfig::default();
        let corr = pearson(&[1, 2, 3, 4, 5], &[2, 4, 6, 8, 10], &config).unwrap();
        assert_approx_eq!(corr, 1.0, 1e-12);
    }

    #[test]
    fn overflow_escalates() {
        let config = CorrelationConfig::default();
        let x = [1e300, 2e300, 3e300, 4e300, 5e300];
        let y = [10e300, 8e300, 6e300, 4e300, 2e300];
        assert_approx_eq!(pearson(&x, &y, &config).unwrap(), -1.0, 1e-12);
    }

    #[test]
    fn underflow_escalates() {
        let config = CorrelationConfig::default();
        let x = [1e-170, 2e-170, 3e-170, 4e-170];
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_approx_eq!(pearson(&x, &y, &config).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn large_offset_escalates() {
        let config = CorrelationConfig::default();
        let x = [1e9, 1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0];
        assert_approx_eq!(pearson(&x, &[1.0, 2.0, 3.0, 4.0], &config).unwrap(), 1.0, 1e-12);

        let x = [1e8, 1e8 + 1.0, 1e8 + 2.0, 1e8 + 3.0, 1e8 + 4.0, 1e8 + 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
        assert_approx_eq!(pearson(&x, &y, &config).unwrap(), 15.5 / 17.5, 1e-12);
    }

    #[test]
    fn wide_integers_escalate() {
        let config = CorrelationConfig::default();
        let x = [u64::MAX, u64::MAX - 1, u64::MAX - 2];
        assert_approx_eq!(pearson(&x, &[3, 2, 1], &config).unwrap(), 1.0, 1e-12);

        let x = [i64::MIN, i64::MIN + 2, i64::MIN + 1];
        assert_approx_eq!(pearson(&x, &[0, 2, 1], &config).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn escalated_errors_surface() {
        let config = CorrelationConfig::default();
        let x = [1.0, 2.0, f64::INFINITY];
        let y = [1.0, 4.0, f64::INFINITY];
        assert_eq!(
            pearson(&x, &y, &config),
            Err(CorrelationError::SameSignInfinities(crate::Quantity::Covariance))
        );

        let x = [1.0, f64::NAN, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert!(matches!(
            pearson(&x, &y, &config),
            Err(CorrelationError::InvalidInput { index: 1, .. })
        ));
    }

    #[test]
    fn strategies_agree_without_overflow() {
        let x = [43, 21, 25, 42, 57, 59];
        let y = [99, 65, 79, 75, 87, 81];

        let adaptive = CorrelationConfig::default();
        let mut exact = CorrelationConfig::default();
        exact.set_strategy(Strategy::ArbitraryPrecision);

        let machine = pearson(&x, &y, &adaptive).unwrap();
        let big = pearson(&x, &y, &exact).unwrap();
        assert_approx_eq!(machine, big, 1e-10);
    }
}
