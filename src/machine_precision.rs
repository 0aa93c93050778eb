use num_traits::AsPrimitive;
use tracing::trace;

use crate::{
    CorrelationError, Kbn, Primitive, Quantity, Result, error::Accumulation,
    helper::validate_shape,
};

/// Largest relative error tolerated in a variance before the machine result is discarded
const CANCELLATION_TOLERANCE: f64 = 1e-11;

/// Sufficient statistics of a paired sample in native double precision.
///
/// The sums are plain `f64` accumulators: one traversal, no allocation and no
/// range checks inside the loop. Whether the sums are still meaningful is
/// decided once, after the pass, by [`MachineSums::coefficient`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct MachineSums {
    /// Number of pairs
    n: usize,
    /// Σx
    sum_x: f64,
    /// Σy
    sum_y: f64,
    /// Σxy
    sum_xy: f64,
    /// Σx²
    sum_xx: f64,
    /// Σy²
    sum_yy: f64,
}

impl MachineSums {
    /// Accumulates every pair of `x` and `y` in a single pass
    ///
    /// Both slices are expected to have been validated to the same length.
    pub fn accumulate<T>(x: &[T], y: &[T]) -> Self
    where
        T: AsPrimitive<f64>,
    {
        let mut sums = Self::default();
        x.iter().zip(y).for_each(|(x, y)| {
            sums.next((x.as_(), y.as_()));
        });

        trace!(
            n = sums.n,
            sum_x = sums.sum_x,
            sum_y = sums.sum_y,
            sum_xy = sums.sum_xy,
            sum_xx = sums.sum_xx,
            sum_yy = sums.sum_yy,
            "accumulated machine-precision sums"
        );
        sums
    }

    /// Adds one pair to the sums
    ///
    /// # Arguments
    ///
    /// * `value` - The pair `(x, y)`
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The sums for method chaining
    #[inline]
    pub fn next(&mut self, (x, y): (f64, f64)) -> &mut Self {
        self.n += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        self
    }

    /// Returns the number of accumulated pairs
    pub const fn count(&self) -> usize {
        self.n
    }

    /// Returns `true` when a sum left the finite range of `f64`
    ///
    /// A NaN sum counts as well: a signed sum that overflowed in both
    /// directions ends up as `inf - inf`.
    pub fn is_overflowed(&self) -> bool {
        [self.sum_x, self.sum_y, self.sum_xy, self.sum_xx, self.sum_yy]
            .iter()
            .any(|s| !s.is_finite())
    }

    /// Returns `true` when squares of nonzero values were flushed below the
    /// normal range, which would make the variance look zero
    fn is_underflowed(&self) -> bool {
        (self.sum_xx < f64::MIN_POSITIVE && self.sum_x != 0.0)
            || (self.sum_yy < f64::MIN_POSITIVE && self.sum_y != 0.0)
    }

    /// Returns `true` when the rounding error bound of `n` additions to
    /// `sum_sq` is too large a share of `var`
    ///
    /// Data far from zero relative to its spread (or wide integers rounded on
    /// their way into `f64`) make `Σx² - (Σx)²/n` subtract two nearly equal
    /// numbers. A non-positive result is always cancellation here, since
    /// constant sequences never reach the accumulator.
    fn is_cancelled(&self, sum_sq: f64, var: f64) -> bool {
        var <= 0.0 || self.n as f64 * f64::EPSILON * sum_sq > CANCELLATION_TOLERANCE * var
    }

    /// Derives Pearson's r from the sums
    ///
    /// # Returns
    ///
    /// * `Result<f64, Accumulation>` - The coefficient; `Overflow` when the sums (or
    ///   any quantity derived from them) are outside the range of `f64`, or
    ///   `Cancellation` when rounding may have consumed a variance
    pub fn coefficient(&self) -> core::result::Result<f64, Accumulation> {
        if self.is_overflowed() || self.is_underflowed() {
            return Err(Accumulation::Overflow);
        }

        let n = self.n as f64;
        let cov = self.sum_xy - (self.sum_x * self.sum_y) / n;
        let var_x = self.sum_xx - (self.sum_x * self.sum_x) / n;
        let var_y = self.sum_yy - (self.sum_y * self.sum_y) / n;

        if !(cov.is_finite() && var_x.is_finite() && var_y.is_finite()) {
            return Err(Accumulation::Overflow);
        }
        if self.is_cancelled(self.sum_xx, var_x) || self.is_cancelled(self.sum_yy, var_y) {
            return Err(Accumulation::Cancellation);
        }

        let corr = cov / (var_x * var_y).sqrt();
        if !corr.is_finite() {
            return Err(Accumulation::Overflow);
        }
        Ok(corr.clamp(-1.0, 1.0))
    }
}

/// Pearson's r by the classic two-pass algorithm: means first, then deviations.
///
/// This is the reference the single-pass engine is verified against. It never
/// escalates, so it is only defined for finite inputs whose deviations stay
/// within the range of `f64`. Deviation sums use Kahan-Babuska-Neumaier
/// compensation.
///
/// # Arguments
///
/// * `x` - First variable
/// * `y` - Second variable, paired with `x` by index
///
/// # Returns
///
/// * `Result<f64>` - The coefficient in `[-1, 1]`, a shape error, `DegenerateInput`,
///   or `Indeterminate` when a deviation sum is not finite
///
/// # Examples
///
/// ```
/// use correlation_stats::pearson_two_pass;
/// use assert_approx_eq::assert_approx_eq;
///
/// let x = [43, 21, 25, 42, 57, 59];
/// let y = [99, 65, 79, 75, 87, 81];
/// assert_approx_eq!(pearson_two_pass(&x, &y).unwrap(), 0.529, 0.001);
/// ```
pub fn pearson_two_pass<T: Primitive>(x: &[T], y: &[T]) -> Result<f64> {
    let n = validate_shape(x.len(), y.len())? as f64;

    let mut sum: (Kbn<f64>, Kbn<f64>) = Default::default();
    x.iter().zip(y).for_each(|(x, y)| {
        sum.0 += x.as_();
        sum.1 += y.as_();
    });
    let mean = (sum.0.total() / n, sum.1.total() / n);

    let mut cov = Kbn::<f64>::default();
    let mut var: (Kbn<f64>, Kbn<f64>) = Default::default();
    x.iter().zip(y).for_each(|(x, y)| {
        let dx = x.as_() - mean.0;
        let dy = y.as_() - mean.1;
        cov += dx * dy;
        var.0 += dx * dx;
        var.1 += dy * dy;
    });

    let (cov, var_x, var_y) = (cov.total(), var.0.total(), var.1.total());
    for (value, quantity) in [
        (cov, Quantity::Covariance),
        (var_x, Quantity::VarianceX),
        (var_y, Quantity::VarianceY),
    ] {
        if !value.is_finite() {
            return Err(CorrelationError::Indeterminate(quantity));
        }
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return Err(CorrelationError::DegenerateInput);
    }

    let corr = cov / (var_x.sqrt() * var_y.sqrt());
    Ok(corr.clamp(-1.0, 1.0))
}
