use rug::{Assign, Float};
use tracing::trace;

use crate::{CorrelationError, Quantity, Result};

/// Sufficient statistics of a paired sample in arbitrary precision.
///
/// The significand width is fixed for the whole pass; only the final
/// coefficient is reduced to `f64`. The exponent range is finite (though far
/// wider than `f64`), so sums can still become infinite.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BigSums {
    /// Number of pairs
    n: usize,
    /// Working precision in bits
    prec: u32,
    /// Σx
    sum_x: Float,
    /// Σy
    sum_y: Float,
    /// Σxy
    sum_xy: Float,
    /// Σx²
    sum_xx: Float,
    /// Σy²
    sum_yy: Float,
}

impl BigSums {
    /// Accumulates every pair of normalized values in a single pass
    ///
    /// The working precision is `precision` or the widest input, whichever is
    /// larger, so no input is rounded on its way into the sums.
    pub fn accumulate(x: &[Float], y: &[Float], precision: u32) -> Self {
        let prec = x.iter().chain(y).map(Float::prec).fold(precision, u32::max);
        let mut sums = Self {
            n: 0,
            prec,
            sum_x: Float::new(prec),
            sum_y: Float::new(prec),
            sum_xy: Float::new(prec),
            sum_xx: Float::new(prec),
            sum_yy: Float::new(prec),
        };

        let mut prod = Float::new(prec);
        for (x, y) in x.iter().zip(y) {
            sums.n += 1;
            sums.sum_x += x;
            sums.sum_y += y;
            prod.assign(x * y);
            sums.sum_xy += &prod;
            prod.assign(x * x);
            sums.sum_xx += &prod;
            prod.assign(y * y);
            sums.sum_yy += &prod;
        }

        trace!(
            n = sums.n,
            prec,
            sum_x = %sums.sum_x,
            sum_y = %sums.sum_y,
            sum_xy = %sums.sum_xy,
            sum_xx = %sums.sum_xx,
            sum_yy = %sums.sum_yy,
            "accumulated arbitrary-precision sums"
        );
        sums
    }

    /// Returns the working precision in bits
    pub const fn precision(&self) -> u32 {
        self.prec
    }

    /// Derives Pearson's r from the sums
    ///
    /// Same-signed infinities are checked before each of the three
    /// subtractions, in the order covariance, variance of x, variance of y.
    /// Non-finite results of the subtractions are reported afterwards in the
    /// same order, followed by the zero-variance check.
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The coefficient in `[-1, 1]`, or the reason it is undefined
    pub fn coefficient(&self) -> Result<f64> {
        let n = Float::with_val(self.prec, self.n as u64);
        let mut scaled = Float::new(self.prec);

        scaled.assign(&self.sum_x * &self.sum_y);
        scaled /= &n;
        let cov = subtract(&self.sum_xy, &scaled, Quantity::Covariance)?;

        scaled.assign(&self.sum_x * &self.sum_x);
        scaled /= &n;
        let var_x = subtract(&self.sum_xx, &scaled, Quantity::VarianceX)?;

        scaled.assign(&self.sum_y * &self.sum_y);
        scaled /= &n;
        let var_y = subtract(&self.sum_yy, &scaled, Quantity::VarianceY)?;

        for (value, quantity) in [
            (&cov, Quantity::Covariance),
            (&var_x, Quantity::VarianceX),
            (&var_y, Quantity::VarianceY),
        ] {
            if !value.is_finite() {
                return Err(CorrelationError::Indeterminate(quantity));
            }
        }
        if var_x <= 0 || var_y <= 0 {
            return Err(CorrelationError::DegenerateInput);
        }

        let mut denominator = Float::with_val(self.prec, &var_x * &var_y);
        denominator.sqrt_mut();
        let corr = Float::with_val(self.prec, &cov / &denominator);
        if !corr.is_finite() {
            return Err(CorrelationError::Indeterminate(Quantity::Coefficient));
        }

        Ok(corr.to_f64().clamp(-1.0, 1.0))
    }
}

/// `minuend - subtrahend`, refusing `inf - inf` with matching signs
fn subtract(minuend: &Float, subtrahend: &Float, quantity: Quantity) -> Result<Float> {
    if minuend.is_infinite()
        && subtrahend.is_infinite()
        && minuend.is_sign_negative() == subtrahend.is_sign_negative()
    {
        return Err(CorrelationError::SameSignInfinities(quantity));
    }
    Ok(Float::with_val(minuend.prec(), minuend - subtrahend))
}
