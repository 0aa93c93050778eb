use core::any::Any;

use num_traits::AsPrimitive;
use rug::{Float, Integer};

use crate::{CorrelationError, InvalidValue, Result};

/// A single numeric value in any of the representations the engine accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer (also holds `isize`)
    I64(i64),
    /// 128-bit signed integer
    I128(i128),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer (also holds `usize`)
    U64(u64),
    /// 128-bit unsigned integer
    U128(u128),
    /// Single precision binary float
    F32(f32),
    /// Double precision binary float
    F64(f64),
    /// Arbitrary-precision integer
    BigInt(Integer),
    /// Arbitrary-precision binary float
    BigFloat(Float),
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Numeric {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_native!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128,
    f32 => F32, f64 => F64,
    Integer => BigInt, Float => BigFloat,
);

impl From<isize> for Numeric {
    fn from(value: isize) -> Self {
        Self::I64(value as i64)
    }
}

impl From<usize> for Numeric {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl Numeric {
    /// Converts the value into an arbitrary-precision float without rounding
    ///
    /// # Returns
    ///
    /// * `Result<Float, InvalidValue>` - The exact value, or `NotANumber` for NaN inputs
    pub fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        let float = match self {
            Self::I8(v) => Float::with_val(i8::BITS, *v),
            Self::I16(v) => Float::with_val(i16::BITS, *v),
            Self::I32(v) => Float::with_val(i32::BITS, *v),
            Self::I64(v) => Float::with_val(i64::BITS, *v),
            Self::I128(v) => Float::with_val(i128::BITS, *v),
            Self::U8(v) => Float::with_val(u8::BITS, *v),
            Self::U16(v) => Float::with_val(u16::BITS, *v),
            Self::U32(v) => Float::with_val(u32::BITS, *v),
            Self::U64(v) => Float::with_val(u64::BITS, *v),
            Self::U128(v) => Float::with_val(u128::BITS, *v),
            Self::F32(v) if v.is_nan() => return Err(InvalidValue::NotANumber),
            Self::F32(v) => Float::with_val(f32::MANTISSA_DIGITS, *v),
            Self::F64(v) if v.is_nan() => return Err(InvalidValue::NotANumber),
            Self::F64(v) => Float::with_val(f64::MANTISSA_DIGITS, *v),
            Self::BigInt(v) => integer_to_float(v),
            Self::BigFloat(v) => return float_to_float(v),
        };
        Ok(float)
    }
}

fn integer_to_float(value: &Integer) -> Float {
    let bits = value.significant_bits().max(rug::float::prec_min());
    Float::with_val(bits, value)
}

fn float_to_float(value: &Float) -> core::result::Result<Float, InvalidValue> {
    if value.is_nan() {
        return Err(InvalidValue::NotANumber);
    }
    Ok(value.clone())
}

/// Values with an exact arbitrary-precision float representation
///
/// Each value is converted at a precision wide enough to hold it exactly:
/// fixed-width integers at their bit width, arbitrary-precision integers at
/// their significant bit count, binary floats at their significand width.
/// Nothing goes through a decimal intermediate.
pub trait ToBigFloat {
    /// Converts the value into an arbitrary-precision float without rounding
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue>;
}

impl ToBigFloat for Numeric {
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        Numeric::to_big_float(self)
    }
}

impl ToBigFloat for Integer {
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        Ok(integer_to_float(self))
    }
}

impl ToBigFloat for Float {
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        float_to_float(self)
    }
}

/// `None` stands for an absent arbitrary-precision value
impl<T: ToBigFloat> ToBigFloat for Option<T> {
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        self.as_ref()
            .ok_or(InvalidValue::Missing)
            .and_then(ToBigFloat::to_big_float)
    }
}

impl<T: ToBigFloat + ?Sized> ToBigFloat for &T {
    fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
        (**self).to_big_float()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Native fixed-width numeric types accepted by the machine-precision path
pub trait Primitive:
    Copy + PartialEq + AsPrimitive<f64> + Into<Numeric> + ToBigFloat + sealed::Sealed
{
}

macro_rules! impl_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Primitive for $ty {}
            impl ToBigFloat for $ty {
                fn to_big_float(&self) -> core::result::Result<Float, InvalidValue> {
                    Numeric::from(*self).to_big_float()
                }
            }
        )+
    };
}

impl_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Arbitrary-precision types accepted by [`crate::correlate_big`]
///
/// `Option` wrappers model caller data where a value may be absent; a `None`
/// element is reported as [`CorrelationError::InvalidInput`].
pub trait BigNumeric: ToBigFloat + sealed::Sealed {}

impl sealed::Sealed for Integer {}
impl sealed::Sealed for Float {}
impl sealed::Sealed for Option<Integer> {}
impl sealed::Sealed for Option<Float> {}
impl BigNumeric for Integer {}
impl BigNumeric for Float {}
impl BigNumeric for Option<Integer> {}
impl BigNumeric for Option<Float> {}

/// Normalizes a sequence into arbitrary-precision floats, preserving order
///
/// # Arguments
///
/// * `values` - The values to convert
///
/// # Returns
///
/// * `Result<Vec<Float>>` - One exact float per input, or the first element that has no value
///
/// # Examples
///
/// ```
/// use correlation_stats::normalize;
///
/// let floats = normalize(&[u64::MAX, 0, 7]).unwrap();
/// assert_eq!(floats[0], u64::MAX);
/// assert_eq!(floats[2], 7);
/// ```
pub fn normalize<T: ToBigFloat>(values: &[T]) -> Result<Vec<Float>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .to_big_float()
                .map_err(|source| CorrelationError::InvalidInput { index, source })
        })
        .collect()
}

macro_rules! downcast_to_big_float {
    ($value:expr, $($ty:ty),+ $(,)?) => {
        $(
            if let Some(v) = $value.downcast_ref::<$ty>() {
                return Some(v.to_big_float());
            }
        )+
    };
}

fn any_to_big_float(value: &dyn Any) -> Option<core::result::Result<Float, InvalidValue>> {
    downcast_to_big_float!(
        value,
        i8, i16, i32, i64, i128, isize,
        u8, u16, u32, u64, u128, usize,
        f32, f64,
        Integer, Float,
        Option<Integer>, Option<Float>,
        Numeric,
    );
    None
}

/// Normalizes runtime-typed values into arbitrary-precision floats
///
/// # Arguments
///
/// * `values` - Values whose concrete type is only known at runtime
///
/// # Returns
///
/// * `Result<Vec<Float>>` - One exact float per input, or `UnsupportedType` for the first
///   element outside the recognized representations
///
/// # Examples
///
/// ```
/// use correlation_stats::{normalize_any, CorrelationError};
///
/// let ok = normalize_any(&[&1u8, &2.5f32, &-3i64]).unwrap();
/// assert_eq!(ok[1], 2.5);
///
/// let err = normalize_any(&[&1u8, &"2"]).unwrap_err();
/// assert_eq!(err, CorrelationError::UnsupportedType { index: 1 });
/// ```
pub fn normalize_any(values: &[&dyn Any]) -> Result<Vec<Float>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match any_to_big_float(*value) {
            Some(converted) => {
                converted.map_err(|source| CorrelationError::InvalidInput { index, source })
            }
            None => Err(CorrelationError::UnsupportedType { index }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_extremes_are_exact() {
        assert_eq!(Numeric::from(i8::MIN).to_big_float().unwrap(), i8::MIN);
        assert_eq!(Numeric::from(u64::MAX).to_big_float().unwrap(), u64::MAX);
        assert_eq!(Numeric::from(i128::MIN).to_big_float().unwrap(), i128::MIN);
        assert_eq!(Numeric::from(u128::MAX).to_big_float().unwrap(), u128::MAX);
        assert_eq!(Numeric::from(usize::MAX).to_big_float().unwrap(), usize::MAX as u64);
    }

    #[test]
    fn floats_widen_without_decimal_rounding() {
        let tenth = Numeric::from(0.1f64).to_big_float().unwrap();
        assert_eq!(tenth, 0.1f64);
        assert_eq!(tenth.prec(), f64::MANTISSA_DIGITS);

        let third = Numeric::from(1.0f32 / 3.0).to_big_float().unwrap();
        assert_eq!(third, 1.0f32 / 3.0);

        let tiny = Numeric::from(f64::MIN_POSITIVE).to_big_float().unwrap();
        assert_eq!(tiny, f64::MIN_POSITIVE);
        let huge = Numeric::from(f64::MAX).to_big_float().unwrap();
        assert_eq!(huge, f64::MAX);
    }

    #[test]
    fn infinities_survive_nan_does_not() {
        let inf = Numeric::from(f64::NEG_INFINITY).to_big_float().unwrap();
        assert!(inf.is_infinite() && inf.is_sign_negative());
        assert_eq!(
            Numeric::from(f32::NAN).to_big_float(),
            Err(InvalidValue::NotANumber)
        );
    }

    #[test]
    fn big_integers_keep_every_bit() {
        let big = (Integer::from(1) << 300u32) + 1u32;
        let float = big.to_big_float().unwrap();
        assert!(float.prec() >= 301);
        assert_eq!(float, big);
        assert_eq!(Integer::new().to_big_float().unwrap(), 0);
    }

    #[test]
    fn big_floats_are_copied() {
        let value = Float::with_val(500, 123.456);
        let copy = value.to_big_float().unwrap();
        assert_eq!(copy, value);
        assert_eq!(copy.prec(), 500);
    }

    #[test]
    fn missing_values_are_reported_with_index() {
        let values = [Some(Integer::from(1)), None, Some(Integer::from(3))];
        assert_eq!(
            normalize(&values),
            Err(CorrelationError::InvalidInput {
                index: 1,
                source: InvalidValue::Missing
            })
        );
    }

    #[test]
    fn heterogeneous_sequence_keeps_order() {
        let values = [
            Numeric::from(1u8),
            Numeric::from(-2i128),
            Numeric::from(3.5f64),
            Numeric::from(Integer::from(4)),
            Numeric::from(Float::with_val(64, 5.25)),
        ];
        let floats = normalize(&values).unwrap();
        let expected = [1.0, -2.0, 3.5, 4.0, 5.25];
        assert_eq!(floats.len(), expected.len());
        for (f, e) in floats.iter().zip(expected) {
            assert_eq!(*f, e);
        }
    }

    #[test]
    fn runtime_typed_values() {
        let missing: Option<Float> = None;
        let big = Integer::from(10);
        let values: [&dyn Any; 3] = [&big, &7usize, &missing];
        assert_eq!(
            normalize_any(&values),
            Err(CorrelationError::InvalidInput {
                index: 2,
                source: InvalidValue::Missing
            })
        );

        let values: [&dyn Any; 2] = [&1i16, &'x'];
        assert_eq!(
            normalize_any(&values),
            Err(CorrelationError::UnsupportedType { index: 1 })
        );

        assert!(normalize_any(&[]).unwrap().is_empty());
    }
}
