use crate::InputShape;

/// Checks that two sequences form a usable sample pair
///
/// # Arguments
///
/// * `x_len` - Length of the first sequence
/// * `y_len` - Length of the second sequence
///
/// # Returns
///
/// * `Result<usize, InputShape>` - The common length `n`, or the first violated shape rule
#[inline]
pub fn validate_shape(x_len: usize, y_len: usize) -> Result<usize, InputShape> {
    if x_len == 0 || y_len == 0 {
        return Err(InputShape::Empty);
    }
    if x_len != y_len {
        return Err(InputShape::LengthMismatch { x_len, y_len });
    }
    if x_len < 2 {
        return Err(InputShape::TooFewPoints(x_len));
    }
    Ok(x_len)
}

/// Returns `true` when every element equals the first one
#[inline]
pub fn is_constant<T: PartialEq>(values: &[T]) -> bool {
    values
        .split_first()
        .is_none_or(|(first, rest)| rest.iter().all(|v| v == first))
}
