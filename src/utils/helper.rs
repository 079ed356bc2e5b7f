use num_traits::Float;

/// Converts an `f64` literal into `T`
///
/// # Arguments
///
/// * `value` - The literal to convert
///
/// # Returns
///
/// * `T` - The converted value, or `NaN` if `T` can not represent it
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Converts a length or index into `T`
///
/// # Arguments
///
/// * `n` - The count to convert
///
/// # Returns
///
/// * `T` - The converted value, or `NaN` if `T` can not represent it
#[inline]
pub fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Scales `value` by `10^places`, first rounding it to the significant digits `T` can hold
///
/// Decimal literals such as `1.005` are stored just below their written value,
/// so scaling them directly lands on `100.49999999999999` instead of `100.5`.
/// Rounding to the type's significant digits first restores the written half.
///
/// # Arguments
///
/// * `value` - The value to scale
/// * `places` - The number of decimal places kept by the caller
///
/// # Returns
///
/// * `Option<T>` - The scaled value, or `None` when `value` is zero, non-finite,
///   or too large or too small for the extra rounding to matter
fn pre_round<T: Float>(value: T, places: i32) -> Option<T> {
    let digits = (-T::epsilon().log10()).floor().to_i32()?;
    let magnitude = value.abs().log10().floor().to_i32()?;
    let precision = digits - 1 - magnitude;
    if precision <= places || precision - digits >= places {
        return None;
    }

    let _10 = constant::<T>(10.0);
    let exact = (value * _10.powi(precision)).round();
    Some(exact / _10.powi(precision - places))
}

/// Rounds to 2 decimal places, halves away from zero
///
/// Halves are judged on the decimal value as written, so `1.005` rounds to
/// `1.01` even though its binary representation is slightly below the half.
///
/// # Arguments
///
/// * `value` - The value to round
///
/// # Returns
///
/// * `T` - The rounded value
#[inline]
pub fn round2<T: Float>(value: T) -> T {
    let _100 = constant::<T>(100.0);
    let scaled = pre_round(value, 2).unwrap_or(value * _100);
    scaled.round() / _100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(1.125_f64), 1.13);
        assert_eq!(round2(-1.125_f64), -1.13);
        assert_eq!(round2(2.0_f64), 2.0);
        assert_eq!(round2(0.004_f64), 0.0);
    }

    #[test]
    fn test_round2_decimal_halves() {
        assert_eq!(round2(1.005_f64), 1.01);
        assert_eq!(round2(-1.005_f64), -1.01);
        assert_eq!(round2(2.675_f64), 2.68);
        assert_eq!(round2(1234.565_f64), 1234.57);
        assert_eq!(round2(0.125_f32), 0.13);
    }

    #[test]
    fn test_round2_below_half_unchanged() {
        assert_eq!(round2(1.0049_f64), 1.0);
        assert_eq!(round2(181.754_f64), 181.75);
        assert_eq!(round2(-0.0025_f64), 0.0);
    }

    #[test]
    fn test_pre_round_out_of_range() {
        assert_eq!(pre_round(0.0_f64, 2), None);
        assert_eq!(pre_round(f64::NAN, 2), None);
        assert_eq!(pre_round(1e13_f64, 2), None);
        assert_eq!(pre_round(1e-4_f64, 2), None);
        assert_eq!(pre_round(1.005_f64, 2), Some(100.5));
    }

    #[test]
    fn test_round2_propagates_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_count() {
        assert_eq!(count::<f64>(0), 0.0);
        assert_eq!(count::<f32>(7), 7.0);
    }
}
