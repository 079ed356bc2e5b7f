use num_traits::Float;

use tracing::debug;

use crate::helper::{count, round2};

/// Returns the next exponential moving average of a stream
///
/// The EMA keeps no history of its own: the caller feeds the previous result
/// back in on every call. Until a seed exists (`previous` is `None` or zero)
/// the function reports no signal and returns `0`.
///
/// The result is rounded to 2 decimal places.
///
/// # Arguments
///
/// * `current` - The newest value in the stream
/// * `previous` - The previous EMA, `None` before the stream is seeded
/// * `period` - The smoothing period, giving a multiplier of `2 / (period + 1)`
///
/// # Returns
///
/// * `T` - The updated EMA, or `0` on a cold start
///
/// # Examples
///
/// ```
/// use series_analytics::ema;
///
/// // cold start
/// assert_eq!(ema(10.0, None, 3), 0.0);
/// assert_eq!(ema(10.0, Some(0.0), 3), 0.0);
///
/// let inputs = [11.0, 12.0, 13.0];
/// let mut previous = 10.0;
/// let mut results = vec![];
/// for input in inputs {
///     previous = ema(input, Some(previous), 3);
///     results.push(previous);
/// }
///
/// assert_eq!(&results, &[10.5, 11.25, 12.13]);
/// ```
pub fn ema<T: Float>(current: T, previous: Option<T>, period: usize) -> T {
    let previous = match previous {
        Some(previous) if !previous.is_zero() => previous,
        _ => {
            debug!(period, "ema cold start, no previous value");
            return T::zero();
        }
    };

    let _2 = T::one() + T::one();
    let multiplier = _2 / (count::<T>(period) + T::one());
    round2((current - previous) * multiplier + previous)
}
