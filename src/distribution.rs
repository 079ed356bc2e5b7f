//! Standard normal cumulative distribution.

use num_traits::{Float, FloatConst};

use crate::helper::constant;

/// Zelen & Severo polynomial coefficients
const A1: f64 = 0.319_381_530;
const A2: f64 = -0.356_563_782;
const A3: f64 = 1.781_477_937;
const A4: f64 = -1.821_255_978;
const A5: f64 = 1.330_274_429;
const P: f64 = 0.231_641_9;

/// Returns the standard normal cumulative distribution at `x`
///
/// Uses the Zelen & Severo polynomial approximation (Abramowitz and Stegun
/// 26.2.17), whose absolute error is below `7.5e-8`. The tail is evaluated
/// at `|x|` and reflected for negative inputs, so `cnd(-x) == 1 - cnd(x)`
/// holds by construction.
///
/// # Arguments
///
/// * `x` - The point at which to evaluate the distribution
///
/// # Returns
///
/// * `T` - `P(X <= x)` for a standard normal `X`
///
/// # Examples
///
/// ```
/// use series_analytics::cnd;
/// use assert_approx_eq::assert_approx_eq;
///
/// assert_approx_eq!(cnd(0.0_f64), 0.5, 1e-7);
/// assert_approx_eq!(cnd(1.96_f64), 0.975, 1e-4);
/// assert_approx_eq!(cnd(-1.0_f64), 1.0 - cnd(1.0_f64), 1e-15);
/// ```
pub fn cnd<T: Float + FloatConst>(x: T) -> T {
    let _1 = T::one();
    let _2 = _1 + _1;
    let l = x.abs();
    let k = _1 / (_1 + constant::<T>(P) * l);

    let poly = constant::<T>(A1) * k
        + constant::<T>(A2) * k.powi(2)
        + constant::<T>(A3) * k.powi(3)
        + constant::<T>(A4) * k.powi(4)
        + constant::<T>(A5) * k.powi(5);

    let p = _1 - _1 / (_2 * T::PI()).sqrt() * (-(l * l) / _2).exp() * poly;

    if x >= T::zero() { p } else { _1 - p }
}
