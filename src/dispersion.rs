use num_traits::Float;

use tracing::debug;

use crate::{Kbn, SeriesAnalytics, Window, helper::count};

impl<T> SeriesAnalytics<T>
where
    T: Default + Float,
{
    /// Returns the sample variance of the last `period` values
    ///
    /// Uses Bessel's correction (`n - 1` divisor). A period longer than the
    /// series takes every available value. A window of fewer than two values
    /// has no sample variance and yields `0`.
    ///
    /// # Arguments
    ///
    /// * `period` - The number of trailing values, `None` or `Some(0)` for the whole series
    ///
    /// # Returns
    ///
    /// * `T` - The sample variance, or `0` for a degenerate window
    ///
    /// # Examples
    ///
    /// ```
    /// use series_analytics::SeriesAnalytics;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let stats: SeriesAnalytics<f64> = SeriesAnalytics::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_approx_eq!(stats.variance(None), 4.571428, 1e-6);
    ///
    /// // last three: 5, 7, 9
    /// assert_approx_eq!(stats.variance(Some(3)), 4.0, 1e-12);
    ///
    /// // single observation
    /// assert_eq!(stats.variance(Some(1)), 0.0);
    /// ```
    pub fn variance(&self, period: Option<usize>) -> T {
        let window = Window::trailing(self.series(), period);
        if window.len() < 2 {
            debug!(len = window.len(), "variance: degenerate window");
            return T::zero();
        }

        let n = count::<T>(window.len());
        let mut sum = Kbn::<T>::default();
        for &value in window.iter() {
            sum += value;
        }
        let mean = sum.total() / n;

        let mut sum_sq_dev = Kbn::<T>::default();
        for &value in window.iter() {
            let dev = value - mean;
            sum_sq_dev += dev * dev;
        }
        sum_sq_dev.total() / (n - T::one())
    }

    /// Returns the sample standard deviation of the last `period` values
    ///
    /// This is exactly the square root of [`variance`](Self::variance) over
    /// the same window, so it shares its clamping and degenerate-window rules.
    ///
    /// # Arguments
    ///
    /// * `period` - The number of trailing values, `None` or `Some(0)` for the whole series
    ///
    /// # Returns
    ///
    /// * `T` - The sample standard deviation, or `0` for a degenerate window
    ///
    /// # Examples
    ///
    /// ```
    /// use series_analytics::SeriesAnalytics;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let stats: SeriesAnalytics<f64> = SeriesAnalytics::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_approx_eq!(stats.standard_deviation(None), 2.13809, 1e-5);
    /// assert_eq!(stats.standard_deviation(Some(3)), 2.0);
    /// ```
    pub fn standard_deviation(&self, period: Option<usize>) -> T {
        self.variance(period).sqrt()
    }
}
