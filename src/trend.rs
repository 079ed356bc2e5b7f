use num_traits::Float;

use tracing::debug;

use crate::{
    Kbn, SeriesAnalytics, Window,
    helper::{count, round2},
};

/// Least-squares line through `(index, value)` points.
///
/// Both parameters are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Regression<T> {
    /// Change in value per index step
    pub slope: T,
    /// Value of the line at index `0` of the full series
    pub intercept: T,
}

impl<T> SeriesAnalytics<T>
where
    T: Default + Float,
{
    /// Returns the least-squares slope and intercept over the last `period` values
    ///
    /// The X coordinate of each value is its position in the full series, not
    /// in the window, so the intercept is the line's value at index `0`. A
    /// period longer than the series clamps the window to the whole series.
    ///
    /// The slope is rounded to 2 decimal places first, and the intercept is
    /// then derived from the rounded slope and rounded as well. A window with
    /// no spread in X (a single value) has slope `0`; an empty series gives
    /// `{0, 0}`.
    ///
    /// # Arguments
    ///
    /// * `period` - The number of trailing values, `None` or `Some(0)` for the whole series
    ///
    /// # Returns
    ///
    /// * `Regression<T>` - The fitted line
    ///
    /// # Examples
    ///
    /// ```
    /// use series_analytics::{Regression, SeriesAnalytics};
    ///
    /// let stats = SeriesAnalytics::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(stats.slope(None), Regression { slope: 1.0, intercept: 1.0 });
    ///
    /// let stats = SeriesAnalytics::new(vec![10.0, 10.5, 11.2, 10.9, 11.5, 11.9]);
    /// let line = stats.slope(Some(3));
    /// assert_eq!(line.slope, 0.5);
    /// assert_eq!(line.intercept, 9.43);
    ///
    /// // clamped, not rejected
    /// assert_eq!(stats.slope(Some(100)), stats.slope(None));
    /// ```
    pub fn slope(&self, period: Option<usize>) -> Regression<T> {
        let window = Window::trailing(self.series(), period);
        if window.is_empty() {
            debug!("slope: empty series");
            return Regression::default();
        }

        let n = count::<T>(window.len());
        let mut x_sum = Kbn::<T>::default();
        let mut y_sum = Kbn::<T>::default();
        for (i, y) in window.indexed() {
            x_sum += count::<T>(i);
            y_sum += y;
        }
        let x_mean = x_sum.total() / n;
        let y_mean = y_sum.total() / n;

        let mut sxy = Kbn::<T>::default();
        let mut sxx = Kbn::<T>::default();
        for (i, y) in window.indexed() {
            let dx = count::<T>(i) - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }
        let (sxy, sxx) = (sxy.total(), sxx.total());

        let slope = if sxx.is_zero() {
            debug!(start = window.start(), "slope: no spread in window");
            T::zero()
        } else {
            round2(sxy / sxx)
        };

        Regression {
            slope,
            intercept: round2(y_mean - slope * x_mean),
        }
    }
}
