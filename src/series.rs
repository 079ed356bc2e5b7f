use num_traits::Float;

use alloc::vec::Vec;

use tracing::debug;

use crate::{Kbn, Window, helper::count};

/// An ordered numeric series with windowed analytics over its trailing values.
///
/// Index `0` holds the oldest observation and the last index the most recent
/// one. The series is owned by the analytics object and replaced wholesale
/// with [`set_series`](Self::set_series); every analytic call is a pure
/// function of the held values and its arguments.
///
/// Windowed operations take an optional `period`, the number of trailing
/// values to use. `None` and `Some(0)` both select the whole series. How a
/// period longer than the series is treated differs per operation:
///
/// - [`average`](Self::average) rejects it and returns `0`
/// - [`slope`](Self::slope) and [`variance`](Self::variance) clamp the
///   window to the whole series
///
/// Sums are accumulated with Kahan-Babuska-Neumaier compensated summation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesAnalytics<T> {
    /// Values, oldest first
    series: Vec<T>,
}

impl<T> SeriesAnalytics<T>
where
    T: Default + Float,
{
    /// Creates a new `SeriesAnalytics` instance holding `series`.
    ///
    /// # Arguments
    ///
    /// * `series` - The initial values, oldest first
    ///
    /// # Returns
    ///
    /// * `Self` - The analytics object
    pub fn new(series: Vec<T>) -> Self {
        let mut analytics = Self { series: Vec::new() };
        analytics.set_series(series);
        analytics
    }

    /// Replaces the held series
    ///
    /// An empty series is accepted; every operation then follows its
    /// documented empty-input behaviour.
    ///
    /// # Arguments
    ///
    /// * `series` - The new values, oldest first
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The analytics object
    pub fn set_series(&mut self, series: Vec<T>) -> &mut Self {
        self.series = series;
        self
    }

    /// Returns the held series, oldest first
    pub fn series(&self) -> &[T] {
        &self.series
    }

    /// Returns the number of values in the series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the series holds no values
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the arithmetic mean of the last `period` values
    ///
    /// A period longer than the series is a hard reject: there is not enough
    /// history, and the result is `0`. An empty series also averages to `0`.
    /// Callers can not tell either case apart from a genuine zero mean.
    ///
    /// # Arguments
    ///
    /// * `period` - The number of trailing values, `None` or `Some(0)` for the whole series
    ///
    /// # Returns
    ///
    /// * `T` - The mean of the window, or `0` if the series is empty or shorter than `period`
    ///
    /// # Examples
    ///
    /// ```
    /// use series_analytics::SeriesAnalytics;
    ///
    /// let stats = SeriesAnalytics::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(stats.average(Some(3)), 4.0);
    /// assert_eq!(stats.average(None), 3.0);
    /// assert_eq!(stats.average(Some(0)), 3.0);
    ///
    /// // insufficient history
    /// assert_eq!(stats.average(Some(6)), 0.0);
    /// ```
    pub fn average(&self, period: Option<usize>) -> T {
        let Some(window) = Window::exact(&self.series, period) else {
            debug!(len = self.len(), ?period, "average: insufficient history");
            return T::zero();
        };

        let mut sum = Kbn::<T>::default();
        for &value in window.iter().rev() {
            sum += value;
        }
        sum.total() / count::<T>(window.len())
    }
}

impl<T> From<Vec<T>> for SeriesAnalytics<T>
where
    T: Default + Float,
{
    fn from(series: Vec<T>) -> Self {
        Self::new(series)
    }
}

impl<T> FromIterator<T> for SeriesAnalytics<T>
where
    T: Default + Float,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_average_empty() {
        let stats = SeriesAnalytics::<f64>::default();
        assert_eq!(stats.average(None), 0.0);
        assert_eq!(stats.average(Some(3)), 0.0);
    }

    #[test]
    fn test_average_single() {
        let stats = SeriesAnalytics::new(vec![42.5]);
        assert_eq!(stats.average(None), 42.5);
        assert_eq!(stats.average(Some(1)), 42.5);
    }

    #[test]
    fn test_average_rejects_long_period() {
        let stats = SeriesAnalytics::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(stats.average(Some(4)), 0.0);
    }

    #[test]
    fn test_average_trailing_window() {
        let stats = SeriesAnalytics::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.average(Some(3)), 4.0);
        assert_eq!(stats.average(Some(1)), 5.0);
        assert_eq!(stats.average(Some(5)), 3.0);
    }

    #[test]
    fn test_average_compensated() {
        let stats = SeriesAnalytics::new(vec![1_000_000.1, 1_000_000.2, 1_000_000.3]);
        assert_approx_eq!(stats.average(None), 1_000_000.2, 1e-9);
    }

    #[test]
    fn test_set_series_replaces() {
        let mut stats = SeriesAnalytics::new(vec![1.0, 2.0]);
        stats.set_series(vec![10.0, 20.0, 30.0]);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.series(), &[10.0, 20.0, 30.0]);
        assert_eq!(stats.average(None), 20.0);

        stats.set_series(Vec::new());
        assert!(stats.is_empty());
        assert_eq!(stats.average(None), 0.0);
    }

    #[test]
    fn test_from_iterator() {
        let stats: SeriesAnalytics<f64> = (1..=4).map(f64::from).collect();
        assert_eq!(stats.series(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(SeriesAnalytics::from(vec![2.0, 4.0]).average(None), 3.0);
    }

    #[test]
    fn test_average_idempotent() {
        let stats: SeriesAnalytics<f64> = SeriesAnalytics::new(vec![0.1, 0.7, 0.3, 0.9]);
        assert_eq!(
            stats.average(Some(3)).to_bits(),
            stats.average(Some(3)).to_bits()
        );
    }
}
