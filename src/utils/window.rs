use tracing::trace;

/// A view over the trailing `period` values of a series.
///
/// The view borrows the series and remembers where it starts, so that
/// callers can recover the absolute position of every value in the window.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, T> {
    /// The trailing values, oldest first
    buf: &'a [T],
    /// Absolute index of the first value in the window
    start: usize,
}

/// Resolves an optional period against the series length.
///
/// `None` and `Some(0)` both select the whole series.
///
/// # Arguments
///
/// * `period` - The requested period
/// * `len` - The length of the series
///
/// # Returns
///
/// * `usize` - The effective period
#[inline]
pub const fn resolve_period(period: Option<usize>, len: usize) -> usize {
    match period {
        None | Some(0) => len,
        Some(p) => p,
    }
}

impl<'a, T> Window<'a, T> {
    /// Creates a window over the last `period` values, clamping to the whole
    /// series when the period exceeds its length
    ///
    /// # Arguments
    ///
    /// * `series` - The series, oldest value first
    /// * `period` - The requested period
    ///
    /// # Returns
    ///
    /// * `Self` - The window
    pub fn trailing(series: &'a [T], period: Option<usize>) -> Self {
        let period = resolve_period(period, series.len());
        let start = series.len().saturating_sub(period);
        trace!(len = series.len(), period, start, "trailing window");
        Self {
            buf: &series[start..],
            start,
        }
    }

    /// Creates a window over exactly the last `period` values
    ///
    /// # Arguments
    ///
    /// * `series` - The series, oldest value first
    /// * `period` - The requested period
    ///
    /// # Returns
    ///
    /// * `Option<Self>` - The window, or `None` if the series is empty or shorter than `period`
    pub fn exact(series: &'a [T], period: Option<usize>) -> Option<Self> {
        let period = resolve_period(period, series.len());
        if series.is_empty() || series.len() < period {
            return None;
        }
        Some(Self::trailing(series, Some(period)))
    }

    /// Returns the absolute index of the first value in the window
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the number of values in the window
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the window holds no values
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns an iterator over the values in logical (oldest to newest) order.
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.buf.iter()
    }

    /// Returns an iterator of `(absolute index, value)` pairs, oldest first
    pub fn indexed(&self) -> impl Iterator<Item = (usize, T)> + 'a
    where
        T: Copy,
    {
        let start = self.start;
        self.buf
            .iter()
            .enumerate()
            .map(move |(i, &v)| (start + i, v))
    }
}
