/// Calendar settings used to turn an expiration date into a year fraction.
///
/// The defaults reproduce the plain convention: a 365-day year of 24-hour
/// days, with both the pricing date and the expiration fixed at noon local
/// time.
///
/// # Examples
/// ```
/// use series_analytics::PricingConfig;
///
/// let mut config = PricingConfig::default();
/// assert_eq!(config.days_per_year(), 365.0);
/// assert_eq!(config.fixing_hour(), 12);
///
/// config.set_days_per_year(360.0).set_fixing_hour(16);
/// assert_eq!(config.days_per_year(), 360.0);
/// assert_eq!(config.fixing_hour(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Length of a year in days
    days_per_year: f64,
    /// Local hour (0..24) at which both dates are fixed
    fixing_hour: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
            fixing_hour: 12,
        }
    }
}

impl PricingConfig {
    /// Seconds in a day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    /// Returns the length of a year in days
    pub const fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    /// Sets the length of a year in days
    ///
    /// # Arguments
    ///
    /// * `days` - The number of days in a year
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config object
    pub const fn set_days_per_year(&mut self, days: f64) -> &mut Self {
        self.days_per_year = days;
        self
    }

    /// Returns the local hour at which both dates are fixed
    pub const fn fixing_hour(&self) -> u32 {
        self.fixing_hour
    }

    /// Sets the local hour at which both dates are fixed
    ///
    /// Hours outside `0..24` make every expiration fail with
    /// [`PricingError::ExpirationOutOfRange`](crate::PricingError::ExpirationOutOfRange).
    ///
    /// # Arguments
    ///
    /// * `hour` - The fixing hour
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The config object
    pub const fn set_fixing_hour(&mut self, hour: u32) -> &mut Self {
        self.fixing_hour = hour;
        self
    }

    /// Returns the number of seconds in a year
    pub fn seconds_per_year(&self) -> f64 {
        self.days_per_year * Self::SECONDS_PER_DAY
    }
}
