//! Black-Scholes pricing for European options.
//!
//! **Call**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! where d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T and N is
//! [`cnd`]. Rates and volatilities are quoted in percentage points.
//!
//! Inputs are not validated: an expiration on the pricing date (`T = 0`),
//! a non-positive trade or strike price, or a zero volatility propagate as
//! `NaN` or infinite values in the quote.

use chrono::{DateTime, TimeZone};

use alloc::string::ToString;

use num_traits::{Float, FloatConst};

use tracing::{debug, trace};

use crate::{
    PricingConfig, PricingError, cnd,
    expiration::{parse_expiration, time_to_expiration},
    helper::constant,
};

/// Prices and intermediate terms of a Black-Scholes calculation.
///
/// Values are kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote<T> {
    /// The d₁ term
    pub d1: T,
    /// The d₂ term
    pub d2: T,
    /// European call price
    pub call: T,
    /// European put price
    pub put: T,
}

/// Black-Scholes pricer for European options.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use series_analytics::{BlackScholes, PricingConfig};
/// use assert_approx_eq::assert_approx_eq;
///
/// let pricer = BlackScholes::new(PricingConfig::default());
/// let now = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
/// let quote = pricer.price_at(&now, 100.0_f64, 100.0, 5.0, "2027-01-01", 20.0).unwrap();
///
/// assert_approx_eq!(quote.call, 10.4506, 1e-4);
/// assert_approx_eq!(quote.put, 5.5735, 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlackScholes {
    /// Calendar settings
    config: PricingConfig,
}

impl BlackScholes {
    /// Creates a new pricer with the given calendar settings
    pub const fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Returns the calendar settings
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns a quote for a known time to expiration
    ///
    /// # Arguments
    ///
    /// * `trade` - Last trade price of the underlying (S)
    /// * `strike` - Strike price (K)
    /// * `rate` - Risk-free interest rate as a decimal (r)
    /// * `time` - Time to expiration in years (T)
    /// * `volatility` - Volatility as a decimal (σ)
    ///
    /// # Returns
    ///
    /// * `OptionQuote<T>` - The quote
    ///
    /// # Examples
    ///
    /// ```
    /// use series_analytics::BlackScholes;
    ///
    /// let quote = BlackScholes::quote(100.0_f64, 100.0, 0.05, 0.0, 0.2);
    /// assert!(quote.d1.is_nan());
    /// ```
    pub fn quote<T: Float + FloatConst>(
        trade: T,
        strike: T,
        rate: T,
        time: T,
        volatility: T,
    ) -> OptionQuote<T> {
        let _2 = T::one() + T::one();
        let vol_sqrt_t = volatility * time.sqrt();

        let d1 = ((trade / strike).ln() + (rate + volatility.powi(2) / _2) * time) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let discounted_strike = strike * (-rate * time).exp();
        let call = trade * cnd(d1) - discounted_strike * cnd(d2);
        let put = discounted_strike * cnd(-d2) - trade * cnd(-d1);

        OptionQuote { d1, d2, call, put }
    }

    /// Prices an option expiring on `expiration` as seen from `now`
    ///
    /// # Arguments
    ///
    /// * `now` - The pricing instant, only its local calendar date is used
    /// * `trade` - Last trade price of the underlying
    /// * `strike` - Strike price
    /// * `rate_percent` - Risk-free interest rate in percent, e.g. `3.47`
    /// * `expiration` - Expiration date, `year-month-day`
    /// * `volatility_percent` - Volatility in percent, e.g. `20.0`
    ///
    /// # Returns
    ///
    /// * `Result<OptionQuote<T>, PricingError>` - The quote
    ///
    /// # Errors
    ///
    /// * [`PricingError::InvalidExpirationFormat`] if `expiration` is not shaped like a date
    /// * [`PricingError::ExpirationOutOfRange`] if it can not be placed on the calendar
    pub fn price_at<T, Tz>(
        &self,
        now: &DateTime<Tz>,
        trade: T,
        strike: T,
        rate_percent: T,
        expiration: &str,
        volatility_percent: T,
    ) -> Result<OptionQuote<T>, PricingError>
    where
        T: Float + FloatConst,
        Tz: TimeZone,
    {
        let _100 = constant::<T>(100.0);
        let rate = rate_percent / _100;
        let volatility = volatility_percent / _100;

        let date = parse_expiration(expiration)?;
        let time = time_to_expiration(now, date, &self.config).ok_or_else(|| {
            PricingError::ExpirationOutOfRange {
                expiration: expiration.to_string(),
            }
        })?;
        trace!(%date, time, "time to expiration");
        if time <= 0.0 {
            debug!(%date, time, "option at or past expiration");
        }

        Ok(Self::quote(
            trade,
            strike,
            rate,
            constant::<T>(time),
            volatility,
        ))
    }

    /// Prices an option expiring on `expiration` as seen from the local wall clock
    ///
    /// See [`price_at`](Self::price_at).
    #[cfg(feature = "std")]
    pub fn price<T: Float + FloatConst>(
        &self,
        trade: T,
        strike: T,
        rate_percent: T,
        expiration: &str,
        volatility_percent: T,
    ) -> Result<OptionQuote<T>, PricingError> {
        self.price_at(
            &chrono::Local::now(),
            trade,
            strike,
            rate_percent,
            expiration,
            volatility_percent,
        )
    }
}

/// Prices a European option with the default calendar, as seen from `now`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use series_analytics::{PricingError, black_scholes_at};
///
/// let now = Utc.with_ymd_and_hms(2014, 6, 1, 12, 0, 0).unwrap();
/// let quote = black_scholes_at(&now, 180.0, 120.0, 3.47, "2014-12-31", 3.24).unwrap();
/// assert!(quote.call > 60.0);
/// assert!(quote.put < 1e-6);
///
/// let err = black_scholes_at(&now, 180.0, 120.0, 3.47, "not-a-date", 3.24).unwrap_err();
/// assert!(matches!(err, PricingError::InvalidExpirationFormat { .. }));
/// ```
pub fn black_scholes_at<T, Tz>(
    now: &DateTime<Tz>,
    trade: T,
    strike: T,
    rate_percent: T,
    expiration: &str,
    volatility_percent: T,
) -> Result<OptionQuote<T>, PricingError>
where
    T: Float + FloatConst,
    Tz: TimeZone,
{
    BlackScholes::default().price_at(
        now,
        trade,
        strike,
        rate_percent,
        expiration,
        volatility_percent,
    )
}

/// Prices a European option with the default calendar, as seen from the local wall clock
///
/// # Examples
///
/// ```
/// use series_analytics::{PricingError, black_scholes};
///
/// let quote = black_scholes(100.0, 100.0, 5.0, "2099-01-01", 20.0).unwrap();
/// assert!(quote.call > quote.put);
///
/// assert_eq!(
///     black_scholes(100.0, 100.0, 5.0, "not-a-date", 20.0),
///     Err(PricingError::InvalidExpirationFormat { expiration: "not-a-date".into() })
/// );
/// ```
#[cfg(feature = "std")]
pub fn black_scholes<T: Float + FloatConst>(
    trade: T,
    strike: T,
    rate_percent: T,
    expiration: &str,
    volatility_percent: T,
) -> Result<OptionQuote<T>, PricingError> {
    BlackScholes::default().price(
        trade,
        strike,
        rate_percent,
        expiration,
        volatility_percent,
    )
}
