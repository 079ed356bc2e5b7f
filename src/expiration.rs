//! Expiration dates.
//!
//! An expiration is any string containing three runs of ASCII digits joined
//! by hyphens (`year-month-day`). The first such occurrence is used and
//! anything around it is ignored. Digit runs may be empty, in which case
//! they count as zero. Fields are then normalised the way a calendar does
//! overflow: month `13` is January of the following year, day `0` is the
//! last day of the previous month, and two-digit years `0..=69` and
//! `70..=100` are read as `2000..=2069` and `1970..=2000`.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};

use alloc::string::ToString;

use tracing::warn;

use crate::{PricingConfig, PricingError};

/// Returns the end of the run of ASCII digits starting at `from`
fn digit_run(bytes: &[u8], from: usize) -> usize {
    from + bytes
        .get(from..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// Finds the leftmost `digits-digits-digits` occurrence in `s`
fn find_fields(s: &str) -> Option<[&str; 3]> {
    let bytes = s.as_bytes();
    (0..=bytes.len()).find_map(|start| {
        let mut fields = [""; 3];
        let mut pos = start;
        for (i, field) in fields.iter_mut().enumerate() {
            let end = digit_run(bytes, pos);
            *field = s.get(pos..end)?;
            pos = end;
            if i < 2 {
                if bytes.get(pos) != Some(&b'-') {
                    return None;
                }
                pos += 1;
            }
        }
        Some(fields)
    })
}

/// Parses a digit run, the empty run being zero
fn parse_field(digits: &str) -> Option<i64> {
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Builds a calendar date from possibly out-of-range fields
fn normalize(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = match year {
        0..=69 => year + 2000,
        70..=100 => year + 1900,
        _ => year,
    };
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Parses an expiration string into a calendar date
///
/// # Arguments
///
/// * `expiration` - The expiration, e.g. `"2030-06-21"`
///
/// # Returns
///
/// * `Result<NaiveDate, PricingError>` - The normalised date
///
/// # Errors
///
/// * [`PricingError::InvalidExpirationFormat`] if no `digits-digits-digits` occurrence exists
/// * [`PricingError::ExpirationOutOfRange`] if the fields do not name a representable date
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use series_analytics::{PricingError, parse_expiration};
///
/// assert_eq!(parse_expiration("2030-06-21"), Ok(NaiveDate::from_ymd_opt(2030, 6, 21).unwrap()));
/// assert_eq!(parse_expiration("2030-13-01"), Ok(NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()));
/// assert_eq!(parse_expiration("30-2-30"), Ok(NaiveDate::from_ymd_opt(2030, 3, 2).unwrap()));
///
/// assert!(matches!(
///     parse_expiration("not-a-date"),
///     Err(PricingError::InvalidExpirationFormat { .. })
/// ));
/// ```
pub fn parse_expiration(expiration: &str) -> Result<NaiveDate, PricingError> {
    let Some([year, month, day]) = find_fields(expiration) else {
        warn!(expiration, "expiration does not match year-month-day");
        return Err(PricingError::InvalidExpirationFormat {
            expiration: expiration.to_string(),
        });
    };

    parse_field(year)
        .zip(parse_field(month))
        .zip(parse_field(day))
        .and_then(|((year, month), day)| normalize(year, month, day))
        .ok_or_else(|| {
            warn!(expiration, "expiration out of calendar range");
            PricingError::ExpirationOutOfRange {
                expiration: expiration.to_string(),
            }
        })
}

/// Returns the time from `now` to `expiration` in years
///
/// Both ends are fixed at the configured hour in the time zone of `now`, on
/// their respective calendar dates, and the elapsed seconds are divided by
/// the configured year length. Past expirations give negative fractions.
///
/// # Arguments
///
/// * `now` - The pricing instant, only its local calendar date is used
/// * `expiration` - The expiration date
/// * `config` - The calendar settings
///
/// # Returns
///
/// * `Option<f64>` - The year fraction, or `None` if either fixing instant does not exist
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use series_analytics::{PricingConfig, time_to_expiration};
///
/// let now = Utc.with_ymd_and_hms(2026, 1, 1, 17, 30, 0).unwrap();
/// let expiration = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
/// let time = time_to_expiration(&now, expiration, &PricingConfig::default());
/// assert_eq!(time, Some(1.0));
/// ```
pub fn time_to_expiration<Tz: TimeZone>(
    now: &DateTime<Tz>,
    expiration: NaiveDate,
    config: &PricingConfig,
) -> Option<f64> {
    let tz = now.timezone();
    let fix = |date: NaiveDate| {
        date.and_hms_opt(config.fixing_hour(), 0, 0)
            .and_then(|local| tz.from_local_datetime(&local).earliest())
    };

    let start = fix(now.date_naive())?;
    let end = fix(expiration)?;
    let seconds = end.signed_duration_since(start).num_seconds() as f64;
    Some(seconds / config.seconds_per_year())
}
