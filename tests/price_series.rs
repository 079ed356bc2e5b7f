//! End-to-end checks over a ten-day closing price series.

use assert_approx_eq::assert_approx_eq;
use chrono::{Days, TimeZone, Utc};
use series_analytics::{
    BlackScholes, PricingError, Regression, SeriesAnalytics, black_scholes_at, cnd, ema,
};

const CLOSES: [f64; 10] = [
    181.55, 182.14, 180.88, 180.72, 180.37, 181.71, 181.27, 186.35, 188.39, 188.53,
];

fn stats() -> SeriesAnalytics<f64> {
    SeriesAnalytics::new(CLOSES.to_vec())
}

#[test]
fn test_average() {
    let stats = stats();
    assert_approx_eq!(stats.average(None), 183.191, 1e-9);
    assert_approx_eq!(stats.average(Some(3)), 187.756_666_666, 1e-8);
    assert_eq!(stats.average(Some(11)), 0.0);
}

#[test]
fn test_slope() {
    let stats = stats();
    assert_eq!(
        stats.slope(Some(3)),
        Regression {
            slope: 1.09,
            intercept: 179.04
        }
    );
    assert_eq!(
        stats.slope(None),
        Regression {
            slope: 0.83,
            intercept: 179.46
        }
    );
    assert_eq!(stats.slope(Some(11)), stats.slope(None));
}

#[test]
fn test_dispersion() {
    let stats = stats();
    assert_approx_eq!(stats.variance(None), 10.511_054_444, 1e-8);
    assert_approx_eq!(stats.standard_deviation(None), 3.242_075_638, 1e-8);
    assert_approx_eq!(stats.variance(Some(4)), 11.511_833_333, 1e-8);
    assert_eq!(stats.variance(Some(1)), 0.0);
}

#[test]
fn test_ema_stream() {
    let mut previous = None;
    let mut results = vec![];
    for close in CLOSES {
        let next = ema(close, previous, 5);
        results.push(next);
        previous = Some(if next == 0.0 { close } else { next });
    }

    assert_eq!(results[0], 0.0);
    assert_eq!(results[1], 181.75);
    assert!(results[2..].iter().all(|v| (180.0..189.0).contains(v)));
}

#[test]
fn test_black_scholes_with_series_volatility() {
    let stats = stats();
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap();
    let expiration = now.date_naive().checked_add_days(Days::new(180)).unwrap();
    let expiration = expiration.format("%Y-%m-%d").to_string();

    let trade = CLOSES[9];
    let volatility = stats.standard_deviation(None);

    let deep = black_scholes_at(&now, trade, 120.0, 3.47, &expiration, volatility).unwrap();
    assert_approx_eq!(deep.call, 70.566_009_337, 1e-6);
    assert_eq!(deep.put, 0.0);

    let near = black_scholes_at(&now, trade, 190.0, 3.47, &expiration, volatility).unwrap();
    assert_approx_eq!(near.d1, 0.421_857_094, 1e-6);
    assert_approx_eq!(near.d2, 0.399_089_719, 1e-6);
    assert_approx_eq!(near.call, 2.722_829_935, 1e-6);
    assert_approx_eq!(near.put, 0.969_148_484, 1e-6);
    assert_approx_eq!(cnd(near.d1) + cnd(-near.d1), 1.0, 1e-15);
}

#[test]
fn test_black_scholes_today_is_non_finite() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap();
    let quote = black_scholes_at(&now, 100.0_f64, 100.0, 5.0, "2026-10-19", 20.0).unwrap();
    assert!(!quote.d1.is_finite());
    assert!(!quote.d2.is_finite());
}

#[test]
fn test_black_scholes_rejects_malformed_expiration() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap();
    for expiration in ["not-a-date", "19/10/2026", "tomorrow"] {
        assert_eq!(
            BlackScholes::default().price_at(&now, 100.0, 100.0, 5.0, expiration, 20.0),
            Err(PricingError::InvalidExpirationFormat {
                expiration: expiration.to_string()
            })
        );
    }
}

#[test]
fn test_replacing_series() {
    let mut stats = stats();
    let before = stats.variance(None);
    stats.set_series(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_approx_eq!(stats.variance(None), 32.0 / 7.0, 1e-12);
    stats.set_series(CLOSES.to_vec());
    assert_eq!(stats.variance(None).to_bits(), before.to_bits());
}
