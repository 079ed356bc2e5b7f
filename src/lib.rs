#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::just_underscores_and_digits)]

#[cfg_attr(all(test, not(feature = "std")), macro_use)]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::{Window, helper};

mod config;
pub use config::PricingConfig;

mod error;
pub use error::PricingError;

mod series;
pub use series::SeriesAnalytics;

mod trend;
pub use trend::Regression;

mod dispersion;

mod ema;
pub use ema::ema;

mod distribution;
pub use distribution::cnd;

mod expiration;
pub use expiration::{parse_expiration, time_to_expiration};

mod options;
#[cfg(feature = "std")]
pub use options::black_scholes;
pub use options::{BlackScholes, OptionQuote, black_scholes_at};
