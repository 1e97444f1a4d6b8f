//! The `luach_rs` crate converts dates between the fixed Hebrew
//! lunisolar calendar and the proleptic Gregorian calendar.
//!
//! ```rust
//! use luach_rs::{GregorianDate, HebrewDate, HebrewMonth};
//!
//! // 26 Adar II 5765
//! let purim_katan = HebrewDate::try_new(5765, HebrewMonth::Adar.ordinal(), 26).unwrap();
//! let gregorian = purim_katan.to_gregorian();
//! assert_eq!(gregorian, GregorianDate::try_new(2005, 4, 6).unwrap());
//!
//! // And back again
//! let hebrew = gregorian.to_hebrew().unwrap();
//! assert_eq!(hebrew, purim_katan);
//! assert_eq!(hebrew.to_legacy_string(), "7/26/5765");
//! ```
//!
//! Both calendars are treated as if their present day rules always
//! applied. The supported range is Hebrew years [`MIN_HEBREW_YEAR`]
//! through [`MAX_HEBREW_YEAR`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod gregorian;
pub mod hebrew;
pub mod options;
pub mod parsers;

#[cfg(feature = "std")]
mod sys;

#[doc(inline)]
pub use error::LuachError;

/// The `luach_rs` result type
pub type LuachResult<T> = Result<T, LuachError>;

pub use crate::gregorian::{GregorianDate, Weekday};
pub use crate::hebrew::{
    anchor::{tishrei1, EpochAnchor, EPOCH_ANCHOR},
    gregorian_to_hebrew, hebrew_to_gregorian, is_leap_year, length_of_year, month_length,
    DateQualifier, HebrewDate, HebrewDateRange, HebrewDateValue, HebrewMonth, HebrewYear,
    MoladOffset, MonthCode, PartialHebrewDate, RangeKind, YearKind,
};

/// The first supported Hebrew year.
pub const MIN_HEBREW_YEAR: i32 = 1;

/// The last supported Hebrew year.
pub const MAX_HEBREW_YEAR: i32 = 9999;

/// A library specific trait for unwrapping assertions.
pub(crate) trait LuachUnwrap {
    type Output;

    /// `luach_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn luach_unwrap(self) -> LuachResult<Self::Output>;
}

impl<T> LuachUnwrap for Option<T> {
    type Output = T;

    fn luach_unwrap(self) -> LuachResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(LuachError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! luach_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::LuachError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::LuachError::assert());
        }
    };
}
