//! The fixed Hebrew calendar.
//!
//! The calendar is built leaf first: the molad of Tishrei
//! ([`MoladOffset`]), the 19 year leap cycle ([`is_leap_year`]), the start
//! of each year after postponements ([`anchor::tishrei1`]), the length of
//! each year ([`length_of_year`]) and of each month ([`month_length`]).
//! [`HebrewDate`] converts in both directions on top of those, and
//! [`HebrewDateValue`] reads the imprecise dates found in GEDCOM files.

pub mod anchor;

mod date;
mod molad;
mod month;
mod partial;
mod value;
mod year;

pub use date::HebrewDate;
pub use molad::MoladOffset;
pub use month::{HebrewMonth, MonthCode};
pub use partial::PartialHebrewDate;
pub use value::{DateQualifier, HebrewDateRange, HebrewDateValue, RangeKind};
pub use year::{length_of_year, month_length, HebrewYear, YearKind};

use crate::{error::ErrorMessage, GregorianDate, LuachError, LuachResult};

/// Returns whether the Hebrew year `year` has thirteen months.
///
/// ```rust
/// assert!(luach_rs::is_leap_year(5765));
/// assert!(!luach_rs::is_leap_year(5766));
/// ```
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    date_equations::hebrew::is_leap_year(year)
}

/// Converts a Hebrew date, given as a year, a month number (1 Tishrei
/// through 13 Elul) and a day, to the Gregorian calendar.
///
/// ```rust
/// use luach_rs::{hebrew_to_gregorian, GregorianDate};
///
/// let date = hebrew_to_gregorian(5765, 7, 26).unwrap();
/// assert_eq!(date, GregorianDate::try_new(2005, 4, 6).unwrap());
/// ```
pub fn hebrew_to_gregorian(year: i32, month: u8, day: u8) -> LuachResult<GregorianDate> {
    Ok(HebrewDate::try_new(year, month, day)?.to_gregorian())
}

/// Converts a Gregorian date to the Hebrew calendar.
///
/// ```rust
/// use luach_rs::{gregorian_to_hebrew, GregorianDate};
///
/// let date = GregorianDate::try_new(2005, 4, 6).unwrap();
/// assert_eq!(gregorian_to_hebrew(&date).unwrap().to_legacy_string(), "7/26/5765");
/// ```
pub fn gregorian_to_hebrew(date: &GregorianDate) -> LuachResult<HebrewDate> {
    HebrewDate::from_gregorian(date)
}

pub(crate) fn check_year(year: i32) -> LuachResult<()> {
    if (crate::MIN_HEBREW_YEAR..=crate::MAX_HEBREW_YEAR).contains(&year) {
        return Ok(());
    }
    Err(LuachError::invalid_year().with_enum(ErrorMessage::HebrewYearOutOfRange))
}
