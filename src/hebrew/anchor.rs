//! Placing the start of a Hebrew year (1 Tishrei, Rosh Hashanah) on the
//! Gregorian calendar.
//!
//! Rosh Hashanah falls on the day of the molad of Tishrei unless one of the
//! postponement rules moves it later. The resulting count of days since the
//! epoch is then placed on the civil calendar through [`EPOCH_ANCHOR`].

use date_equations::{gregorian, hebrew};

use super::{check_year, MoladOffset};
use crate::{GregorianDate, LuachResult};

// The molad times, in chalakim since the start of the day, at or after
// which the first two rules apply.
const COMMON_YEAR_TUESDAY_LIMIT: u32 = 9 * 1080 + 204;
const AFTER_LEAP_YEAR_MONDAY_LIMIT: u32 = 15 * 1080 + 589;
const LATE_MOLAD_HOUR: u8 = 18;

/// A civil date paired with the number of days it lies after the Hebrew
/// epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochAnchor {
    reference: GregorianDate,
    days_since_epoch: i64,
}

/// January 1, 1900 is 2,067,025 days after the Hebrew epoch.
pub const EPOCH_ANCHOR: EpochAnchor = EpochAnchor {
    reference: GregorianDate::new_unchecked(1900, 1, 1),
    days_since_epoch: 2_067_025,
};

impl EpochAnchor {
    /// The reference civil date.
    #[inline]
    #[must_use]
    pub const fn reference(&self) -> GregorianDate {
        self.reference
    }

    /// The number of days the reference date lies after the Hebrew epoch.
    #[inline]
    #[must_use]
    pub const fn days_since_epoch(&self) -> i64 {
        self.days_since_epoch
    }

    /// Converts a count of days since the Hebrew epoch into days since
    /// 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_unix_epoch_days(&self, days_since_epoch: i64) -> i64 {
        self.reference.to_epoch_days() as i64 + (days_since_epoch - self.days_since_epoch)
    }

    /// Returns the number of days `date` lies after the Hebrew epoch.
    #[inline]
    #[must_use]
    pub const fn days_since_epoch_of(&self, date: &GregorianDate) -> i64 {
        self.days_since_epoch + self.reference.days_until(date) as i64
    }
}

/// The rule that moved Rosh Hashanah away from the day of its molad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Postponement {
    /// Rosh Hashanah falls on the day of the molad.
    OnMoladDay,
    /// A common year whose molad falls on Tuesday at or after 9 hours and
    /// 204 chalakim moves to Thursday.
    CommonYearTuesday,
    /// A year following a leap year whose molad falls on Monday at or after
    /// 15 hours and 589 chalakim moves to Tuesday.
    AfterLeapYearMonday,
    /// A molad at or after 18 hours moves to the following day.
    LateMolad,
    /// Rosh Hashanah may not fall on Sunday, Wednesday or Friday.
    ForbiddenWeekday,
    /// A late molad whose following day is forbidden moves two days.
    LateMoladForbiddenWeekday,
}

impl Postponement {
    /// Determines the postponement that applies to `year` with its molad of
    /// Tishrei.
    #[must_use]
    pub const fn for_year(year: i32, molad: &MoladOffset) -> Self {
        let day_of_week = molad.day_of_week();
        let time_of_day = molad.time_of_day_chalakim();

        if !hebrew::is_leap_year(year) && day_of_week == 3 && time_of_day >= COMMON_YEAR_TUESDAY_LIMIT
        {
            return Self::CommonYearTuesday;
        }
        if hebrew::is_leap_year(year - 1)
            && day_of_week == 2
            && time_of_day >= AFTER_LEAP_YEAR_MONDAY_LIMIT
        {
            return Self::AfterLeapYearMonday;
        }

        let late = molad.hours >= LATE_MOLAD_HOUR;
        let day_of_week = if late {
            (day_of_week + 1) % 7
        } else {
            day_of_week
        };
        let forbidden = matches!(day_of_week, 1 | 4 | 6);

        match (late, forbidden) {
            (true, true) => Self::LateMoladForbiddenWeekday,
            (true, false) => Self::LateMolad,
            (false, true) => Self::ForbiddenWeekday,
            (false, false) => Self::OnMoladDay,
        }
    }

    /// The number of days Rosh Hashanah is moved.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::OnMoladDay => 0,
            Self::AfterLeapYearMonday | Self::LateMolad | Self::ForbiddenWeekday => 1,
            Self::CommonYearTuesday | Self::LateMoladForbiddenWeekday => 2,
        }
    }
}

/// The number of days from the Hebrew epoch to 1 Tishrei of `year`.
#[must_use]
pub const fn new_year_days_since_epoch(year: i32) -> i64 {
    let molad = MoladOffset::for_year(year);
    molad.days + Postponement::for_year(year, &molad).days()
}

/// Days since 1970-01-01 of 1 Tishrei of `year`.
///
/// The result fits an `i32` for every year the crate supports, plus a
/// margin on either side for bracketing.
#[inline]
pub(crate) const fn tishrei1_epoch_days(year: i32) -> i32 {
    EPOCH_ANCHOR.to_unix_epoch_days(new_year_days_since_epoch(year)) as i32
}

/// Returns the Gregorian date of 1 Tishrei (Rosh Hashanah) of `year`.
///
/// ```rust
/// use luach_rs::{tishrei1, GregorianDate};
///
/// assert_eq!(tishrei1(5766).unwrap(), GregorianDate::try_new(2005, 10, 4).unwrap());
/// ```
pub fn tishrei1(year: i32) -> LuachResult<GregorianDate> {
    check_year(year)?;
    let (year, month, day) = gregorian::ymd_from_epoch_days(tishrei1_epoch_days(year));
    Ok(GregorianDate::new_unchecked(year, month, day))
}
