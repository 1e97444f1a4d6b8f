/// Gregorian Date Calculations
///
/// This module contains the logic for Gregorian Date Calculations.
///
/// ## Extending Neri-Schneider shift window
///
/// In their paper, Neri-Schneider calculated for a Rata Die shift
/// of 82, which covers a range of 32_767 years. The Hebrew calendar
/// reaches back to -3760 and the conversions need room on either
/// side, so the equations below use a cycle shift of 3670 which places
/// the Unix epoch roughly in the center of the unsigned window.
///
/// | Significant Date | Epoch Days |
/// | -----------------|------------|
/// | April 19, -271_821 | -100,000,001 |
/// | September 7, -3760 | -2,092,590 |
/// | January 1, 1970 | 0 |
/// | September 14, 275,760 | 100,000,001 |
///
pub mod neri_schneider;

pub use neri_schneider::{
    days_in_month, epoch_days_from_gregorian_date, gregorian_day as day,
    gregorian_month as month, gregorian_year as year,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days, is_leap_year, rata_die_for_epoch_days,
    weekday_from_epoch_days,
};
