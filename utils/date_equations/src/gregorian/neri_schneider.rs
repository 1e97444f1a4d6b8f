// NOTE: The Hebrew conversions need the proleptic Gregorian range
// around [-3760, 6240] plus room for year estimates on either side.
//
// The equations below are written for unsigned computational rata die
// values, so signed epoch days are shifted forward by `SHIFT_CONSTANT`
// 400 year cycles before decoding. A shift of 3670 keeps the epoch day
// range |epoch_days| <= 100_000_001 inside a u32 even after `4 * N + 3`.

pub const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;
pub const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;

const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

const SHIFT_CONSTANT: i32 = 3670;

/// Days in each month of a common year (index 0 unused).
const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Calculate epoch days from a gregorian date

/// Returns the number of days from January 1, 1970 to the provided
/// proleptic Gregorian date.
///
/// The month and day are not validated.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i32 {
    let shift =
        SHIFT_CONSTANT as i64 * DAYS_IN_A_400Y_CYCLE as i64 + EPOCH_COMPUTATIONAL_RATA_DIE as i64;
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    (y_star as i64 + m_star + comp_day - shift) as i32
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (u64, i64, i64, u64) {
    let j = (month <= 2) as i64;
    let computational_year = (year as i64 + 400 * SHIFT_CONSTANT as i64) - j;
    let computation_month = month as i64 + 12 * j;
    let computation_day = day as i64 - 1;
    (
        computational_year as u64,
        computation_month,
        computation_day,
        computational_year as u64 / 100,
    )
}

// Computational days to gregorian YMD

// Determine j
const fn j(rata_die: u32) -> u32 {
    (computational_day_of_year(rata_die) >= 306) as u32
}

const fn n_one(rata_die: u32) -> u32 {
    4 * rata_die + 3
}

const fn n_two(rata_die: u32) -> u32 {
    century_rem(rata_die) | 3
}

const fn n_three(rata_die: u32) -> u32 {
    2141 * computational_day_of_year(rata_die) + 197_913
}

const fn century_rem(rata_die: u32) -> u32 {
    n_one(rata_die).rem_euclid(DAYS_IN_A_400Y_CYCLE)
}

pub const fn century_number(rata_die: u32) -> u32 {
    n_one(rata_die).div_euclid(DAYS_IN_A_400Y_CYCLE)
}

pub const fn days_in_century(rata_die: u32) -> u32 {
    century_rem(rata_die).div_euclid(4)
}

// Z
pub const fn computational_year_of_century(rata_die: u32) -> u64 {
    (376_287_347 * n_two(rata_die) as u64).div_euclid(TWO_POWER_THIRTY_NINE)
}

// N_y
pub const fn computational_day_of_year(rata_die: u32) -> u32 {
    (n_two(rata_die) - 1461 * computational_year_of_century(rata_die) as u32).div_euclid(4)
}

// Y
pub const fn computational_year(rata_die: u32) -> u32 {
    100 * century_number(rata_die) + computational_year_of_century(rata_die) as u32
}

pub const fn computational_month(rata_die: u32) -> u32 {
    n_three(rata_die).div_euclid(TWO_POWER_SIXTEEN)
}

pub const fn computational_day(rata_die: u32) -> u32 {
    n_three(rata_die).rem_euclid(TWO_POWER_SIXTEEN).div_euclid(2141)
}

pub const fn gregorian_year(rata_die: u32, year_shift: i32) -> i32 {
    (computational_year(rata_die) + j(rata_die)) as i32 - year_shift
}

pub const fn gregorian_month(rata_die: u32) -> u8 {
    (computational_month(rata_die) - 12 * j(rata_die)) as u8
}

pub const fn gregorian_day(rata_die: u32) -> u8 {
    (computational_day(rata_die) + 1) as u8
}

/// Get the computational Rata Die for given Epoch Days along with the
/// year shift that has to be removed from the decoded year.
pub const fn rata_die_for_epoch_days(epoch_days: i32) -> (u32, i32) {
    let rata_die = (epoch_days
        + EPOCH_COMPUTATIONAL_RATA_DIE
        + DAYS_IN_A_400Y_CYCLE as i32 * SHIFT_CONSTANT) as u32; // epoch_days + K
    (rata_die, 400 * SHIFT_CONSTANT)
}

pub const fn gregorian_ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let (rata_die, year_shift) = rata_die_for_epoch_days(epoch_days);
    (
        gregorian_year(rata_die, year_shift),
        gregorian_month(rata_die),
        gregorian_day(rata_die),
    )
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of `year`, or 0 when the month is
/// not in `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 0 || month > 12 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_IN_MONTH[month as usize]
}

/// Returns the day of the week for the epoch day, with Sunday as 0 and
/// Saturday as 6.
pub const fn weekday_from_epoch_days(epoch_days: i32) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days as i64 + 4).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_RATA_DIE: u32 = 719_468; // This is the Rata Die for 1970-01-01

    #[test]
    fn epoch_century_number() {
        let century_number = century_number(EPOCH_RATA_DIE);
        assert_eq!(century_number, 19);
        let day_number_in_century = days_in_century(EPOCH_RATA_DIE);
        assert_eq!(day_number_in_century, 25508);
    }

    #[test]
    fn epoch_year_of_century() {
        let year = computational_year_of_century(EPOCH_RATA_DIE);
        assert_eq!(year, 69);
    }

    #[test]
    fn epoch_day_of_year() {
        let day = computational_day_of_year(EPOCH_RATA_DIE);
        assert_eq!(day, 306); // Beginning of January in the computational calendar is day number 306
    }

    #[test]
    fn epoch_year() {
        let year = computational_year(EPOCH_RATA_DIE);
        assert_eq!(year, 1969);
    }

    #[test]
    fn epoch_days_from_date() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1900, 1, 1), -25_567);
        assert_eq!(epoch_days_from_gregorian_date(2005, 4, 6), 12_879);
        assert_eq!(epoch_days_from_gregorian_date(-3760, 9, 7), -2_092_590);
        assert_eq!(epoch_days_from_gregorian_date(275_760, 9, 14), 100_000_001);
        assert_eq!(epoch_days_from_gregorian_date(-271_821, 4, 19), -100_000_001);
    }

    #[test]
    fn epoch_days_limit_to_date() {
        assert_eq!(gregorian_ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(gregorian_ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(gregorian_ymd_from_epoch_days(-2_092_590), (-3760, 9, 7));
        assert_eq!(gregorian_ymd_from_epoch_days(100_000_001), (275_760, 9, 14));
        assert_eq!(
            gregorian_ymd_from_epoch_days(-100_000_001),
            (-271_821, 4, 19)
        );
    }

    #[test]
    fn leap_day_boundaries() {
        let feb_29 = epoch_days_from_gregorian_date(2000, 2, 29);
        assert_eq!(gregorian_ymd_from_epoch_days(feb_29), (2000, 2, 29));
        assert_eq!(gregorian_ymd_from_epoch_days(feb_29 + 1), (2000, 3, 1));

        let feb_28 = epoch_days_from_gregorian_date(1900, 2, 28);
        assert_eq!(gregorian_ymd_from_epoch_days(feb_28 + 1), (1900, 3, 1));
    }

    #[test]
    fn days_through_a_full_cycle() {
        let start = epoch_days_from_gregorian_date(-401, 1, 1);
        let end = epoch_days_from_gregorian_date(1, 1, 1);
        assert_eq!(end - start, 402 * 365 + 98);
        let mut expected = (-401, 1, 1);
        for epoch_days in start..end {
            let ymd = gregorian_ymd_from_epoch_days(epoch_days);
            assert_eq!(ymd, expected, "epoch day {epoch_days}");
            assert_eq!(
                epoch_days_from_gregorian_date(ymd.0, ymd.1, ymd.2),
                epoch_days
            );
            expected = if ymd.2 < days_in_month(ymd.0, ymd.1) {
                (ymd.0, ymd.1, ymd.2 + 1)
            } else if ymd.1 < 12 {
                (ymd.0, ymd.1 + 1, 1)
            } else {
                (ymd.0 + 1, 1, 1)
            };
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2005));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2005, 4), 30);
        assert_eq!(days_in_month(2005, 12), 31);
        assert_eq!(days_in_month(2005, 0), 0);
        assert_eq!(days_in_month(2005, 13), 0);
    }

    #[test]
    fn weekdays() {
        // Thursday
        assert_eq!(weekday_from_epoch_days(0), 4);
        // Wednesday, April 6, 2005
        assert_eq!(weekday_from_epoch_days(12_879), 3);
        // Monday, September 7, -3760
        assert_eq!(weekday_from_epoch_days(-2_092_590), 1);
    }
}
