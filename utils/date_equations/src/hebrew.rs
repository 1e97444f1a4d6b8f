//! Hebrew calendar arithmetic.
//!
//! The fixed Hebrew calendar is built on two pieces of pure integer
//! arithmetic: the count of lunar months (molads) since the first molad,
//! and the 19 year (Metonic) cycle that decides which years carry a
//! thirteenth month. Everything that needs a civil date lives in
//! `luach_rs`.

/// The number of years in a leap cycle.
pub const YEARS_PER_CYCLE: i32 = 19;

/// The number of lunar months in a leap cycle: `19 * 12 + 7`.
pub const MONTHS_PER_CYCLE: i64 = 235;

/// Parts ("chalakim") in an hour.
pub const CHALAKIM_PER_HOUR: i64 = 1080;

/// Hours in a day.
pub const HOURS_PER_DAY: i64 = 24;

/// The length of one lunar month as `(days, hours, chalakim)`.
pub const MOLAD_INTERVAL: (i64, i64, i64) = (29, 12, 793);

/// The time of the first molad as `(day of week, hours, chalakim)`.
///
/// The first molad fell on a Monday (day 2 counting Sunday as 1) at 5 hours
/// and 204 chalakim.
pub const EPOCH_MOLAD: (i64, i64, i64) = (2, 5, 204);

/// Positions within the cycle that are leap years. Position 0 is the 19th
/// year of the cycle.
const LEAP_YEAR_POSITIONS: [i32; 7] = [0, 3, 6, 8, 11, 14, 17];

/// Returns the position of `year` within its leap cycle, in `0..19`.
///
/// The 19th year of a cycle is position 0.
#[inline]
pub const fn year_in_cycle(year: i32) -> i32 {
    year.rem_euclid(YEARS_PER_CYCLE)
}

/// Returns whether `year` has thirteen months.
pub const fn is_leap_year(year: i32) -> bool {
    let position = year_in_cycle(year);
    let mut i = 0;
    while i < LEAP_YEAR_POSITIONS.len() {
        if LEAP_YEAR_POSITIONS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Returns the number of intercalated months that precede `position`
/// within a cycle.
const fn leap_months_before(position: i32) -> i64 {
    match position {
        17.. => 6,
        14.. => 5,
        11.. => 4,
        8.. => 3,
        6.. => 2,
        3.. => 1,
        _ => 0,
    }
}

/// Returns the number of complete lunar months between the first molad and
/// the molad of Tishrei of `year`.
pub const fn months_since_epoch_molad(year: i32) -> i64 {
    // The months of `year` itself have not elapsed yet.
    let elapsed_years = year as i64 - 1;
    let cycles = elapsed_years.div_euclid(YEARS_PER_CYCLE as i64);
    let position = elapsed_years.rem_euclid(YEARS_PER_CYCLE as i64);
    cycles * MONTHS_PER_CYCLE + 12 * position + leap_months_before(position as i32)
}
