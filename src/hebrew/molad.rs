//! The molad of Tishrei, the moment each Hebrew year is reckoned from.

use date_equations::hebrew::{
    months_since_epoch_molad, CHALAKIM_PER_HOUR, EPOCH_MOLAD, HOURS_PER_DAY, MOLAD_INTERVAL,
};

/// The molad of Tishrei for a year, as elapsed time since the start of the
/// calendar's epoch.
///
/// `days` counts whole days with the epoch molad landing on day 2, so
/// `days % 7` is the day of the week with Sunday as 1 and Saturday as 0.
/// `hours` is always below 24 and `chalakim` below 1080.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoladOffset {
    pub days: i64,
    pub hours: u8,
    pub chalakim: u16,
}

impl MoladOffset {
    /// Computes the molad of Tishrei for `year`.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        let months = months_since_epoch_molad(year);
        let (interval_days, interval_hours, interval_chalakim) = MOLAD_INTERVAL;
        let (epoch_day, epoch_hours, epoch_chalakim) = EPOCH_MOLAD;

        // Carry chalakim into hours and hours into days.
        let chalakim = interval_chalakim * months + epoch_chalakim;
        let hours = chalakim.div_euclid(CHALAKIM_PER_HOUR) + interval_hours * months + epoch_hours;
        let days = hours.div_euclid(HOURS_PER_DAY) + interval_days * months + epoch_day;

        Self {
            days,
            hours: hours.rem_euclid(HOURS_PER_DAY) as u8,
            chalakim: chalakim.rem_euclid(CHALAKIM_PER_HOUR) as u16,
        }
    }

    /// Day of the week of the molad: Sunday is 1, Friday is 6 and Saturday
    /// is 0.
    #[inline]
    #[must_use]
    pub const fn day_of_week(&self) -> u8 {
        self.days.rem_euclid(7) as u8
    }

    /// The time of day of the molad in chalakim since the start of the day.
    #[inline]
    #[must_use]
    pub const fn time_of_day_chalakim(&self) -> u32 {
        self.hours as u32 * CHALAKIM_PER_HOUR as u32 + self.chalakim as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_molad() {
        let molad = MoladOffset::for_year(1);
        assert_eq!(
            molad,
            MoladOffset {
                days: 2,
                hours: 5,
                chalakim: 204
            }
        );
        // Monday
        assert_eq!(molad.day_of_week(), 2);
        assert_eq!(molad.time_of_day_chalakim(), 5 * 1080 + 204);
    }

    #[test]
    fn second_year() {
        assert_eq!(
            MoladOffset::for_year(2),
            MoladOffset {
                days: 356,
                hours: 14,
                chalakim: 0
            }
        );
    }

    #[test]
    fn modern_molads() {
        let molad = MoladOffset::for_year(5765);
        assert_eq!(
            molad,
            MoladOffset {
                days: 2_105_267,
                hours: 19,
                chalakim: 287
            }
        );
        // Tuesday
        assert_eq!(molad.day_of_week(), 3);

        let molad = MoladOffset::for_year(5766);
        assert_eq!(
            molad,
            MoladOffset {
                days: 2_105_651,
                hours: 16,
                chalakim: 876
            }
        );
        // Monday
        assert_eq!(molad.day_of_week(), 2);
    }

    #[test]
    fn components_stay_in_range() {
        for year in 1..3000 {
            let molad = MoladOffset::for_year(year);
            assert!(molad.hours < 24);
            assert!(molad.chalakim < 1080);
            assert!(MoladOffset::for_year(year + 1).days > molad.days);
        }
    }
}
