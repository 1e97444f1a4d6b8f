//! Today's date from the host system clock.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{GregorianDate, HebrewDate, LuachError, LuachResult};

const SECONDS_PER_DAY: u64 = 86_400;

/// Returns the number of whole days since 1970-01-01 in UTC.
pub(crate) fn get_system_epoch_days() -> LuachResult<i32> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| LuachError::general("Error fetching system time"))?
        .as_secs();
    i32::try_from(seconds / SECONDS_PER_DAY)
        .map_err(|_| LuachError::general("System time is out of range"))
}

impl GregorianDate {
    /// Returns today's date in UTC.
    pub fn today_utc() -> LuachResult<Self> {
        Self::from_epoch_days(get_system_epoch_days()?)
    }
}

impl HebrewDate {
    /// Returns the Hebrew date of today's UTC civil date.
    ///
    /// The Hebrew day begins at nightfall; this returns the date that is
    /// current during daylight.
    pub fn today_utc() -> LuachResult<Self> {
        GregorianDate::today_utc()?.to_hebrew()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_after_release() {
        let today = GregorianDate::today_utc().unwrap();
        assert!(today >= GregorianDate::try_new(2024, 1, 1).unwrap());
        assert_eq!(HebrewDate::today_utc().unwrap().to_gregorian(), today);
    }
}
