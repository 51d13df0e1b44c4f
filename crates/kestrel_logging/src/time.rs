use core::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time of day (UTC) at which a log occurred
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeStamp {
    pub hour        : u8,
    pub minute      : u8,
    pub second      : u8,
    pub millisecond : u16,
}

impl TimeStamp {
    /// Create a timestamp from the number of milliseconds since the unix epoch
    pub const fn from_unix_millis(millis: u128) -> Self {
        const MILLIS_PER_DAY: u128 = 24 * 60 * 60 * 1000;

        let of_day = millis % MILLIS_PER_DAY;
        let seconds = of_day / 1000;
        Self {
            hour: (seconds / 3600) as u8,
            minute: ((seconds / 60) % 60) as u8,
            second: (seconds % 60) as u8,
            millisecond: (of_day % 1000) as u16,
        }
    }
}

impl Display for TimeStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:02}:{:02}:{:02}.{:03}", self.hour, self.minute, self.second, self.millisecond))
    }
}

/// Get the current timestamp
pub fn get_timestamp() -> TimeStamp {
    // A clock set before 1970 just logs midnight
    let millis = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |dur| dur.as_millis());
    TimeStamp::from_unix_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::TimeStamp;

    #[test]
    fn time_of_day() {
        // 1970-01-02 13:45:07.250
        let millis = ((24 + 13) * 3600 + 45 * 60 + 7) * 1000 + 250;
        let stamp = TimeStamp::from_unix_millis(millis);
        assert_eq!(stamp, TimeStamp { hour: 13, minute: 45, second: 7, millisecond: 250 });
        assert_eq!(stamp.to_string(), "13:45:07.250");
    }
}
