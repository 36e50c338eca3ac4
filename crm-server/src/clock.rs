//! Time-of-day source for attendance window checks
//!
//! Handlers never read the wall clock directly; they ask the [`Clock`] in
//! `AppState`, which lets tests pin "now" to a fixed value.

use chrono::{Local, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

/// Source of the current time of day
pub trait Clock: Send + Sync {
    fn now_time(&self) -> NaiveTime;
}

/// Drop the sub-second part; window checks compare whole `HH:MM:SS` values.
pub fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Wall clock, in server-local time or a configured timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    tz: Option<Tz>,
}

impl SystemClock {
    /// Clock reading the server's local time.
    pub fn local() -> Self {
        Self { tz: None }
    }

    /// Clock reading time in a specific IANA timezone.
    pub fn in_timezone(tz: Tz) -> Self {
        Self { tz: Some(tz) }
    }

    /// Parse an IANA timezone name such as `Asia/Tashkent`.
    pub fn from_tz_name(name: &str) -> Result<Self, String> {
        name.parse::<Tz>()
            .map(Self::in_timezone)
            .map_err(|e| format!("unknown timezone '{}': {}", name, e))
    }
}

impl Clock for SystemClock {
    fn now_time(&self) -> NaiveTime {
        let now = match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).time(),
            None => Local::now().time(),
        };
        whole_seconds(now)
    }
}

/// Clock frozen at a single time of day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    pub fn at(hour: u32, min: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, min, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now_time(&self) -> NaiveTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_time() {
        let clock = FixedClock::at(9, 15);
        assert_eq!(clock.now_time(), NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    }

    #[test]
    fn whole_seconds_drops_fraction() {
        let t = NaiveTime::from_hms_milli_opt(16, 0, 0, 400).unwrap();
        assert_eq!(whole_seconds(t), NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn system_clock_reads_whole_seconds() {
        assert_eq!(SystemClock::local().now_time().nanosecond(), 0);
        let tz = SystemClock::from_tz_name("UTC").unwrap();
        assert_eq!(tz.now_time().nanosecond(), 0);
    }

    #[test]
    fn parses_timezone_names() {
        assert!(SystemClock::from_tz_name("Asia/Tashkent").is_ok());
        assert!(SystemClock::from_tz_name("UTC").is_ok());
        assert!(SystemClock::from_tz_name("Mars/Olympus").is_err());
    }
}
