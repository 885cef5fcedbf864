use std::fmt;

/// A 12-hour wall-clock time stored as minutes since midnight (0-1439).
///
/// Slot times are persisted as `H:MM AM|PM` strings. Offset arithmetic
/// works in minutes and wraps modulo one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub fn from_minutes(minutes: u16) -> Self {
        Self {
            minutes: minutes % MINUTES_PER_DAY,
        }
    }

    /// Parses `H:MM AM|PM` with hour in 1-12 and a two-digit minute.
    /// `12 AM` maps to midnight, `12 PM` to noon.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let clock = parts.next()?;
        let meridiem = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let (hour, minute) = clock.split_once(':')?;
        if minute.len() != 2 {
            return None;
        }
        let hour: u16 = hour.parse().ok()?;
        let minute: u16 = minute.parse().ok()?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }

        let hour24 = if meridiem.eq_ignore_ascii_case("am") {
            hour % 12
        } else if meridiem.eq_ignore_ascii_case("pm") {
            hour % 12 + 12
        } else {
            return None;
        };

        Some(Self {
            minutes: hour24 * 60 + minute,
        })
    }

    /// Adds an offset, wrapping across midnight. The offset may be negative.
    pub fn offset_by(self, minutes: i32) -> Self {
        let total = (i32::from(self.minutes) + minutes).rem_euclid(i32::from(MINUTES_PER_DAY));
        Self {
            minutes: total as u16,
        }
    }

    pub fn since_midnight(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minutes % 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour24 = self.minutes / 60;
        let minute = self.minutes % 60;
        let (hour12, meridiem) = match hour24 {
            0 => (12, "AM"),
            1..=11 => (hour24, "AM"),
            12 => (12, "PM"),
            _ => (hour24 - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour12, minute, meridiem)
    }
}

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Splits a slot's `"<start> - <end>"` range into its two sides. Returns
/// `None` unless the separator occurs exactly once.
pub fn split_range(time: &str) -> Option<(&str, &str)> {
    let mut parts = time.split(" - ");
    let start = parts.next()?;
    let end = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((start, end))
}
