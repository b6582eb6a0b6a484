use std::fmt;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Time of day with minute precision, as produced by an `<input type="time">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourMin {
    hour: u8,
    min: u8,
}

impl HourMin {
    pub const fn new(hour: u8, min: u8) -> Option<Self> {
        if hour > 23 || min > 59 {
            return None;
        }
        Some(Self { hour, min })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.min
    }

    pub fn to_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.min as u32
    }

    /// Wraps around midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            min: (minutes % 60) as u8,
        }
    }
}

/// Exactly two ASCII digits; no sign, no padding other than a leading zero.
fn two_digits(part: Option<&str>, what: &str) -> Result<u8, String> {
    let part = part.ok_or_else(|| format!("Missing {}", what))?;
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid {}: {:?}", what, part));
    }
    part.parse::<u8>()
        .map_err(|e| format!("Invalid {}: {}", what, e))
}

impl TryFrom<&str> for HourMin {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // HH:MM, or HH:MM:SS when the input has a step below one minute
        if value.len() != 5 && value.len() != 8 {
            return Err(format!("Invalid length: {}", value.len()));
        }
        let mut parts = value.split(':');
        let hour = two_digits(parts.next(), "hour")?;
        if hour > 23 {
            return Err(format!("Invalid hour, value too high: {}", hour));
        }

        let min = two_digits(parts.next(), "min")?;
        if min > 59 {
            return Err(format!("Invalid min, value too high: {}", min));
        }

        if value.len() == 8 {
            let sec = two_digits(parts.next(), "sec")?;
            if sec > 59 {
                return Err(format!("Invalid sec, value too high: {}", sec));
            }
        }
        Ok(Self { hour, min })
    }
}

/// 12-hour clock, e.g. `6:30 PM`. Midnight is `12:00 AM`, noon `12:00 PM`.
impl fmt::Display for HourMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour, self.min, suffix)
    }
}
