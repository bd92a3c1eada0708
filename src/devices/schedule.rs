//! Weekly availability schedules for fleet vehicles.

use std::fmt;
use std::str::FromStr;

use super::error::DeviceError;

/// First day of the weekend (`day_of_week` counts Monday as 0).
pub const WEEKEND_START: u8 = 5;

/// Whether a vehicle is at its base and can be plugged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Onsite,
    Offsite,
}

impl Status {
    /// Returns `true` for [`Status::Onsite`].
    pub fn is_onsite(self) -> bool {
        self == Self::Onsite
    }

    fn from_onsite(onsite: bool) -> Self {
        if onsite { Self::Onsite } else { Self::Offsite }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Onsite => "onsite",
            Self::Offsite => "offsite",
        })
    }
}

/// Named weekly duty pattern.
///
/// Each variant maps an `(hour_of_day, day_of_week)` coordinate to a
/// [`Status`]. The weekday-gated variants (`Workday`, `Worknight`, `Evening`)
/// keep the vehicle onsite for the whole weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Onsite on weekends and on weekdays from 03:00 to 06:59.
    Workday,
    /// Onsite on weekends and on weekdays from 07:00 to 19:59.
    Worknight,
    /// Onsite every day from 03:00 to 06:59.
    Daytime,
    /// Onsite every day from 07:00 to 19:59.
    Nighttime,
    /// Onsite on weekends and on weekdays from 16:00 to 19:59.
    Evening,
    /// Offsite every day from 06:00 to 12:59 and from 14:00 to 19:59.
    Lunchbreak,
}

impl Schedule {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Workday,
        Self::Worknight,
        Self::Daytime,
        Self::Nighttime,
        Self::Evening,
        Self::Lunchbreak,
    ];

    /// Accepted schedule names, in declaration order.
    pub const NAMES: [&'static str; 6] = [
        "workday",
        "worknight",
        "daytime",
        "nighttime",
        "evening",
        "lunchbreak",
    ];

    /// Lowercase name of the schedule.
    pub fn name(self) -> &'static str {
        match self {
            Self::Workday => "workday",
            Self::Worknight => "worknight",
            Self::Daytime => "daytime",
            Self::Nighttime => "nighttime",
            Self::Evening => "evening",
            Self::Lunchbreak => "lunchbreak",
        }
    }

    /// Whether the schedule keeps the vehicle onsite for the whole weekend.
    pub fn is_weekday_gated(self) -> bool {
        matches!(self, Self::Workday | Self::Worknight | Self::Evening)
    }

    /// Classifies a time coordinate.
    ///
    /// # Arguments
    ///
    /// * `hour_of_day` - Hour in `0..=23`
    /// * `day_of_week` - Day in `0..=6`, Monday first; `5` and `6` are the weekend
    ///
    /// Values outside those ranges go through the same comparisons, so any
    /// `day_of_week >= 5` counts as weekend.
    pub fn status(self, hour_of_day: u8, day_of_week: u8) -> Status {
        let weekend = day_of_week >= WEEKEND_START;
        let h = hour_of_day;

        let onsite = match self {
            Self::Workday => weekend || (3..=6).contains(&h),
            Self::Worknight => weekend || (7..=19).contains(&h),
            Self::Daytime => (3..=6).contains(&h),
            Self::Nighttime => (7..=19).contains(&h),
            Self::Evening => weekend || (16..=19).contains(&h),
            Self::Lunchbreak => !((6..=12).contains(&h) || (14..=19).contains(&h)),
        };
        Status::from_onsite(onsite)
    }
}

impl FromStr for Schedule {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|schedule| schedule.name() == s)
            .ok_or_else(|| DeviceError::InvalidSchedule(s.to_string()))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
