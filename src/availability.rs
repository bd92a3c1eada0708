//! Weekly availability profile of a schedule.

use std::fmt;

use crate::devices::{Schedule, ScheduledConsumer, Status};

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Onsite/offsite classification for every hour of one week.
///
/// Rows are days (Monday first), columns are hours of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyAvailability {
    /// Schedule the grid was derived from.
    pub schedule: Schedule,
    grid: [[Status; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl WeeklyAvailability {
    /// Classifies all 168 hours of the week under `schedule`.
    pub fn for_schedule(schedule: Schedule) -> Self {
        let mut grid = [[Status::Offsite; HOURS_PER_DAY]; DAYS_PER_WEEK];
        for (day, row) in grid.iter_mut().enumerate() {
            for (hour, slot) in row.iter_mut().enumerate() {
                *slot = schedule.status(hour as u8, day as u8);
            }
        }
        Self { schedule, grid }
    }

    /// Availability grid of a consumer's schedule.
    pub fn for_consumer(consumer: &ScheduledConsumer) -> Self {
        Self::for_schedule(consumer.schedule)
    }

    /// Status at `(hour_of_day, day_of_week)`, or `None` outside the week.
    pub fn get(&self, hour_of_day: usize, day_of_week: usize) -> Option<Status> {
        self.grid.get(day_of_week)?.get(hour_of_day).copied()
    }

    /// Iterates over `(day_of_week, hour_of_day, status)` in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Status)> + '_ {
        self.grid.iter().enumerate().flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .map(move |(hour, status)| (day, hour, *status))
        })
    }

    /// Number of onsite hours in the week.
    pub fn chargeable_hours(&self) -> usize {
        self.iter().filter(|(_, _, s)| s.is_onsite()).count()
    }

    /// Number of onsite hours on the given day.
    pub fn chargeable_hours_on(&self, day_of_week: usize) -> usize {
        self.grid
            .get(day_of_week)
            .map_or(0, |row| row.iter().filter(|s| s.is_onsite()).count())
    }

    /// Upper bound on energy that can be charged in a week (kWh), assuming
    /// one charge step of `max_charge_kwh` per onsite hour.
    pub fn charge_opportunity_kwh(&self, max_charge_kwh: f32) -> f32 {
        self.chargeable_hours() as f32 * max_charge_kwh
    }
}

impl fmt::Display for WeeklyAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Weekly availability ({}) ---", self.schedule)?;
        write!(f, "    ")?;
        for hour in 0..HOURS_PER_DAY {
            write!(f, "{}", hour % 10)?;
        }
        writeln!(f)?;
        for (label, row) in DAY_LABELS.iter().zip(&self.grid) {
            write!(f, "{label} ")?;
            for status in row {
                f.write_str(if status.is_onsite() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        write!(f, "Chargeable hours: {}/168", self.chargeable_hours())
    }
}
