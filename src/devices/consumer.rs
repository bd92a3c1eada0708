use std::fmt;

use tracing::debug;

use crate::availability::{DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::devices::error::DeviceError;
use crate::devices::schedule::{Schedule, Status};
use crate::devices::storage::StorageResource;
use crate::devices::types::{Capability, EnergyStorage};

/// Average driving speed of a truck while offsite (km/h).
pub const DEFAULT_AVERAGE_SPEED_KMH: f32 = 15.0;

/// Energy drawn per kilometre driven (kWh/km).
pub const DEFAULT_CONSUMPTION_KWH_PER_KM: f32 = 0.85;

/// Active days assumed by the weekly demand estimate.
const ACTIVE_DAYS_PER_WEEK: f32 = 5.0;

/// Active hours per day assumed by the weekly demand estimate.
const ACTIVE_HOURS_PER_DAY: f32 = 12.0;

/// A fleet vehicle whose battery can only be charged while it is at its base.
///
/// The vehicle owns a [`StorageResource`] (built from
/// [`Capability::ELECTRIC_TRUCK`] unless stated otherwise) that starts fully
/// charged. Its [`Schedule`] decides, for every hour of the week, whether it
/// is onsite and therefore chargeable. Availability and demand queries do not
/// depend on the current charge.
///
/// # Examples
///
/// ```
/// use fleet_storage::devices::{ScheduledConsumer, Status};
///
/// let truck = ScheduledConsumer::new("workday", None).unwrap();
/// assert_eq!(truck.status(4, 2), Status::Onsite);
/// assert!(!truck.chargeable(10, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledConsumer {
    resource: StorageResource,

    /// Weekly duty pattern.
    pub schedule: Schedule,

    /// Average driving speed while active (km/h).
    pub average_speed_kmh: f32,

    /// Energy consumption per kilometre (kWh/km).
    pub consumption_kwh_per_km: f32,
}

impl ScheduledConsumer {
    /// Creates a fully charged electric truck following the named schedule.
    ///
    /// # Arguments
    ///
    /// * `schedule_name` - One of [`Schedule::NAMES`]
    /// * `average_speed_kmh` - Overrides [`DEFAULT_AVERAGE_SPEED_KMH`] when given
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidSchedule`] for an unknown schedule name and
    /// [`DeviceError::InvalidConfiguration`] for a non-positive speed.
    pub fn new(schedule_name: &str, average_speed_kmh: Option<f32>) -> Result<Self, DeviceError> {
        let schedule: Schedule = schedule_name.parse()?;
        Self::from_parts(
            schedule,
            Capability::ELECTRIC_TRUCK,
            average_speed_kmh.unwrap_or(DEFAULT_AVERAGE_SPEED_KMH),
            DEFAULT_CONSUMPTION_KWH_PER_KM,
        )
    }

    /// Creates a fully charged consumer from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidConfiguration`] if a limit, the speed or
    /// the consumption rate is not positive.
    pub fn from_parts(
        schedule: Schedule,
        capability: Capability,
        average_speed_kmh: f32,
        consumption_kwh_per_km: f32,
    ) -> Result<Self, DeviceError> {
        let resource = StorageResource::full(capability)?;
        let average_speed_kmh =
            DeviceError::require_positive("average_speed_kmh", average_speed_kmh)?;
        let consumption_kwh_per_km =
            DeviceError::require_positive("consumption_kwh_per_km", consumption_kwh_per_km)?;

        debug!(
            %schedule,
            capacity_kwh = capability.capacity_kwh,
            average_speed_kmh,
            "scheduled consumer created"
        );

        Ok(Self {
            resource,
            schedule,
            average_speed_kmh,
            consumption_kwh_per_km,
        })
    }

    /// Classifies whether the vehicle is at its base at the given time.
    pub fn status(&self, hour_of_day: u8, day_of_week: u8) -> Status {
        self.schedule.status(hour_of_day, day_of_week)
    }

    /// Classifies an hourly timestep counted from Monday 00:00.
    ///
    /// Timesteps past the first week wrap around.
    pub fn status_at(&self, timestep: usize) -> Status {
        let hour = timestep % HOURS_PER_DAY;
        let day = (timestep / HOURS_PER_DAY) % DAYS_PER_WEEK;
        // Both values fit in u8 after the modulo.
        self.status(hour as u8, day as u8)
    }

    /// Returns `true` if the vehicle can be charged at the given time.
    pub fn chargeable(&self, hour_of_day: u8, day_of_week: u8) -> bool {
        self.status(hour_of_day, day_of_week).is_onsite()
    }

    /// Energy drawn during a typical hour of driving (kWh).
    pub fn hourly_demand(&self) -> f32 {
        self.average_speed_kmh * self.consumption_kwh_per_km
    }

    /// Coarse weekly energy demand (kWh): five active days of twelve hours.
    ///
    /// This is a planning estimate and does not consult the schedule.
    pub fn weekly_demand(&self) -> f32 {
        self.hourly_demand() * ACTIVE_DAYS_PER_WEEK * ACTIVE_HOURS_PER_DAY
    }
}

impl EnergyStorage for ScheduledConsumer {
    fn resource(&self) -> &StorageResource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut StorageResource {
        &mut self.resource
    }
}

impl fmt::Display for ScheduledConsumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduledConsumer(schedule='{}')", self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let truck = ScheduledConsumer::new("workday", None).expect("valid");
        assert_eq!(truck.schedule, Schedule::Workday);
        assert_eq!(truck.average_speed_kmh, DEFAULT_AVERAGE_SPEED_KMH);
        assert_eq!(truck.consumption_kwh_per_km, DEFAULT_CONSUMPTION_KWH_PER_KM);
        assert_eq!(truck.resource().capability(), Capability::ELECTRIC_TRUCK);
        assert_eq!(truck.stored_kwh(), 400.0);
        assert_eq!(truck.state_of_charge(), 1.0);
    }

    #[test]
    fn test_speed_override_applies_for_every_schedule() {
        for name in Schedule::NAMES {
            let truck = ScheduledConsumer::new(name, Some(22.0)).expect("valid");
            assert_eq!(truck.average_speed_kmh, 22.0);
        }
    }

    #[test]
    fn test_unknown_schedule() {
        assert_eq!(
            ScheduledConsumer::new("bogus", None),
            Err(DeviceError::InvalidSchedule("bogus".into()))
        );
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        assert!(matches!(
            ScheduledConsumer::new("evening", Some(0.0)),
            Err(DeviceError::InvalidConfiguration {
                field: "average_speed_kmh",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_consumption_rejected() {
        let err = ScheduledConsumer::from_parts(
            Schedule::Daytime,
            Capability::ELECTRIC_TRUCK,
            15.0,
            -0.85,
        );
        assert!(matches!(
            err,
            Err(DeviceError::InvalidConfiguration {
                field: "consumption_kwh_per_km",
                ..
            })
        ));
    }

    #[test]
    fn test_demand() {
        let truck = ScheduledConsumer::new("daytime", None).expect("valid");
        assert!((truck.hourly_demand() - 12.75).abs() < 1e-4);
        assert!((truck.weekly_demand() - 765.0).abs() < 1e-2);
    }

    #[test]
    fn test_status_at_maps_timestep_to_week() {
        let truck = ScheduledConsumer::new("workday", None).expect("valid");
        // Wednesday 04:00 and 10:00.
        assert_eq!(truck.status_at(2 * 24 + 4), Status::Onsite);
        assert_eq!(truck.status_at(2 * 24 + 10), Status::Offsite);
        // Sunday 10:00, then the same hour one week later.
        assert_eq!(truck.status_at(6 * 24 + 10), Status::Onsite);
        assert_eq!(truck.status_at(13 * 24 + 10), Status::Onsite);
        assert_eq!(truck.status_at(7 * 24 + 10), Status::Offsite);
    }

    #[test]
    fn test_charging_is_independent_of_availability() {
        let mut truck = ScheduledConsumer::new("lunchbreak", None).expect("valid");
        assert_eq!(truck.discharge(500.0), 150.0);
        assert_eq!(truck.charge(500.0), 100.0);
        assert_eq!(truck.stored_kwh(), 350.0);
        assert_eq!(truck.max_chargeable(), 50.0);
        assert_eq!(truck.max_dischargeable(), 150.0);
    }

    #[test]
    fn test_display() {
        let truck = ScheduledConsumer::new("worknight", None).expect("valid");
        assert_eq!(truck.to_string(), "ScheduledConsumer(schedule='worknight')");
    }
}
