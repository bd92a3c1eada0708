//! Availability and demand behaviour of scheduled fleet vehicles.

mod common;

use fleet_storage::availability::WeeklyAvailability;
use fleet_storage::devices::{
    Capability, DeviceError, EnergyStorage, Schedule, ScheduledConsumer, Status,
};

#[test]
fn workday_truck_availability() {
    let truck = common::workday_truck();
    assert_eq!(truck.status(4, 2), Status::Onsite);
    assert_eq!(truck.status(10, 2), Status::Offsite);
    assert_eq!(truck.status(10, 6), Status::Onsite);
    assert!(truck.chargeable(4, 2));
    assert!(!truck.chargeable(10, 2));
}

#[test]
fn lunchbreak_truck_availability() {
    let truck = ScheduledConsumer::new("lunchbreak", None).expect("valid truck");
    assert_eq!(truck.status(8, 1), Status::Offsite);
    assert_eq!(truck.status(3, 1), Status::Onsite);
    assert_eq!(truck.status(13, 1), Status::Onsite);
}

#[test]
fn unknown_schedule_fails_at_construction() {
    let err = ScheduledConsumer::new("bogus", None);
    assert!(matches!(err, Err(DeviceError::InvalidSchedule(name)) if name == "bogus"));
}

#[test]
fn demand_metrics() {
    let truck = ScheduledConsumer::from_parts(
        Schedule::Evening,
        Capability::ELECTRIC_TRUCK,
        15.0,
        0.85,
    )
    .expect("valid truck");
    assert!((truck.hourly_demand() - 12.75).abs() < 1e-4);
    assert!((truck.weekly_demand() - 765.0).abs() < 1e-2);
}

#[test]
fn status_is_pure() {
    for schedule in Schedule::ALL {
        let truck = ScheduledConsumer::from_parts(
            schedule,
            Capability::ELECTRIC_TRUCK,
            15.0,
            0.85,
        )
        .expect("valid truck");
        for day in 0..7 {
            for hour in 0..24 {
                assert_eq!(truck.status(hour, day), truck.status(hour, day));
                assert_eq!(truck.status(hour, day), schedule.status(hour, day));
            }
        }
    }
}

#[test]
fn weekday_gated_schedules_are_onsite_on_weekends() {
    for schedule in [Schedule::Workday, Schedule::Worknight, Schedule::Evening] {
        let week = WeeklyAvailability::for_schedule(schedule);
        assert_eq!(week.chargeable_hours_on(5), 24, "{schedule}");
        assert_eq!(week.chargeable_hours_on(6), 24, "{schedule}");
    }
}

#[test]
fn availability_does_not_depend_on_charge() {
    let mut truck = common::workday_truck();
    let full = WeeklyAvailability::for_consumer(&truck);
    while truck.discharge(1_000.0) > 0.0 {}
    assert_eq!(truck.state_of_charge(), 0.0);
    assert_eq!(WeeklyAvailability::for_consumer(&truck), full);
    assert!(truck.chargeable(5, 0));
}

#[test]
fn hourly_driver_keeps_truck_within_bounds() {
    fleet_storage::logging::init_test();

    // One week of hourly steps: drive when offsite, charge when onsite.
    let mut truck = common::workday_truck();
    let demand = truck.hourly_demand();
    for t in 0..7 * 24 {
        match truck.status_at(t) {
            Status::Onsite => {
                truck.charge(truck.max_chargeable());
            }
            Status::Offsite => {
                truck.discharge(demand);
            }
        }
        assert!((0.0..=400.0).contains(&truck.stored_kwh()));
    }
    // The weekend at the end refills the pack.
    assert_eq!(truck.state_of_charge(), 1.0);
}
