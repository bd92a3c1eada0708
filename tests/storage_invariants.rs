//! Randomised checks of the storage clipping invariants.

mod common;

use fleet_storage::devices::{EnergyStorage, ScheduledConsumer};
use rand::Rng;

#[test]
fn stored_energy_stays_within_bounds() {
    let mut rng = common::rng();
    for _ in 0..common::CASES / 10 {
        let mut cell = common::random_cell(&mut rng);
        let capacity = cell.capacity_kwh();
        for _ in 0..10 {
            let amount = common::random_amount(&mut rng);
            let before = cell.stored_kwh();
            let charged = cell.charge(amount);
            assert!(charged >= 0.0 && charged <= amount.max(0.0));
            assert!(cell.stored_kwh() <= capacity);
            assert_eq!(cell.stored_kwh(), before + charged);

            let amount = common::random_amount(&mut rng);
            let before = cell.stored_kwh();
            let discharged = cell.discharge(amount);
            assert!(discharged >= 0.0 && discharged <= amount.max(0.0));
            assert!(cell.stored_kwh() >= 0.0);
            assert_eq!(cell.stored_kwh(), before - discharged);
        }
    }
}

#[test]
fn limits_never_exceed_headroom_or_content() {
    let mut rng = common::rng();
    for _ in 0..common::CASES {
        let cell = common::random_cell(&mut rng);
        assert!(cell.max_chargeable() >= 0.0);
        assert!(cell.max_dischargeable() >= 0.0);
        assert!(cell.max_chargeable() + cell.stored_kwh() <= cell.capacity_kwh());
        assert!(cell.max_dischargeable() <= cell.stored_kwh());
        assert!((0.0..=1.0).contains(&cell.state_of_charge()));
    }
}

#[test]
fn charge_then_discharge_restores_stored_energy() {
    let mut rng = common::rng();
    for _ in 0..common::CASES {
        let mut cell = common::random_cell(&mut rng);
        let before = cell.stored_kwh();
        let moved = cell.charge(common::random_amount(&mut rng));
        if moved <= cell.capability().max_discharge_kwh {
            assert_eq!(cell.discharge(moved), moved);
            assert_eq!(cell.stored_kwh(), before);
        }
    }
}

#[test]
fn discharge_then_charge_restores_stored_energy() {
    let mut rng = common::rng();
    for _ in 0..common::CASES {
        let mut cell = common::random_cell(&mut rng);
        let before = cell.stored_kwh();
        let moved = cell.discharge(common::random_amount(&mut rng));
        if moved <= cell.capability().max_charge_kwh {
            assert_eq!(cell.charge(moved), moved);
            assert_eq!(cell.stored_kwh(), before);
        }
    }
}

#[test]
fn fractional_round_trip_stays_close() {
    let mut rng = common::rng();
    for _ in 0..common::CASES {
        let mut cell = common::small_cell(rng.random_range(0.0..=100.0));
        let before = cell.stored_kwh();
        let moved = cell.charge(rng.random_range(0.0..20.0));
        assert_eq!(cell.discharge(moved), moved);
        assert!((cell.stored_kwh() - before).abs() <= 1e-4);
        assert!((0.0..=cell.capacity_kwh()).contains(&cell.stored_kwh()));
    }
}

#[test]
fn charge_clipped_to_capacity() {
    let mut cell = common::small_cell(90.0);
    assert_eq!(cell.charge(50.0), 10.0);
    assert_eq!(cell.stored_kwh(), 100.0);
}

#[test]
fn charge_when_full_returns_zero() {
    let mut cell = common::small_cell(100.0);
    assert_eq!(cell.charge(5.0), 0.0);
    assert_eq!(cell.stored_kwh(), 100.0);
}

#[test]
fn truck_shares_storage_behaviour_through_trait() {
    fn drain<S: EnergyStorage>(device: &mut S) -> f32 {
        let mut total = 0.0;
        loop {
            let moved = device.discharge(f32::MAX);
            if moved == 0.0 {
                return total;
            }
            total += moved;
        }
    }

    let mut truck: ScheduledConsumer = common::workday_truck();
    assert_eq!(drain(&mut truck), 400.0);
    assert_eq!(truck.state_of_charge(), 0.0);

    let mut cell = common::small_cell(55.0);
    assert_eq!(drain(&mut cell), 55.0);
}
