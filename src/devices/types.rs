//! Common types and traits for energy storage devices.

use super::error::DeviceError;
use super::storage::StorageResource;

/// Fixed physical limits of a storage device.
///
/// Each device variant is built from its own record rather than from shared
/// defaults, so two devices never alias each other's limits.
///
/// # Fields
/// * `capacity_kwh` - Maximum storable energy (kWh)
/// * `max_charge_kwh` - Maximum energy moved into storage in one step (kWh)
/// * `max_discharge_kwh` - Maximum energy moved out of storage in one step (kWh)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capability {
    pub capacity_kwh: f32,
    pub max_charge_kwh: f32,
    pub max_discharge_kwh: f32,
}

impl Capability {
    /// Stationary depot battery.
    pub const STATIONARY: Self = Self {
        capacity_kwh: 1000.0,
        max_charge_kwh: 200.0,
        max_discharge_kwh: 200.0,
    };

    /// Battery pack of an electric truck.
    pub const ELECTRIC_TRUCK: Self = Self {
        capacity_kwh: 400.0,
        max_charge_kwh: 100.0,
        max_discharge_kwh: 150.0,
    };

    /// Creates a validated capability record.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidConfiguration`] if any limit is zero,
    /// negative or not finite.
    pub fn new(
        capacity_kwh: f32,
        max_charge_kwh: f32,
        max_discharge_kwh: f32,
    ) -> Result<Self, DeviceError> {
        Ok(Self {
            capacity_kwh: DeviceError::require_positive("capacity_kwh", capacity_kwh)?,
            max_charge_kwh: DeviceError::require_positive("max_charge_kwh", max_charge_kwh)?,
            max_discharge_kwh: DeviceError::require_positive(
                "max_discharge_kwh",
                max_discharge_kwh,
            )?,
        })
    }
}

/// Trait for any device that stores energy behind a [`StorageResource`].
///
/// Implementors only expose their inner resource; charging, discharging and
/// the derived ratios are shared through the provided methods so every device
/// obeys the same clipping rules.
pub trait EnergyStorage {
    /// Shared access to the underlying storage cell.
    fn resource(&self) -> &StorageResource;

    /// Exclusive access to the underlying storage cell.
    fn resource_mut(&mut self) -> &mut StorageResource;

    /// Currently stored energy (kWh).
    fn stored_kwh(&self) -> f32 {
        self.resource().stored_kwh()
    }

    /// Maximum energy accepted by the next [`charge`](Self::charge) (kWh).
    fn max_chargeable(&self) -> f32 {
        self.resource().max_chargeable()
    }

    /// Maximum energy released by the next [`discharge`](Self::discharge) (kWh).
    fn max_dischargeable(&self) -> f32 {
        self.resource().max_dischargeable()
    }

    /// Stores up to `amount_kwh` and returns the energy actually stored.
    fn charge(&mut self, amount_kwh: f32) -> f32 {
        self.resource_mut().charge(amount_kwh)
    }

    /// Releases up to `amount_kwh` and returns the energy actually released.
    fn discharge(&mut self, amount_kwh: f32) -> f32 {
        self.resource_mut().discharge(amount_kwh)
    }

    /// Stored energy as a fraction of capacity (0.0 to 1.0).
    fn state_of_charge(&self) -> f32 {
        self.resource().state_of_charge()
    }
}
