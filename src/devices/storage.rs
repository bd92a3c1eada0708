use tracing::trace;

use crate::devices::error::DeviceError;
use crate::devices::types::{Capability, EnergyStorage};

/// A single energy storage cell with bounded capacity and per-step rate limits.
///
/// `StorageResource` moves energy in and out in discrete steps. Requests are
/// clipped to what the cell can accept or release in one step; the excess is
/// dropped and the clipped amount is returned so callers can detect unmet
/// demand by comparing it with their request.
///
/// `0 <= stored_kwh <= capacity_kwh` holds after every operation. Quantities
/// are `f32`, so a charge followed by a discharge of the same amount restores
/// the stored energy exactly only for values like whole kWh that add without
/// rounding; fractional amounts may drift by a few ulps.
///
/// # Examples
///
/// ```
/// use fleet_storage::devices::{Capability, StorageResource};
///
/// let cap = Capability::new(100.0, 20.0, 20.0).unwrap();
/// let mut battery = StorageResource::new(cap, 90.0).unwrap();
/// assert_eq!(battery.charge(50.0), 10.0);
/// assert_eq!(battery.stored_kwh(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StorageResource {
    capability: Capability,
    stored_kwh: f32,
}

impl StorageResource {
    /// Creates a storage cell holding `stored_kwh`.
    ///
    /// # Arguments
    ///
    /// * `capability` - Capacity and rate limits
    /// * `stored_kwh` - Initial stored energy, within `[0, capacity]`
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidConfiguration`] if a limit is not
    /// positive or the initial energy lies outside `[0, capacity]`.
    pub fn new(capability: Capability, stored_kwh: f32) -> Result<Self, DeviceError> {
        let capability = Capability::new(
            capability.capacity_kwh,
            capability.max_charge_kwh,
            capability.max_discharge_kwh,
        )?;
        if !(0.0..=capability.capacity_kwh).contains(&stored_kwh) {
            return Err(DeviceError::InvalidConfiguration {
                field: "stored_kwh",
                constraint: "must be within [0, capacity_kwh]",
                value: stored_kwh,
            });
        }

        Ok(Self {
            capability,
            stored_kwh,
        })
    }

    /// Creates a fully charged storage cell.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InvalidConfiguration`] if a limit is not positive.
    pub fn full(capability: Capability) -> Result<Self, DeviceError> {
        Self::new(capability, capability.capacity_kwh)
    }

    /// Capacity and rate limits of this cell.
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Maximum storable energy (kWh).
    pub fn capacity_kwh(&self) -> f32 {
        self.capability.capacity_kwh
    }

    /// Currently stored energy (kWh).
    pub fn stored_kwh(&self) -> f32 {
        self.stored_kwh
    }

    /// Energy the next charge step can accept: the charge limit or the
    /// remaining headroom, whichever is smaller.
    pub fn max_chargeable(&self) -> f32 {
        self.capability
            .max_charge_kwh
            .min(self.capability.capacity_kwh - self.stored_kwh)
            .max(0.0)
    }

    /// Energy the next discharge step can release: the discharge limit or
    /// the stored energy, whichever is smaller.
    pub fn max_dischargeable(&self) -> f32 {
        self.capability
            .max_discharge_kwh
            .min(self.stored_kwh)
            .max(0.0)
    }

    /// Stores up to `amount_kwh` and returns the energy actually stored.
    ///
    /// Non-positive (or NaN) requests store nothing and return `0.0`.
    pub fn charge(&mut self, amount_kwh: f32) -> f32 {
        if amount_kwh.is_nan() || amount_kwh <= 0.0 {
            return 0.0;
        }

        let moved = amount_kwh.min(self.max_chargeable());
        if moved < amount_kwh {
            trace!(requested = amount_kwh, moved, "charge clipped");
        }
        self.stored_kwh = (self.stored_kwh + moved).min(self.capability.capacity_kwh);
        moved
    }

    /// Releases up to `amount_kwh` and returns the energy actually released.
    ///
    /// Non-positive (or NaN) requests release nothing and return `0.0`.
    pub fn discharge(&mut self, amount_kwh: f32) -> f32 {
        if amount_kwh.is_nan() || amount_kwh <= 0.0 {
            return 0.0;
        }

        let moved = amount_kwh.min(self.max_dischargeable());
        if moved < amount_kwh {
            trace!(requested = amount_kwh, moved, "discharge clipped");
        }
        self.stored_kwh = (self.stored_kwh - moved).max(0.0);
        moved
    }

    /// Stored energy as a fraction of capacity (0.0 to 1.0).
    pub fn state_of_charge(&self) -> f32 {
        self.stored_kwh / self.capability.capacity_kwh
    }
}

impl EnergyStorage for StorageResource {
    fn resource(&self) -> &StorageResource {
        self
    }

    fn resource_mut(&mut self) -> &mut StorageResource {
        self
    }
}
