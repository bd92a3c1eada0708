//! Energy storage devices and fleet vehicle availability.

/// Fleet vehicle with a weekly charging schedule.
pub mod consumer;
pub mod error;
/// Weekly schedule variants and availability status.
pub mod schedule;
/// Rate- and capacity-limited storage cell.
pub mod storage;
pub mod types;

// Re-export the main types for convenience
pub use consumer::ScheduledConsumer;
pub use error::DeviceError;
pub use schedule::{Schedule, Status};
pub use storage::StorageResource;
pub use types::{Capability, EnergyStorage};
