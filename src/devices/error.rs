//! Construction errors for storage devices.

use thiserror::Error;

/// Errors raised while building a storage device.
///
/// Every variant is raised at construction time. Once a device exists, its
/// operations are total and clip out-of-range requests instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeviceError {
    /// The schedule name does not match any known variant.
    #[error(
        "unknown schedule \"{0}\", available: {list}",
        list = crate::devices::Schedule::NAMES.join(", ")
    )]
    InvalidSchedule(String),

    /// A numeric parameter violates its constraint.
    #[error("invalid configuration: {field} {constraint}, got {value}")]
    InvalidConfiguration {
        field: &'static str,
        constraint: &'static str,
        value: f32,
    },
}

impl DeviceError {
    /// Returns `value` if it is finite and strictly positive.
    pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidConfiguration {
                field,
                constraint: "must be > 0",
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass() {
        assert_eq!(DeviceError::require_positive("capacity_kwh", 4.0), Ok(4.0));
    }

    #[test]
    fn zero_negative_and_nan_are_rejected() {
        for value in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = DeviceError::require_positive("capacity_kwh", value);
            assert!(
                matches!(
                    err,
                    Err(DeviceError::InvalidConfiguration {
                        field: "capacity_kwh",
                        ..
                    })
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_schedule_message_lists_variants() {
        let msg = DeviceError::InvalidSchedule("bogus".into()).to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("lunchbreak"));
    }
}
