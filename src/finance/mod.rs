//! Loan amortisation and present-value arithmetic for fleet investments.

use thiserror::Error;

pub mod amortisation;
/// Net present value reporting.
pub mod npv;

pub use amortisation::{AmortisationRow, Loan};
pub use npv::{NpvReport, present_value};

/// Invalid financial input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("invalid loan parameter: {field} {constraint}, got {value}")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

impl FinanceError {
    pub(crate) fn invalid(field: &'static str, constraint: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            field,
            constraint,
            value,
        }
    }
}
