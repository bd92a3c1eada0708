use std::fmt;

use super::amortisation::Loan;
use super::FinanceError;

/// Net present values of an investment and its loan.
///
/// The discount rate per period is the loan's periodic interest rate.
#[derive(Debug, Clone, PartialEq)]
pub struct NpvReport {
    /// NPV of the cash flow, if one was given.
    pub npv: Option<f64>,
    /// NPV of the cash flow after deflating it by inflation, if one was given.
    pub npv_inflation_adjusted: Option<f64>,
    /// NPV of the capital cost followed by every scheduled loan payment.
    pub npv_loan_payments: f64,
}

/// Discounts `values` by `rate` per period, the first value one period out.
pub fn present_value(values: impl IntoIterator<Item = f64>, rate: f64) -> f64 {
    values
        .into_iter()
        .zip(1..)
        .map(|(value, i)| value / (1.0 + rate).powi(i))
        .sum()
}

impl NpvReport {
    /// Computes the report for `loan`.
    ///
    /// # Arguments
    ///
    /// * `loan` - Loan that sets the discount rate and the payment stream
    /// * `inflation` - Annual inflation rate as a fraction
    /// * `cash_flow` - Optional per-period cash flow, first value one period out
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::InvalidParameter`] if the periodic inflation
    /// rate is not finite or `<= -1`.
    pub fn compute(
        loan: &Loan,
        inflation: f64,
        cash_flow: Option<&[f64]>,
    ) -> Result<Self, FinanceError> {
        let ppy = f64::from(loan.payments_per_year);
        let inflation_rate = inflation / ppy;
        if !(inflation_rate.is_finite() && inflation_rate > -1.0) {
            return Err(FinanceError::invalid(
                "inflation",
                "must give a periodic rate > -1",
                inflation,
            ));
        }
        let rate = loan.periodic_rate();

        let (npv, npv_inflation_adjusted) = match cash_flow {
            Some(flow) => {
                let real = flow
                    .iter()
                    .zip(1..)
                    .map(|(cf, i)| cf / (1.0 + inflation_rate).powi(i));
                (
                    Some(present_value(flow.iter().copied(), rate)),
                    Some(present_value(real, rate)),
                )
            }
            None => (None, None),
        };

        let payments = loan.amortisation_schedule().into_iter().map(|row| row.payment);
        let npv_loan_payments =
            present_value(std::iter::once(loan.capital_cost).chain(payments), rate);

        Ok(Self {
            npv,
            npv_inflation_adjusted,
            npv_loan_payments,
        })
    }
}

impl fmt::Display for NpvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- NPV Report ---")?;
        if let Some(npv) = self.npv {
            writeln!(f, "NPV:                     {npv:.2} €")?;
        }
        if let Some(npv) = self.npv_inflation_adjusted {
            writeln!(f, "Inflation adjusted NPV:  {npv:.2} €")?;
        }
        write!(f, "Loan amortisation NPV:   {:.2} €", self.npv_loan_payments)
    }
}
