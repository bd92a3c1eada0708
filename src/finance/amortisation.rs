use super::FinanceError;

/// One row of an amortisation schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortisationRow {
    /// Payment number, starting at 1.
    pub period: u32,
    /// Share of the payment that repays the loan.
    pub principal: f64,
    /// Share of the payment that pays interest.
    pub interest: f64,
    /// Total payment (`principal + interest`).
    pub payment: f64,
    /// Outstanding balance after this payment.
    pub balance: f64,
}

/// Upper bound on the number of payments in one loan.
pub const MAX_PERIODS: u32 = 12_000;

/// Fixed-rate loan financing part of a capital cost.
///
/// Payments are level and fall at the end of each period. All amounts are
/// positive magnitudes.
///
/// # Examples
///
/// ```
/// use fleet_storage::finance::Loan;
///
/// let loan = Loan::new(1200.0, 0.0, 0.0, 12, 1).unwrap();
/// assert_eq!(loan.payment(), 100.0);
/// assert_eq!(loan.amortisation_schedule().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    /// Total investment before own capital.
    pub capital_cost: f64,
    /// Share of the capital cost paid from own funds (percent, 0 to 100).
    pub own_capital_pct: f64,
    /// Nominal annual interest rate as a fraction (0.05 = 5 %).
    pub annual_interest_rate: f64,
    /// Number of payments per year.
    pub payments_per_year: u32,
    /// Loan term in years.
    pub years: u32,
}

impl Loan {
    /// Creates a validated loan.
    ///
    /// # Errors
    ///
    /// Returns [`FinanceError::InvalidParameter`] for a negative capital cost,
    /// an own-capital share outside `[0, 100]`, a periodic rate `<= -1`, a
    /// zero payment count or term, or more than [`MAX_PERIODS`] payments.
    pub fn new(
        capital_cost: f64,
        own_capital_pct: f64,
        annual_interest_rate: f64,
        payments_per_year: u32,
        years: u32,
    ) -> Result<Self, FinanceError> {
        if !(capital_cost.is_finite() && capital_cost >= 0.0) {
            return Err(FinanceError::invalid("capital_cost", "must be >= 0", capital_cost));
        }
        if !(0.0..=100.0).contains(&own_capital_pct) {
            return Err(FinanceError::invalid(
                "own_capital_pct",
                "must be within [0, 100]",
                own_capital_pct,
            ));
        }
        if payments_per_year == 0 {
            return Err(FinanceError::invalid("payments_per_year", "must be > 0", 0.0));
        }
        if years == 0 {
            return Err(FinanceError::invalid("years", "must be > 0", 0.0));
        }
        match payments_per_year.checked_mul(years) {
            Some(n) if n <= MAX_PERIODS => {}
            _ => {
                return Err(FinanceError::invalid(
                    "years",
                    "must keep payments_per_year * years <= 12000",
                    f64::from(years),
                ));
            }
        }
        let periodic = annual_interest_rate / f64::from(payments_per_year);
        if !(periodic.is_finite() && periodic > -1.0) {
            return Err(FinanceError::invalid(
                "annual_interest_rate",
                "must give a periodic rate > -1",
                annual_interest_rate,
            ));
        }

        Ok(Self {
            capital_cost,
            own_capital_pct,
            annual_interest_rate,
            payments_per_year,
            years,
        })
    }

    /// Borrowed amount: the capital cost minus own capital.
    pub fn principal_amount(&self) -> f64 {
        self.capital_cost * (1.0 - self.own_capital_pct / 100.0)
    }

    /// Interest rate per payment period.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_interest_rate / f64::from(self.payments_per_year)
    }

    /// Total number of payments.
    pub fn periods(&self) -> u32 {
        self.payments_per_year.saturating_mul(self.years)
    }

    /// Level payment per period (PMT).
    pub fn payment(&self) -> f64 {
        let loan = self.principal_amount();
        let rate = self.periodic_rate();
        let n = f64::from(self.periods());
        if rate == 0.0 {
            loan / n
        } else {
            loan * rate / (1.0 - (1.0 + rate).powf(-n))
        }
    }

    /// Balance outstanding after `paid` payments.
    fn balance_after(&self, paid: u32) -> f64 {
        let loan = self.principal_amount();
        let rate = self.periodic_rate();
        let k = f64::from(paid);
        if rate == 0.0 {
            loan - self.payment() * k
        } else {
            let growth = (1.0 + rate).powf(k);
            loan * growth - self.payment() * (growth - 1.0) / rate
        }
    }

    /// Interest part of payment `period` (IPMT, 1-based).
    pub fn interest(&self, period: u32) -> f64 {
        self.periodic_rate() * self.balance_after(period.saturating_sub(1))
    }

    /// Principal part of payment `period` (PPMT, 1-based).
    pub fn principal(&self, period: u32) -> f64 {
        self.payment() - self.interest(period)
    }

    /// Full payment table, one row per period.
    pub fn amortisation_schedule(&self) -> Vec<AmortisationRow> {
        let payment = self.payment();
        let mut balance = self.principal_amount();
        let mut rows = Vec::with_capacity(self.periods() as usize);

        for period in 1..=self.periods() {
            let interest = self.interest(period);
            let principal = payment - interest;
            // Clamp rounding residue on the final payment.
            balance = (balance - principal).max(0.0);
            rows.push(AmortisationRow {
                period,
                principal,
                interest,
                payment,
                balance,
            });
        }

        rows
    }
}
