//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::devices::consumer::{DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_CONSUMPTION_KWH_PER_KM};
use crate::devices::{Capability, DeviceError, Schedule, ScheduledConsumer, StorageResource};
use crate::finance::{FinanceError, Loan};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Depot battery parameters.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Fleet vehicle parameters.
    #[serde(default)]
    pub consumer: ConsumerConfig,
    /// Financing of the fleet investment.
    #[serde(default)]
    pub loan: LoanConfig,
    /// Present-value parameters.
    #[serde(default)]
    pub npv: NpvConfig,
}

/// Depot battery parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Total energy capacity (kWh).
    pub capacity_kwh: f32,
    /// Maximum energy charged per step (kWh).
    pub max_charge_kwh: f32,
    /// Maximum energy discharged per step (kWh).
    pub max_discharge_kwh: f32,
    /// Initial stored energy (kWh); full when omitted.
    pub initial_kwh: Option<f32>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let cap = Capability::STATIONARY;
        Self {
            capacity_kwh: cap.capacity_kwh,
            max_charge_kwh: cap.max_charge_kwh,
            max_discharge_kwh: cap.max_discharge_kwh,
            initial_kwh: None,
        }
    }
}

/// Fleet vehicle parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumerConfig {
    /// Schedule name, one of [`Schedule::NAMES`].
    pub schedule: String,
    /// Average speed override (km/h).
    pub average_speed_kmh: Option<f32>,
    /// Energy consumption (kWh/km).
    pub consumption_kwh_per_km: f32,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            schedule: "workday".to_string(),
            average_speed_kmh: None,
            consumption_kwh_per_km: DEFAULT_CONSUMPTION_KWH_PER_KM,
        }
    }
}

/// Financing of the fleet investment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoanConfig {
    /// Total investment (€).
    pub capital_cost: f64,
    /// Share paid from own funds (percent).
    pub own_capital_pct: f64,
    /// Nominal annual interest rate (fraction).
    pub annual_interest_rate: f64,
    /// Payments per year.
    pub payments_per_year: u32,
    /// Loan term (years).
    pub years: u32,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            capital_cost: 120_000.0,
            own_capital_pct: 20.0,
            annual_interest_rate: 0.05,
            payments_per_year: 12,
            years: 8,
        }
    }
}

/// Present-value parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NpvConfig {
    /// Annual inflation rate (fraction).
    pub inflation: f64,
    /// Per-period cash flow of the investment (€), first value one period out.
    pub cash_flow: Option<Vec<f64>>,
}

impl Default for NpvConfig {
    fn default() -> Self {
        Self {
            inflation: 0.02,
            cash_flow: None,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"consumer.schedule"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn from_device(section: &str, err: &DeviceError) -> Self {
        match err {
            DeviceError::InvalidSchedule(_) => {
                Self::new(format!("{section}.schedule"), err.to_string())
            }
            DeviceError::InvalidConfiguration { field, .. } => {
                Self::new(format!("{section}.{field}"), err.to_string())
            }
        }
    }

    fn from_finance(err: &FinanceError) -> Self {
        match err {
            FinanceError::InvalidParameter { field, .. } => {
                Self::new(format!("loan.{field}"), err.to_string())
            }
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a workday truck and a full depot battery.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the night-shift preset: trucks drive at night and charge by day.
    pub fn night_shift() -> Self {
        Self {
            consumer: ConsumerConfig {
                schedule: "worknight".to_string(),
                average_speed_kmh: Some(20.0),
                ..ConsumerConfig::default()
            },
            npv: NpvConfig {
                cash_flow: Some(vec![2_000.0; 96]),
                ..NpvConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the evening-depot preset: short evening stops, a small
    /// half-charged depot battery and an interest-free loan.
    pub fn evening_depot() -> Self {
        Self {
            storage: StorageConfig {
                capacity_kwh: 250.0,
                max_charge_kwh: 50.0,
                max_discharge_kwh: 50.0,
                initial_kwh: Some(125.0),
            },
            consumer: ConsumerConfig {
                schedule: "evening".to_string(),
                ..ConsumerConfig::default()
            },
            loan: LoanConfig {
                capital_cost: 80_000.0,
                own_capital_pct: 50.0,
                annual_interest_rate: 0.0,
                years: 5,
                ..LoanConfig::default()
            },
            npv: NpvConfig {
                inflation: 0.03,
                cash_flow: None,
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "night_shift", "evening_depot"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "night_shift" => Ok(Self::night_shift()),
            "evening_depot" => Ok(Self::evening_depot()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.storage;
        for (field, value) in [
            ("capacity_kwh", s.capacity_kwh),
            ("max_charge_kwh", s.max_charge_kwh),
            ("max_discharge_kwh", s.max_discharge_kwh),
        ] {
            if let Err(e) = DeviceError::require_positive(field, value) {
                errors.push(ConfigError::from_device("storage", &e));
            }
        }
        if let Some(initial) = s.initial_kwh {
            if !(0.0..=s.capacity_kwh).contains(&initial) {
                errors.push(ConfigError::new(
                    "storage.initial_kwh",
                    format!("must be within [0, capacity_kwh], got {initial}"),
                ));
            }
        }

        let c = &self.consumer;
        if let Err(e) = c.schedule.parse::<Schedule>() {
            errors.push(ConfigError::from_device("consumer", &e));
        }
        if let Some(Err(e)) = c
            .average_speed_kmh
            .map(|speed| DeviceError::require_positive("average_speed_kmh", speed))
        {
            errors.push(ConfigError::from_device("consumer", &e));
        }
        if let Err(e) =
            DeviceError::require_positive("consumption_kwh_per_km", c.consumption_kwh_per_km)
        {
            errors.push(ConfigError::from_device("consumer", &e));
        }

        if let Err(e) = self.build_loan() {
            errors.push(ConfigError::from_finance(&e));
        }

        let inflation_rate = self.npv.inflation / f64::from(self.loan.payments_per_year.max(1));
        if !(inflation_rate.is_finite() && inflation_rate > -1.0) {
            errors.push(ConfigError::new(
                "npv.inflation",
                "must give a periodic rate > -1",
            ));
        }

        errors
    }

    /// Builds the depot battery.
    ///
    /// # Errors
    ///
    /// Returns a `DeviceError` if a limit or the initial energy is invalid.
    pub fn build_storage(&self) -> Result<StorageResource, DeviceError> {
        let s = &self.storage;
        let capability = Capability::new(s.capacity_kwh, s.max_charge_kwh, s.max_discharge_kwh)?;
        StorageResource::new(capability, s.initial_kwh.unwrap_or(capability.capacity_kwh))
    }

    /// Builds the fleet vehicle.
    ///
    /// # Errors
    ///
    /// Returns a `DeviceError` for an unknown schedule or a non-positive rate.
    pub fn build_consumer(&self) -> Result<ScheduledConsumer, DeviceError> {
        let c = &self.consumer;
        ScheduledConsumer::from_parts(
            c.schedule.parse()?,
            Capability::ELECTRIC_TRUCK,
            c.average_speed_kmh.unwrap_or(DEFAULT_AVERAGE_SPEED_KMH),
            c.consumption_kwh_per_km,
        )
    }

    /// Builds the loan.
    ///
    /// # Errors
    ///
    /// Returns a `FinanceError` if a loan parameter is invalid.
    pub fn build_loan(&self) -> Result<Loan, FinanceError> {
        let l = &self.loan;
        Loan::new(
            l.capital_cost,
            l.own_capital_pct,
            l.annual_interest_rate,
            l.payments_per_year,
            l.years,
        )
    }
}
