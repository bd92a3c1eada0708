//! Fleet report entry point — CLI wiring and config-driven model construction.

use std::path::Path;
use std::process;

use tracing::{error, info, warn};

use fleet_storage::availability::WeeklyAvailability;
use fleet_storage::cli::{self, CliOptions};
use fleet_storage::config::ScenarioConfig;
use fleet_storage::devices::EnergyStorage;
use fleet_storage::finance::NpvReport;
use fleet_storage::io::export::{export_amortisation_csv, export_availability_csv};

fn load_scenario(cli: &CliOptions) -> ScenarioConfig {
    // --scenario takes priority; the parser fills in the baseline preset otherwise
    let loaded = if let Some(path) = &cli.scenario {
        info!(path = %path.display(), "loading scenario file");
        ScenarioConfig::from_toml_file(path)
    } else {
        let name = cli.preset.as_deref().unwrap_or("baseline");
        info!(preset = name, "loading preset");
        ScenarioConfig::from_preset(name)
    };

    match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

fn export(what: &str, path: &Path, result: std::io::Result<()>) {
    if let Err(e) = result {
        error!(path = %path.display(), "failed to write {what} CSV: {e}");
        process::exit(1);
    }
    info!(path = %path.display(), "{what} written");
}

fn main() {
    fleet_storage::logging::init();

    let cli = match cli::parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            error!("{e}");
            cli::print_usage();
            process::exit(1);
        }
    };
    if cli.help {
        cli::print_usage();
        return;
    }

    let scenario = load_scenario(&cli);

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        process::exit(1);
    }

    // validate() has already checked every constructor input
    let (storage, truck, loan) = match (
        scenario.build_storage(),
        scenario.build_consumer(),
        scenario.build_loan(),
    ) {
        (Ok(s), Ok(t), Ok(l)) => (s, t, l),
        _ => {
            error!("scenario passed validation but could not be built");
            process::exit(1);
        }
    };

    println!("{truck}");
    println!(
        "Demand: {:.2} kWh/h, {:.1} kWh/week",
        truck.hourly_demand(),
        truck.weekly_demand()
    );

    let week = WeeklyAvailability::for_consumer(&truck);
    println!("\n{week}");

    let opportunity = week.charge_opportunity_kwh(truck.resource().capability().max_charge_kwh);
    println!("Charge opportunity: {opportunity:.1} kWh/week");
    if opportunity < truck.weekly_demand() {
        warn!(
            opportunity_kwh = opportunity,
            demand_kwh = truck.weekly_demand(),
            "schedule leaves too few charging hours for the weekly demand"
        );
    }

    println!(
        "\nDepot battery: {:.1}/{:.1} kWh (SoC={:.1}%), next step: +{:.1} / -{:.1} kWh",
        storage.stored_kwh(),
        storage.capacity_kwh(),
        storage.state_of_charge() * 100.0,
        storage.max_chargeable(),
        storage.max_dischargeable(),
    );

    let rows = loan.amortisation_schedule();
    println!(
        "\nLoan: {:.2} € over {} payments of {:.2} €",
        loan.principal_amount(),
        loan.periods(),
        loan.payment()
    );

    match NpvReport::compute(&loan, scenario.npv.inflation, scenario.npv.cash_flow.as_deref()) {
        Ok(report) => println!("\n{report}"),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }

    if let Some(path) = &cli.amortisation_out {
        export("amortisation schedule", path, export_amortisation_csv(&rows, path));
    }
    if let Some(path) = &cli.availability_out {
        export("availability grid", path, export_availability_csv(&week, path));
    }
}
