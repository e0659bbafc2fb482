//! Thermal response simulator entry point — CLI wiring.

use std::process;

use clap::Parser;
use tracing::{error, info};

use thermal_response_sim::cli::{Cli, Command, SimulateArgs};
use thermal_response_sim::io::export::export_csv;
use thermal_response_sim::logging;
use thermal_response_sim::sim::engine::Simulator;
use thermal_response_sim::sim::model::FirstOrderSystem;

fn run_simulate(args: &SimulateArgs) {
    let request = args.to_request().unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    let result = Simulator::default().run(&request).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    if args.json {
        match serde_json::to_string(&result) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                error!("failed to encode result: {e}");
                process::exit(1);
            }
        }
    } else {
        for (t, value) in result.samples() {
            println!("t={t:>10.4} value={value:>12.6}");
        }
        let system = FirstOrderSystem::new(request.gain, request.tau);
        println!();
        println!("steady state: {:.6}", system.steady_state(request.u));
        if let Some(last) = result.final_value() {
            println!("final value:  {last:.6}");
        }
    }

    if let Some(ref path) = args.csv {
        if let Err(e) = export_csv(&result, path) {
            error!("failed to write CSV: {e}");
            process::exit(1);
        }
        info!("response written to {}", path.display());
    }
}

#[cfg(feature = "api")]
fn run_serve(args: &thermal_response_sim::cli::ServeArgs) {
    use std::sync::Arc;

    use thermal_response_sim::api::{self, AppState};
    use thermal_response_sim::config::AppConfig;

    let mut config = match &args.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            AppConfig::from_toml_file(path).unwrap_or_else(|e| {
                error!("{e}");
                process::exit(1);
            })
        }
        None => {
            info!("using default configuration");
            AppConfig::default()
        }
    };

    if let Some(ref bind) = args.bind {
        config.server.bind = bind.clone();
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        process::exit(1);
    }

    let addr = config.bind_addr().unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });
    let state = Arc::new(AppState {
        simulator: Simulator::new(config.simulation.max_num_points),
    });

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        error!("failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(api::serve(state, addr)) {
        error!("{e}");
        process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        #[cfg(feature = "api")]
        Command::Serve(args) => run_serve(args),
        Command::Simulate(args) => run_simulate(args),
    }
}
