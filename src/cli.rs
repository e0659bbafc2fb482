//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::scenario::{self, UnknownPreset};
use crate::sim::types::SimulationRequest;

/// First-order thermal response simulator.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (can be specified multiple times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the web pages and the calculation API
    #[cfg(feature = "api")]
    Serve(ServeArgs),
    /// Compute one step response and print it
    Simulate(SimulateArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address, overriding `server.bind`
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Start from a built-in preset (heating, cooling, rc_charge)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Initial value T0
    #[arg(long, allow_negative_numbers = true)]
    pub t0: Option<f64>,

    /// Steady-state gain K
    #[arg(long, allow_negative_numbers = true)]
    pub gain: Option<f64>,

    /// Time constant tau
    #[arg(long, allow_negative_numbers = true)]
    pub tau: Option<f64>,

    /// Step input magnitude u
    #[arg(long, allow_negative_numbers = true)]
    pub input: Option<f64>,

    /// End of the simulated window
    #[arg(long, allow_negative_numbers = true)]
    pub t_final: Option<f64>,

    /// Number of samples
    #[arg(long)]
    pub num_points: Option<usize>,

    /// Print the result as the API's JSON body
    #[arg(long)]
    pub json: bool,

    /// Also write `time,value` rows to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// The flags given do not describe a complete request.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    UnknownPreset(#[from] UnknownPreset),
    #[error("missing {}; pass them or use --preset", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
}

impl SimulateArgs {
    /// Builds the request: preset values first, explicit flags on top.
    ///
    /// # Errors
    ///
    /// Returns a `CliError` for an unknown preset, or when no preset is
    /// given and a required parameter flag is absent.
    pub fn to_request(&self) -> Result<SimulationRequest, CliError> {
        let mut request = match &self.preset {
            Some(name) => scenario::from_preset(name)?,
            None => {
                let missing: Vec<&'static str> = [
                    ("--t0", self.t0),
                    ("--gain", self.gain),
                    ("--tau", self.tau),
                    ("--input", self.input),
                ]
                .into_iter()
                .filter_map(|(flag, value)| value.is_none().then_some(flag))
                .collect();
                if !missing.is_empty() {
                    return Err(CliError::MissingParameters(missing));
                }
                SimulationRequest::new(0.0, 0.0, 0.0, 0.0)
            }
        };

        if let Some(t0) = self.t0 {
            request.t0 = t0;
        }
        if let Some(gain) = self.gain {
            request.gain = gain;
        }
        if let Some(tau) = self.tau {
            request.tau = tau;
        }
        if let Some(u) = self.input {
            request.u = u;
        }
        if let Some(t_final) = self.t_final {
            request.t_final = t_final;
        }
        if let Some(num_points) = self.num_points {
            request.num_points = num_points;
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate_args(args: &[&str]) -> SimulateArgs {
        let argv: Vec<&str> = ["thermal-response-sim", "simulate"]
            .into_iter()
            .chain(args.iter().copied())
            .collect();
        match Cli::try_parse_from(argv).expect("parse should succeed").command {
            Command::Simulate(args) => args,
            #[cfg(feature = "api")]
            Command::Serve(_) => panic!("expected simulate"),
        }
    }

    #[test]
    fn explicit_flags_build_request() {
        let args = simulate_args(&[
            "--t0", "-5", "--gain", "2", "--tau", "3", "--input", "4", "--num-points", "7",
        ]);
        let req = args.to_request().unwrap();
        assert_eq!(req.t0, -5.0);
        assert_eq!(req.gain, 2.0);
        assert_eq!(req.tau, 3.0);
        assert_eq!(req.u, 4.0);
        assert_eq!(req.t_final, 20.0);
        assert_eq!(req.num_points, 7);
    }

    #[test]
    fn preset_with_override() {
        let args = simulate_args(&["--preset", "heating", "--tau", "1"]);
        let req = args.to_request().unwrap();
        assert_eq!(req.t0, 20.0);
        assert_eq!(req.tau, 1.0);
    }

    #[test]
    fn missing_flags_are_listed() {
        let args = simulate_args(&["--t0", "1", "--tau", "2"]);
        let err = args.to_request().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing --gain, --input; pass them or use --preset"
        );
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let args = simulate_args(&["--preset", "boiling"]);
        assert!(matches!(
            args.to_request(),
            Err(CliError::UnknownPreset(_))
        ));
    }

    #[test]
    fn verbose_is_counted() {
        let cli = Cli::try_parse_from(["thermal-response-sim", "-vv", "simulate", "-p", "cooling"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[cfg(feature = "api")]
    #[test]
    fn serve_accepts_bind_override() {
        let cli = Cli::try_parse_from(["thermal-response-sim", "serve", "--bind", "0.0.0.0:9000"])
            .unwrap();
        match cli.command {
            Command::Serve(args) => assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000")),
            Command::Simulate(_) => panic!("expected serve"),
        }
    }
}
