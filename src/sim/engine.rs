//! Step-response calculator.

use tracing::debug;

use super::error::ValidationErrors;
use super::grid::linspace;
use super::model::FirstOrderSystem;
use super::types::{DEFAULT_MAX_NUM_POINTS, SimulationRequest, SimulationResult};

/// Stateless calculator turning a [`SimulationRequest`] into sampled data.
///
/// Holds only the sample-count ceiling, so one instance can be shared
/// freely across threads and requests.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    max_num_points: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NUM_POINTS)
    }
}

impl Simulator {
    /// Creates a simulator that rejects requests above `max_num_points` samples.
    pub fn new(max_num_points: usize) -> Self {
        Self { max_num_points }
    }

    pub fn max_num_points(&self) -> usize {
        self.max_num_points
    }

    /// Validates `request` and evaluates the step response on a uniform grid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] before any computation if a field is out
    /// of domain. A validated request always succeeds.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, ValidationErrors> {
        request.validate_with_limit(self.max_num_points)?;

        let system = FirstOrderSystem::new(request.gain, request.tau);
        let labels = linspace(0.0, request.t_final, request.num_points);
        let data = system.response_series(request.t0, request.u, &labels);

        debug!(
            t0 = request.t0,
            gain = request.gain,
            tau = request.tau,
            u = request.u,
            t_final = request.t_final,
            num_points = request.num_points,
            "computed step response"
        );

        Ok(SimulationResult { labels, data })
    }
}

/// Runs `request` with the default sample-count ceiling.
///
/// # Errors
///
/// See [`Simulator::run`].
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, ValidationErrors> {
    Simulator::default().run(request)
}
