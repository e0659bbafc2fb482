//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use thermal_response_sim::sim::types::SimulationRequest;

/// Reference case: `T0=20, K=2, tau=5, u=10` over `[0, 20]` with 5 samples.
pub fn reference_request() -> SimulationRequest {
    SimulationRequest::new(20.0, 2.0, 5.0, 10.0).with_window(20.0, 5)
}

/// Wire body matching [`reference_request`].
pub fn reference_body() -> Value {
    json!({"T0": 20, "K": 2, "tau": 5, "u": 10, "t_final": 20, "num_points": 5})
}

/// A spread of valid requests covering heating, cooling and degenerate windows.
pub fn assorted_requests() -> Vec<SimulationRequest> {
    vec![
        reference_request(),
        SimulationRequest::new(90.0, 1.0, 8.0, 20.0).with_window(40.0, 100),
        SimulationRequest::new(0.0, 1.0, 1.0, 5.0).with_window(5.0, 2),
        SimulationRequest::new(-10.0, 0.5, 0.1, -4.0).with_window(3.0, 31),
        SimulationRequest::new(7.0, 3.0, 2.0, 1.0).with_window(0.0, 4),
        SimulationRequest::new(1.0, 1.0, 1.0, 1.0).with_window(10.0, 1),
    ]
}
