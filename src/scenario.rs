//! Named parameter presets for one-shot runs.

use thiserror::Error;

use crate::sim::types::SimulationRequest;

/// Available preset names.
pub const PRESETS: &[&str] = &["heating", "cooling", "rc_charge"];

/// Unknown preset name.
#[derive(Debug, Error)]
#[error("unknown preset \"{name}\", available: {}", PRESETS.join(", "))]
pub struct UnknownPreset {
    pub name: String,
}

/// Gain 2 on a step of 10, starting at 20 with `tau = 5`.
pub fn heating() -> SimulationRequest {
    SimulationRequest::new(20.0, 2.0, 5.0, 10.0)
}

/// Hot body relaxing toward a 20-degree ambient.
pub fn cooling() -> SimulationRequest {
    SimulationRequest::new(90.0, 1.0, 8.0, 20.0).with_window(40.0, 100)
}

/// Capacitor charging to 5 V through a 1 s RC constant.
pub fn rc_charge() -> SimulationRequest {
    SimulationRequest::new(0.0, 1.0, 1.0, 5.0).with_window(5.0, 100)
}

/// Loads a request from a named preset.
///
/// # Errors
///
/// Returns [`UnknownPreset`] if `name` is not one of [`PRESETS`].
pub fn from_preset(name: &str) -> Result<SimulationRequest, UnknownPreset> {
    match name {
        "heating" => Ok(heating()),
        "cooling" => Ok(cooling()),
        "rc_charge" => Ok(rc_charge()),
        _ => Err(UnknownPreset {
            name: name.to_string(),
        }),
    }
}
