//! Simulation request and result types.
//!
//! Wire names follow the JSON contract of the calculation endpoint:
//! `T0`, `K`, `tau`, `u`, `t_final`, `num_points` in, `labels`/`data` out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ValidationErrors;

/// End of the simulated window when the caller omits `t_final`.
pub const DEFAULT_T_FINAL: f64 = 20.0;
/// Sample count when the caller omits `num_points`.
pub const DEFAULT_NUM_POINTS: usize = 100;
/// Upper bound on `num_points` unless configured otherwise.
pub const DEFAULT_MAX_NUM_POINTS: usize = 100_000;

/// Parameters of one step-response simulation.
///
/// Exists for a single request/response cycle. Build it with
/// [`SimulationRequest::new`] or [`SimulationRequest::from_json`], then
/// hand it to [`crate::sim::engine::Simulator::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// Initial value of the response at `t = 0` (`T0`).
    pub t0: f64,
    /// Steady-state gain (`K`).
    pub gain: f64,
    /// Time constant (`tau`, must be > 0).
    pub tau: f64,
    /// Step input magnitude (`u`).
    pub u: f64,
    /// End of the simulated window (must be >= 0).
    pub t_final: f64,
    /// Number of samples (must be >= 1).
    pub num_points: usize,
}

impl SimulationRequest {
    /// Creates a request with the default window (`t_final = 20`, 100 points).
    pub fn new(t0: f64, gain: f64, tau: f64, u: f64) -> Self {
        Self {
            t0,
            gain,
            tau,
            u,
            t_final: DEFAULT_T_FINAL,
            num_points: DEFAULT_NUM_POINTS,
        }
    }

    pub fn with_window(mut self, t_final: f64, num_points: usize) -> Self {
        self.t_final = t_final;
        self.num_points = num_points;
        self
    }

    /// Validates every field against [`DEFAULT_MAX_NUM_POINTS`].
    ///
    /// # Errors
    ///
    /// Returns every offending field, in wire order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with_limit(DEFAULT_MAX_NUM_POINTS)
    }

    /// Validates every field, capping `num_points` at `max_num_points`.
    ///
    /// # Errors
    ///
    /// Returns every offending field, in wire order.
    pub fn validate_with_limit(&self, max_num_points: usize) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_finite("T0", self.t0, &mut errors);
        check_finite("K", self.gain, &mut errors);
        check_tau(self.tau, &mut errors);
        if check_finite("u", self.u, &mut errors) && self.gain.is_finite() {
            check_steady_state(self.gain, self.u, &mut errors);
        }
        check_t_final(self.t_final, &mut errors);
        check_num_points(self.num_points, max_num_points, &mut errors);
        errors.into_result()
    }

    /// Parses and validates a decoded JSON object.
    ///
    /// Missing or non-numeric required fields, present-but-invalid optional
    /// fields and out-of-domain values are all collected before returning,
    /// so one response can name every bad field. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a non-empty [`ValidationErrors`] if any field is rejected.
    pub fn from_json(
        obj: &Map<String, Value>,
        max_num_points: usize,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let t0 = required_number(obj, "T0", &mut errors)
            .filter(|&v| check_finite("T0", v, &mut errors));
        let gain = required_number(obj, "K", &mut errors)
            .filter(|&v| check_finite("K", v, &mut errors));
        let tau = required_number(obj, "tau", &mut errors).filter(|&v| check_tau(v, &mut errors));
        let u = required_number(obj, "u", &mut errors)
            .filter(|&v| check_finite("u", v, &mut errors))
            .filter(|&v| gain.is_none_or(|k| check_steady_state(k, v, &mut errors)));
        let t_final = optional_number(obj, "t_final", DEFAULT_T_FINAL, &mut errors)
            .filter(|&v| check_t_final(v, &mut errors));
        let num_points = optional_count(obj, "num_points", DEFAULT_NUM_POINTS, &mut errors)
            .filter(|&n| check_num_points(n, max_num_points, &mut errors));

        match (t0, gain, tau, u, t_final, num_points) {
            (Some(t0), Some(gain), Some(tau), Some(u), Some(t_final), Some(num_points))
                if errors.is_empty() =>
            {
                Ok(Self {
                    t0,
                    gain,
                    tau,
                    u,
                    t_final,
                    num_points,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Sampled step response: `data[i]` is the response at time `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Sample times, uniformly spaced from 0 to `t_final`.
    pub labels: Vec<f64>,
    /// Response value at each sample time.
    pub data: Vec<f64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(time, value)` pairs in sample order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.labels.iter().copied().zip(self.data.iter().copied())
    }

    /// Response value at the end of the window.
    pub fn final_value(&self) -> Option<f64> {
        self.data.last().copied()
    }
}

fn required_number(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match obj.get(field) {
        Some(value) => as_number(value, field, errors),
        None => {
            errors.push(field, "is required");
            None
        }
    }
}

fn optional_number(
    obj: &Map<String, Value>,
    field: &str,
    default: f64,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    match obj.get(field) {
        Some(value) => as_number(value, field, errors),
        None => Some(default),
    }
}

fn optional_count(
    obj: &Map<String, Value>,
    field: &str,
    default: usize,
    errors: &mut ValidationErrors,
) -> Option<usize> {
    let Some(value) = obj.get(field) else {
        return Some(default);
    };

    if let Some(n) = value.as_u64() {
        return match usize::try_from(n) {
            Ok(n) => Some(n),
            Err(_) => {
                errors.push(field, "is too large");
                None
            }
        };
    }

    // Negative integers are integers, just out of range.
    if value.as_i64().is_some() {
        errors.push(field, "must be >= 1");
    } else {
        errors.push(field, "must be an integer");
    }
    None
}

fn as_number(value: &Value, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    let number = value.as_f64();
    if number.is_none() {
        errors.push(field, "must be a number");
    }
    number
}

fn check_finite(field: &str, value: f64, errors: &mut ValidationErrors) -> bool {
    if value.is_finite() {
        true
    } else {
        errors.push(field, "must be a finite number");
        false
    }
}

/// `K*u` is the steady state; reported against `u` so errors stay in wire order.
fn check_steady_state(gain: f64, u: f64, errors: &mut ValidationErrors) -> bool {
    if (gain * u).is_finite() {
        true
    } else {
        errors.push("u", "K*u must be a finite number");
        false
    }
}

fn check_tau(tau: f64, errors: &mut ValidationErrors) -> bool {
    if !check_finite("tau", tau, errors) {
        return false;
    }
    if tau > 0.0 {
        true
    } else {
        errors.push("tau", "must be > 0");
        false
    }
}

fn check_t_final(t_final: f64, errors: &mut ValidationErrors) -> bool {
    if !check_finite("t_final", t_final, errors) {
        return false;
    }
    if t_final >= 0.0 {
        true
    } else {
        errors.push("t_final", "must be >= 0");
        false
    }
}

fn check_num_points(num_points: usize, max: usize, errors: &mut ValidationErrors) -> bool {
    if num_points == 0 {
        errors.push("num_points", "must be >= 1");
        false
    } else if num_points > max {
        errors.push("num_points", format!("must be <= {max}"));
        false
    } else {
        true
    }
}
