//! First-order linear system under a step input.

/// A first-order lag `tau * dT/dt + T = K * u`.
///
/// The analytic response to a step of magnitude `u` applied at `t = 0`
/// with `T(0) = T0` is an exponential transition from `T0` toward the
/// steady state `K * u`.
///
/// # Examples
///
/// ```
/// use thermal_response_sim::sim::model::FirstOrderSystem;
///
/// let sys = FirstOrderSystem::new(2.0, 5.0);
/// assert_eq!(sys.response(20.0, 10.0, 0.0), 20.0);
/// assert_eq!(sys.steady_state(10.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderSystem {
    /// Steady-state gain `K`.
    pub gain: f64,
    /// Time constant `tau` (must be > 0 for a decaying response).
    pub tau: f64,
}

impl FirstOrderSystem {
    pub fn new(gain: f64, tau: f64) -> Self {
        Self { gain, tau }
    }

    /// Value the response settles to for a step of magnitude `u`.
    pub fn steady_state(&self, u: f64) -> f64 {
        self.gain * u
    }

    /// Response at time `t` starting from `t0` under step input `u`.
    ///
    /// `K*u*(1 - exp(-t/tau)) + T0*exp(-t/tau)`
    pub fn response(&self, t0: f64, u: f64, t: f64) -> f64 {
        let decay = (-t / self.tau).exp();
        self.steady_state(u) * (1.0 - decay) + t0 * decay
    }

    /// Evaluates [`Self::response`] at every time in `times`.
    pub fn response_series(&self, t0: f64, u: f64, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.response(t0, u, t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_starts_at_initial_value() {
        let sys = FirstOrderSystem::new(3.0, 0.5);
        assert_eq!(sys.response(-4.0, 7.0, 0.0), -4.0);
    }

    #[test]
    fn test_one_time_constant_covers_63_percent() {
        let sys = FirstOrderSystem::new(1.0, 2.0);
        let t0 = 0.0;
        let u = 10.0;
        let progress = sys.response(t0, u, 2.0) / sys.steady_state(u);
        assert_relative_eq!(progress, 1.0 - (-1.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_converges_to_steady_state() {
        let sys = FirstOrderSystem::new(2.0, 1.0);
        assert_abs_diff_eq!(sys.response(100.0, 3.0, 60.0), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cooling_is_monotonic() {
        let sys = FirstOrderSystem::new(1.0, 8.0);
        let times: Vec<f64> = (0..50).map(f64::from).collect();
        let values = sys.response_series(90.0, 20.0, &times);
        assert!(values.windows(2).all(|w| w[1] < w[0]));
        assert!(values.iter().all(|&v| v > 20.0));
    }
}
