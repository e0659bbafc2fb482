/// Returns `n` evenly spaced samples over `[start, end]`, endpoints included.
///
/// A single sample is `start`; zero samples is an empty vector. The last
/// sample is set to `end` exactly so the window edge is never lost to
/// rounding.
///
/// # Examples
///
/// ```
/// use thermal_response_sim::sim::grid::linspace;
///
/// assert_eq!(linspace(0.0, 20.0, 5), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
/// assert_eq!(linspace(0.0, 20.0, 1), vec![0.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = end;
            samples
        }
    }
}
