//! File export for simulation results.

pub mod export;
