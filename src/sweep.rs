// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab - Initial Fraction Sweeps

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::simulation::ReplicatorSimulator;
use crate::types::{Outcome, PayoffMatrix, SimulationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub initial_fraction: f64,
    pub final_fraction: f64,
    pub outcome: Outcome,
}

/// Share of sweep samples ending in each outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BasinShares {
    pub cooperation: f64,
    pub defection: f64,
    pub mixed: f64,
}

/// Run one independent simulation per evenly spaced initial fraction in
/// [0, 1], ends included. `config.initial_fraction` is ignored.
pub fn sweep_initial_fractions(
    sim: &ReplicatorSimulator,
    payoffs: &PayoffMatrix,
    config: &SimulationConfig,
    samples: u32,
) -> Result<Vec<SweepPoint>> {
    if samples == 0 {
        return Err(SimulationError::InvalidInput { field: "samples", value: 0.0 });
    }
    let denom = (samples - 1).max(1) as f64;
    (0..samples)
        .map(|i| {
            let x0 = i as f64 / denom;
            let run = SimulationConfig { initial_fraction: x0, ..*config };
            let trajectory = sim.simulate(payoffs, &run)?;
            Ok(SweepPoint {
                initial_fraction: x0,
                final_fraction: trajectory.final_fraction(),
                outcome: trajectory.outcome(),
            })
        })
        .collect()
}

pub fn basin_shares(points: &[SweepPoint]) -> BasinShares {
    if points.is_empty() {
        return BasinShares::default();
    }
    let n = points.len() as f64;
    let count = |o: Outcome| points.iter().filter(|p| p.outcome == o).count() as f64 / n;
    BasinShares {
        cooperation: count(Outcome::Cooperation),
        defection: count(Outcome::Defection),
        mixed: count(Outcome::Mixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_include_both_ends() {
        let pts = sweep_initial_fractions(
            &ReplicatorSimulator::new(),
            &PayoffMatrix::default(),
            &SimulationConfig::default(),
            11,
        )
        .expect("test: valid sweep");
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[0].initial_fraction, 0.0);
        assert_eq!(pts[10].initial_fraction, 1.0);
        assert_eq!(pts[0].final_fraction, 0.0);
        assert_eq!(pts[10].final_fraction, 1.0);
    }

    #[test]
    fn zero_samples_rejected() {
        let r = sweep_initial_fractions(
            &ReplicatorSimulator::new(),
            &PayoffMatrix::default(),
            &SimulationConfig::default(),
            0,
        );
        assert!(matches!(r, Err(SimulationError::InvalidInput { field: "samples", .. })));
    }

    #[test]
    fn single_sample_is_zero() {
        let pts = sweep_initial_fractions(
            &ReplicatorSimulator::new(),
            &PayoffMatrix::default(),
            &SimulationConfig::default(),
            1,
        )
        .expect("test: valid sweep");
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].initial_fraction, 0.0);
    }

    #[test]
    fn stag_hunt_splits_basins() {
        // Unstable rest point at 0.75; 2000 steps of dt 0.1 settles both sides.
        let stag = PayoffMatrix::new(4.0, 5.0, 3.0, 0.0);
        let config = SimulationConfig { steps: 2000, ..SimulationConfig::default() };
        let pts = sweep_initial_fractions(&ReplicatorSimulator::new(), &stag, &config, 21)
            .expect("test: valid sweep");
        for p in &pts {
            if p.initial_fraction < 0.74 {
                assert_eq!(p.outcome, Outcome::Defection, "x0 = {}", p.initial_fraction);
            } else if p.initial_fraction > 0.76 {
                assert_eq!(p.outcome, Outcome::Cooperation, "x0 = {}", p.initial_fraction);
            }
        }
        let shares = basin_shares(&pts);
        assert!(shares.defection > shares.cooperation);
        assert!((shares.cooperation + shares.defection + shares.mixed - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_basin_shares() {
        assert_eq!(basin_shares(&[]), BasinShares::default());
    }
}
