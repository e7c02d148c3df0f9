// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab - Simulation Core

use crate::dynamics::replicator_step;
use crate::error::{ensure_finite, Result, SimulationError};
use crate::types::*;

// ─── ReplicatorSimulator ─────────────────────────────────────────────────────

/// Discrete-time replicator dynamics for a two-strategy population.
///
/// Holds only the request limits; every call to [`simulate`](Self::simulate)
/// is an independent run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplicatorSimulator {
    limits: EngineLimits,
}

impl ReplicatorSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: EngineLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> EngineLimits {
        self.limits
    }

    /// Run `config.steps` Euler steps from `config.initial_fraction`.
    ///
    /// The initial fraction is clamped to [0, 1] rather than rejected. Non
    /// finite payoffs or initial fraction, and a non-finite or non-positive
    /// `dt`, are rejected before the first step.
    pub fn simulate(&self, payoffs: &PayoffMatrix, config: &SimulationConfig) -> Result<Trajectory> {
        validate(payoffs, config)?;
        if config.steps > self.limits.max_steps {
            return Err(SimulationError::StepLimitExceeded {
                steps: config.steps,
                max: self.limits.max_steps,
            });
        }

        let x0 = config.initial_fraction.clamp(0.0, 1.0);
        if x0 != config.initial_fraction {
            log::warn!(
                "initial fraction {} outside [0, 1], clamped to {}",
                config.initial_fraction, x0
            );
        }

        let mut history = Vec::with_capacity(config.steps as usize + 1);
        history.push(x0);
        let mut x = x0;
        for step in 0..config.steps {
            x = replicator_step(payoffs, x, config.dt);
            // Finite but huge payoffs can overflow into 0 * inf.
            if x.is_nan() {
                return Err(SimulationError::NumericOverflow { step: step + 1 });
            }
            history.push(x);
        }

        log::debug!(
            "simulated T={} R={} P={} S={} x0={} steps={} dt={} -> {}",
            payoffs.t, payoffs.r, payoffs.p, payoffs.s,
            x0, config.steps, config.dt, x
        );
        Ok(Trajectory::from_values(history))
    }

    /// Simulate and package the result for a host.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        let trajectory = self.simulate(&request.payoffs, &request.config)?;
        let result = SimulationResult::new(&request.payoffs, trajectory);
        log::debug!("outcome: {} (final {})", result.outcome.label(), result.final_fraction);
        Ok(result)
    }
}

fn validate(payoffs: &PayoffMatrix, config: &SimulationConfig) -> Result<()> {
    ensure_finite("T", payoffs.t)?;
    ensure_finite("R", payoffs.r)?;
    ensure_finite("P", payoffs.p)?;
    ensure_finite("S", payoffs.s)?;
    ensure_finite("initial_fraction", config.initial_fraction)?;
    let dt = ensure_finite("dt", config.dt)?;
    if dt <= 0.0 {
        return Err(SimulationError::InvalidInput { field: "dt", value: dt });
    }
    Ok(())
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// [`ReplicatorSimulator::simulate`] with default limits.
pub fn simulate(payoffs: &PayoffMatrix, config: &SimulationConfig) -> Result<Trajectory> {
    ReplicatorSimulator::new().simulate(payoffs, config)
}

/// Classify a final cooperator fraction. Both thresholds are strict.
pub fn classify(final_fraction: f64) -> Outcome {
    if final_fraction > COOPERATION_THRESHOLD {
        Outcome::Cooperation
    } else if final_fraction < DEFECTION_THRESHOLD {
        Outcome::Defection
    } else {
        Outcome::Mixed
    }
}
