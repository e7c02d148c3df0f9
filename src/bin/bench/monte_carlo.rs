// Monte Carlo Infrastructure — N runs per scenario with statistical aggregation
// Each run perturbs the scenario with a seeded ChaCha8Rng, then checks every trajectory invariant

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use replicator_engine::*;

use crate::metrics::{is_constant, is_monotone, InvariantCheck};
use crate::report::*;
use crate::scenarios::Scenario;
use crate::time_series::TimeSeriesRecorder;

use std::time::Instant;

/// Draw the request for one run: slider-grid jitter on x0, optional random payoffs.
fn perturb(scenario: &Scenario, rng: &mut ChaCha8Rng) -> (PayoffMatrix, SimulationConfig) {
    let payoffs = if scenario.random_payoffs {
        PayoffMatrix::new(
            rng.gen_range(0..=10) as f64,
            rng.gen_range(0..=10) as f64,
            rng.gen_range(0..=10) as f64,
            rng.gen_range(0..=10) as f64,
        )
    } else {
        scenario.payoffs
    };

    let initial_fraction = if scenario.jitter_cells > 0 {
        let cell = (scenario.initial_fraction * 100.0).round() as i32
            + rng.gen_range(-scenario.jitter_cells..=scenario.jitter_cells);
        cell.clamp(0, 100) as f64 / 100.0
    } else {
        scenario.initial_fraction
    };

    let config = SimulationConfig {
        initial_fraction,
        steps: scenario.steps,
        dt: scenario.dt,
    };
    (payoffs, config)
}

/// Run a single scenario iteration with a specific seed.
pub fn run_single(
    scenario: &Scenario,
    seed: u64,
    time_series_dir: Option<&std::path::Path>,
) -> BenchResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (payoffs, config) = perturb(scenario, &mut rng);
    let sim = ReplicatorSimulator::new();

    let start = Instant::now();
    let first = sim.simulate(&payoffs, &config);
    let elapsed_us = start.elapsed().as_micros();
    let second = sim.simulate(&payoffs, &config);

    let mut result = BenchResult {
        scenario: scenario.label.to_string(),
        name: scenario.name.to_string(),
        category: scenario.category.to_string(),
        seed,
        pass: false,
        payoffs: [payoffs.t, payoffs.r, payoffs.p, payoffs.s],
        initial_fraction: config.initial_fraction,
        final_fraction: 0.0,
        outcome: None,
        error: None,
        steps: config.steps,
        dt: config.dt,
        bounded: false,
        length_ok: false,
        initial_ok: false,
        deterministic: false,
        monotone: false,
        constant: false,
        final_delta: 0.0,
        elapsed_us,
    };

    let trajectory = match first {
        Ok(t) => t,
        Err(e) => {
            log::warn!("{} seed {}: {}", scenario.name, seed, e);
            result.error = Some(e.to_string());
            return result;
        }
    };

    let check = InvariantCheck::of(&trajectory, &config);
    let values = trajectory.values();
    result.final_fraction = trajectory.final_fraction();
    result.outcome = Some(trajectory.outcome());
    result.bounded = check.bounded;
    result.length_ok = check.length_ok;
    result.initial_ok = check.initial_ok;
    result.deterministic = second.as_ref().map(|t| t == &trajectory).unwrap_or(false);
    result.monotone = is_monotone(values);
    result.constant = is_constant(values);
    result.final_delta = check.final_delta;

    let criteria = &scenario.criteria;
    let mut pass = check.holds() && result.deterministic;
    if let Some(expected) = criteria.expected_outcome {
        pass &= result.outcome == Some(expected);
    }
    if criteria.require_monotone {
        pass &= result.monotone;
    }
    if criteria.require_constant {
        pass &= result.constant;
    }
    if let Some(max_delta) = criteria.max_final_delta {
        pass &= result.final_delta < max_delta;
    }
    result.pass = pass;

    if let Some(dir) = time_series_dir {
        let path = dir.join(format!("seed-{}.jsonl", seed));
        let recorder = TimeSeriesRecorder::from_trajectory(&payoffs, &trajectory);
        if let Err(e) = recorder.write_jsonl(&path) {
            log::warn!("failed to write time series {}: {}", path.display(), e);
        }
    }

    result
}

/// Run Monte Carlo: N runs of a scenario, aggregate stats.
pub fn run_monte_carlo(
    scenario: &Scenario,
    n_runs: usize,
    base_seed: u64,
    time_series_base: Option<&std::path::Path>,
) -> MonteCarloReport {
    let ts_dir = time_series_base.map(|base| base.join(scenario.name.to_lowercase()));

    let mut results = Vec::with_capacity(n_runs);
    for i in 0..n_runs {
        let seed = base_seed + i as u64;
        results.push(run_single(scenario, seed, ts_dir.as_deref()));
    }

    aggregate(scenario, results)
}

/// Aggregate individual runs into a MonteCarloReport.
fn aggregate(scenario: &Scenario, results: Vec<BenchResult>) -> MonteCarloReport {
    let n = results.len().max(1);
    let passed = results.iter().filter(|r| r.pass).count();

    let mut outcome_counts = OutcomeCounts::default();
    for r in &results {
        match r.outcome {
            Some(Outcome::Cooperation) => outcome_counts.cooperation += 1,
            Some(Outcome::Defection) => outcome_counts.defection += 1,
            Some(Outcome::Mixed) => outcome_counts.mixed += 1,
            None => outcome_counts.failed += 1,
        }
    }

    let invariant_violations = results.iter()
        .filter(|r| r.error.is_none()
            && !(r.bounded && r.length_ok && r.initial_ok && r.deterministic))
        .count();

    MonteCarloReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        n_runs: results.len(),
        pass_rate: passed as f64 / n as f64,
        final_fraction: Stats::of(&results, |r| r.final_fraction),
        final_delta: Stats::of(&results, |r| r.final_delta),
        elapsed_us: Stats::of(&results, |r| r.elapsed_us as f64),
        outcome_counts,
        invariant_violations,
        individual_runs: results,
    }
}
