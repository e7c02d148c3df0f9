// Benchmark Report Types
// Structured output for independent analysis of the replicator engine

use replicator_engine::Outcome;
use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }

    pub fn of<T>(runs: &[T], metric: impl Fn(&T) -> f64) -> Self {
        Self::from_samples(&runs.iter().map(metric).collect::<Vec<_>>())
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub scenario: String,
    pub name: String,
    pub category: String,
    pub seed: u64,
    pub pass: bool,
    pub payoffs: [f64; 4],
    pub initial_fraction: f64,
    pub final_fraction: f64,
    pub outcome: Option<Outcome>,
    pub error: Option<String>,
    pub steps: u32,
    pub dt: f64,
    pub bounded: bool,
    pub length_ok: bool,
    pub initial_ok: bool,
    pub deterministic: bool,
    pub monotone: bool,
    pub constant: bool,
    pub final_delta: f64,
    pub elapsed_us: u128,
}

// ─── Monte Carlo Report (per-scenario aggregation) ──────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloReport {
    pub scenario_name: String,
    pub label: String,
    pub category: String,
    pub n_runs: usize,
    pub pass_rate: f64,
    pub final_fraction: Stats,
    pub final_delta: Stats,
    pub elapsed_us: Stats,
    pub outcome_counts: OutcomeCounts,
    pub invariant_violations: usize,
    pub individual_runs: Vec<BenchResult>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutcomeCounts {
    pub cooperation: usize,
    pub defection: usize,
    pub mixed: usize,
    pub failed: usize,
}

// ─── Engine Validation Summary ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct EngineValidation {
    pub trajectories_bounded: bool,
    pub lengths_exact: bool,
    pub initial_elements_exact: bool,
    pub deterministic: bool,
    pub fixed_points_hold: bool,
    pub classification_boundaries_hold: bool,
}

impl EngineValidation {
    pub fn all_pass(&self) -> bool {
        self.trajectories_bounded
            && self.lengths_exact
            && self.initial_elements_exact
            && self.deterministic
            && self.fixed_points_hold
            && self.classification_boundaries_hold
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_scenario: usize,
    pub summary: Summary,
    pub engine_validation: EngineValidation,
    pub scenarios: Vec<MonteCarloReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}
