// Replicator Bench Runner v0.1.0 — Monte Carlo validation of the replicator engine
// Seeded ChaCha8Rng perturbations, per-run invariant checks, optional per-step JSONL
//
// Usage:
//   cargo run --release --bin bench                     # Run all scenarios (30 runs each)
//   cargo run --release --bin bench -- --runs 5         # Quick mode (5 runs each)
//   cargo run --release --bin bench -- STAG             # Filter by name
//   cargo run --release --bin bench -- --time-series    # Enable JSONL output
//   cargo run --release --bin bench -- --seed 42        # Custom base seed

mod metrics;
mod monte_carlo;
mod report;
mod scenarios;
mod time_series;

use replicator_engine::{classify, Outcome};
use report::*;
use scenarios::*;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    time_series: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        time_series: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--time-series" => {
                cli.time_series = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

fn classification_boundaries_hold() -> bool {
    classify(0.96) == Outcome::Cooperation
        && classify(0.04) == Outcome::Defection
        && classify(0.5) == Outcome::Mixed
        && classify(0.95) == Outcome::Mixed
        && classify(0.05) == Outcome::Mixed
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        log::error!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    let ts_dir = if cli.time_series {
        Some(std::path::Path::new("benchmark-results/time-series").to_path_buf())
    } else {
        None
    };

    log::info!("Replicator Bench Runner v0.1.0");
    log::info!("PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("\n  {:<40} {:>5} {:>12} {:>6} {:>6} {:>6} {:>8}",
        "Scenario", "Pass%", "Final x", "Coop", "Defect", "Mixed", "Time");
    println!("  {}", "-".repeat(90));

    let suite_start = Instant::now();
    let mut mc_reports = Vec::new();

    for scenario in &to_run {
        let report = monte_carlo::run_monte_carlo(scenario, cli.runs, cli.seed, ts_dir.as_deref());
        let pass_pct = report.pass_rate * 100.0;
        let status = if report.pass_rate >= 1.0 { "PASS" } else { "FAIL" };

        println!("  {:<40} {:>4}% {:>12.6} {:>6} {:>6} {:>6} {:>6.0}us  {}",
            report.label,
            pass_pct as u32,
            report.final_fraction.mean,
            report.outcome_counts.cooperation,
            report.outcome_counts.defection,
            report.outcome_counts.mixed,
            report.elapsed_us.mean,
            status,
        );

        mc_reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Engine Validation ──────────────────────────────────────────────

    let all_runs = || mc_reports.iter().flat_map(|r| r.individual_runs.iter()).filter(|r| r.error.is_none());
    let fixed_points_hold = mc_reports.iter()
        .filter(|r| r.category == "boundary")
        .all(|r| r.individual_runs.iter().all(|run| run.constant));

    let validation = EngineValidation {
        trajectories_bounded: all_runs().all(|r| r.bounded),
        lengths_exact: all_runs().all(|r| r.length_ok),
        initial_elements_exact: all_runs().all(|r| r.initial_ok),
        deterministic: all_runs().all(|r| r.deterministic),
        fixed_points_hold,
        classification_boundaries_hold: classification_boundaries_hold(),
    };

    // ─── Summary ────────────────────────────────────────────────────────

    let total = mc_reports.len();
    let passed = mc_reports.iter().filter(|r| r.pass_rate >= 1.0).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(90));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.3}s\n",
        total, passed, failed, suite_elapsed.as_secs_f64());

    println!("  Engine Validation:");
    println!("    Bounded trajectories:  {}", pass_fail(validation.trajectories_bounded));
    println!("    Exact lengths:         {}", pass_fail(validation.lengths_exact));
    println!("    Exact first elements:  {}", pass_fail(validation.initial_elements_exact));
    println!("    Deterministic:         {}", pass_fail(validation.deterministic));
    println!("    Fixed points:          {}", pass_fail(validation.fixed_points_hold));
    println!("    Classification bounds: {}\n", pass_fail(validation.classification_boundaries_hold));

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let timestamp = format!("{}", ts);
    let all_pass = validation.all_pass();

    let report = BenchReport {
        timestamp: timestamp.clone(),
        version: "0.1.0",
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        engine_validation: validation,
        scenarios: mc_reports,
    };

    if let Err(e) = write_report(&report, &timestamp) {
        log::error!("Failed to write benchmark report: {}", e);
        std::process::exit(1);
    }

    if failed > 0 || !all_pass {
        std::process::exit(1);
    }
}

fn pass_fail(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}

fn write_report(report: &BenchReport, timestamp: &str) -> std::io::Result<()> {
    let dir = std::path::Path::new("benchmark-results");
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(&path, json)?;
    log::info!("Results saved to: {}", path.display());
    Ok(())
}
