// Per-Step JSONL Time Series Recorder
// One JSON line per step: both population shares and the three fitness values

use replicator_engine::dynamics::{average_fitness, cooperator_fitness, defector_fitness};
use replicator_engine::{PayoffMatrix, Trajectory};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct StepSnapshot {
    pub step: usize,
    pub cooperators: f64,
    pub defectors: f64,
    pub cooperator_fitness: f64,
    pub defector_fitness: f64,
    pub average_fitness: f64,
}

impl StepSnapshot {
    pub fn new(payoffs: &PayoffMatrix, step: usize, x: f64) -> Self {
        let f_c = cooperator_fitness(payoffs, x);
        let f_d = defector_fitness(payoffs, x);
        Self {
            step,
            cooperators: x,
            defectors: 1.0 - x,
            cooperator_fitness: f_c,
            defector_fitness: f_d,
            average_fitness: average_fitness(x, f_c, f_d),
        }
    }
}

pub struct TimeSeriesRecorder {
    snapshots: Vec<StepSnapshot>,
}

impl TimeSeriesRecorder {
    pub fn from_trajectory(payoffs: &PayoffMatrix, trajectory: &Trajectory) -> Self {
        let snapshots = trajectory
            .values()
            .iter()
            .enumerate()
            .map(|(step, &x)| StepSnapshot::new(payoffs, step, x))
            .collect();
        Self { snapshots }
    }

    /// Write all snapshots to a JSONL file
    pub fn write_jsonl(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}
