// Trajectory Invariant Checks — bounds, length, first element, late-step drift

use replicator_engine::{SimulationConfig, Trajectory};

pub struct InvariantCheck {
    pub bounded: bool,
    pub length_ok: bool,
    pub initial_ok: bool,
    /// |x[n] - x[n-1]| at the last step, 0 for a single-element trajectory.
    pub final_delta: f64,
}

impl InvariantCheck {
    pub fn of(trajectory: &Trajectory, config: &SimulationConfig) -> Self {
        let values = trajectory.values();
        let final_delta = match values {
            [.., a, b] => (b - a).abs(),
            _ => 0.0,
        };
        Self {
            bounded: values.iter().all(|x| (0.0..=1.0).contains(x)),
            length_ok: values.len() == config.steps as usize + 1,
            initial_ok: values.first() == Some(&config.initial_fraction.clamp(0.0, 1.0)),
            final_delta,
        }
    }

    pub fn holds(&self) -> bool {
        self.bounded && self.length_ok && self.initial_ok
    }
}

/// Non-decreasing or non-increasing over the whole sequence.
pub fn is_monotone(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0]) || values.windows(2).all(|w| w[1] <= w[0])
}

pub fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] == w[0])
}
