// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab - Fitness and Update Rule

use crate::types::PayoffMatrix;

/// Expected payoff of a cooperator meeting a random member of the population.
pub fn cooperator_fitness(m: &PayoffMatrix, x: f64) -> f64 {
    x * m.r + (1.0 - x) * m.s
}

/// Expected payoff of a defector meeting a random member of the population.
pub fn defector_fitness(m: &PayoffMatrix, x: f64) -> f64 {
    x * m.t + (1.0 - x) * m.p
}

pub fn average_fitness(x: f64, f_c: f64, f_d: f64) -> f64 {
    x * f_c + (1.0 - x) * f_d
}

/// One explicit Euler step of the replicator equation, clamped to [0, 1].
///
/// The clamp runs on every step: later steps depend on the clamped value, so
/// deferring it to the end gives a different trajectory.
pub fn replicator_step(m: &PayoffMatrix, x: f64, dt: f64) -> f64 {
    let f_c = cooperator_fitness(m, x);
    let f_d = defector_fitness(m, x);
    let avg_f = average_fitness(x, f_c, f_d);
    let dx = x * (f_c - avg_f) * dt;
    (x + dx).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitness_at_pure_states() {
        let m = PayoffMatrix::new(5.0, 3.0, 1.0, 0.0);
        assert_eq!(cooperator_fitness(&m, 1.0), 3.0);
        assert_eq!(cooperator_fitness(&m, 0.0), 0.0);
        assert_eq!(defector_fitness(&m, 1.0), 5.0);
        assert_eq!(defector_fitness(&m, 0.0), 1.0);
    }

    #[test]
    fn first_step_from_half() {
        // f_c = 1.5, f_d = 3.0, avg = 2.25, dx = 0.5 * -0.75 * 0.1
        let m = PayoffMatrix::new(5.0, 3.0, 1.0, 0.0);
        let x = replicator_step(&m, 0.5, 0.1);
        assert!((x - 0.4625).abs() < 1e-15, "got {}", x);
    }

    #[test]
    fn pure_states_are_fixed_points() {
        let m = PayoffMatrix::new(9.0, 2.0, 7.0, 4.0);
        assert_eq!(replicator_step(&m, 0.0, 0.1), 0.0);
        assert_eq!(replicator_step(&m, 1.0, 0.1), 1.0);
    }

    #[test]
    fn overshoot_is_clamped() {
        // dx = 0.5 * (5 - 2.5) * 5 = 6.25
        let up = PayoffMatrix::new(0.0, 10.0, 0.0, 0.0);
        assert_eq!(replicator_step(&up, 0.5, 5.0), 1.0);
        // dx = 0.5 * (0 - 2.5) * 5 = -6.25
        let down = PayoffMatrix::new(10.0, 0.0, 0.0, 0.0);
        assert_eq!(replicator_step(&down, 0.5, 5.0), 0.0);
    }
}
