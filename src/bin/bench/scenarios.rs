// Scenario Definitions — reference games, boundary fixed points, clamp stress
// Each scenario is a base request plus the per-run perturbation and pass criteria

use replicator_engine::{Outcome, PayoffMatrix};

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub payoffs: PayoffMatrix,
    pub initial_fraction: f64,
    pub steps: u32,
    pub dt: f64,
    /// Max perturbation of the initial fraction, in 0.01 slider cells.
    pub jitter_cells: i32,
    /// Draw integer payoffs 0-10 per run instead of using `payoffs`.
    pub random_payoffs: bool,
    pub criteria: PassCriteria,
}

pub struct PassCriteria {
    pub expected_outcome: Option<Outcome>,
    pub require_monotone: bool,
    pub require_constant: bool,
    /// Bound on |x[n] - x[n-1]| at the last step.
    pub max_final_delta: Option<f64>,
}

impl Default for PassCriteria {
    fn default() -> Self {
        Self {
            expected_outcome: None,
            require_monotone: false,
            require_constant: false,
            max_final_delta: None,
        }
    }
}

fn base(name: &'static str, label: &'static str, category: &'static str) -> Scenario {
    Scenario {
        name,
        label,
        category,
        payoffs: PayoffMatrix::default(),
        initial_fraction: 0.5,
        steps: 50,
        dt: 0.1,
        jitter_cells: 0,
        random_payoffs: false,
        criteria: PassCriteria::default(),
    }
}

// ─── All Scenarios ──────────────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            jitter_cells: 10,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Defection),
                require_monotone: true,
                ..PassCriteria::default()
            },
            ..base("REF_DILEMMA", "Reference dilemma T5 R3 P1 S0", "reference")
        },
        Scenario {
            steps: 400,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Defection),
                require_monotone: true,
                max_final_delta: Some(1e-6),
                ..PassCriteria::default()
            },
            ..base("REF_DILEMMA_LONG", "Reference dilemma, 400 steps", "reference")
        },
        Scenario {
            payoffs: PayoffMatrix::new(0.0, 10.0, 0.0, 0.0),
            jitter_cells: 10,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Cooperation),
                require_monotone: true,
                ..PassCriteria::default()
            },
            ..base("DOMINANT_COOPERATION", "Cooperation strictly dominant", "reference")
        },
        Scenario {
            initial_fraction: 0.0,
            random_payoffs: true,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Defection),
                require_constant: true,
                ..PassCriteria::default()
            },
            ..base("FIXED_ALL_DEFECT", "Fixed point x0 = 0", "boundary")
        },
        Scenario {
            initial_fraction: 1.0,
            random_payoffs: true,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Cooperation),
                require_constant: true,
                ..PassCriteria::default()
            },
            ..base("FIXED_ALL_COOPERATE", "Fixed point x0 = 1", "boundary")
        },
        Scenario {
            payoffs: PayoffMatrix::new(5.0, 3.0, 0.0, 1.0),
            jitter_cells: 40,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Mixed),
                ..PassCriteria::default()
            },
            ..base("SNOWDRIFT_COEXIST", "Snowdrift coexistence", "games")
        },
        Scenario {
            payoffs: PayoffMatrix::new(4.0, 5.0, 3.0, 0.0),
            jitter_cells: 10,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Defection),
                require_monotone: true,
                ..PassCriteria::default()
            },
            ..base("STAG_HUNT_LOW_START", "Stag hunt below the 0.75 threshold", "games")
        },
        Scenario {
            payoffs: PayoffMatrix::new(0.0, 10.0, 0.0, 0.0),
            dt: 5.0,
            jitter_cells: 10,
            criteria: PassCriteria {
                expected_outcome: Some(Outcome::Cooperation),
                ..PassCriteria::default()
            },
            ..base("OVERSHOOT_CLAMP", "Large dt overshoot clamped at 1", "stress")
        },
        Scenario {
            random_payoffs: true,
            jitter_cells: 50,
            ..base("RANDOM_INVARIANTS", "Random slider games, invariants only", "stress")
        },
    ]
}
