// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab - Type Definitions

use serde::{Serialize, Deserialize};

/// Final fraction above which cooperation is said to have taken over.
pub const COOPERATION_THRESHOLD: f64 = 0.95;
/// Final fraction below which defection is said to have taken over.
pub const DEFECTION_THRESHOLD: f64 = 0.05;

// ─── PayoffMatrix ────────────────────────────────────────────────────────────

/// Symmetric 2x2 game payoffs, from the row player's point of view.
///
/// No ordering between the four values is enforced: degenerate and
/// non-standard games are valid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// Temptation: I defect, you cooperate.
    #[serde(rename = "T", alias = "t")]
    pub t: f64,
    /// Reward: we both cooperate.
    #[serde(rename = "R", alias = "r")]
    pub r: f64,
    /// Punishment: we both defect.
    #[serde(rename = "P", alias = "p")]
    pub p: f64,
    /// Sucker: I cooperate, you defect.
    #[serde(rename = "S", alias = "s")]
    pub s: f64,
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self { t: 5.0, r: 3.0, p: 1.0, s: 0.0 }
    }
}

impl PayoffMatrix {
    pub fn new(t: f64, r: f64, p: f64, s: f64) -> Self {
        Self { t, r, p, s }
    }

    /// Mixed rest point `x* = (S-P) / ((S-P) + (T-R))`, if it lies strictly
    /// inside (0, 1).
    pub fn interior_equilibrium(&self) -> Option<f64> {
        let a = self.s - self.p;
        let b = self.t - self.r;
        let denom = a + b;
        if denom == 0.0 {
            return None;
        }
        let x = a / denom;
        if x > 0.0 && x < 1.0 { Some(x) } else { None }
    }

    /// The four payoff lines shown next to the chart.
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("You cooperate, they cooperate: you get {}", self.r),
            format!("You defect, they cooperate: you get {}", self.t),
            format!("You cooperate, they defect: you get {}", self.s),
            format!("You defect, they defect: you get {}", self.p),
        ]
    }
}

// ─── GameClass ───────────────────────────────────────────────────────────────

/// Named families of symmetric 2x2 games. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameClass {
    PrisonersDilemma,
    StagHunt,
    Snowdrift,
    Harmony,
    Other,
}

impl GameClass {
    pub fn of(m: &PayoffMatrix) -> Self {
        let PayoffMatrix { t, r, p, s } = *m;
        if t > r && r > p && p > s {
            Self::PrisonersDilemma
        } else if r > t && t >= p && p > s {
            Self::StagHunt
        } else if t > r && r > s && s > p {
            Self::Snowdrift
        } else if r > t && s > p {
            Self::Harmony
        } else {
            Self::Other
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PrisonersDilemma => "Prisoner's dilemma: defection dominates",
            Self::StagHunt => "Stag hunt: two pure equilibria, coordination needed",
            Self::Snowdrift => "Snowdrift: stable coexistence of both strategies",
            Self::Harmony => "Harmony: cooperation dominates",
            Self::Other => "Non-standard payoff ordering",
        }
    }
}

// ─── SimulationConfig ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Starting cooperator share. Clamped to [0, 1] by the simulator.
    pub initial_fraction: f64,
    pub steps: u32,
    pub dt: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { initial_fraction: 0.5, steps: 50, dt: 0.1 }
    }
}

impl SimulationConfig {
    pub fn with_initial_fraction(initial_fraction: f64) -> Self {
        Self { initial_fraction, ..Self::default() }
    }
}

/// Bounds applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineLimits {
    pub max_steps: u32,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self { max_steps: 100_000 }
    }
}

/// Object shape a host sends for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub payoffs: PayoffMatrix,
    pub config: SimulationConfig,
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Cooperation,
    Defection,
    Mixed,
}

/// Banner styling the host applies to an outcome message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Success,
    Error,
    Warning,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cooperation => "cooperation",
            Self::Defection => "defection",
            Self::Mixed => "mixed",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Cooperation => "Cooperation took over the world! (cooperation is evolutionarily stable)",
            Self::Defection => "The world sank into defection. (defection is evolutionarily stable)",
            Self::Mixed => "Cooperation and defection coexist. (mixed equilibrium)",
        }
    }

    pub fn level(&self) -> MessageLevel {
        match self {
            Self::Cooperation => MessageLevel::Success,
            Self::Defection => MessageLevel::Error,
            Self::Mixed => MessageLevel::Warning,
        }
    }
}

// ─── Trajectory ──────────────────────────────────────────────────────────────

/// Cooperator fraction at each step, `steps + 1` values, all within [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<f64>);

impl Trajectory {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn initial_fraction(&self) -> f64 {
        self.0.first().copied().unwrap_or(0.0)
    }

    pub fn final_fraction(&self) -> f64 {
        self.0.last().copied().unwrap_or(0.0)
    }

    /// Defector share `1 - x` at each step.
    pub fn defectors(&self) -> Vec<f64> {
        self.0.iter().map(|x| 1.0 - x).collect()
    }

    pub fn outcome(&self) -> Outcome {
        crate::simulation::classify(self.final_fraction())
    }

    pub fn into_values(self) -> Vec<f64> {
        self.0
    }
}

// ─── SimulationResult ────────────────────────────────────────────────────────

/// Everything a host needs to draw the chart and the conclusion banner.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub cooperators: Vec<f64>,
    pub defectors: Vec<f64>,
    pub final_fraction: f64,
    pub outcome: Outcome,
    pub message: &'static str,
    pub level: MessageLevel,
    pub game: GameClass,
}

impl SimulationResult {
    pub fn new(payoffs: &PayoffMatrix, trajectory: Trajectory) -> Self {
        let outcome = trajectory.outcome();
        let final_fraction = trajectory.final_fraction();
        let defectors = trajectory.defectors();
        Self {
            cooperators: trajectory.into_values(),
            defectors,
            final_fraction,
            outcome,
            message: outcome.message(),
            level: outcome.level(),
            game: GameClass::of(payoffs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_payoffs_match_reference_sliders() {
        let m = PayoffMatrix::default();
        assert_eq!((m.t, m.r, m.p, m.s), (5.0, 3.0, 1.0, 0.0));
    }

    #[test]
    fn default_config() {
        let c = SimulationConfig::default();
        assert_eq!(c.steps, 50);
        assert_eq!(c.dt, 0.1);
        assert_eq!(c.initial_fraction, 0.5);
    }

    #[test]
    fn game_classes() {
        assert_eq!(GameClass::of(&PayoffMatrix::new(5.0, 3.0, 1.0, 0.0)), GameClass::PrisonersDilemma);
        assert_eq!(GameClass::of(&PayoffMatrix::new(4.0, 5.0, 3.0, 0.0)), GameClass::StagHunt);
        assert_eq!(GameClass::of(&PayoffMatrix::new(5.0, 3.0, 0.0, 1.0)), GameClass::Snowdrift);
        assert_eq!(GameClass::of(&PayoffMatrix::new(0.0, 10.0, 0.0, 1.0)), GameClass::Harmony);
        assert_eq!(GameClass::of(&PayoffMatrix::new(1.0, 1.0, 1.0, 1.0)), GameClass::Other);
    }

    #[test]
    fn interior_equilibrium() {
        let snowdrift = PayoffMatrix::new(5.0, 3.0, 0.0, 1.0);
        let x = snowdrift.interior_equilibrium().expect("test: snowdrift has interior point");
        assert!((x - 1.0 / 3.0).abs() < 1e-12);

        let stag = PayoffMatrix::new(4.0, 5.0, 3.0, 0.0);
        let x = stag.interior_equilibrium().expect("test: stag hunt has interior point");
        assert!((x - 0.75).abs() < 1e-12);

        assert!(PayoffMatrix::default().interior_equilibrium().is_none());
        assert!(PayoffMatrix::new(2.0, 2.0, 2.0, 2.0).interior_equilibrium().is_none());
    }

    #[test]
    fn summary_lines_use_raw_payoffs() {
        let lines = PayoffMatrix::new(7.0, 4.0, 2.0, 1.0).summary_lines();
        assert!(lines[0].ends_with("4"));
        assert!(lines[1].ends_with("7"));
        assert!(lines[2].ends_with("1"));
        assert!(lines[3].ends_with("2"));
    }

    #[test]
    fn outcome_levels() {
        assert_eq!(Outcome::Cooperation.level(), MessageLevel::Success);
        assert_eq!(Outcome::Defection.level(), MessageLevel::Error);
        assert_eq!(Outcome::Mixed.level(), MessageLevel::Warning);
        for o in [Outcome::Cooperation, Outcome::Defection, Outcome::Mixed] {
            assert!(!o.message().is_empty(), "{:?} message must not be empty", o);
        }
    }

    #[test]
    fn request_deserializes_partial_json() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{"payoffs": {"T": 0, "R": 10, "P": 0, "S": 0}, "config": {"initial_fraction": 0.2}}"#,
        )
        .expect("test: request parses");
        assert_eq!(req.payoffs, PayoffMatrix::new(0.0, 10.0, 0.0, 0.0));
        assert_eq!(req.config.initial_fraction, 0.2);
        assert_eq!(req.config.steps, 50);
        assert_eq!(req.config.dt, 0.1);
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&Outcome::Cooperation).expect("test: serialize");
        assert_eq!(json, "\"cooperation\"");
    }

    #[test]
    fn defectors_complement_cooperators() {
        let t = Trajectory::from_values(vec![0.25, 0.5, 1.0]);
        assert_eq!(t.defectors(), vec![0.75, 0.5, 0.0]);
        assert_eq!(t.initial_fraction(), 0.25);
        assert_eq!(t.final_fraction(), 1.0);
    }
}
