// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab

pub mod types;
pub mod error;
pub mod dynamics;
pub mod simulation;
pub mod sweep;

pub use types::*;
pub use error::{Result, SimulationError};
pub use simulation::{classify, simulate, ReplicatorSimulator};
pub use sweep::{basin_shares, sweep_initial_fractions, BasinShares, SweepPoint};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── Console Logging ─────────────────────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl ::log::Log for ConsoleLogger {
    fn enabled(&self, _metadata: &::log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &::log::Record) {
        log(&format!("[{}] {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

fn install_hooks() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // Already set on every call after the first.
        if ::log::set_logger(&CONSOLE_LOGGER).is_ok() {
            ::log::set_max_level(::log::LevelFilter::Info);
        }
    }
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// Slider state held on the JS side. Each `run` is a fresh, independent
/// simulation of the current inputs.
#[wasm_bindgen]
pub struct ReplicatorLab {
    payoffs: PayoffMatrix,
    config: SimulationConfig,
    simulator: ReplicatorSimulator,
}

#[wasm_bindgen]
impl ReplicatorLab {
    #[wasm_bindgen(constructor)]
    pub fn new(t: f64, r: f64, p: f64, s: f64) -> Self {
        install_hooks();
        Self {
            payoffs: PayoffMatrix::new(t, r, p, s),
            config: SimulationConfig::default(),
            simulator: ReplicatorSimulator::new(),
        }
    }

    pub fn set_temptation(&mut self, val: f64) { self.payoffs.t = val; }
    pub fn set_reward(&mut self, val: f64) { self.payoffs.r = val; }
    pub fn set_punishment(&mut self, val: f64) { self.payoffs.p = val; }
    pub fn set_sucker(&mut self, val: f64) { self.payoffs.s = val; }
    pub fn set_initial_fraction(&mut self, val: f64) { self.config.initial_fraction = val; }
    pub fn set_steps(&mut self, val: u32) { self.config.steps = val; }
    pub fn set_dt(&mut self, val: f64) { self.config.dt = val; }

    pub fn run(&self) -> std::result::Result<JsValue, JsError> {
        let result = self.run_core()?;
        Ok(serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL))
    }

    pub fn payoff_summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.payoffs.summary_lines()).unwrap_or(JsValue::NULL)
    }

    pub fn game_description(&self) -> String {
        GameClass::of(&self.payoffs).description().to_string()
    }

    /// Restore the reference slider defaults.
    pub fn reset(&mut self) {
        self.payoffs = PayoffMatrix::default();
        self.config = SimulationConfig::default();
    }
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl ReplicatorLab {
    pub fn payoffs(&self) -> &PayoffMatrix {
        &self.payoffs
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run_core(&self) -> Result<SimulationResult> {
        self.simulator.run(&SimulationRequest {
            payoffs: self.payoffs,
            config: self.config,
        })
    }
}

impl Default for ReplicatorLab {
    fn default() -> Self {
        let m = PayoffMatrix::default();
        Self::new(m.t, m.r, m.p, m.s)
    }
}

/// Run a `{ payoffs, config }` request object.
#[wasm_bindgen]
pub fn simulate_request(request: JsValue) -> std::result::Result<JsValue, JsError> {
    install_hooks();
    let request: SimulationRequest = serde_wasm_bindgen::from_value(request)?;
    let result = ReplicatorSimulator::new().run(&request)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// `"cooperation"`, `"defection"` or `"mixed"`.
#[wasm_bindgen]
pub fn classify_fraction(final_fraction: f64) -> String {
    classify(final_fraction).label().to_string()
}
