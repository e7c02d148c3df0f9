// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Replicator Dynamics Lab - Error Types

/// Errors raised when a simulation request cannot be honoured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("step limit exceeded: requested {steps}, max {max}")]
    StepLimitExceeded { steps: u32, max: u32 },

    #[error("numeric overflow at step {step}")]
    NumericOverflow { step: u32 },
}

pub type Result<T> = std::result::Result<T, SimulationError>;

/// Reject NaN and infinities for a named input.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(ensure_finite("T", 5.0), Ok(5.0));
        assert_eq!(ensure_finite("S", -1e300), Ok(-1e300));
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(matches!(
            ensure_finite("R", f64::INFINITY),
            Err(SimulationError::InvalidInput { field: "R", .. })
        ));
        assert!(ensure_finite("P", f64::NAN).is_err());
    }

    #[test]
    fn error_messages() {
        let e = SimulationError::StepLimitExceeded { steps: 10, max: 5 };
        assert_eq!(e.to_string(), "step limit exceeded: requested 10, max 5");
        let e = SimulationError::InvalidInput { field: "dt", value: -0.5 };
        assert_eq!(e.to_string(), "invalid input: dt = -0.5");
    }
}
