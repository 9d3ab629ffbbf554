//! Error types for the estimation engine
//!
//! The engine distinguishes two failure kinds: input values that are outside
//! their domain (zero speed, negative buffer, unparseable dates) and references
//! to things that do not exist (unknown team member or project ids).

use thiserror::Error;

/// Errors raised by the planning engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown {kind} '{id}'")]
    UnresolvedReference { kind: &'static str, id: String },
}

impl PlanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unresolved(kind: &'static str, id: impl Into<String>) -> Self {
        PlanError::UnresolvedReference {
            kind,
            id: id.into(),
        }
    }
}

/// Require a finite value strictly greater than zero
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, PlanError> {
    if !value.is_finite() {
        return Err(PlanError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value <= 0.0 {
        return Err(PlanError::invalid(field, format!("{} must be greater than zero", value)));
    }
    Ok(value)
}

/// Require a finite value greater than or equal to zero
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, PlanError> {
    if !value.is_finite() {
        return Err(PlanError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(PlanError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_rejects_zero_and_nan() {
        assert!(require_positive("draft_speed", 0.0).is_err());
        assert!(require_positive("draft_speed", -3.0).is_err());
        assert!(require_positive("draft_speed", f64::NAN).is_err());
        assert!(require_positive("draft_speed", f64::INFINITY).is_err());
        assert_eq!(require_positive("draft_speed", 250.0), Ok(250.0));
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("buffer_percent", 0.0), Ok(0.0));
        assert!(require_non_negative("buffer_percent", -0.5).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = PlanError::invalid("daily_hours", "0 must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid daily_hours: 0 must be greater than zero"
        );
        let err = PlanError::unresolved("team member", "tm-9");
        assert_eq!(err.to_string(), "Unknown team member 'tm-9'");
    }
}
