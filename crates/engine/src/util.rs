//! Internal helpers for input validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every write path enforces the same invariants.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Parse an identifier. Anything that is not a UUID cannot name a stored row,
/// so it is reported as not found under `label`.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|_| EngineError::KeyNotFound(label.to_string()))
}

pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Transaction amounts are strictly positive; the kind carries the sign.
pub(crate) fn validate_amount(amount: f64) -> ResultEngine<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::InvalidAmount(
            "amount must be a positive number".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_budget_limit(budget_limit: f64) -> ResultEngine<()> {
    if !budget_limit.is_finite() || budget_limit < 0.0 {
        return Err(EngineError::InvalidAmount(
            "budget_limit must be >= 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_is_not_found() {
        assert_eq!(
            parse_uuid("not-a-uuid", "Category"),
            Err(EngineError::KeyNotFound("Category".to_string()))
        );
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&format!(" {id} "), "Category"), Ok(id));
    }

    #[test]
    fn amount_must_be_finite_and_positive() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_budget_is_allowed() {
        assert!(validate_budget_limit(0.0).is_ok());
        assert!(validate_budget_limit(-0.5).is_err());
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(normalize_optional_text(Some("  ")), None);
        assert_eq!(normalize_optional_text(Some(" #fff ")), Some("#fff".to_string()));
    }
}
