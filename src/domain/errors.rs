use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_with_message() {
        let error = DomainError::NotFound("Car 123".to_string());
        assert_eq!(error.to_string(), "Resource not found: Car 123");
    }

    #[test]
    fn validation_error_displays_with_message() {
        let error = DomainError::ValidationError("Email is required".to_string());
        assert_eq!(error.to_string(), "Validation error: Email is required");
    }

    #[test]
    fn business_rule_violation_displays_with_message() {
        let error =
            DomainError::BusinessRuleViolation("Cannot delete an ongoing rental".to_string());
        assert_eq!(
            error.to_string(),
            "Business rule violation: Cannot delete an ongoing rental"
        );
    }

    #[test]
    fn variants_compare_by_variant_and_message() {
        assert_eq!(
            DomainError::Conflict("duplicate plate".to_string()),
            DomainError::Conflict("duplicate plate".to_string())
        );
        assert_ne!(
            DomainError::NotFound("Car 123".to_string()),
            DomainError::ValidationError("Car 123".to_string())
        );
    }
}
