//! Error types for the Travel Claim Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Compliance caveats (ceiling exceeded, receipt required) are not errors;
//! they travel as warnings inside successful results.

use thiserror::Error;

/// The main error type for the Travel Claim Engine.
///
/// All fallible operations in the engine return this error type.
///
/// # Example
///
/// ```
/// use travel_claim_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "distance_km".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'distance_km': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded rate table is structurally unusable.
    #[error("Invalid rate table '{table}': {message}")]
    InvalidRateTable {
        /// The table that failed validation.
        table: String,
        /// A description of the problem.
        message: String,
    },

    /// A request field was malformed (negative amount, inverted travel window).
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The distance lookup for a self-driven leg failed upstream.
    #[error("Distance could not be resolved: {reason}")]
    DistanceUnresolved {
        /// The failure reason reported by the distance lookup.
        reason: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn amount_overflow(field: &str) -> Self {
        Self::invalid_input(field, "amount is too large to represent")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rate_table_displays_table_and_message() {
        let error = EngineError::InvalidRateTable {
            table: "taxi.bands".to_string(),
            message: "at least one band is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rate table 'taxi.bands': at least one band is required"
        );
    }

    #[test]
    fn test_invalid_input_helper() {
        let error = EngineError::invalid_input("nights", "too many");
        assert_eq!(error.to_string(), "Invalid input 'nights': too many");
    }

    #[test]
    fn test_amount_overflow_is_invalid_input() {
        match EngineError::amount_overflow("distance_km") {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "distance_km"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_distance_unresolved_displays_reason() {
        let error = EngineError::DistanceUnresolved {
            reason: "origin not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Distance could not be resolved: origin not found"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid() -> EngineResult<()> {
            Err(EngineError::invalid_input("actual_cost", "must not be negative"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
