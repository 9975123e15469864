//! Error types for environment operations

use thiserror::Error;

/// Recoverable errors raised by environments and their configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// A caller-supplied value was outside the documented domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration violated one of its constraints
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl EnvError {
    /// Build an [`EnvError::InvalidArgument`] for an action outside `[low, high]`
    pub fn action_out_of_range(action: f64, low: f64, high: f64) -> Self {
        EnvError::InvalidArgument(format!("action {} is outside [{}, {}]", action, low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = EnvError::action_out_of_range(3000.0, -2000.0, 2000.0);
        assert_eq!(err.to_string(), "invalid argument: action 3000 is outside [-2000, 2000]");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = EnvError::InvalidConfig("range must be positive".into()).into();
        assert!(matches!(err.downcast_ref::<EnvError>(), Some(EnvError::InvalidConfig(_))));
    }
}
