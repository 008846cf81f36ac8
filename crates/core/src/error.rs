/// Failure taxonomy shared by the intake adapters.
///
/// Adapter crates keep their own detailed error enums and convert into this
/// one at the trait boundary, so the form handler only has two cases to log.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required secret or setting is missing from the environment.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A downstream service (spreadsheet, mail relay) failed.
    #[error("Integration error: {0}")]
    Integration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_configuration() {
        let err = CoreError::Configuration("EMAIL_USER is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: EMAIL_USER is not set");
    }

    #[test]
    fn display_integration() {
        let err = CoreError::Integration("connection refused".to_string());
        assert_eq!(err.to_string(), "Integration error: connection refused");
    }
}
