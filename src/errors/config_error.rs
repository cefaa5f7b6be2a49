use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Valor inválido para {key}: {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("Variable vacía: {0}")]
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_format() {
        let err = ConfigError::InvalidValue { key: "DEPLOY_DEPLOYER_ADDRESS".into(),
                                              reason: "corta".into() };
        assert_eq!(err.to_string(), "Valor inválido para DEPLOY_DEPLOYER_ADDRESS: corta");
    }

    #[test]
    fn test_empty_format() {
        assert_eq!(ConfigError::Empty("DEPLOY_NETWORK".into()).to_string(), "Variable vacía: DEPLOY_NETWORK");
    }
}
