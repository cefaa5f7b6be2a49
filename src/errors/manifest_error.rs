use deploy_core::SequencingError;
use thiserror::Error;

/// Errores al cargar una secuencia desde un manifest JSON.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest mal formado: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Secuencia inválida: {0}")]
    Invalid(#[from] SequencingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_variant_from() {
        let err: ManifestError = std::io::Error::other("falló IO").into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_invalid_variant_from() {
        let err: ManifestError = SequencingError::UnresolvedReference { step_index: 2, reference: 1 }.into();
        assert_eq!(err.to_string(),
                   "Secuencia inválida: step 2 references step 1, which is not a deploy step");
    }
}
