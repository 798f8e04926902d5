use thiserror::Error;

/// Failure of a call to the items REST resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; `detail` is the response text or the status line
    #[error("Error al {action}: {detail}")]
    Http {
        action: String,
        status: u16,
        detail: String,
    },

    #[error("Error de red al {action}: {message}")]
    Network { action: String, message: String },

    #[error("No se pudo serializar la solicitud para {action}: {message}")]
    Serialize { action: String, message: String },
}

impl ApiError {
    pub fn action(&self) -> &str {
        match self {
            ApiError::Http { action, .. }
            | ApiError::Network { action, .. }
            | ApiError::Serialize { action, .. } => action,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
