use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Parse(e.to_string())
    }
}

/// Failure of a single backend request.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Server error {status}: {detail}")]
    Server {
        status: u16,
        detail: serde_json::Value,
    },

    /// A 2xx body could not be decoded into the requested type.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message, preferring the server's `detail` field.
    pub fn message(&self) -> String {
        match self {
            ApiError::Server { detail, .. } => match detail.get("detail") {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => match detail {
                    serde_json::Value::String(s) if !s.is_empty() => s.clone(),
                    _ => self.to_string(),
                },
            },
            other => other.to_string(),
        }
    }

    /// `"<status>: <message>"` for server errors, the bare message otherwise.
    pub fn status_message(&self) -> String {
        match self.status() {
            Some(status) => format!("{status}: {}", self.message()),
            None => self.message(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NoMatch(String),

    #[error("Failed to load view {specifier}: {reason}")]
    Load { specifier: String, reason: String },

    #[error("Navigation to {path} cancelled: {reason}")]
    Cancelled { path: String, reason: String },

    #[error("Too many redirects starting at {0}")]
    RedirectLoop(String),

    #[error("Router plugin is not installed")]
    RouterNotInstalled,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("Mount point {0} not found in document")]
    MissingMountPoint(String),

    #[error("Mount point {0} already hosts an application")]
    AlreadyMounted(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Plugin {0} installed twice")]
    DuplicatePlugin(&'static str),

    #[error("Component {0} registered twice")]
    DuplicateComponent(String),

    #[error("Invalid route table: {0}")]
    InvalidRoutes(String),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_prefers_detail() {
        let err = ApiError::Server {
            status: 404,
            detail: json!({"detail": "Holding not found"}),
        };
        assert_eq!(err.message(), "Holding not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_server_message_falls_back_to_raw_text() {
        let err = ApiError::Server {
            status: 502,
            detail: json!("Bad Gateway"),
        };
        assert_eq!(err.message(), "Bad Gateway");
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.status(), None);
        assert!(err.message().contains("connection refused"));
    }

    #[test]
    fn test_status_message() {
        let err = ApiError::Server {
            status: 404,
            detail: json!({"detail": "Holding not found"}),
        };
        assert_eq!(err.status_message(), "404: Holding not found");
        assert_eq!(
            ApiError::Transport("connection refused".into()).status_message(),
            "Transport error: connection refused"
        );
    }
}
