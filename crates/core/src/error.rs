use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum NetuseError {
    #[error("config error: {0}")]
    Config(String),

    #[error("counter source error: {0}")]
    Counter(String),

    #[error("no wireless interface (name starting with '{0}') in {1}")]
    NoWirelessInterface(String, String),

    #[error("window error: {0}")]
    Window(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = NetuseError> = std::result::Result<T, E>;
