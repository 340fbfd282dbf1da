//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name that is not part of the level table
    #[error("Unknown log level: '{name}'")]
    UnknownLevel { name: String },

    /// A sink failed to write a line
    #[error("Failed to write to {sink} sink: {source}")]
    SinkWrite {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// The sink's background worker is gone
    #[error("The {sink} sink is closed")]
    SinkClosed { sink: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an unknown level error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { name: name.into() }
    }

    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            sink: sink.into(),
            source,
        }
    }

    /// Create a closed sink error
    pub fn sink_closed(sink: impl Into<String>) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a sink at runtime rather than from configuration
    pub fn is_sink_error(&self) -> bool {
        matches!(
            self,
            LoggerError::SinkWrite { .. } | LoggerError::SinkClosed { .. } | LoggerError::Io(_)
        )
    }
}
