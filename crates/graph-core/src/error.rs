// File: crates/graph-core/src/error.rs
// Summary: Error type shared by the registry, controller, configuration and raster backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Scenario / illustration identifier not present in the registry.
    #[error("unknown scenario '{0}'")]
    NotFound(String),
    #[error("unknown control action '{0}' (expected points, line or reset)")]
    UnknownAction(String),
    #[error("invalid color literal '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),
    #[error("invalid axis: {0}")]
    InvalidAxis(String),
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Raster surface creation, pixel readback or PNG encoding failed.
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
