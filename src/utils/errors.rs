use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Usage: liftdrag [resource_directory]")]
    Usage,

    #[error("Resource directory not found: {0}")]
    ResourceDirNotFound(PathBuf),

    #[error("Failed to load model: {0}")]
    ModelNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Application exited with code {0}")]
    AppExit(u8),
}

pub type Result<T> = std::result::Result<T, SimError>;
