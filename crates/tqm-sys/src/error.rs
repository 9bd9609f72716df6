use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TqmError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    #[error("Authorization error: {0}")]
    Auth(#[from] AuthError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read slot '{key}': {source}")]
    ReadSlot {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write slot '{key}': {source}")]
    WriteSlot {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize collection '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Failed to parse backup JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backup file is missing the required collections (products and team)")]
    MissingCollections,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Incorrect password")]
    WrongSecret,

    #[error("No action is pending confirmation")]
    NothingPending,
}

pub type Result<T> = std::result::Result<T, TqmError>;
