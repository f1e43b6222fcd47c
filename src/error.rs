//! Error taxonomy for the read → infer → print pipeline.
use std::path::PathBuf;
use thiserror::Error;

/// Settings that cannot be honoured. Always raised before any input is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("language '{0}' is not supported (expected python, typescript or csharp)")]
    UnsupportedLanguage(String),

    #[error("the {style} style is only available for python, not {language}")]
    StyleNotSupported { style: &'static str, language: &'static str },

    #[error("optional fields are not supported for {0}")]
    OptionalNotSupported(&'static str),

    #[error("root type name must not be empty")]
    EmptyRootName,
}

/// Failures at the I/O boundary, before the document reaches inference.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] std::io::Error),

    #[error("failed to parse JSON from {origin}: at JSON path {path} → {message}")]
    Parse {
        origin: String,
        path: String,
        message: String,
    },

    #[error("JSON pointer {0} does not match any node")]
    PointerNotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferError {
    /// A node that needs a class name was reached through a key that
    /// converts to an empty identifier (`""`, `"__"`, ...).
    #[error("cannot derive a type name from key '{key}' for the node at '{pointer}'")]
    EmptyName { pointer: String, key: String },
}

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Stream(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Infer(#[from] InferError),
    #[error(transparent)]
    Print(#[from] PrintError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
