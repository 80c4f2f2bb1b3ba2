// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SorterError (16 bytes)
//!                     |
//!      +--------+-----+----+------+-----+
//!      |        |          |      |     |
//!      v        v          v      v     v
//!   Config  Registry     Order   Fs    Io
//!     Box      Box        Box    Box   Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ParseError, InvalidValue
//!   Registry  SettingsNotFound, Decode, SchemaViolation
//!   Order     EmptyModList, NoEnabledMods   (fatal)
//!   Fs        NotFound, PermissionDenied, IoError
//! ```
//!
//! Missing descriptors, unresolved dependencies and key misses are not
//! errors: the passes log them and skip the step.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum SorterError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Registry or order file error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Ordering pipeline error.
    #[error("order error: {0}")]
    Order(#[from] Box<OrderError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SorterError {
                fn from(err: $error) -> Self {
                    SorterError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    RegistryError => Registry,
    OrderError => Order,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Registry Errors ---

/// Errors raised while locating or reading the launcher's JSON files.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No candidate directory contains the registry file.
    #[error("unable to locate {file} (searched: {searched})")]
    SettingsNotFound { file: String, searched: String },

    /// File content is not the expected JSON shape.
    #[error("could not decode '{path}': {message}")]
    Decode { path: String, message: String },

    /// The schema document itself is unusable.
    #[error("invalid schema '{path}': {message}")]
    InvalidSchema { path: String, message: String },

    /// The document does not satisfy the schema.
    #[error("'{path}' failed schema validation with {count} error(s)")]
    SchemaViolation { path: String, count: usize },
}

// --- Order Errors ---

/// Fatal conditions of the ordering pipeline.
///
/// Both variants mean there is nothing to order; the caller must not write
/// any output when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The package list entering the prefix swap is empty.
    #[error("no mod found in the registry")]
    EmptyModList,

    /// The launcher reports no enabled mods.
    #[error("no enabled_mods found in dlc_load.json")]
    NoEnabledMods,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error for `path`.
    pub fn from_io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}
