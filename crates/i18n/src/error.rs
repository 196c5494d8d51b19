//! Error types raised while loading localization bundles.
//!
//! Every variant except [`L10nError::InvalidLocale`] is a configuration
//! defect: the bundles shipped with the application do not match the key
//! enums compiled into it. Callers are expected to abort rather than run with
//! a partially valid registry.

use std::path::PathBuf;

use thiserror::Error;

use crate::{Locale, Scope};

#[derive(Debug, Error)]
pub enum L10nError {
    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("no bundle for scope {scope} in locale {locale} (tried {})", .tried.join(", "))]
    BundleNotFound {
        scope: Scope,
        locale: Locale,
        tried: Vec<String>,
    },

    #[error("failed to read bundle {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bundle {bundle}: {message}")]
    Parse { bundle: String, message: String },

    #[error("scope {scope} in locale {locale} is missing keys: {}", .keys.join(", "))]
    MissingKeys {
        scope: Scope,
        locale: Locale,
        keys: Vec<String>,
    },

    #[error("scope {scope} in locale {locale} has unexpected keys: {}", .keys.join(", "))]
    UnexpectedKeys {
        scope: Scope,
        locale: Locale,
        keys: Vec<String>,
    },

    #[error("localizer lock was poisoned")]
    LockPoisoned,
}

impl L10nError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLocale(_) => "L10N_INVALID_LOCALE",
            Self::BundleNotFound { .. } => "L10N_BUNDLE_NOT_FOUND",
            Self::Read { .. } => "L10N_READ",
            Self::Parse { .. } => "L10N_PARSE",
            Self::MissingKeys { .. } => "L10N_MISSING_KEYS",
            Self::UnexpectedKeys { .. } => "L10N_UNEXPECTED_KEYS",
            Self::LockPoisoned => "L10N_LOCK_POISONED",
        }
    }
}

pub type Result<T> = std::result::Result<T, L10nError>;
