//! Bundle sources.
//!
//! A [`BundleSource`] hands out raw bundle text by bundle name
//! (`Application_de`). Parsing and validation happen in
//! [`ScopeResource::load`](crate::ScopeResource::load), so every source gets
//! the same checks.

mod directory;
mod embedded;
mod memory;

use std::borrow::Cow;
use std::collections::BTreeMap;

pub use directory::DirectoryBundles;
pub use embedded::EmbeddedBundles;
pub use memory::MemoryBundles;

use crate::{L10nError, Result};

/// Source of raw bundle text, looked up by bundle name without extension.
pub trait BundleSource: Send + Sync {
    /// Returns the bundle called `name`, or `None` if this source has none.
    fn fetch(&self, name: &str) -> Result<Option<RawBundle>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// On-disk syntax of a bundle. Both are flat `key = string` tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BundleFormat {
    Toml,
    Ron,
}

impl BundleFormat {
    /// Lookup order when a source offers several formats.
    pub const ALL: [BundleFormat; 2] = [BundleFormat::Toml, BundleFormat::Ron];

    pub const fn extension(self) -> &'static str {
        match self {
            BundleFormat::Toml => "toml",
            BundleFormat::Ron => "ron",
        }
    }

    /// Parses `text` into a key → string table.
    pub fn parse(self, bundle: &str, text: &str) -> Result<BTreeMap<String, String>> {
        let parse_error = |message: String| L10nError::Parse {
            bundle: format!("{bundle}.{}", self.extension()),
            message,
        };
        match self {
            BundleFormat::Toml => toml::from_str(text).map_err(|e| parse_error(e.to_string())),
            BundleFormat::Ron => ron::from_str(text).map_err(|e| parse_error(e.to_string())),
        }
    }
}

/// Unparsed bundle as handed out by a source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBundle {
    pub name: String,
    pub format: BundleFormat,
    pub text: Cow<'static, str>,
}

impl RawBundle {
    pub fn new(
        name: impl Into<String>,
        format: BundleFormat,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            format,
            text: text.into(),
        }
    }

    pub fn parse(&self) -> Result<BTreeMap<String, String>> {
        self.format.parse(&self.name, &self.text)
    }
}
