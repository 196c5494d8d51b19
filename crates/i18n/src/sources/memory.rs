use std::borrow::Cow;
use std::collections::HashMap;

use super::{BundleFormat, BundleSource, RawBundle};
use crate::Result;

/// Source holding bundles registered at runtime, mostly for tests and tools.
#[derive(Clone, Debug, Default)]
pub struct MemoryBundles {
    bundles: HashMap<String, RawBundle>,
}

impl MemoryBundles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the bundle called `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        format: BundleFormat,
        text: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let bundle = RawBundle::new(name, format, text);
        self.bundles.insert(bundle.name.clone(), bundle);
        self
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(
        mut self,
        name: impl Into<String>,
        format: BundleFormat,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(name, format, text);
        self
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl BundleSource for MemoryBundles {
    fn fetch(&self, name: &str) -> Result<Option<RawBundle>> {
        Ok(self.bundles.get(name).cloned())
    }

    fn describe(&self) -> String {
        format!("{} in-memory bundles", self.bundles.len())
    }
}
