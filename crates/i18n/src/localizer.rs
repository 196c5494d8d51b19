//! The localization registry.
//!
//! # Concurrency
//!
//! The active state is an immutable [`LocaleSnapshot`] behind an
//! `RwLock<Arc<_>>`. Readers hold the read lock only to clone the `Arc`.
//! [`Localizer::set_locale`] builds the replacement snapshot without touching
//! that lock and then swaps it in with one assignment, so a reader sees either
//! every scope in the old locale or every scope in the new one. Concurrent
//! reloads are serialized by a separate mutex.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use strum::IntoEnumIterator;
use tracing::{error, info};

use crate::{
    BundleSource, EmbeddedBundles, L10nError, L10nKey, Locale, Result, Scope, ScopeResource,
};

/// Every scope's resource for a single locale.
#[derive(Debug)]
pub struct LocaleSnapshot {
    locale: Locale,
    /// Indexed by `Scope::as_index`.
    resources: Vec<ScopeResource>,
}

impl LocaleSnapshot {
    /// Loads and validates one resource per scope.
    pub fn load(source: &dyn BundleSource, locale: &Locale) -> Result<Self> {
        let resources = Scope::iter()
            .map(|scope| ScopeResource::load(source, scope, locale))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            locale: locale.clone(),
            resources,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn resource(&self, scope: Scope) -> &ScopeResource {
        &self.resources[scope.as_index()]
    }

    /// Translation of `key` in this snapshot's locale.
    ///
    /// # Panics
    ///
    /// Panics if the key is missing, which validated resources rule out.
    pub fn get<K: L10nKey>(&self, key: K) -> &str {
        self.resource(K::SCOPE).lookup(key)
    }
}

/// Enum-keyed string registry with runtime locale switching.
///
/// Owned by the composition root and shared by reference (or `Arc`); there is
/// no global instance.
pub struct Localizer {
    source: Box<dyn BundleSource>,
    current: RwLock<Arc<LocaleSnapshot>>,
    reload: Mutex<()>,
}

impl Localizer {
    /// Creates the registry and loads every scope for `locale`.
    ///
    /// Fails if any scope's bundles are missing, unreadable, malformed or do
    /// not match the scope's key enum.
    pub fn new<S>(source: S, locale: Locale) -> Result<Self>
    where
        S: BundleSource + 'static,
    {
        let snapshot = LocaleSnapshot::load(&source, &locale).inspect_err(|e| {
            error!(source = %source.describe(), %locale, error = %e, "failed to load bundles");
        })?;
        info!(source = %source.describe(), %locale, "localizer initialized");

        Ok(Self {
            source: Box::new(source),
            current: RwLock::new(Arc::new(snapshot)),
            reload: Mutex::new(()),
        })
    }

    /// Creates a registry backed by the bundles embedded in this crate.
    pub fn embedded(locale: Locale) -> Result<Self> {
        Self::new(EmbeddedBundles, locale)
    }

    /// Discards every loaded resource and reloads all scopes for `locale`.
    ///
    /// The switch is atomic for readers. On error the previous locale stays
    /// active and the error is returned; callers treat it as fatal.
    pub fn set_locale(&self, locale: Locale) -> Result<()> {
        let _reload = self.reload.lock().map_err(|_| L10nError::LockPoisoned)?;

        let snapshot = LocaleSnapshot::load(self.source.as_ref(), &locale).inspect_err(|e| {
            error!(%locale, error = %e, "locale switch failed, keeping previous locale");
        })?;

        let mut current = self.current.write().map_err(|_| L10nError::LockPoisoned)?;
        let previous = std::mem::replace(&mut *current, Arc::new(snapshot));
        drop(current);

        info!(from = %previous.locale, to = %locale, "locale switched");
        Ok(())
    }

    /// Translation of `key` in the active locale.
    ///
    /// # Panics
    ///
    /// Panics if the key is missing from its scope's resource. Resources are
    /// validated on load, so this indicates a bug rather than bad data.
    pub fn get<K: L10nKey>(&self, key: K) -> String {
        self.snapshot().get(key).to_owned()
    }

    /// Consistent view of the active locale for a batch of lookups.
    pub fn snapshot(&self) -> Arc<LocaleSnapshot> {
        // A swap is a single assignment, so a poisoned lock still guards a
        // complete snapshot.
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn locale(&self) -> Locale {
        self.snapshot().locale.clone()
    }
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("source", &self.source.describe())
            .field("locale", &self.locale())
            .finish()
    }
}
