//! Validated string table of one scope in one locale.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::{BundleSource, L10nError, L10nKey, Locale, Result, Scope};

/// Immutable mapping from every key of one scope to its translation.
///
/// Construction guarantees the key set equals [`Scope::key_names`]: nothing
/// missing, nothing extra. Lookups for a key of this scope therefore never
/// miss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeResource {
    scope: Scope,
    locale: Locale,
    strings: HashMap<&'static str, String>,
}

impl ScopeResource {
    /// Builds a resource from a parsed table, checking it matches the scope's
    /// key set exactly.
    pub fn new(scope: Scope, locale: Locale, mut table: BTreeMap<String, String>) -> Result<Self> {
        let names = scope.key_names();

        let missing: Vec<String> = names
            .iter()
            .filter(|name| !table.contains_key(**name))
            .map(|name| (*name).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(L10nError::MissingKeys {
                scope,
                locale,
                keys: missing,
            });
        }

        let unexpected: Vec<String> = table
            .keys()
            .filter(|key| !names.contains(&key.as_str()))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(L10nError::UnexpectedKeys {
                scope,
                locale,
                keys: unexpected,
            });
        }

        let strings = names
            .iter()
            .filter_map(|name| table.remove(*name).map(|value| (*name, value)))
            .collect();

        Ok(Self {
            scope,
            locale,
            strings,
        })
    }

    /// Loads the bundle chain for `scope` and `locale` from `source`.
    ///
    /// The most general bundle (`Application`) is read first and each more
    /// specific one (`Application_de`, `Application_de_AT`) overrides its
    /// entries. At least one bundle of the chain must exist; the merged table
    /// is then validated by [`ScopeResource::new`].
    pub fn load(source: &dyn BundleSource, scope: Scope, locale: &Locale) -> Result<Self> {
        let candidates = locale.candidate_names(scope.name());
        let mut table = BTreeMap::new();
        let mut found = false;

        for name in candidates.iter().rev() {
            let Some(bundle) = source.fetch(name)? else {
                continue;
            };
            let entries = bundle.parse()?;
            debug!(
                bundle = %name,
                format = %bundle.format,
                entries = entries.len(),
                "loaded bundle"
            );
            table.extend(entries);
            found = true;
        }

        if !found {
            return Err(L10nError::BundleNotFound {
                scope,
                locale: locale.clone(),
                tried: candidates,
            });
        }

        Self::new(scope, locale.clone(), table)
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Translation of the key called `name`, if it belongs to this scope.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// Translation of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` belongs to another scope or the entry is absent, both of
    /// which are ruled out for resources built through [`ScopeResource::new`].
    pub fn lookup<K: L10nKey>(&self, key: K) -> &str {
        assert_eq!(
            K::SCOPE,
            self.scope,
            "key {} looked up in the wrong scope",
            key.name()
        );
        self.get(key.name()).unwrap_or_else(|| {
            panic!(
                "key {}::{} missing from {} resource",
                self.scope,
                key.name(),
                self.locale
            )
        })
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Entries in key declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.scope
            .key_names()
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scopes::Application;
    use crate::{BundleFormat, MemoryBundles};

    fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn exact_key_set_is_accepted() {
        let resource = ScopeResource::new(
            Scope::Application,
            Locale::ENGLISH,
            table(&[("AppName", "Burst"), ("WindowTitle", "Burst — Main Window")]),
        )
        .unwrap();

        assert_eq!(resource.len(), 2);
        assert_eq!(resource.lookup(Application::AppName), "Burst");
        assert_eq!(
            resource.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["AppName", "WindowTitle"]
        );
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = ScopeResource::new(
            Scope::Application,
            Locale::ENGLISH,
            table(&[("AppName", "Burst")]),
        )
        .unwrap_err();
        assert!(
            matches!(&err, L10nError::MissingKeys { keys, .. } if keys == &["WindowTitle"]),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn extra_key_is_rejected() {
        let err = ScopeResource::new(
            Scope::Application,
            Locale::ENGLISH,
            table(&[("AppName", "a"), ("WindowTitle", "b"), ("Version", "c")]),
        )
        .unwrap_err();
        assert!(
            matches!(&err, L10nError::UnexpectedKeys { keys, .. } if keys == &["Version"]),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn key_names_are_case_sensitive() {
        let err = ScopeResource::new(
            Scope::Application,
            Locale::ENGLISH,
            table(&[("appname", "a"), ("WindowTitle", "b")]),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "L10N_MISSING_KEYS");
    }

    #[test]
    fn specific_bundle_overrides_parent() {
        let source = MemoryBundles::new()
            .with(
                "Application_de",
                BundleFormat::Toml,
                "AppName = \"Burst\"\nWindowTitle = \"Burst — Hauptfenster\"\n",
            )
            .with(
                "Application_de_AT",
                BundleFormat::Toml,
                "WindowTitle = \"Burst — Hauptfenster (AT)\"\n",
            );
        let locale: Locale = "de_AT".parse().unwrap();

        let resource = ScopeResource::load(&source, Scope::Application, &locale).unwrap();
        assert_eq!(resource.get("AppName"), Some("Burst"));
        assert_eq!(resource.get("WindowTitle"), Some("Burst — Hauptfenster (AT)"));
        assert_eq!(resource.locale(), &locale);
    }

    #[test]
    fn absent_chain_is_bundle_not_found() {
        let err = ScopeResource::load(&MemoryBundles::new(), Scope::Menu, &Locale::GERMAN)
            .unwrap_err();
        assert!(
            matches!(&err, L10nError::BundleNotFound { tried, .. } if tried == &["Menu_de", "Menu"]),
            "unexpected error: {err}"
        );
    }

    #[test]
    #[should_panic(expected = "wrong scope")]
    fn lookup_in_foreign_scope_panics() {
        let resource = ScopeResource::new(
            Scope::Menu,
            Locale::ENGLISH,
            table(&[("NewGame", "a"), ("Options", "b"), ("Quit", "c")]),
        )
        .unwrap();
        resource.lookup(Application::AppName);
    }
}
