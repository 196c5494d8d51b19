use std::borrow::Cow;

use super::{BundleFormat, BundleSource, RawBundle};
use crate::Result;

/// Bundles compiled into the binary from `crates/i18n/data/`.
const EMBEDDED: &[(&str, BundleFormat, &str)] = &[
    (
        "Application_en",
        BundleFormat::Toml,
        include_str!("../../data/Application_en.toml"),
    ),
    (
        "Application_de",
        BundleFormat::Toml,
        include_str!("../../data/Application_de.toml"),
    ),
    (
        "Menu_en",
        BundleFormat::Ron,
        include_str!("../../data/Menu_en.ron"),
    ),
    (
        "Menu_de",
        BundleFormat::Ron,
        include_str!("../../data/Menu_de.ron"),
    ),
];

/// Source backed by the bundles shipped with the crate (English and German).
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedBundles;

impl EmbeddedBundles {
    /// Names of all embedded bundles.
    pub fn names() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(name, _, _)| *name)
    }
}

impl BundleSource for EmbeddedBundles {
    fn fetch(&self, name: &str) -> Result<Option<RawBundle>> {
        Ok(EMBEDDED
            .iter()
            .find(|(candidate, _, _)| *candidate == name)
            .map(|(name, format, text)| RawBundle::new(*name, *format, Cow::Borrowed(*text))))
    }

    fn describe(&self) -> String {
        "embedded bundles".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_bundle_parses() {
        for name in EmbeddedBundles::names() {
            let bundle = EmbeddedBundles.fetch(name).unwrap().unwrap();
            bundle
                .parse()
                .unwrap_or_else(|e| panic!("embedded bundle {name} is broken: {e}"));
        }
    }

    #[test]
    fn unknown_bundle_is_none() {
        assert_eq!(EmbeddedBundles.fetch("Application_fr").unwrap(), None);
    }
}
