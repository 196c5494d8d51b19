//! Scopes and the key trait that ties each key enum to its scope.

use strum::VariantNames;

use crate::scopes;

/// Named partition of translatable text.
///
/// The variant name is both the name of the key enum in [`scopes`] and the
/// base name of the scope's bundle files (`Application_en.toml`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum Scope {
    Application,
    Menu,
}

impl Scope {
    /// Bundle base name of this scope.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Key names every bundle of this scope must define, in declaration order.
    ///
    /// This match is the registration table from scopes to key enums: adding a
    /// scope without a key enum does not compile.
    pub fn key_names(self) -> &'static [&'static str] {
        match self {
            Scope::Application => scopes::Application::VARIANTS,
            Scope::Menu => scopes::Menu::VARIANTS,
        }
    }

    #[inline]
    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }
}

/// A localization key: one variant of a scope's key enum.
///
/// Implemented by the enums in [`scopes`]. The key's name is its variant name,
/// matched case-sensitively against bundle entries.
pub trait L10nKey: Copy + Into<&'static str> + VariantNames + 'static {
    /// Scope every key of this enum belongs to.
    const SCOPE: Scope;

    fn name(self) -> &'static str {
        self.into()
    }

    fn scope(self) -> Scope {
        Self::SCOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn indices_follow_declaration_order() {
        for (index, scope) in Scope::iter().enumerate() {
            assert_eq!(scope.as_index(), index);
        }
        assert_eq!(Scope::COUNT, Scope::iter().count());
    }

    #[test]
    fn scope_names_match_variants() {
        assert_eq!(Scope::Application.name(), "Application");
        assert_eq!("Menu".parse::<Scope>(), Ok(Scope::Menu));
    }

    #[test]
    fn every_scope_has_keys() {
        for scope in Scope::iter() {
            assert!(!scope.key_names().is_empty(), "{scope} has no keys");
        }
    }
}
