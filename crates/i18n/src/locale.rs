//! Language/region identifiers and bundle name resolution.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::L10nError;

/// A language with an optional country, e.g. `en` or `de_DE`.
///
/// The language is stored lowercase and the country uppercase, so `de-de`,
/// `DE_de` and `de_DE` all parse to the same locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Cow<'static, str>,
    country: Option<Cow<'static, str>>,
}

impl Locale {
    pub const ENGLISH: Locale = Locale::from_static("en");
    pub const GERMAN: Locale = Locale::from_static("de");

    const fn from_static(language: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            country: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Bundle names to try for `base`, most specific first:
    /// `base_de_DE`, `base_de`, `base`.
    pub fn candidate_names(&self, base: &str) -> Vec<String> {
        let mut names = Vec::with_capacity(3);
        if let Some(country) = &self.country {
            names.push(format!("{base}_{}_{country}", self.language));
        }
        names.push(format!("{base}_{}", self.language));
        names.push(base.to_owned());
        names
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{country}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = L10nError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || L10nError::InvalidLocale(value.to_owned());

        let mut parts = value.trim().split(['_', '-']);
        let language = parts.next().filter(|lang| is_language(lang)).ok_or_else(invalid)?;
        let country = match parts.next() {
            Some(country) if is_country(country) => Some(country.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            language: Cow::Owned(language.to_ascii_lowercase()),
            country: country.map(Cow::Owned),
        })
    }
}

fn is_language(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_country(part: &str) -> bool {
    (part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()))
        || (part.len() == 3 && part.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes() {
        let locale: Locale = "DE-at".parse().unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.country(), Some("AT"));
        assert_eq!(locale.to_string(), "de_AT");

        assert_eq!("en".parse::<Locale>().unwrap(), Locale::ENGLISH);
        assert_eq!("es_419".parse::<Locale>().unwrap().country(), Some("419"));
    }

    #[test]
    fn rejects_malformed_locales() {
        for value in ["", "e", "english", "de_DEU", "de_DE_x", "d3"] {
            assert!(
                matches!(value.parse::<Locale>(), Err(L10nError::InvalidLocale(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn candidates_go_from_specific_to_general() {
        let locale: Locale = "de_DE".parse().unwrap();
        assert_eq!(
            locale.candidate_names("Application"),
            vec!["Application_de_DE", "Application_de", "Application"]
        );
        assert_eq!(
            Locale::ENGLISH.candidate_names("Menu"),
            vec!["Menu_en", "Menu"]
        );
    }
}
