//! Client configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use burst_core::BoardConfig;
use burst_i18n::Locale;

/// Configuration required to assemble the client.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub locale: Locale,
    /// Load bundles from this directory instead of the embedded ones.
    pub l10n_dir: Option<PathBuf>,
    pub board: BoardConfig,
    /// Also write logs to `<log_dir>/burst.log`.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BURST_LOCALE` - Initial locale such as `en` or `de_DE` (default: en)
    /// - `BURST_L10N_DIR` - Bundle directory (default: embedded bundles)
    /// - `BURST_BOARD_CONFIG` - TOML file with board settings (optional)
    /// - `BURST_BOARD_DIMENSION` - Board dimension, overrides the file (default: 8)
    /// - `BURST_LOG_DIR` - Directory for the log file (default: stderr only)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(locale) = lookup("BURST_LOCALE") {
            config.locale = locale
                .parse::<Locale>()
                .with_context(|| format!("BURST_LOCALE={locale:?} is not a locale"))?;
        }

        config.l10n_dir = lookup("BURST_L10N_DIR").map(PathBuf::from);

        if let Some(path) = lookup("BURST_BOARD_CONFIG") {
            config.board = load_board_config(Path::new(&path))?;
        }

        if let Some(dimension) = parse_var::<usize, _>(&lookup, "BURST_BOARD_DIMENSION") {
            config.board.dimension = dimension.max(1);
        }

        config.log_dir = lookup("BURST_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }
}

/// Load board settings from a TOML file.
pub fn load_board_config(path: &Path) -> Result<BoardConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board config {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse board config {}", path.display()))
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.locale, Locale::ENGLISH);
        assert_eq!(config.board.dimension, BoardConfig::DEFAULT_DIMENSION);
        assert!(config.l10n_dir.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_locale_and_dimension() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BURST_LOCALE", "de-DE"),
            ("BURST_BOARD_DIMENSION", "0"),
        ]))
        .unwrap();
        assert_eq!(config.locale.to_string(), "de_DE");
        assert_eq!(config.board.dimension, 1);
    }

    #[test]
    fn invalid_locale_is_an_error() {
        assert!(ClientConfig::from_lookup(lookup(&[("BURST_LOCALE", "klingon")])).is_err());
    }

    #[test]
    fn board_file_is_overridden_by_dimension_variable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, "dimension = 6\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let config =
            ClientConfig::from_lookup(lookup(&[("BURST_BOARD_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.board.dimension, 6);

        let config = ClientConfig::from_lookup(lookup(&[
            ("BURST_BOARD_CONFIG", path.as_str()),
            ("BURST_BOARD_DIMENSION", "10"),
        ]))
        .unwrap();
        assert_eq!(config.board.dimension, 10);
    }
}
