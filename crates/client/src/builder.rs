//! Client builder wiring configuration into the localizer and the board.

use anyhow::{Context, Result};
use burst_core::{Board, BubbleColor};
use burst_i18n::{DirectoryBundles, Localizer};

use crate::{Client, ClientConfig};

/// Builder for constructing a Client with proper validation.
///
/// Every failure here is fatal for the binary: a localizer that does not load
/// completely is never handed out.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any localization bundle is missing or does not match its key enum
    /// - The configured board dimension is invalid
    pub fn build(self) -> Result<Client> {
        let ClientConfig {
            locale,
            l10n_dir,
            board: board_config,
            ..
        } = self.config;

        let localizer = match l10n_dir {
            Some(dir) => {
                tracing::debug!("Loading bundles from {}", dir.display());
                Localizer::new(DirectoryBundles::new(&dir), locale)
                    .with_context(|| format!("Failed to load bundles from {}", dir.display()))?
            }
            None => Localizer::embedded(locale).context("Failed to load embedded bundles")?,
        };

        let mut board = Board::with_config(&board_config).context("Invalid board config")?;
        board.link_grid();
        // Diagonal stripes until gameplay assigns real colors.
        board.fill_with(|pos| {
            Some(BubbleColor::ALL[(pos.row + pos.column) % BubbleColor::ALL.len()])
        });

        Ok(Client { localizer, board })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burst_core::{BoardConfig, Direction, Position};
    use burst_i18n::Locale;
    use burst_i18n::scopes::Application;

    #[test]
    fn default_build_uses_embedded_english() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.localizer().get(Application::AppName), "Burst");
        assert_eq!(client.board().dimension(), BoardConfig::DEFAULT_DIMENSION);
    }

    #[test]
    fn board_is_linked_and_colored() {
        let client = ClientBuilder::new().build().unwrap();
        let board = client.board();

        assert!(board.is_symmetric());
        assert_eq!(
            board.neighbour(Position::new(3, 5), Direction::North).unwrap(),
            Some(Position::new(2, 5))
        );
        assert!(board.iter().all(|(_, bubble)| !bubble.is_empty()));
    }

    #[test]
    fn missing_bundle_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            l10n_dir: Some(dir.path().to_path_buf()),
            ..ClientConfig::default()
        };
        assert!(ClientBuilder::new().config(config).build().is_err());
    }

    #[test]
    fn configured_locale_is_active() {
        let config = ClientConfig {
            locale: Locale::GERMAN,
            ..ClientConfig::default()
        };
        let client = ClientBuilder::new().config(config).build().unwrap();
        assert_eq!(
            client.localizer().get(Application::WindowTitle),
            "Burst — Hauptfenster"
        );
    }
}
