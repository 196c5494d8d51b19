//! Top-level client assembling localization and the board.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ Localizer (burst-i18n: enum-keyed strings for the active locale)
//!   └─→ Board     (burst-core: bubble grid with symmetric neighbour links)
//! ```
//!
//! The two layers are built independently from [`ClientConfig`] and never talk
//! to each other. Rendering and input live outside this crate.

mod builder;
pub mod config;
pub mod logging;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

use anyhow::Result;
use burst_core::{Board, BubbleColor};
use burst_i18n::Localizer;
use burst_i18n::scopes::{Application, Menu};

/// Top-level client container.
pub struct Client {
    localizer: Localizer,
    board: Board,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Print the localized title screen and a board summary.
    pub fn run(&self) -> Result<()> {
        let strings = self.localizer.snapshot();
        println!("{}", strings.get(Application::AppName));
        println!("{}", strings.get(Application::WindowTitle));
        println!(
            "[{}] [{}] [{}]",
            strings.get(Menu::NewGame),
            strings.get(Menu::Options),
            strings.get(Menu::Quit)
        );

        let filled = self
            .board
            .iter()
            .filter(|(_, bubble)| !bubble.is_empty())
            .count();
        tracing::info!(
            locale = %strings.locale(),
            dimension = self.board.dimension(),
            cells = self.board.cell_count(),
            filled,
            "Board ready"
        );

        for row in 0..self.board.dimension() {
            let line: String = (0..self.board.dimension())
                .map(|column| {
                    let color = self
                        .board
                        .color(burst_core::Position::new(row, column))
                        .ok()
                        .flatten();
                    color_glyph(color)
                })
                .collect();
            println!("{line}");
        }

        Ok(())
    }
}

fn color_glyph(color: Option<BubbleColor>) -> char {
    match color {
        Some(BubbleColor::Red) => 'R',
        Some(BubbleColor::Green) => 'G',
        Some(BubbleColor::Blue) => 'B',
        Some(BubbleColor::Yellow) => 'Y',
        Some(BubbleColor::Purple) => 'P',
        None => '.',
    }
}
