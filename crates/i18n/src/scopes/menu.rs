use crate::{L10nKey, Scope};

/// Keys of the main menu.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
pub enum Menu {
    NewGame,
    Options,
    Quit,
}

impl L10nKey for Menu {
    const SCOPE: Scope = Scope::Menu;
}
