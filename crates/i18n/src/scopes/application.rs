use crate::{L10nKey, Scope};

/// Keys of application scope: names and titles shown by the shell.
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
pub enum Application {
    AppName,
    WindowTitle,
}

impl L10nKey for Application {
    const SCOPE: Scope = Scope::Application;
}
