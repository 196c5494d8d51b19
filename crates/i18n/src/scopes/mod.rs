//! Key enums, one per [`Scope`](crate::Scope).
mod application;
mod menu;

pub use application::Application;
pub use menu::Menu;

#[cfg(test)]
mod tests {
    use strum::VariantNames;

    use super::*;
    use crate::L10nKey;

    fn assert_registered<K: L10nKey>() {
        assert_eq!(K::SCOPE.key_names(), K::VARIANTS);
    }

    #[test]
    fn key_enums_match_registration_table() {
        assert_registered::<Application>();
        assert_registered::<Menu>();
    }

    #[test]
    fn key_names_are_exact_variant_names() {
        assert_eq!(Application::AppName.name(), "AppName");
        assert_eq!(Application::WindowTitle.name(), "WindowTitle");
        assert_eq!(Menu::NewGame.name(), "NewGame");
    }
}
