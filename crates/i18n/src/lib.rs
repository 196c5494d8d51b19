//! Enum-keyed localization for Burst.
//!
//! Translatable text is partitioned into [`Scope`]s. Each scope has exactly one
//! key enum (see [`scopes`]) whose variant names are the keys of that scope's
//! resource bundles. A [`Localizer`] loads one [`ScopeResource`] per scope for
//! the active [`Locale`], checks that every bundle matches its key enum
//! exactly, and then answers lookups without any further validation.
//!
//! ```no_run
//! use burst_i18n::{Locale, Localizer, scopes::Application};
//!
//! let localizer = Localizer::embedded(Locale::ENGLISH)?;
//! assert_eq!(localizer.get(Application::AppName), "Burst");
//!
//! localizer.set_locale(Locale::GERMAN)?;
//! assert_eq!(localizer.get(Application::WindowTitle), "Burst — Hauptfenster");
//! # Ok::<(), burst_i18n::L10nError>(())
//! ```
pub mod error;
pub mod locale;
pub mod localizer;
pub mod resource;
pub mod scope;
pub mod scopes;
pub mod sources;

pub use error::{L10nError, Result};
pub use locale::Locale;
pub use localizer::{LocaleSnapshot, Localizer};
pub use resource::ScopeResource;
pub use scope::{L10nKey, Scope};
pub use sources::{
    BundleFormat, BundleSource, DirectoryBundles, EmbeddedBundles, MemoryBundles, RawBundle,
};
