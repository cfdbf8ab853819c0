use serde::Serialize;
use std::fmt;

/// Cookie the CMS sets when a visitor switches language.
pub const LOCALE_COOKIE: &str = "django_language";

/// Site languages. Every API path and translation table is keyed by one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Uz,
    Ru,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Parses a language tag. Only the primary subtag is looked at, so
    /// `ru-RU` and `RU` both give `Locale::Ru`.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code.trim().split(['-', '_']).next()?;
        match primary.to_ascii_lowercase().as_str() {
            "uz" => Some(Locale::Uz),
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Uz, Locale::Ru, Locale::En]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Candidate language values, highest precedence first.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocaleSources<'a> {
    /// Language declared by the page itself.
    pub page: Option<&'a str>,
    /// Site-wide configured language.
    pub global: Option<&'a str>,
    /// Value of the [`LOCALE_COOKIE`] cookie.
    pub cookie: Option<&'a str>,
}

/// Picks the first source holding a known language, else [`Locale::default`].
pub fn resolve(sources: LocaleSources<'_>) -> Locale {
    [sources.page, sources.global, sources.cookie]
        .into_iter()
        .flatten()
        .find_map(Locale::from_code)
        .unwrap_or_default()
}
