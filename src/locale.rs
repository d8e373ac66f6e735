//! Supported locales and locale resolution.
//!
//! The site is built in Polish and English. Polish is the default: any
//! locale code that does not match a supported locale resolves to it, so
//! every content lookup ends at a defined locale. URL prefixes, `lang`
//! attributes, and Open Graph locale tags all derive from this enum.

use std::fmt;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// Polish — the default locale. Its dictionary is always complete.
    Pl,
    /// English.
    En,
}

impl Locale {
    /// All supported locales, in URL/sitemap enumeration order.
    pub const ALL: [Locale; 2] = [Locale::Pl, Locale::En];

    /// The default locale, used whenever a code cannot be resolved.
    pub const DEFAULT: Locale = Locale::Pl;

    /// The URL prefix and `lang` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    /// Exact-match parse. A miss is a normal outcome for route lookups.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.iter().copied().find(|l| l.as_str() == code)
    }

    /// Total resolution: unsupported codes fall back to the default locale.
    pub fn resolve(code: &str) -> Locale {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// Open Graph locale tag (`og:locale`).
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Pl => "pl_PL",
            Locale::En => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
