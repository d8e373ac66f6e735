//! The served-city registry.
//!
//! Cities are loaded once per build from `content/cities.toml` and are
//! immutable thereafter. The same set applies to every locale — only the
//! prose around a city changes with the dictionary. Each city carries a
//! URL slug, a display name, and a grammatically conjugated form for
//! embedding in templated Polish sentences ("w Poznaniu").

use serde::Deserialize;
use std::collections::BTreeMap;

/// A city the company serves.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct City {
    /// URL-safe unique identifier (`poznan`, `grodzisk-wielkopolski`).
    pub slug: String,
    /// Nominative display name ("Poznań").
    pub name: String,
    /// Locative phrase for templated copy ("w Poznaniu").
    pub conjugation: String,
}

impl City {
    /// Substitute this city into a dictionary template.
    ///
    /// `{city}` becomes the conjugated form, `{city_name}` the display name.
    pub fn fill(&self, template: &str) -> String {
        template
            .replace("{city}", &self.conjugation)
            .replace("{city_name}", &self.name)
    }
}

/// Immutable city registry. Slugs are unique (validated at load).
#[derive(Debug, Clone, Default)]
pub struct Cities {
    cities: Vec<City>,
}

impl Cities {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// The full city set, in content-file order.
    pub fn all(&self) -> &[City] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Exact-match slug lookup. A miss is a normal, expected outcome that
    /// callers handle by producing a not-found page.
    pub fn find(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == slug)
    }

    /// Group cities by the first letter of their display name, names
    /// sorted within each group. Drives the alphabetical directory on
    /// the home page.
    pub fn grouped(&self) -> BTreeMap<char, Vec<&City>> {
        let mut groups: BTreeMap<char, Vec<&City>> = BTreeMap::new();
        for city in &self.cities {
            let letter = city
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().next().unwrap_or(c))
                .unwrap_or('?');
            groups.entry(letter).or_default().push(city);
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| a.name.cmp(&b.name));
        }
        groups
    }
}
