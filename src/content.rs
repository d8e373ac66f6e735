//! Content loading and validation.
//!
//! Stage 1 of the build pipeline. Reads the content directory into
//! immutable in-memory registries that the rest of the build queries
//! through accessor functions — nothing downstream touches the filesystem
//! for content again.
//!
//! ## Content Directory Layout
//!
//! ```text
//! content/
//! ├── config.toml          # Site config (optional, merged over defaults)
//! ├── dictionary.pl.toml   # Polish dictionary (required, must be complete)
//! ├── dictionary.en.toml   # English dictionary (optional, sparse allowed)
//! ├── cities.toml          # Served cities (optional; empty set allowed)
//! ├── jobs.toml            # Job postings (optional; empty set allowed)
//! ├── terms.pl.md          # Terms-of-service body, per locale (optional)
//! └── terms.en.md
//! ```
//!
//! ## Validation
//!
//! The loader enforces:
//! - the default locale's dictionary is fully populated
//! - city slugs are unique across the set
//! - job posting ids are unique
//!
//! An empty city or job collection is valid content, handled downstream by
//! the placeholder-path policy in [`crate::routes`].

use crate::cities::{Cities, City};
use crate::config::{self, ConfigError, SiteConfig};
use crate::dictionary::{Dictionaries, Dictionary};
use crate::jobs::{JobPosting, Jobs};
use crate::locale::Locale;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Missing required content file: {0}")]
    MissingFile(PathBuf),
    #[error("Default-locale dictionary is incomplete: field '{0}' is empty")]
    IncompleteDictionary(String),
    #[error("Duplicate city slug: {0}")]
    DuplicateCitySlug(String),
    #[error("Duplicate job id: {0}")]
    DuplicateJobId(String),
}

/// Everything a build needs, loaded once and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: SiteConfig,
    pub dictionaries: Dictionaries,
    pub cities: Cities,
    pub jobs: Jobs,
    /// Raw markdown bodies for the terms-of-service page, keyed by locale.
    /// A missing file is an empty body — the page still renders from the
    /// dictionary introduction.
    pub terms: BTreeMap<Locale, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CitiesFile {
    cities: Vec<City>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct JobsFile {
    jobs: Vec<JobPosting>,
}

impl Content {
    /// Load and validate the whole content directory.
    pub fn load(root: &Path) -> Result<Content, ContentError> {
        let config = config::load_config(root)?;

        let pl = load_dictionary(root, Locale::Pl)?
            .ok_or_else(|| ContentError::MissingFile(dictionary_path(root, Locale::Pl)))?;
        pl.check_complete()
            .map_err(ContentError::IncompleteDictionary)?;
        let en = load_dictionary(root, Locale::En)?.unwrap_or_default();
        let dictionaries = Dictionaries::new(pl, en);

        let cities_file: CitiesFile = load_toml_or_default(&root.join("cities.toml"))?;
        check_unique(
            cities_file.cities.iter().map(|c| c.slug.as_str()),
            ContentError::DuplicateCitySlug,
        )?;
        let cities = Cities::new(cities_file.cities);

        let jobs_file: JobsFile = load_toml_or_default(&root.join("jobs.toml"))?;
        check_unique(
            jobs_file.jobs.iter().map(|j| j.id.as_str()),
            ContentError::DuplicateJobId,
        )?;
        let jobs = Jobs::new(jobs_file.jobs);

        let mut terms = BTreeMap::new();
        for locale in Locale::ALL {
            let path = root.join(format!("terms.{locale}.md"));
            let body = match fs::read_to_string(&path) {
                Ok(body) => body,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                Err(e) => return Err(ContentError::Io { path, source: e }),
            };
            terms.insert(locale, body);
        }

        Ok(Content {
            config,
            dictionaries,
            cities,
            jobs,
            terms,
        })
    }
}

fn dictionary_path(root: &Path, locale: Locale) -> PathBuf {
    root.join(format!("dictionary.{locale}.toml"))
}

fn load_dictionary(root: &Path, locale: Locale) -> Result<Option<Dictionary>, ContentError> {
    let path = dictionary_path(root, locale);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;
    let dict = toml::from_str(&raw).map_err(|source| ContentError::Toml { path, source })?;
    Ok(Some(dict))
}

/// Parse a TOML collection file, treating a missing file as the empty
/// collection (valid content — see the placeholder-path policy).
fn load_toml_or_default<T: Default + for<'de> Deserialize<'de>>(
    path: &Path,
) -> Result<T, ContentError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn check_unique<'a>(
    keys: impl Iterator<Item = &'a str>,
    make_err: impl Fn(String) -> ContentError,
) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(make_err(key.to_string()));
        }
    }
    Ok(())
}
