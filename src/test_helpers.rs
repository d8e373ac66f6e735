//! Shared test utilities for the matbud-site test suite.
//!
//! Provides fixture setup (an isolated copy of `fixtures/content/`) and
//! in-memory sample builders for the registries, so unit tests can
//! exercise rendering and metadata synthesis without touching the
//! filesystem.

use std::path::Path;
use tempfile::TempDir;

use crate::cities::{Cities, City};
use crate::config::SiteConfig;
use crate::content::Content;
use crate::dictionary::{Dictionaries, Dictionary};
use crate::jobs::{JobPosting, JobType, Jobs};
use crate::locale::Locale;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// In-memory sample builders
// =========================================================================

/// The fixture Polish dictionary, parsed from the checked-in fixture file.
pub fn sample_dictionary() -> Dictionary {
    toml::from_str(include_str!("../fixtures/content/dictionary.pl.toml")).unwrap()
}

/// The fixture English dictionary (sparse on purpose).
pub fn sample_dictionary_en() -> Dictionary {
    toml::from_str(include_str!("../fixtures/content/dictionary.en.toml")).unwrap()
}

pub fn sample_cities() -> Cities {
    Cities::new(vec![
        City {
            slug: "poznan".into(),
            name: "Poznań".into(),
            conjugation: "w Poznaniu".into(),
        },
        City {
            slug: "leszno".into(),
            name: "Leszno".into(),
            conjugation: "w Lesznie".into(),
        },
        City {
            slug: "grodzisk-wielkopolski".into(),
            name: "Grodzisk Wielkopolski".into(),
            conjugation: "w Grodzisku Wielkopolskim".into(),
        },
    ])
}

pub fn sample_job(id: &str, active: bool) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: "Serwisant systemów SSP".into(),
        description: "Serwis i konserwacja systemów sygnalizacji pożaru.".into(),
        location: "Grodzisk Wielkopolski".into(),
        experience: "2+ lata".into(),
        job_type: JobType::FullTime,
        requirements: vec!["Uprawnienia SEP do 1 kV".into()],
        responsibilities: vec!["Przeglądy okresowe instalacji SSP".into()],
        benefits: vec!["Samochód służbowy".into()],
        is_active: active,
    }
}

pub fn sample_jobs() -> Jobs {
    Jobs::new(vec![
        sample_job("serwisant-ssp", true),
        sample_job("elektryk-ppoz", false),
    ])
}

/// A complete in-memory content set matching the fixtures.
pub fn sample_content() -> Content {
    let mut terms = std::collections::BTreeMap::new();
    terms.insert(Locale::Pl, "# Regulamin\n\nTreść regulaminu.".to_string());
    terms.insert(Locale::En, "# Terms\n\nTerms body.".to_string());
    Content {
        config: SiteConfig::default(),
        dictionaries: Dictionaries::new(sample_dictionary(), sample_dictionary_en()),
        cities: sample_cities(),
        jobs: sample_jobs(),
        terms,
    }
}
