//! Localized copy: one typed dictionary per locale.
//!
//! Dictionaries are TOML files (`dictionary.pl.toml`, `dictionary.en.toml`)
//! deserialized into a fully typed structure. Every field carries a serde
//! default, so a sparsely translated locale deserializes to empty strings
//! rather than failing the build. The default locale's dictionary must be
//! complete — [`Dictionary::check_complete`] enforces that at load time.
//!
//! Templated city copy uses two placeholder tokens, substituted by
//! [`crate::cities::City::fill`]:
//!
//! - `{city}` — the grammatically conjugated form ("w Poznaniu")
//! - `{city_name}` — the nominative display name ("Poznań")
//!
//! Unknown keys are rejected to catch typos early.

use crate::locale::Locale;
use serde::Deserialize;

/// Return `value`, or `fallback` when the dictionary field is empty.
///
/// The recovery path for sparsely translated locales: a missing field is
/// an empty string after deserialization, never a hard error.
pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// The complete localized string set for one locale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dictionary {
    pub common: Common,
    pub navigation: Navigation,
    pub hero: Hero,
    pub services: Services,
    pub about_us: AboutUs,
    pub gallery: Gallery,
    pub contact: Contact,
    pub cities: CitiesSection,
    pub city_page: CityPage,
    pub careers: Careers,
    pub terms_of_service: TermsOfService,
    pub breadcrumbs: Breadcrumbs,
    pub not_found: NotFound,
    pub footer: Footer,
}

/// Site-wide strings: company identity and home-page head metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Common {
    pub company_name: String,
    pub company_name_short: String,
    pub site_name: String,
    pub page_title: String,
    pub page_description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Navigation {
    pub services: String,
    pub about: String,
    pub careers: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Services {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<ServiceEntry>,
    pub closing_message: String,
}

/// One service card: title, blurb, and bullet-point features.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutUs {
    pub title: String,
    pub description: String,
    pub stats: Vec<Stat>,
}

/// A headline figure shown in the about/why-choose sections ("25+" / "years").
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gallery {
    pub title: String,
    pub subtitle: String,
    pub captions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactInfo {
    pub title: String,
    pub address_title: String,
    pub phone_title: String,
    pub email_title: String,
    pub hours_title: String,
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
    pub closed: String,
}

/// Heading copy for the alphabetical city directory on the home page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CitiesSection {
    pub title: String,
    pub subtitle: String,
}

/// Templated copy for per-city landing pages.
///
/// All fields may contain `{city}` / `{city_name}` tokens. Fields left
/// untranslated render through [`or_default`] fallbacks at the call site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CityPage {
    pub title: String,
    pub intro: String,
    pub cta_button: String,
    pub services_title: String,
    pub services_description: String,
    pub why_choose_title: String,
    pub why_choose_description: String,
    pub contact_title: String,
    pub contact_subtitle: String,
    pub support: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Careers {
    pub title: String,
    pub subtitle: String,
    pub no_jobs_available: String,
    pub interested_title: String,
    pub interested_description: String,
    pub job_types: JobTypes,
    pub job_details: JobDetails,
}

/// Display labels for the employment-category enum.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobTypes {
    pub full_time: String,
    pub part_time: String,
    pub contract: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobDetails {
    pub back_to_jobs: String,
    pub requirements: String,
    pub responsibilities: String,
    pub benefits: String,
    pub apply_now: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermsOfService {
    pub title: String,
    pub last_updated: String,
    pub last_updated_date: String,
    pub introduction: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breadcrumbs {
    pub home: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotFound {
    pub title: String,
    pub description: String,
    pub back_home: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Footer {
    pub description: String,
    pub quick_links: String,
    pub service_area: String,
    pub rights: String,
}

impl Dictionary {
    /// Verify the fields every page depends on are populated.
    ///
    /// Only enforced for the default locale. Returns the path of the first
    /// empty required field.
    pub fn check_complete(&self) -> Result<(), String> {
        let required: [(&str, &str); 8] = [
            ("common.company_name", &self.common.company_name),
            ("common.site_name", &self.common.site_name),
            ("common.page_title", &self.common.page_title),
            ("common.page_description", &self.common.page_description),
            ("hero.title", &self.hero.title),
            ("careers.title", &self.careers.title),
            ("not_found.title", &self.not_found.title),
            ("breadcrumbs.home", &self.breadcrumbs.home),
        ];
        for (path, value) in required {
            if value.is_empty() {
                return Err(path.to_string());
            }
        }
        Ok(())
    }
}

/// The per-locale dictionary registry.
///
/// Holds one dictionary per supported locale for the lifetime of a build.
/// Lookup is total: an unsupported locale code resolves to the default
/// locale before reaching [`Dictionaries::get`].
#[derive(Debug, Clone)]
pub struct Dictionaries {
    pl: Dictionary,
    en: Dictionary,
}

impl Dictionaries {
    pub fn new(pl: Dictionary, en: Dictionary) -> Self {
        Self { pl, en }
    }

    /// Dictionary for a supported locale — never fails.
    pub fn get(&self, locale: Locale) -> &Dictionary {
        match locale {
            Locale::Pl => &self.pl,
            Locale::En => &self.en,
        }
    }

    /// Dictionary for an arbitrary locale code, falling back to the
    /// default locale's dictionary when the code is unsupported.
    pub fn get_by_code(&self, code: &str) -> &Dictionary {
        self.get(Locale::resolve(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let dict: Dictionary = toml::from_str(
            r#"
[common]
company_name = "Matbud"
"#,
        )
        .unwrap();
        assert_eq!(dict.common.company_name, "Matbud");
        assert_eq!(dict.common.site_name, "");
        assert!(dict.services.services.is_empty());
        assert_eq!(dict.not_found.title, "");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Dictionary, _> = toml::from_str(
            r#"
[comon]
company_name = "typo in section name"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn or_default_substitutes_empty() {
        assert_eq!(or_default("", "fallback"), "fallback");
        assert_eq!(or_default("value", "fallback"), "value");
    }

    #[test]
    fn check_complete_reports_first_missing_field() {
        let dict = Dictionary::default();
        assert_eq!(dict.check_complete().unwrap_err(), "common.company_name");
    }

    #[test]
    fn unsupported_code_falls_back_to_default_dictionary() {
        let mut pl = Dictionary::default();
        pl.common.company_name = "Matbud Systemy Ppoż. Sp. z o.o.".to_string();
        let dicts = Dictionaries::new(pl, Dictionary::default());

        let fallback = dicts.get_by_code("de");
        assert_eq!(
            fallback.common.company_name,
            dicts.get(Locale::DEFAULT).common.company_name
        );
    }

    #[test]
    fn nested_sections_parse() {
        let dict: Dictionary = toml::from_str(
            r#"
[careers.job_types]
full_time = "Pełny etat"

[[services.services]]
title = "SSP"
description = "Systemy sygnalizacji pożaru"
features = ["Projektowanie", "Montaż"]
"#,
        )
        .unwrap();
        assert_eq!(dict.careers.job_types.full_time, "Pełny etat");
        assert_eq!(dict.services.services.len(), 1);
        assert_eq!(dict.services.services[0].features.len(), 2);
    }
}
