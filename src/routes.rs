//! Static path enumeration.
//!
//! Stage 2 of the build pipeline. Computes the complete set of
//! (locale, page) pairs to pre-render: the cartesian product of supported
//! locales and the routable entities in each registry.
//!
//! ## Placeholder policy
//!
//! Static hosting needs at least one generated document per content family,
//! even when a collection is empty. An empty city set yields exactly one
//! `placeholder` city route per locale; a jobless careers section yields
//! exactly one `no-jobs` job route per locale. Rendering either produces
//! the locale's not-found document, so visiting a placeholder URL is a 404,
//! never a crash. Enumeration is therefore total: never empty for any
//! supported locale.

use crate::cities::Cities;
use crate::jobs::Jobs;
use crate::locale::Locale;
use std::path::PathBuf;

/// Slug emitted when the city set is empty.
pub const CITY_PLACEHOLDER: &str = "placeholder";
/// Job id emitted when no posting is active.
pub const JOB_PLACEHOLDER: &str = "no-jobs";

/// A page within one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    City(String),
    Careers,
    Job(String),
    TermsOfService,
}

/// One (locale, page) pair to pre-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    /// URL path relative to the site root, without leading or trailing
    /// slash: `pl`, `pl/poznan`, `en/careers/serwisant-ssp`.
    pub fn url_path(&self) -> String {
        let locale = self.locale.as_str();
        match &self.page {
            Page::Home => locale.to_string(),
            Page::City(slug) => format!("{locale}/{slug}"),
            Page::Careers => format!("{locale}/careers"),
            Page::Job(id) => format!("{locale}/careers/{id}"),
            Page::TermsOfService => format!("{locale}/terms-of-service"),
        }
    }

    /// Output document path relative to the output directory.
    ///
    /// Every route gets a directory-style `index.html` so static hosts
    /// serve it at the clean URL.
    pub fn output_file(&self) -> PathBuf {
        PathBuf::from(self.url_path()).join("index.html")
    }

    /// Whether this route exists only to satisfy the static-export
    /// constraint. Placeholder routes render as not-found documents and
    /// are excluded from the sitemap.
    pub fn is_placeholder(&self) -> bool {
        match &self.page {
            Page::City(slug) => slug == CITY_PLACEHOLDER,
            Page::Job(id) => id == JOB_PLACEHOLDER,
            _ => false,
        }
    }
}

/// Enumerate every route to pre-render.
///
/// Per locale: home, careers listing, terms of service, one route per
/// city (or one placeholder), one route per *active* job (or one
/// placeholder). Inactive postings are excluded from enumeration but
/// remain resolvable by direct id lookup.
pub fn enumerate(cities: &Cities, jobs: &Jobs) -> Vec<Route> {
    let mut routes = Vec::new();
    for locale in Locale::ALL {
        routes.push(Route {
            locale,
            page: Page::Home,
        });
        routes.push(Route {
            locale,
            page: Page::Careers,
        });
        routes.push(Route {
            locale,
            page: Page::TermsOfService,
        });

        if cities.is_empty() {
            routes.push(Route {
                locale,
                page: Page::City(CITY_PLACEHOLDER.to_string()),
            });
        } else {
            for city in cities.all() {
                routes.push(Route {
                    locale,
                    page: Page::City(city.slug.clone()),
                });
            }
        }

        let active = jobs.active();
        if active.is_empty() {
            routes.push(Route {
                locale,
                page: Page::Job(JOB_PLACEHOLDER.to_string()),
            });
        } else {
            for job in active {
                routes.push(Route {
                    locale,
                    page: Page::Job(job.id.clone()),
                });
            }
        }
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::City;
    use crate::jobs::{JobPosting, JobType};

    fn city(slug: &str) -> City {
        City {
            slug: slug.into(),
            name: slug.into(),
            conjugation: format!("w {slug}"),
        }
    }

    fn job(id: &str, active: bool) -> JobPosting {
        JobPosting {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            location: String::new(),
            experience: String::new(),
            job_type: JobType::FullTime,
            requirements: vec![],
            responsibilities: vec![],
            benefits: vec![],
            is_active: active,
        }
    }

    #[test]
    fn cross_product_of_locales_and_entities() {
        let cities = Cities::new(vec![city("poznan"), city("leszno")]);
        let jobs = Jobs::new(vec![job("a", true), job("b", true)]);
        let routes = enumerate(&cities, &jobs);

        // Per locale: home + careers + terms + 2 cities + 2 jobs = 7
        assert_eq!(routes.len(), 7 * Locale::ALL.len());
        for locale in Locale::ALL {
            for slug in ["poznan", "leszno"] {
                assert!(routes.contains(&Route {
                    locale,
                    page: Page::City(slug.to_string())
                }));
            }
        }
    }

    #[test]
    fn enumeration_is_total_for_empty_collections() {
        let routes = enumerate(&Cities::default(), &Jobs::default());
        for locale in Locale::ALL {
            let city_routes: Vec<_> = routes
                .iter()
                .filter(|r| r.locale == locale && matches!(r.page, Page::City(_)))
                .collect();
            assert_eq!(city_routes.len(), 1);
            assert!(city_routes[0].is_placeholder());

            let job_routes: Vec<_> = routes
                .iter()
                .filter(|r| r.locale == locale && matches!(r.page, Page::Job(_)))
                .collect();
            assert_eq!(job_routes.len(), 1);
            assert!(job_routes[0].is_placeholder());
        }
    }

    #[test]
    fn inactive_jobs_are_not_enumerated() {
        let jobs = Jobs::new(vec![job("active", true), job("retired", false)]);
        let routes = enumerate(&Cities::default(), &jobs);

        assert!(routes.iter().any(|r| r.page == Page::Job("active".into())));
        assert!(!routes.iter().any(|r| r.page == Page::Job("retired".into())));
        // A real active job means no placeholder
        assert!(
            !routes
                .iter()
                .any(|r| r.page == Page::Job(JOB_PLACEHOLDER.into()))
        );
    }

    #[test]
    fn url_paths() {
        let r = Route {
            locale: Locale::Pl,
            page: Page::Home,
        };
        assert_eq!(r.url_path(), "pl");

        let r = Route {
            locale: Locale::En,
            page: Page::Job("serwisant-ssp".into()),
        };
        assert_eq!(r.url_path(), "en/careers/serwisant-ssp");

        let r = Route {
            locale: Locale::Pl,
            page: Page::TermsOfService,
        };
        assert_eq!(r.url_path(), "pl/terms-of-service");
    }

    #[test]
    fn output_files_are_directory_style() {
        let r = Route {
            locale: Locale::Pl,
            page: Page::City("poznan".into()),
        };
        assert_eq!(r.output_file(), PathBuf::from("pl/poznan/index.html"));
    }

    #[test]
    fn real_routes_are_not_placeholders() {
        let r = Route {
            locale: Locale::Pl,
            page: Page::City("poznan".into()),
        };
        assert!(!r.is_placeholder());
        let r = Route {
            locale: Locale::Pl,
            page: Page::Careers,
        };
        assert!(!r.is_placeholder());
    }
}
