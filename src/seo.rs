//! Head metadata and structured-data synthesis.
//!
//! Every function here is a pure, deterministic mapping from resolved
//! entity data + locale to derived metadata — no state, no I/O, identical
//! inputs give byte-identical output. Callers resolve entities first;
//! the synthesizer is never invoked with an unknown city or job.
//!
//! Two families:
//!
//! - [`PageMetadata`] builders — title/description/keywords, canonical and
//!   per-locale alternate URLs, Open Graph and Twitter card fields.
//! - `*_schema` functions — schema.org JSON-LD documents (organization,
//!   local business, breadcrumb list, article, website) as
//!   `serde_json::Value`, embedded verbatim into page heads.

use crate::cities::City;
use crate::config::SiteConfig;
use crate::dictionary::{Dictionary, or_default};
use crate::jobs::JobPosting;
use crate::locale::Locale;
use serde_json::{Value, json};

/// Open Graph fields for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    /// `website` or `article`.
    pub og_type: &'static str,
    /// Territory-qualified locale tag (`pl_PL`).
    pub og_locale: &'static str,
    pub url: String,
    pub site_name: String,
    pub image: String,
}

/// Derived head metadata for one page. Recomputed per page, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    /// One `(locale, url)` alternate per supported locale, in
    /// [`Locale::ALL`] order.
    pub alternates: Vec<(Locale, String)>,
    pub open_graph: OpenGraph,
    /// Twitter card type; the card reuses title/description/image.
    pub twitter_card: &'static str,
}

/// Join base URL + locale + path into a canonical URL.
///
/// Duplicate separators in `path` collapse and no trailing slash is
/// emitted: `("https://matbud.net", Pl, "")` → `https://matbud.net/pl`,
/// `("https://matbud.net", Pl, "careers//abc/")` →
/// `https://matbud.net/pl/careers/abc`.
pub fn canonical_url(base_url: &str, locale: Locale, path: &str) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), locale);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// Generic metadata builder: the common synthesis every page shares.
///
/// `path` is the page path below the locale prefix (empty for the locale
/// root). Tests in §`canonical_url` cover the URL shape.
pub fn page_metadata(
    config: &SiteConfig,
    locale: Locale,
    path: &str,
    title: String,
    description: String,
    keywords: Vec<String>,
) -> PageMetadata {
    let url = canonical_url(&config.base_url, locale, path);
    let alternates = Locale::ALL
        .iter()
        .map(|&l| (l, canonical_url(&config.base_url, l, path)))
        .collect();
    PageMetadata {
        open_graph: OpenGraph {
            og_type: "website",
            og_locale: locale.og_locale(),
            url: url.clone(),
            site_name: config.company.name.clone(),
            image: config.og_image_url(),
        },
        title,
        description,
        keywords,
        canonical: url,
        alternates,
        twitter_card: "summary_large_image",
    }
}

/// Home page metadata: company name + page title, dictionary keywords.
pub fn home_metadata(config: &SiteConfig, dict: &Dictionary, locale: Locale) -> PageMetadata {
    let title = format!("{} | {}", dict.common.company_name, dict.common.page_title);
    page_metadata(
        config,
        locale,
        "",
        title,
        dict.common.page_description.clone(),
        dict.common.keywords.clone(),
    )
}

/// City landing-page metadata.
///
/// Title/description come from `city_page.meta_*` dictionary templates with
/// `{city}` (conjugation) and `{city_name}` substituted; the keyword list is
/// one entry per template phrase.
pub fn city_metadata(
    config: &SiteConfig,
    dict: &Dictionary,
    locale: Locale,
    city: &City,
) -> PageMetadata {
    let title = city.fill(or_default(
        &dict.city_page.meta_title,
        "Systemy Przeciwpożarowe w {city_name} | Instalacja i Serwis PPOŻ",
    ));
    let description = city.fill(or_default(
        &dict.city_page.meta_description,
        "Profesjonalne systemy przeciwpożarowe {city}. Instalacja, konserwacja i serwis. \
         Serwis 24/7 w {city_name} i okolicach.",
    ));
    let keywords = dict
        .city_page
        .meta_keywords
        .iter()
        .map(|k| city.fill(k))
        .collect();
    page_metadata(config, locale, &city.slug, title, description, keywords)
}

/// Careers listing metadata.
pub fn careers_metadata(config: &SiteConfig, dict: &Dictionary, locale: Locale) -> PageMetadata {
    let title = format!("{} | {}", dict.careers.title, dict.common.company_name);
    page_metadata(
        config,
        locale,
        "careers",
        title,
        dict.careers.subtitle.clone(),
        Vec::new(),
    )
}

/// Job detail metadata: `<job title> - <careers title>`.
pub fn job_metadata(
    config: &SiteConfig,
    dict: &Dictionary,
    locale: Locale,
    job: &JobPosting,
) -> PageMetadata {
    let title = format!("{} - {}", job.title, dict.careers.title);
    page_metadata(
        config,
        locale,
        &format!("careers/{}", job.id),
        title,
        job.description.clone(),
        Vec::new(),
    )
}

/// Terms-of-service metadata.
pub fn terms_metadata(config: &SiteConfig, dict: &Dictionary, locale: Locale) -> PageMetadata {
    let title = format!(
        "{} | {}",
        dict.terms_of_service.title, dict.common.company_name
    );
    page_metadata(
        config,
        locale,
        "terms-of-service",
        title,
        dict.terms_of_service.introduction.clone(),
        Vec::new(),
    )
}

// =============================================================================
// Structured data (schema.org JSON-LD)
// =============================================================================

/// An entry in a breadcrumb trail, in display order.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `Organization` document for the company.
pub fn organization_schema(config: &SiteConfig) -> Value {
    let company = &config.company;
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": company.name,
        "alternateName": company.short_name,
        "url": config.base_url,
        "logo": config.og_image_url(),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": company.street,
            "addressLocality": company.city,
            "postalCode": company.postal_code,
            "addressCountry": company.country,
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": company.phone,
            "contactType": "customer service",
            "email": company.email,
            "areaServed": company.country,
            "availableLanguage": ["Polish"],
        },
        "foundingDate": company.founding_year,
    })
}

/// `LocalBusiness` document with localized description, geo coordinates,
/// weekday opening hours, and the fire-protection offer catalog built from
/// the dictionary's service entries.
pub fn local_business_schema(config: &SiteConfig, dict: &Dictionary) -> Value {
    let company = &config.company;
    let offers: Vec<Value> = dict
        .services
        .services
        .iter()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.title,
                    "description": service.description,
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": format!("{}/#organization", config.base_url),
        "name": company.name,
        "image": config.og_image_url(),
        "description": dict.common.page_description,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": company.street,
            "addressLocality": company.city,
            "postalCode": company.postal_code,
            "addressCountry": company.country,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": company.latitude,
            "longitude": company.longitude,
        },
        "telephone": company.phone,
        "email": company.email,
        "url": config.base_url,
        "priceRange": company.price_range,
        "openingHoursSpecification": [{
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "opens": company.opens,
            "closes": company.closes,
        }],
        "areaServed": {
            "@type": "Country",
            "name": "Poland",
        },
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Fire Protection Services",
            "itemListElement": offers,
        },
    })
}

/// `BreadcrumbList` document: input order preserved, positions 1-based.
pub fn breadcrumb_schema(items: &[Crumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// `Article` document for dated editorial content.
pub fn article_schema(
    config: &SiteConfig,
    title: &str,
    description: &str,
    url: &str,
    image: &str,
    published: &str,
    modified: Option<&str>,
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": title,
        "description": description,
        "image": image,
        "datePublished": published,
        "dateModified": modified.unwrap_or(published),
        "author": {
            "@type": "Organization",
            "name": config.company.name,
            "url": config.base_url,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.company.name,
            "logo": {
                "@type": "ImageObject",
                "url": config.og_image_url(),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// `WebSite` document for the site root.
pub fn website_schema(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.company.name,
        "url": config.base_url,
    })
}
