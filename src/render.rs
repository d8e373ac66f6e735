//! HTML document rendering.
//!
//! Stage 3 of the build pipeline. Takes the loaded content set and the
//! enumerated routes and writes the finished static site:
//!
//! - one `index.html` per route, directory-style, so static hosts serve
//!   clean URLs (`/pl/poznan/` → `pl/poznan/index.html`)
//! - `404.html` at the root (default locale) and under each locale prefix
//! - `sitemap.xml` covering every real, sitemap-worthy route
//!
//! Placeholder routes ([`crate::routes`]) render the locale's not-found
//! document, as does any city or job route whose entity no longer resolves.
//!
//! ## HTML generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic XSS escaping. Structured data (JSON-LD) and the inline
//! map script are the only `PreEscaped` content. CSS and JS are embedded
//! at compile time:
//!
//! - `static/style.css`: base styles, inlined into every document head
//! - `static/map.js`: lazy loader for the Google Maps embed
//!
//! Page bodies are rendered in parallel with rayon; file writes stay
//! sequential.

use crate::content::Content;
use crate::dictionary::{Dictionary, or_default};
use crate::jobs::JobPosting;
use crate::locale::Locale;
use crate::routes::{self, Page, Route};
use crate::seo::{self, Crumb, PageMetadata};
use crate::sitemap;
use chrono::Utc;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");
const MAP_JS: &str = include_str!("../static/map.js");

/// What [`render`] wrote, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Route documents written (placeholders included).
    pub documents: usize,
    /// Fallback `404.html` documents written.
    pub not_found_documents: usize,
    /// Entries in the generated `sitemap.xml`.
    pub sitemap_entries: usize,
}

/// Render the whole site into `output_dir`.
pub fn render(content: &Content, output_dir: &Path) -> Result<RenderSummary, RenderError> {
    let routes = routes::enumerate(&content.cities, &content.jobs);

    let documents: Vec<(std::path::PathBuf, String)> = routes
        .par_iter()
        .map(|route| (route.output_file(), render_route(content, route).into_string()))
        .collect();

    fs::create_dir_all(output_dir)?;
    for (relative, body) in &documents {
        let path = output_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
    }

    // Fallback documents: the host serves the root 404.html for unknown
    // paths, and each locale prefix carries its own translated copy.
    let mut not_found_documents = 0;
    let root_404 = render_not_found_document(content, Locale::DEFAULT).into_string();
    fs::write(output_dir.join("404.html"), root_404)?;
    not_found_documents += 1;
    for locale in Locale::ALL {
        let body = render_not_found_document(content, locale).into_string();
        let dir = output_dir.join(locale.as_str());
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("404.html"), body)?;
        not_found_documents += 1;
    }

    let build_date = Utc::now().date_naive();
    let xml = sitemap::sitemap_xml(&content.config, &content.cities, &content.jobs, build_date);
    let sitemap_entries = xml.matches("<url>").count();
    fs::write(output_dir.join("sitemap.xml"), xml)?;

    Ok(RenderSummary {
        documents: documents.len(),
        not_found_documents,
        sitemap_entries,
    })
}

/// Render one route to a complete document.
///
/// Placeholder routes and routes whose entity no longer resolves produce
/// the locale's not-found document.
pub fn render_route(content: &Content, route: &Route) -> Markup {
    let locale = route.locale;
    match &route.page {
        Page::Home => render_home(content, locale),
        Page::City(slug) => match content.cities.find(slug) {
            Some(city) if !route.is_placeholder() => render_city_page(content, locale, city),
            _ => render_not_found_document(content, locale),
        },
        Page::Careers => render_careers(content, locale),
        Page::Job(id) => match content.jobs.find(id) {
            Some(job) if !route.is_placeholder() => render_job_page(content, locale, job),
            _ => render_not_found_document(content, locale),
        },
        Page::TermsOfService => render_terms(content, locale),
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Root-relative href for a page within one locale.
fn href(locale: Locale, path: &str) -> String {
    if path.is_empty() {
        format!("/{locale}")
    } else {
        format!("/{locale}/{path}")
    }
}

// ============================================================================
// Document shell
// ============================================================================

/// The full HTML document: head metadata, header, body content, footer.
///
/// Every document embeds the stylesheet inline and carries its JSON-LD
/// blocks in the head.
fn base_document(
    content: &Content,
    locale: Locale,
    meta: &PageMetadata,
    schemas: &[Value],
    body: Markup,
) -> Markup {
    let dict = content.dictionaries.get(locale);
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords.join(", "));
                }
                link rel="canonical" href=(meta.canonical);
                @for (alt_locale, url) in &meta.alternates {
                    link rel="alternate" hreflang=(alt_locale) href=(url);
                }
                link rel="alternate" hreflang="x-default"
                    href=(meta.alternates
                        .iter()
                        .find(|(l, _)| *l == Locale::DEFAULT)
                        .map(|(_, url)| url.as_str())
                        .unwrap_or(meta.canonical.as_str()));
                meta property="og:type" content=(meta.open_graph.og_type);
                meta property="og:locale" content=(meta.open_graph.og_locale);
                meta property="og:url" content=(meta.open_graph.url);
                meta property="og:site_name" content=(meta.open_graph.site_name);
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:image" content=(meta.open_graph.image);
                meta name="twitter:card" content=(meta.twitter_card);
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                meta name="twitter:image" content=(meta.open_graph.image);
                style { (PreEscaped(CSS)) }
                @for schema in schemas {
                    script type="application/ld+json" { (PreEscaped(schema.to_string())) }
                }
            }
            body {
                (site_header(dict, locale))
                main { (body) }
                (site_footer(content, locale))
            }
        }
    }
}

fn site_header(dict: &Dictionary, locale: Locale) -> Markup {
    html! {
        header.site-header {
            a.brand href=(href(locale, "")) { (dict.common.company_name_short) }
            nav.site-nav {
                a href={ (href(locale, "")) "#services" } { (dict.navigation.services) }
                a href={ (href(locale, "")) "#about" } { (dict.navigation.about) }
                a href=(href(locale, "careers")) { (dict.navigation.careers) }
                a href={ (href(locale, "")) "#contact" } { (dict.navigation.contact) }
                @for other in Locale::ALL {
                    @if other != locale {
                        a.locale-switch lang=(other) href=(href(other, "")) {
                            (other.as_str().to_uppercase())
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let company = &content.config.company;
    html! {
        footer.site-footer {
            div.container {
                p { (dict.footer.description) }
                p {
                    (company.street) ", " (company.postal_code) " " (company.city)
                    " · " (company.phone) " · " (company.email)
                }
                p { (dict.footer.service_area) }
                p { "© " (company.name) ". " (dict.footer.rights) }
            }
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

fn render_home(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let config = &content.config;
    let meta = seo::home_metadata(config, dict, locale);
    let schemas = [
        seo::website_schema(config),
        seo::organization_schema(config),
        seo::local_business_schema(config, dict),
    ];

    let body = html! {
        section.hero {
            div.container {
                h1 { (dict.hero.title) }
                p { (dict.hero.subtitle) }
                a.cta href="#contact" { (dict.hero.primary_cta) }
                " "
                a.cta.secondary href="#services" { (dict.hero.secondary_cta) }
            }
        }
        section id="services" {
            div.container {
                h2 { (dict.services.title) }
                p.section-subtitle { (dict.services.subtitle) }
                div.card-grid {
                    @for service in &dict.services.services {
                        div.card {
                            h3 { (service.title) }
                            p { (service.description) }
                            @if !service.features.is_empty() {
                                ul {
                                    @for feature in &service.features {
                                        li { (feature) }
                                    }
                                }
                            }
                        }
                    }
                }
                @if !dict.services.closing_message.is_empty() {
                    p { (dict.services.closing_message) }
                }
            }
        }
        section id="about" {
            div.container {
                h2 { (dict.about_us.title) }
                p.section-subtitle { (dict.about_us.description) }
                div.stats {
                    @for stat in &dict.about_us.stats {
                        div {
                            div.stat-value { (stat.value) }
                            div { (stat.label) }
                        }
                    }
                }
            }
        }
        @if !dict.gallery.captions.is_empty() {
            section id="gallery" {
                div.container {
                    h2 { (dict.gallery.title) }
                    p.section-subtitle { (dict.gallery.subtitle) }
                    div.card-grid {
                        @for caption in &dict.gallery.captions {
                            div.card { p { (caption) } }
                        }
                    }
                }
            }
        }
        (cities_directory(content, locale))
        (contact_section(content, locale))
    };
    base_document(content, locale, &meta, &schemas, body)
}

/// Alphabetical city directory, grouped by first letter.
fn cities_directory(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    html! {
        @if !content.cities.is_empty() {
            section id="cities" {
                div.container {
                    h2 { (dict.cities.title) }
                    p.section-subtitle { (dict.cities.subtitle) }
                    div.city-groups {
                        @for (letter, group) in content.cities.grouped() {
                            div {
                                h3 { (letter) }
                                ul {
                                    @for city in group {
                                        li {
                                            a href=(href(locale, &city.slug)) { (city.name) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The lazily-loaded map embed. `static/map.js` swaps `data-src` into a
/// real iframe when the block scrolls into view; the noscript fallback
/// loads it eagerly.
fn map_block(content: &Content) -> Markup {
    let map_url = content.config.map.embed_url();
    html! {
        div.map-embed data-src=(map_url) {
            noscript {
                iframe src=(map_url) loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    title=(content.config.company.name) {}
            }
        }
    }
}

fn contact_section(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let config = &content.config;
    let company = &config.company;
    let info = &dict.contact.contact_info;
    html! {
        section id="contact" {
            div.container {
                h2 { (dict.contact.title) }
                p.section-subtitle { (dict.contact.subtitle) }
                div.contact-grid {
                    div {
                        h3 { (info.title) }
                        p {
                            strong { (info.address_title) }
                            br;
                            (company.street) ", " (company.postal_code) " " (company.city)
                        }
                        p {
                            strong { (info.phone_title) }
                            br;
                            a href={ "tel:" (company.phone) } { (company.phone) }
                        }
                        p {
                            strong { (info.email_title) }
                            br;
                            a href={ "mailto:" (company.email) } { (company.email) }
                        }
                        p {
                            strong { (info.hours_title) }
                            br;
                            (info.weekdays) ": " (company.opens) " - " (company.closes)
                            br;
                            (info.saturday) ": " (info.closed)
                            br;
                            (info.sunday) ": " (info.closed)
                        }
                    }
                    (map_block(content))
                }
            }
        }
        script { (PreEscaped(MAP_JS)) }
    }
}

fn render_city_page(content: &Content, locale: Locale, city: &crate::cities::City) -> Markup {
    let dict = content.dictionaries.get(locale);
    let config = &content.config;
    let meta = seo::city_metadata(config, dict, locale, city);
    let schemas = [
        seo::local_business_schema(config, dict),
        seo::breadcrumb_schema(&[
            Crumb::new(
                dict.breadcrumbs.home.clone(),
                seo::canonical_url(&config.base_url, locale, ""),
            ),
            Crumb::new(
                city.name.clone(),
                seo::canonical_url(&config.base_url, locale, &city.slug),
            ),
        ]),
    ];
    let page = &dict.city_page;

    let body = html! {
        section.hero {
            div.container {
                h1 {
                    (city.fill(or_default(&page.title, "Systemy przeciwpożarowe {city}")))
                }
                p { (city.fill(&page.intro)) }
                a.cta href={ "tel:" (config.company.phone) } {
                    (or_default(&page.cta_button, &dict.hero.primary_cta))
                }
            }
        }
        section {
            div.container {
                h2 { (city.fill(or_default(&page.services_title, &dict.services.title))) }
                p.section-subtitle { (city.fill(&page.services_description)) }
                div.card-grid {
                    @for service in &dict.services.services {
                        div.card {
                            h3 { (service.title) }
                            p { (service.description) }
                        }
                    }
                }
            }
        }
        section {
            div.container {
                h2 { (city.fill(or_default(&page.why_choose_title, &dict.about_us.title))) }
                p.section-subtitle { (city.fill(&page.why_choose_description)) }
                div.stats {
                    @for stat in &dict.about_us.stats {
                        div {
                            div.stat-value { (stat.value) }
                            div { (stat.label) }
                        }
                    }
                }
            }
        }
        section {
            div.container {
                h2 { (city.fill(or_default(&page.contact_title, &dict.contact.title))) }
                p.section-subtitle { (city.fill(&page.contact_subtitle)) }
                @if !page.support.is_empty() {
                    p { (city.fill(&page.support)) }
                }
                p {
                    a.cta href={ "tel:" (config.company.phone) } { (config.company.phone) }
                }
                (map_block(content))
            }
        }
        script { (PreEscaped(MAP_JS)) }
    };
    base_document(content, locale, &meta, &schemas, body)
}

fn render_careers(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let config = &content.config;
    let meta = seo::careers_metadata(config, dict, locale);
    let schemas = [seo::local_business_schema(config, dict)];
    let active = content.jobs.active();

    let body = html! {
        section {
            div.container {
                h1 { (dict.careers.title) }
                p.section-subtitle { (dict.careers.subtitle) }
                @if active.is_empty() {
                    p { (dict.careers.no_jobs_available) }
                } @else {
                    @for job in &active {
                        div.card.job-card {
                            h3 {
                                a href=(href(locale, &format!("careers/{}", job.id))) {
                                    (job.title)
                                }
                            }
                            p.job-meta {
                                (job.location) " · " (job.experience) " · "
                                span.badge { (job.job_type.label(&dict.careers.job_types)) }
                            }
                            p { (job.description) }
                        }
                    }
                }
            }
        }
        section {
            div.container {
                h2 { (dict.careers.interested_title) }
                p.section-subtitle { (dict.careers.interested_description) }
                a.cta href={ "mailto:" (config.company.email) } { (config.company.email) }
            }
        }
    };
    base_document(content, locale, &meta, &schemas, body)
}

fn render_job_page(content: &Content, locale: Locale, job: &JobPosting) -> Markup {
    let dict = content.dictionaries.get(locale);
    let config = &content.config;
    let meta = seo::job_metadata(config, dict, locale, job);
    let details = &dict.careers.job_details;
    let schemas = [
        seo::local_business_schema(config, dict),
        seo::breadcrumb_schema(&[
            Crumb::new(
                dict.breadcrumbs.home.clone(),
                seo::canonical_url(&config.base_url, locale, ""),
            ),
            Crumb::new(
                dict.careers.title.clone(),
                seo::canonical_url(&config.base_url, locale, "careers"),
            ),
            Crumb::new(job.title.clone(), meta.canonical.clone()),
        ]),
    ];
    let mailto = format!(
        "mailto:{}?subject={}",
        config.company.email,
        job.title.replace(' ', "%20")
    );

    let body = html! {
        div.container {
            nav.breadcrumb {
                a href=(href(locale, "")) { (dict.breadcrumbs.home) }
                " / "
                a href=(href(locale, "careers")) { (dict.careers.title) }
                " / "
                (job.title)
            }
            h1 { (job.title) }
            p.job-meta {
                (job.location) " · " (job.experience) " · "
                span.badge { (job.job_type.label(&dict.careers.job_types)) }
            }
            p { (job.description) }
            (job_list_section(&details.responsibilities, &job.responsibilities))
            (job_list_section(&details.requirements, &job.requirements))
            (job_list_section(&details.benefits, &job.benefits))
            p {
                a.cta href=(mailto) { (details.apply_now) }
            }
            p {
                a href=(href(locale, "careers")) { (details.back_to_jobs) }
            }
        }
    };
    base_document(content, locale, &meta, &schemas, body)
}

fn job_list_section(title: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            section {
                h2 { (title) }
                ul {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
        }
    }
}

fn render_terms(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let meta = seo::terms_metadata(&content.config, dict, locale);
    let schemas = [
        seo::local_business_schema(&content.config, dict),
        seo::breadcrumb_schema(&[
            Crumb::new(
                dict.breadcrumbs.home.clone(),
                seo::canonical_url(&content.config.base_url, locale, ""),
            ),
            Crumb::new(dict.terms_of_service.title.clone(), meta.canonical.clone()),
        ]),
    ];
    let terms = &dict.terms_of_service;
    let body_html = content
        .terms
        .get(&locale)
        .map(|markdown| markdown_to_html(markdown))
        .unwrap_or_default();

    let body = html! {
        div.container {
            h1 { (terms.title) }
            @if !terms.last_updated_date.is_empty() {
                p.section-subtitle {
                    (terms.last_updated) " " (terms.last_updated_date)
                }
            }
            @if !terms.introduction.is_empty() {
                p { (terms.introduction) }
            }
            (PreEscaped(body_html))
        }
    };
    base_document(content, locale, &meta, &schemas, body)
}

/// The localized not-found document, used for `404.html` files and for
/// placeholder routes.
fn render_not_found_document(content: &Content, locale: Locale) -> Markup {
    let dict = content.dictionaries.get(locale);
    let title = format!("{} | {}", dict.not_found.title, dict.common.company_name);
    let meta = seo::page_metadata(
        &content.config,
        locale,
        "",
        title,
        dict.not_found.description.clone(),
        Vec::new(),
    );
    let body = html! {
        div.not-found {
            div.code { "404" }
            h1 { (dict.not_found.title) }
            p { (dict.not_found.description) }
            a.cta href=(href(locale, "")) { (dict.not_found.back_home) }
        }
    };
    base_document(content, locale, &meta, &[], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::Jobs;
    use crate::test_helpers::{sample_content, sample_job};
    use tempfile::TempDir;

    fn render_sample() -> (TempDir, RenderSummary) {
        let tmp = TempDir::new().unwrap();
        let summary = render(&sample_content(), tmp.path()).unwrap();
        (tmp, summary)
    }

    #[test]
    fn writes_a_document_for_every_route() {
        let (tmp, summary) = render_sample();
        let content = sample_content();
        let routes = routes::enumerate(&content.cities, &content.jobs);
        assert_eq!(summary.documents, routes.len());
        for route in &routes {
            assert!(
                tmp.path().join(route.output_file()).is_file(),
                "missing {}",
                route.output_file().display()
            );
        }
    }

    #[test]
    fn writes_fallback_documents_and_sitemap() {
        let (tmp, summary) = render_sample();
        assert!(tmp.path().join("404.html").is_file());
        assert!(tmp.path().join("pl/404.html").is_file());
        assert!(tmp.path().join("en/404.html").is_file());
        assert_eq!(summary.not_found_documents, 3);

        let xml = fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://matbud.net/pl/poznan</loc>"));
        assert!(xml.contains("<loc>https://matbud.net/pl/careers/serwisant-ssp</loc>"));
        // Inactive posting stays out of the sitemap
        assert!(!xml.contains("elektryk-ppoz"));
        assert_eq!(summary.sitemap_entries, xml.matches("<url>").count());
    }

    #[test]
    fn home_head_carries_canonical_and_alternates() {
        let content = sample_content();
        let doc = render_home(&content, Locale::Pl).into_string();
        assert!(doc.contains(r#"<link rel="canonical" href="https://matbud.net/pl">"#));
        assert!(doc.contains(r#"hreflang="pl" href="https://matbud.net/pl">"#));
        assert!(doc.contains(r#"hreflang="en" href="https://matbud.net/en">"#));
        assert!(doc.contains(r#"hreflang="x-default" href="https://matbud.net/pl">"#));
        assert!(doc.contains(r#"property="og:locale" content="pl_PL""#));
        assert!(doc.contains(r#""@type":"WebSite""#));
        assert!(doc.contains(r#""@type":"LocalBusiness""#));
    }

    #[test]
    fn home_embeds_lazy_map() {
        let content = sample_content();
        let doc = render_home(&content, Locale::Pl).into_string();
        assert!(doc.contains("map-embed"));
        assert!(doc.contains("output=embed"));
        assert!(doc.contains("IntersectionObserver"));
    }

    #[test]
    fn city_page_substitutes_conjugation() {
        let content = sample_content();
        let city = content.cities.find("poznan").unwrap();
        let doc = render_city_page(&content, Locale::Pl, city).into_string();
        assert!(doc.contains("w Poznaniu"));
        assert!(!doc.contains("{city}"));
        assert!(!doc.contains("{city_name}"));
        assert!(doc.contains("map-embed"));
    }

    #[test]
    fn careers_lists_only_active_jobs() {
        let content = sample_content();
        let doc = render_careers(&content, Locale::Pl).into_string();
        assert!(doc.contains("/pl/careers/serwisant-ssp"));
        assert!(!doc.contains("elektryk-ppoz"));
    }

    #[test]
    fn careers_without_postings_shows_fallback_copy() {
        let mut content = sample_content();
        content.jobs = Jobs::new(vec![sample_job("archived", false)]);
        let dict = content.dictionaries.get(Locale::Pl).clone();
        let doc = render_careers(&content, Locale::Pl).into_string();
        assert!(doc.contains(&dict.careers.no_jobs_available));
    }

    #[test]
    fn job_page_carries_breadcrumb_schema() {
        let content = sample_content();
        let job = content.jobs.find("serwisant-ssp").unwrap();
        let doc = render_job_page(&content, Locale::Pl, job).into_string();
        assert!(doc.contains(r#""@type":"BreadcrumbList""#));
        assert!(doc.contains(r#""position":3"#));
        assert!(doc.contains("mailto:"));
    }

    #[test]
    fn placeholder_routes_render_not_found() {
        let content = sample_content();
        let route = Route {
            locale: Locale::Pl,
            page: Page::City(routes::CITY_PLACEHOLDER.to_string()),
        };
        let dict = content.dictionaries.get(Locale::Pl);
        let doc = render_route(&content, &route).into_string();
        assert!(doc.contains(&dict.not_found.title));

        let route = Route {
            locale: Locale::En,
            page: Page::Job(routes::JOB_PLACEHOLDER.to_string()),
        };
        let doc = render_route(&content, &route).into_string();
        assert!(doc.contains("404"));
    }

    #[test]
    fn unknown_entity_renders_not_found() {
        let content = sample_content();
        let route = Route {
            locale: Locale::Pl,
            page: Page::City("no-such-city".to_string()),
        };
        let doc = render_route(&content, &route).into_string();
        assert!(doc.contains("404"));
    }

    #[test]
    fn terms_renders_markdown_body() {
        let content = sample_content();
        let doc = render_terms(&content, Locale::Pl).into_string();
        assert!(doc.contains("<h1>Regulamin</h1>"));
        assert!(doc.contains("Treść regulaminu."));
    }
}
