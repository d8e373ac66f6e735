//! Sitemap generation.
//!
//! Emits one `sitemap.xml` enumerating the canonical URL of every real
//! route (placeholder routes are excluded — they resolve to 404s and have
//! no business being crawled). Each URL carries a last-modified date,
//! change frequency, and priority weight mirroring the page's churn:
//! the home page changes weekly, city and careers pages monthly, legal
//! pages yearly.

use crate::cities::Cities;
use crate::config::SiteConfig;
use crate::jobs::Jobs;
use crate::locale::Locale;
use crate::seo::canonical_url;
use chrono::NaiveDate;

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

/// Collect every sitemap entry, in locale-major order.
pub fn sitemap_urls(
    config: &SiteConfig,
    cities: &Cities,
    jobs: &Jobs,
    build_date: NaiveDate,
) -> Vec<SitemapUrl> {
    let lastmod = build_date.format("%Y-%m-%d").to_string();
    let mut urls = Vec::new();

    for locale in Locale::ALL {
        let entry = |path: &str, changefreq, priority| SitemapUrl {
            loc: canonical_url(&config.base_url, locale, path),
            lastmod: lastmod.clone(),
            changefreq,
            priority,
        };

        urls.push(entry("", "weekly", "1.0"));
        urls.push(entry("careers", "monthly", "0.6"));
        urls.push(entry("terms-of-service", "yearly", "0.3"));

        for city in cities.all() {
            urls.push(entry(&city.slug, "monthly", "0.8"));
        }
        for job in jobs.active() {
            urls.push(entry(&format!("careers/{}", job.id), "monthly", "0.6"));
        }
    }
    urls
}

/// Render the sitemap XML document.
pub fn sitemap_xml(
    config: &SiteConfig,
    cities: &Cities,
    jobs: &Jobs,
    build_date: NaiveDate,
) -> String {
    let urls = sitemap_urls(config, cities, jobs, build_date);
    let entries: Vec<String> = urls
        .iter()
        .map(|url| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
                 <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                xml_escape(&url.loc),
                url.lastmod,
                url.changefreq,
                url.priority
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>\n",
        entries.join("\n")
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
