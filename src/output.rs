//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric: the primary display for every entity
//! (city, job posting, route) is its semantic identity, with file paths
//! shown as secondary context. Each stage has a `format_*` function
//! (returns `Vec<String>`) for testability and a `print_*` wrapper that
//! writes to stdout. Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! Locales
//!     pl (default)
//!     en
//!
//! Cities (3)
//!     Poznań
//!         Slug: poznan
//! ...
//!
//! pl
//!     pl → pl/index.html
//!     pl/poznan → pl/poznan/index.html
//! ```

use crate::content::Content;
use crate::locale::Locale;
use crate::render::RenderSummary;
use crate::routes::Route;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the loaded content inventory: locales, cities, job postings,
/// terms documents.
pub fn format_content_summary(content: &Content) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Locales".to_string());
    for locale in Locale::ALL {
        let marker = if locale == Locale::DEFAULT {
            " (default)"
        } else {
            ""
        };
        lines.push(format!("{}{}{}", indent(1), locale, marker));
    }

    lines.push(String::new());
    lines.push(format!("Cities ({})", content.cities.len()));
    for city in content.cities.all() {
        lines.push(format!("{}{}", indent(1), city.name));
        lines.push(format!("{}Slug: {}", indent(2), city.slug));
    }

    let active = content.jobs.active().len();
    lines.push(String::new());
    lines.push(format!(
        "Job postings ({} active, {} total)",
        active,
        content.jobs.all().len()
    ));
    for job in content.jobs.all() {
        let status = if job.is_active { "active" } else { "inactive" };
        lines.push(format!("{}{} ({})", indent(1), job.title, status));
        lines.push(format!("{}Id: {}", indent(2), job.id));
    }

    lines.push(String::new());
    lines.push("Terms of service".to_string());
    for locale in Locale::ALL {
        let status = match content.terms.get(&locale) {
            Some(body) if !body.is_empty() => "present",
            _ => "missing",
        };
        lines.push(format!("{}{}: {}", indent(1), locale, status));
    }

    lines
}

/// Format the enumerated routes, grouped by locale, with the output file
/// each one maps to. Placeholder routes are marked.
pub fn format_routes(routes: &[Route]) -> Vec<String> {
    let mut lines = Vec::new();
    for locale in Locale::ALL {
        lines.push(locale.to_string());
        for route in routes.iter().filter(|r| r.locale == locale) {
            let marker = if route.is_placeholder() {
                " (placeholder)"
            } else {
                ""
            };
            lines.push(format!(
                "{}{} → {}{}",
                indent(1),
                route.url_path(),
                route.output_file().display(),
                marker
            ));
        }
    }
    lines
}

/// Format the render stage totals.
pub fn format_render_summary(summary: &RenderSummary) -> Vec<String> {
    vec![format!(
        "Generated {} documents, {} fallback pages, {} sitemap entries",
        summary.documents, summary.not_found_documents, summary.sitemap_entries
    )]
}

pub fn print_content_summary(content: &Content) {
    for line in format_content_summary(content) {
        println!("{}", line);
    }
}

pub fn print_routes(routes: &[Route]) {
    for line in format_routes(routes) {
        println!("{}", line);
    }
}

pub fn print_render_summary(summary: &RenderSummary) {
    for line in format_render_summary(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crate::test_helpers::sample_content;

    #[test]
    fn content_summary_lists_entities() {
        let lines = format_content_summary(&sample_content());
        let joined = lines.join("\n");
        assert!(joined.contains("pl (default)"));
        assert!(joined.contains("Cities (3)"));
        assert!(joined.contains("Poznań"));
        assert!(joined.contains("Slug: poznan"));
        assert!(joined.contains("Job postings (1 active, 2 total)"));
        assert!(joined.contains("(inactive)"));
        assert!(joined.contains("pl: present"));
    }

    #[test]
    fn routes_grouped_by_locale_with_output_files() {
        let content = sample_content();
        let all = routes::enumerate(&content.cities, &content.jobs);
        let lines = format_routes(&all);
        assert_eq!(lines[0], "pl");
        assert!(lines.contains(&"    pl → pl/index.html".to_string()));
        assert!(
            lines.contains(&"    en/careers/serwisant-ssp → en/careers/serwisant-ssp/index.html"
                .to_string())
        );
    }

    #[test]
    fn placeholder_routes_are_marked() {
        let content = Content {
            cities: Default::default(),
            jobs: Default::default(),
            ..sample_content()
        };
        let all = routes::enumerate(&content.cities, &content.jobs);
        let lines = format_routes(&all);
        assert!(lines.iter().any(|l| l.ends_with("(placeholder)")));
    }

    #[test]
    fn render_summary_line() {
        let summary = RenderSummary {
            documents: 14,
            not_found_documents: 3,
            sitemap_entries: 12,
        };
        assert_eq!(
            format_render_summary(&summary),
            vec!["Generated 14 documents, 3 fallback pages, 12 sitemap entries"]
        );
    }
}
