//! # Matbud Site
//!
//! Static site generator for matbud.net, the website of a Polish
//! fire-protection company. Content lives in TOML and markdown files;
//! the output is a fully static, bilingual (Polish/English) site with
//! complete SEO metadata, schema.org structured data, a sitemap, and
//! fallback 404 documents.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load       content/  →  Content     (TOML/markdown → typed registries)
//! 2. Enumerate  Content   →  Vec<Route>  (locale × entity cross product)
//! 3. Render     routes    →  dist/       (final HTML site + sitemap)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Totality**: enumeration is a pure function of the registries, so the
//!   full route set — placeholders included — is known and testable before
//!   any HTML exists.
//! - **Determinism**: rendering is a pure mapping from (content, route) to
//!   a document; identical inputs give byte-identical pages.
//! - **Testability**: each stage works on in-memory values, so unit tests
//!   exercise pipeline logic without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Stage 1 — loads and validates the content directory into a [`content::Content`] set |
//! | [`routes`] | Stage 2 — enumerates every (locale, page) pair to pre-render, with placeholder routes for empty collections |
//! | [`render`] | Stage 3 — renders the final HTML site from the route set using Maud |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`locale`] | The supported-locales enum and total fallback resolution |
//! | [`dictionary`] | Typed per-locale string sets with templated city copy |
//! | [`cities`] | City registry: slugs, display names, grammatical conjugations |
//! | [`jobs`] | Job-posting registry with active/inactive filtering |
//! | [`seo`] | Head metadata and schema.org JSON-LD synthesis |
//! | [`sitemap`] | `sitemap.xml` generation with per-family priorities |
//! | [`output`] | CLI output formatting — inventory-style display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Total Enumeration With Placeholders
//!
//! Static hosts need at least one generated document per content family.
//! An empty city list or a jobless careers section therefore yields one
//! placeholder route per locale, which renders as the locale's 404
//! document. The site never has a content family with zero pages, and
//! visiting a placeholder URL is a 404, never a server error.
//!
//! ## Typed Dictionaries Over String Maps
//!
//! Localized copy is deserialized into fully typed structs with
//! `deny_unknown_fields`, so a typo in a dictionary key is a load-time
//! error instead of a silently missing string. Sparse translations are
//! legal: missing fields deserialize to empty strings and fall back to
//! the default locale's copy at render time.
//!
//! ## Plain Output, No Runtime
//!
//! The output is plain HTML with an inlined stylesheet and ~40 lines of
//! vanilla JavaScript for the lazy map embed. The generated site can be
//! dropped on any file server — no Node, no PHP, no database.

pub mod cities;
pub mod config;
pub mod content;
pub mod dictionary;
pub mod jobs;
pub mod locale;
pub mod output;
pub mod render;
pub mod routes;
pub mod seo;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
