use clap::{Parser, Subcommand};
use matbud_site::{config, content, output, render, routes};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "matbud-site")]
#[command(about = "Static site generator for the Matbud fire-protection website")]
#[command(long_about = "\
Static site generator for the Matbud fire-protection website

Content lives in TOML and markdown files. The build enumerates every
(locale, page) pair — home, city landing pages, careers, job postings,
terms of service — and writes a fully static, SEO-complete site.

Content structure:

  content/
  ├── config.toml          # Site config (base URL, company data, map)
  ├── dictionary.pl.toml   # Polish copy (default locale, must be complete)
  ├── dictionary.en.toml   # English copy (sparse fields fall back)
  ├── cities.toml          # Served cities with grammatical conjugations
  ├── jobs.toml            # Job postings (inactive ones stay resolvable)
  ├── terms.pl.md          # Terms-of-service body, per locale (optional)
  └── terms.en.md

Run 'matbud-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: load → enumerate → render
    Build,
    /// Validate the content directory without building
    Check,
    /// List every route the build would generate
    Routes,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Stage 1: Loading {}", cli.content.display());
            let content = content::Content::load(&cli.content)?;
            output::print_content_summary(&content);

            println!("==> Stage 2: Enumerating routes");
            let all = routes::enumerate(&content.cities, &content.jobs);
            output::print_routes(&all);

            println!("==> Stage 3: Rendering HTML → {}", cli.output.display());
            let summary = render::render(&content, &cli.output)?;
            output::print_render_summary(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.content.display());
            let content = content::Content::load(&cli.content)?;
            output::print_content_summary(&content);
            println!("==> Content is valid");
        }
        Command::Routes => {
            let content = content::Content::load(&cli.content)?;
            let all = routes::enumerate(&content.cities, &content.jobs);
            output::print_routes(&all);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
