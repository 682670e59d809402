//! Smoke Runner for the Bapsang site
//!
//! Renders pages headlessly, writes HTML snapshots for eyeballing, and
//! asserts one piece of visible text per page.
//!
//! Usage:
//!   bapsang-smoke                 # all pages
//!   bapsang-smoke calc-food       # one page
//!   bapsang-smoke -o /tmp/smoke   # custom snapshot directory

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bapsang_smoke::SmokePage;

/// Bapsang Smoke Runner
#[derive(Parser, Debug)]
#[command(name = "bapsang-smoke")]
#[command(about = "Render Bapsang pages headlessly and check visible text")]
struct Args {
    /// Page to render (landing, calc-food); all pages when omitted
    page: Option<String>,

    /// Snapshot output directory
    #[arg(short, long, default_value = "target/smoke")]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let pages: Vec<SmokePage> = match args.page.as_deref() {
        None => SmokePage::all().to_vec(),
        Some(slug) => match SmokePage::from_slug(slug) {
            Some(page) => vec![page],
            None => {
                let known: Vec<&str> = SmokePage::all().iter().map(|p| p.slug()).collect();
                bail!("unknown page '{slug}', expected one of: {}", known.join(", "));
            }
        },
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating snapshot dir {}", args.out_dir.display()))?;

    let mut failures = 0;
    for page in pages {
        let html = page.render();
        let path = args.out_dir.join(format!("{}.html", page.slug()));
        fs::write(&path, &html)
            .with_context(|| format!("writing snapshot {}", path.display()))?;

        if html.contains(page.expected_text()) {
            tracing::info!(page = page.slug(), snapshot = %path.display(), "OK");
        } else {
            failures += 1;
            tracing::error!(
                page = page.slug(),
                expected = page.expected_text(),
                "expected text not found in render"
            );
        }
    }

    if failures > 0 {
        bail!("{failures} page(s) missing expected text");
    }
    Ok(())
}
