#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use bapsang_core::site;

/// Contact endpoint override, set from command line
static CONTACT_ENDPOINT: OnceLock<String> = OnceLock::new();

/// Get the contact submission endpoint (from command line or default)
pub fn get_contact_endpoint() -> String {
    CONTACT_ENDPOINT
        .get()
        .cloned()
        .unwrap_or_else(|| site::DEFAULT_CONTACT_ENDPOINT.to_string())
}

/// Bapsang - kindergarten meal-service site
#[derive(Parser, Debug)]
#[command(name = "bapsang-desktop")]
#[command(about = "밥상클럽 - 유치원 급식 관리 서비스 안내")]
struct Args {
    /// Contact submission endpoint (use a staging URL for demos)
    #[arg(short, long)]
    endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(endpoint) = args.endpoint {
        let _ = CONTACT_ENDPOINT.set(endpoint);
    }

    tracing::info!(endpoint = %get_contact_endpoint(), "Starting {}", site::BRAND_NAME);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(site::BRAND_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
