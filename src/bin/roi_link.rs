//! CLI for building ROI calculator links.
//!
//! Prints the same links the site and API produce, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Link for a custom preset
//! cargo run --bin roi-link -- build --hours 10 --rate 150 --weeks 4 --price 5000 --pilot abc
//!
//! # Include the ROI estimate
//! cargo run --bin roi-link -- build -H 2.5 -r 100 -w 1 -p 0 --estimate
//!
//! # Links for every pilot offer
//! cargo run --bin roi-link -- offers
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_URL` (optional): base for absolute share URLs, same as the server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use pilot_site::application::services::RoiService;
use pilot_site::config::DEFAULT_SITE_URL;
use pilot_site::domain::{LinkOptions, PilotCatalog, RoiEstimate, RoiPreset};
use pilot_site::utils::site_url::normalize_site_url;

/// CLI tool for ROI calculator links.
#[derive(Parser)]
#[command(name = "roi-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL for absolute links (overrides `SITE_URL`)
    #[arg(long, global = true)]
    site_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a link for a preset
    Build {
        /// Hours automated per week
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        hours: f64,

        /// Hourly rate
        #[arg(short, long, allow_negative_numbers = true)]
        rate: f64,

        /// Pilot length in weeks
        #[arg(short, long, allow_negative_numbers = true)]
        weeks: f64,

        /// Pilot price
        #[arg(short, long, allow_negative_numbers = true)]
        price: f64,

        /// Pilot identifier to tag the link with
        #[arg(long)]
        pilot: Option<String>,

        /// Target path (default: /)
        #[arg(long)]
        pathname: Option<String>,

        /// Also print the ROI estimate
        #[arg(short, long)]
        estimate: bool,
    },

    /// List pilot offers with their links
    Offers,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let raw_site_url = cli
        .site_url
        .or_else(|| std::env::var("SITE_URL").ok())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
    let site_url = normalize_site_url(&raw_site_url)
        .with_context(|| format!("Invalid site URL '{raw_site_url}'"))?;

    let service = RoiService::new(site_url, PilotCatalog::default());

    match cli.command {
        Commands::Build {
            hours,
            rate,
            weeks,
            price,
            pilot,
            pathname,
            estimate,
        } => {
            let preset = RoiPreset::new(hours, rate, weeks, price);
            let options = LinkOptions {
                pilot_id: pilot,
                pathname,
            };
            print_link(&service, &preset, &options);
            if estimate {
                print_estimate(&RoiEstimate::from_preset(&preset));
            }
        }
        Commands::Offers => print_offers(&service),
    }

    Ok(())
}

fn print_link(service: &RoiService, preset: &RoiPreset, options: &LinkOptions) {
    println!("{}", "ROI link".bright_blue().bold());
    println!("  Href: {}", service.href(preset, options).cyan());
    println!("  URL:  {}", service.share_url(preset, options).bright_white());
}

fn print_estimate(estimate: &RoiEstimate) {
    println!();
    println!("{}", "Estimate".bright_blue().bold());
    println!("  Value per week:   {:.2}", estimate.weekly_value);
    println!("  Value over pilot: {:.2}", estimate.pilot_value);

    let net = format!("{:.2}", estimate.net_return);
    if estimate.is_profitable() {
        println!("  Net return:       {}", net.green());
    } else {
        println!("  Net return:       {}", net.red());
    }

    match estimate.roi_multiple {
        Some(m) => println!("  Return multiple:  {m:.2}x"),
        None => println!("  Return multiple:  {}", "n/a".dimmed()),
    }
    match estimate.payback_weeks {
        Some(w) => println!("  Payback weeks:    {w:.1}"),
        None => println!("  Payback weeks:    {}", "n/a".dimmed()),
    }
}

fn print_offers(service: &RoiService) {
    println!("{}", "Pilot offers".bright_blue().bold());

    for offer in service.offer_links() {
        println!();
        println!("  {} ({})", offer.name.bright_white().bold(), offer.id.dimmed());
        println!("  {}", offer.summary);
        println!("  {}", offer.href.cyan());
    }
}
