//! bizlens CLI - Business insight dashboard in the terminal
//!
//! Thin presentation layer over the bizlens API: fetches an insight
//! card and offers headline regeneration.

mod api;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;

use api::BizlensClient;
use bizlens::{BusinessInsight, BusinessQuery, InsightSlot};
use config::Config;

#[derive(Parser)]
#[command(name = "bizlens")]
#[command(about = "bizlens CLI - business insight dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the API base URL
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and render the insight card for a business
    Insight {
        /// Business name
        name: String,
        /// Business location
        location: String,
        /// Keep the card open and offer headline regeneration
        #[arg(short, long)]
        watch: bool,
    },

    /// Regenerate a single headline
    Headline {
        /// Business name
        name: String,
        /// Business location
        location: String,
    },

    /// Show or update configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        set_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = cli.url.unwrap_or_else(|| config.base_url.clone());

    match cli.command {
        Commands::Insight {
            name,
            location,
            watch,
        } => {
            let query = BusinessQuery::new(&name, &location)?;
            let client = BizlensClient::new(&base_url);

            // The one mutable cell of the dashboard: overwritten on
            // success, untouched on failure.
            let mut slot = InsightSlot::new();

            eprintln!("{}", "Analyzing business data...".dimmed());
            slot.store(client.fetch_insight(query.name(), query.location()).await?);

            if let Some(insight) = slot.current() {
                render_card(&query, insight);
            }

            if watch {
                regenerate_loop(&client, &query, &mut slot).await?;
            }
        }

        Commands::Headline { name, location } => {
            let query = BusinessQuery::new(&name, &location)?;
            let client = BizlensClient::new(&base_url);

            eprintln!("{}", "Generating headline...".dimmed());
            let headline = client
                .regenerate_headline(query.name(), query.location())
                .await?;
            println!("{}", headline.cyan());
        }

        Commands::Config { set_url } => {
            let mut config = config;
            if let Some(url) = set_url {
                config.base_url = url;
                config.save()?;
                println!("{} Configuration updated", "✓".green());
            }

            println!("Config file: {:?}", Config::config_path()?);
            println!("Base URL:    {}", config.base_url);

            let client = BizlensClient::new(&config.base_url);
            match client.health().await {
                Ok(true) => println!("API status:  {}", "reachable".green()),
                _ => println!("API status:  {}", "unreachable".red()),
            }
        }
    }

    Ok(())
}

/// Offer headline regeneration until the user declines
async fn regenerate_loop(
    client: &BizlensClient,
    query: &BusinessQuery,
    slot: &mut InsightSlot,
) -> Result<()> {
    while Confirm::new()
        .with_prompt("Regenerate headline?")
        .default(true)
        .interact()?
    {
        match client
            .regenerate_headline(query.name(), query.location())
            .await
        {
            Ok(headline) => {
                slot.store_headline(headline);
                if let Some(insight) = slot.current() {
                    render_card(query, insight);
                }
            }
            // Keep the previous card on failure
            Err(e) => eprintln!("{} Regeneration failed: {}", "✗".red(), e),
        }
    }

    Ok(())
}

/// Render the insight card
fn render_card(query: &BusinessQuery, insight: &BusinessInsight) {
    let full_stars = insight.rating.floor() as usize;
    let stars = format!(
        "{}{}",
        "★".repeat(full_stars),
        "☆".repeat(5usize.saturating_sub(full_stars))
    );

    println!();
    println!("  {}", query.name().bold());
    println!("  {}", query.location().dimmed());
    println!(
        "  {} {} {}",
        stars.yellow(),
        format!("{:.2}", insight.rating).bold(),
        format!("({} reviews)", insight.reviews).dimmed()
    );
    println!();
    println!("  {}", format!("“{}”", insight.headline).cyan());
    println!();
}
