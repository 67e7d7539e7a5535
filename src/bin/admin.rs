//! CLI administration tool for linkshort.
//!
//! Manages links directly against the configured database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link with an explicit code
//! cargo run --bin admin -- links create https://github.com --code GITHUB
//!
//! # Delete a link
//! cargo run --bin admin -- links delete GITHUB
//!
//! # Totals and connectivity
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment variables as the server (see `linkshort::config`).

use linkshort::application::services::LinkService;
use linkshort::config;
use linkshort::domain::entities::Link;
use linkshort::infrastructure::persistence::{SqliteLinkRepository, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing linkshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show one link's statistics
    Show {
        /// Short code
        code: String,
    },

    /// Create a new link
    Create {
        /// Target URL (http or https)
        target_url: String,

        /// Explicit short code (6-8 alphanumeric characters)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Permanently delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config.database_url, &config.pool_settings())
        .await
        .context("Failed to open database")?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))));

    let result = match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await,
        Commands::Stats => handle_stats(&service).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    pool.close().await;

    result
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Create { target_url, code } => {
            create_link(service, &target_url, code.as_deref()).await
        }
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Prints all links as a table.
///
/// ```text
/// 🔗 Links
///
///   Code      Clicks  Last click         Created            Target
///   ──────────────────────────────────────────────────────────────────────────
///   GITHUB    12      2025-11-22 14:30   2025-11-20 09:12   https://www.github.com
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<18} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last click".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<18} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            format_last_click(link).bright_black(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints one link's details.
async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_link(&link);

    Ok(())
}

/// Creates a link through the service so every validation rule applies.
async fn create_link(service: &Service, target_url: &str, code: Option<&str>) -> Result<()> {
    println!("{}", "➕ Create Link".bright_blue().bold());
    println!();

    let link = service
        .create_link(target_url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link);

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays total links and total clicks.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load links: {}", e))?;
    let clicks: i64 = links.iter().map(|l| l.clicks).sum();

    println!(
        "  Links:  {}",
        links.len().to_string().bright_green().bold()
    );
    println!("  Clicks: {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !service.is_healthy().await {
                anyhow::bail!("Database connection failed");
            }

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:       {}", link.code.cyan());
    println!("  Target:     {}", link.target_url);
    println!("  Clicks:     {}", link.clicks.to_string().bright_green());
    println!("  Last click: {}", format_last_click(link));
    println!(
        "  Created:    {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

fn format_last_click(link: &Link) -> String {
    link.last_clicked
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}
