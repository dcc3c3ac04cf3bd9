//! Operator CLI for link-redirector.
//!
//! Inspects and removes redirects directly in the database, without going
//! through the web surface.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show a redirect and its visits
//! cargo run --bin admin -- redirects show 9f86d081884c7d659a2feaa0c55ad015
//!
//! # Soft-delete a redirect (asks for confirmation unless -y)
//! cargo run --bin admin -- redirects delete 9f86d081884c7d659a2feaa0c55ad015
//!
//! # Count live redirects
//! cargo run --bin admin -- redirects count
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `DB_*` components accepted by the server

use link_redirector::config::Config;
use link_redirector::domain::repositories::{RedirectRepository, VisitRepository};
use link_redirector::infrastructure::persistence::{PgRedirectRepository, PgVisitRepository};
use link_redirector::utils::access_code::is_access_code_format;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-redirector.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and delete redirects
    Redirects {
        #[command(subcommand)]
        action: RedirectAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum RedirectAction {
    /// Show a redirect and its visit history
    Show {
        /// Access code of the redirect
        access_code: String,
    },

    /// Soft-delete a redirect
    Delete {
        /// Access code of the redirect
        access_code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Count live redirects
    Count,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Redirects { action } => handle_redirect_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_redirect_action(action: RedirectAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let redirects = PgRedirectRepository::new(pool.clone());

    match action {
        RedirectAction::Show { access_code } => {
            let visits = PgVisitRepository::new(pool);
            show_redirect(&redirects, &visits, &access_code).await?;
        }
        RedirectAction::Delete { access_code, yes } => {
            delete_redirect(&redirects, &access_code, yes).await?;
        }
        RedirectAction::Count => {
            let count = redirects
                .count_active()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count redirects: {}", e))?;

            println!(
                "  Live redirects: {}",
                count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

fn ensure_format(access_code: &str) -> Result<()> {
    if !is_access_code_format(access_code) {
        anyhow::bail!("'{}' is not a valid access code", access_code);
    }
    Ok(())
}

/// Prints a redirect followed by its visits, oldest first.
///
/// ```text
/// my-link -> https://example.com
///   Access code: 9f86d081884c7d659a2feaa0c55ad015
///   Created:     2024-01-15 10:30
///
///   Time              IP               Country        City
///   2024-01-15 11:02  24.48.0.1        Canada         Montreal
/// ```
async fn show_redirect(
    redirects: &PgRedirectRepository,
    visits: &PgVisitRepository,
    access_code: &str,
) -> Result<()> {
    ensure_format(access_code)?;

    let redirect = redirects
        .find_by_access_code(access_code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Redirect not found")?;

    let history = visits
        .list_by_redirect(redirect.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load visits: {}", e))?;

    println!("{} -> {}", redirect.link.cyan().bold(), redirect.url);
    println!("  Access code: {}", redirect.access_code.bright_black());
    println!(
        "  Created:     {}",
        redirect.created_at.format("%Y-%m-%d %H:%M")
    );
    println!();

    if history.is_empty() {
        println!("{}", "  No visits yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<17} {:<16} {:<14} {:<14}",
        "Time".bright_white().bold(),
        "IP".bright_white().bold(),
        "Country".bright_white().bold(),
        "City".bright_white().bold()
    );

    for visit in &history {
        println!(
            "  {:<17} {:<16} {:<14} {:<14}",
            visit.created_at.format("%Y-%m-%d %H:%M").to_string(),
            visit.ip_address,
            visit.country.as_deref().unwrap_or("-"),
            visit.city.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!(
        "  Total: {}",
        history.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Soft-deletes a redirect after confirmation (default: No).
///
/// A code that matches nothing live is reported, not treated as an error.
async fn delete_redirect(
    redirects: &PgRedirectRepository,
    access_code: &str,
    skip_confirm: bool,
) -> Result<()> {
    ensure_format(access_code)?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete redirect {}?", access_code))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let affected = redirects
        .soft_delete_by_access_code(access_code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete redirect: {}", e))?;

    if affected == 0 {
        println!(
            "{}",
            "No live redirect has this access code, nothing deleted".yellow()
        );
    } else {
        println!("{}", "Redirect deleted".green().bold());
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
