use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod classify;
mod host;
mod listing;
mod lookup;
mod menu;
mod models;
mod rebuild;
mod submenu;

#[cfg(test)]
mod fixtures;

use host::HostSnapshot;
use models::{ListingPage, RebuildOutput};

#[derive(Parser)]
#[command(name = "tidymenu")]
#[command(about = "Rebuild a CMS admin menu around a curated core set", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the navigation from a host-state snapshot
    Rebuild {
        /// Host-state snapshot (JSON)
        #[arg(short, long)]
        state: PathBuf,

        /// Print the raw output structures as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the consolidated third-party listing page
    Listing {
        /// Host-state snapshot (JSON)
        #[arg(short, long)]
        state: PathBuf,

        /// Print the content model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify that a snapshot satisfies the canonical-layout contract
    Check {
        /// Host-state snapshot (JSON)
        #[arg(short, long)]
        state: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting tracing subscriber")?;

    match cli.command {
        Commands::Rebuild { state, json } => cmd_rebuild(&state, json),
        Commands::Listing { state, json } => cmd_listing(&state, json),
        Commands::Check { state } => cmd_check(&state),
    }
}

fn cmd_rebuild(state: &Path, json: bool) -> Result<()> {
    let snapshot = HostSnapshot::load(state)?;
    let output = rebuild::rebuild(&snapshot).context("rebuilding the host navigation")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_rebuild(&output);
    Ok(())
}

fn cmd_listing(state: &Path, json: bool) -> Result<()> {
    let snapshot = HostSnapshot::load(state)?;
    let page = rebuild::build_listing(&snapshot);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_listing(&page);
    Ok(())
}

fn cmd_check(state: &Path) -> Result<()> {
    let snapshot = HostSnapshot::load(state)?;
    match rebuild::rebuild(&snapshot) {
        Ok(_) => {
            println!("{} canonical layout satisfied", "ok:".green().bold());
            Ok(())
        }
        Err(err) => {
            println!("{} {err}", "broken:".red().bold());
            std::process::exit(1);
        }
    }
}

fn print_rebuild(output: &RebuildOutput) {
    println!("{}", "Top-level menu".bold());
    for (position, entry) in &output.menu {
        if entry.is_separator() {
            println!("  {:>4}  {}", position, "────────────".dimmed());
            continue;
        }
        let hidden = output.hidden.contains(&entry.identifier);
        let label = if hidden {
            format!("{} {}", entry.label, "(hidden)".dimmed())
        } else {
            entry.label.clone()
        };
        println!(
            "  {:>4}  {}  {}",
            position,
            label.bold(),
            entry.identifier.dimmed()
        );
    }

    println!();
    println!("{}", "Submenus".bold());
    for (parent, group) in &output.submenu {
        println!("  {}", parent.cyan());
        for entry in group.values() {
            println!(
                "    - {}  {}",
                entry.label_text().unwrap_or("(placeholder)"),
                entry.identifier.dimmed()
            );
        }
    }

    if let Some(page) = &output.settings_page {
        println!();
        println!(
            "{} {} under {} (slug {})",
            "register:".green(),
            page.menu_title,
            page.parent,
            page.slug
        );
    }

    if let Some(banner) = &output.banner {
        println!("{} {} -> {}", "banner:".yellow(), banner.text, banner.url);
    }
}

fn print_listing(page: &ListingPage) {
    println!("{}", page.title.bold());
    println!("{}", page.description);

    for block in &page.blocks {
        println!();
        println!("  {}  {}", block.link.text.bold(), block.link.url.dimmed());
        for child in &block.children {
            println!("    - {}  {}", child.text, child.url.dimmed());
        }
        if let Some(note) = &block.note {
            println!("    {}", note.italic());
        }
    }

    if !page.settings_links.is_empty() {
        println!();
        println!("  {}", "Plugin Settings".bold());
        for link in &page.settings_links {
            println!("    - {}  {}", link.text, link.url.dimmed());
        }
    }
}
