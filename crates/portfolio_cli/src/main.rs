//! Portfolio catalog CLI.
//!
//! # Responsibility
//! - Probe `portfolio_core` linkage and version.
//! - Run catalog queries from a terminal while authoring `projects.json`.

use clap::{Parser, Subcommand};
use log::info;
use portfolio_core::{
    builtin_catalog, default_log_level, init_logging, Catalog, CatalogService, Project,
    ProjectQuery, DEFAULT_PAGE_SIZE,
};
use serde_json::json;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Query the portfolio project catalog")]
struct Cli {
    /// JSON catalog file to use instead of the built-in catalog.
    #[arg(long, global = true, env = "PORTFOLIO_CATALOG")]
    catalog: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "PORTFOLIO_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "PORTFOLIO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// List one page of projects.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Show one project and its related projects.
    Show { id: String },
    /// Show the featured showcase.
    Featured,
    /// List category tabs.
    Categories,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    if let Command::Ping = cli.command {
        println!("portfolio_core ping={}", portfolio_core::ping());
        println!("portfolio_core version={}", portfolio_core::core_version());
        return Ok(());
    }

    let loaded;
    let catalog: &Catalog = match cli.catalog.as_ref() {
        Some(path) => {
            loaded = Catalog::from_json_file(path)?;
            &loaded
        }
        None => builtin_catalog()?,
    };
    let service = CatalogService::new(catalog);
    info!("event=cli_run module=cli status=start projects={}", catalog.len());

    match cli.command {
        Command::Ping => {}
        Command::List {
            search,
            category,
            page,
            page_size,
        } => {
            let query = ProjectQuery {
                search,
                category,
                page_size: Some(page_size),
                page_index: page,
            };
            let result = service.list_projects(&query)?;
            if cli.json {
                print_json(&json!({
                    "items": result.items,
                    "pageIndex": result.page_index,
                    "pageSize": result.page_size,
                    "totalItems": result.total_items,
                    "totalPages": result.total_pages,
                }))?;
            } else {
                for project in &result.items {
                    print_project_line(project);
                }
                println!(
                    "page {}/{} ({} matching)",
                    display_page(result.page_index, result.total_pages),
                    result.total_pages,
                    result.total_items
                );
            }
        }
        Command::Show { id } => {
            let detail = service
                .project_detail(&id)
                .ok_or_else(|| format!("project not found: {id}"))?;
            if cli.json {
                print_json(&json!({
                    "project": detail.project,
                    "related": detail.related,
                }))?;
            } else {
                print_project_line(detail.project);
                println!("  {}", detail.project.description);
                if let Some(url) = &detail.project.demo_url {
                    println!("  demo: {url}");
                }
                if let Some(url) = &detail.project.code_url {
                    println!("  code: {url}");
                }
                for related in &detail.related {
                    println!("  related: {}", related.id);
                }
            }
        }
        Command::Featured => {
            let showcase = service.showcase();
            if cli.json {
                print_json(&json!({
                    "featured": showcase.featured,
                    "regular": showcase.regular,
                }))?;
            } else {
                for project in &showcase.featured {
                    print_project_line(project);
                }
            }
        }
        Command::Categories => {
            let categories = service.categories();
            if cli.json {
                print_json(&json!(categories))?;
            } else {
                for category in categories {
                    println!("{category}");
                }
            }
        }
    }
    Ok(())
}

fn print_project_line(project: &Project) {
    let marker = if project.is_featured() { "*" } else { " " };
    println!(
        "{marker} {:<20} {} [{}]",
        project.id,
        project.title,
        project.tags.join(", ")
    );
}

/// One-based page number for display; `0` when there are no pages.
fn display_page(page_index: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        page_index + 1
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
