// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments and resolve settings
// 2. Set up logging (stderr) and one shared HTTP client
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = the entry/README/submission
//    failed, 2 = unexpected error). A readme link that is not a repository
//    link is not a failure.
// =============================================================================

mod api;       // src/api/ - directory backend client and records
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - settings from flags and environment
mod detail;    // src/detail/ - detail view (entry + documentation panel)
mod directory; // src/directory/ - list view (filters, default logos)
mod error;     // src/error.rs - typed errors
mod github;    // src/github/ - README lookup for repository links
mod submit;    // src/submit.rs - submission form

use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use api::{Agent, DirectoryClient, Submission};
use cli::{Cli, Commands, SubmitArgs};
use config::{Settings, DEFAULT_LOG_FILTER};
use detail::{DocumentPanel, DocumentReport, ReadmeFormat};
use github::DocumentResolver;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    init_logging(&settings.log_filter);

    // One client for everything; clones share the connection pool
    let http = Client::builder().build()?;
    let api = DirectoryClient::new(http.clone(), settings.api_url.clone());
    let resolver = DocumentResolver::new(http, settings.source.clone());

    match cli.command {
        Commands::List {
            category,
            search,
            categories,
            json,
        } => handle_list(&api, category.as_deref(), &search, categories, json).await,
        Commands::Show {
            id,
            no_readme,
            html,
            json,
        } => {
            let format = readme_format(html);
            handle_show(&api, &resolver, &settings, &id, !no_readme, format, json).await
        }
        Commands::Readme { url, html, json } => {
            handle_readme(&resolver, &url, readme_format(html), json).await
        }
        Commands::Submit(args) => handle_submit(&api, &args).await,
    }
}

// Logs go to stderr so --json output on stdout stays machine-readable
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn readme_format(html: bool) -> ReadmeFormat {
    if html {
        ReadmeFormat::Html
    } else {
        ReadmeFormat::Markdown
    }
}

// Handles the 'list' subcommand
async fn handle_list(
    api: &DirectoryClient,
    category: Option<&str>,
    search: &str,
    categories_only: bool,
    json: bool,
) -> Result<i32> {
    let agents = api.list_agents().await?;

    if categories_only {
        let categories = directory::unique_categories(&agents);
        if json {
            print_json(&categories)?;
        } else {
            for category in categories {
                println!("{}", category);
            }
        }
        return Ok(0);
    }

    let shown = directory::filter_agents(&agents, category, search);

    if json {
        print_json(&shown)?;
    } else {
        print_table(&shown, agents.len());
    }
    Ok(0)
}

#[derive(Serialize)]
struct ShowReport<'a> {
    agent: &'a Agent,
    documentation: DocumentReport,
}

// Handles the 'show' subcommand
//
// A README problem never fails the command: the entry is still shown, with
// the reason in the documentation section
async fn handle_show(
    api: &DirectoryClient,
    resolver: &DocumentResolver,
    settings: &Settings,
    id: &str,
    with_readme: bool,
    format: ReadmeFormat,
    json: bool,
) -> Result<i32> {
    let agent = match api.get_agent(id).await {
        Ok(agent) => agent,
        Err(e) => {
            if json {
                print_json(&serde_json::json!({ "error": e.to_string() }))?;
            } else {
                println!("❌ Error: {}", e);
                println!("   Return to the directory with: mcp-directory list");
            }
            return Ok(1);
        }
    };

    let mut panel = DocumentPanel::new();
    if with_readme {
        let reference = agent.source_reference();
        let ticket = panel.begin(reference);
        let result = resolver.resolve(reference).await;
        panel.complete(ticket, result);
    } else {
        panel.hide();
    }

    if json {
        print_json(&ShowReport {
            agent: &agent,
            documentation: DocumentReport::from_panel(&panel, format),
        })?;
    } else {
        println!("{}", detail::render_agent(&agent, &settings.source.web_host));
        if let Some(documentation) = detail::render_documentation(&panel, format) {
            println!();
            println!("{}", documentation);
        }
    }
    Ok(0)
}

// Handles the 'readme' subcommand
async fn handle_readme(
    resolver: &DocumentResolver,
    url: &str,
    format: ReadmeFormat,
    json: bool,
) -> Result<i32> {
    let mut panel = DocumentPanel::new();
    let ticket = panel.begin(url);
    panel.complete(ticket, resolver.resolve(url).await);

    let report = DocumentReport::from_panel(&panel, format);
    let code = readme_exit_code(report.status);

    if json {
        print_json(&report)?;
    } else if let Some(documentation) = detail::render_documentation(&panel, format) {
        println!("{}", documentation);
    }

    Ok(code)
}

// Only a failed lookup is a failure; a link we don't resolve is not
fn readme_exit_code(status: &str) -> i32 {
    match status {
        "content" | "not_applicable" => 0,
        _ => 1,
    }
}

// Handles the 'submit' subcommand
async fn handle_submit(api: &DirectoryClient, args: &SubmitArgs) -> Result<i32> {
    let outcome = submit::submit(api, &Submission::from(args)).await;

    if args.json {
        print_json(&outcome)?;
    } else if outcome.success {
        println!("✅ {}", outcome.message);
    } else {
        println!("❌ {}", outcome.message);
    }

    Ok(if outcome.success { 0 } else { 1 })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{}", json_output);
    Ok(())
}

// Prints entries as a human-readable table in the terminal
fn print_table(agents: &[&Agent], total: usize) {
    println!("{:<10} {:<32} {:<30} {:<14} {:>6}", "ID", "NAME", "CATEGORIES", "SOURCE", "STARS");
    println!("{}", "=".repeat(96));

    for agent in agents {
        let source = if agent.is_open_source { "open" } else { "closed" };
        let stars = agent
            .github_stars
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<10} {:<32} {:<30} {:<14} {:>6}",
            truncate(&agent.id, 10),
            truncate(&agent.name, 32),
            truncate(&agent.category.join(", "), 30),
            source,
            stars
        );
    }

    println!();
    println!("📊 Showing {} of {} entr{}", agents.len(), total, if total == 1 { "y" } else { "ies" });
}

// Shortens to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use crate::github::DocumentFetchResult;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer name", 10), "a much ...");
        assert_eq!(truncate("ééééééééééé", 5), "éé...");
    }

    #[test]
    fn test_readme_exit_code() {
        let mut panel = DocumentPanel::new();
        let ticket = panel.begin("https://example.com/docs");
        panel.complete(ticket, DocumentFetchResult::NotApplicable);
        let report = DocumentReport::from_panel(&panel, ReadmeFormat::Markdown);
        assert_eq!(readme_exit_code(report.status), 0);

        let ticket = panel.begin("https://github.com/acme/widget");
        panel.complete(
            ticket,
            DocumentFetchResult::Error(DocumentError::NoReadme {
                tried: vec!["main".to_string(), "master".to_string()],
            }),
        );
        let report = DocumentReport::from_panel(&panel, ReadmeFormat::Markdown);
        assert_eq!(readme_exit_code(report.status), 1);

        assert_eq!(readme_exit_code("content"), 0);
    }
}
