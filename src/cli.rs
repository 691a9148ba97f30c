// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Each subcommand is one view of the directory:
// - list:   the home page (category filter + search)
// - show:   the detail page of one entry, with its README
// - readme: the README lookup on its own, for any repository link
// - submit: the submission form
//
// Global options configure where we talk to; each one can also be set
// through an environment variable (the `env = ...` attributes).
// =============================================================================

use clap::{Args, Parser, Subcommand};

use crate::api::Submission;
use crate::config::{DEFAULT_API_URL, DEFAULT_LOG_FILTER, DEFAULT_RAW_BASE_URL, DEFAULT_SOURCE_HOST};

#[derive(Parser, Debug)]
#[command(
    name = "mcp-directory",
    version,
    about = "Browse, search and submit entries of an MCP server directory",
    long_about = "mcp-directory is a terminal client for a directory of MCP servers. \
                  It lists and filters entries, shows an entry together with the README \
                  of its source repository, and submits new entries for review."
)]
pub struct Cli {
    /// Base URL of the directory backend
    #[arg(long, global = true, env = "MCP_DIRECTORY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Host name of repository links READMEs are looked up for
    #[arg(long, global = true, env = "MCP_DIRECTORY_SOURCE_HOST", default_value = DEFAULT_SOURCE_HOST)]
    pub source_host: String,

    /// Base URL serving raw file contents of those repositories
    #[arg(long, global = true, env = "MCP_DIRECTORY_RAW_BASE_URL", default_value = DEFAULT_RAW_BASE_URL)]
    pub raw_base_url: String,

    /// Log filter written to stderr (e.g. "debug", "mcp_directory=trace")
    #[arg(long, global = true, env = "MCP_DIRECTORY_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List directory entries
    ///
    /// Example: mcp-directory list --category Database --search postgres
    List {
        /// Only show entries in this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text matched against name and description
        #[arg(long, short, default_value = "")]
        search: String,

        /// Print the available categories instead of the entries
        #[arg(long)]
        categories: bool,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one entry and the README of its repository
    ///
    /// Example: mcp-directory show 42 --html
    Show {
        /// Identifier of the entry
        id: String,

        /// Skip the README lookup
        #[arg(long)]
        no_readme: bool,

        /// Render the README as HTML instead of printing raw Markdown
        #[arg(long)]
        html: bool,

        /// Output the entry and its documentation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch the README behind a repository link
    ///
    /// Example: mcp-directory readme https://github.com/acme/widget
    Readme {
        /// Repository link, or a link to a file inside it (…/blob/<branch>/<path>)
        url: String,

        /// Render the README as HTML instead of printing raw Markdown
        #[arg(long)]
        html: bool,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a new entry for review
    Submit(SubmitArgs),
}

/// Fields of the submission form. Required ones are checked before sending,
/// so they default to empty here instead of being enforced by clap.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Entry name (required)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Website URL (required)
    #[arg(long, default_value = "")]
    pub website: String,

    /// Short description (required)
    #[arg(long, default_value = "")]
    pub description: String,

    /// Logo image URL (required)
    #[arg(long, default_value = "")]
    pub logo: String,

    /// Comma-separated categories (required)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Source repository URL
    #[arg(long, default_value = "")]
    pub git_repo: String,

    /// Pricing information
    #[arg(long, default_value = "")]
    pub pricing: String,

    /// Comma-separated features
    #[arg(long, default_value = "")]
    pub features: String,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&SubmitArgs> for Submission {
    fn from(args: &SubmitArgs) -> Self {
        Submission {
            name: args.name.clone(),
            website: args.website.clone(),
            description: args.description.clone(),
            git_repo: args.git_repo.clone(),
            logo: args.logo.clone(),
            category: args.category.clone(),
            pricing: args.pricing.clone(),
            features: args.features.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["mcp-directory", "show", "42", "--html"]).unwrap();
        match cli.command {
            Commands::Show { id, html, no_readme, json } => {
                assert_eq!(id, "42");
                assert!(html);
                assert!(!no_readme);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_option_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mcp-directory",
            "list",
            "--api-url",
            "https://backend.example.com",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "https://backend.example.com");
    }

    #[test]
    fn test_submit_args_into_submission() {
        let cli = Cli::try_parse_from([
            "mcp-directory",
            "submit",
            "--name",
            "Notes",
            "--git-repo",
            "https://github.com/acme/notes",
        ])
        .unwrap();
        let Commands::Submit(args) = cli.command else {
            panic!("expected submit");
        };

        let submission = Submission::from(&args);
        assert_eq!(submission.name, "Notes");
        assert_eq!(submission.git_repo, "https://github.com/acme/notes");
        assert_eq!(submission.website, "");
    }
}
