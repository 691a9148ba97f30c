// src/config.rs
// =============================================================================
// Runtime settings.
//
// Every setting comes from a global CLI flag, which falls back to an
// environment variable and then to a default (clap does the fallback, see
// cli.rs). This module validates the values and normalises them.
//
//   --api-url       MCP_DIRECTORY_API_URL        backend base URL
//   --source-host   MCP_DIRECTORY_SOURCE_HOST    host of repository links
//   --raw-base-url  MCP_DIRECTORY_RAW_BASE_URL   where raw files are served
//   --log-level     MCP_DIRECTORY_LOG            tracing filter, e.g. "debug"
// =============================================================================

use anyhow::{anyhow, bail, Result};
use url::Url;

use crate::cli::Cli;
use crate::github::SourceHost;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_SOURCE_HOST: &str = "github.com";
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: Url,
    pub source: SourceHost,
    pub log_filter: String,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Settings> {
        let api_url = parse_base_url("API URL", &cli.api_url)?;
        let raw_base = parse_base_url("raw content URL", &cli.raw_base_url)?;

        let web_host = cli.source_host.trim().to_lowercase();
        if web_host.is_empty() || web_host.contains('/') {
            bail!("Invalid source host '{}': expected a bare host name", cli.source_host);
        }

        Ok(Settings {
            api_url,
            source: SourceHost {
                web_host,
                raw_base: raw_base.as_str().trim_end_matches('/').to_string(),
            },
            log_filter: cli.log_level.clone(),
        })
    }
}

// Accepts http(s) URLs only; anything else can't be used as a request base
fn parse_base_url(what: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value.trim()).map_err(|e| anyhow!("Invalid {} '{}': {}", what, value, e))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Invalid {} '{}': unsupported scheme '{}'", what, value, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(args: &[&str]) -> Result<Settings> {
        let mut argv = vec!["mcp-directory"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["readme", "https://github.com/a/b"]);
        Settings::from_cli(&Cli::try_parse_from(argv)?)
    }

    #[test]
    fn test_trailing_slash_trimmed_from_raw_base() {
        let s = settings(&["--raw-base-url", "https://raw.example.test/"]).unwrap();
        assert_eq!(s.source.raw_base, "https://raw.example.test");
    }

    #[test]
    fn test_source_host_normalised() {
        let s = settings(&["--source-host", " GitHub.com "]).unwrap();
        assert_eq!(s.source.web_host, "github.com");
    }

    #[test]
    fn test_rejects_non_http_api_url() {
        assert!(settings(&["--api-url", "ftp://backend.example.com"]).is_err());
        assert!(settings(&["--api-url", "not a url"]).is_err());
    }

    #[test]
    fn test_rejects_host_with_path() {
        assert!(settings(&["--source-host", "github.com/acme"]).is_err());
    }
}
