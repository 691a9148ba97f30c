// src/detail/render.rs
// =============================================================================
// Turns an entry and its documentation panel into terminal output.
//
// The documentation section always ends in a defined message, whatever the
// panel state is, so the user never sees a section stuck "loading" once the
// README lookup has finished.
// =============================================================================

use chrono::DateTime;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

use super::panel::{DocumentPanel, PanelState};
use crate::api::{Agent, Logo};
use crate::directory::default_logo;
use crate::github::{DocumentFetchResult, RepoLocation};

pub const LOADING_MESSAGE: &str = "Loading documentation...";
pub const NOT_APPLICABLE_MESSAGE: &str =
    "Documentation unavailable: source is not a supported repository link.";
pub const EMPTY_MESSAGE: &str = "No README content found or loaded.";

/// How README Markdown is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeFormat {
    Markdown,
    Html,
}

/// JSON shape of the documentation section
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn from_panel(panel: &DocumentPanel, format: ReadmeFormat) -> Self {
        let source = panel.reference().map(str::to_string);
        let (status, content, error) = match panel.state() {
            PanelState::Hidden => ("hidden", None, None),
            PanelState::Pending(_) => ("pending", None, None),
            PanelState::Ready(DocumentFetchResult::NotApplicable) => ("not_applicable", None, None),
            PanelState::Ready(DocumentFetchResult::Error(e)) => ("error", None, Some(e.to_string())),
            PanelState::Ready(DocumentFetchResult::Content(text)) => {
                ("content", Some(format_readme(text, format)), None)
            }
        };

        DocumentReport {
            status,
            source,
            content,
            error,
        }
    }
}

// Renders the header block of the detail view
//
// `web_host` decides whether the website doubles as the source link
pub fn render_agent(agent: &Agent, web_host: &str) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{}  {}", logo_badge(agent), agent.name));
    if !agent.category.is_empty() {
        lines.push(format!("Categories: {}", agent.category.join(", ")));
    }
    lines.push(String::new());
    if !agent.description.is_empty() {
        lines.push(agent.description.clone());
        lines.push(String::new());
    }

    let website = agent.website_link();
    if let Some(website) = website {
        let same_as_repo = agent.github.as_deref() == Some(agent.website.as_str());
        let label = if same_as_repo { "Repo" } else { "Website" };
        lines.push(format!("🌐 {}: {}", label, website));
    }
    if let Some(source) = source_link(agent, web_host).filter(|s| Some(*s) != website) {
        lines.push(format!("📦 Source: {}", source));
    }
    if let Some(handle) = agent.twitter_handle() {
        lines.push(format!("🐦 Twitter: https://twitter.com/{} (@{})", handle, handle));
    }
    if let Some(discord) = agent.discord.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("💬 Discord: {}", discord));
    }
    if let Some(stars) = agent.github_stars {
        lines.push(format!("⭐ Stars: {}", stars));
    }

    let mut meta = Vec::new();
    if let Some(updated) = agent.last_updated.as_deref().filter(|u| !u.is_empty()) {
        meta.push(format!("📅 Last updated: {}", display_date(updated)));
    }
    let source_kind = if agent.is_open_source { "Open Source" } else { "Closed Source" };
    meta.push(source_kind.to_string());
    lines.push(String::new());
    lines.push(meta.join(" • "));

    lines.join("\n")
}

// Renders the documentation section for every panel state
pub fn render_documentation(panel: &DocumentPanel, format: ReadmeFormat) -> Option<String> {
    let body = match panel.state() {
        PanelState::Hidden => return None,
        PanelState::Pending(_) => LOADING_MESSAGE.to_string(),
        PanelState::Ready(DocumentFetchResult::NotApplicable) => NOT_APPLICABLE_MESSAGE.to_string(),
        PanelState::Ready(DocumentFetchResult::Error(e)) => {
            format!("Error loading documentation: {}", e)
        }
        PanelState::Ready(DocumentFetchResult::Content(text)) if text.trim().is_empty() => {
            EMPTY_MESSAGE.to_string()
        }
        PanelState::Ready(DocumentFetchResult::Content(text)) => format_readme(text, format),
    };

    Some(format!("📄 Documentation (from README)\n{}\n{}", "=".repeat(40), body))
}

// GitHub-flavoured extensions: tables, strikethrough, task lists, footnotes
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn format_readme(text: &str, format: ReadmeFormat) -> String {
    match format {
        ReadmeFormat::Markdown => text.to_string(),
        ReadmeFormat::Html => markdown_to_html(text),
    }
}

// `github` when set, otherwise the website if it is a repository link
fn source_link<'a>(agent: &'a Agent, web_host: &str) -> Option<&'a str> {
    match agent.github.as_deref() {
        Some(github) if !github.is_empty() => Some(github),
        _ => Some(agent.website.as_str())
            .filter(|w| RepoLocation::parse(w, web_host).is_some()),
    }
}

fn logo_badge(agent: &Agent) -> String {
    match agent.logo.as_ref().filter(|l| l.is_usable()) {
        Some(Logo::Url(_)) => "🖼".to_string(),
        Some(Logo::Initials(logo)) => format!("[{}]", logo.initials),
        None => match default_logo(&agent.name) {
            Logo::Initials(logo) => format!("[{}]", logo.initials),
            Logo::Url(_) => String::new(),
        },
    }
}

// RFC 3339 timestamps become a plain date; anything else is shown as-is
fn display_date(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use serde_json::json;

    fn agent(value: serde_json::Value) -> Agent {
        serde_json::from_value(value).unwrap()
    }

    fn ready(result: DocumentFetchResult) -> DocumentPanel {
        let mut panel = DocumentPanel::new();
        let ticket = panel.begin("https://github.com/acme/widget");
        panel.complete(ticket, result);
        panel
    }

    #[test]
    fn test_every_state_has_a_message() {
        let mut pending = DocumentPanel::new();
        pending.begin("https://github.com/acme/widget");
        assert!(render_documentation(&pending, ReadmeFormat::Markdown)
            .unwrap()
            .ends_with(LOADING_MESSAGE));

        let na = ready(DocumentFetchResult::NotApplicable);
        assert!(render_documentation(&na, ReadmeFormat::Markdown)
            .unwrap()
            .ends_with(NOT_APPLICABLE_MESSAGE));

        let err = ready(DocumentFetchResult::Error(DocumentError::NoReadme {
            tried: vec!["main".into(), "master".into()],
        }));
        assert!(render_documentation(&err, ReadmeFormat::Markdown)
            .unwrap()
            .ends_with("Error loading documentation: Could not find README.md in common branches (main/master)."));

        let empty = ready(DocumentFetchResult::Content("  \n".into()));
        assert!(render_documentation(&empty, ReadmeFormat::Markdown)
            .unwrap()
            .ends_with(EMPTY_MESSAGE));

        assert_eq!(render_documentation(&DocumentPanel::new(), ReadmeFormat::Markdown), None);
    }

    #[test]
    fn test_readme_as_html() {
        let panel = ready(DocumentFetchResult::Content("# Widget\n\n~~old~~".into()));
        let text = render_documentation(&panel, ReadmeFormat::Html).unwrap();
        assert!(text.contains("<h1>Widget</h1>"));
        assert!(text.contains("<del>old</del>"));
    }

    #[test]
    fn test_markdown_table() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_report_for_content() {
        let panel = ready(DocumentFetchResult::Content("# Widget".into()));
        let report = DocumentReport::from_panel(&panel, ReadmeFormat::Markdown);
        assert_eq!(report.status, "content");
        assert_eq!(report.content.as_deref(), Some("# Widget"));
        assert_eq!(report.source.as_deref(), Some("https://github.com/acme/widget"));
    }

    #[test]
    fn test_render_agent_links_and_meta() {
        let a = agent(json!({
            "id": "1",
            "name": "Widget Server",
            "website": "https://github.com/acme/widget",
            "description": "Widgets over MCP",
            "category": ["Tools"],
            "isOpenSource": true,
            "twitter": "@acme",
            "lastUpdated": "2024-05-01T10:00:00Z"
        }));

        let text = render_agent(&a, "github.com");

        assert!(text.contains("Widget Server"));
        assert!(text.contains("[WS]"));
        assert!(text.contains("Website: https://github.com/acme/widget"));
        // the website already is the repository link, so no separate source line
        assert!(!text.contains("Source:"));
        assert!(text.contains("https://twitter.com/acme"));
        assert!(text.contains("Last updated: 2024-05-01"));
        assert!(text.contains("Open Source"));
    }

    #[test]
    fn test_render_agent_separate_source() {
        let a = agent(json!({
            "id": "1",
            "name": "Widget",
            "website": "https://widget.dev",
            "github": "https://github.com/acme/widget",
            "lastUpdated": "last week"
        }));

        let text = render_agent(&a, "github.com");

        assert!(text.contains("Website: https://widget.dev"));
        assert!(text.contains("Source: https://github.com/acme/widget"));
        assert!(text.contains("Last updated: last week"));
        assert!(text.contains("Closed Source"));
    }
}
