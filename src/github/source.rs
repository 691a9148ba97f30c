// src/github/source.rs
// =============================================================================
// This module recognises repository links and turns them into raw-content
// URLs.
//
// A supported link looks like:
//   https://<host>/<owner>/<project>[/<extra-path>]
//
// Two shapes are handled:
// - Direct file:      https://github.com/acme/widget/blob/main/docs/GUIDE.md
//   -> one raw URL:   https://raw.githubusercontent.com/acme/widget/main/docs/GUIDE.md
// - Repository root:  https://github.com/acme/widget
//   -> README.md under each conventional branch, in order (main, master)
//
// Everything else (other hosts, http://, missing owner or project) is not a
// repository link and yields None.
// =============================================================================

use url::Url;

/// Branch names tried, in order, when a link names only a repository
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

/// File looked up under each default branch
pub const README_FILE: &str = "README.md";

/// Where repositories are browsed and where their raw files are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHost {
    /// Host name of the web UI, e.g. "github.com"
    pub web_host: String,
    /// Base URL serving raw file contents, without a trailing slash
    pub raw_base: String,
}

impl Default for SourceHost {
    fn default() -> Self {
        Self {
            web_host: "github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
        }
    }
}

/// How the rest of the path (after owner/project) was classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMode {
    /// The link names one file; `raw_path` is "<owner>/<project>/<branch>/<file path>"
    DirectFile { raw_path: String },
    /// The link names only the project (or a non-file page inside it)
    RepositoryRoot,
}

/// A repository link broken into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub owner: String,
    pub project: String,
    pub mode: FileMode,
}

impl RepoLocation {
    // Parses a repository link for the given web host
    //
    // Returns None when the link does not match the supported pattern.
    // Query strings and fragments are ignored.
    //
    // Examples (web_host = "github.com"):
    //   "https://github.com/rust-lang/rust"       -> root, rust-lang/rust
    //   "https://github.com/user/repo.git"        -> root, user/repo
    //   "https://github.com/a/b/blob/dev/x.md"    -> direct file a/b/dev/x.md
    //   "https://gitlab.com/user/repo"            -> None
    pub fn parse(reference: &str, web_host: &str) -> Option<RepoLocation> {
        let url = Url::parse(reference.trim()).ok()?;

        if url.scheme() != "https" || url.port().is_some() {
            return None;
        }
        if !url.host_str()?.eq_ignore_ascii_case(web_host) {
            return None;
        }

        let mut segments = url.path_segments()?;
        let owner = segments.next().filter(|s| !s.is_empty())?;
        let project = segments
            .next()
            .map(|s| s.trim_end_matches(".git"))
            .filter(|s| !s.is_empty())?;
        let rest: Vec<&str> = segments.collect();

        // "/blob/" must be followed by something, so a trailing "blob" is not a file link
        let blob_at = rest
            .iter()
            .position(|s| *s == "blob")
            .filter(|&i| i + 1 < rest.len());

        let mode = match blob_at {
            Some(i) => {
                let mut file_path = rest.clone();
                file_path.remove(i);
                FileMode::DirectFile {
                    raw_path: format!("{}/{}/{}", owner, project, file_path.join("/")),
                }
            }
            None => FileMode::RepositoryRoot,
        };

        Some(RepoLocation {
            owner: owner.to_string(),
            project: project.to_string(),
            mode,
        })
    }

    /// Raw-content URLs to try, in order.
    ///
    /// One URL for a direct file, one per entry of [`DEFAULT_BRANCHES`]
    /// for a repository root.
    pub fn candidate_urls(&self, raw_base: &str) -> Vec<String> {
        let raw_base = raw_base.trim_end_matches('/');
        match &self.mode {
            FileMode::DirectFile { raw_path } => vec![format!("{}/{}", raw_base, raw_path)],
            FileMode::RepositoryRoot => DEFAULT_BRANCHES
                .iter()
                .map(|branch| {
                    format!(
                        "{}/{}/{}/{}/{}",
                        raw_base, self.owner, self.project, branch, README_FILE
                    )
                })
                .collect(),
        }
    }

    pub fn is_direct_file(&self) -> bool {
        matches!(self.mode, FileMode::DirectFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "https://raw.githubusercontent.com";

    fn parse(url: &str) -> Option<RepoLocation> {
        RepoLocation::parse(url, "github.com")
    }

    #[test]
    fn test_parse_repository_root() {
        let location = parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(location.owner, "rust-lang");
        assert_eq!(location.project, "rust");
        assert_eq!(location.mode, FileMode::RepositoryRoot);
    }

    #[test]
    fn test_parse_strips_git_suffix() {
        let location = parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(location.project, "repo");
    }

    #[test]
    fn test_root_candidates_try_main_then_master() {
        let location = parse("https://github.com/ownerA/projA/").unwrap();
        assert_eq!(
            location.candidate_urls(RAW),
            vec![
                "https://raw.githubusercontent.com/ownerA/projA/main/README.md",
                "https://raw.githubusercontent.com/ownerA/projA/master/README.md",
            ]
        );
    }

    #[test]
    fn test_tree_link_is_repository_root() {
        let location = parse("https://github.com/acme/widget/tree/dev/src").unwrap();
        assert!(!location.is_direct_file());
    }

    #[test]
    fn test_blob_link_is_direct_file() {
        let location = parse("https://github.com/acme/widget/blob/dev/docs/README.md").unwrap();
        assert!(location.is_direct_file());
        assert_eq!(
            location.candidate_urls(RAW),
            vec!["https://raw.githubusercontent.com/acme/widget/dev/docs/README.md"]
        );
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let location = parse("https://github.com/acme/widget/blob/main/README.md?plain=1#usage").unwrap();
        assert_eq!(
            location.candidate_urls("https://raw.example.test/"),
            vec!["https://raw.example.test/acme/widget/main/README.md"]
        );
    }

    #[test]
    fn test_trailing_blob_is_not_a_file() {
        let location = parse("https://github.com/acme/widget/blob").unwrap();
        assert_eq!(location.mode, FileMode::RepositoryRoot);
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert!(parse("https://GitHub.com/acme/widget").is_some());
    }

    #[test]
    fn test_rejects_unsupported_links() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("not a url"), None);
        assert_eq!(parse("https://gitlab.com/user/repo"), None);
        assert_eq!(parse("http://github.com/user/repo"), None);
        assert_eq!(parse("https://github.com/user"), None);
        assert_eq!(parse("https://github.com/user/"), None);
        assert_eq!(parse("https://github.com:8443/user/repo"), None);
        assert_eq!(parse("https://www.example.com/about"), None);
    }

    #[test]
    fn test_custom_web_host() {
        let location = RepoLocation::parse("https://git.example.org/team/tool", "git.example.org");
        assert!(location.is_some());
    }
}
