use std::sync::LazyLock;

use regex::Regex;

// SSH shorthand shape: user@host:path. Anything else is either HTTP(S)
// or unrecognized.
static SSH_REMOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+:.+$").expect("ssh remote shape must compile"));

struct ProviderRule {
    markers: &'static [&'static str],
    branch_prefix: &'static str,
}

// Keyed by host substring; adding a provider is a data change. Everything
// unlisted (GitHub included) falls through to /tree/.
const PROVIDER_RULES: &[ProviderRule] = &[
    ProviderRule {
        markers: &["gitlab.com", "gitlab."],
        branch_prefix: "/-/tree/",
    },
    ProviderRule {
        markers: &["bitbucket.org", "bitbucket."],
        branch_prefix: "/src/",
    },
];

const DEFAULT_BRANCH_PREFIX: &str = "/tree/";

/// Builds a web-browsable URL for `branch_name` on the repository behind
/// `remote_url` (SSH shorthand or HTTP(S) form).
///
/// Returns `None` when the remote does not match either supported shape.
/// The branch name is inserted verbatim, without percent-encoding.
pub fn build_branch_url(remote_url: &str, branch_name: &str) -> Option<String> {
    let base = https_base_url(remote_url)?;
    let prefix = branch_prefix_for(&base);
    Some(format!("{base}{prefix}{branch_name}"))
}

/// Normalizes a raw remote address to an HTTPS base URL with any trailing
/// `.git` suffix and path separators removed.
pub fn https_base_url(remote_url: &str) -> Option<String> {
    let url = remote_url.trim();
    if url.is_empty() {
        return None;
    }

    let https = if SSH_REMOTE.is_match(url) {
        let at = url.find('@')?;
        let colon = at + url[at..].find(':')?;
        let host = &url[at + 1..colon];
        let path = &url[colon + 1..];
        format!("https://{host}/{path}")
    } else if url.starts_with("https://") || url.starts_with("http://") {
        url.replacen("http://", "https://", 1)
    } else {
        return None;
    };

    let base = https.strip_suffix(".git").unwrap_or(&https);
    Some(base.trim_end_matches('/').to_string())
}

fn branch_prefix_for(base_url: &str) -> &'static str {
    PROVIDER_RULES
        .iter()
        .find(|rule| rule.markers.iter().any(|marker| base_url.contains(marker)))
        .map_or(DEFAULT_BRANCH_PREFIX, |rule| rule.branch_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_ssh_remote_maps_to_tree_url() {
        let url = build_branch_url("git@github.com:org/repo.git", "feature/ABC-123");
        assert_eq!(
            url.as_deref(),
            Some("https://github.com/org/repo/tree/feature/ABC-123")
        );
    }

    #[test]
    fn github_https_remote_maps_to_tree_url() {
        let url = build_branch_url("https://github.com/org/repo.git", "main");
        assert_eq!(url.as_deref(), Some("https://github.com/org/repo/tree/main"));
    }

    #[test]
    fn gitlab_remote_uses_dash_tree_path() {
        let url = build_branch_url("https://gitlab.com/org/repo.git", "develop");
        assert_eq!(
            url.as_deref(),
            Some("https://gitlab.com/org/repo/-/tree/develop")
        );
    }

    #[test]
    fn self_hosted_gitlab_is_recognized_by_marker() {
        let url = build_branch_url("git@gitlab.internal.corp:team/app.git", "main");
        assert_eq!(
            url.as_deref(),
            Some("https://gitlab.internal.corp/team/app/-/tree/main")
        );
    }

    #[test]
    fn bitbucket_remote_uses_src_path() {
        let url = build_branch_url("git@bitbucket.org:org/repo.git", "release/1.0");
        assert_eq!(
            url.as_deref(),
            Some("https://bitbucket.org/org/repo/src/release/1.0")
        );
    }

    #[test]
    fn http_prefix_is_upgraded_to_https() {
        let url = build_branch_url("http://github.com/org/repo", "main");
        assert_eq!(url.as_deref(), Some("https://github.com/org/repo/tree/main"));
    }

    #[test]
    fn unrecognized_remote_returns_none() {
        assert_eq!(build_branch_url("not a url", "main"), None);
        assert_eq!(build_branch_url("ftp://host/repo", "main"), None);
    }

    #[test]
    fn empty_remote_returns_none() {
        assert_eq!(build_branch_url("", "main"), None);
        assert_eq!(build_branch_url("   ", "main"), None);
    }

    #[test]
    fn branch_with_path_separators_is_inserted_verbatim() {
        let url = build_branch_url("git@github.com:org/repo.git", "feature/ABC-123");
        assert!(url.expect("url should build").ends_with("/tree/feature/ABC-123"));
    }

    #[test]
    fn trailing_slash_after_git_suffix_is_stripped() {
        let base = https_base_url("https://github.com/org/repo/");
        assert_eq!(base.as_deref(), Some("https://github.com/org/repo"));
    }

    #[test]
    fn build_branch_url_is_pure() {
        let first = build_branch_url("git@github.com:org/repo.git", "main");
        let second = build_branch_url("git@github.com:org/repo.git", "main");
        assert_eq!(first, second);
    }

    #[test]
    fn ssh_host_is_text_between_at_and_first_colon() {
        let base = https_base_url("deploy@git.example.io:group/sub/project.git");
        assert_eq!(base.as_deref(), Some("https://git.example.io/group/sub/project"));
    }
}
