/// Assembles a URL from a host, a path template, and captured groups.
///
/// Every occurrence of the literal token `{i}` in the template is replaced
/// by `groups[i]`. Tokens with no corresponding group stay verbatim.
/// Returns `None` only when the host is blank.
pub fn compose(host_url: &str, path_pattern: &str, groups: &[String]) -> Option<String> {
    if host_url.trim().is_empty() {
        return None;
    }

    let host = host_url.trim_end_matches('/');

    let mut path = if !path_pattern.is_empty() && !path_pattern.starts_with('/') {
        format!("/{path_pattern}")
    } else {
        path_pattern.to_string()
    };

    for (index, group) in groups.iter().enumerate() {
        path = path.replace(&format!("{{{index}}}"), group);
    }

    Some(format!("{host}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn composes_host_and_single_placeholder() {
        let url = compose(
            "https://jira.company.com",
            "/browse/{0}",
            &groups(&["PROJ-123"]),
        );
        assert_eq!(url.as_deref(), Some("https://jira.company.com/browse/PROJ-123"));
    }

    #[test]
    fn composes_multiple_placeholders_by_index() {
        let url = compose(
            "https://jira.company.com",
            "/projects/{0}/issues/{1}",
            &groups(&["PROJ", "123"]),
        );
        assert_eq!(
            url.as_deref(),
            Some("https://jira.company.com/projects/PROJ/issues/123")
        );
    }

    #[test]
    fn blank_host_returns_none() {
        assert_eq!(compose("", "/browse/{0}", &groups(&["X"])), None);
        assert_eq!(compose("   ", "/browse/{0}", &groups(&["X"])), None);
    }

    #[test]
    fn trailing_host_slash_is_stripped() {
        let url = compose("https://h.com/", "/browse/{0}", &groups(&["PROJ-123"]));
        assert_eq!(url.as_deref(), Some("https://h.com/browse/PROJ-123"));
    }

    #[test]
    fn missing_leading_path_slash_is_added() {
        let url = compose("https://h.com", "browse/{0}", &groups(&["PROJ-123"]));
        assert_eq!(url.as_deref(), Some("https://h.com/browse/PROJ-123"));
    }

    #[test]
    fn unfilled_placeholder_stays_verbatim() {
        let url = compose("https://h.com", "/browse/{0}", &[]);
        assert_eq!(url.as_deref(), Some("https://h.com/browse/{0}"));
    }

    #[test]
    fn repeated_placeholder_is_fully_substituted() {
        let url = compose("https://h.com", "/{0}/d/{0}", &groups(&["X"]));
        assert_eq!(url.as_deref(), Some("https://h.com/X/d/X"));
    }

    #[test]
    fn empty_path_yields_bare_host() {
        let url = compose("https://h.com", "", &groups(&["X"]));
        assert_eq!(url.as_deref(), Some("https://h.com"));
    }

    #[test]
    fn extra_groups_beyond_placeholders_are_ignored() {
        let url = compose("https://h.com", "/browse/{0}", &groups(&["A", "B", "C"]));
        assert_eq!(url.as_deref(), Some("https://h.com/browse/A"));
    }

    #[test]
    fn compose_is_pure() {
        let first = compose("https://h.com", "/browse/{0}", &groups(&["PROJ-9"]));
        let second = compose("https://h.com", "/browse/{0}", &groups(&["PROJ-9"]));
        assert_eq!(first, second);
    }
}
