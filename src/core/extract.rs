use regex::Regex;

/// Extracts capture groups from a branch name using a user-supplied pattern.
///
/// Returns `None` when the branch name is empty, the pattern is blank or
/// fails to compile, or nothing matches. A match with zero capture groups
/// returns `Some(vec![])`, which is distinct from "no match".
pub fn extract(branch_name: &str, pattern: &str) -> Option<Vec<String>> {
    if branch_name.is_empty() {
        return None;
    }
    if pattern.trim().is_empty() {
        return None;
    }

    // The pattern is user-edited config; a compile failure is an input, not an error.
    let re = Regex::new(pattern).ok()?;
    let caps = re.captures(branch_name)?;

    Some(
        caps.iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const JIRA_PATTERN: &str = r"([A-Z][A-Z0-9]+-\d+)";

    #[test]
    fn extracts_issue_key_from_feature_branch() {
        let groups = extract("feature/PROJ-123-some-description", JIRA_PATTERN);
        assert_eq!(groups, Some(vec!["PROJ-123".to_string()]));
    }

    #[test]
    fn extracts_key_without_branch_prefix() {
        let groups = extract("PROJ-456", JIRA_PATTERN);
        assert_eq!(groups, Some(vec!["PROJ-456".to_string()]));
    }

    #[test]
    fn extracts_multiple_capture_groups_in_order() {
        let groups = extract("feature/PROJ-123-description", r"([A-Z]+)-(\d+)");
        assert_eq!(
            groups,
            Some(vec!["PROJ".to_string(), "123".to_string()])
        );
    }

    #[test]
    fn extracts_from_deeply_nested_branch_name() {
        let groups = extract("users/john/feature/TEAM-42-implement-auth", JIRA_PATTERN);
        assert_eq!(groups, Some(vec!["TEAM-42".to_string()]));
    }

    #[test]
    fn unmatched_branch_returns_none() {
        assert_eq!(extract("main", JIRA_PATTERN), None);
        assert_eq!(extract("feature/add-new-feature", JIRA_PATTERN), None);
    }

    #[test]
    fn empty_branch_name_returns_none() {
        assert_eq!(extract("", JIRA_PATTERN), None);
    }

    #[test]
    fn blank_pattern_returns_none() {
        assert_eq!(extract("feature/PROJ-123", ""), None);
        assert_eq!(extract("feature/PROJ-123", "   "), None);
    }

    #[test]
    fn invalid_pattern_returns_none_without_panicking() {
        assert_eq!(extract("feature/PROJ-123", "([invalid"), None);
    }

    #[test]
    fn pattern_without_groups_matches_to_empty_list() {
        let groups = extract("feature/PROJ-123", r"[A-Z]+-\d+");
        assert_eq!(groups, Some(Vec::new()));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(extract("feature/proj-123", JIRA_PATTERN), None);
    }

    #[test]
    fn first_leftmost_match_wins() {
        let groups = extract("AA-1-then-BB-2", JIRA_PATTERN);
        assert_eq!(groups, Some(vec!["AA-1".to_string()]));
    }

    #[test]
    fn optional_group_that_did_not_participate_is_empty() {
        let groups = extract("PROJ-123", r"([A-Z]+)-(\d+)(\.\d+)?");
        assert_eq!(
            groups,
            Some(vec![
                "PROJ".to_string(),
                "123".to_string(),
                String::new()
            ])
        );
    }
}
