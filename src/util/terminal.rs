pub fn osc8_hyperlink(url: &str, label: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

pub fn truncate_for_display(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let keep: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{keep}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperlink_wraps_label_in_osc8_sequences() {
        let link = osc8_hyperlink("https://jira.company.com/browse/A-1", "A-1");
        assert!(link.starts_with("\u{1b}]8;;https://"));
        assert!(link.contains("A-1"));
        assert!(link.ends_with("\u{1b}]8;;\u{1b}\\"));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_for_display("PROJ-123", 40), "PROJ-123");
    }

    #[test]
    fn truncate_adds_ellipsis_for_long_text() {
        let value = "https://jira.company.com/browse/VERYLONGPROJECT-123456";
        let out = truncate_for_display(value, 24);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 24);
    }
}
