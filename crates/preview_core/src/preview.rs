const TRUNCATED_MARKER: &str = "\n.[truncated]";
pub const MAX_DISPLAY_BODY: usize = 40_960;

pub fn truncate_for_display(body: &str) -> String {
    if body.len() <= MAX_DISPLAY_BODY {
        body.to_string()
    } else {
        let mut end = MAX_DISPLAY_BODY;
        while end > 0 && !body.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &body[..end];
        format!("{truncated}{TRUNCATED_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_for_display, MAX_DISPLAY_BODY, TRUNCATED_MARKER};

    #[test]
    fn short_body_kept_as_is() {
        assert_eq!(truncate_for_display("short body"), "short body");
    }

    #[test]
    fn long_body_appends_marker() {
        let body = "a".repeat(MAX_DISPLAY_BODY + 128);
        let shown = truncate_for_display(&body);
        assert!(shown.ends_with(TRUNCATED_MARKER));
        assert_eq!(shown.len(), MAX_DISPLAY_BODY + TRUNCATED_MARKER.len());
    }

    #[test]
    fn cut_respects_char_boundaries() {
        // 'é' is two bytes, so MAX_DISPLAY_BODY falls inside a character after the prefix.
        let body = format!("x{}", "é".repeat(MAX_DISPLAY_BODY));
        let shown = truncate_for_display(&body);
        let kept = shown.strip_suffix(TRUNCATED_MARKER).unwrap();
        assert_eq!(kept.len(), MAX_DISPLAY_BODY - 1);
    }
}
