//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.len()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
