//! HTML escaping for untrusted message text

/// Escape `&`, `<` and `>` for embedding in HTML text content.
///
/// Applied exactly once to source text; existing entities are escaped again at
/// the ampersand (`&amp;` becomes `&amp;amp;`).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double- or single-quoted HTML attribute
pub fn escape_attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse `escape_html`, for consumers that display spans as plain text.
///
/// Only the three entities `escape_html` produces are decoded.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match entity_len(tail) {
            Some(len) => {
                out.push(match &tail[..len] {
                    "&lt;" => '<',
                    "&gt;" => '>',
                    _ => '&',
                });
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the entity `escape_html` may have produced at the start of `text`
pub(crate) fn entity_len(text: &str) -> Option<usize> {
    ["&amp;", "&lt;", "&gt;"]
        .iter()
        .find(|entity| text.starts_with(*entity))
        .map(|entity| entity.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_existing_entity_escaped_once_at_ampersand() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("&lt;div&gt;"), "&amp;lt;div&amp;gt;");
    }

    #[test]
    fn test_quotes_untouched_in_text() {
        assert_eq!(escape_html(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"x" onload="y"#),
            "x&quot; onload=&quot;y"
        );
    }

    #[test]
    fn test_unescape_reverses_escape() {
        for text in ["", "a < b && c > d", "&amp;", "&lt;div&gt;", "plain & simple", "é<ü"] {
            assert_eq!(unescape_html(&escape_html(text)), text);
        }
        assert_eq!(unescape_html("&quot; &"), "&quot; &");
    }

    #[test]
    fn test_entity_len() {
        assert_eq!(entity_len("&lt;div"), Some(4));
        assert_eq!(entity_len("&amp;"), Some(5));
        assert_eq!(entity_len("&x"), None);
    }
}
