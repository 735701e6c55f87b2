//! Message splitting: fenced code, inline code, bold and line breaks
//!
//! Splitting never fails. A delimiter without a partner is left in place as
//! literal text, and the `source()` of the produced parts always concatenates
//! back to the original message.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Block, CodeBlock, ContentPart};

/// Opening fence with optional language token, lazy body, closing fence
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:([A-Za-z0-9_+#.-]+)[ \t]*\r?\n|[ \t]*\r?\n)?((?s:.*?))```")
        .expect("static fence pattern")
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("static inline code pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").expect("static bold pattern"));

/// A piece of text either outside or inside a delimiter pair
enum Piece<'a> {
    Literal(&'a str),
    Delimited(&'a str),
}

/// Split `text` on every match of `pattern`, keeping capture group 1 of each
fn split_on<'a>(pattern: &Regex, text: &'a str) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            pieces.push(Piece::Literal(&text[last..whole.start()]));
        }
        pieces.push(Piece::Delimited(inner.as_str()));
        last = whole.end();
    }

    if last < text.len() {
        pieces.push(Piece::Literal(&text[last..]));
    }
    pieces
}

/// Split a message on fenced code blocks; everything else is prose
pub fn split_fences(message: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut last = 0;

    for caps in FENCE.captures_iter(message) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            blocks.push(Block::Prose(message[last..whole.start()].to_string()));
        }

        let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let content = body
            .strip_suffix("\r\n")
            .or_else(|| body.strip_suffix('\n'))
            .unwrap_or(body);

        blocks.push(Block::Code(CodeBlock {
            language: caps.get(1).map(|m| m.as_str().to_lowercase()),
            content: content.to_string(),
            raw: whole.as_str().to_string(),
        }));
        last = whole.end();
    }

    if last < message.len() {
        blocks.push(Block::Prose(message[last..].to_string()));
    }

    tracing::debug!(
        blocks = blocks.len(),
        code_blocks = blocks.iter().filter(|b| matches!(b, Block::Code(_))).count(),
        "split message on fences"
    );
    blocks
}

/// Split prose into inline code, bold spans, text lines and line breaks
pub fn split_prose(prose: &str) -> Vec<ContentPart> {
    let mut parts = Vec::new();

    for piece in split_on(&INLINE_CODE, prose) {
        match piece {
            Piece::Delimited(code) => parts.push(ContentPart::inline_code(code)),
            Piece::Literal(text) => {
                for piece in split_on(&BOLD, text) {
                    match piece {
                        Piece::Delimited(bold) => parts.push(ContentPart::bold(bold)),
                        Piece::Literal(plain) => push_lines(plain, &mut parts),
                    }
                }
            }
        }
    }

    parts
}

/// Each line becomes its own text part, with a break between consecutive lines
fn push_lines(text: &str, parts: &mut Vec<ContentPart>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            parts.push(ContentPart::LineBreak);
        }
        if !line.is_empty() {
            parts.push(ContentPart::text(line));
        }
    }
}

/// Split a whole message into content parts
pub fn split_message(message: &str) -> Vec<ContentPart> {
    let mut parts = Vec::new();
    for block in split_fences(message) {
        match block {
            Block::Prose(prose) => parts.extend(split_prose(&prose)),
            Block::Code(code) => parts.push(ContentPart::Code(code)),
        }
    }
    parts
}

/// Code blocks of a message, in order
pub fn code_blocks(message: &str) -> Vec<CodeBlock> {
    split_fences(message)
        .into_iter()
        .filter_map(|block| match block {
            Block::Code(code) => Some(code),
            Block::Prose(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(parts: &[ContentPart]) -> String {
        parts.iter().map(|p| p.source()).collect()
    }

    #[test]
    fn test_fence_round_trip() {
        let message = "before\n```js\nconst a=1;\n```\nafter";
        let blocks = split_fences(message);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Prose("before\n".to_string()));
        match &blocks[1] {
            Block::Code(code) => {
                assert_eq!(code.language.as_deref(), Some("js"));
                assert_eq!(code.content, "const a=1;");
            }
            other => panic!("expected code block, got {:?}", other),
        }
        assert_eq!(blocks[2], Block::Prose("\nafter".to_string()));

        let rejoined: String = blocks.iter().map(|b| b.source()).collect();
        assert_eq!(rejoined, message);
    }

    #[test]
    fn test_empty_fence() {
        let blocks = split_fences("``````");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Code(code) => {
                assert_eq!(code.language, None);
                assert_eq!(code.content, "");
            }
            other => panic!("expected code block, got {:?}", other),
        }
    }

    #[test]
    fn test_fence_without_language() {
        let blocks = code_blocks("```\nls -la\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, None);
        assert_eq!(blocks[0].content, "ls -la");
        assert_eq!(blocks[0].language_or_default(), "code");
    }

    #[test]
    fn test_fence_language_lowercased() {
        let blocks = code_blocks("```Python\nprint(1)\n```");
        assert_eq!(blocks[0].language.as_deref(), Some("python"));
    }

    #[test]
    fn test_fence_on_single_line() {
        let blocks = code_blocks("```const x = 1```");
        assert_eq!(blocks[0].language, None);
        assert_eq!(blocks[0].content, "const x = 1");
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let message = "look:\n```rust\nfn main() {}";
        let parts = split_message(message);
        assert!(parts.iter().all(|p| !p.is_code()));
        assert_eq!(rejoin(&parts), message);
        assert!(parts.contains(&ContentPart::text("```rust")));
    }

    #[test]
    fn test_inline_code_and_bold() {
        let parts = split_prose("Run `cargo test` then **check** output");
        assert_eq!(
            parts,
            vec![
                ContentPart::text("Run "),
                ContentPart::inline_code("cargo test"),
                ContentPart::text(" then "),
                ContentPart::bold("check"),
                ContentPart::text(" output"),
            ]
        );
    }

    #[test]
    fn test_bold_inside_inline_code_stays_code() {
        let parts = split_prose("`**not bold**`");
        assert_eq!(parts, vec![ContentPart::inline_code("**not bold**")]);
    }

    #[test]
    fn test_unmatched_delimiters_are_literal() {
        let message = "a `dangling and **half bold";
        let parts = split_prose(message);
        assert_eq!(parts, vec![ContentPart::text(message)]);
    }

    #[test]
    fn test_line_breaks_between_lines_only() {
        let parts = split_prose("one\ntwo\n\nthree");
        assert_eq!(
            parts,
            vec![
                ContentPart::text("one"),
                ContentPart::LineBreak,
                ContentPart::text("two"),
                ContentPart::LineBreak,
                ContentPart::LineBreak,
                ContentPart::text("three"),
            ]
        );
    }

    #[test]
    fn test_split_message_reconstructs() {
        let messages = [
            "",
            "plain",
            "**bold** and `code`\n```py\nx = 1\n```\ntail\n",
            "```\n```",
            "a ``` b",
            "multi\n```sql\nSELECT 1;\n```\nand\n```\nraw\n```",
            "stars **** and ``",
        ];
        for message in messages {
            assert_eq!(rejoin(&split_message(message)), message, "message: {:?}", message);
        }
    }

    #[test]
    fn test_multiple_blocks() {
        let blocks = code_blocks("```a\n1\n```\ntext\n```b\n2\n```");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language.as_deref(), Some("a"));
        assert_eq!(blocks[1].content, "2");
    }
}
