//! ANSI color helpers for terminal output

use colored::{ColoredString, Colorize};
use codeblock_core::TokenClass;

/// Paint a token according to its class
pub fn colored_token(class: TokenClass, text: &str) -> ColoredString {
    match class {
        TokenClass::Comment => text.white().dimmed().italic(),
        TokenClass::String => text.green(),
        TokenClass::Keyword => text.magenta().bold(),
        TokenClass::Builtin => text.cyan(),
        TokenClass::Number => text.yellow(),
        TokenClass::Function => text.blue(),
        TokenClass::Decorator => text.bright_yellow(),
        TokenClass::Operator => text.bright_white(),
        TokenClass::Property => text.bright_cyan(),
        TokenClass::Tag => text.red(),
        TokenClass::Type => text.bright_blue(),
    }
}

/// Get colored language label, tinted like the block's style
pub fn colored_language(label: &str, foreground: &str) -> String {
    let color = foreground
        .strip_prefix("text-")
        .and_then(|rest| rest.split('-').next())
        .unwrap_or("gray");
    match color {
        "yellow" | "amber" => label.yellow().bold().to_string(),
        "blue" | "sky" | "indigo" => label.blue().bold().to_string(),
        "green" | "emerald" | "lime" | "teal" => label.green().bold().to_string(),
        "orange" | "red" | "pink" => label.red().bold().to_string(),
        "cyan" => label.cyan().bold().to_string(),
        "purple" | "violet" => label.magenta().bold().to_string(),
        _ => label.white().bold().to_string(),
    }
}

/// Get colored line number
pub fn colored_line_num(num: usize) -> String {
    format!("{:>4}", num).white().dimmed().to_string()
}

/// Get colored inline code
pub fn inline_code(code: &str) -> String {
    code.cyan().to_string()
}

/// Get bold text
pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored value
pub fn value(text: &str) -> String {
    text.white().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}
