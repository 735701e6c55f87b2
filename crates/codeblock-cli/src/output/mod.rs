//! Output formatting for each `--format`

pub mod colors;
pub mod html;
pub mod human;
pub mod json;
pub mod minimal;
