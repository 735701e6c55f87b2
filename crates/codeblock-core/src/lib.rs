//! codeblock-core - Code block rendering for chat messages
//!
//! This crate splits chat message content into prose and code parts, classifies
//! code into styled spans, and resolves per-language presentation styles. All
//! output is built from HTML-escaped text, so nothing in a message can inject
//! markup into the rendered result.

pub mod copy;
pub mod escape;
pub mod highlight;
pub mod render;
pub mod splitter;
pub mod style;
pub mod types;

pub use copy::*;
pub use escape::*;
pub use highlight::*;
pub use render::*;
pub use splitter::*;
pub use style::*;
pub use types::*;
