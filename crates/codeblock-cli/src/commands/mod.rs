//! CLI command implementations

pub mod blocks;
pub mod copy;
pub mod highlight;
pub mod render;
pub mod styles;
