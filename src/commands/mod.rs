//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod families;
pub mod render;

pub use families::run_families;
pub use render::run_render;
