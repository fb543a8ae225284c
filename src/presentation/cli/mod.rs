//! CLI module

mod commands;
mod render;

pub use commands::{Cli, Commands, parse_file_arg};
pub use render::{exit_status, render_batch, render_json, render_rules};
