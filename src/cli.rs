//! CLI domain: parse, route, help, output, and presentation only.
//! No reconciliation logic; the route table dispatches to the pass, store, and report modules.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_entries_json, format_export_result, format_import_summary, format_pass_summary,
    format_process_json, format_thumbnail_summary,
};
pub use route::RunContext;
