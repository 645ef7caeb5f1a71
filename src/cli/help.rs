//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string recorded on the command span (e.g. "import", "process").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Import { .. } => "import",
        Commands::Process { .. } => "process",
        Commands::Export { .. } => "export",
        Commands::Show { .. } => "show",
    }
}
