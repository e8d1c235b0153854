//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("quiver")
        .about("Standard-library schema cache tooling for the quiver query compiler")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg().global(true))
        .subcommand(hash_command())
        .subcommand(status_command())
}

/// Print the content hash that keys the std schema cache.
pub fn hash_command() -> Command {
    Command::new("hash")
        .about("Print the content hash of the std sources")
        .after_help(
            r#"EXAMPLES:
  quiver hash --lib lib/                        # .eql files under lib/
  quiver hash --lib lib/ --hash-dir src/=rs     # also hash compiler sources"#,
        )
        .arg(lib_arg())
        .arg(hash_dir_arg())
}

/// Report whether the on-disk cache matches its sources.
pub fn status_command() -> Command {
    Command::new("status")
        .about("Check the std schema cache against its sources")
        .after_help(
            r#"Prints fresh, stale or missing. Exits non-zero unless fresh.

EXAMPLES:
  quiver status --lib lib/
  quiver status --lib lib/ --cache-dir target/quiver"#,
        )
        .arg(lib_arg())
        .arg(cache_dir_arg())
        .arg(hash_dir_arg())
}
