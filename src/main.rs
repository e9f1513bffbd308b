use anyhow::Result;
use clap::Parser;
use flatmatter::{ErrorSeverity, FlatMatterError};
use log::LevelFilter;
use std::process::ExitCode;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get(args) => commands::get_command(args),
        Commands::Set(args) => commands::set_command(args),
        Commands::Remove(args) => commands::remove_command(args),
        Commands::Validate(args) => commands::validate_command(args),
        Commands::Body(args) => commands::body_command(args),
    }
}

/// Exit status by error severity: 1 for missing metadata and validation
/// failures, up to 4 for missing or unreadable files. Errors raised outside
/// the library map to 2.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err
        .downcast_ref::<FlatMatterError>()
        .map(FlatMatterError::severity)
    {
        Some(ErrorSeverity::Low) => 1,
        Some(ErrorSeverity::Medium) | None => 2,
        Some(ErrorSeverity::High) => 3,
        Some(ErrorSeverity::Critical) => 4,
    }
}

/// `--verbose` and `--quiet` pick the default level; `RUST_LOG` still wins
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_follows_severity() {
        let missing = anyhow::Error::from(FlatMatterError::missing_metadata("title"));
        assert_eq!(exit_code(&missing), 1);

        let invalid = anyhow::Error::from(FlatMatterError::invalid_argument("document is missing"));
        assert_eq!(exit_code(&invalid), 2);

        let backup = anyhow::Error::from(FlatMatterError::backup_error("disk full"));
        assert_eq!(exit_code(&backup), 3);

        let not_found = anyhow::Error::from(FlatMatterError::file_not_found("gone.md"));
        assert_eq!(exit_code(&not_found), 4);
    }

    #[test]
    fn test_exit_code_for_batches_and_foreign_errors() {
        let batch = anyhow::Error::from(FlatMatterError::multiple(vec![
            FlatMatterError::missing_metadata("title"),
            FlatMatterError::missing_metadata("author"),
        ]));
        assert_eq!(exit_code(&batch), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("bad flag combination")), 2);
    }
}
