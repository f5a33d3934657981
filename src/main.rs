#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use levelog::{
    init_diagnostics, timer_mark, timer_measure, DiagnosticsConfig, Destination, Level,
    LogSettings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

/// levelog - leveled logging to stdout, stderr, a file or syslog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Threshold: all, debug, info, warn, error, fatal or off
    #[arg(short, long)]
    level: Option<Level>,

    /// Destination: stdout, stderr, file or syslog
    #[arg(short, long)]
    destination: Option<Destination>,

    /// TOML settings file (LEVELOG_* variables override it)
    #[arg(long, env = "LEVELOG_CONFIG")]
    config: Option<PathBuf>,

    /// Directory replacing ~/log for the file destination
    #[arg(long)]
    log_root: Option<PathBuf>,

    /// Emit diagnostics as JSON
    #[arg(long, env = "LEVELOG_DIAGNOSTICS_JSON", default_value = "false")]
    diagnostics_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one record at the given level
    Log {
        level: Level,
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write content to ~/log/<module>/<epoch>.log
    Dump { module: String, content: String },
    /// Mark the timer, wait, and report the elapsed time at debug level
    Time {
        #[arg(long, default_value_t = 0)]
        sleep_ms: u64,
    },
}

fn load_settings(args: &Args) -> Result<LogSettings> {
    let mut settings = match &args.config {
        Some(path) => LogSettings::load(path)?,
        None => LogSettings::default(),
    }
    .with_env_overrides()?;

    if let Some(level) = args.level {
        settings.level = level;
    }
    if let Some(destination) = args.destination {
        settings.destination = destination;
    }
    if let Some(root) = &args.log_root {
        settings.log_root = Some(root.clone());
    }
    Ok(settings)
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    init_diagnostics(&DiagnosticsConfig {
        json_format: args.diagnostics_json,
        ..Default::default()
    })?;

    let settings = load_settings(&args)?;
    debug!(?settings, "Resolved log settings");
    let logger = settings.configure();

    match args.command {
        Command::Log { level, message } => {
            let text = message.join(" ");
            if level == Level::Fatal {
                if let Some(exit) = logger.fatal(&text) {
                    return Ok(exit.into());
                }
            } else {
                logger.log(level, format_args!("{text}"));
            }
        }
        Command::Dump { module, content } => match &settings.log_root {
            Some(root) => logger.dump_to(root, &module, content),
            None => logger.dump(&module, content),
        },
        Command::Time { sleep_ms } => {
            timer_mark();
            std::thread::sleep(Duration::from_millis(sleep_ms));
            let elapsed = timer_measure(&logger);
            debug!(elapsed_ms = %elapsed.as_millis(), "Timer measured");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_command() {
        let args = Args::try_parse_from(["levelog", "-l", "debug", "log", "warn", "disk", "full"])
            .expect("parse");
        assert_eq!(args.level, Some(Level::Debug));
        match args.command {
            Command::Log { level, message } => {
                assert_eq!(level, Level::Warn);
                assert_eq!(message, vec!["disk", "full"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_destination() {
        let args = Args::try_parse_from(["levelog", "--destination", "syslog", "time"])
            .expect("parse");
        assert_eq!(args.destination, Some(Destination::SystemLog));
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Args::try_parse_from(["levelog", "log", "loud", "x"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_settings() {
        let args = Args::try_parse_from([
            "levelog",
            "--level",
            "error",
            "--log-root",
            "/tmp/levelog",
            "dump",
            "mod",
            "payload",
        ])
        .expect("parse");
        let settings = load_settings(&args).expect("settings");
        assert_eq!(settings.level, Level::Error);
        assert_eq!(settings.log_root, Some(PathBuf::from("/tmp/levelog")));
    }

    #[test]
    fn test_args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
