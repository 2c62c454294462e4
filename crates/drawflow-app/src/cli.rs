//! Command-line handling.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::session::Session;
use drawflow_core::ShortcutRegistry;
use std::fs;
use std::path::PathBuf;

pub const USAGE: &str = "drawflow <session.json> [-o out.svg] [-c config.json] [--shortcuts]";

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub session: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub show_shortcuts: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    pub fn parse(args: impl IntoIterator<Item = String>) -> AppResult<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-o" | "--output" => parsed.output = Some(value_for(&arg, args.next())?),
                "-c" | "--config" => parsed.config = Some(value_for(&arg, args.next())?),
                "--shortcuts" => parsed.show_shortcuts = true,
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("unknown option {flag}\n  {USAGE}")));
                }
                _ if parsed.session.is_some() => {
                    return Err(AppError::Usage(format!("unexpected argument {arg}\n  {USAGE}")));
                }
                _ => parsed.session = Some(PathBuf::from(arg)),
            }
        }

        if parsed.session.is_none() && !parsed.show_shortcuts {
            return Err(AppError::Usage(USAGE.to_string()));
        }
        Ok(parsed)
    }
}

fn value_for(flag: &str, value: Option<String>) -> AppResult<PathBuf> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value\n  {USAGE}")))
}

/// Run the application with the given arguments.
pub fn run(args: impl IntoIterator<Item = String>) -> AppResult<()> {
    let args = CliArgs::parse(args)?;

    if args.show_shortcuts {
        ShortcutRegistry::print_all();
    }
    let Some(session_path) = args.session else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let session = Session::load(&session_path)?;
    let replay = session.replay(&config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &replay.svg)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", replay.svg),
    }
    Ok(())
}
