//! Read and write values in JSON/TOML documents with dot-notation keys.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dotpath::command::{
    AccessOutcome, get_from_file, parse_value, render_value, set_in_file, split_key,
};
use dotpath::exit_codes;
use dotpath::io::config::{DotpathConfig, resolve_config};
use dotpath::logging;

#[derive(Parser)]
#[command(
    name = "dotpath",
    version,
    about = "Dot-notation get/set for JSON and TOML documents"
)]
struct Cli {
    /// Config file (defaults to `dotpath.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at KEY.
    Get { file: PathBuf, key: String },
    /// Write VALUE at KEY and save the document in place.
    Set {
        file: PathBuf,
        key: String,
        /// Parsed as JSON; falls back to a plain string.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Always store VALUE as a string.
        #[arg(short, long)]
        string: bool,
    },
    /// Print the segments KEY splits into, one per line.
    Split { key: String },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("read working directory")?;
    let config = resolve_config(cli.config.as_deref(), &cwd)?;
    match cli.command {
        Command::Get { file, key } => {
            let outcome = get_from_file(&file, &key, &config)?;
            report(outcome, &config)
        }
        Command::Set {
            file,
            key,
            value,
            string,
        } => {
            let outcome = set_in_file(&file, &key, parse_value(&value, string), &config)?;
            report(outcome, &config)
        }
        Command::Split { key } => {
            for segment in split_key(&key, &config)? {
                println!("{segment}");
            }
            Ok(exit_codes::OK)
        }
    }
}

fn report(outcome: AccessOutcome, config: &DotpathConfig) -> Result<i32> {
    match outcome {
        AccessOutcome::Found(value) => {
            println!("{}", render_value(&value, config.pretty)?);
            Ok(exit_codes::OK)
        }
        AccessOutcome::Written => Ok(exit_codes::OK),
        AccessOutcome::Unresolved(err) => {
            eprintln!("{err}");
            if err.is_unresolved() {
                Ok(exit_codes::NOT_FOUND)
            } else {
                Ok(exit_codes::INVALID)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_get() {
        let cli = Cli::parse_from(["dotpath", "get", "doc.json", "a.b"]);
        assert!(matches!(cli.command, Command::Get { ref key, .. } if key == "a.b"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_set_string() {
        let cli = Cli::parse_from(["dotpath", "set", "doc.json", "a", "3", "--string"]);
        assert!(matches!(cli.command, Command::Set { string: true, .. }));
    }

    #[test]
    fn parse_global_config() {
        let cli = Cli::parse_from(["dotpath", "split", "a.b", "--config", "x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
