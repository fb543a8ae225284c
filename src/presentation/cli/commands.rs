//! CLI commands using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mimesniff - Content-based media type checks for uploads
///
/// Reads the first bytes of each file, identifies its media type from
/// magic numbers or a plain-text heuristic, and flags files whose
/// declared type disagrees.
#[derive(Parser)]
#[command(name = "mimesniff")]
#[command(version, about = "Sniff media types and flag declared-type mismatches", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect files and compare detected with declared types
    Check {
        /// Files to inspect, as PATH or PATH=DECLARED/TYPE
        #[arg(required = true)]
        files: Vec<String>,

        /// Number of leading bytes read from each file (at least 12)
        #[arg(short, long)]
        prefix_len: Option<usize>,

        /// Accept types where one is a prefix of the other
        #[arg(long)]
        prefix_tolerant: bool,

        /// Maximum number of files read at once
        #[arg(short = 'j', long)]
        jobs: Option<usize>,

        /// JSON file with default options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 2 when any file mismatches
        #[arg(long)]
        deny_mismatch: bool,
    },

    /// List the signature rules in priority order
    Rules,
}

/// Splits a `PATH=TYPE` argument into path and declared type
///
/// Only a trailing `=type/subtype` is treated as a declared type, so paths
/// that merely contain `=` are kept whole.
pub fn parse_file_arg(arg: &str) -> (PathBuf, String) {
    match arg.rsplit_once('=') {
        Some((path, declared)) if !path.is_empty() && declared.contains('/') => {
            (PathBuf::from(path), declared.to_string())
        }
        _ => (PathBuf::from(arg), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_declared_type() {
        let (path, declared) = parse_file_arg("photos/cat.jpg=image/jpeg");
        assert_eq!(path, PathBuf::from("photos/cat.jpg"));
        assert_eq!(declared, "image/jpeg");
    }

    #[test]
    fn keeps_paths_with_equals_sign() {
        let (path, declared) = parse_file_arg("reports/q=3.csv");
        assert_eq!(path, PathBuf::from("reports/q=3.csv"));
        assert!(declared.is_empty());
    }

    #[test]
    fn cli_parses_check_flags() {
        let cli = Cli::try_parse_from([
            "mimesniff",
            "check",
            "a.png",
            "--prefix-len",
            "128",
            "--prefix-tolerant",
        ])
        .unwrap();
        match cli.command {
            Commands::Check {
                files,
                prefix_len,
                prefix_tolerant,
                ..
            } => {
                assert_eq!(files, vec!["a.png"]);
                assert_eq!(prefix_len, Some(128));
                assert!(prefix_tolerant);
            }
            Commands::Rules => panic!("expected check"),
        }
    }
}
