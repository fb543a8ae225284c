use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

use mimesniff::application::InspectFilesUseCase;
use mimesniff::domain::repositories::PrefixSource;
use mimesniff::domain::services::{MatchPolicy, SignatureMatcher};
use mimesniff::infrastructure::prefix_sources::LocalFile;
use mimesniff::presentation::cli::{
    Cli, Commands, exit_status, parse_file_arg, render_batch, render_json, render_rules,
};
use mimesniff::SniffOptions;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli.command {
        Commands::Rules => {
            print!("{}", render_rules(SignatureMatcher::default().rules()));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            files,
            prefix_len,
            prefix_tolerant,
            jobs,
            config,
            json,
            deny_mismatch,
        } => {
            let mut options = match config {
                Some(path) => SniffOptions::from_json_file(&path)?,
                None => SniffOptions::default(),
            };
            if let Some(prefix_len) = prefix_len {
                options = options.with_prefix_len(prefix_len);
            }
            if prefix_tolerant {
                options = options.with_match_policy(MatchPolicy::PrefixTolerant);
            }
            if let Some(jobs) = jobs {
                options = options.with_max_concurrent_reads(jobs);
            }

            let use_case = InspectFilesUseCase::new(options).context("Invalid options")?;

            let sources: Vec<Arc<dyn PrefixSource>> = files
                .iter()
                .map(|arg| {
                    let (path, declared) = parse_file_arg(arg);
                    Arc::new(LocalFile::new(path, declared)) as Arc<dyn PrefixSource>
                })
                .collect();

            let report = use_case.execute(sources).await;

            if json {
                let out = render_json(&report).context("Failed to serialize report")?;
                println!("{}", out);
            } else {
                print!("{}", render_batch(&report));
            }

            Ok(ExitCode::from(exit_status(&report, deny_mismatch)))
        }
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
