mod case;
mod cli;
mod judge;
mod report;
mod results;
mod run;
mod verdict;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "casebook",
    version,
    about = "Reference experiments checked against the detsex resolver"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    List,
    /// Check one case, or all of them when no id is given.
    Check {
        case_id: Option<String>,
    },
    Report {
        case_id: String,
    },
    Clean {
        case_id: String,
    },
}

fn main() -> Result<()> {
    detsex::logging::init();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir().context("current directory")?;
    match cli.command {
        Command::List => cli::list_cases(&repo_root),
        Command::Check { case_id } => {
            if !cli::check_cases(&repo_root, case_id.as_deref())? {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Report { case_id } => cli::report_case(&repo_root, &case_id),
        Command::Clean { case_id } => cli::clean_case(&repo_root, &case_id),
    }
}
