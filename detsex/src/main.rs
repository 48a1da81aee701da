//! Sexual differentiation lab.
//!
//! Resolves gonadectomy, graft and implant experiments and keeps a history of
//! past runs under `.detsex/` for listing and comparison.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use detsex::core::types::{Genotype, Graft, Implant, Stage};
use detsex::exit_codes;
use detsex::io::init::{InitOptions, init_lab};
use detsex::lab::{
    Lookup, Overrides, clear_history, compare_records, delete_record, find_record, read_history,
    restore_record, run_experiment,
};
use detsex::logging;
use detsex::render::{
    render_comparison, render_glossary, render_guide, render_history, render_outcome,
    render_record,
};

#[derive(Parser)]
#[command(
    name = "detsex",
    version,
    about = "Sexual differentiation experiments: gonadectomy, grafts and hormone implants"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.detsex/` with a default config and an empty history.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Resolve one experiment and print the outcome.
    Resolve {
        #[command(flatten)]
        experiment: ExperimentArgs,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
        /// Append the experiment to the history.
        #[arg(long)]
        record: bool,
    },
    /// Inspect or edit the experiment history.
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
    /// Compare two recorded experiments side by side.
    Compare { left: String, right: String },
    /// Print the glossary of terms.
    Glossary,
    /// Print the usage guide.
    Guide,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List recorded experiments, most recent first.
    List,
    /// Show one recorded experiment in full.
    Show { id: String },
    /// Print the configuration of a recorded experiment as JSON.
    Restore { id: String },
    /// Delete one recorded experiment.
    Delete { id: String },
    /// Delete every recorded experiment.
    Clear,
}

/// Fields left unset fall back to `[defaults]` in `.detsex/config.toml`.
#[derive(Args)]
struct ExperimentArgs {
    /// Developmental stage: embryo or adult.
    #[arg(long)]
    stage: Option<Stage>,
    /// Genetic sex: XX or XY.
    #[arg(long)]
    genotype: Option<Genotype>,
    /// Remove the original gonads (`--ablation false` to force intact).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    ablation: Option<bool>,
    /// Grafted tissue: none, testis or ovary.
    #[arg(long)]
    graft: Option<Graft>,
    /// Hormone implant: none, testosterone, amh or both.
    #[arg(long)]
    implant: Option<Implant>,
}

impl ExperimentArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            stage: self.stage,
            genotype: self.genotype,
            ablation: self.ablation,
            graft: self.graft,
            implant: self.implant,
        }
    }
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            std::process::exit(code);
        }
    };
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let root = std::env::current_dir().context("current directory")?;
    debug!(root = %root.display(), "lab root");
    match cli.command {
        Command::Init { force } => {
            let paths = init_lab(&root, &InitOptions { force })?;
            println!("init: lab={}", paths.lab_dir.display());
            Ok(exit_codes::OK)
        }
        Command::Resolve {
            experiment,
            json,
            record,
        } => cmd_resolve(&root, &experiment, json, record),
        Command::History { action } => cmd_history(&root, action),
        Command::Compare { left, right } => {
            let comparison = compare_records(&root, &left, &right)?;
            print_lookup(comparison, |comparison| {
                print!("{}", render_comparison(&comparison));
                Ok(())
            })
        }
        Command::Glossary => {
            print!("{}", render_glossary());
            Ok(exit_codes::OK)
        }
        Command::Guide => {
            print!("{}", render_guide());
            Ok(exit_codes::OK)
        }
    }
}

fn cmd_resolve(
    root: &Path,
    experiment: &ExperimentArgs,
    json: bool,
    record: bool,
) -> Result<i32> {
    let run = run_experiment(root, &experiment.overrides(), record)?;
    if json {
        let mut payload = serde_json::json!({
            "config": run.config,
            "outcome": run.outcome,
        });
        if let Some(id) = &run.record_id {
            payload["id"] = serde_json::Value::from(id.as_str());
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("serialize outcome")?
        );
    } else {
        print!("{}", render_outcome(&run.config, &run.outcome));
        if let Some(id) = &run.record_id {
            println!("record: id={id}");
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_history(root: &Path, action: HistoryCommand) -> Result<i32> {
    match action {
        HistoryCommand::List => {
            print!("{}", render_history(&read_history(root)?));
            Ok(exit_codes::OK)
        }
        HistoryCommand::Show { id } => print_lookup(find_record(root, &id)?, |record| {
            print!("{}", render_record(&record));
            print!("{}", render_outcome(&record.config, &record.outcome));
            Ok(())
        }),
        HistoryCommand::Restore { id } => print_lookup(restore_record(root, &id)?, |config| {
            let payload = serde_json::to_string_pretty(&config).context("serialize config")?;
            println!("{payload}");
            Ok(())
        }),
        HistoryCommand::Delete { id } => print_lookup(delete_record(root, &id)?, |()| {
            println!("delete: id={id}");
            Ok(())
        }),
        HistoryCommand::Clear => {
            let removed = clear_history(root)?;
            println!("clear: removed={removed}");
            Ok(exit_codes::OK)
        }
    }
}

/// Show a found value, or report the missing id and return `NOT_FOUND`.
fn print_lookup<T>(lookup: Lookup<T>, show: impl FnOnce(T) -> Result<()>) -> Result<i32> {
    match lookup {
        Lookup::Found(value) => {
            show(value)?;
            Ok(exit_codes::OK)
        }
        Lookup::Missing(id) => {
            eprintln!("no experiment with id {id}");
            Ok(exit_codes::NOT_FOUND)
        }
    }
}
