use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use uncmeas::artifacts::TableFormat;
use uncmeas::tasks::{ExperimentParams, SummaryParams, export_tables};
use uncmeas::ui::cli::drivers::InquireDriver;
use uncmeas::ui::cli::wizard::prompt_choice;
use uncmeas::ui::types::choices::{TaskChoice, TaskResult, UIChoice};

#[derive(Parser, Debug)]
#[command(name = "uncmeas")]
#[command(author, version, about = "Monte Carlo study of small-sample uncertainty measures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the distribution, convergence and sweep studies
    Run {
        /// JSON task file, either a tagged task or bare experiment parameters
        #[arg(long)]
        task: Option<PathBuf>,
        /// Overrides the output directory of the task
        #[arg(long)]
        output_dir: Option<String>,
        /// Also write CSV tables next to the JSON artifacts
        #[arg(long)]
        tables: bool,
    },
    /// Print the summary table of written artifacts
    Summarize {
        #[arg(long, default_value = ".")]
        dir: String,
        #[arg(long, default_value_t = 12)]
        reference_size: usize,
    },
    /// Convert written artifacts into delimited tables
    Export {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value_t = TableFormat::Csv)]
        format: TableFormat,
    },
    /// Build and run a task interactively
    Wizard,
    /// Print the JSON schema of task files
    Schema,
}

fn read_task(path: &Path) -> Result<TaskChoice> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading task file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing task file {}", path.display()))?;
    if value.get("type").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    let params: ExperimentParams = serde_json::from_value(value)?;
    Ok(TaskChoice::RunExperiments(params))
}

fn report(result: TaskResult) {
    match result {
        TaskResult::Experiment(outcome) => {
            for path in &outcome.written {
                println!("{}", path.display());
            }
        }
        TaskResult::Summary(table) => print!("{table}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("uncmeas=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("uncmeas=info")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Run {
            task,
            output_dir,
            tables,
        } => {
            let mut choice = match task {
                Some(path) => read_task(&path)?,
                None => TaskChoice::RunExperiments(ExperimentParams::default()),
            };
            if let TaskChoice::RunExperiments(params) = &mut choice {
                if let Some(dir) = output_dir {
                    params.output_dir = dir;
                }
                params.write_tables |= tables;
            }
            info!(task = %choice.kind(), "starting");
            report(choice.run()?);
        }
        Commands::Summarize {
            dir,
            reference_size,
        } => {
            let choice = TaskChoice::Summarize(SummaryParams {
                artifacts_dir: dir,
                reference_size,
            });
            report(choice.run()?);
        }
        Commands::Export { dir, format } => {
            for path in export_tables(&dir, format)? {
                println!("{}", path.display());
            }
        }
        Commands::Wizard => {
            let choice: TaskChoice = prompt_choice(&InquireDriver)?;
            println!("{}", serde_json::to_string_pretty(&choice)?);
            report(choice.run()?);
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
        }
    }
    Ok(())
}
