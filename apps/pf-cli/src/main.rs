mod error;
mod script;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pf_core::Tolerances;
use pf_history::{HistoryConfig, Repository};
use pf_model::{Element, Model, load_model, save_model};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};
use crate::script::{Script, replay};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PlaneFrame CLI - 2D structural frame model tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate model file syntax and references
    Validate {
        /// Path to the model YAML/JSON file
        model_path: PathBuf,
    },
    /// Print derived element quantities
    Inspect {
        /// Path to the model YAML/JSON file
        model_path: PathBuf,
        /// Only show this element
        #[arg(long)]
        element: Option<String>,
    },
    /// Replay a scripted edit session through the undo/redo history
    Replay {
        /// Path to the model YAML/JSON file
        model_path: PathBuf,
        /// Path to the YAML edit script
        script_path: PathBuf,
        /// Write the edited model here (YAML/JSON by extension); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the script's undo history limit
        #[arg(long)]
        history_limit: Option<usize>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { model_path } => cmd_validate(&model_path),
        Commands::Inspect {
            model_path,
            element,
        } => cmd_inspect(&model_path, element.as_deref()),
        Commands::Replay {
            model_path,
            script_path,
            output,
            history_limit,
        } => cmd_replay(&model_path, &script_path, output.as_deref(), history_limit),
    }
}

fn cmd_validate(model_path: &Path) -> CliResult<()> {
    println!("Validating model: {}", model_path.display());
    let model = load_model(model_path)?;
    println!("✓ Model is valid");
    println!(
        "  {} nodes, {} elements, {} materials, {} sections",
        model.nodes().count(),
        model.elements().count(),
        model.materials().count(),
        model.sections().count()
    );
    for id in model.degenerate_elements(Tolerances::default()) {
        warn!(element = %id, "element endpoints coincide");
        println!("  ! element {id} has zero length");
    }
    Ok(())
}

fn cmd_inspect(model_path: &Path, element_id: Option<&str>) -> CliResult<()> {
    let model = load_model(model_path)?;

    let mut elements: Vec<&Element> = match element_id {
        Some(id) => vec![model.element(id).ok_or_else(|| CliError::ElementNotFound {
            id: id.to_string(),
        })?],
        None => model.elements().collect(),
    };
    elements.sort_by(|a, b| a.id().cmp(b.id()));

    if elements.is_empty() {
        println!("No elements found in model");
    }
    for element in elements {
        print_element(element);
    }
    Ok(())
}

fn print_element(element: &Element) {
    let [a, b] = element.node_ids();
    println!("Element {} ({} -> {})", element.id(), a, b);
    println!(
        "  length = {:.6}, cos = {:.6}, sin = {:.6}",
        element.length(),
        element.cosine(),
        element.sine()
    );
    if element.is_degenerate(Tolerances::default()) {
        println!("  degenerate: endpoints coincide");
    }
    println!("  local stiffness:");
    let k = element.local_stiffness();
    for row in 0..6 {
        let cells: Vec<String> = (0..6).map(|col| format!("{:>14.6e}", k[(row, col)])).collect();
        println!("    {}", cells.join(" "));
    }
}

fn cmd_replay(
    model_path: &Path,
    script_path: &Path,
    output: Option<&Path>,
    history_limit: Option<usize>,
) -> CliResult<()> {
    let model = load_model(model_path)?;
    let script: Script = serde_yaml::from_str(&std::fs::read_to_string(script_path)?)?;

    let limit = history_limit
        .or(script.history_limit)
        .unwrap_or(HistoryConfig::default().history_limit);
    let mut repo = Repository::with_config(model, HistoryConfig::with_history_limit(limit))?;

    let failures = replay(&mut repo, script.steps);

    let mut model: Model = repo.into_model();
    let recomputed = model.recompute_dirty()?;
    info!(
        recomputed = recomputed.len(),
        failures, "replay finished"
    );

    match output {
        Some(path) => {
            save_model(path, &model)?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{}", serde_yaml::to_string(&model.to_data())?),
    }
    Ok(())
}
