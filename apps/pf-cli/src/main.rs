use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use std::sync::Arc;

use pf_core::nan_to_inf;
use pf_core::units::{m, m2, pa_s};
use pf_models::{ConduitTarget, Dimensionality, HydraulicKeys, hagen_poiseuille, poiseuille_leg_si};
use pf_network::NetworkBuilder;
use pf_phase::{Geometry, Phase};
use pf_project::{CaseReport, ModelKindDef, ProjectResult};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "PoreFlow CLI - conduit conductance for pore networks", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
    },
    /// Evaluate every model declared in a case
    Conductance {
        /// Path to the case YAML or JSON file
        case_path: PathBuf,
        /// Force the dimensionality (2d or 3d) of every Hagen-Poiseuille model
        #[arg(short, long)]
        dimensionality: Option<Dimensionality>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Hydraulic conductance of a single conduit, in SI units
    Conduit {
        /// Equivalent areas of pore 1, throat and pore 2 [m²]
        #[arg(long, required = true, num_args = 3, value_names = ["PORE1", "THROAT", "PORE2"])]
        areas: Vec<f64>,
        /// Conduit lengths of pore 1, throat and pore 2 [m]
        #[arg(long, required = true, num_args = 3, value_names = ["PORE1", "THROAT", "PORE2"])]
        lengths: Vec<f64>,
        /// Dynamic viscosity [Pa·s]
        #[arg(long, default_value_t = pf_core::units::constants::WATER_VISCOSITY_PA_S)]
        viscosity: f64,
        /// Conduit shape (2d or 3d)
        #[arg(short, long, default_value_t = Dimensionality::ThreeD)]
        dimensionality: Dimensionality,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Yaml,
    Json,
}

fn main() -> ProjectResult<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Conductance {
            case_path,
            dimensionality,
            format,
            output,
        } => cmd_conductance(&case_path, dimensionality, format, output.as_deref()),
        Commands::Conduit {
            areas,
            lengths,
            viscosity,
            dimensionality,
        } => cmd_conduit(
            std::array::from_fn(|k| areas[k]),
            std::array::from_fn(|k| lengths[k]),
            viscosity,
            dimensionality,
        ),
    }
}

fn cmd_validate(case_path: &Path) -> ProjectResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = pf_project::load(case_path)?;
    pf_project::assemble(&case)?;
    println!("✓ Case is valid");
    println!("  Pores: {}", case.network.pores.len());
    println!("  Throats: {}", case.network.throats.len());
    println!("  Phases: {}", case.phases.len());
    println!("  Geometries: {}", case.geometries.len());
    println!("  Models: {}", case.models.len());
    Ok(())
}

fn cmd_conductance(
    case_path: &Path,
    dimensionality: Option<Dimensionality>,
    format: Format,
    output: Option<&Path>,
) -> ProjectResult<()> {
    let mut case = pf_project::load(case_path)?;
    if let Some(dim) = dimensionality {
        for model in &mut case.models {
            if let ModelKindDef::HagenPoiseuille { dimensionality } = &mut model.kind {
                *dimensionality = dim.into();
            }
        }
        info!(%dim, "dimensionality overridden");
    }

    let report = pf_project::evaluate(&case)?;
    let rendered = match format {
        Format::Text => render_text(&report),
        Format::Yaml => serde_yaml::to_string(&report)?,
        Format::Json => serde_json::to_string_pretty(&report)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Wrote {} model outputs to {}", report.outputs.len(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_text(report: &CaseReport) -> String {
    let mut out = format!("Case: {}\n", report.case);
    for model in &report.outputs {
        out.push_str(&format!(
            "\n{} ({} on {})\n",
            model.propname, model.phase, model.geometry
        ));
        for (throat, value) in model.throats.iter().zip(&model.values) {
            out.push_str(&format!("  {throat:<16} {value:.6e}\n"));
        }
    }
    out
}

fn cmd_conduit(areas: [f64; 3], lengths: [f64; 3], viscosity: f64, dim: Dimensionality) -> ProjectResult<()> {
    let g = single_conduit(areas, lengths, viscosity, dim)?;

    println!("Conduit ({dim})");
    let mu = pa_s(viscosity);
    for (k, label) in ["pore1", "throat", "pore2"].iter().enumerate() {
        let leg = nan_to_inf(poiseuille_leg_si(m2(areas[k]), m(lengths[k]), mu, dim));
        println!("  {label:<7} {leg:.6e}");
    }
    println!("  total   {g:.6e}");
    Ok(())
}

/// Conductance of one pore-throat-pore conduit with uniform viscosity.
fn single_conduit(areas: [f64; 3], lengths: [f64; 3], viscosity: f64, dim: Dimensionality) -> ProjectResult<f64> {
    let mut builder = NetworkBuilder::new();
    let pore1 = builder.add_pore("pore1");
    let pore2 = builder.add_pore("pore2");
    builder.add_throat("throat", pore1, pore2);
    let network = Arc::new(builder.build()?);

    let keys = HydraulicKeys::default();
    let mut phase = Phase::new("fluid", network.clone());
    phase.set_uniform(&keys.pore_viscosity, viscosity)?;
    phase.set_uniform(&keys.throat_viscosity, viscosity)?;

    let mut geometry = Geometry::spanning("conduit", network);
    geometry.set_legs(&keys.throat_equivalent_area, areas.map(|a| vec![a]))?;
    geometry.set_legs(&keys.throat_conduit_lengths, lengths.map(|l| vec![l]))?;

    let target = ConduitTarget::new(&phase, &geometry)?;
    let g = hagen_poiseuille(&target, &keys, dim)?;
    Ok(g[0])
}
