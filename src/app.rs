// app.rs
// Command-line entry point: resolve the scenario, sample the grid and export
// the arrays the external renderer consumes.

use crate::config;
use crate::field::FieldMap;
use crate::grid::Grid;
use crate::init_config::InitConfig;
use crate::io::{export_field_map, ExportFormat, FieldMapData};
use crate::scenario::Scenario;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "field_sim",
    about = "Electrostatic field and potential maps for point-charge scenarios"
)]
pub struct Args {
    /// Scenario preset: custom, memory-cell, mosfet, data-bus, lcd-pixel or dipole
    #[arg(long, default_value = "dipole")]
    pub scenario: String,

    /// Path to a TOML run configuration (required for the custom scenario)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Polarity multiplier for the LCD plates (+1 or -1)
    #[arg(long, default_value_t = config::DEFAULT_POLARITY, allow_negative_numbers = true)]
    pub polarity: f64,

    /// Evaluation window override
    #[arg(long, num_args = 4, value_names = ["XMIN", "XMAX", "YMIN", "YMAX"], allow_negative_numbers = true)]
    pub bounds: Option<Vec<f64>>,

    /// Lattice resolution override
    #[arg(long, num_args = 2, value_names = ["NX", "NY"])]
    pub resolution: Option<Vec<usize>>,

    /// Output file; defaults to out/<scenario>_field.<ext>
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export format: json or csv
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Worker threads for the evaluation pool; defaults to cores minus two
    #[arg(long)]
    pub threads: Option<usize>,
}

pub fn run() {
    let args = Args::parse();
    if let Err(e) = run_with(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_with(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    init_thread_pool(args.threads)?;

    let file = match &args.config {
        Some(path) => {
            let config = InitConfig::load_from_file(path)?;
            println!("Loaded run configuration from {}", path.display());
            Some(config)
        }
        None => None,
    };

    // Configuration file settings win where present; CLI flags fill the gaps.
    let scenario = match file.as_ref().and_then(|f| f.scenario.as_ref()) {
        Some(sc) => sc.to_scenario()?,
        None => Scenario::from_name(&args.scenario)?,
    };
    let polarity = file
        .as_ref()
        .and_then(|f| f.scenario.as_ref())
        .and_then(|sc| sc.polarity)
        .unwrap_or(args.polarity);

    let charges = if scenario == Scenario::Custom {
        let file = file
            .as_ref()
            .ok_or("The custom scenario requires --config with a [[charges]] list")?;
        file.to_charges()
    } else {
        scenario.build_charges(polarity)
    };

    let grid = resolve_grid(&args, file.as_ref())?;

    println!("Scenario: {} - {}", scenario.name(), scenario.description());
    for c in &charges {
        let label = if c.label.is_empty() { "unnamed" } else { c.label.as_str() };
        let marker = if c.is_positive() { '+' } else { '-' };
        println!("  [{}] {}: q={:e} C at ({}, {})", marker, label, c.q, c.pos.x, c.pos.y);
    }
    println!(
        "Sampling {}x{} points over x [{}, {}] y [{}, {}]",
        grid.nx, grid.ny, grid.xmin, grid.xmax, grid.ymin, grid.ymax
    );

    let map = FieldMap::sample(&charges, &grid);

    let (vmin, vmax) = map.potential_range();
    println!(
        "Max |E| = {:e} V/m, potential range [{:e}, {:e}] V",
        map.max_field_magnitude(),
        vmin,
        vmax
    );

    let format = ExportFormat::from_name(&args.format)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(scenario, format));
    let data = FieldMapData {
        scenario: scenario.name().to_string(),
        map,
        charges,
    };
    export_field_map(&data, format, &output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// CLI bounds/resolution override the configuration file grid, which in turn
/// overrides the defaults.
fn resolve_grid(args: &Args, file: Option<&InitConfig>) -> Result<Grid, String> {
    let base = match file.and_then(|f| f.grid.as_ref()) {
        Some(gc) => gc.to_grid()?,
        None => Grid::default(),
    };
    let (xmin, xmax, ymin, ymax) = match &args.bounds {
        Some(b) => (b[0], b[1], b[2], b[3]),
        None => (base.xmin, base.xmax, base.ymin, base.ymax),
    };
    let (nx, ny) = match &args.resolution {
        Some(r) => (r[0], r[1]),
        None => (base.nx, base.ny),
    };
    Grid::new(xmin, xmax, ymin, ymax, nx, ny)
}

/// Global rayon pool sized max(3, cores - 2), same as the old simulation loop.
fn init_thread_pool(threads: Option<usize>) -> Result<(), rayon::ThreadPoolBuildError> {
    let threads = threads.unwrap_or_else(|| {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(config::MIN_THREADS);
        cores.max(config::MIN_THREADS + config::THREADS_LEAVE_FREE) - config::THREADS_LEAVE_FREE
    });
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
}

fn default_output_path(scenario: Scenario, format: ExportFormat) -> PathBuf {
    let filename = format!(
        "{}_field.{}",
        scenario.name().replace('-', "_"),
        format.extension()
    );
    Path::new(config::DEFAULT_OUTPUT_DIR).join(filename)
}
