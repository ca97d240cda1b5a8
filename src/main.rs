use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Vector3;
use std::path::PathBuf;

use magnetic_space_groups::catalogue::MagneticCatalogue;
use magnetic_space_groups::config::{CatalogueConfig, DEFAULT_ROUNDING_DECIMALS};
use magnetic_space_groups::interfaces::{PointOperatorFamily, Setting};
use magnetic_space_groups::symmetries::{
    build_operators, multiplicity, to_text, to_text_with_moments, NotationLabels,
};

#[derive(Parser)]
#[command(name = "msg")]
#[command(about = "Look up magnetic space groups and their symmetry operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Catalogue data file (default: $MAGNETIC_DATA_PATH or data/magnetic_data.txt)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one group by BNS number, e.g. 71.536
    Show {
        bns: String,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the symmetry operations of a group
    Operators {
        bns: String,

        /// Use the hexagonal point-operator table
        #[arg(long)]
        hexagonal: bool,

        /// Only the tabulated generators, without centering
        #[arg(long)]
        generators: bool,

        /// Include the moment rows
        #[arg(long)]
        moments: bool,
    },
    /// Multiplicity of a position under the full operation set
    Multiplicity {
        bns: String,
        x: f64,
        y: f64,
        z: f64,

        /// Decimal places used when comparing positions
        #[arg(long, default_value_t = DEFAULT_ROUNDING_DECIMALS)]
        decimals: u32,

        /// Use the hexagonal point-operator table
        #[arg(long)]
        hexagonal: bool,
    },
    /// Check that every group's operation set is closed
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    let mut config = CatalogueConfig::from_env();
    if let Some(path) = cli.data {
        config = config.with_data_path(path);
    }
    let catalogue = MagneticCatalogue::load(&config)
        .with_context(|| format!("Failed to load catalogue from {}", config.data_path.display()))?;

    match cli.command {
        Commands::Show { bns, json } => show_group(&catalogue, &bns, json),
        Commands::Operators {
            bns,
            hexagonal,
            generators,
            moments,
        } => list_operators(&catalogue, &bns, family(hexagonal), generators, moments),
        Commands::Multiplicity {
            bns,
            x,
            y,
            z,
            decimals,
            hexagonal,
        } => print_multiplicity(&catalogue, &bns, Vector3::new(x, y, z), decimals, family(hexagonal)),
        Commands::Verify => verify(&catalogue),
    }
}

fn family(hexagonal: bool) -> PointOperatorFamily {
    if hexagonal {
        PointOperatorFamily::Hexagonal
    } else {
        PointOperatorFamily::NonHexagonal
    }
}

fn show_group(catalogue: &MagneticCatalogue, bns: &str, json: bool) -> Result<()> {
    let record = catalogue.find_by_bns_number(bns)?;
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("BNS {}  {}", record.bns_label, record.bns_symbol);
    println!("OG  {}  {}", record.og_label, record.og_symbol);
    println!("Type {}", record.group_type.code());
    println!("Point-operator table: {}", record.point_operator_family());
    println!(
        "Generators: {}, lattice vectors: {}",
        record.bns.operators.len(),
        record.bns.lattice_vectors.len()
    );
    for site in &record.bns.wyckoff_sites {
        println!("  {}{} ({} positions)", site.multiplicity, site.label, site.positions.len());
    }
    if let Some(og) = &record.og {
        println!("OG generators: {}", og.operators.len());
    }
    Ok(())
}

fn list_operators(
    catalogue: &MagneticCatalogue,
    bns: &str,
    family: PointOperatorFamily,
    generators_only: bool,
    moments: bool,
) -> Result<()> {
    let record = catalogue.find_by_bns_number(bns)?;
    let operations = if generators_only {
        build_operators(catalogue.point_operators(family), &record.bns.operators)?
    } else {
        catalogue.full_operators_for(record, Setting::Bns, family)?
    };

    let labels = NotationLabels::default();
    for op in &operations {
        if moments {
            println!("{}", to_text_with_moments(op, &labels));
        } else {
            println!("{}", to_text(op, &labels));
        }
    }
    info!("{} operations for {}", operations.len(), record.bns_label);
    Ok(())
}

fn print_multiplicity(
    catalogue: &MagneticCatalogue,
    bns: &str,
    point: Vector3<f64>,
    decimals: u32,
    family: PointOperatorFamily,
) -> Result<()> {
    let record = catalogue.find_by_bns_number(bns)?;
    let operations = catalogue.full_operators_for(record, Setting::Bns, family)?;
    println!("{}", multiplicity(&operations, point, decimals));
    Ok(())
}

fn verify(catalogue: &MagneticCatalogue) -> Result<()> {
    let reports = catalogue.verify_closure();
    let failures: Vec<_> = reports.iter().filter(|r| !r.closed).collect();
    for report in &failures {
        match &report.error {
            Some(error) => warn!("{}: {}", report.bns_label, error),
            None => warn!("{}: operation set is not closed", report.bns_label),
        }
    }
    info!("Checked {} groups, {} failed", reports.len(), failures.len());
    if !failures.is_empty() {
        bail!("{} groups failed the closure check", failures.len());
    }
    Ok(())
}
