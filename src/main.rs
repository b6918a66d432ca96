use anyhow::{Context, Result};
use clap::Parser;
use greatcircle::cli::{init_logging, parse_coordinate, resolve_radius};
use greatcircle::{distance, DistanceUnit};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "distance")]
#[command(about = "Great-circle (haversine) distance between two coordinates.", long_about = None)]
struct Cli {
    /// First point as LON,LAT in degrees
    #[arg(short, long, allow_hyphen_values = true)]
    from: String,

    /// Second point as LON,LAT in degrees
    #[arg(short, long, allow_hyphen_values = true)]
    to: String,

    /// Output unit: km, m, mi or nmi
    #[arg(short, long, default_value_t = String::from("km"))]
    units: String,

    /// Sphere radius, in the output unit. Defaults to the mean Earth radius.
    #[arg(short, long)]
    radius: Option<f64>,

    /// Accept coordinates outside [-180, 180] x [-90, 90]
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

fn main() -> Result<()> {
    init_logging("distance");

    let cli = Cli::parse();

    let unit = DistanceUnit::from(&cli.units)?;
    let radius = resolve_radius(cli.radius, unit)?;

    let a = parse_coordinate(&cli.from, !cli.no_validate).context("--from")?;
    let b = parse_coordinate(&cli.to, !cli.no_validate).context("--to")?;
    debug!(?a, ?b, radius, "computing distance");

    let d = distance(a, b, radius);
    println!("{:.3} {}", d, unit.suffix());

    Ok(())
}
