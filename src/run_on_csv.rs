use anyhow::{Context, Result};
use clap::Parser;
use csv::Writer;
use greatcircle::cli::init_logging;
use greatcircle::{DistanceUnit, Gazetteer};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "csv")]
#[command(about = "Load places from a CSV (name,lon,lat) and compute great-circle distances from a source place.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Name of the place to measure from
    #[arg(short, long)]
    source: String,

    /// Output unit: km, m, mi or nmi
    #[arg(short, long, default_value_t = String::from("km"))]
    units: String,

    /// Only keep the K nearest places
    #[arg(short, long)]
    nearest: Option<usize>,

    /// Output CSV (name, distance). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,
}

fn main() -> Result<()> {
    init_logging("csv");

    let cli = Cli::parse();
    let unit = DistanceUnit::from(&cli.units)?;
    let radius = unit.radius();

    let gazetteer = Gazetteer::from_csv_path(&cli.csv)?;
    info!(places = gazetteer.len(), path = %cli.csv, "loaded gazetteer");

    let dists = match cli.nearest {
        Some(k) => gazetteer.nearest(&cli.source, k, radius)?,
        None => gazetteer.distances_from(&cli.source, radius)?,
    };

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let header = format!("distance_{}", unit.suffix());
        wtr.write_record(["name", header.as_str()])?;
        for (place, d) in &dists {
            wtr.write_record([place.name.as_str(), format!("{:.6}", d).as_str()])?;
        }
        wtr.flush()?;
        info!(rows = dists.len(), path = %out_path, "wrote distances");
    } else {
        println!("Places: {}", gazetteer.len());
        for (place, d) in &dists {
            println!("{:>12.3} {}  {}", d, unit.suffix(), place.name);
        }
        if let Some((a, b, d)) = gazetteer.farthest_pair(radius) {
            println!(
                "Farthest pair: {} - {} ({:.3} {})",
                a.name,
                b.name,
                d,
                unit.suffix()
            );
        }
    }

    Ok(())
}
