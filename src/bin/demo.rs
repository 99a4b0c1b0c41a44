//! Runs region inflation on a synthetic disk costmap and writes PNG previews.
//!
//! ```bash
//! costmap-demo --out-dir renders
//! costmap-demo --job tests/fixtures/strip.yaml --out-dir renders
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use glam::IVec2;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use costmap_region::visualization::{PngRenderer, Renderer};
use costmap_region::{CellRegion, Costmap, InflationJob, KernelSpec, MapInfo, extract, load_job};

const MAX_DEMO_SIZE: i64 = 20_000;

#[derive(Parser)]
#[command(name = "costmap-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inflate obstacles inside one window of a synthetic costmap", long_about = None)]
struct Cli {
    /// YAML job describing the region, sentinel values and kernel
    #[arg(long)]
    job: Option<PathBuf>,

    /// Directory the PNG previews are written to
    #[arg(long, default_value = "renders")]
    out_dir: PathBuf,

    /// Width and height of the square costmap in cells
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DEMO_SIZE)
    )]
    size: u32,

    /// Radius of the obstacle disk in cells
    #[arg(long, default_value_t = 300)]
    radius: u32,

    /// Cost painted inside the disk
    #[arg(long, default_value_t = 250)]
    disk_value: u8,
}

fn default_job() -> InflationJob {
    InflationJob {
        region: CellRegion::new(100, 700, 399, 799),
        occupied_value: 250,
        inflated_value: 100,
        kernel: KernelSpec::default(),
        strict_values: false,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let job = match &cli.job {
        Some(path) => load_job(path)?,
        None => default_job(),
    };

    let info = MapInfo::new(cli.size, cli.size);
    let centre = IVec2::splat(i32::try_from(cli.size / 2)?);
    let mut costmap = Costmap::filled_disk(info, centre, cli.radius, cli.disk_value)?;
    info!(
        size = cli.size,
        radius = cli.radius,
        "built synthetic costmap"
    );

    let mut renderer = PngRenderer::new(&cli.out_dir);
    renderer.render_grid("costmap", &costmap)?;

    let cropped = match extract(&costmap, job.region) {
        Ok(cropped) => cropped,
        Err(err) => {
            error!(%err, "cannot crop costmap");
            return Err(err.into());
        }
    };
    renderer.render_grid("costmap_cropped", &cropped)?;

    let inflator = job.inflator(costmap.info().resolution)?;
    let report = match inflator.inflate_region(&mut costmap, job.region) {
        Ok(report) => report,
        Err(err) => {
            error!(%err, "inflation aborted");
            return Err(err.into());
        }
    };
    info!(
        occupied = report.stats.occupied,
        inflated = report.stats.inflated,
        "inflated region"
    );

    let mut normalized = PngRenderer::new(&cli.out_dir).normalized(true);
    normalized.render_grid("costmap_updated", &costmap)?;
    let mut flipped = PngRenderer::new(&cli.out_dir)
        .normalized(true)
        .flipped(true);
    flipped.render_grid("costmap_flipped", &costmap)?;

    Ok(())
}
