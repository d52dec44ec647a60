use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use units::{mm_, ratio};
use voxtrace::{ray_trace_voxels, Grid, RatioPoint, SystemMatrixRow};
use voxtrace::config::read_config_file;
use voxtrace::utils::{parse_lor, parse_numbers};

mod cli;
use cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let mut config = read_config_file(&args.config)?;
    if let Some(n) = args.nvoxels      { config.nvoxels       = n; }
    if let Some(n) = args.normalization { config.normalization = n; }
    let grid = Grid::try_from(&config)?;
    let normalization = ratio(config.normalization);
    info!(n = ?grid.n, voxel_size_mm = ?[mm_(grid.voxel_size.x), mm_(grid.voxel_size.y), mm_(grid.voxel_size.z)], "Grid");

    let row = if args.grid_units {
        // Straight to the ray tracer: no clipping to the grid
        let [x1, y1, z1, x2, y2, z2] = parse_numbers::<6>(&args.lor)?;
        let mut row = SystemMatrixRow::default();
        ray_trace_voxels(
            &mut row,
            RatioPoint::new(x1, y1, z1),
            RatioPoint::new(x2, y2, z2),
            grid.voxel_size,
            normalization,
        );
        row
    } else {
        let lor = parse_lor(&args.lor)?;
        println!("{lor}");
        grid.system_matrix_row(&lor, normalization)
    };

    if args.flat {
        for (i, weight) in row.flat_elements(grid.n) {
            println!("{i:10}   {weight:10.4}");
        }
    } else {
        for ([i, j, k], weight) in &row {
            println!("{i:4} {j:4} {k:4}   {weight:10.4}");
        }
    }
    println!("{} voxels, total {:.4}", row.len(), row.total_weight());
    Ok(())
}
