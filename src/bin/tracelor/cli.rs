use std::path::PathBuf;

use units::todo::Ratiof32;
use voxtrace::utils::parse_triplet;

/// Command line interface for `tracelor` executable
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "tracelor", about = "Show the voxels crossed by an LOR, and the LOR's length in each")]
pub (super) struct Cli {

    /// TOML file describing the voxel grid
    #[clap(short, long)]
    pub config: PathBuf,

    /// LOR end points, e.g. '-100 0 0  100 20 5' (mm, unless --grid-units)
    #[clap(allow_hyphen_values = true)]
    pub lor: String,

    /// Interpret LOR coordinates in grid units: voxel [i,j,k] is centred on (i,j,k)
    #[clap(long)]
    pub grid_units: bool,

    /// Override the number of voxels given in the config file, e.g. '60,60,40'
    #[clap(short, long, value_parser = parse_triplet::<usize>)]
    pub nvoxels: Option<(usize, usize, usize)>,

    /// Print flat (x-fastest) image indices instead of [i j k], omitting voxels outside the grid
    #[clap(long)]
    pub flat: bool,

    /// Override the normalization given in the config file
    #[clap(long)]
    pub normalization: Option<Ratiof32>,
}
