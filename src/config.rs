//! Configuration file parser for the voxel grid

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};
use tracing::debug;

use units::{mm_, Length};
use units::todo::Ratiof32;
use crate::{Error, Grid, Result, Vector};


fn deserialize_uom_3d<'d, D, T>(deserializer: D) -> std::result::Result<(T, T, T), D::Error>
where
    D: Deserializer<'d>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let (x, y, z) = <(String, String, String)>::deserialize(deserializer)?;
    tr_tup_res((x.parse(), y.parse(), z.parse()))
        .map_err(de::Error::custom)
}

/// Transpose 3-tuple of `Result`
///
/// `Ok` if all elements `Ok`; if any element is an `Err` return the first one.
fn tr_tup_res<O, E>((x,y,z): (std::result::Result<O, E>, std::result::Result<O, E>, std::result::Result<O, E>))
                    -> std::result::Result<(O, O, O), E> {
    Ok((x?, y?, z?))
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {

    /// Number of voxels along each axis
    pub nvoxels: (usize, usize, usize),

    /// Size of a voxel along each axis, with units, e.g. `["2 mm", "2 mm", "0.3 cm"]`
    #[serde(deserialize_with = "deserialize_uom_3d")]
    pub voxel_size: (Length, Length, Length),

    /// Factor applied to every system matrix weight
    #[serde(default = "default_normalization")]
    pub normalization: Ratiof32,
}

fn default_normalization() -> Ratiof32 { 1.0 }

pub fn read_config_file(path: &Path) -> Result<Config> {
    let config: String = fs::read_to_string(path)
        .map_err(|source| Error::ConfigRead { path: path.into(), source })?;
    let config: Config = toml::from_str(&config)
        .map_err(|source| Error::ConfigParse { path: path.into(), source })?;
    debug!(?path, ?config, "Read config file");
    Ok(config)
}

impl TryFrom<&Config> for Grid {
    type Error = Error;

    fn try_from(config: &Config) -> Result<Self> {
        let (nx, ny, nz) = config.nvoxels;
        let (dx, dy, dz) = config.voxel_size;
        let n = [nx, ny, nz];
        let size = [mm_(dx), mm_(dy), mm_(dz)];
        if n.contains(&0)                  { return Err(Error::EmptyGrid(n)) }
        if size.iter().any(|&s| s <= 0.0) { return Err(Error::NonPositiveVoxelSize(size)) }
        Ok(Grid::from_voxel_size(Vector::new(dx, dy, dz), n))
    }
}
