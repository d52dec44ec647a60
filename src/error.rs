//! Errors arising in the layers around the ray tracer: configuration and
//! command-line input. The ray tracer itself has no recoverable errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Voxel size must be positive in every dimension, got {0:?} mm")]
    NonPositiveVoxelSize([f32; 3]),

    #[error("Grid must have at least one voxel in every dimension, got {0:?}")]
    EmptyGrid([usize; 3]),

    #[error("Expected {expected} numbers, found {found} in {text:?}")]
    WrongNumberOfValues { expected: usize, found: usize, text: String },

    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::NonPositiveVoxelSize([1.0, 0.0, 2.0]);
        assert_eq!(format!("{err}"), "Voxel size must be positive in every dimension, got [1.0, 0.0, 2.0] mm");

        let err = Error::WrongNumberOfValues { expected: 6, found: 2, text: "1 2".into() };
        assert_eq!(format!("{err}"), r#"Expected 6 numbers, found 2 in "1 2""#);

        let err: Error = "x".parse::<f32>().unwrap_err().into();
        assert!(format!("{err}").contains("invalid float literal"));

        let err: Error = "x".parse::<usize>().unwrap_err().into();
        assert!(format!("{err}").contains("invalid digit"));
    }
}
