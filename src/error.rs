//! Error type for region construction and configuration loading.
//!
//! Queries never fail: an unknown code simply matches nothing. Errors are
//! only raised while building a [`CustomRegion`](crate::CustomRegion).

use std::path::PathBuf;

/// Errors raised while constructing regions.
#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    /// A region was built with no include codes.
    #[error("a custom region needs at least one include code")]
    MissingInclude,

    /// A configuration document could not be deserialized.
    #[error("invalid region config: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A named region was requested that the config does not define.
    #[error("no region named '{0}' in config")]
    UnknownRegion(String),
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, RegionError>;
