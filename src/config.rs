//! Serde-driven region configuration.
//!
//! A single region:
//!
//! ```toml
//! include = ["150", 142]
//! exclude = "EU"
//! ```
//!
//! Several named regions in one document:
//!
//! ```toml
//! [regions.latam]
//! include = "419"
//!
//! [regions.europe_outside_eu]
//! include = 150
//! exclude = ["EU"]
//! ```
//!
//! Codes may be integers or strings, and each list may be a single code.
//! A code of any other type (boolean, float, table, negative number) fails
//! deserialization, so a bad config is rejected before any region exists.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::code::CodeInput;
use crate::error::{RegionError, Result};
use crate::region::CustomRegion;
use crate::traits::IntoCodes;

/// One code or a list of codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeList {
    One(CodeInput),
    Many(Vec<CodeInput>),
}

impl Default for CodeList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl IntoCodes for CodeList {
    fn into_codes(self) -> Vec<String> {
        match self {
            Self::One(code) => vec![code.normalize()],
            Self::Many(codes) => codes.iter().map(CodeInput::normalize).collect(),
        }
    }
}

/// Construction options for a [`CustomRegion`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    /// Codes whose descendants form the region. Required, non-empty.
    pub include: CodeList,
    /// Codes whose descendants are removed from the region.
    #[serde(default)]
    pub exclude: CodeList,
}

impl RegionConfig {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include: CodeList::Many(include.into_iter().map(CodeInput::Text).collect()),
            exclude: CodeList::Many(exclude.into_iter().map(CodeInput::Text).collect()),
        }
    }

    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_to_string(path.as_ref())?.parse()
    }

    /// Build the region this config describes.
    pub fn build(self) -> Result<CustomRegion> {
        CustomRegion::try_from(self)
    }
}

impl FromStr for RegionConfig {
    type Err = RegionError;

    /// Parse from a TOML string.
    fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegionError::Config(e.to_string()))
    }
}

/// Several named regions, keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsConfig {
    #[serde(default)]
    regions: BTreeMap<String, RegionConfig>,
}

impl RegionsConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        read_to_string(path.as_ref())?.parse()
    }

    /// Region names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The raw config of one named region.
    pub fn get(&self, name: &str) -> Option<&RegionConfig> {
        self.regions.get(name)
    }

    /// Build one named region.
    pub fn build(&self, name: &str) -> Result<CustomRegion> {
        self.regions
            .get(name)
            .ok_or_else(|| RegionError::UnknownRegion(name.to_string()))?
            .clone()
            .build()
    }

    /// Build every region. Fails on the first invalid one.
    pub fn build_all(&self) -> Result<BTreeMap<String, CustomRegion>> {
        self.regions
            .iter()
            .map(|(name, config)| config.clone().build().map(|region| (name.clone(), region)))
            .collect()
    }
}

impl FromStr for RegionsConfig {
    type Err = RegionError;

    fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegionError::Config(e.to_string()))
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| RegionError::Io {
        path: path.to_path_buf(),
        source,
    })
}
