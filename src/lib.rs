//! # Custom Geographic Regions (m49-region)
//!
//! Containment queries over the UN M.49 region hierarchy as extended by
//! CLDR territory containment:
//!
//! ```text
//! 001 World
//! ├── 002 Africa ── 015 Northern Africa ── DZ EG MA …
//! ├── 019 Americas ── 021 Northern America ── CA US …
//! │                └─ 419 Latin America ── 013 005 029 (grouping)
//! ├── 142 Asia ── 035 South-eastern Asia ── TH VN …
//! ├── 150 Europe ── 155 Western Europe ── DE FR …
//! │            └─ EU European Union ── DE FR … (grouping, overlaps 155 etc.)
//! └── 009 Oceania ── QO Outlying Oceania ── AQ …
//! ```
//!
//! Groupings overlap the geographic nesting, so the hierarchy is a DAG: a
//! country can have several independent ancestor paths.
//!
//! ## Custom Regions
//!
//! A [`CustomRegion`] is built from include codes and optional exclude
//! codes, then answers three queries:
//!
//! ```
//! use m49_region::{CustomRegion, codes};
//!
//! let latam = CustomRegion::new(codes::LATIN_AMERICA).unwrap();
//! assert!(latam.contains("BR"));
//! assert!(!latam.contains("US"));
//! assert!(latam.is_within(codes::AMERICAS));
//! assert!(latam.countries().contains(&"MX".to_string()));
//! ```
//!
//! Codes are normalized on the way in: integers and digit strings are
//! zero-padded (`35` → `"035"`), letters are uppercased and deprecated
//! aliases resolved (`"uk"` → `"GB"`). Unknown codes are not rejected; they
//! simply match nothing.

pub mod closure;
pub mod code;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod region;
pub mod table;
pub mod traits;

pub use code::{CodeInput, normalize_region};
pub use config::{CodeList, RegionConfig, RegionsConfig};
pub use error::{RegionError, Result};
pub use hierarchy::Hierarchy;
pub use region::CustomRegion;
pub use traits::IntoCodes;

/// Named constants for region and country codes.
pub use m49_codes as codes;
