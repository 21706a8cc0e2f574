//! Custom regions: include/exclude sets over the hierarchy with lazily
//! cached derived sets.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::closure::{common_ancestors, descendant_closure};
use crate::code::{CodeInput, normalize_region};
use crate::config::RegionConfig;
use crate::error::{RegionError, Result};
use crate::hierarchy::Hierarchy;
use crate::traits::IntoCodes;

/// A user-defined region built by including and excluding base codes.
///
/// Immutable after construction. The three derived sets (`children`,
/// `parents`, `countries`) are computed on first use and cached for the
/// life of the value. The caches are `OnceLock`s, so a region can be shared
/// across threads and queried concurrently.
///
/// # Example
///
/// ```
/// use m49_region::CustomRegion;
///
/// let region = CustomRegion::with_exclude("150", "EU").unwrap();
/// assert!(region.contains("NO"));
/// assert!(!region.contains("FR"));
/// assert!(region.is_within("150"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RegionConfig", into = "RegionConfig")]
pub struct CustomRegion {
    includes: Vec<String>,
    excludes: Vec<String>,
    children: OnceLock<BTreeSet<String>>,
    parents: OnceLock<BTreeSet<String>>,
    countries: OnceLock<Vec<String>>,
}

impl CustomRegion {
    /// Build a region from one or more include codes.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::MissingInclude`] if `include` is empty.
    pub fn new(include: impl IntoCodes) -> Result<Self> {
        Self::from_codes(include.into_codes(), Vec::new())
    }

    /// Build a region from include codes minus exclude codes.
    ///
    /// Exclusion removes the whole descendant closure of every exclude
    /// code, even where an included path would otherwise reach it.
    pub fn with_exclude(include: impl IntoCodes, exclude: impl IntoCodes) -> Result<Self> {
        Self::from_codes(include.into_codes(), exclude.into_codes())
    }

    fn from_codes(includes: Vec<String>, excludes: Vec<String>) -> Result<Self> {
        if includes.is_empty() {
            return Err(RegionError::MissingInclude);
        }
        debug!(?includes, ?excludes, "custom region");
        Ok(Self {
            includes,
            excludes,
            children: OnceLock::new(),
            parents: OnceLock::new(),
            countries: OnceLock::new(),
        })
    }

    /// Normalized include codes, in the order given.
    #[inline]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Normalized exclude codes, in the order given.
    #[inline]
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Every code inside the region: the descendant closure of the
    /// includes minus the descendant closure of the excludes.
    pub fn children(&self) -> &BTreeSet<String> {
        self.children.get_or_init(|| {
            let hierarchy = Hierarchy::global();
            let mut children = descendant_closure(hierarchy, &self.includes);
            if !self.excludes.is_empty() {
                let excluded = descendant_closure(hierarchy, &self.excludes);
                children.retain(|code| !excluded.contains(code));
            }
            trace!(count = children.len(), "computed region children");
            children
        })
    }

    /// Every code that is an ancestor-or-self of all include codes.
    pub fn parents(&self) -> &BTreeSet<String> {
        self.parents.get_or_init(|| {
            let parents = common_ancestors(Hierarchy::global(), &self.includes);
            trace!(count = parents.len(), "computed region parents");
            parents
        })
    }

    /// Sorted two-letter country codes inside the region.
    pub fn countries(&self) -> &[String] {
        self.countries.get_or_init(|| {
            let hierarchy = Hierarchy::global();
            // BTreeSet iteration is already sorted and unique
            let countries: Vec<String> = self
                .children()
                .iter()
                .filter(|code| hierarchy.is_country(code))
                .cloned()
                .collect();
            trace!(count = countries.len(), "computed region countries");
            countries
        })
    }

    /// True if `code` lies inside the region.
    pub fn contains(&self, code: impl Into<CodeInput>) -> bool {
        self.children().contains(&normalize_region(code))
    }

    /// True if every one of `codes` lies inside the region. Vacuously true
    /// for an empty list.
    pub fn contains_all(&self, codes: impl IntoCodes) -> bool {
        let children = self.children();
        codes.into_codes().iter().all(|code| children.contains(code))
    }

    /// True if the whole region lies within `code`.
    pub fn is_within(&self, code: impl Into<CodeInput>) -> bool {
        self.parents().contains(&normalize_region(code))
    }
}

impl PartialEq for CustomRegion {
    fn eq(&self, other: &Self) -> bool {
        self.includes == other.includes && self.excludes == other.excludes
    }
}

impl Eq for CustomRegion {}

impl fmt::Display for CustomRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "include=[{}]", self.includes.join(", "))?;
        if !self.excludes.is_empty() {
            write!(f, " exclude=[{}]", self.excludes.join(", "))?;
        }
        Ok(())
    }
}

impl TryFrom<RegionConfig> for CustomRegion {
    type Error = RegionError;

    fn try_from(config: RegionConfig) -> Result<Self> {
        Self::from_codes(config.include.into_codes(), config.exclude.into_codes())
    }
}

impl From<CustomRegion> for RegionConfig {
    fn from(region: CustomRegion) -> Self {
        RegionConfig::new(region.includes, region.excludes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_include() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(CustomRegion::new(empty), Err(RegionError::MissingInclude)));
    }

    #[test]
    fn normalizes_inputs() {
        let region = CustomRegion::with_exclude(vec!["eu", "35"], ["uk"]).unwrap();
        assert_eq!(region.includes(), &["EU".to_string(), "035".to_string()]);
        assert_eq!(region.excludes(), &["GB".to_string()]);
    }

    #[test]
    fn accepts_integers() {
        let region = CustomRegion::new(35u32).unwrap();
        assert_eq!(region.includes(), &["035".to_string()]);
        assert!(region.contains("TH"));
        assert!(region.is_within(142u32));
    }

    #[test]
    fn contains_seed_itself() {
        let region = CustomRegion::new("035").unwrap();
        assert!(region.contains("035"));
        assert!(region.contains(35u32));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let region = CustomRegion::new("eu").unwrap();
        assert!(region.contains("fr"));
        assert!(region.contains("Fr"));
        assert!(!region.contains("us"));
    }

    #[test]
    fn exclude_removes_whole_subtree() {
        let region = CustomRegion::with_exclude("142", "030").unwrap();
        assert!(region.contains("TH"));
        assert!(!region.contains("030"));
        assert!(!region.contains("JP"));
        assert!(!region.contains("CN"));
    }

    #[test]
    fn exclude_wins_over_independent_include_path() {
        // FR is included twice (via 155 and directly) and excluded via EU
        let region = CustomRegion::with_exclude(["155", "FR"], "EU").unwrap();
        assert!(!region.contains("FR"));
        assert!(region.contains("CH"));
    }

    #[test]
    fn excluding_everything_leaves_nothing() {
        let region = CustomRegion::with_exclude("035", "142").unwrap();
        assert!(region.children().is_empty());
        assert!(region.countries().is_empty());
        // exclusions do not affect containment within
        assert!(region.is_within("142"));
    }

    #[test]
    fn is_within_requires_every_include() {
        let region = CustomRegion::new(["JP", "TH"]).unwrap();
        assert!(region.is_within("142"));
        assert!(region.is_within("001"));
        assert!(!region.is_within("030"));
        assert!(!region.is_within("035"));
    }

    #[test]
    fn grouping_is_within_its_continent() {
        let region = CustomRegion::new("EU").unwrap();
        assert!(region.is_within("150"));
        assert!(region.is_within("001"));
        assert!(!region.is_within("155"));
    }

    #[test]
    fn is_within_self() {
        let region = CustomRegion::new("JP").unwrap();
        assert!(region.is_within("JP"));
        assert!(region.is_within("030"));
    }

    #[test]
    fn is_within_unknown_include() {
        let region = CustomRegion::new("ZZ").unwrap();
        assert!(region.is_within("ZZ"));
        assert!(!region.is_within("001"));
    }

    #[test]
    fn countries_are_sorted_and_filtered() {
        let region = CustomRegion::new("009").unwrap();
        let countries = region.countries();
        assert!(countries.windows(2).all(|w| w[0] < w[1]));
        assert!(countries.contains(&"AU".to_string()));
        assert!(countries.contains(&"AQ".to_string()));
        assert!(!countries.iter().any(|c| c == "QO" || c == "AC" || c == "053"));
    }

    #[test]
    fn countries_of_overlapping_includes_are_unique() {
        let region = CustomRegion::new(["155", "EU"]).unwrap();
        let countries = region.countries();
        let unique: BTreeSet<&String> = countries.iter().collect();
        assert_eq!(unique.len(), countries.len());
    }

    #[test]
    fn derived_sets_are_cached() {
        let region = CustomRegion::new("150").unwrap();
        let first = region.children() as *const _;
        let second = region.children() as *const _;
        assert_eq!(first, second);
        assert!(std::ptr::eq(region.countries(), region.countries()));
    }

    #[test]
    fn contains_all() {
        let region = CustomRegion::new("EU").unwrap();
        assert!(region.contains_all(["fr", "de", "it"]));
        assert!(!region.contains_all(["fr", "us"]));
        let none: [&str; 0] = [];
        assert!(region.contains_all(none));
    }

    #[test]
    fn display() {
        let region = CustomRegion::new("eu").unwrap();
        assert_eq!(region.to_string(), "include=[EU]");
        let region = CustomRegion::with_exclude(["150", "142"], 30u32).unwrap();
        assert_eq!(region.to_string(), "include=[150, 142] exclude=[030]");
    }

    #[test]
    fn equality_ignores_caches() {
        let a = CustomRegion::new("EU").unwrap();
        let b = CustomRegion::new("qu").unwrap();
        a.countries();
        assert_eq!(a, b);
    }

    #[test]
    fn shared_across_threads() {
        let region = std::sync::Arc::new(CustomRegion::new("419").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let region = region.clone();
                std::thread::spawn(move || region.countries().len())
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
    }
}
