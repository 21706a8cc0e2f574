//! Indexed view of the static containment tables.
//!
//! The raw tables in [`crate::table`] are flat slices. `Hierarchy` indexes
//! them once into hash maps (parent → children, child → parents, alias →
//! canonical) so that closure traversal does not rescan the tables.
//!
//! Built lazily on first access and shared for the life of the process.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use tracing::debug;

use crate::code::{CodeInput, normalize_region};
use crate::table::{ALIASES, CONTAINMENT, NON_COUNTRIES};

/// Query interface over the containment, alias and non-country tables.
#[derive(Debug)]
pub struct Hierarchy {
    children: HashMap<&'static str, &'static [&'static str]>,
    parents: HashMap<&'static str, Vec<&'static str>>,
    aliases: HashMap<&'static str, &'static str>,
    non_countries: HashSet<&'static str>,
}

impl Hierarchy {
    /// The process-wide hierarchy built from the compiled-in tables.
    pub fn global() -> &'static Hierarchy {
        static INSTANCE: OnceLock<Hierarchy> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_tables(CONTAINMENT, ALIASES, NON_COUNTRIES))
    }

    /// Index arbitrary tables. Used by [`Hierarchy::global`] and by tests
    /// that need a small hand-built graph.
    pub fn from_tables(
        containment: &'static [(&'static str, &'static [&'static str])],
        aliases: &'static [(&'static str, &'static str)],
        non_countries: &'static [&'static str],
    ) -> Self {
        let mut children = HashMap::with_capacity(containment.len());
        let mut parents: HashMap<&'static str, Vec<&'static str>> = HashMap::new();

        for &(parent, kids) in containment {
            children.insert(parent, kids);
            for &kid in kids {
                parents.entry(kid).or_default().push(parent);
            }
        }

        let hierarchy = Self {
            children,
            parents,
            aliases: aliases.iter().copied().collect(),
            non_countries: non_countries.iter().copied().collect(),
        };

        debug!(
            containers = hierarchy.children.len(),
            codes = hierarchy.parents.len(),
            aliases = hierarchy.aliases.len(),
            "indexed region hierarchy"
        );

        hierarchy
    }

    /// Immediate children of `code`. Empty for leaves and unknown codes.
    #[inline]
    pub fn children_of(&self, code: &str) -> &'static [&'static str] {
        self.children.get(code).copied().unwrap_or_default()
    }

    /// Immediate parents of `code`. More than one when groupings overlap
    /// the geographic nesting (e.g. `FR` → `155`, `EU`).
    #[inline]
    pub fn parents_of(&self, code: &str) -> &[&'static str] {
        self.parents.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Canonical code for a deprecated alias, if `code` is one.
    #[inline]
    pub fn resolve_alias(&self, code: &str) -> Option<&'static str> {
        self.aliases.get(code).copied()
    }

    /// True if `code` has an entry of its own in the containment table.
    #[inline]
    pub fn is_container(&self, code: &str) -> bool {
        self.children.contains_key(code)
    }

    /// True if `code` appears anywhere in the containment table.
    pub fn contains_code(&self, code: &str) -> bool {
        self.children.contains_key(code) || self.parents.contains_key(code)
    }

    /// True if `code` is a canonical two-letter code that belongs in a
    /// country listing.
    pub fn is_country(&self, code: &str) -> bool {
        code.len() == 2
            && code.bytes().all(|b| b.is_ascii_uppercase())
            && !self.non_countries.contains(code)
    }

    /// Sorted countries under a single code. The code is normalized first,
    /// so this is equivalent to `CustomRegion::new(code)?.countries()`.
    pub fn countries_of(&self, code: impl Into<CodeInput>) -> Vec<String> {
        let code = normalize_region(code);
        let mut out = BTreeSet::new();
        let mut stack = vec![code.as_str()];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if self.is_country(current) {
                out.insert(current.to_string());
            }
            stack.extend(self.children_of(current).iter().copied());
        }
        out.into_iter().collect()
    }

    /// Number of indexed container codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
