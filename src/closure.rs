//! Closure engine: descendant and ancestor expansion over the containment
//! DAG.
//!
//! All functions take the [`Hierarchy`] explicitly so they can run against
//! the global tables or a hand-built graph. Codes are expected to be
//! normalized already.

use std::collections::BTreeSet;

use crate::hierarchy::Hierarchy;

/// Every seed together with everything transitively below it.
///
/// Codes without a containment entry are leaves and contribute only
/// themselves. Shared descendants (reachable from several seeds, or through
/// several paths) collapse into one entry.
pub fn descendant_closure<S: AsRef<str>>(hierarchy: &Hierarchy, seeds: &[S]) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for seed in seeds {
        collect_descendants(hierarchy, seed.as_ref(), &mut out);
    }
    out
}

fn collect_descendants(hierarchy: &Hierarchy, code: &str, out: &mut BTreeSet<String>) {
    // Already expanded through another path
    if !out.insert(code.to_string()) {
        return;
    }
    for &child in hierarchy.children_of(code) {
        collect_descendants(hierarchy, child, out);
    }
}

/// The code itself and every code that contains it, directly or
/// transitively. Each ancestor appears once even when it is reachable
/// through several paths (`FR` reaches `150` via `155` and via `EU`).
pub fn ancestor_closure(hierarchy: &Hierarchy, code: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_ancestors(hierarchy, code, &mut out);
    out
}

fn collect_ancestors(hierarchy: &Hierarchy, code: &str, out: &mut BTreeSet<String>) {
    if !out.insert(code.to_string()) {
        return;
    }
    for &parent in hierarchy.parents_of(code) {
        collect_ancestors(hierarchy, parent, out);
    }
}

/// Codes that are an ancestor-or-self of *every* seed.
///
/// Each seed's ancestor set is deduplicated before intersecting, so a seed
/// with several routes to the same ancestor cannot stand in for another
/// seed that lacks it. Empty input yields an empty set.
pub fn common_ancestors<S: AsRef<str>>(hierarchy: &Hierarchy, seeds: &[S]) -> BTreeSet<String> {
    let mut iter = seeds.iter();
    let Some(first) = iter.next() else {
        return BTreeSet::new();
    };

    let mut common = ancestor_closure(hierarchy, first.as_ref());
    for seed in iter {
        if common.is_empty() {
            break;
        }
        let ancestors = ancestor_closure(hierarchy, seed.as_ref());
        common.retain(|code| ancestors.contains(code));
    }
    common
}
