//! Include/exclude walkthrough.
//!
//! This example shows how to:
//! - Build a custom region from region and country codes
//! - Carve a grouping (EU) out of a continent with `exclude`
//! - Ask whether a region lies entirely within another region
//!
//! Run with `cargo run --example region_walkthrough`.

use m49_region::{CustomRegion, codes};

fn main() -> m49_region::Result<()> {
    println!("=== Custom Region Walkthrough ===\n");

    // =========================================================================
    // 1. A single base region
    // =========================================================================
    let latam = CustomRegion::new(codes::LATIN_AMERICA)?;
    println!("Latin America ({}): {} countries", latam, latam.countries().len());
    println!("  contains BR? {}", latam.contains("BR"));
    println!("  contains US? {}", latam.contains("US"));
    println!("  within Americas? {}\n", latam.is_within(codes::AMERICAS));

    // =========================================================================
    // 2. Exclusion always wins
    // =========================================================================
    let outside_eu = CustomRegion::with_exclude(codes::EUROPE, codes::EUROPEAN_UNION)?;
    println!("Europe outside the EU ({}):", outside_eu);
    println!("  {}", outside_eu.countries().join(" "));
    println!("  contains FR? {}", outside_eu.contains("FR"));
    println!("  contains NO? {}\n", outside_eu.contains("NO"));

    // =========================================================================
    // 3. Mixed inputs: integers, lowercase, deprecated aliases
    // =========================================================================
    let mixed = CustomRegion::new(vec![
        m49_region::CodeInput::from(35u32),
        "jp".into(),
        "uk".into(),
    ])?;
    println!("Mixed ({}):", mixed);
    println!("  within Asia? {}", mixed.is_within(codes::ASIA));
    println!("  within World? {}", mixed.is_within(codes::WORLD));
    println!("  countries: {}", mixed.countries().join(" "));

    Ok(())
}
