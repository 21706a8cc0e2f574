//! Loading named regions from TOML.
//!
//! `demos/regions.toml` defines several regions under `[regions.<name>]`.
//! Each one is built and summarized.
//!
//! Run with `cargo run --example regions_from_toml`.

use m49_region::RegionsConfig;

const REGIONS: &str = include_str!("regions.toml");

fn main() -> m49_region::Result<()> {
    println!("=== Regions from TOML ===\n");

    let config: RegionsConfig = REGIONS.parse()?;
    for (name, region) in config.build_all()? {
        let countries = region.countries();
        println!("[{}] {}", name, region);
        println!("  {} countries: {}", countries.len(), countries.join(" "));
        println!(
            "  within Europe? {}  within World? {}\n",
            region.is_within("150"),
            region.is_within("001")
        );
    }

    Ok(())
}
