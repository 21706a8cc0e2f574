//! End-to-end containment scenarios against the compiled-in snapshot.

use m49_region::{CustomRegion, Hierarchy, codes, normalize_region};

#[test]
fn latin_america_countries() {
    let region = CustomRegion::new("419").unwrap();
    let countries = region.countries();

    for code in ["BR", "MX", "AR", "CU", "CL"] {
        assert!(countries.contains(&code.to_string()), "419 should list {}", code);
    }
    // US sits in 021 Northern America
    assert!(!countries.contains(&"US".to_string()));
    assert!(!region.contains("US"));
}

#[test]
fn european_union_membership() {
    let region = CustomRegion::new("EU").unwrap();
    assert!(region.contains("FR"));
    assert!(region.contains("fr"));
    assert!(!region.contains("US"));
    assert!(!region.contains("CH"));
}

#[test]
fn europe_minus_eu_excludes_members() {
    let region = CustomRegion::with_exclude("150", "EU").unwrap();
    // GB is an EU member in this snapshot, exclude wins over 154
    assert!(!region.contains("GB"));
    assert!(!region.contains("UK"));
    assert!(!region.contains("FR"));
    assert!(region.contains("NO"));
    assert!(region.contains("CH"));
    assert!(region.contains("154"));
}

#[test]
fn asia_and_oceania_within_world() {
    let region = CustomRegion::new(["142", "009"]).unwrap();
    assert!(region.is_within("001"));
    assert!(region.is_within(1u32));
    assert!(!region.is_within("142"));
    assert!(!region.is_within("009"));
}

#[test]
fn south_eastern_asia_members() {
    let region = CustomRegion::new("035").unwrap();
    assert!(region.contains("TH"));
    assert!(region.contains("th"));
    assert!(region.contains("VN"));
    // UK resolves to GB, which is not in 035
    assert!(!region.contains("UK"));
}

#[test]
fn alias_include_resolves() {
    // QU is the deprecated code for EU
    let region = CustomRegion::new("QU").unwrap();
    assert!(region.contains("FR"));
    assert_eq!(region.includes(), &["EU".to_string()]);
}

#[test]
fn alias_query_resolves() {
    let region = CustomRegion::new("154").unwrap();
    assert!(region.contains("UK"));
    assert!(region.contains("GB"));
}

#[test]
fn named_constants_match_literal_codes() {
    let by_name = CustomRegion::with_exclude(codes::EUROPE, codes::EUROPEAN_UNION).unwrap();
    let by_code = CustomRegion::with_exclude("150", "EU").unwrap();
    assert_eq!(by_name, by_code);
    assert_eq!(by_name.countries(), by_code.countries());
}

#[test]
fn eu_member_is_within_two_branches() {
    let region = CustomRegion::new(codes::FRANCE).unwrap();
    assert!(region.is_within(codes::WESTERN_EUROPE));
    assert!(region.is_within(codes::EUROPE));
    assert!(region.is_within(codes::EUROPEAN_UNION));
    assert!(region.is_within(codes::WORLD));
    assert!(!region.is_within(codes::ASIA));
}

#[test]
fn mixed_includes_within_only_shared_ancestors() {
    // MX has three routes to 019; JP and FR have none
    let region = CustomRegion::new(["MX", "JP", "FR"]).unwrap();
    assert!(!region.is_within("019"));
    assert!(region.is_within("001"));
}

#[test]
fn north_america_grouping_overlaps_latin_america() {
    let north = CustomRegion::new("003").unwrap();
    let latam = CustomRegion::new("419").unwrap();
    assert!(north.contains("MX") && latam.contains("MX"));
    assert!(north.contains("US") && !latam.contains("US"));
    assert!(!north.contains("BR") && latam.contains("BR"));
}

#[test]
fn world_lists_every_country_once() {
    let region = CustomRegion::new("001").unwrap();
    let countries = region.countries();

    assert!(countries.windows(2).all(|w| w[0] < w[1]), "sorted and unique");
    for code in countries {
        assert_eq!(code.len(), 2);
        assert!(Hierarchy::global().is_country(code));
    }
    for non_country in ["EU", "QO", "AC", "CP", "DG", "EA", "IC", "TA"] {
        assert!(!countries.contains(&non_country.to_string()), "{} listed", non_country);
    }
    assert!(countries.contains(&"AQ".to_string()));
    assert!(countries.contains(&"XK".to_string()));
}

#[test]
fn unknown_codes_degrade_to_false() {
    let region = CustomRegion::new("XX").unwrap();
    assert!(region.contains("XX"));
    assert!(!region.contains("FR"));
    assert!(!region.is_within("001"));

    let world = CustomRegion::new("001").unwrap();
    assert!(!world.contains("XX"));
    assert!(!world.contains("9999"));
    assert!(!world.is_within("XX"));
}

#[test]
fn countries_match_hierarchy_shortcut() {
    for code in ["419", "EU", "035", "QO", "JP", "uk", "5", "eu", "qu", "0035"] {
        let region = CustomRegion::new(code).unwrap();
        assert_eq!(
            region.countries(),
            Hierarchy::global().countries_of(code).as_slice(),
            "mismatch for {:?}",
            code
        );
    }
}

#[test]
fn extra_leading_zeros_name_the_same_region() {
    let region = CustomRegion::new("0035").unwrap();
    assert_eq!(region.includes(), &["035".to_string()]);
    assert!(region.contains("TH"));

    let south_east_asia = CustomRegion::new(35u32).unwrap();
    assert!(south_east_asia.contains("0035"));
    assert!(south_east_asia.is_within("00142"));
}

#[test]
fn european_union_lies_within_europe() {
    let region = CustomRegion::new(codes::EUROPEAN_UNION).unwrap();
    assert!(region.is_within(codes::EUROPE));
    assert!(region.is_within(codes::WORLD));
    assert!(!region.is_within(codes::WESTERN_EUROPE));

    let europe = CustomRegion::new(codes::EUROPE).unwrap();
    assert!(europe.contains(codes::EUROPEAN_UNION));
}

#[test]
fn padded_and_unpadded_forms_agree() {
    assert_eq!(normalize_region("5"), normalize_region(5u32));
    let a = CustomRegion::new("5").unwrap();
    let b = CustomRegion::new(5u32).unwrap();
    let c = CustomRegion::new("005").unwrap();
    assert_eq!(a.countries(), b.countries());
    assert_eq!(b.countries(), c.countries());
    assert!(a.contains("BR"));
}
