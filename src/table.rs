//! Compiled-in static data: territory containment, code aliases and the
//! non-country set.
//!
//! The snapshot is CLDR `territoryContainment` layered on UN M.49. Besides
//! the plain geographic nesting (world → continent → subregion → country) it
//! carries the CLDR groupings `003`, `202`, `419`, `EU` and `QO`, which
//! overlap the geographic nesting. The relation is therefore a DAG, not a
//! tree: `FR` is reachable from `155` and from `EU` (both under `150`), `MX`
//! from `013`, `003` and `419`.
//!
//! Every code in these tables is in canonical form (uppercase letters or
//! zero-padded three-digit numbers).

/// Parent code → immediate child codes.
pub const CONTAINMENT: &[(&str, &[&str])] = &[
    // ── World ─────────────────────────────────────────────────────────────
    ("001", &["002", "009", "019", "142", "150"]),

    // ── Africa ────────────────────────────────────────────────────────────
    ("002", &["011", "014", "015", "017", "018", "202"]),
    ("202", &["011", "014", "017", "018"]),
    ("011", &[
        "BF", "BJ", "CI", "CV", "GH", "GM", "GN", "GW", "LR", "ML", "MR", "NE", "NG", "SH", "SL",
        "SN", "TG",
    ]),
    ("014", &[
        "BI", "DJ", "ER", "ET", "IO", "KE", "KM", "MG", "MU", "MW", "MZ", "RE", "RW", "SC", "SO",
        "SS", "TF", "TZ", "UG", "YT", "ZM", "ZW",
    ]),
    ("015", &["DZ", "EA", "EG", "EH", "IC", "LY", "MA", "SD", "TN"]),
    ("017", &["AO", "CD", "CF", "CG", "CM", "GA", "GQ", "ST", "TD"]),
    ("018", &["BW", "LS", "NA", "SZ", "ZA"]),

    // ── Americas ──────────────────────────────────────────────────────────
    ("019", &["003", "005", "013", "021", "029", "419"]),
    ("003", &["013", "021", "029"]),
    ("419", &["005", "013", "029"]),
    ("005", &[
        "AR", "BO", "BR", "BV", "CL", "CO", "EC", "FK", "GF", "GS", "GY", "PE", "PY", "SR", "UY",
        "VE",
    ]),
    ("013", &["BZ", "CR", "GT", "HN", "MX", "NI", "PA", "SV"]),
    ("021", &["BM", "CA", "GL", "PM", "US"]),
    ("029", &[
        "AG", "AI", "AW", "BB", "BL", "BQ", "BS", "CU", "CW", "DM", "DO", "GD", "GP", "HT", "JM",
        "KN", "KY", "LC", "MF", "MQ", "MS", "PR", "SX", "TC", "TT", "VC", "VG", "VI",
    ]),

    // ── Asia ──────────────────────────────────────────────────────────────
    ("142", &["030", "034", "035", "143", "145"]),
    ("030", &["CN", "HK", "JP", "KP", "KR", "MN", "MO", "TW"]),
    ("034", &["AF", "BD", "BT", "IN", "IR", "LK", "MV", "NP", "PK"]),
    ("035", &["BN", "ID", "KH", "LA", "MM", "MY", "PH", "SG", "TH", "TL", "VN"]),
    ("143", &["KG", "KZ", "TJ", "TM", "UZ"]),
    ("145", &[
        "AE", "AM", "AZ", "BH", "CY", "GE", "IL", "IQ", "JO", "KW", "LB", "OM", "PS", "QA", "SA",
        "SY", "TR", "YE",
    ]),

    // ── Europe ────────────────────────────────────────────────────────────
    ("150", &["039", "151", "154", "155", "EU"]),
    ("039", &[
        "AD", "AL", "BA", "ES", "GI", "GR", "HR", "IT", "ME", "MK", "MT", "PT", "RS", "SI", "SM",
        "VA", "XK",
    ]),
    ("151", &["BG", "BY", "CZ", "HU", "MD", "PL", "RO", "RU", "SK", "UA"]),
    ("154", &[
        "AX", "DK", "EE", "FI", "FO", "GB", "GG", "IE", "IM", "IS", "JE", "LT", "LV", "NO", "SE",
        "SJ",
    ]),
    ("155", &["AT", "BE", "CH", "DE", "FR", "LI", "LU", "MC", "NL"]),
    ("EU", &[
        "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GB", "GR", "HR", "HU",
        "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
    ]),

    // ── Oceania ───────────────────────────────────────────────────────────
    ("009", &["053", "054", "057", "061", "QO"]),
    ("053", &["AU", "CC", "CX", "HM", "NF", "NZ"]),
    ("054", &["FJ", "NC", "PG", "SB", "VU"]),
    ("057", &["FM", "GU", "KI", "MH", "MP", "NR", "PW", "UM"]),
    ("061", &["AS", "CK", "NU", "PF", "PN", "TK", "TO", "TV", "WF", "WS"]),
    ("QO", &["AC", "AQ", "CP", "DG", "TA"]),
];

/// Deprecated or alternate code → canonical code. Resolution is a single
/// step: no target appears as a key.
pub const ALIASES: &[(&str, &str)] = &[
    ("AN", "CW"),
    ("BU", "MM"),
    ("CS", "RS"),
    ("DD", "DE"),
    ("DY", "BJ"),
    ("FX", "FR"),
    ("HV", "BF"),
    ("NH", "VU"),
    ("NT", "SA"),
    ("QU", "EU"),
    ("RH", "ZW"),
    ("SU", "RU"),
    ("TP", "TL"),
    ("UK", "GB"),
    ("VD", "VN"),
    ("YD", "YE"),
    ("YU", "RS"),
    ("ZR", "CD"),
];

/// Two-letter codes that never appear in a country listing: groupings,
/// deprecated codes and exceptionally reserved codes.
pub const NON_COUNTRIES: &[&str] = &[
    // groupings
    "EU", "EZ", "QO", "UN",
    // deprecated
    "AN", "BU", "CS", "DD", "DY", "FX", "HV", "NH", "NT", "QU", "RH", "SU", "TP", "UK", "VD",
    "YD", "YU", "ZR",
    // exceptionally reserved
    "AC", "CP", "DG", "EA", "IC", "TA",
];
