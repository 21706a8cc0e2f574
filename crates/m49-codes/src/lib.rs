//! Human-readable names for UN M.49 region codes and ISO 3166-1 alpha-2
//! country codes.
//!
//! Every constant is the same string a caller could pass by hand, so
//! `m49_codes::LATIN_AMERICA` and `"419"` are interchangeable:
//!
//! ```
//! assert_eq!(m49_codes::LATIN_AMERICA, "419");
//! assert_eq!(m49_codes::JAPAN, "JP");
//! ```

// =============================================================================
// Regions
// =============================================================================

pub const WORLD: &str = "001";

pub const AFRICA: &str = "002";
pub const NORTHERN_AFRICA: &str = "015";
pub const SUB_SAHARAN_AFRICA: &str = "202";
pub const WESTERN_AFRICA: &str = "011";
pub const EASTERN_AFRICA: &str = "014";
pub const MIDDLE_AFRICA: &str = "017";
pub const SOUTHERN_AFRICA: &str = "018";

pub const AMERICAS: &str = "019";
pub const NORTH_AMERICA: &str = "003";
pub const NORTHERN_AMERICA: &str = "021";
pub const LATIN_AMERICA: &str = "419";
pub const CENTRAL_AMERICA: &str = "013";
pub const CARIBBEAN: &str = "029";
pub const SOUTH_AMERICA: &str = "005";

pub const ASIA: &str = "142";
pub const CENTRAL_ASIA: &str = "143";
pub const EASTERN_ASIA: &str = "030";
pub const SOUTHERN_ASIA: &str = "034";
pub const SOUTH_EASTERN_ASIA: &str = "035";
pub const WESTERN_ASIA: &str = "145";

pub const EUROPE: &str = "150";
pub const EASTERN_EUROPE: &str = "151";
pub const NORTHERN_EUROPE: &str = "154";
pub const SOUTHERN_EUROPE: &str = "039";
pub const WESTERN_EUROPE: &str = "155";
/// CLDR grouping; overlaps the geographic European subregions.
pub const EUROPEAN_UNION: &str = "EU";

pub const OCEANIA: &str = "009";
pub const AUSTRALASIA: &str = "053";
pub const MELANESIA: &str = "054";
pub const MICRONESIA: &str = "057";
pub const POLYNESIA: &str = "061";
/// CLDR grouping for remote territories, Antarctica included.
pub const OUTLYING_OCEANIA: &str = "QO";

// =============================================================================
// Countries and territories
// =============================================================================

pub const AFGHANISTAN: &str = "AF";
pub const ALAND_ISLANDS: &str = "AX";
pub const ALBANIA: &str = "AL";
pub const ALGERIA: &str = "DZ";
pub const AMERICAN_SAMOA: &str = "AS";
pub const ANDORRA: &str = "AD";
pub const ANGOLA: &str = "AO";
pub const ANGUILLA: &str = "AI";
pub const ANTARCTICA: &str = "AQ";
pub const ANTIGUA_AND_BARBUDA: &str = "AG";
pub const ARGENTINA: &str = "AR";
pub const ARMENIA: &str = "AM";
pub const ARUBA: &str = "AW";
pub const AUSTRALIA: &str = "AU";
pub const AUSTRIA: &str = "AT";
pub const AZERBAIJAN: &str = "AZ";
pub const BAHAMAS: &str = "BS";
pub const BAHRAIN: &str = "BH";
pub const BANGLADESH: &str = "BD";
pub const BARBADOS: &str = "BB";
pub const BELARUS: &str = "BY";
pub const BELGIUM: &str = "BE";
pub const BELIZE: &str = "BZ";
pub const BENIN: &str = "BJ";
pub const BERMUDA: &str = "BM";
pub const BHUTAN: &str = "BT";
pub const BOLIVIA: &str = "BO";
pub const BONAIRE_SINT_EUSTATIUS_AND_SABA: &str = "BQ";
pub const BOSNIA_AND_HERZEGOVINA: &str = "BA";
pub const BOTSWANA: &str = "BW";
pub const BOUVET_ISLAND: &str = "BV";
pub const BRAZIL: &str = "BR";
pub const BRITISH_INDIAN_OCEAN_TERRITORY: &str = "IO";
pub const BRITISH_VIRGIN_ISLANDS: &str = "VG";
pub const BRUNEI: &str = "BN";
pub const BULGARIA: &str = "BG";
pub const BURKINA_FASO: &str = "BF";
pub const BURUNDI: &str = "BI";
pub const CABO_VERDE: &str = "CV";
pub const CAMBODIA: &str = "KH";
pub const CAMEROON: &str = "CM";
pub const CANADA: &str = "CA";
pub const CAYMAN_ISLANDS: &str = "KY";
pub const CENTRAL_AFRICAN_REPUBLIC: &str = "CF";
pub const CHAD: &str = "TD";
pub const CHILE: &str = "CL";
pub const CHINA: &str = "CN";
pub const CHRISTMAS_ISLAND: &str = "CX";
pub const COCOS_ISLANDS: &str = "CC";
pub const COLOMBIA: &str = "CO";
pub const COMOROS: &str = "KM";
pub const CONGO: &str = "CG";
pub const CONGO_DEMOCRATIC_REPUBLIC: &str = "CD";
pub const COOK_ISLANDS: &str = "CK";
pub const COSTA_RICA: &str = "CR";
pub const COTE_DIVOIRE: &str = "CI";
pub const CROATIA: &str = "HR";
pub const CUBA: &str = "CU";
pub const CURACAO: &str = "CW";
pub const CYPRUS: &str = "CY";
pub const CZECHIA: &str = "CZ";
pub const DENMARK: &str = "DK";
pub const DJIBOUTI: &str = "DJ";
pub const DOMINICA: &str = "DM";
pub const DOMINICAN_REPUBLIC: &str = "DO";
pub const ECUADOR: &str = "EC";
pub const EGYPT: &str = "EG";
pub const EL_SALVADOR: &str = "SV";
pub const EQUATORIAL_GUINEA: &str = "GQ";
pub const ERITREA: &str = "ER";
pub const ESTONIA: &str = "EE";
pub const ESWATINI: &str = "SZ";
pub const ETHIOPIA: &str = "ET";
pub const FALKLAND_ISLANDS: &str = "FK";
pub const FAROE_ISLANDS: &str = "FO";
pub const FIJI: &str = "FJ";
pub const FINLAND: &str = "FI";
pub const FRANCE: &str = "FR";
pub const FRENCH_GUIANA: &str = "GF";
pub const FRENCH_POLYNESIA: &str = "PF";
pub const FRENCH_SOUTHERN_TERRITORIES: &str = "TF";
pub const GABON: &str = "GA";
pub const GAMBIA: &str = "GM";
pub const GEORGIA: &str = "GE";
pub const GERMANY: &str = "DE";
pub const GHANA: &str = "GH";
pub const GIBRALTAR: &str = "GI";
pub const GREECE: &str = "GR";
pub const GREENLAND: &str = "GL";
pub const GRENADA: &str = "GD";
pub const GUADELOUPE: &str = "GP";
pub const GUAM: &str = "GU";
pub const GUATEMALA: &str = "GT";
pub const GUERNSEY: &str = "GG";
pub const GUINEA: &str = "GN";
pub const GUINEA_BISSAU: &str = "GW";
pub const GUYANA: &str = "GY";
pub const HAITI: &str = "HT";
pub const HEARD_AND_MCDONALD_ISLANDS: &str = "HM";
pub const HOLY_SEE: &str = "VA";
pub const HONDURAS: &str = "HN";
pub const HONG_KONG: &str = "HK";
pub const HUNGARY: &str = "HU";
pub const ICELAND: &str = "IS";
pub const INDIA: &str = "IN";
pub const INDONESIA: &str = "ID";
pub const IRAN: &str = "IR";
pub const IRAQ: &str = "IQ";
pub const IRELAND: &str = "IE";
pub const ISLE_OF_MAN: &str = "IM";
pub const ISRAEL: &str = "IL";
pub const ITALY: &str = "IT";
pub const JAMAICA: &str = "JM";
pub const JAPAN: &str = "JP";
pub const JERSEY: &str = "JE";
pub const JORDAN: &str = "JO";
pub const KAZAKHSTAN: &str = "KZ";
pub const KENYA: &str = "KE";
pub const KIRIBATI: &str = "KI";
pub const KOSOVO: &str = "XK";
pub const KUWAIT: &str = "KW";
pub const KYRGYZSTAN: &str = "KG";
pub const LAOS: &str = "LA";
pub const LATVIA: &str = "LV";
pub const LEBANON: &str = "LB";
pub const LESOTHO: &str = "LS";
pub const LIBERIA: &str = "LR";
pub const LIBYA: &str = "LY";
pub const LIECHTENSTEIN: &str = "LI";
pub const LITHUANIA: &str = "LT";
pub const LUXEMBOURG: &str = "LU";
pub const MACAO: &str = "MO";
pub const MADAGASCAR: &str = "MG";
pub const MALAWI: &str = "MW";
pub const MALAYSIA: &str = "MY";
pub const MALDIVES: &str = "MV";
pub const MALI: &str = "ML";
pub const MALTA: &str = "MT";
pub const MARSHALL_ISLANDS: &str = "MH";
pub const MARTINIQUE: &str = "MQ";
pub const MAURITANIA: &str = "MR";
pub const MAURITIUS: &str = "MU";
pub const MAYOTTE: &str = "YT";
pub const MEXICO: &str = "MX";
pub const MICRONESIA_FEDERATED_STATES: &str = "FM";
pub const MOLDOVA: &str = "MD";
pub const MONACO: &str = "MC";
pub const MONGOLIA: &str = "MN";
pub const MONTENEGRO: &str = "ME";
pub const MONTSERRAT: &str = "MS";
pub const MOROCCO: &str = "MA";
pub const MOZAMBIQUE: &str = "MZ";
pub const MYANMAR: &str = "MM";
pub const NAMIBIA: &str = "NA";
pub const NAURU: &str = "NR";
pub const NEPAL: &str = "NP";
pub const NETHERLANDS: &str = "NL";
pub const NEW_CALEDONIA: &str = "NC";
pub const NEW_ZEALAND: &str = "NZ";
pub const NICARAGUA: &str = "NI";
pub const NIGER: &str = "NE";
pub const NIGERIA: &str = "NG";
pub const NIUE: &str = "NU";
pub const NORFOLK_ISLAND: &str = "NF";
pub const NORTH_KOREA: &str = "KP";
pub const NORTH_MACEDONIA: &str = "MK";
pub const NORTHERN_MARIANA_ISLANDS: &str = "MP";
pub const NORWAY: &str = "NO";
pub const OMAN: &str = "OM";
pub const PAKISTAN: &str = "PK";
pub const PALAU: &str = "PW";
pub const PALESTINE: &str = "PS";
pub const PANAMA: &str = "PA";
pub const PAPUA_NEW_GUINEA: &str = "PG";
pub const PARAGUAY: &str = "PY";
pub const PERU: &str = "PE";
pub const PHILIPPINES: &str = "PH";
pub const PITCAIRN: &str = "PN";
pub const POLAND: &str = "PL";
pub const PORTUGAL: &str = "PT";
pub const PUERTO_RICO: &str = "PR";
pub const QATAR: &str = "QA";
pub const REUNION: &str = "RE";
pub const ROMANIA: &str = "RO";
pub const RUSSIA: &str = "RU";
pub const RWANDA: &str = "RW";
pub const SAINT_BARTHELEMY: &str = "BL";
pub const SAINT_HELENA: &str = "SH";
pub const SAINT_KITTS_AND_NEVIS: &str = "KN";
pub const SAINT_LUCIA: &str = "LC";
pub const SAINT_MARTIN: &str = "MF";
pub const SAINT_PIERRE_AND_MIQUELON: &str = "PM";
pub const SAINT_VINCENT_AND_THE_GRENADINES: &str = "VC";
pub const SAMOA: &str = "WS";
pub const SAN_MARINO: &str = "SM";
pub const SAO_TOME_AND_PRINCIPE: &str = "ST";
pub const SAUDI_ARABIA: &str = "SA";
pub const SENEGAL: &str = "SN";
pub const SERBIA: &str = "RS";
pub const SEYCHELLES: &str = "SC";
pub const SIERRA_LEONE: &str = "SL";
pub const SINGAPORE: &str = "SG";
pub const SINT_MAARTEN: &str = "SX";
pub const SLOVAKIA: &str = "SK";
pub const SLOVENIA: &str = "SI";
pub const SOLOMON_ISLANDS: &str = "SB";
pub const SOMALIA: &str = "SO";
pub const SOUTH_AFRICA: &str = "ZA";
pub const SOUTH_GEORGIA_AND_SOUTH_SANDWICH_ISLANDS: &str = "GS";
pub const SOUTH_KOREA: &str = "KR";
pub const SOUTH_SUDAN: &str = "SS";
pub const SPAIN: &str = "ES";
pub const SRI_LANKA: &str = "LK";
pub const SUDAN: &str = "SD";
pub const SURINAME: &str = "SR";
pub const SVALBARD_AND_JAN_MAYEN: &str = "SJ";
pub const SWEDEN: &str = "SE";
pub const SWITZERLAND: &str = "CH";
pub const SYRIA: &str = "SY";
pub const TAIWAN: &str = "TW";
pub const TAJIKISTAN: &str = "TJ";
pub const TANZANIA: &str = "TZ";
pub const THAILAND: &str = "TH";
pub const TIMOR_LESTE: &str = "TL";
pub const TOGO: &str = "TG";
pub const TOKELAU: &str = "TK";
pub const TONGA: &str = "TO";
pub const TRINIDAD_AND_TOBAGO: &str = "TT";
pub const TUNISIA: &str = "TN";
pub const TURKEY: &str = "TR";
pub const TURKMENISTAN: &str = "TM";
pub const TURKS_AND_CAICOS_ISLANDS: &str = "TC";
pub const TUVALU: &str = "TV";
pub const UGANDA: &str = "UG";
pub const UKRAINE: &str = "UA";
pub const UNITED_ARAB_EMIRATES: &str = "AE";
pub const UNITED_KINGDOM: &str = "GB";
pub const UNITED_STATES: &str = "US";
pub const UNITED_STATES_MINOR_OUTLYING_ISLANDS: &str = "UM";
pub const UNITED_STATES_VIRGIN_ISLANDS: &str = "VI";
pub const URUGUAY: &str = "UY";
pub const UZBEKISTAN: &str = "UZ";
pub const VANUATU: &str = "VU";
pub const VENEZUELA: &str = "VE";
pub const VIETNAM: &str = "VN";
pub const WALLIS_AND_FUTUNA: &str = "WF";
pub const WESTERN_SAHARA: &str = "EH";
pub const YEMEN: &str = "YE";
pub const ZAMBIA: &str = "ZM";
pub const ZIMBABWE: &str = "ZW";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_are_canonical() {
        for code in [WORLD, AFRICA, AMERICAS, ASIA, EUROPE, OCEANIA, LATIN_AMERICA] {
            assert_eq!(code.len(), 3);
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "{:?}", code);
        }
        assert_eq!(EUROPEAN_UNION, "EU");
        assert_eq!(OUTLYING_OCEANIA, "QO");
    }

    #[test]
    fn country_codes_are_uppercase_alpha2() {
        for code in [JAPAN, UNITED_KINGDOM, UNITED_STATES, FRANCE, BRAZIL, KOSOVO] {
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()), "{:?}", code);
        }
    }
}
