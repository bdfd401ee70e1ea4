//! Mapping countries onto continents.

#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EnrichError;

/// The seven continents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub enum ContinentCode {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl ContinentCode {
    /// All continents.
    pub const ALL: [ContinentCode; 7] = [
        ContinentCode::Africa,
        ContinentCode::Antarctica,
        ContinentCode::Asia,
        ContinentCode::Europe,
        ContinentCode::NorthAmerica,
        ContinentCode::Oceania,
        ContinentCode::SouthAmerica,
    ];

    /// The continent of the country with the ISO 3166-1 alpha-2 `code`.
    pub fn from_alpha2(code: &str) -> Result<Self, EnrichError> {
        let continent = match code.to_uppercase().as_str() {
            "AO" | "BF" | "BI" | "BJ" | "BW" | "CD" | "CF" | "CG" | "CI" | "CM" | "CV" | "DJ" |
            "DZ" | "EG" | "EH" | "ER" | "ET" | "GA" | "GH" | "GM" | "GN" | "GQ" | "GW" | "KE" |
            "KM" | "LR" | "LS" | "LY" | "MA" | "MG" | "ML" | "MR" | "MU" | "MW" | "MZ" | "NA" |
            "NE" | "NG" | "RE" | "RW" | "SC" | "SD" | "SH" | "SL" | "SN" | "SO" | "SS" | "ST" |
            "SZ" | "TD" | "TG" | "TN" | "TZ" | "UG" | "YT" | "ZA" | "ZM" | "ZW"
            => ContinentCode::Africa,
            "AQ" | "BV" | "GS" | "HM" | "TF"
            => ContinentCode::Antarctica,
            "AE" | "AF" | "AM" | "AZ" | "BD" | "BH" | "BN" | "BT" | "CC" | "CN" | "CX" | "CY" |
            "GE" | "HK" | "ID" | "IL" | "IN" | "IO" | "IQ" | "IR" | "JO" | "JP" | "KG" | "KH" |
            "KP" | "KR" | "KW" | "KZ" | "LA" | "LB" | "LK" | "MM" | "MN" | "MO" | "MV" | "MY" |
            "NP" | "OM" | "PH" | "PK" | "PS" | "QA" | "SA" | "SG" | "SY" | "TH" | "TJ" | "TL" |
            "TM" | "TR" | "TW" | "UZ" | "VN" | "YE"
            => ContinentCode::Asia,
            "AD" | "AL" | "AT" | "AX" | "BA" | "BE" | "BG" | "BY" | "CH" | "CZ" | "DE" | "DK" |
            "EE" | "ES" | "FI" | "FO" | "FR" | "GB" | "GG" | "GI" | "GR" | "HR" | "HU" | "IE" |
            "IM" | "IS" | "IT" | "JE" | "LI" | "LT" | "LU" | "LV" | "MC" | "MD" | "ME" | "MK" |
            "MT" | "NL" | "NO" | "PL" | "PT" | "RO" | "RS" | "RU" | "SE" | "SI" | "SJ" | "SK" |
            "SM" | "UA" | "VA"
            => ContinentCode::Europe,
            "AG" | "AI" | "AW" | "BB" | "BL" | "BM" | "BQ" | "BS" | "BZ" | "CA" | "CR" | "CU" |
            "CW" | "DM" | "DO" | "GD" | "GL" | "GP" | "GT" | "HN" | "HT" | "JM" | "KN" | "KY" |
            "LC" | "MF" | "MQ" | "MS" | "MX" | "NI" | "PA" | "PM" | "PR" | "SV" | "SX" | "TC" |
            "TT" | "US" | "VC" | "VG" | "VI"
            => ContinentCode::NorthAmerica,
            "AS" | "AU" | "CK" | "FJ" | "FM" | "GU" | "KI" | "MH" | "MP" | "NC" | "NF" | "NR" |
            "NU" | "NZ" | "PF" | "PG" | "PN" | "PW" | "SB" | "TK" | "TO" | "TV" | "UM" | "VU" |
            "WF" | "WS"
            => ContinentCode::Oceania,
            "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "FK" | "GF" | "GY" | "PE" | "PY" | "SR" |
            "UY" | "VE"
            => ContinentCode::SouthAmerica,
            _ => return Err(EnrichError::lookup_miss("continent", code)),
        };
        Ok(continent)
    }

    /// The two-letter code, `EU`.
    pub fn code(&self) -> &'static str {
        match self {
            ContinentCode::Africa => "AF",
            ContinentCode::Antarctica => "AN",
            ContinentCode::Asia => "AS",
            ContinentCode::Europe => "EU",
            ContinentCode::NorthAmerica => "NA",
            ContinentCode::Oceania => "OC",
            ContinentCode::SouthAmerica => "SA",
        }
    }

    /// The full name, `Europe`.
    pub fn name(&self) -> &'static str {
        match self {
            ContinentCode::Africa => "Africa",
            ContinentCode::Antarctica => "Antarctica",
            ContinentCode::Asia => "Asia",
            ContinentCode::Europe => "Europe",
            ContinentCode::NorthAmerica => "North America",
            ContinentCode::Oceania => "Oceania",
            ContinentCode::SouthAmerica => "South America",
        }
    }
}

impl FromStr for ContinentCode {
    type Err = EnrichError;

    /// Parses the two-letter continent code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContinentCode::ALL
            .iter()
            .find(|continent| continent.code().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| EnrichError::lookup_miss("continent code", s))
    }
}

impl fmt::Display for ContinentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::country::countries;

    #[test]
    fn every_country_has_a_continent() {
        for country in countries() {
            assert!(
                ContinentCode::from_alpha2(country.alpha_2).is_ok(),
                "{} has no continent",
                country.name
            );
        }
    }

    #[test]
    fn known_continents() {
        assert_eq!(ContinentCode::from_alpha2("FR").unwrap(), ContinentCode::Europe);
        assert_eq!(ContinentCode::from_alpha2("us").unwrap(), ContinentCode::NorthAmerica);
        assert_eq!(ContinentCode::from_alpha2("BR").unwrap().name(), "South America");
        assert!(ContinentCode::from_alpha2("XX").is_err());
    }

    #[test]
    fn codes() {
        for continent in ContinentCode::ALL.iter() {
            assert_eq!(&continent.code().parse::<ContinentCode>().unwrap(), continent);
        }
        assert!("ZZ".parse::<ContinentCode>().is_err());
    }
}
