//! Locale-dependent month naming.
//!
//! Monthly aggregation keys buckets by localized month name. The locale is
//! injected into the aggregator as a parameter so the algorithm itself stays
//! locale-agnostic and testable with a fixed locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Display locale for month names in the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Localized month name for a zero-based month index (0=January).
    /// Indices outside 0..12 wrap; callers derive them from parsed dates.
    pub fn month_name(&self, month0: usize) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_EN,
            Locale::Fr => &MONTHS_FR,
        };
        table[month0 % 12]
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            other => Err(format!("unsupported locale: {other} (expected en or fr)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::En.month_name(0), "January");
        assert_eq!(Locale::En.month_name(11), "December");
        assert_eq!(Locale::Fr.month_name(0), "janvier");
        assert_eq!(Locale::Fr.month_name(7), "août");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }
}
