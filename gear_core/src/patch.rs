//! Patch numbers - ordered release markers for install gating
//!
//! Patch numbering is decimal, not semver: `6.05` comes before `6.1`.
//! The fractional part is stored in hundredths so derived ordering is
//! correct without any float comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A release patch number such as `6.05` or `7.1`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Patch {
    major: u16,
    hundredths: u8,
}

/// Error parsing a patch number from its dotted string form
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid patch number: '{0}'")]
pub struct ParsePatchError(String);

impl Patch {
    /// Create a patch from a major version and the fractional part in
    /// hundredths (`Patch::new(6, 15)` is patch 6.15, `Patch::new(6, 10)`
    /// is patch 6.1).
    pub fn new(major: u16, hundredths: u8) -> Self {
        Patch { major, hundredths }
    }

    pub fn major(&self) -> u16 {
        self.major
    }
}

impl FromStr for Patch {
    type Err = ParsePatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePatchError(s.to_string());

        let (major, frac) = match s.split_once('.') {
            Some((major, frac)) => (major, Some(frac)),
            None => (s, None),
        };
        let major: u16 = major.parse().map_err(|_| invalid())?;

        let hundredths = match frac {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    // A single digit is tenths: "6.1" is 6.10, not 6.01
                    1 => frac.parse::<u8>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<u8>().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Patch { major, hundredths })
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hundredths % 10 == 0 {
            write!(f, "{}.{}", self.major, self.hundredths / 10)
        } else {
            write!(f, "{}.{:02}", self.major, self.hundredths)
        }
    }
}

impl TryFrom<String> for Patch {
    type Error = ParsePatchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Patch> for String {
    fn from(patch: Patch) -> Self {
        patch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_ordering() {
        let p = |s: &str| s.parse::<Patch>().unwrap();
        assert!(p("6.0") < p("6.05"));
        assert!(p("6.05") < p("6.1"));
        assert!(p("6.1") < p("6.15"));
        assert!(p("6.15") < p("7.0"));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["6.0", "6.05", "6.1", "6.58", "7.0"] {
            let patch: Patch = s.parse().unwrap();
            assert_eq!(patch.to_string(), s);
        }
    }

    #[test]
    fn test_bare_major() {
        assert_eq!("7".parse::<Patch>().unwrap(), Patch::new(7, 0));
    }

    #[test]
    fn test_invalid_forms() {
        for s in ["", ".", "6.", "6.105", "a.b", "6.-1", "6.1.2"] {
            assert!(s.parse::<Patch>().is_err(), "accepted '{}'", s);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let patch: Patch = serde_json::from_str("\"6.1\"").unwrap();
        assert_eq!(patch, Patch::new(6, 10));
        assert_eq!(serde_json::to_string(&patch).unwrap(), "\"6.1\"");
    }
}
