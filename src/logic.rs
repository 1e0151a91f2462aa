use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UtilsError};

/// How a group of checks is combined.
///
/// The legacy build scripts pass these as integer codes: `1` is `Or`,
/// `2` is `And`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    Or,
    And,
}

impl Logic {
    pub fn code(self) -> u8 {
        match self {
            Logic::Or => 1,
            Logic::And => 2,
        }
    }
}

impl TryFrom<u8> for Logic {
    type Error = UtilsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Logic::Or),
            2 => Ok(Logic::And),
            other => Err(UtilsError::InvalidLogic(other.to_string())),
        }
    }
}

impl FromStr for Logic {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "or" | "1" => Ok(Logic::Or),
            "and" | "2" => Ok(Logic::And),
            _ => Err(UtilsError::InvalidLogic(s.to_string())),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::Or => write!(f, "OR"),
            Logic::And => write!(f, "AND"),
        }
    }
}

/// Read-only string lookup over a key/value mapping.
///
/// `None` means the key is missing or its value is null.
pub trait Fields {
    fn field(&self, key: &str) -> Option<&str>;
}

impl Fields for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Fields for HashMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_deref())
    }
}

impl Fields for HashMap<&str, &str> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

impl Fields for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Fields for BTreeMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_deref())
    }
}

fn is_empty_value(value: Option<&str>) -> bool {
    matches!(value, None | Some(""))
}

/// Check whether the selected `keys` of `mapping` are empty.
///
/// * `Logic::And` reports empty as soon as ANY selected value is empty or null.
/// * `Logic::Or` reports empty only when ALL selected values are empty or null.
///
/// A key absent from `mapping` counts as null.
pub fn check_empty<M, K>(logic: Logic, mapping: &M, keys: &[K]) -> bool
where
    M: Fields + ?Sized,
    K: AsRef<str>,
{
    match logic {
        Logic::And => keys
            .iter()
            .any(|key| is_empty_value(mapping.field(key.as_ref()))),
        Logic::Or => keys
            .iter()
            .all(|key| is_empty_value(mapping.field(key.as_ref()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_and_reports_any_empty() {
        let m = map(&[("a", "1"), ("b", "")]);
        assert!(check_empty(Logic::And, &m, &["a", "b"]));

        let m = map(&[("a", "1"), ("b", "2")]);
        assert!(!check_empty(Logic::And, &m, &["a", "b"]));
    }

    #[test]
    fn test_or_reports_all_empty() {
        let m = map(&[("a", ""), ("b", "")]);
        assert!(check_empty(Logic::Or, &m, &["a", "b"]));

        let m = map(&[("a", "1"), ("b", "")]);
        assert!(!check_empty(Logic::Or, &m, &["a", "b"]));
    }

    #[test]
    fn test_null_values_count_as_empty() {
        let mut m: HashMap<String, Option<String>> = HashMap::new();
        m.insert("PKGNAME".to_string(), Some("bash".to_string()));
        m.insert("PKGVER".to_string(), None);

        assert!(check_empty(Logic::And, &m, &["PKGNAME", "PKGVER"]));
        assert!(!check_empty(Logic::Or, &m, &["PKGNAME", "PKGVER"]));
        assert!(check_empty(Logic::Or, &m, &["PKGVER"]));
    }

    #[test]
    fn test_missing_key_counts_as_null() {
        let m = map(&[("a", "1")]);
        assert!(check_empty(Logic::And, &m, &["a", "missing"]));
        assert!(check_empty(Logic::Or, &m, &["missing"]));
    }

    #[test]
    fn test_only_selected_keys_inspected() {
        let m = map(&[("a", "1"), ("b", "")]);
        assert!(!check_empty(Logic::And, &m, &["a"]));
    }

    #[test]
    fn test_no_keys() {
        let m = map(&[("a", "")]);
        let none: [&str; 0] = [];
        assert!(!check_empty(Logic::And, &m, &none));
        assert!(check_empty(Logic::Or, &m, &none));
    }

    #[test]
    fn test_logic_from_code() {
        assert_eq!(Logic::try_from(1).unwrap(), Logic::Or);
        assert_eq!(Logic::try_from(2).unwrap(), Logic::And);
        assert!(matches!(
            Logic::try_from(3),
            Err(UtilsError::InvalidLogic(_))
        ));
        assert_eq!(Logic::And.code(), 2);
    }

    #[test]
    fn test_logic_from_str() {
        assert_eq!("OR".parse::<Logic>().unwrap(), Logic::Or);
        assert_eq!(" and ".parse::<Logic>().unwrap(), Logic::And);
        assert_eq!("2".parse::<Logic>().unwrap(), Logic::And);
        assert!(matches!(
            "xor".parse::<Logic>(),
            Err(UtilsError::InvalidLogic(_))
        ));
    }
}
