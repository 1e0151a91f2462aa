use regex::Regex;

use crate::error::{Result, UtilsError};
use crate::logic::Logic;

/// A set of regular expressions matched against the start of a subject.
///
/// Patterns are anchored at the beginning of the subject only, so `b` does
/// not match `abc` but `ab` does, with trailing text ignored.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Compile every pattern up front
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| compile_anchored(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Test `subject` against the group, combining results with `logic`
    pub fn matches(&self, subject: &str, logic: Logic) -> bool {
        match logic {
            Logic::Or => self.patterns.iter().any(|re| re.is_match(subject)),
            Logic::And => self.patterns.iter().all(|re| re.is_match(subject)),
        }
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!(r"\A(?:{})", pattern)).map_err(|source| UtilsError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Match several patterns against `subject` in one go.
///
/// Patterns are compiled lazily in order, so a bad pattern after the
/// deciding one is never reached.
pub fn group_match<S: AsRef<str>>(patterns: &[S], subject: &str, logic: Logic) -> Result<bool> {
    for pattern in patterns {
        let matched = compile_anchored(pattern.as_ref())?.is_match(subject);
        match (logic, matched) {
            (Logic::Or, true) => return Ok(true),
            (Logic::And, false) => return Ok(false),
            _ => {}
        }
    }

    Ok(logic == Logic::And)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_any_pattern() {
        assert!(group_match(&["^a.*"], "abc", Logic::Or).unwrap());
        assert!(group_match(&["z", "ab"], "abc", Logic::Or).unwrap());
        assert!(!group_match(&["z", "y"], "abc", Logic::Or).unwrap());
    }

    #[test]
    fn test_and_every_pattern() {
        assert!(!group_match(&["^a.*", "^z.*"], "abc", Logic::And).unwrap());
        assert!(group_match(&["a", "ab", "abc"], "abc", Logic::And).unwrap());
    }

    #[test]
    fn test_anchored_at_start_only() {
        assert!(!group_match(&["b"], "abc", Logic::Or).unwrap());
        assert!(group_match(&["ab"], "abcdef", Logic::Or).unwrap());
    }

    #[test]
    fn test_empty_pattern_list() {
        let none: [&str; 0] = [];
        assert!(!group_match(&none, "abc", Logic::Or).unwrap());
        assert!(group_match(&none, "abc", Logic::And).unwrap());
    }

    #[test]
    fn test_alternation_stays_anchored() {
        // Without grouping, `x|b` would let `b` float
        assert!(!group_match(&["x|b"], "abc", Logic::Or).unwrap());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = group_match(&["("], "abc", Logic::Or).unwrap_err();
        assert!(matches!(err, UtilsError::Pattern { .. }));
    }

    #[test]
    fn test_short_circuit_skips_later_patterns() {
        assert!(group_match(&["a", "("], "abc", Logic::Or).unwrap());
        assert!(!group_match(&["z", "("], "abc", Logic::And).unwrap());
    }

    #[test]
    fn test_pattern_group_reuse() {
        let group = PatternGroup::new(&["lib.*", "python-.*"]).unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.matches("libxml2", Logic::Or));
        assert!(group.matches("python-lxml", Logic::Or));
        assert!(!group.matches("libxml2", Logic::And));
        assert!(!group.matches("bash", Logic::Or));
    }

    #[test]
    fn test_pattern_group_rejects_bad_pattern() {
        assert!(PatternGroup::new(&["ok", "[unclosed"]).is_err());
    }
}
