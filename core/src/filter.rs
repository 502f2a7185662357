// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use regex::Regex;

/// Extracts the interesting part of an event summary.
///
/// The configured pattern must contain a capturing group; on a match the
/// summary is reduced to that group, on a non-match it passes through
/// unchanged. Without a configured pattern there simply is no filter.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    regex: Regex,
}

impl TitleFilter {
    /// Compiles the pattern, rejecting syntax errors and patterns without a
    /// capturing group.
    pub fn new(pattern: &str) -> Result<Self, TitleFilterError> {
        let regex =
            Regex::new(pattern).map_err(|e| TitleFilterError::InvalidPattern(e.to_string()))?;

        // captures_len counts the implicit whole-match group 0
        if regex.captures_len() < 2 {
            return Err(TitleFilterError::MissingGroup(pattern.to_string()));
        }

        Ok(Self { regex })
    }

    /// Applies the filter to one summary.
    ///
    /// Returns the text of the first capture group on a match and the
    /// summary unchanged on a non-match. A match that leaves group 1 empty
    /// (an alternation bypassing the group) is a configuration problem and
    /// reported as an error rather than swallowed.
    pub fn apply<'a>(&self, summary: &'a str) -> Result<&'a str, TitleFilterError> {
        match self.regex.captures(summary) {
            Some(caps) => match caps.get(1) {
                Some(m) => Ok(m.as_str()),
                None => Err(TitleFilterError::GroupNotMatched(
                    self.regex.as_str().to_string(),
                )),
            },
            None => Ok(summary),
        }
    }
}

/// Title filter misconfiguration, distinct from an ordinary non-match.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleFilterError {
    /// The pattern is not valid regex syntax.
    InvalidPattern(String),

    /// The pattern has no capturing group at all.
    MissingGroup(String),

    /// The pattern matched, but its first group did not take part in the
    /// match.
    GroupNotMatched(String),
}

impl fmt::Display for TitleFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(e) => write!(f, "invalid title pattern: {e}"),
            Self::MissingGroup(pattern) => {
                write!(f, "title pattern has no capturing group: {pattern}")
            }
            Self::GroupNotMatched(pattern) => {
                write!(f, "title pattern matched without its first group: {pattern}")
            }
        }
    }
}

impl std::error::Error for TitleFilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_reduces_to_first_group() {
        let filter = TitleFilter::new(r"Pack (.+)").unwrap();
        assert_eq!(filter.apply("Pack Gym Bag").unwrap(), "Gym Bag");
    }

    #[test]
    fn test_non_match_passes_through() {
        let filter = TitleFilter::new(r"Pack (.+)").unwrap();
        assert_eq!(filter.apply("Math Homework").unwrap(), "Math Homework");
    }

    #[test]
    fn test_pattern_without_group_is_rejected() {
        let err = TitleFilter::new(r"Pack .+").unwrap_err();
        assert!(matches!(err, TitleFilterError::MissingGroup(_)));
    }

    #[test]
    fn test_invalid_syntax_is_rejected() {
        let err = TitleFilter::new(r"Pack ((").unwrap_err();
        assert!(matches!(err, TitleFilterError::InvalidPattern(_)));
    }

    #[test]
    fn test_match_bypassing_the_group_is_an_error() {
        // "lesson" matches via the left alternative, group 1 stays empty
        let filter = TitleFilter::new(r"lesson|(homework)").unwrap();
        let err = filter.apply("lesson").unwrap_err();
        assert!(matches!(err, TitleFilterError::GroupNotMatched(_)));

        assert_eq!(filter.apply("homework").unwrap(), "homework");
    }
}
