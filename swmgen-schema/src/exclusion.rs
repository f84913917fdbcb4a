//! Entities the generator never emits bindings for.

/// Reserved entity names.
const EXCLUDED: [&str; 5] = ["malfunction", "table", "service", "subscriber", "test"];

/// Membership test against the fixed exclusion set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusionFilter;

impl ExclusionFilter {
    /// Returns true if no bindings may be generated for `name`.
    ///
    /// Exact, case-sensitive comparison.
    #[must_use]
    pub fn is_excluded(name: &str) -> bool {
        EXCLUDED.contains(&name)
    }

    /// Returns the excluded entity names.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &EXCLUDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_names() {
        for name in ["malfunction", "table", "service", "subscriber", "test"] {
            assert!(ExclusionFilter::is_excluded(name), "{name} should be excluded");
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!ExclusionFilter::is_excluded("Service"));
        assert!(!ExclusionFilter::is_excluded("services"));
        assert!(!ExclusionFilter::is_excluded(" service"));
        assert!(!ExclusionFilter::is_excluded("serv"));
        assert!(!ExclusionFilter::is_excluded(""));
        assert!(!ExclusionFilter::is_excluded("queue"));
    }

    #[test]
    fn test_names() {
        assert_eq!(ExclusionFilter::names().len(), 5);
    }
}
