/// String comparison strategy used by the matcher and recommender.
///
/// Scoring weights never depend on the strategy, so a stricter comparison can be swapped
/// in without touching the rubric.
pub trait Similarity: Send + Sync {
    /// Equality used for skill-to-skill comparisons.
    fn same(&self, left: &str, right: &str) -> bool;

    /// One-directional containment: `haystack` mentions `needle`.
    fn contains(&self, haystack: &str, needle: &str) -> bool;

    /// Containment in either direction.
    fn overlaps(&self, left: &str, right: &str) -> bool {
        self.contains(left, right) || self.contains(right, left)
    }

    /// Number of directions in which the two values contain each other (0, 1, or 2).
    fn containment_hits(&self, left: &str, right: &str) -> u32 {
        u32::from(self.contains(left, right)) + u32::from(self.contains(right, left))
    }
}

/// Case-insensitive equality and substring containment.
///
/// Substring containment produces false positives ("Engineering" matches "Software
/// Engineering"); blank values never match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveSubstring;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Similarity for NaiveSubstring {
    fn same(&self, left: &str, right: &str) -> bool {
        !is_blank(left) && left.to_lowercase() == right.to_lowercase()
    }

    fn contains(&self, haystack: &str, needle: &str) -> bool {
        if is_blank(haystack) || is_blank(needle) {
            return false;
        }
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_case_but_not_partial_words() {
        assert!(NaiveSubstring.same("react", "React"));
        assert!(!NaiveSubstring.same("React", "React Native"));
    }

    #[test]
    fn containment_is_case_insensitive_and_directional() {
        assert!(NaiveSubstring.contains("Software Engineering", "engineering"));
        assert!(!NaiveSubstring.contains("engineering", "Software Engineering"));
        assert!(NaiveSubstring.overlaps("engineering", "Software Engineering"));
    }

    #[test]
    fn identical_values_hit_in_both_directions() {
        assert_eq!(NaiveSubstring.containment_hits("Data Science", "data science"), 2);
        assert_eq!(NaiveSubstring.containment_hits("Data", "Data Science"), 1);
        assert_eq!(NaiveSubstring.containment_hits("Design", "Data Science"), 0);
    }

    #[test]
    fn blank_values_never_match() {
        assert!(!NaiveSubstring.same("", ""));
        assert!(!NaiveSubstring.contains("Web Development", ""));
        assert!(!NaiveSubstring.overlaps("  ", "Web Development"));
        assert_eq!(NaiveSubstring.containment_hits("", ""), 0);
    }
}
