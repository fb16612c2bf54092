use std::fmt;
use std::rc::Rc;

/// The maximum number of candidate words ever listed at once.
pub const MAX_DISPLAYED_SOLUTIONS: usize = 50;

/// Above this many candidates, only the count is shown.
pub const MAX_LISTED_TOTAL: usize = 100;

/// The display policy for a candidate list.
///
/// Large result sets are summarized rather than listed in full: above
/// [`MAX_LISTED_TOTAL`] only the count is reported, and above
/// [`MAX_DISPLAYED_SOLUTIONS`] the list is cut off at the first
/// [`MAX_DISPLAYED_SOLUTIONS`] entries while still reporting the true total.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SolutionSummary {
    /// There are too many candidates to list; only the count is available.
    TooMany(usize),
    /// The first [`MAX_DISPLAYED_SOLUTIONS`] candidates, plus the true total.
    Truncated { shown: Vec<Rc<str>>, total: usize },
    /// Every remaining candidate.
    Complete(Vec<Rc<str>>),
}

impl SolutionSummary {
    /// Applies the display policy to a full candidate list, preserving its order.
    pub fn from_candidates(mut candidates: Vec<Rc<str>>) -> SolutionSummary {
        let total = candidates.len();
        if total > MAX_LISTED_TOTAL {
            return SolutionSummary::TooMany(total);
        }
        if total > MAX_DISPLAYED_SOLUTIONS {
            candidates.truncate(MAX_DISPLAYED_SOLUTIONS);
            return SolutionSummary::Truncated {
                shown: candidates,
                total,
            };
        }
        SolutionSummary::Complete(candidates)
    }

    /// Returns the true number of candidates, including any that aren't shown.
    pub fn total(&self) -> usize {
        match self {
            SolutionSummary::TooMany(total) => *total,
            SolutionSummary::Truncated { total, .. } => *total,
            SolutionSummary::Complete(words) => words.len(),
        }
    }

    /// Returns the candidates that should be listed. Empty when there are too many.
    pub fn shown(&self) -> &[Rc<str>] {
        match self {
            SolutionSummary::TooMany(_) => &[],
            SolutionSummary::Truncated { shown, .. } => shown,
            SolutionSummary::Complete(words) => words,
        }
    }
}

impl fmt::Display for SolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolutionSummary::TooMany(total) => {
                write!(f, "Too many solutions ({})", total)
            }
            SolutionSummary::Truncated { shown, total } => {
                write!(
                    f,
                    "Showing {} of {} possible solutions",
                    shown.len(),
                    total
                )?;
                write!(f, "\n{}", shown.join(", "))
            }
            SolutionSummary::Complete(words) => {
                write!(f, "Showing {} possible solutions", words.len())?;
                if words.is_empty() {
                    return Ok(());
                }
                write!(f, "\n{}", words.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn candidates(count: usize) -> Vec<Rc<str>> {
        (0..count)
            .map(|index| Rc::from(format!("word{:03}", index).as_str()))
            .collect()
    }

    #[test]
    fn small_result_lists_everything() {
        let summary = SolutionSummary::from_candidates(candidates(30));

        assert_eq!(summary.total(), 30);
        assert_eq!(summary.shown().len(), 30);
        assert!(summary
            .to_string()
            .starts_with("Showing 30 possible solutions"));
    }

    #[test]
    fn medium_result_is_truncated_to_fifty() {
        let summary = SolutionSummary::from_candidates(candidates(75));

        assert_eq!(summary.total(), 75);
        assert_eq!(summary.shown().len(), 50);
        // The first 50 entries are kept in order.
        assert_eq!(summary.shown()[0].as_ref(), "word000");
        assert_eq!(summary.shown()[49].as_ref(), "word049");
        assert!(summary
            .to_string()
            .starts_with("Showing 50 of 75 possible solutions"));
    }

    #[test]
    fn large_result_shows_count_only() {
        let summary = SolutionSummary::from_candidates(candidates(150));

        assert_eq!(summary.total(), 150);
        assert!(summary.shown().is_empty());
        assert_eq!(summary.to_string(), "Too many solutions (150)");
    }

    #[test]
    fn boundary_at_one_hundred_still_lists() {
        let summary = SolutionSummary::from_candidates(candidates(100));

        assert_matches!(summary, SolutionSummary::Truncated { total: 100, .. });
        assert_eq!(summary.shown().len(), 50);
    }

    #[test]
    fn boundary_at_fifty_lists_everything() {
        let summary = SolutionSummary::from_candidates(candidates(50));

        assert_matches!(summary, SolutionSummary::Complete(_));
        assert_eq!(summary.shown().len(), 50);
    }

    #[test]
    fn empty_result() {
        let summary = SolutionSummary::from_candidates(vec![]);

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.to_string(), "Showing 0 possible solutions");
    }
}
