/*
    Module implementing the classifier: an ordered rule table with a
    default category. Implements the Classify interface.

    Classification walks the rules in order and returns the category of
    the first rule whose value set contains the input; if no rule
    matches, the default category is returned. With disjoint value sets
    the walk order cannot affect the result, but first-match-wins is
    fixed here anyway so that a table with overlapping rules still
    classifies deterministically and reproducibly.

    The table is built once at startup and never mutated afterwards.
    Anything worth rejecting about a table (such as an unintended
    overlap) should be checked then, via is_disjoint, not on the
    classification path.
*/

use super::interface::Classify;
use super::rule::CategoryRule;

pub struct Classifier<C> {
    rules: Vec<CategoryRule<C>>,
    default: C,
}

impl<C: Copy> Classifier<C> {
    pub fn new(rules: Vec<CategoryRule<C>>, default: C) -> Self {
        Classifier { rules, default }
    }

    // Pairwise check across the table; intended as a one-time startup
    // validation for configurations that promise disjoint value sets.
    pub fn is_disjoint(&self) -> bool {
        self.rules
            .iter()
            .enumerate()
            .all(|(i, r1)| self.rules[(i + 1)..].iter().all(|r2| !r1.overlaps(r2)))
    }
}

impl<C: Copy> Classify for Classifier<C> {
    type Category = C;

    fn classify(&self, input: i64) -> C {
        for rule in &self.rules {
            if rule.matches(input) {
                return rule.category();
            }
        }
        self.default
    }

    fn default_category(&self) -> C {
        self.default
    }
    fn n_rules(&self) -> usize {
        self.rules.len()
    }
}

/*
    Unit Tests

    The generic machinery is tested here over a small local category
    enum; the day-of-week instantiation has its own tests in the
    weekday module.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::rule;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq, Copy, Clone)]
    enum Size {
        Small,
        Large,
        Unknown,
    }

    impl fmt::Display for Size {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            let label = match self {
                Size::Small => "small",
                Size::Large => "large",
                Size::Unknown => "unknown",
            };
            write!(f, "{}", label)
        }
    }

    fn size_classifier() -> Classifier<Size> {
        Classifier::new(
            vec![
                rule(Size::Small, &[1, 2, 3]),
                rule(Size::Large, &[10, 20, 30]),
            ],
            Size::Unknown,
        )
    }

    #[test]
    fn test_classify_first_matching_rule() {
        let m = size_classifier();
        assert_eq!(m.classify(1), Size::Small);
        assert_eq!(m.classify(3), Size::Small);
        assert_eq!(m.classify(20), Size::Large);
        assert_eq!(m.n_rules(), 2);
    }

    #[test]
    fn test_classify_default_on_no_match() {
        let m = size_classifier();
        assert_eq!(m.classify(0), Size::Unknown);
        assert_eq!(m.classify(4), Size::Unknown);
        assert_eq!(m.classify(-10), Size::Unknown);
        assert_eq!(m.default_category(), Size::Unknown);
    }

    #[test]
    fn test_classify_total_at_extremes() {
        let m = size_classifier();
        assert_eq!(m.classify(i64::MIN), Size::Unknown);
        assert_eq!(m.classify(i64::MAX), Size::Unknown);
    }

    #[test]
    fn test_classify_deterministic() {
        let m = size_classifier();
        for _ in 0..3 {
            assert_eq!(m.classify(2), Size::Small);
            assert_eq!(m.classify(7), Size::Unknown);
        }
    }

    #[test]
    fn test_empty_table_is_all_default() {
        let m: Classifier<Size> = Classifier::new(Vec::new(), Size::Unknown);
        assert_eq!(m.n_rules(), 0);
        assert_eq!(m.classify(1), Size::Unknown);
        assert_eq!(m.classify(0), Size::Unknown);
        assert!(m.is_disjoint());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        // Overlapping tables are not the intended configuration, but
        // when one is built the earlier rule must take the input.
        let m = Classifier::new(
            vec![
                rule(Size::Small, &[1, 2]),
                rule(Size::Large, &[2, 3]),
            ],
            Size::Unknown,
        );
        assert!(!m.is_disjoint());
        assert_eq!(m.classify(2), Size::Small);
        assert_eq!(m.classify(3), Size::Large);
    }

    #[test]
    fn test_is_disjoint() {
        assert!(size_classifier().is_disjoint());
    }

    #[test]
    fn test_classify_labeled() {
        let m = size_classifier();
        assert_eq!(m.classify_labeled(1), (Size::Small, "small".to_owned()));
        assert_eq!(m.classify_labeled(99), (Size::Unknown, "unknown".to_owned()));
    }

    #[test]
    fn test_classify_stream() {
        let m = size_classifier();
        let strm = vec![1, 10, 5].into_iter();
        assert_eq!(
            m.classify_stream(strm).collect::<Vec<Size>>(),
            vec![Size::Small, Size::Large, Size::Unknown],
        );
        let empty = vec![].into_iter();
        assert_eq!(m.classify_stream(empty).collect::<Vec<Size>>(), vec![]);
    }
}
